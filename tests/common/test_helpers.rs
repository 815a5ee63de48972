//! Helper functions for integration tests

use beam_rs::library::{Beam, BeamLibrary, Load, Material, SectionProfile};

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// The reference configuration used across the integration tests:
/// a 4 m girder with I = 8.333e-6 m⁴, steel and aluminum, 1 kN/m.
pub fn reference_library() -> BeamLibrary {
    let mut library = BeamLibrary::new();

    // 0.1 x 0.1 m square section: I = 8.333e-6 m⁴
    library.add_beam(Beam::new(
        "Girder",
        4.0,
        SectionProfile::Rectangular { width: 0.1, height: 0.1 },
    ));

    library.add_material(Material::new("Steel", 2.0e11));
    library.add_material(Material::new("Aluminum", 7.0e10));

    library.add_load(Load::new("Service", 1000.0));

    library
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }
}
