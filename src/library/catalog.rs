//! Beam, material and load entities and the library container
//!
//! Entities are immutable once loaded. The library keeps each collection
//! in insertion order; the sweep engine relies on that order for its
//! output-ordering guarantee.

use crate::library::SectionProfile;

// =================================================================================================
// Entities
// =================================================================================================

/// A simply supported beam: identity, span length and cross-section
///
/// # Example
///
/// ```rust
/// use beam_rs::library::{Beam, SectionProfile};
///
/// let beam = Beam::new(
///     "Girder",
///     4.0,
///     SectionProfile::Rectangular { width: 0.1, height: 0.1 },
/// );
/// assert_eq!(beam.name(), "Girder");
/// assert!(beam.moment_of_inertia() > 0.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Beam {
    name: String,
    /// Span length L \[m\]
    length: f64,
    /// Cross-section, from which I is derived
    section: SectionProfile,
}

impl Beam {
    /// Create a new beam
    ///
    /// # Panics
    ///
    /// Panics when `length <= 0` or the section has non-positive dimensions.
    pub fn new(name: impl Into<String>, length: f64, section: SectionProfile) -> Self {
        assert!(length > 0.0, "Beam length must be positive, got {}", length);
        assert!(section.is_valid(), "Section dimensions must be positive");

        Self {
            name: name.into(),
            length,
            section,
        }
    }

    /// Beam identity
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Span length L \[m\]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Cross-section profile
    pub fn section(&self) -> &SectionProfile {
        &self.section
    }

    /// Second moment of area I \[m⁴\], delegated to the section profile
    pub fn moment_of_inertia(&self) -> f64 {
        self.section.moment_of_inertia()
    }
}

/// A material: identity and elastic modulus
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    name: String,
    /// Elastic modulus E \[Pa\]
    elastic_modulus: f64,
}

impl Material {
    /// Create a new material
    ///
    /// # Panics
    ///
    /// Panics when `elastic_modulus <= 0`.
    pub fn new(name: impl Into<String>, elastic_modulus: f64) -> Self {
        assert!(
            elastic_modulus > 0.0,
            "Elastic modulus must be positive, got {}",
            elastic_modulus
        );

        Self {
            name: name.into(),
            elastic_modulus,
        }
    }

    /// Material identity
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Elastic modulus E \[Pa\]
    pub fn elastic_modulus(&self) -> f64 {
        self.elastic_modulus
    }
}

/// A uniformly distributed load: identity and magnitude
///
/// The magnitude may carry any sign; positive values act downward in the
/// sign convention of the deflection equations.
#[derive(Clone, Debug, PartialEq)]
pub struct Load {
    name: String,
    /// Distributed load magnitude w \[N/m\]
    magnitude: f64,
}

impl Load {
    /// Create a new load
    pub fn new(name: impl Into<String>, magnitude: f64) -> Self {
        Self {
            name: name.into(),
            magnitude,
        }
    }

    /// Load identity
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Distributed load magnitude w \[N/m\]
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }
}

// =================================================================================================
// Beam Library
// =================================================================================================

/// Ordered catalog of beams, materials and loads
///
/// # Ordering
///
/// Each collection preserves insertion order. The sweep engine's output
/// ordering guarantee (beam-major, then load, then material pair) is
/// defined in terms of this order.
///
/// # Example
///
/// ```rust
/// use beam_rs::library::BeamLibrary;
///
/// let library = BeamLibrary::standard();
/// assert!(!library.beams().is_empty());
/// assert!(!library.materials().is_empty());
/// assert!(!library.loads().is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct BeamLibrary {
    beams: Vec<Beam>,
    materials: Vec<Material>,
    loads: Vec<Load>,
}

impl BeamLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// A small built-in catalog for demos and exploratory sweeps
    ///
    /// Two beams (rectangular and circular sections), three common
    /// structural materials and two load levels.
    pub fn standard() -> Self {
        let mut library = Self::new();

        library.add_beam(Beam::new(
            "Girder",
            4.0,
            SectionProfile::Rectangular { width: 0.1, height: 0.1 },
        ));
        library.add_beam(Beam::new(
            "Shaft",
            2.5,
            SectionProfile::Circular { diameter: 0.08 },
        ));

        library.add_material(Material::new("Steel", 2.0e11));
        library.add_material(Material::new("Aluminum", 7.0e10));
        library.add_material(Material::new("Titanium", 1.1e11));

        library.add_load(Load::new("Service", 1000.0));
        library.add_load(Load::new("Peak", 5000.0));

        library
    }

    /// Append a beam (kept in insertion order)
    pub fn add_beam(&mut self, beam: Beam) {
        self.beams.push(beam);
    }

    /// Append a material (kept in insertion order)
    pub fn add_material(&mut self, material: Material) {
        self.materials.push(material);
    }

    /// Append a load (kept in insertion order)
    pub fn add_load(&mut self, load: Load) {
        self.loads.push(load);
    }

    /// Beams, in insertion order
    pub fn beams(&self) -> &[Beam] {
        &self.beams
    }

    /// Materials, in insertion order
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Loads, in insertion order
    pub fn loads(&self) -> &[Load] {
        &self.loads
    }

    /// Look up a beam by name
    pub fn beam(&self, name: &str) -> Option<&Beam> {
        self.beams.iter().find(|b| b.name() == name)
    }

    /// True when any of the three collections is empty
    pub fn has_empty_collection(&self) -> bool {
        self.beams.is_empty() || self.materials.is_empty() || self.loads.is_empty()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
