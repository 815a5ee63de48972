//! Cross-section profiles and their second moments of area
//!
//! A beam's resistance to bending enters the Euler-Bernoulli equations only
//! through the second moment of area I of its cross-section. This module
//! provides the classical closed forms for the common profiles so that a
//! beam can be described by its geometry rather than by a raw I value.

/// Cross-section profile of a beam
///
/// All dimensions are in meters. I is computed about the horizontal
/// neutral axis (bending in the vertical plane).
///
/// # Example
///
/// ```rust
/// use beam_rs::library::SectionProfile;
///
/// let section = SectionProfile::Rectangular { width: 0.1, height: 0.1 };
/// let i = section.moment_of_inertia();
/// assert!((i - 8.333333333333334e-6).abs() < 1e-18);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SectionProfile {
    /// Solid rectangle: I = b·h³ / 12
    Rectangular {
        /// Width b \[m\]
        width: f64,
        /// Height h \[m\]
        height: f64,
    },

    /// Solid circle: I = π·d⁴ / 64
    Circular {
        /// Diameter d \[m\]
        diameter: f64,
    },

    /// Symmetric I-beam: outer rectangle minus the two void rectangles
    /// either side of the web
    IBeam {
        /// Flange width b \[m\]
        flange_width: f64,
        /// Flange thickness t_f \[m\]
        flange_thickness: f64,
        /// Web thickness t_w \[m\]
        web_thickness: f64,
        /// Overall depth h \[m\]
        depth: f64,
    },
}

impl SectionProfile {
    /// Second moment of area I \[m⁴\] about the neutral axis
    pub fn moment_of_inertia(&self) -> f64 {
        match *self {
            SectionProfile::Rectangular { width, height } => {
                width * height.powi(3) / 12.0
            }
            SectionProfile::Circular { diameter } => {
                std::f64::consts::PI * diameter.powi(4) / 64.0
            }
            SectionProfile::IBeam {
                flange_width,
                flange_thickness,
                web_thickness,
                depth,
            } => {
                let inner_depth = depth - 2.0 * flange_thickness;
                let outer = flange_width * depth.powi(3) / 12.0;
                let voids = (flange_width - web_thickness) * inner_depth.powi(3) / 12.0;
                outer - voids
            }
        }
    }

    /// Check that every dimension is strictly positive and, for I-beams,
    /// that the voids do not exceed the outer rectangle
    pub fn is_valid(&self) -> bool {
        match *self {
            SectionProfile::Rectangular { width, height } => width > 0.0 && height > 0.0,
            SectionProfile::Circular { diameter } => diameter > 0.0,
            SectionProfile::IBeam {
                flange_width,
                flange_thickness,
                web_thickness,
                depth,
            } => {
                flange_width > 0.0
                    && flange_thickness > 0.0
                    && web_thickness > 0.0
                    && depth > 2.0 * flange_thickness
                    && flange_width > web_thickness
            }
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangular_inertia() {
        // 0.1 x 0.1 square: I = 0.1 * 0.1^3 / 12 = 8.333e-6 m^4
        let section = SectionProfile::Rectangular { width: 0.1, height: 0.1 };
        let expected = 0.1 * 0.1f64.powi(3) / 12.0;
        assert_eq!(section.moment_of_inertia(), expected);
        assert!(section.is_valid());
    }

    #[test]
    fn test_circular_inertia() {
        let section = SectionProfile::Circular { diameter: 0.2 };
        let expected = std::f64::consts::PI * 0.2f64.powi(4) / 64.0;
        assert_eq!(section.moment_of_inertia(), expected);
    }

    #[test]
    fn test_ibeam_inertia_less_than_outer_rectangle() {
        let ibeam = SectionProfile::IBeam {
            flange_width: 0.15,
            flange_thickness: 0.01,
            web_thickness: 0.008,
            depth: 0.3,
        };
        let outer = SectionProfile::Rectangular { width: 0.15, height: 0.3 };
        assert!(ibeam.moment_of_inertia() > 0.0);
        assert!(ibeam.moment_of_inertia() < outer.moment_of_inertia());
        assert!(ibeam.is_valid());
    }

    #[test]
    fn test_invalid_sections() {
        assert!(!SectionProfile::Rectangular { width: 0.0, height: 0.1 }.is_valid());
        assert!(!SectionProfile::Circular { diameter: -0.1 }.is_valid());
        assert!(!SectionProfile::IBeam {
            flange_width: 0.1,
            flange_thickness: 0.06,
            web_thickness: 0.008,
            depth: 0.1, // depth <= 2 * flange thickness
        }
        .is_valid());
    }
}
