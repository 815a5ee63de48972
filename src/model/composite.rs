//! Two-segment composite beam closed forms
//!
//! A simply supported beam of length L carries a uniformly distributed
//! load w. The beam is made of two longitudinal segments: material 1
//! (modulus E1) from the left support to the transition point T, and
//! material 2 (modulus E2) from T to the right support. Both segments
//! share the same second moment of area I.
//!
//! # Piecewise Formulation
//!
//! For `0 <= x < T` the deflection follows the single-material form in E1:
//!
//! ```text
//! y1(x) = -w/(24·E1·I)·(L-x)⁴ - w·L³/(6·E1·I)·x + w·L⁴/(24·E1·I)
//! θ1(x) =  w/(6·E1·I)·(L-x)³ - w·L³/(6·E1·I)
//! ```
//!
//! For `T <= x <= L` the two-material form applies, with an integration
//! coefficient chosen so that deflection and slope match segment 1 at T:
//!
//! ```text
//! c     = -w/(6·I)·[ (L³-(L-T)³)/E1 + (L-T)³/E2 ]
//! θ2(x) =  w/(6·E2·I)·(L-x)³ + c
//! y2(x) = -w/(24·E2·I)·(L-x)⁴ + c·(x-T)
//!         + w/(24·E1·I)·(L⁴-(L-T)⁴-4·L³·T) + w/(24·E2·I)·(L-T)⁴
//! ```
//!
//! Continuity at x = T therefore holds by construction: both y and θ
//! agree exactly (to floating rounding) where the segments meet, and when
//! E1 == E2 the two-segment path collapses to the single-material curve
//! for every T.
//!
//! # Example
//!
//! ```rust
//! use beam_rs::model::{CompositeBeam, DeflectionModel};
//!
//! // Steel/aluminum girder, transition at 1.5 m
//! let beam = CompositeBeam::new(2.0e11, 7.0e10, 8.333e-6, 4.0, 1.5, 1000.0);
//!
//! // The supported end at x = 0 neither deflects nor rotates
//! assert!(beam.deflection(0.0).abs() < 1e-12);
//! assert!(beam.slope(0.0).abs() < 1e-12);
//! ```

use crate::model::DeflectionModel;

/// Simply supported two-segment composite beam under uniform load
///
/// Pure value type: construction validates the inputs once, evaluation is
/// stateless and safe to call concurrently.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompositeBeam {
    /// Elastic modulus of segment 1 \[Pa\]
    e1: f64,
    /// Elastic modulus of segment 2 \[Pa\]
    e2: f64,
    /// Second moment of area I \[m⁴\]
    i: f64,
    /// Span length L \[m\]
    length: f64,
    /// Transition point T \[m\], 0 < T < L
    transition: f64,
    /// Distributed load w \[N/m\]
    load: f64,
}

impl CompositeBeam {
    /// Create a new composite beam model
    ///
    /// # Arguments
    ///
    /// * `e1` - Elastic modulus of segment 1 \[Pa\]
    /// * `e2` - Elastic modulus of segment 2 \[Pa\]
    /// * `i` - Second moment of area \[m⁴\]
    /// * `length` - Span length L \[m\]
    /// * `transition` - Transition point T \[m\]
    /// * `load` - Distributed load w \[N/m\], any sign
    ///
    /// # Panics
    ///
    /// Panics when `e1`, `e2`, `i` or `length` is not strictly positive,
    /// or when `transition` is not strictly inside `(0, length)`.
    pub fn new(e1: f64, e2: f64, i: f64, length: f64, transition: f64, load: f64) -> Self {
        assert!(e1 > 0.0, "E1 must be positive, got {}", e1);
        assert!(e2 > 0.0, "E2 must be positive, got {}", e2);
        assert!(i > 0.0, "Moment of inertia must be positive, got {}", i);
        assert!(length > 0.0, "Length must be positive, got {}", length);
        assert!(
            transition > 0.0 && transition < length,
            "Transition point must lie strictly inside (0, {}), got {}",
            length,
            transition
        );

        Self {
            e1,
            e2,
            i,
            length,
            transition,
            load,
        }
    }

    /// Transition point T \[m\]
    pub fn transition(&self) -> f64 {
        self.transition
    }

    /// Distributed load w \[N/m\]
    pub fn load(&self) -> f64 {
        self.load
    }

    /// Integration coefficient of segment 2
    ///
    /// Chosen so that θ2(T) = θ1(T); the constant term of y2 then makes
    /// y2(T) = y1(T) as well.
    #[inline]
    fn continuity_coefficient(&self) -> f64 {
        let lt = self.length - self.transition;
        (-self.load / (6.0 * self.i))
            * ((self.length.powi(3) - lt.powi(3)) / self.e1 + lt.powi(3) / self.e2)
    }

    /// Deflection in segment 1, `0 <= x < T`
    #[inline]
    fn deflection_segment1(&self, x: f64) -> f64 {
        let (w, e1, i, l) = (self.load, self.e1, self.i, self.length);
        (-w / (24.0 * e1 * i)) * (l - x).powi(4) - (w * l.powi(3)) / (6.0 * e1 * i) * x
            + (w * l.powi(4)) / (24.0 * e1 * i)
    }

    /// Deflection in segment 2, `T <= x <= L`
    #[inline]
    fn deflection_segment2(&self, x: f64) -> f64 {
        let (w, e1, e2, i, l, t) = (self.load, self.e1, self.e2, self.i, self.length, self.transition);
        let c = self.continuity_coefficient();

        (-w / (24.0 * e2 * i)) * (l - x).powi(4)
            + c * (x - t)
            + (w / (24.0 * e1 * i)) * (l.powi(4) - (l - t).powi(4) - 4.0 * l.powi(3) * t)
            + (w / (24.0 * e2 * i)) * (l - t).powi(4)
    }

    /// Slope in segment 1, `0 <= x < T`
    #[inline]
    fn slope_segment1(&self, x: f64) -> f64 {
        let (w, e1, i, l) = (self.load, self.e1, self.i, self.length);
        (w / (6.0 * e1 * i)) * (l - x).powi(3) - (w * l.powi(3)) / (6.0 * e1 * i)
    }

    /// Slope in segment 2, `T <= x <= L`
    #[inline]
    fn slope_segment2(&self, x: f64) -> f64 {
        let (w, e2, i, l) = (self.load, self.e2, self.i, self.length);
        (w / (6.0 * e2 * i)) * (l - x).powi(3) + self.continuity_coefficient()
    }
}

impl DeflectionModel for CompositeBeam {
    fn length(&self) -> f64 {
        self.length
    }

    fn deflection(&self, x: f64) -> f64 {
        // Boundary convention: x == T belongs to segment 2. The segment-2
        // form evaluates to the segment-1 value there by construction.
        if x < self.transition {
            self.deflection_segment1(x)
        } else {
            self.deflection_segment2(x)
        }
    }

    fn slope(&self, x: f64) -> f64 {
        if x < self.transition {
            self.slope_segment1(x)
        } else {
            self.slope_segment2(x)
        }
    }

    fn name(&self) -> &str {
        "Two-segment composite beam"
    }

    fn description(&self) -> Option<&str> {
        Some(
            "Simply supported beam with a material change at a transition \
             point, under uniformly distributed load. Closed-form \
             Euler-Bernoulli deflection and slope.",
        )
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // Reference configuration: 4 m girder, square 0.1 m section,
    // steel segment 1 / aluminum segment 2, 1 kN/m.
    fn reference_beam() -> CompositeBeam {
        CompositeBeam::new(2.0e11, 7.0e10, 8.333e-6, 4.0, 1.5, 1000.0)
    }

    fn relative_error(actual: f64, expected: f64) -> f64 {
        if expected.abs() < 1e-10 {
            (actual - expected).abs()
        } else {
            (actual - expected).abs() / expected.abs()
        }
    }

    #[test]
    fn test_supported_end_boundary_values() {
        let beam = reference_beam();
        assert!(beam.deflection(0.0).abs() < 1e-12, "x = 0 must not deflect");
        assert!(beam.slope(0.0).abs() < 1e-12, "x = 0 must not rotate");

        // The far end carries the largest deflection magnitude.
        assert!(beam.deflection(4.0) < beam.deflection(2.0));
    }

    #[test]
    fn test_continuity_at_transition() {
        let beam = reference_beam();
        let t = beam.transition();

        let y1 = beam.deflection_segment1(t);
        let y2 = beam.deflection_segment2(t);
        assert!(
            relative_error(y2, y1) < 1e-9,
            "Deflection discontinuous at T: {} vs {}",
            y1,
            y2
        );

        let s1 = beam.slope_segment1(t);
        let s2 = beam.slope_segment2(t);
        assert!(
            relative_error(s2, s1) < 1e-9,
            "Slope discontinuous at T: {} vs {}",
            s1,
            s2
        );
    }

    #[test]
    fn test_single_material_degeneracy() {
        // With E1 == E2, the segment-2 path must reproduce the
        // single-material curve for every x and every T.
        for &t in &[0.5, 1.0, 2.0, 3.5] {
            let beam = CompositeBeam::new(2.0e11, 2.0e11, 8.333e-6, 4.0, t, 1000.0);
            for &x in &[t, t + 0.1, 2.0f64.max(t), 3.9, 4.0] {
                let two_segment = beam.deflection_segment2(x);
                let one_segment = beam.deflection_segment1(x);
                assert!(
                    relative_error(two_segment, one_segment) < 1e-9,
                    "Degeneracy failed at x={} T={}",
                    x,
                    t
                );

                let slope_two = beam.slope_segment2(x);
                let slope_one = beam.slope_segment1(x);
                assert!(relative_error(slope_two, slope_one) < 1e-9);
            }
        }
    }

    #[test]
    fn test_stiffer_second_segment_deflects_less() {
        let soft = CompositeBeam::new(2.0e11, 7.0e10, 8.333e-6, 4.0, 1.5, 1000.0);
        let stiff = CompositeBeam::new(2.0e11, 2.0e11, 8.333e-6, 4.0, 1.5, 1000.0);

        // Deflections are negative (downward); the softer beam sags more.
        let x = 2.5;
        assert!(soft.deflection(x) < stiff.deflection(x));
    }

    #[test]
    fn test_load_sign_flips_deflection() {
        let down = CompositeBeam::new(2.0e11, 7.0e10, 8.333e-6, 4.0, 1.5, 1000.0);
        let up = CompositeBeam::new(2.0e11, 7.0e10, 8.333e-6, 4.0, 1.5, -1000.0);

        let x = 2.0;
        assert!((down.deflection(x) + up.deflection(x)).abs() < 1e-15);
        assert!((down.slope(x) + up.slope(x)).abs() < 1e-15);
    }

    #[test]
    fn test_slope_degrees_conversion() {
        let beam = reference_beam();
        let x = 0.5;
        assert!(
            relative_error(beam.slope_degrees(x), beam.slope(x).to_degrees()) < 1e-12
        );
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let beam = reference_beam();
        let first = beam.deflection(1.234);
        let second = beam.deflection(1.234);
        assert_eq!(first, second);
    }

    #[test]
    #[should_panic(expected = "Transition point must lie strictly inside")]
    fn test_transition_at_support_rejected() {
        CompositeBeam::new(2.0e11, 7.0e10, 8.333e-6, 4.0, 0.0, 1000.0);
    }

    #[test]
    #[should_panic(expected = "Transition point must lie strictly inside")]
    fn test_transition_beyond_span_rejected() {
        CompositeBeam::new(2.0e11, 7.0e10, 8.333e-6, 4.0, 4.0, 1000.0);
    }

    #[test]
    #[should_panic(expected = "E2 must be positive")]
    fn test_invalid_modulus_rejected() {
        CompositeBeam::new(2.0e11, 0.0, 8.333e-6, 4.0, 1.5, 1000.0);
    }
}
