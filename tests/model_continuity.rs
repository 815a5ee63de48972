//! Continuity and degeneracy properties of the composite-beam model
//!
//! These tests verify the derived correctness properties of the closed
//! forms: both curves must be continuous across the transition point, the
//! two-segment path must collapse to the single-material curve when both
//! moduli match, and the supported end must neither deflect nor rotate.

use beam_rs::model::{CompositeBeam, DeflectionModel};

mod common;
use common::relative_error;

// Reference scenario: 4 m span, I = 8.333e-6 m⁴, T = 1.5 m,
// steel segment 1 (2.0e11 Pa), aluminum segment 2 (7.0e10 Pa), 1 kN/m.
fn reference_model() -> CompositeBeam {
    CompositeBeam::new(2.0e11, 7.0e10, 8.333e-6, 4.0, 1.5, 1000.0)
}

#[test]
fn test_continuity_at_transition_reference_scenario() {
    let model = reference_model();
    let t = model.transition();

    // Just below T takes the segment-1 branch; T itself takes segment 2.
    let epsilon = 1e-9;

    let y_below = model.deflection(t - epsilon);
    let y_at = model.deflection(t);
    assert!(
        relative_error(y_at, y_below) < 1e-9,
        "Deflection jumps across T: {} vs {}",
        y_below,
        y_at
    );

    let slope_below = model.slope(t - epsilon);
    let slope_at = model.slope(t);
    assert!(
        relative_error(slope_at, slope_below) < 1e-9,
        "Slope jumps across T: {} vs {}",
        slope_below,
        slope_at
    );
}

#[test]
fn test_continuity_holds_across_parameter_ranges() {
    let spans = [1.0, 2.5, 4.0];
    let moduli = [7.0e10, 1.1e11, 2.0e11];

    for &length in &spans {
        for &e1 in &moduli {
            for &e2 in &moduli {
                let t = 0.4 * length;
                let model = CompositeBeam::new(e1, e2, 8.333e-6, length, t, 1000.0);

                let epsilon = length * 1e-12;
                assert!(
                    relative_error(model.deflection(t), model.deflection(t - epsilon)) < 1e-9
                );
                assert!(relative_error(model.slope(t), model.slope(t - epsilon)) < 1e-9);
            }
        }
    }
}

#[test]
fn test_supported_end_is_fixed() {
    let model = reference_model();
    assert!(model.deflection(0.0).abs() < 1e-12);
    assert!(model.slope(0.0).abs() < 1e-12);
}

#[test]
fn test_single_material_degeneracy_over_transition_choices() {
    // With E1 == E2 the transition point must be invisible: every choice
    // of T yields the same curve.
    let baseline = CompositeBeam::new(2.0e11, 2.0e11, 8.333e-6, 4.0, 2.0, 1000.0);

    for &t in &[0.1, 1.0, 1.9, 3.0, 3.9] {
        let model = CompositeBeam::new(2.0e11, 2.0e11, 8.333e-6, 4.0, t, 1000.0);

        for i in 0..=40 {
            let x = 4.0 * (i as f64) / 40.0;
            assert!(
                relative_error(model.deflection(x), baseline.deflection(x)) < 1e-9,
                "T = {} changes deflection at x = {}",
                t,
                x
            );
            assert!(
                relative_error(model.slope(x), baseline.slope(x)) < 1e-9,
                "T = {} changes slope at x = {}",
                t,
                x
            );
        }
    }
}

#[test]
fn test_slope_reported_in_degrees_at_output_boundary() {
    let model = reference_model();
    let x = 3.0;
    assert!(relative_error(model.slope_degrees(x), model.slope(x).to_degrees()) < 1e-12);
}

#[test]
fn test_model_is_thread_safe() {
    // The model is pure and Sync: concurrent evaluation must agree with
    // sequential evaluation.
    use std::thread;

    let model = reference_model();
    let expected: Vec<f64> = (0..8).map(|i| model.deflection(0.5 * i as f64)).collect();

    let computed: Vec<f64> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let model_ref = &model;
                scope.spawn(move || model_ref.deflection(0.5 * i as f64))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(computed, expected);
}
