//! Combinatorial sweep engine
//!
//! This module enumerates every (beam × load × ordered material pair)
//! combination of a [`BeamLibrary`](crate::library::BeamLibrary), samples
//! positions over each beam's span and evaluates the deflection model at
//! every sample, producing an ordered stream of [`EvaluationPoint`]
//! records.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs WHERE)
//!
//! 1. **Model** ([`CompositeBeam`](crate::model::CompositeBeam)) - WHAT
//!    value the curve takes at a position
//! 2. **Configuration** ([`SweepConfiguration`]) - HOW the span is
//!    sampled (step size)
//! 3. **Engine** ([`SweepEngine`]) - the enumeration itself: combinations,
//!    transition capture, sample loop
//!
//! ## Ordering Guarantee
//!
//! Records are emitted beam-major, then load, then material 1, then
//! material 2, then ascending position. The guarantee applies to the
//! **output stream**, not to computation order: evaluations within a
//! combination are independent and may run in parallel, followed by an
//! ordered collect.
//!
//! # Quick Start Example
//!
//! ```rust
//! use beam_rs::library::BeamLibrary;
//! use beam_rs::sweep::{SweepEngine, SweepConfiguration, MidspanTransitions};
//!
//! # fn main() -> Result<(), String> {
//! let library = BeamLibrary::standard();
//! let engine = SweepEngine::new(SweepConfiguration::default());
//!
//! let result = engine.run(&library, &MidspanTransitions)?;
//! assert_eq!(result.len(), engine.expected_records(&library));
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All engine methods return `Result<T, String>`:
//!
//! - Empty beam/material/load collection → error naming the collection
//!   (zero output, no panic)
//! - Invalid transition point → error from the transition provider before
//!   any evaluation of that beam
//! - Invalid configuration (non-positive step) → error from `validate()`

// =================================================================================================
// Module Declarations
// =================================================================================================
mod config;
mod engine;
mod grid;
mod transition;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// Deciding *when* to hand work off to Rayon is an execution concern, not a
// modeling concern. It therefore lives here (sweep) rather than in
// model/composite.rs.
//
// The threshold is stored in an AtomicUsize so that it can be changed at
// runtime (useful in benchmarks and tests) without requiring a mutex on
// every sweep. Relaxed ordering is sufficient: the value is a performance
// hint, not a synchronisation point.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of position samples above which the engine evaluates a
/// combination's sample grid in parallel.
///
/// The crossover is set at 1 000 samples. Below that point the overhead of
/// Rayon's thread-pool dispatch outweighs the per-sample work of the
/// closed-form evaluation. At the default 0.0025 m step, any span longer
/// than 2.5 m crosses the threshold.
const DEFAULT_PARALLEL_THRESHOLD: usize = 999;

/// Runtime-configurable parallel-execution threshold.
///
/// Read via [`parallel_threshold()`], written via [`set_parallel_threshold()`].
static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// The sweep engine uses sequential iteration when a beam's sample grid
/// contains fewer positions than this value, and switches to Rayon when it
/// contains more — but only when the crate is compiled with the `parallel`
/// feature.
///
/// # Example
///
/// ```rust
/// use beam_rs::sweep::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`. A zero-sample threshold would force
/// parallel dispatch on every single-sample grid, which is never the
/// intended behaviour.
///
/// # Example
///
/// ```rust
/// use beam_rs::sweep::{parallel_threshold, set_parallel_threshold};
///
/// let previous = parallel_threshold();
/// set_parallel_threshold(2048);
/// assert_eq!(parallel_threshold(), 2048);
///
/// // Restore so other tests are not affected.
/// set_parallel_threshold(previous);
/// ```
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// RAII guard that saves the current threshold on construction and restores
/// it on drop.
///
/// Only compiled in test builds. Prevents one test from leaking a modified
/// threshold value into the next.
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
}

#[cfg(test)]
impl ThresholdGuard {
    /// Set the threshold to `new_value` and return a guard that will
    /// restore the previous value on drop.
    pub(crate) fn save(new_value: usize) -> Self {
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        // Bypass the public setter so that restoring to any value never
        // panics mid-unwind.
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use config::{EvaluationPoint, SweepConfiguration, SweepResult, DEFAULT_STEP};
pub use engine::SweepEngine;
pub use grid::position_grid;
pub use transition::{FixedTransitions, MidspanTransitions, PromptTransitions, TransitionProvider};

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold_value() {
        assert_eq!(DEFAULT_PARALLEL_THRESHOLD, 999);
    }

    #[test]
    fn test_get_and_set_threshold() {
        let _guard = ThresholdGuard::save(500);
        assert_eq!(parallel_threshold(), 500);
    }

    #[test]
    #[should_panic(expected = "parallel threshold must be at least 1")]
    fn test_zero_threshold_panics() {
        set_parallel_threshold(0);
    }

    #[test]
    fn test_threshold_guard_restores_previous_value() {
        let before = parallel_threshold();
        {
            let _guard = ThresholdGuard::save(42);
            assert_eq!(parallel_threshold(), 42);
        }
        // Guard dropped — value must be back to what it was before.
        assert_eq!(parallel_threshold(), before);
    }

    #[test]
    fn test_threshold_is_visible_across_threads() {
        use std::thread;

        let _guard = ThresholdGuard::save(1234);

        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(parallel_threshold))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 1234);
        }
    }
}
