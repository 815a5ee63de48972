//! Sweep configuration and result types
//!
//! # Design Philosophy
//!
//! This module follows the same pattern throughout the crate:
//! - `SweepConfiguration` defines HOW the span is sampled
//! - `EvaluationPoint` is the atomic output record
//! - `SweepResult` carries the ordered record stream plus metadata for
//!   diagnostics and reproducibility

use std::collections::HashMap;

/// Default sample step \[m\] along the beam span.
pub const DEFAULT_STEP: f64 = 0.0025;

// =================================================================================================
// Sweep configuration
// =================================================================================================

/// Configuration for the sweep engine
///
/// # Examples
///
/// ```rust
/// use beam_rs::sweep::SweepConfiguration;
///
/// // Default sampling: 0.0025 m
/// let config = SweepConfiguration::default();
/// assert!(config.validate().is_ok());
///
/// // Coarser sampling for quick exploration
/// let coarse = SweepConfiguration::with_step(0.05);
/// assert!(coarse.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepConfiguration {
    /// Sample step along the span \[m\]
    pub step: f64,
}

impl Default for SweepConfiguration {
    fn default() -> Self {
        Self { step: DEFAULT_STEP }
    }
}

impl SweepConfiguration {
    /// Create a configuration with a custom sample step
    pub fn with_step(step: f64) -> Self {
        Self { step }
    }

    /// Validate that the configuration is usable
    pub fn validate(&self) -> Result<(), String> {
        if !self.step.is_finite() {
            return Err(format!("Sample step must be finite, got {}", self.step));
        }
        if self.step <= 0.0 {
            return Err(format!("Sample step must be positive, got {}", self.step));
        }
        Ok(())
    }
}

// =================================================================================================
// Evaluation point (atomic output record)
// =================================================================================================

/// One evaluated sample of one combination
///
/// The atomic record of the sweep: identifies the combination (beam, load,
/// directional material pair), the position, and the two computed values.
/// Records are independent of each other — no cross-record invariant
/// exists beyond the emission ordering.
#[derive(Clone, Debug, PartialEq)]
pub struct EvaluationPoint {
    /// Beam identity
    pub beam: String,
    /// Load identity
    pub load: String,
    /// Material of segment 1 (left of the transition point)
    pub material1: String,
    /// Material of segment 2 (right of the transition point)
    pub material2: String,
    /// Position along the span x \[m\]
    pub position: f64,
    /// Deflection y(x) \[m\]
    pub deflection: f64,
    /// Slope θ(x) \[degrees\] — converted at the output boundary
    pub slope_degrees: f64,
}

// =================================================================================================
// Sweep result
// =================================================================================================

/// Ordered result of a full sweep
///
/// Holds the record stream in emission order, the transition point that
/// was captured for each beam (one per beam, shared by every combination
/// touching it), and string metadata for diagnostics.
///
/// # Example
///
/// ```rust,ignore
/// let result = engine.run(&library, &transitions)?;
/// println!("{} records", result.len());
/// println!("step = {}", result.metadata("step").unwrap());
/// ```
#[derive(Clone, Debug, Default)]
pub struct SweepResult {
    /// Records in emission order (beam-major, load, material1, material2,
    /// ascending position)
    pub records: Vec<EvaluationPoint>,

    /// Transition point per beam name, captured once before sweeping the
    /// beam
    pub transition_points: HashMap<String, f64>,

    /// Diagnostic metadata (step, collection sizes, ...)
    metadata: HashMap<String, String>,
}

impl SweepResult {
    /// Create a result from records and captured transition points
    pub fn new(records: Vec<EvaluationPoint>, transition_points: HashMap<String, f64>) -> Self {
        Self {
            records,
            transition_points,
            metadata: HashMap::new(),
        }
    }

    /// Number of records produced
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the sweep produced no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Add a metadata entry
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Look up a metadata entry
    pub fn metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
