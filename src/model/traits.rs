//! Deflection model trait
//!
//! This module defines the core API for deflection models:
//! - `DeflectionModel`: trait for all beam configurations that can be
//!   evaluated pointwise

/// Trait for deflection models
///
/// # Responsibility
///
/// Evaluates the deflection and slope closed forms of a beam configuration
/// at a single position. Does NOT enumerate positions or combinations
/// (that's the sweep engine's job).
///
/// # Purity
///
/// Implementations must be pure and stateless: the same `x` always yields
/// the same value, with no side effects. `Send + Sync` is required so the
/// sweep engine can evaluate the same model from multiple threads without
/// locking.
///
/// # Domain
///
/// Models are defined on `0 <= x <= length()`. Behavior outside that
/// interval is unspecified; implementations do not range-check.
pub trait DeflectionModel: Send + Sync {
    /// Span length L \[m\] of the modeled beam
    fn length(&self) -> f64;

    /// Deflection y(x) \[m\] at position `x` \[m\]
    fn deflection(&self, x: f64) -> f64;

    /// Slope θ(x) \[rad\] at position `x` \[m\]
    ///
    /// Slopes are computed in radians throughout; conversion to degrees
    /// happens only at the output boundary.
    fn slope(&self, x: f64) -> f64;

    /// Slope θ(x) \[degrees\] at position `x` \[m\]
    ///
    /// Convenience for sinks that report degrees (CSV export, plots).
    fn slope_degrees(&self, x: f64) -> f64 {
        self.slope(x).to_degrees()
    }

    /// Name of the model (used for display and result metadata)
    fn name(&self) -> &str;

    /// Description of the model (optional)
    fn description(&self) -> Option<&str> {
        None
    }
}
