//! Endpoint-inclusive position grid
//!
//! Sampling a span by accumulating `x += step` drifts: after hundreds of
//! additions the last sample can overshoot or fall short of L, and whether
//! x = L is included depends on rounding. The generator here is
//! count-based instead: `x_i = min(i·step, L)`, which always includes the
//! right support exactly and never drifts past it.

/// Generate the sample positions over `[0, length]` at the given step.
///
/// The grid always starts at exactly `0.0` and ends at exactly `length`.
/// When `length` is an integer multiple of `step` the grid has
/// `length/step + 1` points; otherwise the last interior point is followed
/// by the clamped endpoint.
///
/// # Arguments
///
/// * `length` - Span length L \[m\], must be positive
/// * `step` - Sample step \[m\], must be positive
///
/// # Example
///
/// ```rust
/// use beam_rs::sweep::position_grid;
///
/// let grid = position_grid(4.0, 0.0025);
/// assert_eq!(grid.len(), 1601);
/// assert_eq!(grid[0], 0.0);
/// assert_eq!(*grid.last().unwrap(), 4.0);
/// ```
pub fn position_grid(length: f64, step: f64) -> Vec<f64> {
    debug_assert!(length > 0.0 && step > 0.0);

    let ratio = length / step;

    // When length/step is an integer up to rounding, i·step already lands
    // on L; taking ceil() of e.g. 40.000000000000007 would append a
    // duplicate endpoint.
    let intervals = if (ratio - ratio.round()).abs() < 1e-9 {
        ratio.round() as usize
    } else {
        ratio.ceil() as usize
    };

    (0..=intervals)
        .map(|i| (i as f64 * step).min(length))
        .collect()
}

// =================================================================================================
// Tests
// =================================================================================================
