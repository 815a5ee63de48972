//! Visualization of deflection sweep results

pub mod slope_plots;

pub use slope_plots::{plot_curve_family, plot_slope_curves, PlotConfig};
