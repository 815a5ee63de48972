//! Output module for sweep results
//!
//! This module provides tools to output sweep results in various formats:
//! - **Visualization**: PNG/SVG slope-curve plots using plotters
//! - **Export**: CSV data export for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Plots and graphics
//! │   ├── mod.rs
//! │   └── slope_plots.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ## CSV Export
//!
//! ```rust,ignore
//! use beam_rs::output::export::export_sweep_csv;
//!
//! export_sweep_csv(&result, "deflection_results.csv", None)?;
//! ```
//!
//! ## Visualization
//!
//! ```rust,ignore
//! use beam_rs::output::visualization::plot_slope_curves;
//!
//! plot_slope_curves(&library, &result.transition_points, "plots", None)?;
//! ```
//!
//! # Design Philosophy
//!
//! The output module separates concerns:
//! - **Visualization**: for human interpretation (slope curve families)
//! - **Export**: for programmatic analysis (CSV)
//!
//! Both sub-modules consume the sweep's record stream; neither computes
//! anything beyond presentation.

pub mod export;
pub mod visualization;

// Re-export commonly used items for convenience
pub use export::{export_deflections_csv, export_sweep_csv, CsvConfig, CsvMetadata};
pub use visualization::{plot_curve_family, plot_slope_curves, PlotConfig};
