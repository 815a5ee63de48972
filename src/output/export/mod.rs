//! Data export for sweep results

pub mod csv;

pub use csv::{export_deflections_csv, export_sweep_csv, CsvConfig, CsvMetadata};
