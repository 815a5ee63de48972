//! CSV export functionality for deflection sweep results
//!
//! This module writes the sweep's record stream to CSV (Comma-Separated
//! Values), compatible with Excel, Python pandas, MATLAB, and most data
//! analysis tools.
//!
//! # Column Schema
//!
//! ```csv
//! Beam,Load,Material1,Material2,x (m),y(x) (m),theta(x) (degrees)
//! ```
//!
//! Position is rounded to 4 decimal places and slope to 6; deflection is
//! written at **full precision**. The asymmetry is deliberate: downstream
//! tooling consumes this exact column format, so deviating from it here
//! would break reproducibility of existing result files.
//!
//! # Quick Examples
//!
//! ## Minimal Export
//!
//! ```rust,ignore
//! use beam_rs::output::export::export_sweep_csv;
//!
//! export_sweep_csv(&result, "deflection_results.csv", None)?;
//! ```
//!
//! ## With Metadata
//!
//! ```rust,ignore
//! use beam_rs::output::export::{export_sweep_csv, CsvConfig, CsvMetadata};
//!
//! let metadata = CsvMetadata {
//!     step: Some(0.0025),
//!     beam_count: Some(2),
//!     ..Default::default()
//! };
//!
//! let config = CsvConfig::default().with_metadata(metadata);
//! export_sweep_csv(&result, "deflection_results.csv", Some(&config))?;
//! ```
//!
//! **Output** (`deflection_results.csv`):
//! ```csv
//! # Composite-Beam Deflection Sweep
//! # Generated: 2026-08-30T15:30:00Z
//! # Step: 0.0025 m
//! # Beams: 2
//! #
//! Beam,Load,Material1,Material2,x (m),y(x) (m),theta(x) (degrees)
//! Girder,Service,Steel,Steel,0.0000,0,-0.038789
//! ...
//! ```

use std::error::Error;
use std::fs::File;
use std::io::Write;

use crate::sweep::{EvaluationPoint, SweepResult};

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Fields
///
/// - `delimiter`: Column separator (default: ',')
/// - `decimal_separator`: Decimal point character (default: '.')
/// - `position_precision`: Decimal places for x (default: 4)
/// - `slope_precision`: Decimal places for θ (default: 6)
/// - `include_metadata`: Add header comments with sweep parameters
/// - `metadata`: Sweep metadata to include
///
/// Deflection y is always written unrounded; see the module docs for why.
#[derive(Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Decimal places for the position column (default: 4)
    pub position_precision: usize,

    /// Decimal places for the slope column (default: 6)
    pub slope_precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            position_precision: 4,
            slope_precision: 6,
            include_metadata: false,
            metadata: None,
        }
    }
}

impl CsvConfig {
    /// Create config with European CSV format (semicolon, comma for decimal)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// All fields are optional. Only non-None fields will be included in the
/// CSV header.
#[derive(Clone, Default)]
pub struct CsvMetadata {
    /// Sample step \[m\]
    pub step: Option<f64>,

    /// Number of beams swept
    pub beam_count: Option<usize>,

    /// Number of materials swept
    pub material_count: Option<usize>,

    /// Number of loads swept
    pub load_count: Option<usize>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Build metadata from a finished sweep's own metadata entries
    pub fn from_sweep(result: &SweepResult) -> Self {
        Self {
            step: result.metadata("step").and_then(|s| s.parse().ok()),
            beam_count: result.metadata("beams").and_then(|s| s.parse().ok()),
            material_count: result.metadata("materials").and_then(|s| s.parse().ok()),
            load_count: result.metadata("loads").and_then(|s| s.parse().ok()),
            custom: Vec::new(),
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments to file
fn write_metadata_header(file: &mut File, metadata: &CsvMetadata) -> Result<(), Box<dyn Error>> {
    writeln!(file, "# Composite-Beam Deflection Sweep")?;

    // Timestamp (current time)
    let now = chrono::Utc::now();
    writeln!(file, "# Generated: {}", now.to_rfc3339())?;

    if let Some(step) = metadata.step {
        writeln!(file, "# Step: {} m", step)?;
    }
    if let Some(beams) = metadata.beam_count {
        writeln!(file, "# Beams: {}", beams)?;
    }
    if let Some(materials) = metadata.material_count {
        writeln!(file, "# Materials: {}", materials)?;
    }
    if let Some(loads) = metadata.load_count {
        writeln!(file, "# Loads: {}", loads)?;
    }

    // Custom parameters
    for (key, value) in &metadata.custom {
        writeln!(file, "# {}: {}", key, value)?;
    }

    // Separator
    writeln!(file, "#")?;

    Ok(())
}

/// Format number with the given precision and decimal separator
fn format_rounded(value: f64, precision: usize, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

/// Format number at full precision with the configured decimal separator
fn format_full(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{}", value);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export evaluation records to CSV
///
/// Writes one row per record, in the order given (the sweep engine's
/// emission order is already the required row order).
///
/// # Arguments
///
/// * `records` - Evaluation records, already ordered
/// * `output_path` - Output file path
/// * `configuration` - Optional CSV configuration (uses default if None)
///
/// # Errors
///
/// - Empty record set
/// - NaN or Inf values in any record
/// - File creation errors
///
/// # Example
///
/// ```rust,ignore
/// export_deflections_csv(&result.records, "deflection_results.csv", None)?;
/// ```
pub fn export_deflections_csv(
    records: &[EvaluationPoint],
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    // ============================= Validation =============================

    if records.is_empty() {
        return Err("Empty data: record set must not be empty".into());
    }

    for record in records {
        if !record.position.is_finite()
            || !record.deflection.is_finite()
            || !record.slope_degrees.is_finite()
        {
            return Err(format!(
                "Invalid data: NaN or Inf detected in record for beam '{}' at x = {}",
                record.beam, record.position
            )
            .into());
        }
    }

    // ============================= Configuration ==========================

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    // ============================= Open File ==============================

    let mut file = File::create(output_path)?;

    // ============================= Write Metadata =========================

    if configuration.include_metadata {
        if let Some(metadata) = &configuration.metadata {
            write_metadata_header(&mut file, metadata)?;
        }
    }

    // ============================= Write Header ===========================

    let d = configuration.delimiter;
    writeln!(
        file,
        "Beam{}Load{}Material1{}Material2{}x (m){}y(x) (m){}theta(x) (degrees)",
        d, d, d, d, d, d
    )?;

    // ============================= Write Data =============================

    for record in records {
        let x = format_rounded(record.position, configuration.position_precision, configuration);
        // Deflection stays unrounded; see module docs.
        let y = format_full(record.deflection, configuration);
        let theta = format_rounded(record.slope_degrees, configuration.slope_precision, configuration);

        writeln!(
            file,
            "{}{}{}{}{}{}{}{}{}{}{}{}{}",
            record.beam, d, record.load, d, record.material1, d, record.material2, d, x, d, y, d, theta
        )?;
    }

    Ok(())
}

/// Export a full sweep result to CSV, deriving the metadata header from
/// the sweep's own metadata
///
/// # Example
///
/// ```rust,ignore
/// export_sweep_csv(&result, "deflection_results.csv", None)?;
/// ```
pub fn export_sweep_csv(
    result: &SweepResult,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    let owned;
    let configuration = match configuration {
        Some(config) => config,
        None => {
            owned = CsvConfig::default().with_metadata(CsvMetadata::from_sweep(result));
            &owned
        }
    };

    export_deflections_csv(&result.records, output_path, Some(configuration))
}

// =================================================================================================
// Tests
// =================================================================================================
