//! Static plot generation for deflection sweep results
//!
//! This module uses the `plotters` library to generate static images
//! (PNG, SVG) of angular-deflection curve families: for each beam and
//! load, one curve per ordered material pair.
//!
//! # Features
//!
//! - **Library-driven**: pass the beam library and captured transition
//!   points, get one file per (beam, load)
//! - **Customizable**: PlotConfig for colors, labels, sizes
//! - **Midspan fallback**: a beam with no captured transition point is
//!   plotted with T = L/2 instead of failing
//!
//! # Example
//!
//! ```rust,ignore
//! use beam_rs::output::visualization::{plot_slope_curves, PlotConfig};
//!
//! // After a sweep
//! let written = plot_slope_curves(
//!     &library,
//!     &result.transition_points,
//!     "plots",
//!     None,
//! )?;
//! println!("{} plot files written", written.len());
//! ```

use plotters::prelude::*;
use std::collections::HashMap;
use std::error::Error;
use std::path::PathBuf;

use crate::library::BeamLibrary;
use crate::model::{CompositeBeam, DeflectionModel};
use crate::sweep::{position_grid, DEFAULT_STEP};

// =================================================================================================
// Configuration
// =================================================================================================

/// Configuration for customizing plots
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Plot title prefix (beam and load names are appended)
/// - `xlabel`, `ylabel`: Axis labels
/// - `pair_colors`: Optional colors for material pairs (one per pair)
/// - `background`: Background color
/// - `line_width`: Line thickness in pixels
/// - `show_grid`: Whether to show grid lines
/// - `step`: Sample step for the plotted curves \[m\]
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title prefix (default: "Angular Deflection")
    pub title: String,

    /// X-axis label (default: "Position along beam x (m)")
    pub xlabel: String,

    /// Y-axis label (default: "Angular Deflection θ(x) (degrees)")
    pub ylabel: String,

    /// Optional colors for material-pair curves (one per pair)
    ///
    /// If None, uses the default palette with wraparound.
    pub pair_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,

    /// Sample step for curve evaluation \[m\] (default: 0.0025)
    pub step: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Angular Deflection".to_string(),
            xlabel: "Position along beam x (m)".to_string(),
            ylabel: "Angular Deflection θ(x) (degrees)".to_string(),
            pair_colors: None,
            background: WHITE,
            line_width: 2,
            show_grid: true,
            step: DEFAULT_STEP,
        }
    }
}

impl PlotConfig {
    /// Create config with custom pair colors
    pub fn pair_colors(colors: Vec<RGBColor>) -> Self {
        let mut config = Self::default();
        config.pair_colors = Some(colors);
        config
    }

    /// Get color for the material pair at index i
    ///
    /// Uses custom colors if provided, otherwise falls back to the default
    /// palette with wraparound.
    fn get_pair_color(&self, pair_index: usize) -> RGBColor {
        if let Some(ref colors) = self.pair_colors {
            if pair_index < colors.len() {
                return colors[pair_index];
            }
        }

        // Default palette
        let default_colors = vec![
            RED,
            BLUE,
            GREEN,
            MAGENTA,
            CYAN,
            BLACK,
            RGBColor(255, 165, 0),   // Orange
            RGBColor(128, 0, 128),   // Purple
            RGBColor(255, 192, 203), // Pink
            RGBColor(165, 42, 42),   // Brown
        ];

        default_colors[pair_index % default_colors.len()]
    }
}

// =================================================================================================
// Helper Functions
// =================================================================================================

/// Draw a family of curves sharing one x axis on any drawing area
fn draw_family_on_area<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    positions: &[f64],
    curves: &[Vec<f64>],
    labels: &[String],
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    <DB as DrawingBackend>::ErrorType: 'static,
{
    // Find global ranges
    let max_x = positions.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let mut max_value = f64::NEG_INFINITY;
    let mut min_value = f64::INFINITY;

    for curve in curves {
        for &v in curve {
            max_value = max_value.max(v);
            min_value = min_value.min(v);
        }
    }

    // Build margins (10% space); degenerate flat curves still get a band
    let mut value_range = max_value - min_value;
    if value_range == 0.0 {
        value_range = 1.0;
    }
    let y_min = min_value - 0.1 * value_range;
    let y_max = max_value + 0.1 * value_range;

    root.fill(&config.background)?;

    // Create chart
    let mut chart = ChartBuilder::on(root)
        .caption(&config.title, ("sans-serif", 40.0).into_font())
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..max_x, y_min..y_max)?;

    // Configure mesh
    let mut mesh = chart.configure_mesh();
    mesh.x_desc(&config.xlabel).y_desc(&config.ylabel);

    if config.show_grid {
        mesh.draw()?;
    } else {
        mesh.disable_mesh().draw()?;
    }

    // Draw one line per curve
    for (i, curve) in curves.iter().enumerate() {
        let color = config.get_pair_color(i);
        chart
            .draw_series(LineSeries::new(
                positions.iter().zip(curve.iter()).map(|(x, v)| (*x, *v)),
                color.stroke_width(config.line_width),
            ))?
            .label(&labels[i])
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(config.line_width))
            });
    }

    // Draw legend
    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Turn a name into something safe inside a file name
fn slug(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}

// =================================================================================================
// Plotting Functions
// =================================================================================================

/// Plot a family of curves over shared positions to a single file
///
/// This low-level function provides maximum flexibility by accepting raw
/// data arrays. For most use cases, prefer [`plot_slope_curves`] which
/// derives the curves from the beam library.
///
/// # Arguments
///
/// * `positions` - Shared x axis \[m\]
/// * `curves` - One value vector per curve
/// * `labels` - Legend labels, one per curve
/// * `output_path` - Output file path (.png or .svg)
/// * `configuration` - Optional PlotConfig
///
/// # Panics
///
/// Panics when curve and label counts differ, or a curve's length does
/// not match the position axis.
pub fn plot_curve_family(
    positions: &[f64],
    curves: &[Vec<f64>],
    labels: &[String],
    output_path: &str,
    configuration: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let owned_config = configuration.cloned().unwrap_or_default();
    let config = &owned_config;

    assert_eq!(curves.len(), labels.len(), "Curve and label counts must match");
    for curve in curves {
        assert_eq!(
            curve.len(),
            positions.len(),
            "Curve length must match position axis"
        );
    }

    // Create backend
    if output_path.ends_with(".svg") {
        let root = SVGBackend::new(output_path, (config.width, config.height)).into_drawing_area();
        draw_family_on_area(&root, positions, curves, labels, config)
    } else {
        let root =
            BitMapBackend::new(output_path, (config.width, config.height)).into_drawing_area();
        draw_family_on_area(&root, positions, curves, labels, config)
    }
}

/// Plot angular-deflection curve families for every beam in the library
///
/// For each (beam, load) combination, writes one image containing one
/// curve per ordered material pair, labeled `"Material1 & Material2"`.
/// A beam missing from `transitions` falls back to the midspan transition
/// T = L/2 rather than failing.
///
/// # Arguments
///
/// * `library` - Beam/material/load catalog
/// * `transitions` - Transition point per beam name (from a sweep result)
/// * `output_dir` - Directory for the image files (must exist)
/// * `configuration` - Optional PlotConfig
///
/// # Returns
///
/// The paths of the written files, in (beam, load) order.
///
/// # Errors
///
/// - any of the three collections is empty (the error names it)
/// - file writing or rendering fails
pub fn plot_slope_curves(
    library: &BeamLibrary,
    transitions: &HashMap<String, f64>,
    output_dir: &str,
    configuration: Option<&PlotConfig>,
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    if library.beams().is_empty() {
        return Err("No beams defined in the library; nothing to plot".into());
    }
    if library.loads().is_empty() {
        return Err("No loads defined in the library; nothing to plot".into());
    }
    if library.materials().is_empty() {
        return Err("No materials defined in the library; nothing to plot".into());
    }

    let owned_config = configuration.cloned().unwrap_or_default();
    let mut written = Vec::new();

    for beam in library.beams() {
        // Fall back to midspan when no transition point was captured.
        let t = transitions
            .get(beam.name())
            .copied()
            .unwrap_or(beam.length() / 2.0);

        let positions = position_grid(beam.length(), owned_config.step);
        let inertia = beam.moment_of_inertia();

        for load in library.loads() {
            let mut curves = Vec::new();
            let mut labels = Vec::new();

            for material1 in library.materials() {
                for material2 in library.materials() {
                    let model = CompositeBeam::new(
                        material1.elastic_modulus(),
                        material2.elastic_modulus(),
                        inertia,
                        beam.length(),
                        t,
                        load.magnitude(),
                    );

                    curves.push(positions.iter().map(|&x| model.slope_degrees(x)).collect());
                    labels.push(format!("{} & {}", material1.name(), material2.name()));
                }
            }

            let mut config = owned_config.clone();
            config.title = format!(
                "{}: {} ({})",
                owned_config.title,
                beam.name(),
                load.name()
            );

            let path = PathBuf::from(output_dir).join(format!(
                "{}_{}_slope.png",
                slug(beam.name()),
                slug(load.name())
            ));
            let path_str = path
                .to_str()
                .ok_or_else(|| format!("Non-UTF8 output path: {:?}", path))?
                .to_string();

            plot_curve_family(&positions, &curves, &labels, &path_str, Some(&config))?;
            written.push(path);
        }
    }

    Ok(written)
}

// =================================================================================================
// Tests
// =================================================================================================
