//! Example: Composite-Beam Deflection Study
//!
//! Runs the full combinatorial sweep over the built-in catalog and writes
//! both result artifacts:
//!
//! - CSV: one row per (beam, load, material pair, position)
//! - Plots: one angular-deflection image per (beam, load)
//!
//! **Physical System**:
//! - Simply supported beams under uniform load
//! - Two longitudinal material segments meeting at the transition point T
//! - Closed-form Euler-Bernoulli deflection and slope per segment
//!
//! **Catalog** (BeamLibrary::standard):
//! - Beams: Girder (4 m, 0.1×0.1 m rectangular), Shaft (2.5 m, ⌀0.08 m)
//! - Materials: Steel (200 GPa), Aluminum (70 GPa), Titanium (110 GPa)
//! - Loads: Service (1 kN/m), Peak (5 kN/m)

use beam_rs::{
    library::BeamLibrary,
    output::{export_sweep_csv, plot_slope_curves},
    sweep::{FixedTransitions, SweepConfiguration, SweepEngine},
};

use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("═══════════════════════════════════════════════════════");
    println!("  Composite-Beam Deflection Study");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Catalog ======

    let library = BeamLibrary::standard();

    println!("Catalog:");
    for beam in library.beams() {
        println!(
            "  Beam     : {} (L = {} m, I = {:.4e} m⁴)",
            beam.name(),
            beam.length(),
            beam.moment_of_inertia()
        );
    }
    for material in library.materials() {
        println!(
            "  Material : {} (E = {:.1e} Pa)",
            material.name(),
            material.elastic_modulus()
        );
    }
    for load in library.loads() {
        println!("  Load     : {} (w = {} N/m)", load.name(), load.magnitude());
    }

    // ====== Transition points ======

    // One point per beam; beams omitted here would make the sweep fail,
    // while the plots would fall back to midspan.
    let transitions = FixedTransitions::from_pairs([("Girder", 1.5), ("Shaft", 1.0)]);

    println!("\nTransition points:");
    println!("  Girder : T = 1.5 m");
    println!("  Shaft  : T = 1.0 m");

    // ====== Sweep configuration ======

    let configuration = SweepConfiguration::default();
    let engine = SweepEngine::new(configuration);

    println!("\nSweep:");
    println!("  Step             : {} m", configuration.step);
    println!("  Expected records : {}", engine.expected_records(&library));

    // ====== Run ======

    println!("\n═══════════════════════════════════════════════════════");
    println!("  Running Sweep: 2 Beams × 2 Loads × 3² Material Pairs");
    println!("═══════════════════════════════════════════════════════\n");

    let start = Instant::now();
    let result = engine.run(&library, &transitions)?;
    let elapsed = start.elapsed();

    println!("Sweep complete:");
    println!("  Records : {}", result.len());
    println!("  Elapsed : {:.2?}", elapsed);

    // ====== Export ======

    let output_dir = std::env::temp_dir().join("deflection_study");
    std::fs::create_dir_all(&output_dir)?;

    let csv_path = output_dir.join("deflection_results.csv");
    export_sweep_csv(
        &result,
        csv_path
            .to_str()
            .ok_or("Non-UTF8 temporary directory path")?,
        None,
    )?;
    println!("\nCSV written : {}", csv_path.display());

    let written = plot_slope_curves(
        &library,
        &result.transition_points,
        output_dir
            .to_str()
            .ok_or("Non-UTF8 temporary directory path")?,
        None,
    )?;

    println!("Plots written:");
    for path in &written {
        println!("  {}", path.display());
    }

    println!("\n═══════════════════════════════════════════════════════");
    println!("  Done");
    println!("═══════════════════════════════════════════════════════");

    Ok(())
}
