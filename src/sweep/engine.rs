//! The sweep engine
//!
//! Orchestrates the full combinatorial evaluation: for each beam, each
//! load, and each **ordered** material pair (segment assignment is
//! directional, so (A, B) and (B, A) are distinct combinations and
//! self-pairs are included), evaluates the composite-beam model over the
//! beam's sample grid and emits one [`EvaluationPoint`] per sample.
//!
//! # Algorithm
//!
//! 1. Validate the configuration and the three collections
//! 2. For each beam: acquire its transition point T once (re-used by every
//!    combination touching the beam), build its sample grid
//! 3. For each (load, material1, material2): build a [`CompositeBeam`]
//!    and evaluate it at every grid position
//! 4. Emit records beam-major, then load, then material1, then material2,
//!    then ascending position
//!
//! Evaluations within a combination are independent; above the
//! [parallel threshold](crate::sweep::parallel_threshold) the grid is
//! evaluated with Rayon and collected in order, so parallelism never
//! changes the output stream.

use std::collections::HashMap;

use crate::library::{Beam, BeamLibrary, Load, Material};
use crate::model::{CompositeBeam, DeflectionModel};
use crate::sweep::{
    position_grid, EvaluationPoint, SweepConfiguration, SweepResult, TransitionProvider,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Combinatorial sweep over a beam library
///
/// # Example
///
/// ```rust
/// use beam_rs::library::BeamLibrary;
/// use beam_rs::sweep::{MidspanTransitions, SweepConfiguration, SweepEngine};
///
/// # fn main() -> Result<(), String> {
/// let engine = SweepEngine::new(SweepConfiguration::with_step(0.5));
/// let result = engine.run(&BeamLibrary::standard(), &MidspanTransitions)?;
/// assert!(!result.is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct SweepEngine {
    config: SweepConfiguration,
}

impl SweepEngine {
    /// Create an engine with the given sampling configuration
    pub fn new(config: SweepConfiguration) -> Self {
        Self { config }
    }

    /// The engine's sampling configuration
    pub fn config(&self) -> &SweepConfiguration {
        &self.config
    }

    /// Run the full sweep
    ///
    /// Transition points are acquired from `transitions` once per beam,
    /// before any evaluation of that beam begins; the captured values are
    /// returned on the result so downstream consumers (plotting) reuse
    /// them instead of re-acquiring.
    ///
    /// # Errors
    ///
    /// - any of the three collections is empty (the error names it)
    /// - the configuration step is not positive and finite
    /// - the transition provider fails for a beam
    pub fn run(
        &self,
        library: &BeamLibrary,
        transitions: &dyn TransitionProvider,
    ) -> Result<SweepResult, String> {
        // ====== Step 1: Validation ======

        self.config.validate()?;
        check_collections(library)?;

        // ====== Step 2: Sweep ======

        let mut records: Vec<EvaluationPoint> = Vec::new();
        let mut transition_points: HashMap<String, f64> = HashMap::new();

        for beam in library.beams() {
            // One transition point per beam, shared across every
            // load/material combination of that beam.
            let t = transitions.transition_point(beam)?;
            transition_points.insert(beam.name().to_string(), t);

            let grid = position_grid(beam.length(), self.config.step);
            let inertia = beam.moment_of_inertia();

            for load in library.loads() {
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

                        evaluate_combination(
                            &model,
                            &grid,
                            beam,
                            load,
                            material1,
                            material2,
                            &mut records,
                        );
                    }
                }
            }
        }

        // ====== Step 3: Build Result ======

        let mut result = SweepResult::new(records, transition_points);

        result.add_metadata("step", &self.config.step.to_string());
        result.add_metadata("beams", &library.beams().len().to_string());
        result.add_metadata("materials", &library.materials().len().to_string());
        result.add_metadata("loads", &library.loads().len().to_string());

        Ok(result)
    }

    /// Number of records a sweep over `library` will emit
    ///
    /// B beams × W loads × M² ordered material pairs × per-beam grid
    /// length (grids differ per beam since spans differ).
    pub fn expected_records(&self, library: &BeamLibrary) -> usize {
        let pairs = library.materials().len() * library.materials().len();
        let loads = library.loads().len();

        library
            .beams()
            .iter()
            .map(|beam| position_grid(beam.length(), self.config.step).len())
            .sum::<usize>()
            * loads
            * pairs
    }
}

/// Verify that no collection is empty, naming the offender.
fn check_collections(library: &BeamLibrary) -> Result<(), String> {
    if library.beams().is_empty() {
        return Err("No beams defined in the library; nothing to sweep".to_string());
    }
    if library.loads().is_empty() {
        return Err("No loads defined in the library; nothing to sweep".to_string());
    }
    if library.materials().is_empty() {
        return Err("No materials defined in the library; nothing to sweep".to_string());
    }
    Ok(())
}

/// Evaluate one (beam, load, material pair) combination over the grid,
/// appending records in ascending-position order.
fn evaluate_combination(
    model: &CompositeBeam,
    grid: &[f64],
    beam: &Beam,
    load: &Load,
    material1: &Material,
    material2: &Material,
    records: &mut Vec<EvaluationPoint>,
) {
    let make_point = |&x: &f64| EvaluationPoint {
        beam: beam.name().to_string(),
        load: load.name().to_string(),
        material1: material1.name().to_string(),
        material2: material2.name().to_string(),
        position: x,
        deflection: model.deflection(x),
        slope_degrees: model.slope_degrees(x),
    };

    // Above the threshold the grid is evaluated in parallel; the indexed
    // extend preserves grid order, so the emitted stream is identical
    // either way.
    #[cfg(feature = "parallel")]
    if grid.len() > crate::sweep::parallel_threshold() {
        records.par_extend(grid.par_iter().map(&make_point));
        return;
    }

    records.extend(grid.iter().map(&make_point));
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::SectionProfile;
    use crate::sweep::{FixedTransitions, MidspanTransitions};

    fn small_library() -> BeamLibrary {
        let mut library = BeamLibrary::new();
        library.add_beam(Beam::new(
            "Girder",
            4.0,
            SectionProfile::Rectangular { width: 0.1, height: 0.1 },
        ));
        library.add_material(Material::new("Steel", 2.0e11));
        library.add_material(Material::new("Aluminum", 7.0e10));
        library.add_load(Load::new("Service", 1000.0));
        library
    }

    fn coarse_engine() -> SweepEngine {
        SweepEngine::new(SweepConfiguration::with_step(1.0))
    }

    #[test]
    fn test_cardinality_matches_expectation() {
        let library = small_library();
        let engine = coarse_engine();

        let result = engine.run(&library, &MidspanTransitions).unwrap();

        // 1 beam × 1 load × 2² pairs × 5 grid points (0,1,2,3,4)
        assert_eq!(engine.expected_records(&library), 20);
        assert_eq!(result.len(), 20);
    }

    #[test]
    fn test_emission_ordering() {
        let library = small_library();
        let result = coarse_engine().run(&library, &MidspanTransitions).unwrap();

        // Material pairs in ordered-product order, positions ascending
        // within each pair.
        let pairs: Vec<(String, String)> = result
            .records
            .iter()
            .step_by(5)
            .map(|r| (r.material1.clone(), r.material2.clone()))
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("Steel".to_string(), "Steel".to_string()),
                ("Steel".to_string(), "Aluminum".to_string()),
                ("Aluminum".to_string(), "Steel".to_string()),
                ("Aluminum".to_string(), "Aluminum".to_string()),
            ]
        );

        for chunk in result.records.chunks(5) {
            let positions: Vec<f64> = chunk.iter().map(|r| r.position).collect();
            assert_eq!(positions, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        }
    }

    #[test]
    fn test_empty_collections_are_named() {
        let engine = coarse_engine();

        let empty = BeamLibrary::new();
        let err = engine.run(&empty, &MidspanTransitions).unwrap_err();
        assert!(err.contains("No beams"), "{}", err);

        let mut no_loads = BeamLibrary::new();
        no_loads.add_beam(small_library().beams()[0].clone());
        no_loads.add_material(Material::new("Steel", 2.0e11));
        let err = engine.run(&no_loads, &MidspanTransitions).unwrap_err();
        assert!(err.contains("No loads"), "{}", err);

        let mut no_materials = BeamLibrary::new();
        no_materials.add_beam(small_library().beams()[0].clone());
        no_materials.add_load(Load::new("Service", 1000.0));
        let err = engine.run(&no_materials, &MidspanTransitions).unwrap_err();
        assert!(err.contains("No materials"), "{}", err);
    }

    #[test]
    fn test_transition_captured_once_per_beam() {
        let library = small_library();
        let transitions = FixedTransitions::from_pairs([("Girder", 1.5)]);

        let result = coarse_engine().run(&library, &transitions).unwrap();
        assert_eq!(result.transition_points.get("Girder"), Some(&1.5));
    }

    #[test]
    fn test_provider_failure_aborts_run() {
        let library = small_library();
        let transitions = FixedTransitions::from_pairs([("Girder", 9.0)]);

        assert!(coarse_engine().run(&library, &transitions).is_err());
    }

    #[test]
    fn test_metadata_is_populated() {
        let library = small_library();
        let result = coarse_engine().run(&library, &MidspanTransitions).unwrap();

        assert_eq!(result.metadata("step"), Some("1"));
        assert_eq!(result.metadata("beams"), Some("1"));
        assert_eq!(result.metadata("materials"), Some("2"));
        assert_eq!(result.metadata("loads"), Some("1"));
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let library = small_library();
        let engine = SweepEngine::new(SweepConfiguration::with_step(0.25));

        let sequential = {
            let _guard = crate::sweep::ThresholdGuard::save(usize::MAX);
            engine.run(&library, &MidspanTransitions).unwrap()
        };
        let parallel = {
            let _guard = crate::sweep::ThresholdGuard::save(1);
            engine.run(&library, &MidspanTransitions).unwrap()
        };

        assert_eq!(sequential.records, parallel.records);
    }
}
