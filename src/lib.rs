//! beam-rs: Composite-Beam Deflection Analysis
//!
//! A framework for computing static deflection and angular deflection (slope)
//! curves of simply supported two-segment composite beams under uniformly
//! distributed loads, using closed-form Euler-Bernoulli equations.
//!
//! # Architecture
//!
//! beam-rs is built on two core principles:
//!
//! 1. **Separation of Model and Sweep**
//!    - The deflection model evaluates the closed forms (what the value is)
//!    - The sweep engine enumerates combinations and samples positions
//!      (where to evaluate)
//!
//! 2. **Providers as ordered collections**
//!    - Beams, materials and loads come from a [`library::BeamLibrary`]
//!      with stable iteration order, so the output stream is deterministic
//!      and reproducible run to run.
//!
//! # Quick Start
//!
//! ```rust
//! use beam_rs::library::BeamLibrary;
//! use beam_rs::sweep::{SweepEngine, SweepConfiguration, MidspanTransitions};
//!
//! # fn main() -> Result<(), String> {
//! // 1. Load the beam/material/load catalog
//! let library = BeamLibrary::standard();
//!
//! // 2. Pick a transition-point policy (here: midspan for every beam)
//! let transitions = MidspanTransitions;
//!
//! // 3. Run the combinatorial sweep
//! let engine = SweepEngine::new(SweepConfiguration::default());
//! let result = engine.run(&library, &transitions)?;
//!
//! // 4. Access results
//! println!("Sweep completed!");
//! println!("Records produced: {}", result.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`library`]: Beam, material and load catalog (providers)
//! - [`model`]: Piecewise deflection/slope closed forms (the model)
//! - [`sweep`]: Combinatorial sweep over beams × loads × material pairs
//! - [`output`]: Result export (CSV) and visualization (plots)

// Core modules
pub mod library;
pub mod model;
pub mod sweep;
pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use beam_rs::prelude::*;
    //! ```
    pub use crate::library::{Beam,
                             BeamLibrary,
                             Load,
                             Material,
                             SectionProfile};
    pub use crate::model::{CompositeBeam,
                           DeflectionModel};
    pub use crate::sweep::{EvaluationPoint,
                           FixedTransitions,
                           MidspanTransitions,
                           SweepConfiguration,
                           SweepEngine,
                           SweepResult,
                           TransitionProvider};
}
