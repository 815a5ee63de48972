//! Deflection models
//!
//! This module provides traits and implementations for beam deflection
//! models. A deflection model encapsulates the closed-form equations for
//! a beam configuration and evaluates them at a position.
//!
//! # Architecture
//!
//! Deflection models are **separate from the sweep engine**:
//! - The model provides the **equations** (closed forms)
//! - The sweep engine provides the **enumeration** (combinations and
//!   sample positions)
//!
//! This separation allows:
//! - Same model evaluated by sweeps, plots or one-off queries
//! - Same sweep over different models (composite, single-material, custom)
//!
//! # Available Models
//!
//! - [`CompositeBeam`]: simply supported two-segment beam where the
//!   material changes from E1 to E2 at a transition point T

// module declaration
pub mod traits;
pub mod composite;

// re-export commonly used types for convenience
pub use composite::CompositeBeam;
pub use traits::DeflectionModel;
