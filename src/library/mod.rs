//! Beam, material and load catalog
//!
//! This module provides the external collaborators of the sweep engine:
//! the entities being swept. All three collections are **ordered** and
//! read-only once loaded — iteration order determines output order, so
//! two runs over the same library produce byte-identical record streams.
//!
//! # Core Concepts
//!
//! - **Beam**: a named span with a length L \[m\] and a section profile
//!   from which the second moment of area I \[m⁴\] is derived
//! - **Material**: a named elastic modulus E \[Pa\]
//! - **Load**: a named uniformly distributed load magnitude w \[N/m\]
//! - **BeamLibrary**: the ordered container handing the three sets to
//!   the sweep engine
//!
//! # Example
//!
//! ```rust
//! use beam_rs::library::{Beam, BeamLibrary, Load, Material, SectionProfile};
//!
//! let mut library = BeamLibrary::new();
//! library.add_beam(Beam::new(
//!     "Girder",
//!     4.0,
//!     SectionProfile::Rectangular { width: 0.1, height: 0.1 },
//! ));
//! library.add_material(Material::new("Steel", 2.0e11));
//! library.add_load(Load::new("Service", 1000.0));
//!
//! assert_eq!(library.beams().len(), 1);
//! ```

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod section;
pub mod catalog;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use section::SectionProfile;
pub use catalog::{Beam, BeamLibrary, Load, Material};
