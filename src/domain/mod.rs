//! Domain types shared by the registry, the engine, and the front-ends.
//!
//! This module defines:
//!
//! - the closed set of treatment specialists (`Specialist`)
//! - their static metadata (`SpecialistDescriptor`)
//! - per-submission request/outcome values (`CalculationRequest`, `CalculationOutcome`)

pub mod types;

pub use types::*;
