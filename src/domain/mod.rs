//! Domain types used throughout the calculator.
//!
//! This module defines:
//!
//! - input configuration enums (`Spacing`, `UnitSystem`)
//! - the stretch request shapes (`StretchRequest`, `StretchRange`)
//! - computed outputs (`DensitySnapshot`, `ExpansionRecord`)

pub mod types;

pub use types::*;
