//! ΛCDM model: physical constants, configuration, survey presets and density
//! evaluation.
//!
//! Everything here is algebraic in the stretch value s; the integrator and the
//! calculator consume only the small pure functions exposed by `Model`.

pub mod config;
pub mod density;
pub mod surveys;

pub use config::*;
pub use density::*;
pub use surveys::*;
