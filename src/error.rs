//! Error type for the expansion calculator.
//!
//! Failure kinds are kept distinct so callers can tell a bad request apart
//! from a model that left its valid domain mid-integration. The binary maps
//! each kind to a stable exit code.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ExpansionError {
    /// The stretch request could not produce a usable grid (inverted bounds,
    /// non-positive step count, non-descending or non-positive values, ...).
    #[error("Invalid stretch request: {0}")]
    InvalidStretchRequest(String),

    /// E²(s) evaluated to NaN/∞ before the finite part of the requested range
    /// was covered. Running off the end of the tail integral is normal
    /// termination and never reported here.
    #[error(
        "Density became non-finite at s = {stretch} before the requested range was covered \
         (model configuration is outside its valid domain)"
    )]
    NonFiniteDensity { stretch: f64 },

    /// Output rendering/serialization failed (CLI layer only).
    #[error("Failed to render output: {0}")]
    Render(String),
}

impl ExpansionError {
    /// Process exit code for the `cex` binary.
    pub fn exit_code(&self) -> u8 {
        match self {
            ExpansionError::InvalidStretchRequest(_) => 2,
            ExpansionError::NonFiniteDensity { .. } => 3,
            ExpansionError::Render(_) => 4,
        }
    }
}
