//! Adapter for the older calculator parameterization.
//!
//! The legacy interface describes the model through Hubble times rather than
//! density parameters:
//!
//! - `y_now` = 1/H0 (Gyr), the Hubble time now
//! - `y_inf` = 1/H(∞) (Gyr), the asymptotic Hubble time, so
//!   Ω_Λ = (y_now/y_inf)²
//! - `omega` = Ω₀, `s_eq` = equality redshift
//!
//! plus the stretch range in separate fields. Everything converts into a
//! `ModelConfig` and a `StretchRequest`; no separate computation path exists.
//!
//! The step field is always a positive subdivision count. The old interface's
//! other step conventions (negative `ds` as an absolute step size, zero `ds`
//! for a single point) are not carried over; callers convert to a count or an
//! explicit value list first.

use serde::{Deserialize, Serialize};

use crate::domain::{ExpansionRecord, Spacing, StretchRequest};
use crate::error::ExpansionError;
use crate::expansion;
use crate::model::{KMSMPSC_TO_GYR, ModelConfig, SurveyParameters};

/// CMB temperature assumed by the legacy interface (K).
const LEGACY_TEMPERATURE0: f64 = 2.725;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegacyInputs {
    /// Hubble time now, 1/H0 (Gyr).
    pub y_now: f64,
    /// Hubble time at infinity, 1/H(∞) (Gyr). Clamped up to `y_now`.
    pub y_inf: f64,
    /// Equality redshift (the legacy field is named for stretch but is used
    /// as a redshift throughout the old calculator).
    pub s_eq: f64,
    /// Total density parameter Ω₀.
    pub omega: f64,
    pub s_upper: f64,
    pub s_lower: f64,
    pub s_step: usize,
    pub exponential: bool,
}

/// Translate legacy inputs into the modern configuration and request.
pub fn convert_inputs(inputs: &LegacyInputs) -> (ModelConfig, StretchRequest) {
    // A universe cannot expand slower at infinity than Λ allows.
    let y_inf = inputs.y_inf.max(inputs.y_now);
    let ratio = inputs.y_now / y_inf;
    let omega_lambda0 = ratio * ratio;
    let h0 = 1.0 / inputs.y_now / KMSMPSC_TO_GYR;

    let config = ModelConfig::from_parameters(&SurveyParameters {
        h0,
        omega0: inputs.omega,
        omega_lambda0,
        z_eq: inputs.s_eq,
        temperature0: LEGACY_TEMPERATURE0,
    });

    let spacing = if inputs.exponential {
        Spacing::Exponential
    } else {
        Spacing::Linear
    };
    let request = StretchRequest::range(inputs.s_upper, inputs.s_lower, inputs.s_step, spacing);

    (config, request)
}

/// Legacy entry point: full expansion table.
pub fn calculate(inputs: &LegacyInputs) -> Result<Vec<ExpansionRecord>, ExpansionError> {
    let (config, request) = convert_inputs(inputs);
    expansion::calculate(&config, &request)
}

/// Legacy entry point: current age of the universe only.
pub fn calculate_age(inputs: &LegacyInputs) -> Result<f64, ExpansionError> {
    let (config, _) = convert_inputs(inputs);
    expansion::calculate_age(&config)
}
