//! Density evaluation: the dimensionless Friedmann equation and the two
//! integration kernels.
//!
//! The squared dimensionless Hubble rate is
//!
//! `E²(s) = Ω_Λ + Ω_k s² + Ω_m s³ + Ω_r s⁴`
//!
//! valid for s ≥ 0 (s = 0 gives E² = Ω_Λ, the future asymptote). Evaluation
//! never panics anywhere on [0, ∞); at very large s the polynomial may
//! legitimately overflow, and callers must treat a non-finite result as "no
//! information available" rather than an error — the tail integrator uses
//! exactly that as its termination signal.
//!
//! Numerical notes:
//! - Fractional densities `Ω_x(s) = Ω_x0 s^k / E²` divide two very large (deep
//!   past) or cancelling (far future) quantities; the precision floor from
//!   double-precision cancellation is about 1e-10 relative. No mitigation
//!   beyond f64 arithmetic is applied.

use crate::domain::{DensitySnapshot, ExpansionRecord, StretchRequest};
use crate::error::ExpansionError;
use crate::expansion;
use crate::model::config::ModelConfig;

/// A configured model, ready to evaluate densities and expansion histories.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Model {
    config: ModelConfig,
}

impl Model {
    pub fn new(config: ModelConfig) -> Self {
        Self { config }
    }

    /// Build a model straight from a survey preset.
    pub fn from_survey(survey: crate::model::Survey) -> Self {
        Self::new(ModelConfig::from_parameters(&survey.parameters()))
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// E²(s), the squared dimensionless Hubble rate.
    pub fn e_squared_at(&self, s: f64) -> f64 {
        let c = &self.config;
        let s2 = s * s;
        c.omega_lambda0 + c.omega_k0 * s2 + c.omega_m0 * s2 * s + c.omega_rad0 * s2 * s2
    }

    /// H(s) in Gyr⁻¹.
    pub fn hubble_at(&self, s: f64) -> f64 {
        self.config.h0_gyr * self.e_squared_at(s).sqrt()
    }

    /// Per-stretch density breakdown.
    pub fn snapshot_at(&self, s: f64) -> DensitySnapshot {
        let c = &self.config;
        let e_squared = self.e_squared_at(s);
        let s2 = s * s;
        let h = c.h0_gyr * e_squared.sqrt();
        let h_seconds = h / c.gyr_to_seconds;
        DensitySnapshot {
            h,
            omega_m: c.omega_m0 * s2 * s / e_squared,
            omega_lambda: c.omega_lambda0 / e_squared,
            omega_rad: c.omega_rad0 * s2 * s2 / e_squared,
            temperature: c.temperature0 * s,
            rho_crit: c.rho_const * h_seconds * h_seconds,
        }
    }

    /// Distance kernel `TH(s) = 1/(H0 √E²(s))` (Gly per unit stretch).
    ///
    /// Integrable from s = 0 whenever Ω_Λ > 0.
    pub fn th(&self, s: f64) -> f64 {
        1.0 / (self.config.h0_gyr * self.e_squared_at(s).sqrt())
    }

    /// Time kernel `THs(s) = TH(s)/s` (Gyr per unit stretch).
    ///
    /// Singular at s = 0; its running integral is only ever taken relative to
    /// s = 1.
    pub fn ths(&self, s: f64) -> f64 {
        self.th(s) / s
    }

    /// Compute the full expansion history for a stretch request.
    pub fn calculate_expansion(
        &self,
        request: &StretchRequest,
    ) -> Result<Vec<ExpansionRecord>, ExpansionError> {
        expansion::calculate(&self.config, request)
    }
}
