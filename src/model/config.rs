//! Physical constants and the immutable model configuration.
//!
//! `ModelConfig` is built once by a pure constructor and never mutated; every
//! derived density fraction is computed here, up front, so the rest of the
//! crate can treat the configuration as plain read-only numbers.

use serde::{Deserialize, Serialize};

use crate::model::surveys::SurveyParameters;

/// Seconds per gigayear, using a Julian year (365.25 days of 86,400 s).
pub const GYR_TO_SECONDS: f64 = 3.15576e16;

/// Convert km/s/Mpc to Gyr⁻¹.
///
/// 1 parsec = 648,000/π au, 1 au = 149,597,870,700 m, 1 Gyr as above:
/// 487,000π / 1,495,978,707 ≈ 1.022712165045695e-3.
pub const KMSMPSC_TO_GYR: f64 = 1.022712165045695e-3;

/// Critical-density coefficient 3/(8πG) ≈ 1.7884e9 (SI).
pub const RHO_CONST: f64 = 1.7884453398696718e9;

/// Fully derived, immutable ΛCDM configuration.
///
/// Invariant: `omega_m0 + omega_rad0 + omega_lambda0 + omega_k0 = 1` (to
/// rounding) and none of the derived fields change after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Hubble constant H0 (km/s/Mpc).
    pub h0: f64,
    /// Hubble constant H0 (Gyr⁻¹).
    pub h0_gyr: f64,
    /// Total density parameter Ω₀.
    pub omega0: f64,
    pub omega_lambda0: f64,
    pub omega_m0: f64,
    pub omega_rad0: f64,
    pub omega_k0: f64,
    /// Stretch at matter–radiation equality, s_eq = z_eq + 1.
    pub s_eq: f64,
    /// CMB temperature now (K).
    pub temperature0: f64,
    /// Critical density now (kg/m³).
    pub rho_crit0: f64,

    pub rho_const: f64,
    pub gyr_to_seconds: f64,
    pub kmsmpsc_to_gyr: f64,
}

impl ModelConfig {
    /// Build a configuration from survey-style parameters.
    ///
    /// Matter and radiation split the non-Λ budget at the equality point:
    /// with s_eq = z_eq + 1,
    ///
    /// - `Ω_m0 = (Ω₀ − Ω_Λ) · s_eq / (s_eq + 1)`
    /// - `Ω_r0 = Ω_m0 / s_eq`
    /// - `Ω_k0 = 1 − Ω_m0 − Ω_r0 − Ω_Λ`
    pub fn from_parameters(params: &SurveyParameters) -> Self {
        let SurveyParameters {
            h0,
            omega0,
            omega_lambda0,
            z_eq,
            temperature0,
        } = *params;

        let s_eq = z_eq + 1.0;
        let h0_gyr = h0 * KMSMPSC_TO_GYR;
        let h0_seconds = h0_gyr / GYR_TO_SECONDS;

        let rho_crit0 = RHO_CONST * h0_seconds * h0_seconds;
        let omega_m0 = (omega0 - omega_lambda0) * s_eq / (s_eq + 1.0);
        let omega_rad0 = omega_m0 / s_eq;
        let omega_k0 = 1.0 - omega_m0 - omega_rad0 - omega_lambda0;

        Self {
            h0,
            h0_gyr,
            omega0,
            omega_lambda0,
            omega_m0,
            omega_rad0,
            omega_k0,
            s_eq,
            temperature0,
            rho_crit0,
            rho_const: RHO_CONST,
            gyr_to_seconds: GYR_TO_SECONDS,
            kmsmpsc_to_gyr: KMSMPSC_TO_GYR,
        }
    }

    /// Hubble time now, 1/H0 (Gyr).
    pub fn hubble_time(&self) -> f64 {
        1.0 / self.h0_gyr
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::surveys::Survey;

    #[test]
    fn density_fractions_sum_to_one() {
        let config = ModelConfig::from_parameters(&Survey::Planck2018.parameters());
        let total = config.omega_m0 + config.omega_rad0 + config.omega_lambda0 + config.omega_k0;
        assert!((total - 1.0).abs() < 1e-14, "got {total}");
    }

    #[test]
    fn planck2018_derived_values() {
        let config = ModelConfig::from_parameters(&Survey::Planck2018.parameters());
        // Ω_m0 = (1 − 0.6889) · 3388 / 3389
        assert!((config.omega_m0 - 0.3111 * 3388.0 / 3389.0).abs() < 1e-12);
        assert!((config.omega_rad0 - config.omega_m0 / 3388.0).abs() < 1e-15);
        // 1/H0 ≈ 14.45 Gyr for H0 = 67.66.
        assert!((config.hubble_time() - 14.4515).abs() < 1e-3);
    }
}
