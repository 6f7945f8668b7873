//! Survey parameter presets.
//!
//! Each survey supplies the five free parameters of the model; everything else
//! is derived in `model::config`.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The free parameters of a ΛCDM model, as published by a survey.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurveyParameters {
    /// Hubble constant H0 (km/s/Mpc).
    pub h0: f64,
    /// Total density parameter Ω₀.
    pub omega0: f64,
    /// Dark-energy density parameter Ω_Λ.
    pub omega_lambda0: f64,
    /// Redshift of matter–radiation equality.
    pub z_eq: f64,
    /// CMB temperature now (K).
    pub temperature0: f64,
}

/// Named survey presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Survey {
    /// Planck 2018 (arXiv:1807.06209). The default.
    Planck2018,
    /// Planck 2015.
    Planck2015,
    /// WMAP 2013.
    Wmap2013,
}

impl Survey {
    pub fn parameters(self) -> SurveyParameters {
        match self {
            Survey::Planck2018 => SurveyParameters {
                h0: 67.66,
                omega0: 1.0,
                omega_lambda0: 0.6889,
                z_eq: 3387.0,
                temperature0: 2.72548,
            },
            Survey::Planck2015 => SurveyParameters {
                h0: 67.74,
                omega0: 1.0,
                omega_lambda0: 0.691,
                z_eq: 3370.0,
                temperature0: 2.72548,
            },
            Survey::Wmap2013 => SurveyParameters {
                h0: 69.8,
                omega0: 1.0,
                omega_lambda0: 0.72,
                z_eq: 3300.0,
                temperature0: 2.72548,
            },
        }
    }

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            Survey::Planck2018 => "Planck 2018",
            Survey::Planck2015 => "Planck 2015",
            Survey::Wmap2013 => "WMAP 2013",
        }
    }
}
