//! Output unit rescaling.
//!
//! The calculator works natively in Gyr / Gly; every other unit system is a
//! purely multiplicative rescaling of selected record fields. No new
//! quantities are computed here.

use crate::domain::{ExpansionRecord, UnitSystem};
use crate::error::ExpansionError;
use crate::expansion;
use crate::model::{KMSMPSC_TO_GYR, ModelConfig};

/// Gigalightyears per gigaparsec.
const GLY_PER_GPC: f64 = 3.2615637771674333;

/// Rescale records in place into the requested unit system.
///
/// `Normalized` needs the present age as its time scale, which costs one extra
/// single-point calculation; the other systems are pure arithmetic.
pub fn scale_records(
    records: &mut [ExpansionRecord],
    config: &ModelConfig,
    units: UnitSystem,
) -> Result<(), ExpansionError> {
    match units {
        UnitSystem::Gly => {}
        UnitSystem::Gpc => {
            for r in records.iter_mut() {
                scale_distances(r, 1.0 / GLY_PER_GPC);
                // Report H in km/s/Mpc in the Gpc system.
                r.h /= KMSMPSC_TO_GYR;
            }
        }
        UnitSystem::Normalized => {
            let age = expansion::calculate_age(config)?;
            let hubble_scale = config.h0_gyr;
            for r in records.iter_mut() {
                r.t /= age;
                scale_distances(r, hubble_scale);
                r.h /= config.h0_gyr;
                r.temperature /= config.temperature0;
            }
        }
        UnitSystem::Zeit => {
            // The asymptotic Hubble rate H(∞) = H0·√Ω_Λ sets the zeit scale.
            let h_inf = config.h0_gyr * config.omega_lambda0.sqrt();
            for r in records.iter_mut() {
                r.t *= h_inf;
                scale_distances(r, h_inf);
                r.h /= h_inf;
            }
        }
    }
    Ok(())
}

fn scale_distances(r: &mut ExpansionRecord, factor: f64) {
    r.d_now *= factor;
    r.d_then *= factor;
    r.d_particle *= factor;
    r.hubble_radius *= factor;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StretchRequest;
    use crate::model::Survey;

    fn sample_records(config: &ModelConfig) -> Vec<ExpansionRecord> {
        expansion::calculate(config, &StretchRequest::Values(vec![3.0, 1.0])).unwrap()
    }

    #[test]
    fn gly_is_identity() {
        let config = ModelConfig::from_parameters(&Survey::Planck2018.parameters());
        let baseline = sample_records(&config);
        let mut scaled = baseline.clone();
        scale_records(&mut scaled, &config, UnitSystem::Gly).unwrap();
        assert_eq!(baseline, scaled);
    }

    #[test]
    fn gpc_scales_distances_multiplicatively() {
        let config = ModelConfig::from_parameters(&Survey::Planck2018.parameters());
        let baseline = sample_records(&config);
        let mut scaled = baseline.clone();
        scale_records(&mut scaled, &config, UnitSystem::Gpc).unwrap();
        for (b, s) in baseline.iter().zip(scaled.iter()) {
            assert!((s.d_now - b.d_now / GLY_PER_GPC).abs() < 1e-12);
            assert!((s.hubble_radius - b.hubble_radius / GLY_PER_GPC).abs() < 1e-12);
            // H comes out in km/s/Mpc: ≈ 67.66 now.
            if b.s == 1.0 {
                assert!((s.h - 67.66).abs() < 1e-9);
            }
            // Times and velocities are untouched.
            assert_eq!(s.t, b.t);
            assert_eq!(s.v_now, b.v_now);
        }
    }

    #[test]
    fn normalized_now_row_is_unit_scaled() {
        let config = ModelConfig::from_parameters(&Survey::Planck2018.parameters());
        let mut records = sample_records(&config);
        scale_records(&mut records, &config, UnitSystem::Normalized).unwrap();
        let now = records.iter().find(|r| r.s == 1.0).unwrap();
        // The two-point table and the single-point age reference integrate the
        // tail with slightly different step sequences, so allow a small slack.
        assert!((now.t - 1.0).abs() < 1e-6, "age/age = {}", now.t);
        assert!((now.h - 1.0).abs() < 1e-12, "H/H0 = 1");
        assert!((now.hubble_radius - 1.0).abs() < 1e-12, "Y·H0 = 1");
        assert!((now.temperature - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zeit_hubble_rate_tends_to_one() {
        let config = ModelConfig::from_parameters(&Survey::Planck2018.parameters());
        let mut records =
            expansion::calculate(&config, &StretchRequest::Values(vec![1.0, 0.001])).unwrap();
        scale_records(&mut records, &config, UnitSystem::Zeit).unwrap();
        // Deep in the future H → H(∞), so the scaled rate approaches 1.
        let future = &records[1];
        assert!((future.h - 1.0).abs() < 1e-6, "H/H∞ = {}", future.h);
    }
}
