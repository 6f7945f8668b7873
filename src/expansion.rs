//! The expansion calculator: request validation, grid expansion, one
//! integration pass, and record assembly.
//!
//! Workflow (single pass, no shared state between calls):
//!
//! 1. validate the stretch request and expand ranges into explicit values
//! 2. run the kernel integration once over the whole domain
//! 3. assemble one `ExpansionRecord` per requested stretch, in request order

use crate::domain::{ExpansionRecord, StretchRequest};
use crate::error::ExpansionError;
use crate::grid;
use crate::integrate::{self, Integration};
use crate::model::{Model, ModelConfig};

/// Compute the expansion history for a stretch request.
///
/// Records come back in the requested (descending stretch) order, i.e.
/// chronologically from the past toward the present/future. Errors are
/// reported before any integration work happens, except for a density that
/// goes non-finite inside the finite range, which indicates a configuration
/// outside the model's valid domain.
pub fn calculate(
    config: &ModelConfig,
    request: &StretchRequest,
) -> Result<Vec<ExpansionRecord>, ExpansionError> {
    let stretch_values = resolve_request(request)?;
    let model = Model::new(*config);

    // The integrator walks s upward; reverse the descending request and strip
    // the infinity sentinel, which is served from the tail totals.
    let includes_infinity = stretch_values[0].is_infinite();
    let ascending: Vec<f64> = stretch_values
        .iter()
        .rev()
        .copied()
        .filter(|s| s.is_finite())
        .collect();

    let integration = integrate::integrate_kernels(&model, &ascending)?;

    let mut records = Vec::with_capacity(stretch_values.len());
    if includes_infinity {
        records.push(record_at_infinity(&model, &integration));
    }
    for sample in integration.samples.iter().rev() {
        records.push(record_at(&model, &integration, sample.s, sample.th, sample.ths));
    }
    Ok(records)
}

/// Age of the universe now (Gyr): the integration only needs s = 1.
pub fn calculate_age(config: &ModelConfig) -> Result<f64, ExpansionError> {
    let records = calculate(config, &StretchRequest::Values(vec![1.0]))?;
    Ok(records[0].t)
}

fn record_at(model: &Model, integration: &Integration, s: f64, th: f64, ths: f64) -> ExpansionRecord {
    let snap = model.snapshot_at(s);
    let config = model.config();

    let a = 1.0 / s;
    let t = integration.ths_at_infinity - ths;
    let mut d_now = (th - integration.th_at_one).abs();
    let mut d_then = d_now / s;
    let d_particle = (integration.th_at_infinity - th) / s;

    let mut v_now = d_now * config.h0_gyr;
    let mut v_then = d_then * snap.h;
    let mut v_gen = a * snap.h / config.h0_gyr;

    // Distance-to-self is zero by definition; pin the s = 1 row so residual
    // cancellation in the integrator can never leak into the output.
    if s == 1.0 {
        d_now = 0.0;
        d_then = 0.0;
        v_now = 0.0;
        v_then = 0.0;
        v_gen = 1.0;
    }

    ExpansionRecord {
        s,
        a,
        z: s - 1.0,
        t,
        d_now,
        d_then,
        d_particle,
        hubble_radius: 1.0 / snap.h,
        v_now,
        v_then,
        v_gen,
        h: snap.h,
        omega_m: snap.omega_m,
        omega_lambda: snap.omega_lambda,
        omega_rad: snap.omega_rad,
        omega_total: snap.omega_total(),
        temperature: snap.temperature,
        rho_crit: snap.rho_crit,
    }
}

/// The record for the `s = ∞` sentinel, served from the tail totals. Its
/// density snapshot is legitimately non-finite ("no information").
fn record_at_infinity(model: &Model, integration: &Integration) -> ExpansionRecord {
    record_at(
        model,
        integration,
        f64::INFINITY,
        integration.th_at_infinity,
        integration.ths_at_infinity,
    )
}

/// Validate a request and expand it into explicit descending stretch values.
fn resolve_request(request: &StretchRequest) -> Result<Vec<f64>, ExpansionError> {
    match request {
        StretchRequest::Values(values) => {
            if values.is_empty() {
                return Err(ExpansionError::InvalidStretchRequest(
                    "at least one stretch value is required".into(),
                ));
            }
            for (i, &s) in values.iter().enumerate() {
                if s.is_nan() || s <= 0.0 {
                    return Err(ExpansionError::InvalidStretchRequest(format!(
                        "stretch values must be positive, got {s}"
                    )));
                }
                if s.is_infinite() && i != 0 {
                    return Err(ExpansionError::InvalidStretchRequest(
                        "infinity is only valid as the first (largest) stretch value".into(),
                    ));
                }
            }
            if values.windows(2).any(|pair| pair[0] <= pair[1]) {
                return Err(ExpansionError::InvalidStretchRequest(
                    "stretch values must be strictly decreasing".into(),
                ));
            }
            Ok(values.clone())
        }
        StretchRequest::Range(range) => {
            if !range.upper.is_finite() || !range.lower.is_finite() {
                return Err(ExpansionError::InvalidStretchRequest(
                    "range bounds must be finite".into(),
                ));
            }
            if range.lower <= 0.0 {
                return Err(ExpansionError::InvalidStretchRequest(format!(
                    "lower bound must be positive, got {}",
                    range.lower
                )));
            }
            if range.lower >= range.upper {
                return Err(ExpansionError::InvalidStretchRequest(format!(
                    "bounds are inverted or degenerate: upper={}, lower={}",
                    range.upper, range.lower
                )));
            }
            if range.steps == 0 {
                return Err(ExpansionError::InvalidStretchRequest(
                    "a range request needs a positive step count; pass explicit values instead"
                        .into(),
                ));
            }
            Ok(grid::stretch_values(range))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Spacing;
    use crate::model::{Survey, SurveyParameters};

    fn planck_config() -> ModelConfig {
        ModelConfig::from_parameters(&Survey::Planck2018.parameters())
    }

    #[test]
    fn now_row_is_exact() {
        let config = planck_config();
        let records = calculate(&config, &StretchRequest::Values(vec![1.0])).unwrap();
        assert_eq!(records.len(), 1);
        let now = &records[0];
        assert_eq!(now.z, 0.0);
        assert_eq!(now.a, 1.0);
        assert_eq!(now.d_now, 0.0);
        assert_eq!(now.d_then, 0.0);
        assert_eq!(now.v_now, 0.0);
        assert_eq!(now.v_then, 0.0);
        assert_eq!(now.v_gen, 1.0);
    }

    #[test]
    fn age_now_matches_planck_2018() {
        let config = planck_config();
        let records =
            calculate(&config, &StretchRequest::Values(vec![1090.8, 1.0])).unwrap();
        assert_eq!(records.len(), 2);
        assert!((records[0].s - 1090.8).abs() < 1e-12);
        let now = &records[1];
        assert_eq!(now.z, 0.0);
        assert!((now.t - 13.787).abs() < 5e-4, "age now = {}", now.t);
    }

    #[test]
    fn calculate_age_shortcut_agrees_with_full_table() {
        let config = planck_config();
        let age = calculate_age(&config).unwrap();
        let records = calculate(&config, &StretchRequest::Values(vec![1.0])).unwrap();
        assert_eq!(age, records[0].t);
    }

    #[test]
    fn records_preserve_request_order_and_definitions() {
        let config = planck_config();
        let request = StretchRequest::Values(vec![100.0, 10.0, 2.0, 1.0, 0.5, 0.1]);
        let records = calculate(&config, &request).unwrap();
        let StretchRequest::Values(values) = &request else {
            unreachable!()
        };
        assert_eq!(records.len(), values.len());
        for (record, &s) in records.iter().zip(values.iter()) {
            assert_eq!(record.s, s);
            assert_eq!(record.a, 1.0 / s);
            assert_eq!(record.z, s - 1.0);
        }
    }

    #[test]
    fn ages_increase_toward_the_future() {
        let config = planck_config();
        let records = calculate(
            &config,
            &StretchRequest::range(1090.0, 0.1, 20, Spacing::Exponential),
        )
        .unwrap();
        for pair in records.windows(2) {
            assert!(pair[0].t < pair[1].t, "age must grow from past to future");
        }
    }

    #[test]
    fn distance_now_grows_away_from_now_in_both_directions() {
        let config = planck_config();
        let records = calculate(
            &config,
            &StretchRequest::Values(vec![20.0, 5.0, 2.0, 1.0, 0.5, 0.2, 0.05]),
        )
        .unwrap();
        let at_one = records.iter().position(|r| r.s == 1.0).unwrap();
        // Walking into the past from now.
        for i in (0..at_one).rev() {
            assert!(records[i].d_now >= records[i + 1].d_now);
        }
        // Walking into the future from now.
        for i in at_one..records.len() - 1 {
            assert!(records[i + 1].d_now >= records[i].d_now);
        }
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let config = planck_config();
        let request = StretchRequest::range(1091.0, 0.01, 10, Spacing::Exponential);
        let first = calculate(&config, &request).unwrap();
        let second = calculate(&config, &request).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn infinity_sentinel_yields_origin_row() {
        let config = planck_config();
        let records =
            calculate(&config, &StretchRequest::Values(vec![f64::INFINITY, 1.0])).unwrap();
        let origin = &records[0];
        assert!(origin.s.is_infinite());
        assert_eq!(origin.a, 0.0);
        assert_eq!(origin.t, 0.0);
        assert_eq!(origin.d_then, 0.0);
    }

    #[test]
    fn hubble_radius_now_is_the_hubble_time() {
        let config = planck_config();
        let records = calculate(&config, &StretchRequest::Values(vec![1.0])).unwrap();
        assert!((records[0].hubble_radius - config.hubble_time()).abs() < 1e-9);
    }

    #[test]
    fn invalid_requests_fail_fast() {
        let config = planck_config();
        let cases: Vec<StretchRequest> = vec![
            StretchRequest::Values(vec![]),
            StretchRequest::Values(vec![1.0, 2.0]),
            StretchRequest::Values(vec![2.0, -1.0]),
            StretchRequest::Values(vec![2.0, f64::INFINITY]),
            StretchRequest::Values(vec![2.0, f64::NAN]),
            StretchRequest::range(0.5, 2.0, 10, Spacing::Linear),
            StretchRequest::range(2.0, 2.0, 10, Spacing::Linear),
            StretchRequest::range(2.0, 0.5, 0, Spacing::Linear),
            StretchRequest::range(2.0, -0.5, 10, Spacing::Linear),
        ];
        for request in cases {
            let result = calculate(&config, &request);
            assert!(
                matches!(result, Err(ExpansionError::InvalidStretchRequest(_))),
                "expected invalid-request error for {request:?}"
            );
        }
    }

    #[test]
    fn non_finite_density_mid_range_is_an_error() {
        // Ω_Λ > Ω₀ makes the matter term negative; E² goes negative a little
        // past s = 1 and the kernels stop being real.
        let config = ModelConfig::from_parameters(&SurveyParameters {
            h0: 67.66,
            omega0: 0.5,
            omega_lambda0: 1.5,
            z_eq: 3387.0,
            temperature0: 2.72548,
        });
        let result = calculate(&config, &StretchRequest::Values(vec![50.0, 1.0]));
        assert!(matches!(
            result,
            Err(ExpansionError::NonFiniteDensity { .. })
        ));
    }

    #[test]
    fn single_point_request_short_circuits() {
        let config = planck_config();
        let records = calculate(&config, &StretchRequest::Values(vec![3.0])).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].s, 3.0);
        assert!(records[0].t > 0.0 && records[0].t < 13.787);
    }
}
