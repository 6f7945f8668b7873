//! Stretch-grid generation.
//!
//! A range request (upper, lower, steps, spacing) becomes an explicit strictly
//! decreasing sequence of `steps + 1` stretch values, first = upper, last =
//! lower. When the range straddles s = 1 the step budget is split into an
//! upper part (upper → 1) and a lower part (1 → lower) so that the literal
//! value 1.0 appears exactly once: s = 1 is the reference epoch and must never
//! be approximated by a nearby grid point. A single-step straddling range
//! cannot be split, so it gains 1.0 as one extra point instead.
//!
//! Bounds validation happens in the calculator before this module is called;
//! the generators here assume `upper > lower > 0` and a positive step count.

use crate::domain::{Spacing, StretchRange};

/// Append `count` arithmetic steps from `upper` (already in `values`) down to
/// `lower`; `lower` itself is pushed exactly.
fn push_linear(values: &mut Vec<f64>, upper: f64, lower: f64, count: usize) {
    if count == 0 {
        return;
    }
    let step = (upper - lower) / count as f64;
    let mut current = upper;
    for _ in 1..count {
        current -= step;
        values.push(current);
    }
    values.push(lower);
}

/// Append `count` geometric steps from `upper` (already in `values`) down to
/// `lower`; `lower` itself is pushed exactly.
fn push_exponential(values: &mut Vec<f64>, upper: f64, lower: f64, count: usize) {
    if count == 0 {
        return;
    }
    let factor = (lower / upper).powf(1.0 / count as f64);
    let mut current = upper;
    for _ in 1..count {
        current *= factor;
        values.push(current);
    }
    values.push(lower);
}

/// Expand a stretch range into explicit values, strictly decreasing,
/// `steps + 1` long (one longer for a single-step range straddling s = 1).
pub fn stretch_values(range: &StretchRange) -> Vec<f64> {
    let StretchRange {
        upper,
        lower,
        steps,
        spacing,
    } = *range;

    let mut values = Vec::with_capacity(steps + 1);
    values.push(upper);

    // If s = 1 is not interior to the range, even steps all the way down.
    if lower >= 1.0 || upper <= 1.0 {
        match spacing {
            Spacing::Linear => push_linear(&mut values, upper, lower, steps),
            Spacing::Exponential => push_exponential(&mut values, upper, lower, steps),
        }
        return values;
    }

    // A single step cannot be split; keep the exact 1.0 anyway, at the cost
    // of one extra point.
    if steps == 1 {
        values.push(1.0);
        values.push(lower);
        return values;
    }

    // Split the budget so the rounded lower-part count leaves s = 1 on the
    // grid exactly once. The ratio follows the spacing mode: logarithmic
    // distances for exponential, plain distances for linear.
    let count_lower = match spacing {
        Spacing::Linear => {
            let step = (upper - lower) / steps as f64;
            ((1.0 - lower) / step).round() as usize
        }
        Spacing::Exponential => {
            let factor = (lower / upper).powf(1.0 / steps as f64);
            (lower.ln() / factor.ln()).round() as usize
        }
    };
    // Rounding can push the whole budget to one side of s = 1; clamp so each
    // side keeps at least one step and the exact 1.0 stays on the grid.
    let count_lower = count_lower.clamp(1, steps - 1);
    let count_upper = steps - count_lower;

    match spacing {
        Spacing::Linear => {
            push_linear(&mut values, upper, 1.0, count_upper);
            push_linear(&mut values, 1.0, lower, count_lower);
        }
        Spacing::Exponential => {
            push_exponential(&mut values, upper, 1.0, count_upper);
            push_exponential(&mut values, 1.0, lower, count_lower);
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(upper: f64, lower: f64, steps: usize, spacing: Spacing) -> StretchRange {
        StretchRange {
            upper,
            lower,
            steps,
            spacing,
        }
    }

    #[test]
    fn exponential_straddling_range_hits_one_exactly() {
        let values = stretch_values(&range(1091.0, 0.01, 10, Spacing::Exponential));
        assert_eq!(values.len(), 11);
        assert_eq!(values[0], 1091.0);
        assert_eq!(values[6], 1.0, "7th point must be exactly 1.0");
        assert_eq!(values[10], 0.01);
        assert_eq!(values.iter().filter(|&&v| v == 1.0).count(), 1);
    }

    #[test]
    fn exponential_above_one_is_pure_geometric() {
        let values = stretch_values(&range(256.0, 2.0, 7, Spacing::Exponential));
        let expected = [256.0, 128.0, 64.0, 32.0, 16.0, 8.0, 4.0, 2.0];
        assert_eq!(values.len(), expected.len());
        for (v, e) in values.iter().zip(expected.iter()) {
            assert!((v - e).abs() < 1e-9, "got {v}, want {e}");
        }
        // Bounds are carried through exactly.
        assert_eq!(values[0], 256.0);
        assert_eq!(values[7], 2.0);
    }

    #[test]
    fn straddling_range_with_lower_near_one_still_contains_one() {
        // Rounding drives the lower-side count to 0 here; the clamp must keep
        // one step below the seam rather than dropping the 1.0 point.
        let values = stretch_values(&range(1000.0, 0.9999, 5, Spacing::Exponential));
        assert_eq!(values.len(), 6);
        assert_eq!(values[4], 1.0);
        assert_eq!(values[5], 0.9999);
        assert_eq!(values.iter().filter(|&&v| v == 1.0).count(), 1);
        for pair in values.windows(2) {
            assert!(pair[0] > pair[1], "not decreasing: {pair:?}");
        }
    }

    #[test]
    fn single_step_straddling_range_gains_the_reference_point() {
        let values = stretch_values(&range(2.0, 0.5, 1, Spacing::Linear));
        assert_eq!(values, vec![2.0, 1.0, 0.5]);
    }

    #[test]
    fn linear_straddling_range_hits_one_exactly() {
        let values = stretch_values(&range(3.0, 0.5, 5, Spacing::Linear));
        assert_eq!(values.len(), 6);
        assert_eq!(values[0], 3.0);
        assert!(values.contains(&1.0));
        assert_eq!(values[5], 0.5);
    }

    #[test]
    fn linear_below_one_is_plain_arithmetic() {
        let values = stretch_values(&range(0.9, 0.1, 4, Spacing::Linear));
        let expected = [0.9, 0.7, 0.5, 0.3, 0.1];
        assert_eq!(values.len(), expected.len());
        for (v, e) in values.iter().zip(expected.iter()) {
            assert!((v - e).abs() < 1e-12);
        }
    }

    #[test]
    fn output_is_strictly_decreasing() {
        let cases = [
            range(1091.0, 0.01, 10, Spacing::Exponential),
            range(1090.0, 0.01, 50, Spacing::Exponential),
            range(20.0, 0.2, 9, Spacing::Linear),
            range(10.0, 2.0, 4, Spacing::Linear),
        ];
        for case in cases {
            let values = stretch_values(&case);
            assert_eq!(values.len(), case.steps + 1);
            for pair in values.windows(2) {
                assert!(pair[0] > pair[1], "not decreasing: {pair:?} in {case:?}");
            }
        }
    }
}
