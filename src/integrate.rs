//! Adaptive trapezoidal integration of the two expansion kernels.
//!
//! Both kernels are accumulated in a single upward walk of s:
//!
//! - `TH(s)`  from s = 0 (comoving distance),
//! - `THs(s)` relative to s = 1 (cosmic time; the kernel is singular at
//!   s = 0, so its running integral starts at the lowest visited waypoint and
//!   is re-based so the cumulative value is exactly 0 at s = 1).
//!
//! The walk visits every requested finite grid point exactly (steps are
//! clamped to land on them), with s = 1 always inserted as a waypoint because
//! it anchors the reference totals. Past the last finite waypoint the walk
//! integrates toward s = ∞ until the density polynomial stops producing
//! finite values, which is the designed termination signal for the improper
//! tail.

use crate::error::ExpansionError;
use crate::model::Model;

/// Initial micro-step at s = 0.
const INITIAL_STEP: f64 = 1e-6;
/// Multiplicative step growth per iteration over the finite range.
const STEP_GROWTH: f64 = 1.0001;
/// Tail step growth up to `TAIL_FAR_START`.
const TAIL_GROWTH: f64 = 1.001;
/// Tail step growth beyond `TAIL_FAR_START`.
const TAIL_GROWTH_FAR: f64 = 1.1;
const TAIL_FAR_START: f64 = 4000.0;

/// Where the walk currently is relative to the two domain seams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Walking up to the next waypoint at or below s = 1.
    BelowOne,
    /// Walking between finite waypoints above s = 1.
    AboveOne,
    /// Past the last finite waypoint, integrating the unbounded tail.
    ToInfinity,
}

impl Phase {
    fn step_growth(self, s: f64) -> f64 {
        match self {
            Phase::BelowOne | Phase::AboveOne => STEP_GROWTH,
            Phase::ToInfinity => {
                if s < TAIL_FAR_START {
                    TAIL_GROWTH
                } else {
                    TAIL_GROWTH_FAR
                }
            }
        }
    }
}

/// Cumulative integrals at one requested grid point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrationSample {
    pub s: f64,
    /// ∫₀ˢ TH (Gly).
    pub th: f64,
    /// ∫₁ˢ THs (Gyr); negative below s = 1, exactly 0 at s = 1.
    pub ths: f64,
    /// Walk iterations consumed up to this point.
    pub steps: u64,
    /// Size of the last step taken before landing here.
    pub last_step: f64,
}

/// The full result of one walk: per-point samples plus the reference totals.
#[derive(Debug, Clone, PartialEq)]
pub struct Integration {
    /// One sample per requested finite grid point, ascending in s.
    pub samples: Vec<IntegrationSample>,
    /// ∫₀¹ TH — the "now" distance reference.
    pub th_at_one: f64,
    /// ∫₀^∞ TH, as far as the density stayed finite.
    pub th_at_infinity: f64,
    /// ∫₁^∞ THs — the age of the universe now.
    pub ths_at_infinity: f64,
}

struct Walker<'a> {
    model: &'a Model,
    s: f64,
    th_sum: f64,
    ths_sum: f64,
    /// THs only accumulates once the walk has reached the lowest waypoint.
    ths_active: bool,
    /// Kernel values at the current position (valid once s > 0).
    th_kernel: f64,
    ths_kernel: f64,
    /// Un-clamped step size; grows multiplicatively every iteration.
    nominal_step: f64,
    steps: u64,
    last_step: f64,
}

/// Kernel evaluation outcome; `None` means the density left the finite domain.
fn kernels_at(model: &Model, s: f64) -> Option<(f64, f64)> {
    let e_squared = model.e_squared_at(s);
    if !e_squared.is_finite() {
        return None;
    }
    let th = 1.0 / (model.config().h0_gyr * e_squared.sqrt());
    if !th.is_finite() {
        return None;
    }
    Some((th, th / s))
}

impl<'a> Walker<'a> {
    fn new(model: &'a Model) -> Self {
        Self {
            model,
            s: 0.0,
            th_sum: 0.0,
            ths_sum: 0.0,
            ths_active: false,
            th_kernel: 0.0,
            ths_kernel: 0.0,
            nominal_step: INITIAL_STEP,
            steps: 0,
            last_step: 0.0,
        }
    }

    /// The very first micro-step away from s = 0.
    ///
    /// The kernels are undefined at s = 0 for some configurations (THs always;
    /// TH whenever Ω_Λ = 0), so the first step uses a rectangle-rule midpoint
    /// evaluation at Δs/2 instead of a trapezoidal average touching 0.
    fn first_step(&mut self, target: f64) -> Result<(), ExpansionError> {
        let step = self.nominal_step.min(target);
        let midpoint = 0.5 * step;
        let (th_mid, _) = kernels_at(self.model, midpoint)
            .ok_or(ExpansionError::NonFiniteDensity { stretch: midpoint })?;
        self.th_sum += step * th_mid;
        self.s = step;
        let (th, ths) = kernels_at(self.model, self.s)
            .ok_or(ExpansionError::NonFiniteDensity { stretch: self.s })?;
        self.th_kernel = th;
        self.ths_kernel = ths;
        self.steps += 1;
        self.last_step = step;
        self.nominal_step *= STEP_GROWTH;
        Ok(())
    }

    /// One trapezoidal step to `next`. Returns `false` when the density went
    /// non-finite, leaving the sums at their last finite values.
    fn trapezoid_step(&mut self, next: f64, growth: f64) -> bool {
        let Some((th, ths)) = kernels_at(self.model, next) else {
            return false;
        };
        let step = next - self.s;
        self.th_sum += 0.5 * step * (self.th_kernel + th);
        if self.ths_active {
            self.ths_sum += 0.5 * step * (self.ths_kernel + ths);
        }
        self.th_kernel = th;
        self.ths_kernel = ths;
        self.s = next;
        self.steps += 1;
        self.last_step = step;
        self.nominal_step *= growth;
        true
    }

    /// Walk up to a finite waypoint, landing on it exactly.
    fn advance_to(&mut self, target: f64, phase: Phase) -> Result<(), ExpansionError> {
        if self.s == 0.0 {
            self.first_step(target)?;
        }
        while self.s < target {
            let next = if self.s + self.nominal_step >= target {
                target
            } else {
                self.s + self.nominal_step
            };
            if !self.trapezoid_step(next, phase.step_growth(self.s)) {
                return Err(ExpansionError::NonFiniteDensity { stretch: next });
            }
        }
        Ok(())
    }

    /// Integrate the tail until the density polynomial leaves the finite
    /// domain. Geometric step growth guarantees termination.
    fn advance_to_infinity(&mut self) {
        loop {
            let next = self.s + self.nominal_step;
            if !next.is_finite() || !self.trapezoid_step(next, Phase::ToInfinity.step_growth(self.s))
            {
                return;
            }
        }
    }
}

/// Integrate both kernels across `0 < s < ∞`, recording cumulative values at
/// each of `points` (finite, strictly ascending, all positive).
///
/// A non-finite density before the last requested point is a configuration
/// error; past it, non-finite density terminates the tail normally.
pub fn integrate_kernels(model: &Model, points: &[f64]) -> Result<Integration, ExpansionError> {
    debug_assert!(points.windows(2).all(|w| w[0] < w[1]));
    debug_assert!(points.iter().all(|&s| s.is_finite() && s > 0.0));

    // Waypoints: the requested points with s = 1 spliced in if absent.
    let mut waypoints: Vec<(f64, bool)> = points.iter().map(|&s| (s, true)).collect();
    if !points.contains(&1.0) {
        let at = points.partition_point(|&s| s < 1.0);
        waypoints.insert(at, (1.0, false));
    }

    let mut walker = Walker::new(model);
    let mut samples = Vec::with_capacity(points.len());
    let mut th_at_one = 0.0;
    let mut ths_raw_at_one = 0.0;

    for &(target, requested) in &waypoints {
        let phase = if target <= 1.0 {
            Phase::BelowOne
        } else {
            Phase::AboveOne
        };
        walker.advance_to(target, phase)?;
        // The lowest waypoint is where THs accumulation becomes well defined.
        walker.ths_active = true;
        if target == 1.0 {
            th_at_one = walker.th_sum;
            ths_raw_at_one = walker.ths_sum;
        }
        if requested {
            samples.push(IntegrationSample {
                s: target,
                th: walker.th_sum,
                ths: walker.ths_sum,
                steps: walker.steps,
                last_step: walker.last_step,
            });
        }
    }

    walker.advance_to_infinity();

    // Re-base THs so its cumulative value is exactly 0 at s = 1.
    for sample in &mut samples {
        sample.ths -= ths_raw_at_one;
    }

    Ok(Integration {
        samples,
        th_at_one,
        th_at_infinity: walker.th_sum,
        ths_at_infinity: walker.ths_sum - ths_raw_at_one,
    })
}
