//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during integration
//! - exported to JSON from the CLI
//! - reloaded later for plotting or comparisons

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How sample points are spaced between the bounds of a stretch range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    /// Arithmetic steps (equal differences).
    Linear,
    /// Geometric steps (equal ratios). The natural choice when a range spans
    /// several decades of stretch, e.g. recombination to the far future.
    Exponential,
}

/// Output unit system for tabulated results.
///
/// The calculator works natively in Gyr / Gly (with c = 1, light-travel
/// distance in Gly equals time in Gyr); the other systems are purely
/// multiplicative rescalings applied after the fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Gigalightyears / gigayears (native). H stays in Gyr⁻¹ here; the legacy
    /// calculator printed H in km/s/Mpc even for this system — use `Gpc` for
    /// that convention.
    Gly,
    /// Gigaparsecs for distances, km/s/Mpc for the Hubble rate.
    Gpc,
    /// Distances and times divided by the Hubble scale now (1/H0); H in units
    /// of H0; temperature relative to the present CMB temperature.
    Normalized,
    /// Distances and times divided by the asymptotic Hubble scale 1/H(∞)
    /// ("zeit" convention from the legacy calculator).
    Zeit,
}

/// A stretch range to be expanded into an explicit grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StretchRange {
    /// Largest stretch (earliest epoch), first in the output.
    pub upper: f64,
    /// Smallest stretch (latest epoch), last in the output.
    pub lower: f64,
    /// Number of steps; the grid has `steps + 1` points (one more for a
    /// single-step range straddling s = 1, which always keeps the exact 1.0).
    pub steps: usize,
    pub spacing: Spacing,
}

/// What the caller wants evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StretchRequest {
    /// Explicit stretch values, strictly descending. May start with
    /// `f64::INFINITY` to request the integration endpoint itself.
    Values(Vec<f64>),
    /// A range to be expanded by the grid generator.
    Range(StretchRange),
}

/// Per-stretch density breakdown, all algebraic functions of s.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensitySnapshot {
    /// Hubble rate H(s) in Gyr⁻¹.
    pub h: f64,
    /// Matter density fraction Ω_m(s).
    pub omega_m: f64,
    /// Dark-energy density fraction Ω_Λ(s).
    pub omega_lambda: f64,
    /// Radiation density fraction Ω_r(s).
    pub omega_rad: f64,
    /// CMB temperature (K).
    pub temperature: f64,
    /// Critical density (kg/m³).
    pub rho_crit: f64,
}

impl DensitySnapshot {
    /// Ω_m + Ω_Λ + Ω_r; ≈ Ω₀ at all s, exactly 1 only for a flat universe.
    pub fn omega_total(&self) -> f64 {
        self.omega_m + self.omega_lambda + self.omega_rad
    }
}

/// One output row of the expansion table.
///
/// Times are in Gyr, distances in Gly, velocities in units of c, unless the
/// record has been rescaled (see `scaling`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpansionRecord {
    /// Stretch s = 1 + z.
    pub s: f64,
    /// Scale factor a = 1/s.
    pub a: f64,
    /// Redshift z = s − 1.
    pub z: f64,
    /// Age of the universe at this epoch.
    pub t: f64,
    /// Proper distance now to an object seen at stretch s.
    pub d_now: f64,
    /// Proper distance at emission, d_now / s.
    pub d_then: f64,
    /// Particle horizon at this epoch.
    pub d_particle: f64,
    /// Hubble radius 1/H(s).
    pub hubble_radius: f64,
    /// Recession velocity now, d_now · H0.
    pub v_now: f64,
    /// Recession velocity at emission, d_then · H(s).
    pub v_then: f64,
    /// Generalized recession rate a·H(s)/H0; exactly 1 at s = 1.
    pub v_gen: f64,
    /// Hubble rate H(s) in Gyr⁻¹.
    pub h: f64,
    pub omega_m: f64,
    pub omega_lambda: f64,
    pub omega_rad: f64,
    pub omega_total: f64,
    /// CMB temperature (K).
    pub temperature: f64,
    /// Critical density (kg/m³).
    pub rho_crit: f64,
}

impl StretchRequest {
    /// Convenience constructor for a range request.
    pub fn range(upper: f64, lower: f64, steps: usize, spacing: Spacing) -> Self {
        StretchRequest::Range(StretchRange {
            upper,
            lower,
            steps,
            spacing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omega_total_sums_components() {
        let snap = DensitySnapshot {
            h: 0.07,
            omega_m: 0.31,
            omega_lambda: 0.69,
            omega_rad: 1e-4,
            temperature: 2.72548,
            rho_crit: 8.5e-27,
        };
        assert!((snap.omega_total() - (0.31 + 0.69 + 1e-4)).abs() < 1e-15);
    }
}
