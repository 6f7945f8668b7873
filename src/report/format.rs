//! Fixed-width table formatting for the CLI.

use crate::domain::{DensitySnapshot, ExpansionRecord, UnitSystem};
use crate::model::{ModelConfig, Survey};

/// Column label suffix for the chosen unit system.
fn unit_labels(units: UnitSystem) -> (&'static str, &'static str) {
    match units {
        UnitSystem::Gly => ("Gyr", "Gly"),
        UnitSystem::Gpc => ("Gyr", "Gpc"),
        UnitSystem::Normalized => ("t/t0", "D·H0"),
        UnitSystem::Zeit => ("zeit", "zeit"),
    }
}

/// Format the model header: survey, H0, derived density fractions.
pub fn format_model_summary(config: &ModelConfig, survey: Survey) -> String {
    let mut out = String::new();
    out.push_str("=== cex — ΛCDM expansion history ===\n");
    out.push_str(&format!("Survey: {}\n", survey.display_name()));
    out.push_str(&format!(
        "H0: {:.4} km/s/Mpc ({:.4} Gyr Hubble time)\n",
        config.h0,
        config.hubble_time()
    ));
    out.push_str(&format!(
        "Ω_m0={:.6}  Ω_Λ0={:.6}  Ω_r0={:.3e}  Ω_k0={:.3e}  s_eq={:.1}\n",
        config.omega_m0, config.omega_lambda0, config.omega_rad0, config.omega_k0, config.s_eq
    ));
    out
}

/// Format the expansion table, one row per record, past to future.
pub fn format_expansion_table(records: &[ExpansionRecord], units: UnitSystem) -> String {
    let (t_unit, d_unit) = unit_labels(units);
    let mut out = String::new();
    out.push_str(&format!(
        "{:>12} {:>12} {:>10} {:>10} {:>10} {:>10} {:>10} {:>8} {:>10}\n",
        "s",
        "z",
        format!("T ({t_unit})"),
        format!("Dnow ({d_unit})"),
        format!("Dthen ({d_unit})"),
        format!("Dpar ({d_unit})"),
        format!("Y ({d_unit})"),
        "Vgen",
        "Temp (K)",
    ));
    for r in records {
        out.push_str(&format!(
            "{:>12.6} {:>12.6} {:>10.4} {:>10.4} {:>10.4} {:>10.4} {:>10.4} {:>8.4} {:>10.4}\n",
            r.s, r.z, r.t, r.d_now, r.d_then, r.d_particle, r.hubble_radius, r.v_gen, r.temperature,
        ));
    }
    out
}

/// Format a single density snapshot.
pub fn format_snapshot(s: f64, snap: &DensitySnapshot) -> String {
    let mut out = String::new();
    out.push_str(&format!("At stretch s = {s} (z = {}):\n", s - 1.0));
    out.push_str(&format!("  H        = {:.6} Gyr⁻¹\n", snap.h));
    out.push_str(&format!("  Ω_m      = {:.6}\n", snap.omega_m));
    out.push_str(&format!("  Ω_Λ      = {:.6}\n", snap.omega_lambda));
    out.push_str(&format!("  Ω_r      = {:.3e}\n", snap.omega_rad));
    out.push_str(&format!("  Ω_total  = {:.6}\n", snap.omega_total()));
    out.push_str(&format!("  T        = {:.4} K\n", snap.temperature));
    out.push_str(&format!("  ρ_crit   = {:.4e} kg/m³\n", snap.rho_crit));
    out
}
