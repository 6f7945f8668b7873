//! Command-line parsing for the expansion calculator.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the modeling/numerical code.

use clap::{Parser, Subcommand};

use crate::domain::{Spacing, UnitSystem};
use crate::model::Survey;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "cex", version, about = "ΛCDM expansion history calculator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Tabulate the expansion history over a stretch range (or explicit values).
    Table(TableArgs),
    /// Print the present age of the universe for the chosen model.
    Age(ModelArgs),
    /// Print the density breakdown at a single stretch value.
    Vars(VarsArgs),
}

/// Model selection options shared by every subcommand.
#[derive(Debug, Parser, Clone)]
pub struct ModelArgs {
    /// Survey preset supplying default parameters.
    #[arg(long, value_enum, default_value_t = Survey::Planck2018)]
    pub survey: Survey,

    /// Override the Hubble constant H0 (km/s/Mpc).
    #[arg(long)]
    pub h0: Option<f64>,

    /// Override the total density parameter Ω₀.
    #[arg(long)]
    pub omega0: Option<f64>,

    /// Override the dark-energy density parameter Ω_Λ.
    #[arg(long = "omega-lambda")]
    pub omega_lambda: Option<f64>,

    /// Override the matter–radiation equality redshift z_eq.
    #[arg(long = "z-eq")]
    pub z_eq: Option<f64>,

    /// Override the present CMB temperature (K).
    #[arg(long)]
    pub temperature: Option<f64>,
}

/// Options for the `table` subcommand.
#[derive(Debug, Parser)]
pub struct TableArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Upper stretch bound (earliest epoch).
    #[arg(long, default_value_t = 1090.0)]
    pub upper: f64,

    /// Lower stretch bound (latest epoch; below 1 is the future).
    #[arg(long, default_value_t = 0.01)]
    pub lower: f64,

    /// Number of steps between the bounds (the table has steps+1 rows).
    #[arg(long, default_value_t = 20)]
    pub steps: usize,

    /// Step spacing between the bounds.
    #[arg(long, value_enum, default_value_t = Spacing::Exponential)]
    pub spacing: Spacing,

    /// Explicit stretch values, descending, comma separated. Overrides the
    /// range flags.
    #[arg(long, value_delimiter = ',')]
    pub stretch: Option<Vec<f64>>,

    /// Output unit system.
    #[arg(long, value_enum, default_value_t = UnitSystem::Gly)]
    pub units: UnitSystem,

    /// Emit JSON records instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Options for the `vars` subcommand.
#[derive(Debug, Parser)]
pub struct VarsArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Stretch value to evaluate at (1 is now).
    #[arg(long, default_value_t = 1.0)]
    pub stretch: f64,

    /// Emit JSON instead of formatted text.
    #[arg(long)]
    pub json: bool,
}
