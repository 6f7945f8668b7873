//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - builds the model configuration (survey preset + overrides)
//! - runs the calculator
//! - prints tables, snapshots or JSON

use clap::Parser;

use crate::cli::{Cli, Command, ModelArgs, TableArgs, VarsArgs};
use crate::domain::StretchRequest;
use crate::error::ExpansionError;
use crate::model::{Model, ModelConfig, SurveyParameters};
use crate::{expansion, report, scaling};

/// Entry point for the `cex` binary.
pub fn run() -> Result<(), ExpansionError> {
    let cli = Cli::parse();
    match cli.command {
        Command::Table(args) => handle_table(args),
        Command::Age(args) => handle_age(args),
        Command::Vars(args) => handle_vars(args),
    }
}

/// Merge CLI overrides into the chosen survey's parameters.
fn model_parameters(args: &ModelArgs) -> SurveyParameters {
    let mut params = args.survey.parameters();
    if let Some(h0) = args.h0 {
        params.h0 = h0;
    }
    if let Some(omega0) = args.omega0 {
        params.omega0 = omega0;
    }
    if let Some(omega_lambda) = args.omega_lambda {
        params.omega_lambda0 = omega_lambda;
    }
    if let Some(z_eq) = args.z_eq {
        params.z_eq = z_eq;
    }
    if let Some(temperature) = args.temperature {
        params.temperature0 = temperature;
    }
    params
}

fn handle_table(args: TableArgs) -> Result<(), ExpansionError> {
    let config = ModelConfig::from_parameters(&model_parameters(&args.model));
    let request = match &args.stretch {
        Some(values) => StretchRequest::Values(values.clone()),
        None => StretchRequest::range(args.upper, args.lower, args.steps, args.spacing),
    };

    let mut records = expansion::calculate(&config, &request)?;
    scaling::scale_records(&mut records, &config, args.units)?;

    if args.json {
        println!("{}", to_json(&records)?);
    } else {
        println!("{}", report::format_model_summary(&config, args.model.survey));
        println!("{}", report::format_expansion_table(&records, args.units));
    }
    Ok(())
}

fn handle_age(args: ModelArgs) -> Result<(), ExpansionError> {
    let config = ModelConfig::from_parameters(&model_parameters(&args));
    let age = expansion::calculate_age(&config)?;
    println!("Age of the universe now: {age:.4} Gyr");
    Ok(())
}

fn handle_vars(args: VarsArgs) -> Result<(), ExpansionError> {
    if !(args.stretch > 0.0) {
        return Err(ExpansionError::InvalidStretchRequest(format!(
            "stretch must be positive, got {}",
            args.stretch
        )));
    }
    let config = ModelConfig::from_parameters(&model_parameters(&args.model));
    let model = Model::new(config);
    let snapshot = model.snapshot_at(args.stretch);

    if args.json {
        println!("{}", to_json(&snapshot)?);
    } else {
        println!("{}", report::format_snapshot(args.stretch, &snapshot));
    }
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, ExpansionError> {
    serde_json::to_string_pretty(value).map_err(|e| ExpansionError::Render(e.to_string()))
}
