// ABOUTME: Fitplan CLI - generates workout and diet plans from profile JSON files
// ABOUTME: Handles single plans, exports, parallel batches, and model status reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors
//!
//! Usage:
//! ```bash
//! # Full plan result as JSON
//! fitplan-cli generate --profile profile.json --pretty
//!
//! # Reduced export document
//! fitplan-cli export --profile profile.json --output plan_export.json
//!
//! # Many profiles at once
//! fitplan-cli batch --profiles profiles.json
//!
//! # Which model artifacts are loaded
//! fitplan-cli --model-dir /opt/fitplan models
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use fitplan::config::PlannerConfig;
use fitplan::errors::AppResult;
use fitplan::logging::LoggingConfig;
use fitplan::ml::ModelRegistry;
use tracing::{debug, error};

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "fitplan-cli",
    about = "Fitplan workout and diet plan generator",
    long_about = "Computes health metrics, a fitness tier, calorie and macro targets, \
                  and 7-day workout and diet plans from a biometric profile."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Model artifact directory override
    #[arg(long, global = true)]
    model_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute the full plan for one profile
    Generate {
        /// Profile JSON file
        #[arg(long)]
        profile: PathBuf,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Write the reduced export document for one profile
    Export {
        /// Profile JSON file
        #[arg(long)]
        profile: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Compute plans for a JSON array of profiles in parallel
    Batch {
        /// JSON file holding an array of profiles
        #[arg(long)]
        profiles: PathBuf,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show which model artifacts are loaded or stubbed
    Models,
}

fn run(cli: Cli) -> Result<()> {
    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let mut config = PlannerConfig::from_env()?;
    if let Some(model_dir) = cli.model_dir {
        config = config.with_model_dir(model_dir);
    }
    debug!(model_dir = %config.models.model_dir.display(), "Loading model artifacts");
    let models = ModelRegistry::load(&config);

    match cli.command {
        Command::Generate { profile, pretty } => {
            commands::generate::run(&models, &profile, pretty)?;
        }
        Command::Export { profile, output } => {
            commands::export::run(&models, &profile, output.as_deref())?;
        }
        Command::Batch { profiles, pretty } => {
            commands::batch::run(&models, &profiles, pretty)?;
        }
        Command::Models => commands::models::run(&models),
    }

    Ok(())
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(code = ?err.code, field = ?err.field(), "{}", err.message);
            eprintln!("Error: {err}");
            ExitCode::from(u8::try_from(err.code.exit_status()).unwrap_or(1))
        }
    }
}
