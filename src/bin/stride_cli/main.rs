// ABOUTME: Stride CLI - command-line front end for the training analytics engine
// ABOUTME: Reads workouts and profile JSON files and prints metrics, history or predictions as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors
//!
//! Usage:
//! ```bash
//! # Snapshot metrics as of today
//! stride-cli --workouts runs.json --profile athlete.json metrics
//!
//! # History series, last 30 days only
//! stride-cli --workouts runs.json history --last 30
//!
//! # Race predictions as of a fixed date
//! stride-cli --workouts runs.json --today 2025-03-10 predict
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use stride_engine::config::EngineConfig;
use stride_engine::service::AnalyticsService;
use tracing::info;

use helpers::input::AnalyticsInput;

#[derive(Parser)]
#[command(
    name = "stride-cli",
    about = "Stride training analytics CLI",
    long_about = "Computes training load, capability scores and race predictions from a JSON workout history."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON file holding an array of workouts
    #[arg(long)]
    workouts: PathBuf,

    /// JSON file holding the athlete profile (heart rates and gender)
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Evaluation date (YYYY-MM-DD), defaults to the local calendar date
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Snapshot metrics with training status and overtraining risk
    Metrics,

    /// Daily CTL/ATL/TSB, evolution score and VO2max series
    History {
        /// Only print the most recent N days
        #[arg(long)]
        last: Option<usize>,
    },

    /// 5K, 10K, half marathon and marathon predictions
    Predict,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = EngineConfig::from_env()?;
    let logging = if cli.verbose {
        config.logging.clone().with_level("debug")
    } else {
        config.logging.clone()
    };
    logging.init()?;

    info!("Stride CLI: {}", config.summary());

    let input = AnalyticsInput::load(&cli.workouts, cli.profile.as_deref())?;
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let service = AnalyticsService::new(&config);

    match cli.command {
        Command::Metrics => commands::analytics::metrics(&service, &input, today)?,
        Command::History { last } => {
            commands::analytics::history(&service, input, today, last).await?;
        }
        Command::Predict => commands::analytics::predict(&service, &input, today)?,
    }

    Ok(())
}
