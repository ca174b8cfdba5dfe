// ABOUTME: FitFlex CLI - record, list, and summarize workouts from the terminal
// ABOUTME: Drives the history store and the session tracker against the configured backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFlex
//!
//! Usage:
//! ```bash
//! # Record a finished workout
//! fitflex add --exercise bicep_curl --reps 12 --sets 3 --accuracy 95 --duration-ms 60000
//!
//! # Sessions from the last seven days
//! fitflex list --period week
//!
//! # All-time totals, then this month's as JSON
//! fitflex stats
//! fitflex --json stats --period month
//!
//! # Seven-day chart
//! fitflex chart
//!
//! # Run the tracker against the mock estimator and record the result
//! fitflex simulate --exercise lat_pulldown --frames 900 --seed 7 --summary session.json
//!
//! # Remove a session
//! fitflex delete 3f2b7c1e-...
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use fitflex::config::{BackendKind, FitflexConfig, LogLevel};
use fitflex::errors::{AppError, AppResult};
use fitflex::history::{create_backend, WorkoutHistoryStore};
use fitflex::intelligence::Period;
use fitflex::logging::LoggingConfig;
use std::path::PathBuf;
use tracing::debug;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "fitflex",
    about = "FitFlex workout history",
    long_about = "Record workouts, browse history by period, and view statistics and the weekly chart."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory holding the history file
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Keep history in memory only (nothing is written)
    #[arg(long, global = true)]
    memory: bool,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Record a finished workout
    Add {
        /// Exercise key, e.g. `bicep_curl`
        #[arg(long)]
        exercise: String,

        /// Total reps
        #[arg(long)]
        reps: u32,

        /// Total sets
        #[arg(long)]
        sets: u32,

        /// Form accuracy percentage (0-100)
        #[arg(long)]
        accuracy: u8,

        /// Session length in milliseconds
        #[arg(long)]
        duration_ms: u64,

        /// When the workout happened (RFC 3339, defaults to now)
        #[arg(long)]
        date: Option<String>,
    },

    /// List sessions, newest first
    List {
        /// Only sessions from this period (today, week, month)
        #[arg(long)]
        period: Option<Period>,
    },

    /// Delete a session by id
    Delete {
        /// Session id
        id: String,
    },

    /// Summary statistics, all time unless a period is given
    Stats {
        /// Period to summarize (today, week, month)
        #[arg(long)]
        period: Option<Period>,
    },

    /// Reps and workouts for each of the last seven days
    Chart,

    /// Track a simulated workout with the mock pose estimator and record it
    Simulate {
        /// Exercise key to track
        #[arg(long, default_value = "bicep_curl")]
        exercise: String,

        /// Number of frames to process
        #[arg(long, default_value = "300")]
        frames: u32,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Also write the session summary with its event log to this JSON file
        #[arg(long)]
        summary: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level(LogLevel::Debug);
    }
    logging
        .init()
        .map_err(|e| AppError::internal(format!("Logging setup failed: {e}")))?;

    let mut config = FitflexConfig::from_env()?;
    if let Some(data_dir) = cli.data_dir {
        config.history.data_dir = data_dir;
    }
    if cli.memory {
        config.history.backend = BackendKind::Memory;
    }
    debug!(
        backend = %config.history.backend,
        data_dir = %config.history.data_dir.display(),
        "Opening workout history"
    );

    let mut store = WorkoutHistoryStore::load(create_backend(&config.history));
    let json = cli.json;

    match cli.command {
        Command::Add {
            exercise,
            reps,
            sets,
            accuracy,
            duration_ms,
            date,
        } => {
            let input = commands::history::AddArgs {
                exercise,
                reps,
                sets,
                accuracy,
                duration_ms,
                date,
            };
            commands::history::add(&mut store, input, json)?;
        }
        Command::List { period } => commands::history::list(&store, period, json)?,
        Command::Delete { id } => commands::history::delete(&mut store, &id, json)?,
        Command::Stats { period } => commands::history::stats(&store, period, json)?,
        Command::Chart => commands::history::chart(&store, json)?,
        Command::Simulate {
            exercise,
            frames,
            seed,
            summary,
        } => {
            let options = commands::simulate::SimulateOptions {
                exercise,
                frames,
                seed,
                summary,
            };
            commands::simulate::run(&mut store, &options, json)?;
        }
    }

    Ok(())
}
