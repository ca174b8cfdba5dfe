// ABOUTME: Main library entry point for the FitFlex workout tracker
// ABOUTME: Session history store, persistence backends, configuration, logging, and live tracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFlex

#![deny(unsafe_code)]

//! # FitFlex
//!
//! Workout history and rep tracking for a camera-based strength coach.
//!
//! ## Architecture
//!
//! - **`fitflex-core`**: session model, exercise catalog, errors, constants
//! - **`fitflex-intelligence`**: period filters, statistics, weekly chart,
//!   rep counting, smoothing, and the pose estimator seam
//! - **this crate**: the [`history::WorkoutHistoryStore`], its persistence
//!   backends, environment [`config`], [`logging`], and the
//!   [`tracker::SessionTracker`] that turns frames into session records
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitflex::config::FitflexConfig;
//! use fitflex::errors::AppResult;
//! use fitflex::history::{create_backend, WorkoutHistoryStore};
//!
//! fn main() -> AppResult<()> {
//!     let config = FitflexConfig::from_env()?;
//!     let store = WorkoutHistoryStore::load(create_backend(&config.history));
//!     println!("{} sessions stored", store.len());
//!     Ok(())
//! }
//! ```

/// Environment configuration
pub mod config;

/// Workout history store and persistence backends
pub mod history;

/// Structured logging setup
pub mod logging;

/// Live session tracking from frames to session records
pub mod tracker;

pub use fitflex_core::{constants, errors, models};
pub use fitflex_intelligence as intelligence;
