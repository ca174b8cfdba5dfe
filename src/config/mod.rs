// ABOUTME: Configuration module for history persistence and runtime settings
// ABOUTME: Environment-only configuration, no config files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFlex

//! Configuration module
//!
//! All settings come from environment variables; see [`environment`] for the
//! full list.

/// Environment variable parsing and typed settings
pub mod environment;

pub use environment::{BackendKind, Environment, FitflexConfig, HistoryConfig, LogLevel};
