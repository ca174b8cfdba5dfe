// ABOUTME: Core types and constants for the FitFlex workout tracker
// ABOUTME: Foundation crate with error handling, session models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFlex

#![deny(unsafe_code)]

//! # FitFlex Core
//!
//! Foundation crate providing shared types and constants for the FitFlex
//! workout tracker. Both the aggregation engine and the history store build
//! on these types, so this crate is kept small and free of I/O.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `HistoryError`
//! - **constants**: Storage keys, time windows, and rep tracking tunables
//! - **models**: Workout session records and the exercise catalog

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`WorkoutSession`, `ExerciseKind`)
pub mod models;
