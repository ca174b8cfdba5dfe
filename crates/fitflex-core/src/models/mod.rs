// ABOUTME: Core data models for workout history and the exercise catalog
// ABOUTME: Re-exports session records and exercise kinds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFlex

/// Workout session records
pub mod session;

/// Known exercises and their display metadata
pub mod exercise;

pub use exercise::ExerciseKind;
pub use session::{NewWorkoutSession, WorkoutSession};
