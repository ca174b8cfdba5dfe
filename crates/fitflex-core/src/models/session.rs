// ABOUTME: Workout session record persisted in the history store
// ABOUTME: Defines WorkoutSession, its id-less input form, and input validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFlex

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::history::MAX_ACCURACY;
use crate::errors::HistoryError;

/// One completed workout.
///
/// Records are immutable once created; the history only ever prepends or
/// removes whole records. Field names match the persisted JSON layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutSession {
    /// Opaque unique identifier
    pub id: String,
    /// ISO-8601 timestamp of the session
    pub date: String,
    /// Exercise key, e.g. `bicep_curl`
    pub exercise: String,
    /// Total reps performed
    pub reps: u32,
    /// Total sets performed
    pub sets: u32,
    /// Form accuracy percentage (0-100)
    pub accuracy: u8,
    /// Session length in milliseconds
    pub duration: u64,
}

/// Session data supplied by the caller before an id is assigned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWorkoutSession {
    /// ISO-8601 timestamp of the session
    pub date: String,
    /// Exercise key
    pub exercise: String,
    /// Total reps performed
    pub reps: u32,
    /// Total sets performed
    pub sets: u32,
    /// Form accuracy percentage (0-100)
    pub accuracy: u8,
    /// Session length in milliseconds
    pub duration: u64,
}

impl NewWorkoutSession {
    /// Format a timestamp the way session dates are stored (`2025-03-01T09:30:00.000Z`)
    #[must_use]
    pub fn timestamp(at: DateTime<Utc>) -> String {
        at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Check the input before it is assigned an id
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::InvalidSession` when accuracy exceeds 100 or the
    /// exercise key is blank
    pub fn validate(&self) -> Result<(), HistoryError> {
        if self.accuracy > MAX_ACCURACY {
            return Err(HistoryError::invalid_session(
                "accuracy",
                format!(
                    "must be between 0 and {MAX_ACCURACY}, got {}",
                    self.accuracy
                ),
            ));
        }
        if self.exercise.trim().is_empty() {
            return Err(HistoryError::invalid_session(
                "exercise",
                "must not be empty",
            ));
        }
        Ok(())
    }
}

impl WorkoutSession {
    /// Assign a fresh UUID v4 to the input
    #[must_use]
    pub fn create(input: NewWorkoutSession) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), input)
    }

    /// Build a record with a caller-chosen id
    #[must_use]
    pub fn with_id(id: impl Into<String>, input: NewWorkoutSession) -> Self {
        let NewWorkoutSession {
            date,
            exercise,
            reps,
            sets,
            accuracy,
            duration,
        } = input;
        Self {
            id: id.into(),
            date,
            exercise,
            reps,
            sets,
            accuracy,
            duration,
        }
    }
}
