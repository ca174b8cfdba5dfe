// ABOUTME: Summary statistics over workout sessions for dashboard and history views
// ABOUTME: Totals, half-up rounded averages, and the most frequent exercise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFlex

use fitflex_core::constants::history::NO_FAVORITE_EXERCISE;
use fitflex_core::models::WorkoutSession;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Aggregate view of a set of sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Number of sessions
    pub total_workouts: u64,
    /// Sum of reps
    pub total_reps: u64,
    /// Reps per session, rounded half-up
    pub avg_reps: u64,
    /// Most frequent exercise key, `"None"` when empty
    pub favorite_exercise: String,
    /// Mean accuracy, rounded half-up
    pub avg_accuracy: u8,
}

impl Default for Statistics {
    fn default() -> Self {
        Self {
            total_workouts: 0,
            total_reps: 0,
            avg_reps: 0,
            favorite_exercise: NO_FAVORITE_EXERCISE.to_owned(),
            avg_accuracy: 0,
        }
    }
}

/// Compute statistics for any subset of the history.
///
/// An empty slice yields `Statistics::default()`.
#[must_use]
pub fn compute_statistics(sessions: &[WorkoutSession]) -> Statistics {
    if sessions.is_empty() {
        return Statistics::default();
    }

    let count = sessions.len() as u64;
    let total_reps: u64 = sessions.iter().map(|s| u64::from(s.reps)).sum();
    let total_accuracy: u64 = sessions.iter().map(|s| u64::from(s.accuracy)).sum();

    Statistics {
        total_workouts: count,
        total_reps,
        avg_reps: round_half_up_div(total_reps, count),
        favorite_exercise: favorite_exercise(sessions),
        // Mean of u8 values always fits
        avg_accuracy: u8::try_from(round_half_up_div(total_accuracy, count)).unwrap_or(u8::MAX),
    }
}

/// `round(numerator / denominator)` with halves rounded up, in integer arithmetic
fn round_half_up_div(numerator: u64, denominator: u64) -> u64 {
    if denominator == 0 {
        return 0;
    }
    (numerator * 2 + denominator) / (denominator * 2)
}

/// Most frequent exercise; ties go to the key seen first
fn favorite_exercise(sessions: &[WorkoutSession]) -> String {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for session in sessions {
        let slot = *index.entry(session.exercise.as_str()).or_insert_with(|| {
            counts.push((session.exercise.as_str(), 0));
            counts.len() - 1
        });
        counts[slot].1 += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for &(exercise, count) in &counts {
        let replaces = match best {
            None => true,
            Some((_, top)) => count > top,
        };
        if replaces {
            best = Some((exercise, count));
        }
    }

    best.map_or_else(
        || NO_FAVORITE_EXERCISE.to_owned(),
        |(exercise, _)| exercise.to_owned(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up_div(15, 2), 8);
        assert_eq!(round_half_up_div(13, 3), 4);
        assert_eq!(round_half_up_div(14, 3), 5);
        assert_eq!(round_half_up_div(0, 5), 0);
        assert_eq!(round_half_up_div(7, 0), 0);
    }
}
