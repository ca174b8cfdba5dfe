// ABOUTME: Benchmark fixtures for generating realistic workout histories
// ABOUTME: Deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFlex

//! Benchmark fixtures for generating workout histories.

use chrono::{DateTime, Duration, TimeZone, Utc};
use fitflex::models::{NewWorkoutSession, WorkoutSession};

/// Predefined history sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistorySize {
    /// A few weeks of training
    Small,
    /// About a year of daily sessions
    Medium,
    /// Several years with multiple sessions a day
    Large,
}

impl HistorySize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 20,
            Self::Medium => 365,
            Self::Large => 5_000,
        }
    }
}

/// Fixed reference instant so runs are comparable
#[must_use]
pub fn bench_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 5, 12, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Newest-first history with one session roughly every seven hours
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
#[must_use]
pub fn generate_history(size: HistorySize) -> Vec<WorkoutSession> {
    let now = bench_now();
    (0..size.count())
        .map(|index| {
            let at = now - Duration::hours((index * 7) as i64);
            let exercise = if index % 3 == 0 {
                "lat_pulldown"
            } else {
                "bicep_curl"
            };
            WorkoutSession::with_id(
                format!("bench_session_{index}"),
                NewWorkoutSession {
                    date: NewWorkoutSession::timestamp(at),
                    exercise: exercise.to_owned(),
                    reps: 8 + (index % 7) as u32,
                    sets: 1 + (index % 4) as u32,
                    accuracy: 80 + (index % 21) as u8,
                    duration: 45_000 + (index as u64 % 60) * 1_000,
                },
            )
        })
        .collect()
}
