// ABOUTME: Seven-day chart bucketing of reps and workout counts
// ABOUTME: One bucket per calendar day ending today, empty days included
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFlex

use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone};
use fitflex_core::constants::history::CHART_DAYS;
use fitflex_core::models::WorkoutSession;
use serde::{Deserialize, Serialize};

use crate::dates::parse_session_date;

/// Aggregated activity for one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBucket {
    /// Short weekday label (`Mon` .. `Sun`)
    pub day: String,
    /// Reps summed over the day's sessions
    pub reps: u64,
    /// Number of sessions that day
    pub workouts: u32,
}

/// Bucket sessions into the 7 calendar days ending on `now`'s day.
///
/// Buckets are ordered oldest first, today last, and there are always
/// exactly seven of them. Callers normally pass the week-filtered history;
/// sessions on other days (or with unparseable dates) are ignored.
#[must_use]
pub fn compute_weekly_chart<Tz: TimeZone>(
    sessions: &[WorkoutSession],
    now: &DateTime<Tz>,
) -> Vec<DayBucket> {
    let tz = now.timezone();
    let today = now.date_naive();
    let days: Vec<NaiveDate> = (0..CHART_DAYS as u64)
        .rev()
        .map(|back| today.checked_sub_days(Days::new(back)).unwrap_or(today))
        .collect();

    let mut buckets: Vec<DayBucket> = days
        .iter()
        .map(|day| DayBucket {
            day: day.weekday().to_string(),
            reps: 0,
            workouts: 0,
        })
        .collect();

    for session in sessions {
        let Some(date) = parse_session_date(&session.date, &tz) else {
            continue;
        };
        let local_day = date.date_naive();
        if let Some(slot) = days.iter().position(|day| *day == local_day) {
            buckets[slot].reps += u64::from(session.reps);
            buckets[slot].workouts += 1;
        }
    }

    buckets
}
