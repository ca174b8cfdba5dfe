// ABOUTME: Integration tests for history statistics and the seven-day chart
// ABOUTME: Zero values, rounding, favorite tie-breaks, bucketing, and the end-to-end week view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFlex

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{Duration, FixedOffset, TimeZone, Utc};
use common::{fixed_now_utc, memory_store, new_session, session_hours_before, stamp};
use fitflex::intelligence::{compute_statistics, compute_weekly_chart, filter_by_period, Period};
use fitflex::models::WorkoutSession;
use serde_json::json;

fn session(id: &str, exercise: &str, reps: u32, accuracy: u8) -> WorkoutSession {
    let mut input = new_session(stamp(&fixed_now_utc()), exercise, reps);
    input.accuracy = accuracy;
    WorkoutSession::with_id(id, input)
}

#[test]
fn test_empty_input_yields_zero_value() {
    let stats = compute_statistics(&[]);
    assert_eq!(
        serde_json::to_value(&stats).unwrap(),
        json!({
            "totalWorkouts": 0,
            "totalReps": 0,
            "avgReps": 0,
            "favoriteExercise": "None",
            "avgAccuracy": 0
        })
    );
}

#[test]
fn test_totals_and_rounded_averages() {
    let sessions = vec![
        session("a", "bicep_curl", 10, 90),
        session("b", "bicep_curl", 5, 95),
    ];
    let stats = compute_statistics(&sessions);
    assert_eq!(stats.total_workouts, 2);
    assert_eq!(stats.total_reps, 15);
    // 7.5 and 92.5 both round up
    assert_eq!(stats.avg_reps, 8);
    assert_eq!(stats.avg_accuracy, 93);
}

#[test]
fn test_favorite_is_most_frequent() {
    let sessions = vec![
        session("1", "a", 1, 90),
        session("2", "b", 1, 90),
        session("3", "a", 1, 90),
    ];
    assert_eq!(compute_statistics(&sessions).favorite_exercise, "a");
}

#[test]
fn test_favorite_tie_goes_to_first_seen() {
    let sessions = vec![
        session("1", "lat_pulldown", 1, 90),
        session("2", "bicep_curl", 1, 90),
        session("3", "bicep_curl", 1, 90),
        session("4", "lat_pulldown", 1, 90),
    ];
    assert_eq!(
        compute_statistics(&sessions).favorite_exercise,
        "lat_pulldown"
    );
}

#[test]
fn test_statistics_are_idempotent() {
    let sessions = vec![
        session("1", "a", 3, 80),
        session("2", "b", 4, 100),
        session("3", "b", 9, 70),
    ];
    assert_eq!(compute_statistics(&sessions), compute_statistics(&sessions));
}

#[test]
fn test_empty_chart_has_seven_zero_buckets() {
    let chart = compute_weekly_chart(&[], &fixed_now_utc());
    assert_eq!(chart.len(), 7);
    assert!(chart.iter().all(|b| b.reps == 0 && b.workouts == 0));
    assert_eq!(chart.last().unwrap().day, "Wed");
}

#[test]
fn test_chart_buckets_by_local_day() {
    let now = fixed_now_utc();
    let sessions = vec![
        session_hours_before(&now, 1, "bicep_curl", 10),
        session_hours_before(&now, 2, "bicep_curl", 4),
        session_hours_before(&now, 48, "lat_pulldown", 7),
    ];
    let chart = compute_weekly_chart(&sessions, &now);

    assert_eq!(chart[6].day, "Wed");
    assert_eq!((chart[6].reps, chart[6].workouts), (14, 2));
    assert_eq!(chart[4].day, "Mon");
    assert_eq!((chart[4].reps, chart[4].workouts), (7, 1));
    assert_eq!(chart.iter().map(|b| b.workouts).sum::<u32>(), 3);
}

#[test]
fn test_chart_day_shifts_with_offset() {
    // 23:30 UTC Tuesday is already Wednesday at UTC+02:00
    let late = Utc.with_ymd_and_hms(2025, 3, 4, 23, 30, 0).unwrap();
    let sessions = vec![WorkoutSession::with_id(
        "late",
        new_session(stamp(&late), "bicep_curl", 6),
    )];
    let tz = FixedOffset::east_opt(2 * 3600).unwrap();
    let now = fixed_now_utc().with_timezone(&tz);

    let chart = compute_weekly_chart(&sessions, &now);
    assert_eq!(chart[6].reps, 6);

    let utc_chart = compute_weekly_chart(&sessions, &fixed_now_utc());
    assert_eq!(utc_chart[5].day, "Tue");
    assert_eq!(utc_chart[5].reps, 6);
}

#[test]
fn test_end_to_end_week_view() {
    let mut store = memory_store();
    let now = fixed_now_utc();
    for (days_ago, reps) in [(10, 20), (2, 5), (0, 10)] {
        let at = now - Duration::days(days_ago);
        store
            .add_session(new_session(stamp(&at), "bicep_curl", reps))
            .unwrap();
    }

    let week = filter_by_period(store.sessions(), Period::Week, &now);
    let reps: Vec<u32> = week.iter().map(|s| s.reps).collect();
    assert_eq!(reps, [10, 5]);

    let stats = compute_statistics(&week);
    assert_eq!(stats.total_workouts, 2);
    assert_eq!(stats.total_reps, 15);
    assert_eq!(stats.avg_reps, 8);
}
