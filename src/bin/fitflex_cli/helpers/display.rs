// ABOUTME: Output formatting helpers for the fitflex CLI
// ABOUTME: Plain-text tables for sessions, statistics, and the weekly chart, plus JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFlex

use fitflex::errors::AppResult;
use fitflex::intelligence::{DayBucket, Period, Statistics};
use fitflex::models::{ExerciseKind, WorkoutSession};
use fitflex::tracker::TrackerEvent;
use serde::Serialize;

/// Widest bar drawn by the chart
const CHART_BAR_WIDTH: u64 = 40;

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn format_duration(duration_ms: u64) -> String {
    let total_secs = duration_ms / 1000;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

/// Display one session in detail
pub fn display_session(session: &WorkoutSession) {
    println!("   Id:       {}", session.id);
    println!("   Date:     {}", session.date);
    println!(
        "   Exercise: {}",
        ExerciseKind::display_name_for(&session.exercise)
    );
    println!("   Reps:     {} over {} sets", session.reps, session.sets);
    println!("   Accuracy: {}%", session.accuracy);
    println!("   Duration: {}", format_duration(session.duration));
}

/// Display a session list as a table
pub fn display_sessions(sessions: &[WorkoutSession], period: Option<Period>) {
    let heading = period.map_or("All Sessions", Period::label);
    println!("\n{heading} ({})", sessions.len());
    println!("{}", "=".repeat(96));
    if sessions.is_empty() {
        println!("No workouts recorded yet.");
        return;
    }
    println!(
        "{:<36}  {:<24}  {:<14}  {:>5}  {:>4}  {:>4}  {:>6}",
        "ID", "DATE", "EXERCISE", "REPS", "SETS", "ACC", "TIME"
    );
    for session in sessions {
        println!(
            "{:<36}  {:<24}  {:<14}  {:>5}  {:>4}  {:>3}%  {:>6}",
            session.id,
            session.date,
            ExerciseKind::display_name_for(&session.exercise),
            session.reps,
            session.sets,
            session.accuracy,
            format_duration(session.duration)
        );
    }
}

/// Display summary statistics
pub fn display_statistics(stats: &Statistics, period: Option<Period>) {
    println!("\n{} Statistics", period.map_or("All-Time", Period::label));
    println!("{}", "=".repeat(40));
    println!("   Workouts:          {}", stats.total_workouts);
    println!("   Total reps:        {}", stats.total_reps);
    println!("   Average reps:      {}", stats.avg_reps);
    println!(
        "   Favorite exercise: {}",
        ExerciseKind::display_name_for(&stats.favorite_exercise)
    );
    println!("   Average accuracy:  {}%", stats.avg_accuracy);
}

/// Display the seven-day chart with proportional bars
pub fn display_chart(buckets: &[DayBucket]) {
    println!("\nWeekly Progress");
    println!("{}", "=".repeat(60));
    let peak = buckets.iter().map(|bucket| bucket.reps).max().unwrap_or(0);
    for bucket in buckets {
        let width = if peak == 0 {
            0
        } else {
            bucket.reps * CHART_BAR_WIDTH / peak
        };
        println!(
            "{:<3}  {:<40}  {:>4} reps  {:>2} workouts",
            bucket.day,
            "#".repeat(width as usize),
            bucket.reps,
            bucket.workouts
        );
    }
}

/// Display the outcome of a tracked session
pub fn display_simulation(session: &WorkoutSession, events: &[TrackerEvent], frames: u32) {
    println!("\nSimulated Workout Recorded");
    println!("{}", "=".repeat(40));
    println!("   Frames processed: {frames}");
    println!("   Tracker events:   {}", events.len());
    display_session(session);
}
