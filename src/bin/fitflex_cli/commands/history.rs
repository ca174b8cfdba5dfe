// ABOUTME: History commands for the fitflex CLI
// ABOUTME: Handles add, list, delete, stats, and chart against the workout history store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFlex

use chrono::{DateTime, Local, Utc};
use fitflex::errors::{AppError, AppResult};
use fitflex::history::WorkoutHistoryStore;
use fitflex::intelligence::Period;
use fitflex::models::{ExerciseKind, NewWorkoutSession};
use serde_json::json;
use tracing::{info, warn};

type Result<T> = AppResult<T>;

use crate::helpers::display::{
    display_chart, display_session, display_sessions, display_statistics, print_json,
};

/// Arguments of `fitflex add`
pub struct AddArgs {
    /// Exercise key
    pub exercise: String,
    /// Total reps
    pub reps: u32,
    /// Total sets
    pub sets: u32,
    /// Form accuracy percentage
    pub accuracy: u8,
    /// Session length in milliseconds
    pub duration_ms: u64,
    /// RFC 3339 timestamp, `None` for now
    pub date: Option<String>,
}

fn resolve_date(date: Option<&str>) -> Result<String> {
    let Some(raw) = date else {
        return Ok(NewWorkoutSession::timestamp(Utc::now()));
    };
    let parsed = DateTime::parse_from_rfc3339(raw).map_err(|e| {
        AppError::invalid_input(format!("--date must be an RFC 3339 timestamp: {e}"))
    })?;
    Ok(NewWorkoutSession::timestamp(parsed.with_timezone(&Utc)))
}

/// Record a finished workout
pub fn add(store: &mut WorkoutHistoryStore, args: AddArgs, json: bool) -> Result<()> {
    if ExerciseKind::from_key(&args.exercise).is_none() {
        warn!(exercise = %args.exercise, "Recording a session for an unknown exercise");
    }

    let input = NewWorkoutSession {
        date: resolve_date(args.date.as_deref())?,
        exercise: args.exercise,
        reps: args.reps,
        sets: args.sets,
        accuracy: args.accuracy,
        duration: args.duration_ms,
    };

    let session = store.add_session(input)?;
    if json {
        print_json(&session)?;
    } else {
        println!("\nWorkout Recorded");
        println!("{}", "=".repeat(40));
        display_session(&session);
    }
    Ok(())
}

/// List sessions, optionally limited to a period
pub fn list(store: &WorkoutHistoryStore, period: Option<Period>, json: bool) -> Result<()> {
    let sessions = match period {
        Some(period) => store.filter_by_period(period, &Local::now()),
        None => store.sessions().to_vec(),
    };
    if json {
        print_json(&sessions)
    } else {
        display_sessions(&sessions, period);
        Ok(())
    }
}

/// Delete a session by id
pub fn delete(store: &mut WorkoutHistoryStore, id: &str, json: bool) -> Result<()> {
    let existed = store.get(id).is_some();
    store.delete_session(id)?;
    info!(session_id = %id, existed, "Delete command finished");

    if json {
        print_json(&json!({ "id": id, "deleted": existed }))
    } else {
        if existed {
            println!("Deleted session {id}");
        } else {
            println!("No session with id {id}; nothing to delete");
        }
        Ok(())
    }
}

/// Summary statistics for a period, or the whole history
pub fn stats(store: &WorkoutHistoryStore, period: Option<Period>, json: bool) -> Result<()> {
    let stats = match period {
        Some(period) => store.statistics(period, &Local::now()),
        None => store.all_time_statistics(),
    };
    if json {
        print_json(&stats)
    } else {
        display_statistics(&stats, period);
        Ok(())
    }
}

/// Seven-day chart
pub fn chart(store: &WorkoutHistoryStore, json: bool) -> Result<()> {
    let buckets = store.weekly_chart(&Local::now());
    if json {
        print_json(&buckets)
    } else {
        display_chart(&buckets);
        Ok(())
    }
}
