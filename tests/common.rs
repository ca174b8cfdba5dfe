// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides session builders, fixed clocks, and a backend that fails on demand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFlex
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `fitflex`

use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
use fitflex::errors::{AppError, AppResult};
use fitflex::history::{HistoryBackend, InMemoryBackend, WorkoutHistoryStore};
use fitflex::models::{NewWorkoutSession, WorkoutSession};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Wednesday 2025-03-05 12:00 UTC
pub fn fixed_now_utc() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 5, 12, 0, 0).unwrap()
}

/// Same instant seen from UTC+02:00
pub fn fixed_now_plus_two() -> DateTime<FixedOffset> {
    fixed_now_utc().with_timezone(&FixedOffset::east_opt(2 * 3600).unwrap())
}

/// Stored date string for an instant
pub fn stamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    NewWorkoutSession::timestamp(at.with_timezone(&Utc))
}

/// New session input with the given date, exercise, and reps
pub fn new_session(date: impl Into<String>, exercise: &str, reps: u32) -> NewWorkoutSession {
    NewWorkoutSession {
        date: date.into(),
        exercise: exercise.to_owned(),
        reps,
        sets: 3,
        accuracy: 95,
        duration: 60_000,
    }
}

/// Stored session `hours_ago` before `now`
pub fn session_hours_before(
    now: &DateTime<Utc>,
    hours_ago: i64,
    exercise: &str,
    reps: u32,
) -> WorkoutSession {
    let at = *now - Duration::hours(hours_ago);
    WorkoutSession::with_id(
        format!("{exercise}-{hours_ago}h"),
        new_session(stamp(&at), exercise, reps),
    )
}

/// Store over a fresh in-memory backend
pub fn memory_store() -> WorkoutHistoryStore {
    init_test_logging();
    WorkoutHistoryStore::load(Box::new(InMemoryBackend::new()))
}

/// Backend whose writes can be switched to fail
#[derive(Debug, Clone, Default)]
pub struct FlakyBackend {
    inner: Arc<InMemoryBackend>,
    fail_writes: Arc<AtomicBool>,
}

impl FlakyBackend {
    /// Backend already holding `raw`
    pub fn with_raw(raw: &str) -> Self {
        Self {
            inner: Arc::new(InMemoryBackend::with_raw(raw)),
            fail_writes: Arc::default(),
        }
    }

    /// Make subsequent saves fail (or succeed again)
    pub fn set_failing(&self, failing: bool) {
        self.fail_writes.store(failing, Ordering::SeqCst);
    }

    /// Blob last written successfully
    pub fn raw_blob(&self) -> Option<String> {
        self.inner.raw_blob().unwrap()
    }
}

impl HistoryBackend for FlakyBackend {
    fn load(&self) -> AppResult<Option<Vec<WorkoutSession>>> {
        self.inner.load()
    }

    fn save(&self, sessions: &[WorkoutSession]) -> AppResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::storage("Simulated quota exceeded"));
        }
        self.inner.save(sessions)
    }

    fn backend_name(&self) -> &'static str {
        "flaky"
    }
}
