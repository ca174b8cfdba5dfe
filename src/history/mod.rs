// ABOUTME: Workout history store with pluggable persistence backends
// ABOUTME: Newest-first session list, persisted after every mutation, fail-soft on load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFlex

//! # Workout History
//!
//! [`WorkoutHistoryStore`] owns the session list and writes it through a
//! [`HistoryBackend`] after each mutation. Loading never fails: a missing
//! value starts an empty history and a corrupt one is logged and discarded.
//!
//! ```rust,no_run
//! use chrono::Local;
//! use fitflex::history::{InMemoryBackend, WorkoutHistoryStore};
//! use fitflex::models::NewWorkoutSession;
//! use fitflex::intelligence::Period;
//!
//! let mut store = WorkoutHistoryStore::load(Box::new(InMemoryBackend::new()));
//! let session = store.add_session(NewWorkoutSession {
//!     date: NewWorkoutSession::timestamp(chrono::Utc::now()),
//!     exercise: "bicep_curl".to_owned(),
//!     reps: 12,
//!     sets: 3,
//!     accuracy: 95,
//!     duration: 60_000,
//! })?;
//! let stats = store.statistics(Period::Week, &Local::now());
//! assert_eq!(stats.total_reps, 12);
//! store.delete_session(&session.id)?;
//! # Ok::<(), fitflex::errors::HistoryError>(())
//! ```

/// Backend trait and shared JSON codec
pub mod backend;
/// Backend construction from configuration
pub mod factory;
/// JSON file backend
pub mod file;
/// In-memory backend
pub mod memory;

pub use backend::HistoryBackend;
pub use factory::create_backend;
pub use file::JsonFileBackend;
pub use memory::InMemoryBackend;

use chrono::{DateTime, TimeZone};
use fitflex_core::errors::{ErrorCode, HistoryError};
use fitflex_core::models::{NewWorkoutSession, WorkoutSession};
use fitflex_intelligence::{
    compute_statistics, compute_weekly_chart, filter_by_period, DayBucket, Period, Statistics,
};
use tracing::{debug, info, warn};

/// Ordered session history backed by durable storage
pub struct WorkoutHistoryStore {
    backend: Box<dyn HistoryBackend>,
    sessions: Vec<WorkoutSession>,
}

impl WorkoutHistoryStore {
    /// Open the history held by `backend`
    ///
    /// An absent value yields an empty history. A value that cannot be read
    /// or decoded is logged and replaced by an empty history; it is only
    /// overwritten on the next successful mutation.
    #[must_use]
    pub fn load(backend: Box<dyn HistoryBackend>) -> Self {
        let sessions = Self::read_backend(backend.as_ref());
        Self { backend, sessions }
    }

    fn read_backend(backend: &dyn HistoryBackend) -> Vec<WorkoutSession> {
        match backend.load() {
            Ok(Some(sessions)) => {
                debug!(
                    backend = backend.backend_name(),
                    sessions = sessions.len(),
                    "Workout history loaded"
                );
                sessions
            }
            Ok(None) => {
                debug!(
                    backend = backend.backend_name(),
                    "No stored workout history, starting empty"
                );
                Vec::new()
            }
            Err(e) if e.code == ErrorCode::InvalidFormat => {
                warn!(
                    backend = backend.backend_name(),
                    error = %e,
                    "Stored workout history is corrupt, starting empty"
                );
                Vec::new()
            }
            Err(e) => {
                warn!(
                    backend = backend.backend_name(),
                    error = %e,
                    "Failed to read workout history, starting empty"
                );
                Vec::new()
            }
        }
    }

    /// Re-read the backend with the same fail-soft rules as [`Self::load`]
    pub fn reload(&mut self) {
        self.sessions = Self::read_backend(self.backend.as_ref());
    }

    /// All sessions, newest first
    #[must_use]
    pub fn sessions(&self) -> &[WorkoutSession] {
        &self.sessions
    }

    /// Number of stored sessions
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the history is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Look up a session by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&WorkoutSession> {
        self.sessions.iter().find(|session| session.id == id)
    }

    /// Name of the active backend
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        self.backend.backend_name()
    }

    /// Record a finished workout and persist the history
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::InvalidSession` if the input is rejected, in
    /// which case nothing changes. Returns `HistoryError::NotPersisted` if
    /// the write fails; the new record is still at the front of the
    /// in-memory history and is carried by the error.
    pub fn add_session(&mut self, input: NewWorkoutSession) -> Result<WorkoutSession, HistoryError> {
        input.validate()?;
        let session = WorkoutSession::create(input);
        self.sessions.insert(0, session.clone());

        if let Err(e) = self.backend.save(&self.sessions) {
            warn!(
                session_id = %session.id,
                backend = self.backend.backend_name(),
                error = %e,
                "Workout session recorded but not saved"
            );
            return Err(HistoryError::not_persisted(session, e));
        }

        info!(
            session_id = %session.id,
            exercise = %session.exercise,
            reps = session.reps,
            "Workout session saved"
        );
        Ok(session)
    }

    /// Remove the session with `id` and persist the history
    ///
    /// Unknown ids are ignored.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::NotPersisted` if the write fails; the session
    /// is already gone from memory.
    pub fn delete_session(&mut self, id: &str) -> Result<(), HistoryError> {
        let Some(index) = self.sessions.iter().position(|session| session.id == id) else {
            debug!(session_id = %id, "Delete ignored, session not found");
            return Ok(());
        };
        self.sessions.remove(index);

        self.backend.save(&self.sessions).map_err(|e| {
            warn!(
                session_id = %id,
                backend = self.backend.backend_name(),
                error = %e,
                "Workout session removed but history not saved"
            );
            HistoryError::not_persisted_without_record(e)
        })?;

        info!(session_id = %id, "Workout session deleted");
        Ok(())
    }

    /// Sessions inside `period` relative to `now`
    #[must_use]
    pub fn filter_by_period<Tz: TimeZone>(
        &self,
        period: Period,
        now: &DateTime<Tz>,
    ) -> Vec<WorkoutSession> {
        filter_by_period(&self.sessions, period, now)
    }

    /// Statistics over the sessions inside `period`
    #[must_use]
    pub fn statistics<Tz: TimeZone>(&self, period: Period, now: &DateTime<Tz>) -> Statistics {
        compute_statistics(&self.filter_by_period(period, now))
    }

    /// Statistics over the whole history
    #[must_use]
    pub fn all_time_statistics(&self) -> Statistics {
        compute_statistics(&self.sessions)
    }

    /// Seven-day chart over the rolling week ending at `now`
    #[must_use]
    pub fn weekly_chart<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Vec<DayBucket> {
        compute_weekly_chart(&self.filter_by_period(Period::Week, now), now)
    }
}

impl std::fmt::Debug for WorkoutHistoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkoutHistoryStore")
            .field("backend", &self.backend.backend_name())
            .field("sessions", &self.sessions.len())
            .finish()
    }
}
