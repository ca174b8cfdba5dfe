// ABOUTME: Live workout session tracker combining pose estimation, smoothing, and rep counting
// ABOUTME: Produces per-frame snapshots, keeps an event log, and builds the session record on finish
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFlex

//! # Session Tracker
//!
//! One [`SessionTracker`] drives one workout: each frame goes through the
//! [`PoseEstimator`], the elbow angle is smoothed with a [`OneEuroFilter`],
//! and the smoothed value feeds a [`RepCounter`]. When the user stops,
//! [`SessionTracker::finish`] turns the counters into a [`NewWorkoutSession`]
//! ready for [`crate::history::WorkoutHistoryStore::add_session`].

use chrono::{DateTime, Utc};
use fitflex_core::constants::history::MAX_ACCURACY;
use fitflex_core::constants::tracking::DEFAULT_SESSION_ACCURACY;
use fitflex_core::errors::AppResult;
use fitflex_core::models::NewWorkoutSession;
use fitflex_intelligence::algorithms::OneEuroFilter;
use fitflex_intelligence::pose::{CoachCue, PoseEstimator, VideoFrame};
use fitflex_intelligence::{RepCounter, RepEvent, RepThresholds};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Kind of entry in the tracker's event log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackerEventKind {
    /// A rep was counted
    Rep,
    /// Pending reps closed into a set
    SetCompleted,
    /// Counters were cleared
    Reset,
}

impl From<RepEvent> for TrackerEventKind {
    fn from(event: RepEvent) -> Self {
        match event {
            RepEvent::Rep => Self::Rep,
            RepEvent::SetCompleted => Self::SetCompleted,
        }
    }
}

/// Timestamped entry in the event log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerEvent {
    /// Frame time in milliseconds
    pub timestamp_ms: u64,
    /// What happened
    pub kind: TrackerEventKind,
    /// Total reps after the event
    pub total_reps: u32,
    /// Sets after the event, counting an open set with reps
    pub sets: u32,
}

/// State after processing one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackerSnapshot {
    /// Smoothed elbow angle in degrees
    pub angle_deg: f64,
    /// Coaching cue for this frame
    pub cue: CoachCue,
    /// Total reps so far
    pub reps: u32,
    /// Sets so far, counting an open set with reps
    pub sets: u32,
    /// Counter event raised by this frame
    pub event: Option<TrackerEventKind>,
}

/// Exportable record of one tracked workout, event log included
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Exercise key
    pub exercise: String,
    /// RFC 3339 start time
    pub started_at: String,
    /// RFC 3339 end time
    pub ended_at: String,
    /// Total reps
    pub reps: u32,
    /// Sets, counting an open set with reps
    pub sets: u32,
    /// Thresholds in effect at the end, calibrated or default
    pub thresholds: RepThresholds,
    /// Event log, oldest first
    pub events: Vec<TrackerEvent>,
}

impl SessionSummary {
    /// Write the summary as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be written
    pub fn write_json(&self, path: &Path) -> AppResult<()> {
        let body = serde_json::to_string_pretty(self)?;
        fs::write(path, body)?;
        info!(
            path = %path.display(),
            events = self.events.len(),
            "Session summary exported"
        );
        Ok(())
    }
}

/// Drives one workout from frames to a session record
pub struct SessionTracker {
    estimator: Box<dyn PoseEstimator>,
    smoother: OneEuroFilter,
    counter: RepCounter,
    accuracy: u8,
    started_at: DateTime<Utc>,
    events: Vec<TrackerEvent>,
}

impl SessionTracker {
    /// Tracker for `exercise` with default thresholds, starting at `started_at`
    #[must_use]
    pub fn new(
        exercise: impl Into<String>,
        estimator: Box<dyn PoseEstimator>,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self::with_counter(RepCounter::new(exercise), estimator, started_at)
    }

    /// Tracker around an explicitly configured counter
    #[must_use]
    pub fn with_counter(
        counter: RepCounter,
        estimator: Box<dyn PoseEstimator>,
        started_at: DateTime<Utc>,
    ) -> Self {
        info!(
            exercise = %counter.exercise(),
            estimator = estimator.name(),
            "Workout tracking started"
        );
        Self {
            estimator,
            smoother: OneEuroFilter::default(),
            counter,
            accuracy: DEFAULT_SESSION_ACCURACY,
            started_at,
            events: Vec::new(),
        }
    }

    /// Accuracy recorded on the finished session, capped at 100
    #[must_use]
    pub fn with_accuracy(mut self, accuracy: u8) -> Self {
        self.accuracy = accuracy.min(MAX_ACCURACY);
        self
    }

    /// Exercise key being tracked
    #[must_use]
    pub fn exercise(&self) -> &str {
        self.counter.exercise()
    }

    /// Active rep thresholds
    #[must_use]
    pub fn thresholds(&self) -> RepThresholds {
        self.counter.thresholds()
    }

    /// Total reps so far
    #[must_use]
    pub fn total_reps(&self) -> u32 {
        self.counter.total_reps()
    }

    /// Sets so far, counting an open set with reps
    #[must_use]
    pub fn sets(&self) -> u32 {
        self.counter.sets_including_open()
    }

    /// Event log, oldest first
    #[must_use]
    pub fn events(&self) -> &[TrackerEvent] {
        &self.events
    }

    /// Begin threshold calibration; the next few bottoms personalize the counter
    pub fn start_calibration(&mut self) {
        self.counter.start_calibration();
    }

    /// End calibration early, returning the new thresholds if any bottom was sampled
    pub fn finish_calibration(&mut self) -> Option<RepThresholds> {
        self.counter.finish_calibration()
    }

    /// Analyze one frame and advance the counters
    ///
    /// # Errors
    ///
    /// Returns the estimator's error when it cannot produce a reading; the
    /// counters are left untouched in that case
    pub fn process_frame(&mut self, frame: &VideoFrame<'_>) -> AppResult<TrackerSnapshot> {
        let reading = self.estimator.next_frame(frame)?;
        let angle_deg = self
            .smoother
            .filter(reading.left_elbow_deg, frame.timestamp_ms);
        let event = self
            .counter
            .update(angle_deg, frame.timestamp_ms)
            .map(TrackerEventKind::from);

        if let Some(kind) = event {
            self.record(kind, frame.timestamp_ms);
        }

        Ok(TrackerSnapshot {
            angle_deg,
            cue: reading.cue,
            reps: self.counter.total_reps(),
            sets: self.counter.sets_including_open(),
            event,
        })
    }

    /// Clear counters and smoothing; thresholds are kept
    pub fn reset(&mut self, timestamp_ms: u64) {
        self.counter.reset();
        self.smoother.reset();
        self.record(TrackerEventKind::Reset, timestamp_ms);
    }

    fn record(&mut self, kind: TrackerEventKind, timestamp_ms: u64) {
        let event = TrackerEvent {
            timestamp_ms,
            kind,
            total_reps: self.counter.total_reps(),
            sets: self.counter.sets_including_open(),
        };
        debug!(
            exercise = %self.counter.exercise(),
            kind = ?event.kind,
            reps = event.total_reps,
            sets = event.sets,
            "Tracker event"
        );
        self.events.push(event);
    }

    /// Build the session record for a workout that ended at `ended_at`
    #[must_use]
    pub fn finish(&self, ended_at: DateTime<Utc>) -> NewWorkoutSession {
        let elapsed_ms = (ended_at - self.started_at).num_milliseconds();
        let session = NewWorkoutSession {
            date: NewWorkoutSession::timestamp(ended_at),
            exercise: self.counter.exercise().to_owned(),
            reps: self.counter.total_reps(),
            sets: self.counter.sets_including_open(),
            accuracy: self.accuracy,
            duration: u64::try_from(elapsed_ms).unwrap_or(0),
        };
        info!(
            exercise = %session.exercise,
            reps = session.reps,
            sets = session.sets,
            duration_ms = session.duration,
            "Workout tracking finished"
        );
        session
    }

    /// Summary of the workout so far, ending at `ended_at`
    #[must_use]
    pub fn summary(&self, ended_at: DateTime<Utc>) -> SessionSummary {
        SessionSummary {
            exercise: self.counter.exercise().to_owned(),
            started_at: NewWorkoutSession::timestamp(self.started_at),
            ended_at: NewWorkoutSession::timestamp(ended_at),
            reps: self.counter.total_reps(),
            sets: self.counter.sets_including_open(),
            thresholds: self.counter.thresholds(),
            events: self.events.clone(),
        }
    }
}

impl std::fmt::Debug for SessionTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionTracker")
            .field("estimator", &self.estimator.name())
            .field("exercise", &self.counter.exercise())
            .field("reps", &self.counter.total_reps())
            .field("events", &self.events.len())
            .finish_non_exhaustive()
    }
}
