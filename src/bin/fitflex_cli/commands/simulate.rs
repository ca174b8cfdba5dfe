// ABOUTME: Simulated workout command for the fitflex CLI
// ABOUTME: Runs the session tracker over mock pose readings and records the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFlex

use chrono::{Duration, Utc};
use fitflex::constants::tracking::SIMULATED_FRAME_INTERVAL_MS;
use fitflex::errors::AppResult;
use fitflex::history::WorkoutHistoryStore;
use fitflex::intelligence::pose::{MockPoseEstimator, VideoFrame};
use fitflex::tracker::SessionTracker;
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

type Result<T> = AppResult<T>;

use crate::helpers::display::{display_simulation, print_json};

/// Arguments of `fitflex simulate`
pub struct SimulateOptions {
    /// Exercise key to track
    pub exercise: String,
    /// Number of mock frames
    pub frames: u32,
    /// Seed for a reproducible run
    pub seed: Option<u64>,
    /// Where to export the session summary
    pub summary: Option<PathBuf>,
}

/// Track mock frames for the chosen exercise and store the session
pub fn run(store: &mut WorkoutHistoryStore, options: &SimulateOptions, json: bool) -> Result<()> {
    let frames = options.frames;
    let estimator = options
        .seed
        .map_or_else(MockPoseEstimator::from_entropy, MockPoseEstimator::seeded);
    let started_at = Utc::now();
    let mut tracker =
        SessionTracker::new(options.exercise.as_str(), Box::new(estimator), started_at);

    for index in 0..u64::from(frames) {
        let frame = VideoFrame::empty(index * SIMULATED_FRAME_INTERVAL_MS);
        tracker.process_frame(&frame)?;
    }

    let elapsed_ms = u64::from(frames) * SIMULATED_FRAME_INTERVAL_MS;
    let ended_at = started_at + Duration::milliseconds(i64::try_from(elapsed_ms).unwrap_or(i64::MAX));
    if let Some(path) = &options.summary {
        tracker.summary(ended_at).write_json(path)?;
    }
    let session = store.add_session(tracker.finish(ended_at))?;
    info!(
        session_id = %session.id,
        reps = session.reps,
        events = tracker.events().len(),
        "Simulated workout recorded"
    );

    if json {
        print_json(&json!({
            "session": session,
            "frames": frames,
            "events": tracker.events(),
        }))
    } else {
        display_simulation(&session, tracker.events(), frames);
        Ok(())
    }
}
