// ABOUTME: Angle-driven rep and set counter with threshold calibration
// ABOUTME: Stage machine over a moving-average joint angle with explicit timestamps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFlex

//! # Rep Counter
//!
//! A rep is one full cycle: the averaged joint angle rises above the top
//! threshold (arm extended), then drops below the bottom threshold (arm
//! flexed). Pending reps close into a set after a long enough pause.
//!
//! Timestamps are supplied by the caller in milliseconds. They only need to
//! be monotonic within one counter; going backwards is treated as zero
//! elapsed time.

use fitflex_core::constants::tracking::{
    ANGLE_WINDOW, CALIBRATION_MAX_BOTTOM_DEG, CALIBRATION_SAMPLES, CALIBRATION_SPACING_MS,
    EXTENDED_ANGLE_DEG, MAX_TOP_THRESHOLD_DEG, MIN_REP_MS, SET_IDLE_MS,
};
use fitflex_core::models::ExerciseKind;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, info};

/// Margin added above the calibrated bottom
const BOTTOM_MARGIN_DEG: f64 = 2.0;

/// Margin kept below full extension when deriving amplitude
const EXTENSION_MARGIN_DEG: f64 = 5.0;

/// Angle thresholds for one exercise
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RepThresholds {
    /// Averaged angle below which the joint counts as flexed
    pub bottom_deg: f64,
    /// Averaged angle above which the joint counts as extended
    pub top_deg: f64,
    /// Smallest bottom-to-top range calibration may produce
    pub min_amplitude_deg: f64,
}

impl RepThresholds {
    /// Default thresholds for a known exercise
    #[must_use]
    pub const fn for_exercise(kind: ExerciseKind) -> Self {
        match kind {
            ExerciseKind::BicepCurl => Self {
                bottom_deg: 40.0,
                top_deg: 160.0,
                min_amplitude_deg: 30.0,
            },
            ExerciseKind::LatPulldown => Self {
                bottom_deg: 70.0,
                top_deg: 160.0,
                min_amplitude_deg: 30.0,
            },
        }
    }

    /// Defaults for a stored exercise key; unknown keys use the curl profile
    #[must_use]
    pub fn for_key(key: &str) -> Self {
        Self::for_exercise(ExerciseKind::from_key(key).unwrap_or(ExerciseKind::BicepCurl))
    }

    /// Thresholds derived from calibration bottoms
    fn calibrated(mean_bottom: f64, min_amplitude_deg: f64) -> Self {
        let amplitude =
            min_amplitude_deg.max(EXTENDED_ANGLE_DEG - mean_bottom - EXTENSION_MARGIN_DEG);
        Self {
            bottom_deg: mean_bottom + BOTTOM_MARGIN_DEG,
            top_deg: MAX_TOP_THRESHOLD_DEG.min(mean_bottom + amplitude),
            min_amplitude_deg,
        }
    }
}

/// Position within a rep cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepStage {
    /// Joint opened past the top threshold
    Extended,
    /// Joint closed past the bottom threshold
    Flexed,
}

/// Something countable happened on this sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepEvent {
    /// A rep was registered
    Rep,
    /// Pending reps were closed into a set
    SetCompleted,
}

/// Per-exercise rep and set counter
#[derive(Debug, Clone)]
pub struct RepCounter {
    exercise: String,
    thresholds: RepThresholds,
    stage: Option<RepStage>,
    window: VecDeque<f64>,
    current_set_reps: u32,
    total_reps: u32,
    completed_sets: u32,
    last_rep_ms: Option<u64>,
    set_anchor_ms: Option<u64>,
    calibration: Option<Vec<f64>>,
    last_sample_ms: Option<u64>,
}

impl RepCounter {
    /// Counter with the default thresholds for `exercise`
    #[must_use]
    pub fn new(exercise: impl Into<String>) -> Self {
        let exercise = exercise.into();
        let thresholds = RepThresholds::for_key(&exercise);
        Self::with_thresholds(exercise, thresholds)
    }

    /// Counter with explicit thresholds
    #[must_use]
    pub fn with_thresholds(exercise: impl Into<String>, thresholds: RepThresholds) -> Self {
        Self {
            exercise: exercise.into(),
            thresholds,
            stage: None,
            window: VecDeque::with_capacity(ANGLE_WINDOW),
            current_set_reps: 0,
            total_reps: 0,
            completed_sets: 0,
            last_rep_ms: None,
            set_anchor_ms: None,
            calibration: None,
            last_sample_ms: None,
        }
    }

    /// Exercise key this counter tracks
    #[must_use]
    pub fn exercise(&self) -> &str {
        &self.exercise
    }

    /// Active thresholds
    #[must_use]
    pub const fn thresholds(&self) -> RepThresholds {
        self.thresholds
    }

    /// Current stage, `None` before the first extension
    #[must_use]
    pub const fn stage(&self) -> Option<RepStage> {
        self.stage
    }

    /// Reps in the set that is still open
    #[must_use]
    pub const fn current_set_reps(&self) -> u32 {
        self.current_set_reps
    }

    /// Reps across all sets
    #[must_use]
    pub const fn total_reps(&self) -> u32 {
        self.total_reps
    }

    /// Sets closed by an idle pause
    #[must_use]
    pub const fn completed_sets(&self) -> u32 {
        self.completed_sets
    }

    /// Completed sets plus the open one, if it has reps
    #[must_use]
    pub const fn sets_including_open(&self) -> u32 {
        if self.current_set_reps > 0 {
            self.completed_sets + 1
        } else {
            self.completed_sets
        }
    }

    /// Whether calibration sampling is active
    #[must_use]
    pub const fn is_calibrating(&self) -> bool {
        self.calibration.is_some()
    }

    /// Feed one angle sample
    pub fn update(&mut self, angle_deg: f64, timestamp_ms: u64) -> Option<RepEvent> {
        if self.window.len() == ANGLE_WINDOW {
            self.window.pop_front();
        }
        self.window.push_back(angle_deg);
        let average = self.window.iter().sum::<f64>() / self.window.len() as f64;

        if self.calibration.is_some() {
            self.sample_calibration(average, timestamp_ms);
            return None;
        }

        if average > self.thresholds.top_deg && self.stage != Some(RepStage::Extended) {
            self.stage = Some(RepStage::Extended);
        }

        if average < self.thresholds.bottom_deg && self.stage == Some(RepStage::Extended) {
            self.stage = Some(RepStage::Flexed);
            let debounced = self
                .last_rep_ms
                .is_some_and(|last| timestamp_ms.saturating_sub(last) < MIN_REP_MS);
            if debounced {
                debug!(exercise = %self.exercise, "Ignoring rep inside debounce window");
            } else {
                self.current_set_reps += 1;
                self.total_reps += 1;
                self.last_rep_ms = Some(timestamp_ms);
                self.set_anchor_ms = Some(timestamp_ms);
                return Some(RepEvent::Rep);
            }
        }

        if let Some(anchor) = self.set_anchor_ms {
            if timestamp_ms.saturating_sub(anchor) > SET_IDLE_MS && self.current_set_reps > 0 {
                self.completed_sets += 1;
                self.current_set_reps = 0;
                self.set_anchor_ms = None;
                info!(
                    exercise = %self.exercise,
                    sets = self.completed_sets,
                    "Set completed after idle pause"
                );
                return Some(RepEvent::SetCompleted);
            }
        }

        None
    }

    /// Begin sampling bottoms to personalize thresholds
    pub fn start_calibration(&mut self) {
        info!(
            exercise = %self.exercise,
            samples = CALIBRATION_SAMPLES,
            "Calibration started"
        );
        self.calibration = Some(Vec::with_capacity(CALIBRATION_SAMPLES));
        self.last_sample_ms = None;
    }

    fn sample_calibration(&mut self, average: f64, timestamp_ms: u64) {
        let Some(samples) = self.calibration.as_mut() else {
            return;
        };
        let spaced = match self.last_sample_ms {
            Some(last) => timestamp_ms.saturating_sub(last) > CALIBRATION_SPACING_MS,
            None => true,
        };
        if average < CALIBRATION_MAX_BOTTOM_DEG
            && (samples.is_empty() || (samples.len() < CALIBRATION_SAMPLES && spaced))
        {
            samples.push(average);
            self.last_sample_ms = Some(timestamp_ms);
            debug!(
                exercise = %self.exercise,
                sample = samples.len(),
                angle = average,
                "Calibration sample"
            );
        }
        if samples.len() >= CALIBRATION_SAMPLES {
            self.finish_calibration();
        }
    }

    /// Stop calibration and apply the sampled bottoms.
    ///
    /// Returns the new thresholds, or `None` if nothing was sampled (the
    /// previous thresholds stay in place).
    pub fn finish_calibration(&mut self) -> Option<RepThresholds> {
        let samples = self.calibration.take()?;
        if samples.is_empty() {
            info!(exercise = %self.exercise, "Calibration finished without samples");
            return None;
        }
        let mean_bottom = samples.iter().sum::<f64>() / samples.len() as f64;
        self.thresholds = RepThresholds::calibrated(mean_bottom, self.thresholds.min_amplitude_deg);
        info!(
            exercise = %self.exercise,
            bottom = self.thresholds.bottom_deg,
            top = self.thresholds.top_deg,
            "Calibrated thresholds"
        );
        Some(self.thresholds)
    }

    /// Clear counters, stage, angle history, and calibration; keep thresholds
    pub fn reset(&mut self) {
        self.stage = None;
        self.window.clear();
        self.current_set_reps = 0;
        self.total_reps = 0;
        self.completed_sets = 0;
        self.last_rep_ms = None;
        self.set_anchor_ms = None;
        self.calibration = None;
        self.last_sample_ms = None;
    }
}
