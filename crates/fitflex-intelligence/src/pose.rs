// ABOUTME: Pose estimator seam with a seeded mock and a scripted playback implementation
// ABOUTME: Produces a joint angle and a coaching cue per video frame
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFlex

//! # Pose Estimation Seam
//!
//! Real landmark detection lives outside this workspace. Anything that can
//! turn a frame into a joint angle and a coaching cue implements
//! [`PoseEstimator`]; the tracker only depends on the trait.
//!
//! Two implementations ship here:
//! - [`MockPoseEstimator`]: random angles and cues, reproducible from a seed
//! - [`ScriptedPoseEstimator`]: replays a recorded angle sequence

use fitflex_core::constants::tracking::{MOCK_MAX_ANGLE_DEG, MOCK_MIN_ANGLE_DEG};
use fitflex_core::errors::{AppError, AppResult};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

use crate::algorithms::{joint_angle_deg, Point2};

/// Borrowed view of one captured frame
#[derive(Debug, Clone, Copy)]
pub struct VideoFrame<'a> {
    /// Capture time in milliseconds
    pub timestamp_ms: u64,
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Raw pixel data, layout defined by the capture source
    pub pixels: &'a [u8],
}

impl VideoFrame<'static> {
    /// Frame with no pixel data, for estimators that ignore the image
    #[must_use]
    pub const fn empty(timestamp_ms: u64) -> Self {
        Self {
            timestamp_ms,
            width: 0,
            height: 0,
            pixels: &[],
        }
    }
}

/// Short form feedback shown over the video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoachCue {
    /// Movement looks right
    GoodForm,
    /// Elbows are drifting down
    ElbowsUp,
    /// Range of motion is incomplete
    FullRom,
    /// Movement is too fast or swinging
    KeepControl,
}

impl CoachCue {
    /// Full cue vocabulary
    pub const ALL: [Self; 4] = [
        Self::GoodForm,
        Self::ElbowsUp,
        Self::FullRom,
        Self::KeepControl,
    ];

    /// Text shown to the user
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::GoodForm => "Good Form",
            Self::ElbowsUp => "Elbows Up",
            Self::FullRom => "Full ROM",
            Self::KeepControl => "Keep Control",
        }
    }
}

impl fmt::Display for CoachCue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Estimator output for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoseReading {
    /// Primary tracked joint angle in degrees
    pub left_elbow_deg: f64,
    /// Coaching cue for this frame
    pub cue: CoachCue,
}

/// Shoulder, elbow, and wrist landmarks of one arm
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArmLandmarks {
    /// Shoulder position
    pub shoulder: Point2,
    /// Elbow position
    pub elbow: Point2,
    /// Wrist position
    pub wrist: Point2,
}

impl ArmLandmarks {
    /// Elbow flexion angle
    #[must_use]
    pub fn elbow_angle_deg(&self) -> f64 {
        joint_angle_deg(self.shoulder, self.elbow, self.wrist)
    }
}

/// Turns frames into joint angles and cues
pub trait PoseEstimator: Send {
    /// Analyze the next frame
    ///
    /// # Errors
    ///
    /// Returns an error when the estimator cannot produce a reading
    fn next_frame(&mut self, frame: &VideoFrame<'_>) -> AppResult<PoseReading>;

    /// Short name for logs
    fn name(&self) -> &'static str;
}

/// Placeholder estimator producing random angles and cues
#[derive(Debug, Clone)]
pub struct MockPoseEstimator {
    rng: ChaCha8Rng,
}

impl MockPoseEstimator {
    /// Reproducible sequence from `seed`
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Sequence seeded from OS entropy
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl PoseEstimator for MockPoseEstimator {
    fn next_frame(&mut self, _frame: &VideoFrame<'_>) -> AppResult<PoseReading> {
        let angle = self.rng.gen_range(MOCK_MIN_ANGLE_DEG..=MOCK_MAX_ANGLE_DEG);
        let cue = CoachCue::ALL[self.rng.gen_range(0..CoachCue::ALL.len())];
        Ok(PoseReading {
            left_elbow_deg: f64::from(angle),
            cue,
        })
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

/// Replays a recorded angle sequence, one angle per frame
#[derive(Debug, Clone)]
pub struct ScriptedPoseEstimator {
    angles: VecDeque<f64>,
    cue: CoachCue,
}

impl ScriptedPoseEstimator {
    /// Replay raw angles
    #[must_use]
    pub fn from_angles(angles: impl IntoIterator<Item = f64>) -> Self {
        Self {
            angles: angles.into_iter().collect(),
            cue: CoachCue::GoodForm,
        }
    }

    /// Replay recorded arm landmarks, converting each to an elbow angle
    #[must_use]
    pub fn from_arm_landmarks(frames: &[ArmLandmarks]) -> Self {
        Self::from_angles(frames.iter().map(ArmLandmarks::elbow_angle_deg))
    }

    /// Cue reported with every reading
    #[must_use]
    pub const fn with_cue(mut self, cue: CoachCue) -> Self {
        self.cue = cue;
        self
    }

    /// Frames left to replay
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.angles.len()
    }
}

impl PoseEstimator for ScriptedPoseEstimator {
    fn next_frame(&mut self, frame: &VideoFrame<'_>) -> AppResult<PoseReading> {
        let angle = self.angles.pop_front().ok_or_else(|| {
            AppError::unavailable(format!(
                "Scripted pose playback finished before frame at {} ms",
                frame.timestamp_ms
            ))
        })?;
        Ok(PoseReading {
            left_elbow_deg: angle,
            cue: self.cue,
        })
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}
