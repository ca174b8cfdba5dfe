// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for storage, history windows, and rep tracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFlex

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single flat list.

/// Durable storage layout
pub mod storage {
    /// Key holding the serialized session history
    pub const HISTORY_KEY: &str = "tvl_history";
    /// File extension used by the JSON file backend
    pub const HISTORY_FILE_EXTENSION: &str = "json";
    /// Application directory name under the platform data directory
    pub const APP_DIR_NAME: &str = "fitflex";
    /// Fallback data directory when the platform has none
    pub const FALLBACK_DATA_DIR: &str = "./data";
}

/// History aggregation
pub mod history {
    /// Length of the rolling "week" window in hours
    pub const WEEK_WINDOW_HOURS: i64 = 7 * 24;
    /// Number of calendar days in the weekly chart
    pub const CHART_DAYS: usize = 7;
    /// Favorite exercise reported for an empty history
    pub const NO_FAVORITE_EXERCISE: &str = "None";
    /// Upper bound for form accuracy
    pub const MAX_ACCURACY: u8 = 100;
}

/// Live session tracking
pub mod tracking {
    /// Accuracy recorded when the tracker has no form score of its own
    pub const DEFAULT_SESSION_ACCURACY: u8 = 95;
    /// Moving-average window for joint angles (frames)
    pub const ANGLE_WINDOW: usize = 5;
    /// Reps closer together than this are treated as jitter
    pub const MIN_REP_MS: u64 = 250;
    /// Idle time after the last rep that closes a set
    pub const SET_IDLE_MS: u64 = 10_000;
    /// Bottom samples collected during calibration
    pub const CALIBRATION_SAMPLES: usize = 3;
    /// Minimum spacing between calibration samples
    pub const CALIBRATION_SPACING_MS: u64 = 400;
    /// Only angles below this count as a calibration bottom
    pub const CALIBRATION_MAX_BOTTOM_DEG: f64 = 100.0;
    /// Nominal fully-extended joint angle used to derive amplitude
    pub const EXTENDED_ANGLE_DEG: f64 = 160.0;
    /// Ceiling for a calibrated top threshold
    pub const MAX_TOP_THRESHOLD_DEG: f64 = 170.0;
    /// Lowest angle produced by the mock estimator
    pub const MOCK_MIN_ANGLE_DEG: u32 = 30;
    /// Highest angle produced by the mock estimator
    pub const MOCK_MAX_ANGLE_DEG: u32 = 160;
    /// Frame spacing for simulated capture (~30 fps)
    pub const SIMULATED_FRAME_INTERVAL_MS: u64 = 33;
}

/// One-Euro filter defaults
pub mod smoothing {
    /// Minimum cutoff frequency
    pub const MIN_CUTOFF: f64 = 1.0;
    /// Speed coefficient
    pub const BETA: f64 = 0.007;
    /// Cutoff for the derivative filter
    pub const DERIVATIVE_CUTOFF: f64 = 1.0;
    /// Smallest time step accepted between samples (seconds)
    pub const MIN_DT_SECS: f64 = 1e-6;
}
