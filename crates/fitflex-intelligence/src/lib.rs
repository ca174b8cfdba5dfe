// ABOUTME: Workout history aggregation and rep tracking engine
// ABOUTME: Period filters, statistics, weekly charts, rep counting, and pose estimation seam
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFlex

#![deny(unsafe_code)]

//! # FitFlex Intelligence
//!
//! Everything here is a pure function of its inputs or a small state machine
//! driven by explicit timestamps. Nothing reads the system clock: callers pass
//! `now` (and its time zone) so results are reproducible in tests.

/// Session date parsing
pub mod dates;

/// Recency filters (today, rolling week, calendar month)
pub mod period;

/// Summary statistics over a set of sessions
pub mod statistics;

/// Seven-day chart bucketing
pub mod weekly_chart;

/// Geometry and signal smoothing
pub mod algorithms;

/// Angle-driven rep and set counting
pub mod rep_counter;

/// Pose estimator seam and test doubles
pub mod pose;

pub use period::{filter_by_period, Period};
pub use rep_counter::{RepCounter, RepEvent, RepThresholds};
pub use statistics::{compute_statistics, Statistics};
pub use weekly_chart::{compute_weekly_chart, DayBucket};
