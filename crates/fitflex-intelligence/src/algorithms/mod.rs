// ABOUTME: Geometry and signal smoothing primitives for rep tracking
// ABOUTME: Joint angle computation and the One-Euro adaptive low-pass filter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFlex

/// Joint angle from three landmarks
pub mod angle;

/// One-Euro adaptive smoothing
pub mod one_euro;

pub use angle::{joint_angle_deg, Point2};
pub use one_euro::OneEuroFilter;
