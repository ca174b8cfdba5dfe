// ABOUTME: Joint angle computation from 2D pose landmarks
// ABOUTME: Angle at the middle point of a shoulder-elbow-wrist style triple
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFlex

use serde::{Deserialize, Serialize};

/// Guards the division when two landmarks coincide
const NORM_EPSILON: f64 = 1e-8;

/// Landmark position in image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    /// Horizontal position
    pub x: f64,
    /// Vertical position
    pub y: f64,
}

impl Point2 {
    /// Create a point
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Angle at `b` between the rays `b→a` and `b→c`, in degrees.
///
/// Coincident landmarks produce 90° instead of NaN.
#[must_use]
pub fn joint_angle_deg(a: Point2, b: Point2, c: Point2) -> f64 {
    let (bax, bay) = (a.x - b.x, a.y - b.y);
    let (bcx, bcy) = (c.x - b.x, c.y - b.y);
    let dot = bax.mul_add(bcx, bay * bcy);
    let norms = bax.hypot(bay) * bcx.hypot(bcy);
    let cosine = (dot / (norms + NORM_EPSILON)).clamp(-1.0, 1.0);
    cosine.acos().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-6
    }

    #[test]
    fn test_right_angle() {
        let angle = joint_angle_deg(
            Point2::new(0.0, 1.0),
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
        );
        assert!(close(angle, 90.0));
    }

    #[test]
    fn test_straight_arm() {
        let angle = joint_angle_deg(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        );
        assert!(close(angle, 180.0));
    }

    #[test]
    fn test_coincident_points_do_not_produce_nan() {
        let p = Point2::new(3.0, 3.0);
        assert!(close(joint_angle_deg(p, p, p), 90.0));
    }
}
