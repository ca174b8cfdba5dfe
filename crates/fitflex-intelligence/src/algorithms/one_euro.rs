// ABOUTME: One-Euro filter for smoothing noisy joint angle streams
// ABOUTME: Low jitter at rest, low lag during fast movement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFlex

use fitflex_core::constants::smoothing::{BETA, DERIVATIVE_CUTOFF, MIN_CUTOFF, MIN_DT_SECS};
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy)]
struct FilterState {
    value: f64,
    derivative: f64,
    time_secs: f64,
}

/// Adaptive low-pass filter (Casiez et al., 2012)
#[derive(Debug, Clone)]
pub struct OneEuroFilter {
    min_cutoff: f64,
    beta: f64,
    derivative_cutoff: f64,
    state: Option<FilterState>,
}

impl Default for OneEuroFilter {
    fn default() -> Self {
        Self::new(MIN_CUTOFF, BETA, DERIVATIVE_CUTOFF)
    }
}

impl OneEuroFilter {
    /// Create a filter with explicit tuning
    #[must_use]
    pub const fn new(min_cutoff: f64, beta: f64, derivative_cutoff: f64) -> Self {
        Self {
            min_cutoff,
            beta,
            derivative_cutoff,
            state: None,
        }
    }

    fn alpha(cutoff: f64, dt: f64) -> f64 {
        let tau = 1.0 / (2.0 * PI * cutoff);
        1.0 / (1.0 + tau / dt)
    }

    /// Smooth one sample taken at `timestamp_ms`; the first sample passes through
    pub fn filter(&mut self, value: f64, timestamp_ms: u64) -> f64 {
        let time_secs = timestamp_ms as f64 / 1000.0;
        let Some(prev) = self.state else {
            self.state = Some(FilterState {
                value,
                derivative: 0.0,
                time_secs,
            });
            return value;
        };

        let dt = (time_secs - prev.time_secs).max(MIN_DT_SECS);
        let raw_derivative = (value - prev.value) / dt;
        let a_d = Self::alpha(self.derivative_cutoff, dt);
        let derivative = a_d.mul_add(raw_derivative, (1.0 - a_d) * prev.derivative);
        let cutoff = self.beta.mul_add(derivative.abs(), self.min_cutoff);
        let a = Self::alpha(cutoff, dt);
        let smoothed = a.mul_add(value, (1.0 - a) * prev.value);

        self.state = Some(FilterState {
            value: smoothed,
            derivative,
            time_secs,
        });
        smoothed
    }

    /// Forget history so the next sample passes through
    pub fn reset(&mut self) {
        self.state = None;
    }
}
