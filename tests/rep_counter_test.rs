// ABOUTME: Integration tests for the angle-driven rep counter
// ABOUTME: Full cycles, debounce, idle set closing, calibration, and reset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFlex

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitflex::intelligence::rep_counter::RepStage;
use fitflex::intelligence::{RepCounter, RepEvent, RepThresholds};
use fitflex::models::ExerciseKind;

/// Feed `count` copies of `angle` spaced `step_ms` apart, starting at `*t_ms`
fn feed(
    counter: &mut RepCounter,
    angle: f64,
    count: usize,
    t_ms: &mut u64,
    step_ms: u64,
) -> Vec<RepEvent> {
    let mut events = Vec::new();
    for _ in 0..count {
        if let Some(event) = counter.update(angle, *t_ms) {
            events.push(event);
        }
        *t_ms += step_ms;
    }
    events
}

/// One slow curl: five extended frames then five flexed frames
fn curl(counter: &mut RepCounter, t_ms: &mut u64) -> Vec<RepEvent> {
    let mut events = feed(counter, 170.0, 5, t_ms, 100);
    events.extend(feed(counter, 20.0, 5, t_ms, 100));
    events
}

#[test]
fn test_full_cycle_counts_once() {
    let mut counter = RepCounter::new("bicep_curl");
    let mut t = 0;
    assert_eq!(counter.stage(), None);

    let events = curl(&mut counter, &mut t);
    assert_eq!(events, [RepEvent::Rep]);
    assert_eq!(counter.stage(), Some(RepStage::Flexed));

    // Holding the flexed position does not count again
    assert!(feed(&mut counter, 20.0, 10, &mut t, 100).is_empty());
    assert_eq!(counter.total_reps(), 1);
    assert_eq!(counter.current_set_reps(), 1);
}

#[test]
fn test_flexing_without_extension_does_not_count() {
    let mut counter = RepCounter::new("bicep_curl");
    let mut t = 0;
    assert!(feed(&mut counter, 20.0, 10, &mut t, 100).is_empty());
    assert_eq!(counter.total_reps(), 0);
}

#[test]
fn test_fast_oscillation_is_debounced() {
    let mut counter = RepCounter::new("bicep_curl");
    let mut t = 0;
    assert_eq!(curl(&mut counter, &mut t), [RepEvent::Rep]);

    // A second full cycle inside 250 ms of the first rep
    let mut fast = feed(&mut counter, 170.0, 5, &mut t, 10);
    fast.extend(feed(&mut counter, 20.0, 5, &mut t, 10));
    assert!(fast.is_empty());
    assert_eq!(counter.total_reps(), 1);

    // A normal-speed cycle afterwards counts
    assert_eq!(curl(&mut counter, &mut t), [RepEvent::Rep]);
    assert_eq!(counter.total_reps(), 2);
}

#[test]
fn test_idle_pause_closes_set() {
    let mut counter = RepCounter::new("bicep_curl");
    let mut t = 0;
    curl(&mut counter, &mut t);
    curl(&mut counter, &mut t);
    assert_eq!(counter.current_set_reps(), 2);
    assert_eq!(counter.sets_including_open(), 1);

    // Last rep landed at t - 100; stay flexed for just over ten seconds
    let last_rep = t - 100;
    assert_eq!(counter.update(20.0, last_rep + 10_000), None);
    assert_eq!(counter.update(20.0, last_rep + 10_001), Some(RepEvent::SetCompleted));
    assert_eq!(counter.completed_sets(), 1);
    assert_eq!(counter.current_set_reps(), 0);
    assert_eq!(counter.total_reps(), 2);

    // No reps pending, so further idling closes nothing
    assert_eq!(counter.update(20.0, last_rep + 30_000), None);
    assert_eq!(counter.completed_sets(), 1);
}

#[test]
fn test_default_thresholds_per_exercise() {
    assert_eq!(
        RepCounter::new("lat_pulldown").thresholds(),
        RepThresholds::for_exercise(ExerciseKind::LatPulldown)
    );
    let unknown = RepCounter::new("kettlebell_swing").thresholds();
    assert!((unknown.bottom_deg - 40.0).abs() < f64::EPSILON);
    assert!((unknown.top_deg - 160.0).abs() < f64::EPSILON);
}

#[test]
fn test_calibration_moves_thresholds() {
    let mut counter = RepCounter::new("bicep_curl");
    counter.start_calibration();
    assert!(counter.is_calibrating());

    for t in [0, 500, 1_000] {
        assert_eq!(counter.update(60.0, t), None);
    }

    assert!(!counter.is_calibrating());
    let thresholds = counter.thresholds();
    assert!((thresholds.bottom_deg - 62.0).abs() < 1e-9);
    assert!((thresholds.top_deg - 155.0).abs() < 1e-9);
    assert_eq!(counter.total_reps(), 0);
}

#[test]
fn test_calibration_ignores_closely_spaced_samples() {
    let mut counter = RepCounter::new("bicep_curl");
    counter.start_calibration();
    for t in [0, 100, 200, 300] {
        counter.update(60.0, t);
    }
    assert!(counter.is_calibrating());

    let thresholds = counter.finish_calibration().unwrap();
    assert!((thresholds.bottom_deg - 62.0).abs() < 1e-9);
}

#[test]
fn test_calibration_without_samples_keeps_thresholds() {
    let mut counter = RepCounter::new("lat_pulldown");
    let before = counter.thresholds();
    counter.start_calibration();
    counter.update(150.0, 0);
    assert_eq!(counter.finish_calibration(), None);
    assert_eq!(counter.thresholds(), before);
}

#[test]
fn test_reset_clears_counters_but_keeps_thresholds() {
    let custom = RepThresholds {
        bottom_deg: 50.0,
        top_deg: 150.0,
        min_amplitude_deg: 30.0,
    };
    let mut counter = RepCounter::with_thresholds("bicep_curl", custom);
    let mut t = 0;
    curl(&mut counter, &mut t);
    assert_eq!(counter.total_reps(), 1);

    counter.reset();
    assert_eq!(counter.total_reps(), 0);
    assert_eq!(counter.completed_sets(), 0);
    assert_eq!(counter.stage(), None);
    assert_eq!(counter.thresholds(), custom);
}
