// ABOUTME: Integration tests for the workout history store
// ABOUTME: Covers load recovery, ordering, add/delete persistence, and write failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFlex

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Duration;
use common::{fixed_now_utc, init_test_logging, memory_store, new_session, stamp, FlakyBackend};
use fitflex::errors::{AppError, ErrorCode, HistoryError};
use fitflex::history::{HistoryBackend, InMemoryBackend, WorkoutHistoryStore};
use fitflex::intelligence::Period;

#[test]
fn test_missing_value_starts_empty() {
    let store = memory_store();
    assert!(store.is_empty());
    assert_eq!(store.backend_name(), "memory");
}

#[test]
fn test_corrupt_blob_loads_as_empty() {
    init_test_logging();
    for raw in ["{not json", "42", r#"[{"id": 1}]"#] {
        let store = WorkoutHistoryStore::load(Box::new(InMemoryBackend::with_raw(raw)));
        assert!(store.is_empty(), "blob {raw:?} should be discarded");
    }
}

#[test]
fn test_corrupt_blob_is_overwritten_by_next_add() {
    init_test_logging();
    let backend = FlakyBackend::with_raw("garbage");
    let mut store = WorkoutHistoryStore::load(Box::new(backend.clone()));
    assert!(store.is_empty());
    assert_eq!(backend.raw_blob().as_deref(), Some("garbage"));

    let session = store
        .add_session(new_session(stamp(&fixed_now_utc()), "bicep_curl", 10))
        .unwrap();
    assert_eq!(backend.load().unwrap(), Some(vec![session]));
}

#[test]
fn test_new_sessions_are_prepended() {
    let mut store = memory_store();
    let date = stamp(&fixed_now_utc());
    let first = store
        .add_session(new_session(date.clone(), "bicep_curl", 10))
        .unwrap();
    let second = store
        .add_session(new_session(date, "lat_pulldown", 8))
        .unwrap();

    let ids: Vec<&str> = store.sessions().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, [second.id.as_str(), first.id.as_str()]);
    assert_ne!(first.id, second.id);
}

#[test]
fn test_add_then_delete_restores_persisted_sequence() {
    init_test_logging();
    let backend = FlakyBackend::default();
    let mut store = WorkoutHistoryStore::load(Box::new(backend.clone()));
    store
        .add_session(new_session(stamp(&fixed_now_utc()), "bicep_curl", 10))
        .unwrap();
    let before = backend.raw_blob();

    let added = store
        .add_session(new_session(stamp(&fixed_now_utc()), "lat_pulldown", 12))
        .unwrap();
    assert_ne!(backend.raw_blob(), before);

    store.delete_session(&added.id).unwrap();
    assert_eq!(backend.raw_blob(), before);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_delete_unknown_id_is_noop() {
    let mut store = memory_store();
    store
        .add_session(new_session(stamp(&fixed_now_utc()), "bicep_curl", 10))
        .unwrap();
    store.delete_session("no-such-id").unwrap();
    assert_eq!(store.len(), 1);
}

#[test]
fn test_out_of_range_accuracy_rejected_without_change() {
    let mut store = memory_store();
    let mut input = new_session(stamp(&fixed_now_utc()), "bicep_curl", 10);
    input.accuracy = 101;

    let err = store.add_session(input).unwrap_err();
    assert!(matches!(
        err,
        HistoryError::InvalidSession {
            field: "accuracy",
            ..
        }
    ));
    assert!(!err.applied_in_memory());
    assert!(store.is_empty());
    assert_eq!(AppError::from(err).code, ErrorCode::ValueOutOfRange);
}

#[test]
fn test_failed_write_keeps_record_in_memory() {
    init_test_logging();
    let backend = FlakyBackend::default();
    let mut store = WorkoutHistoryStore::load(Box::new(backend.clone()));
    backend.set_failing(true);

    let err = store
        .add_session(new_session(stamp(&fixed_now_utc()), "bicep_curl", 10))
        .unwrap_err();
    assert!(err.applied_in_memory());
    let kept = err.session().expect("record carried by the error").clone();
    assert_eq!(store.sessions(), [kept.clone()]);
    assert!(backend.raw_blob().is_none());

    let app_error = AppError::from(err);
    assert_eq!(app_error.code, ErrorCode::StorageError);
    assert_eq!(app_error.resource_id.as_deref(), Some(kept.id.as_str()));
}

#[test]
fn test_failed_delete_reports_not_persisted() {
    init_test_logging();
    let backend = FlakyBackend::default();
    let mut store = WorkoutHistoryStore::load(Box::new(backend.clone()));
    let session = store
        .add_session(new_session(stamp(&fixed_now_utc()), "bicep_curl", 10))
        .unwrap();
    backend.set_failing(true);

    let err = store.delete_session(&session.id).unwrap_err();
    assert!(matches!(err, HistoryError::NotPersisted { session: None, .. }));
    assert!(store.get(&session.id).is_none());
}

#[test]
fn test_reload_picks_up_backend_changes() {
    init_test_logging();
    let backend = FlakyBackend::default();
    let mut writer = WorkoutHistoryStore::load(Box::new(backend.clone()));
    let mut reader = WorkoutHistoryStore::load(Box::new(backend));
    writer
        .add_session(new_session(stamp(&fixed_now_utc()), "bicep_curl", 10))
        .unwrap();

    assert!(reader.is_empty());
    reader.reload();
    assert_eq!(reader.sessions(), writer.sessions());
}

#[test]
fn test_store_conveniences_apply_week_filter() {
    let mut store = memory_store();
    let now = fixed_now_utc();
    store
        .add_session(new_session(stamp(&(now - Duration::days(10))), "bicep_curl", 20))
        .unwrap();
    store
        .add_session(new_session(stamp(&now), "bicep_curl", 10))
        .unwrap();

    let stats = store.statistics(Period::Week, &now);
    assert_eq!(stats.total_workouts, 1);
    assert_eq!(stats.total_reps, 10);

    let chart = store.weekly_chart(&now);
    assert_eq!(chart.iter().map(|b| b.reps).sum::<u64>(), 10);
}

#[test]
fn test_all_time_statistics_cover_whole_history() {
    let mut store = memory_store();
    let now = fixed_now_utc();
    store
        .add_session(new_session(stamp(&(now - Duration::days(10))), "lat_pulldown", 20))
        .unwrap();
    store
        .add_session(new_session(stamp(&now), "bicep_curl", 10))
        .unwrap();

    let all_time = store.all_time_statistics();
    assert_eq!(all_time.total_workouts, 2);
    assert_eq!(all_time.total_reps, 30);
    assert_eq!(all_time.avg_reps, 15);

    let week = store.statistics(Period::Week, &now);
    assert_eq!(week.total_workouts, 1);
    assert_eq!(week.total_reps, 10);
}
