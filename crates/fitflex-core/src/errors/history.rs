// ABOUTME: Workout history error types for store mutations
// ABOUTME: Provides structured errors that integrate with the main AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFlex

//! # History Error Types
//!
//! Mutations on the history store either reject bad input up front or succeed
//! in memory and then fail to persist. The second case is not fatal: the
//! record stays visible, and the error hands it back so the caller can warn
//! that it may be lost on restart.

use std::error::Error;
use std::fmt;

use super::AppError;
use crate::models::WorkoutSession;

/// Errors specific to workout history mutations.
#[derive(Debug)]
pub enum HistoryError {
    /// Session input failed validation and nothing was stored
    InvalidSession {
        /// Name of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },
    /// In-memory state changed but the backend write failed
    NotPersisted {
        /// Record created by the mutation, if it created one
        session: Option<Box<WorkoutSession>>,
        /// Underlying storage failure
        source: AppError,
    },
}

impl HistoryError {
    /// Create an "invalid session" error
    #[must_use]
    pub fn invalid_session(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidSession {
            field,
            reason: reason.into(),
        }
    }

    /// Create a "not persisted" error for a mutation that produced a record
    #[must_use]
    pub fn not_persisted(session: WorkoutSession, source: AppError) -> Self {
        Self::NotPersisted {
            session: Some(Box::new(session)),
            source,
        }
    }

    /// Create a "not persisted" error for a mutation without a record (deletion)
    #[must_use]
    pub const fn not_persisted_without_record(source: AppError) -> Self {
        Self::NotPersisted {
            session: None,
            source,
        }
    }

    /// The record kept in memory despite the failed write
    #[must_use]
    pub fn session(&self) -> Option<&WorkoutSession> {
        match self {
            Self::NotPersisted {
                session: Some(session),
                ..
            } => Some(session),
            Self::NotPersisted { session: None, .. } | Self::InvalidSession { .. } => None,
        }
    }

    /// Whether the in-memory state reflects the requested mutation
    #[must_use]
    pub const fn applied_in_memory(&self) -> bool {
        matches!(self, Self::NotPersisted { .. })
    }
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSession { field, reason } => {
                write!(f, "Invalid workout session field '{field}': {reason}")
            }
            Self::NotPersisted {
                session: Some(session),
                source,
            } => {
                write!(
                    f,
                    "Workout session '{}' was recorded but not saved: {source}",
                    session.id
                )
            }
            Self::NotPersisted {
                session: None,
                source,
            } => {
                write!(f, "Workout history change was not saved: {source}")
            }
        }
    }
}

impl Error for HistoryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidSession { .. } => None,
            Self::NotPersisted { source, .. } => Some(source),
        }
    }
}

impl From<HistoryError> for AppError {
    fn from(error: HistoryError) -> Self {
        match error {
            HistoryError::InvalidSession { field, ref reason } => {
                Self::out_of_range(format!("{field}: {reason}"))
            }
            HistoryError::NotPersisted { session, source } => {
                let mut converted = Self::new(source.code, source.message.clone());
                if let Some(session) = session {
                    converted = converted.with_resource_id(session.id);
                }
                converted.with_source(source)
            }
        }
    }
}
