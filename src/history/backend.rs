// ABOUTME: Persistence seam for the workout history and the shared JSON codec
// ABOUTME: Backends store one blob per storage key; the codec defines its layout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFlex

use fitflex_core::errors::AppResult;
use fitflex_core::models::WorkoutSession;

/// Durable storage for the session sequence
///
/// Implementations hold a single value: the whole history, newest first.
pub trait HistoryBackend: Send + Sync {
    /// Read the persisted sequence
    ///
    /// `Ok(None)` means nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidFormat` when the stored value cannot be
    /// decoded, or `ErrorCode::StorageError` when it cannot be read
    fn load(&self) -> AppResult<Option<Vec<WorkoutSession>>>;

    /// Replace the persisted sequence
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be encoded or written
    fn save(&self, sessions: &[WorkoutSession]) -> AppResult<()>;

    /// Short name for logs
    fn backend_name(&self) -> &'static str;
}

/// Encode sessions as a JSON array
///
/// # Errors
///
/// Returns a serialization error if encoding fails
pub fn encode_sessions(sessions: &[WorkoutSession]) -> AppResult<String> {
    Ok(serde_json::to_string(sessions)?)
}

/// Decode a stored blob; blank content counts as absent
///
/// # Errors
///
/// Returns `ErrorCode::InvalidFormat` if the blob is not a session array
pub fn decode_sessions(raw: &str) -> AppResult<Option<Vec<WorkoutSession>>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(raw)?))
}
