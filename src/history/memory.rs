// ABOUTME: In-memory history backend holding the serialized blob under one key
// ABOUTME: Used by tests and the CLI memory mode; can be seeded with raw content
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFlex

use fitflex_core::errors::{AppError, AppResult};
use fitflex_core::models::WorkoutSession;
use std::sync::{Mutex, MutexGuard};

use super::backend::{decode_sessions, encode_sessions, HistoryBackend};

/// Process-local history storage
///
/// Keeps the encoded blob rather than the decoded sessions so a corrupted
/// value can be modeled exactly.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    blob: Mutex<Option<String>>,
}

impl InMemoryBackend {
    /// Empty backend
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend already holding `raw` under the storage key
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            blob: Mutex::new(Some(raw.into())),
        }
    }

    /// Copy of the stored blob
    ///
    /// # Errors
    ///
    /// Returns an internal error if the lock is poisoned
    pub fn raw_blob(&self) -> AppResult<Option<String>> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, Option<String>>> {
        self.blob
            .lock()
            .map_err(|e| AppError::internal(format!("History blob lock poisoned: {e}")))
    }
}

impl HistoryBackend for InMemoryBackend {
    fn load(&self) -> AppResult<Option<Vec<WorkoutSession>>> {
        let guard = self.lock()?;
        match guard.as_deref() {
            Some(raw) => decode_sessions(raw),
            None => Ok(None),
        }
    }

    fn save(&self, sessions: &[WorkoutSession]) -> AppResult<()> {
        let encoded = encode_sessions(sessions)?;
        *self.lock()? = Some(encoded);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_backend_loads_none() {
        let backend = InMemoryBackend::new();
        assert!(backend.load().unwrap().is_none());
        assert!(backend.raw_blob().unwrap().is_none());
    }

    #[test]
    fn test_save_replaces_blob() {
        let backend = InMemoryBackend::with_raw("not json");
        backend.save(&[]).unwrap();
        assert_eq!(backend.raw_blob().unwrap().as_deref(), Some("[]"));
        assert_eq!(backend.load().unwrap(), Some(Vec::new()));
    }
}
