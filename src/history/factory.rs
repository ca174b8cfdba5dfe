// ABOUTME: History backend factory for configuration-based backend selection
// ABOUTME: Maps HistoryConfig onto a boxed HistoryBackend implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFlex

use tracing::info;

use super::backend::HistoryBackend;
use super::file::JsonFileBackend;
use super::memory::InMemoryBackend;
use crate::config::{BackendKind, HistoryConfig};

/// Build the backend selected by `config`
#[must_use]
pub fn create_backend(config: &HistoryConfig) -> Box<dyn HistoryBackend> {
    match config.backend {
        BackendKind::File => {
            let backend = JsonFileBackend::new(&config.data_dir, &config.storage_key);
            info!(path = %backend.path().display(), "Using JSON file history backend");
            Box::new(backend)
        }
        BackendKind::Memory => {
            info!(
                key = %config.storage_key,
                "Using in-memory history backend; sessions are not kept after exit"
            );
            Box::new(InMemoryBackend::new())
        }
    }
}
