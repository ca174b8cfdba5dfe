// ABOUTME: JSON file history backend with atomic replace on save
// ABOUTME: Stores the blob at <data_dir>/<key>.json via a temp file and rename
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFlex

use fitflex_core::constants::storage::HISTORY_FILE_EXTENSION;
use fitflex_core::errors::{AppError, AppResult};
use fitflex_core::models::WorkoutSession;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

use super::backend::{decode_sessions, encode_sessions, HistoryBackend};

/// History stored as one JSON file
///
/// Saves write a uniquely named sibling file, flush it to disk, and rename
/// it over the target, so readers see either the old or the new history.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// Backend for `<data_dir>/<storage_key>.json`
    #[must_use]
    pub fn new(data_dir: impl AsRef<Path>, storage_key: &str) -> Self {
        Self {
            path: data_dir
                .as_ref()
                .join(format!("{storage_key}.{HISTORY_FILE_EXTENSION}")),
        }
    }

    /// Location of the history file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> AppResult<PathBuf> {
        let parent = self.path.parent().ok_or_else(|| {
            AppError::storage(format!(
                "History path {} has no parent directory",
                self.path.display()
            ))
        })?;
        let file_name = self
            .path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                AppError::storage(format!(
                    "History path {} has no file name",
                    self.path.display()
                ))
            })?;
        Ok(parent.join(format!(".{file_name}.{}.tmp", Uuid::new_v4().simple())))
    }
}

impl HistoryBackend for JsonFileBackend {
    fn load(&self) -> AppResult<Option<Vec<WorkoutSession>>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AppError::storage(format!(
                    "Failed to read {}",
                    self.path.display()
                ))
                .with_source(e))
            }
        };
        decode_sessions(&content)
    }

    fn save(&self, sessions: &[WorkoutSession]) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let encoded = encode_sessions(sessions)?;
        let tmp_path = self.temp_path()?;

        let written = File::create(&tmp_path).and_then(|mut tmp_file| {
            tmp_file.write_all(encoded.as_bytes())?;
            tmp_file.sync_all()
        });
        if let Err(e) = written.and_then(|()| fs::rename(&tmp_path, &self.path)) {
            // Best effort; the target file is untouched either way
            let _ = fs::remove_file(&tmp_path);
            return Err(AppError::storage(format!(
                "Failed to write {}",
                self.path.display()
            ))
            .with_source(e));
        }

        debug!(
            path = %self.path.display(),
            sessions = sessions.len(),
            "History file written"
        );
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "json_file"
    }
}
