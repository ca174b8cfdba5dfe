// ABOUTME: Catalog of exercises the tracker knows how to count
// ABOUTME: Maps stable exercise keys to display names and descriptions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFlex

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Exercises with dedicated rep tracking.
///
/// Sessions store the raw key string, so history may also contain exercises
/// outside this list; those are aggregated normally and displayed by key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    /// Standing dumbbell or cable curl
    BicepCurl,
    /// Cable lat pulldown
    LatPulldown,
}

impl ExerciseKind {
    /// Every known exercise, in catalog order
    pub const ALL: [Self; 2] = [Self::BicepCurl, Self::LatPulldown];

    /// Stable key stored in session records
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::BicepCurl => "bicep_curl",
            Self::LatPulldown => "lat_pulldown",
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::BicepCurl => "Bicep Curl",
            Self::LatPulldown => "Lat Pulldown",
        }
    }

    /// One-line description for exercise pickers
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::BicepCurl => "Track your bicep curl form and reps",
            Self::LatPulldown => "Track your lat pulldown form and reps",
        }
    }

    /// Look up a stored key
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    /// Display name for any stored key, falling back to the key itself
    #[must_use]
    pub fn display_name_for(key: &str) -> &str {
        match Self::from_key(key) {
            Some(kind) => kind.display_name(),
            None => key,
        }
    }
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ExerciseKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s.trim()).ok_or_else(|| {
            AppError::invalid_input(format!(
                "Unknown exercise '{s}', expected one of: bicep_curl, lat_pulldown"
            ))
        })
    }
}
