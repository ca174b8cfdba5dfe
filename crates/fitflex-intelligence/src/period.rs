// ABOUTME: Recency filters over workout history (today, rolling week, calendar month)
// ABOUTME: Pure functions of the session list and an explicit "now"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFlex

use chrono::{DateTime, Datelike, Duration, TimeZone};
use fitflex_core::constants::history::WEEK_WINDOW_HOURS;
use fitflex_core::errors::AppError;
use fitflex_core::models::WorkoutSession;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::dates::parse_session_date;

/// History view period.
///
/// `Week` is a rolling 7×24h window while `Month` starts at the first
/// calendar day of the current month. The two are deliberately not aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Same calendar day as `now`
    Today,
    /// Within the last 7×24 hours
    #[default]
    Week,
    /// On or after the first day of `now`'s month
    Month,
}

impl Period {
    /// Every period, in view order
    pub const ALL: [Self; 3] = [Self::Today, Self::Week, Self::Month];

    /// Stable key (`today`, `week`, `month`)
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    /// Tab label used by history views
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Week => "This Week",
            Self::Month => "This Month",
        }
    }

    /// Whether a parsed session date falls inside this period
    #[must_use]
    pub fn contains<Tz: TimeZone>(self, date: &DateTime<Tz>, now: &DateTime<Tz>) -> bool {
        match self {
            Self::Today => date.date_naive() == now.date_naive(),
            Self::Week => *date >= now.clone() - Duration::hours(WEEK_WINDOW_HOURS),
            Self::Month => now
                .date_naive()
                .with_day(1)
                .and_then(|first| first.and_hms_opt(0, 0, 0))
                .is_some_and(|month_start| date.naive_local() >= month_start),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Period {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "today" => Ok(Self::Today),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            other => Err(AppError::invalid_input(format!(
                "Unknown period '{other}', expected today, week, or month"
            ))),
        }
    }
}

/// Select the sessions that fall inside `period` relative to `now`.
///
/// Order is preserved (newest first). Sessions whose date cannot be parsed
/// never match.
#[must_use]
pub fn filter_by_period<Tz: TimeZone>(
    sessions: &[WorkoutSession],
    period: Period,
    now: &DateTime<Tz>,
) -> Vec<WorkoutSession> {
    let tz = now.timezone();
    sessions
        .iter()
        .filter(|session| {
            parse_session_date(&session.date, &tz).is_some_and(|date| period.contains(&date, now))
        })
        .cloned()
        .collect()
}
