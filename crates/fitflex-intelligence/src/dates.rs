// ABOUTME: Lenient parsing of stored session dates into a caller-chosen time zone
// ABOUTME: Malformed dates yield None so filters treat them as non-matching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitFlex

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Date-time layouts accepted when the stored value has no offset
const NAIVE_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Minute-precision ISO 8601 with an offset or `Z`
const MINUTE_OFFSET_FORMAT: &str = "%Y-%m-%dT%H:%M%#z";

/// Bare calendar date layout
const DATE_ONLY_FORMAT: &str = "%Y-%m-%d";

/// Parse a stored session date and express it in `tz`.
///
/// Accepted layouts:
/// - RFC 3339 with any offset (`2025-03-01T09:30:00.000Z`)
/// - minute precision with an offset (`2025-03-01T09:30Z`, `2025-03-01T09:30+02:00`)
/// - date-time without offset, with or without seconds, read as local time in `tz`
/// - bare `YYYY-MM-DD`, read as UTC midnight
///
/// Returns `None` for anything else.
pub fn parse_session_date<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(tz));
    }

    if let Ok(parsed) = DateTime::parse_from_str(raw, MINUTE_OFFSET_FORMAT) {
        return Some(parsed.with_timezone(tz));
    }

    if let Some(utc) = raw.strip_suffix('Z').or_else(|| raw.strip_suffix('z')) {
        if let Some(naive) = parse_naive(utc) {
            return Some(Utc.from_utc_datetime(&naive).with_timezone(tz));
        }
    }

    if let Some(naive) = parse_naive(raw) {
        return tz.from_local_datetime(&naive).earliest();
    }

    NaiveDate::parse_from_str(raw, DATE_ONLY_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| Utc.from_utc_datetime(&midnight).with_timezone(tz))
}

fn parse_naive(raw: &str) -> Option<NaiveDateTime> {
    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}
