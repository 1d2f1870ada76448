// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time parsing and display.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Shown in place of any value that is missing or cannot be rendered.
pub const NOT_AVAILABLE: &str = "N/A";

/// Parse the timestamp shapes the API is known to emit.
///
/// Accepts RFC 3339 (with offset or `Z`), naive `YYYY-MM-DDTHH:MM:SS[.f]`
/// (assumed UTC), and plain `YYYY-MM-DD` dates.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Format a UTC timestamp as a calendar date for display.
pub fn format_display_date(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}
