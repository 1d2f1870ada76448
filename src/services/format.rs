// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Field formatting for display.
//!
//! Every helper here accepts whatever the API sent (including nothing) and
//! returns something printable. None of them fail.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::models::Record;
use crate::time_utils::{format_display_date, parse_timestamp, NOT_AVAILABLE};

/// Podium markers for leaderboard positions 0, 1 and 2.
const RANK_MARKERS: [&str; 3] = ["🥇", "🥈", "🥉"];

/// Plain text for a scalar value; empty for null, absent or compound.
pub fn text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Date field as a calendar date, or `N/A`.
///
/// Strings are parsed as timestamps; integers are epoch milliseconds.
pub fn date(value: Option<&Value>) -> String {
    let parsed = match value {
        Some(Value::String(s)) => parse_timestamp(s),
        Some(Value::Number(n)) => n.as_i64().and_then(DateTime::<Utc>::from_timestamp_millis),
        _ => None,
    };
    parsed
        .map(format_display_date)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Optional numeric field, or `N/A` when absent or null.
///
/// Numeric strings are shown as sent; any other string counts as absent.
pub fn optional_number(value: Option<&Value>) -> String {
    match value {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) if s.trim().parse::<f64>().is_ok() => s.trim().to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Numeric total that defaults to `0` when missing.
pub fn number_or_zero(value: Option<&Value>) -> String {
    match optional_number(value) {
        n if n == NOT_AVAILABLE => "0".to_string(),
        n => n,
    }
}

/// Count and display string of a list-valued field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberList {
    pub count: usize,
    /// `", "`-joined names; `None` when the list is empty.
    pub joined: Option<String>,
}

impl MemberList {
    /// `"1 member"` / `"3 members"`.
    pub fn label(&self) -> String {
        let noun = if self.count == 1 { "member" } else { "members" };
        format!("{} {}", self.count, noun)
    }
}

/// Summarize a list field. Absent or non-sequence values count as empty.
pub fn member_list(value: Option<&Value>) -> MemberList {
    let Some(Value::Array(items)) = value else {
        return MemberList {
            count: 0,
            joined: None,
        };
    };

    let names: Vec<String> = items
        .iter()
        .map(|item| match item {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect();

    MemberList {
        count: names.len(),
        joined: (!names.is_empty()).then(|| names.join(", ")),
    }
}

/// Podium marker for a 0-based leaderboard position.
pub fn rank_marker(position: usize) -> Option<&'static str> {
    RANK_MARKERS.get(position).copied()
}

/// Rank to display for the entry at `position` (0-based).
///
/// A positive `rank` from the server is shown as-is; otherwise the rank is
/// the 1-based position in the already ordered sequence. A `rank` of 0 is
/// the backend's "not yet ranked" default.
pub fn rank(record: &Record, position: usize) -> u64 {
    record
        .get("rank")
        .and_then(|v| match v {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse::<u64>().ok(),
            _ => None,
        })
        .filter(|rank| *rank > 0)
        .unwrap_or(position as u64 + 1)
}

/// Marker and rank, e.g. `"🥇 1"` or `"4"`.
pub fn decorated_rank(record: &Record, position: usize) -> String {
    let rank = rank(record, position);
    match rank_marker(position) {
        Some(marker) => format!("{marker} {rank}"),
        None => rank.to_string(),
    }
}
