// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Leaderboard view.
//!
//! Entries are shown in server order. The first three rows get podium
//! markers; the rank number comes from the entry when it has one.

use super::{CollectionView, ResourceView};
use crate::models::{Record, Resource};
use crate::services::format;

pub struct LeaderboardTable;

impl ResourceView for LeaderboardTable {
    const RESOURCE: Resource = Resource::Leaderboard;
    const TITLE: &'static str = "🏆 Leaderboard";
    const EMPTY_MESSAGE: &'static str = "No leaderboard data found.";
    const HEADERS: &'static [&'static str] = &[
        "Rank",
        "User",
        "Team",
        "Total Calories",
        "Total Activities",
        "Total Duration (min)",
    ];

    fn row(record: &Record, position: usize) -> Vec<String> {
        vec![
            format::decorated_rank(record, position),
            record
                .first_text(&["user_name", "user", "username"])
                .unwrap_or_default(),
            record
                .text("team")
                .unwrap_or_else(|| "No team".to_string()),
            format::number_or_zero(record.get("total_calories")),
            format::number_or_zero(record.get("total_activities")),
            format::number_or_zero(record.get("total_duration")),
        ]
    }
}

pub type LeaderboardView = CollectionView<LeaderboardTable>;
