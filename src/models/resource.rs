// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API resource collections.

use std::fmt;

/// A resource collection exposed under `/api/{resource}/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Users,
    Activities,
    Teams,
    Leaderboard,
    Workouts,
}

impl Resource {
    pub const ALL: [Resource; 5] = [
        Self::Users,
        Self::Activities,
        Self::Teams,
        Self::Leaderboard,
        Self::Workouts,
    ];

    /// Path segment under `/api/`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Activities => "activities",
            Self::Teams => "teams",
            Self::Leaderboard => "leaderboard",
            Self::Workouts => "workouts",
        }
    }

    /// Only users accept partial updates.
    pub fn is_editable(self) -> bool {
        matches!(self, Self::Users)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Resource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == wanted)
            .ok_or_else(|| {
                format!(
                    "unknown resource `{s}` (expected one of: users, activities, teams, leaderboard, workouts)"
                )
            })
    }
}
