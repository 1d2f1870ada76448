// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout suggestions view.

use super::{CollectionView, ResourceView};
use crate::models::{Record, Resource};
use crate::services::format;

/// Difficulty level of a workout suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Classify the API's free-form difficulty. Unknown values are `Easy`.
    pub fn classify(raw: &str) -> Self {
        match raw.trim() {
            "Medium" => Difficulty::Medium,
            "Hard" => Difficulty::Hard,
            _ => Difficulty::Easy,
        }
    }

    /// Traffic-light marker shown next to the difficulty.
    pub fn marker(self) -> &'static str {
        match self {
            Difficulty::Easy => "🟢",
            Difficulty::Medium => "🟡",
            Difficulty::Hard => "🔴",
        }
    }
}

fn difficulty_cell(record: &Record) -> String {
    match record.text("difficulty") {
        Some(raw) => format!("{} {}", Difficulty::classify(&raw).marker(), raw),
        None => String::new(),
    }
}

pub struct WorkoutsTable;

impl ResourceView for WorkoutsTable {
    const RESOURCE: Resource = Resource::Workouts;
    const TITLE: &'static str = "💪 Workout Suggestions";
    const EMPTY_MESSAGE: &'static str = "No workout suggestions found.";
    const HEADERS: &'static [&'static str] = &[
        "Name",
        "Description",
        "Type",
        "Difficulty",
        "Duration (min)",
        "Calories",
    ];

    fn row(record: &Record, _position: usize) -> Vec<String> {
        vec![
            format::text(record.get("name")),
            format::text(record.get("description")),
            format::text(record.get("activity_type")),
            difficulty_cell(record),
            format::text(record.get("duration")),
            format::text(record.get("calories_estimate")),
        ]
    }
}

pub type WorkoutsView = CollectionView<WorkoutsTable>;
