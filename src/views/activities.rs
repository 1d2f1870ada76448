// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activities view.

use super::{id_cell, CollectionView, ResourceView};
use crate::models::{Record, Resource};
use crate::services::format;

pub struct ActivitiesTable;

impl ResourceView for ActivitiesTable {
    const RESOURCE: Resource = Resource::Activities;
    const TITLE: &'static str = "Activities";
    const EMPTY_MESSAGE: &'static str = "No activities found.";
    const HEADERS: &'static [&'static str] = &[
        "ID",
        "User",
        "Activity Type",
        "Duration (min)",
        "Distance (km)",
        "Calories",
        "Date",
    ];

    fn row(record: &Record, _position: usize) -> Vec<String> {
        vec![
            id_cell(record),
            record
                .first_text(&["user_email", "user"])
                .unwrap_or_default(),
            format::text(record.get("activity_type")),
            format::text(record.get("duration")),
            format::optional_number(record.get("distance")),
            format::text(record.get("calories")),
            format::date(record.get("date")),
        ]
    }
}

pub type ActivitiesView = CollectionView<ActivitiesTable>;
