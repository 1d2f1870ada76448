// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Teams view.

use super::{id_cell, CollectionView, ResourceView};
use crate::models::{Record, Resource};
use crate::services::format;

pub struct TeamsTable;

impl ResourceView for TeamsTable {
    const RESOURCE: Resource = Resource::Teams;
    const TITLE: &'static str = "Teams";
    const EMPTY_MESSAGE: &'static str = "No teams found.";
    const HEADERS: &'static [&'static str] =
        &["ID", "Name", "Description", "Members", "Created At"];

    fn row(record: &Record, _position: usize) -> Vec<String> {
        let members = format::member_list(record.get("members"));
        let members_cell = match &members.joined {
            Some(names) => format!("{} ({})", members.label(), names),
            None => members.label(),
        };

        vec![
            id_cell(record),
            format::text(record.get("name")),
            format::text(record.get("description")),
            members_cell,
            format::date(record.get("created_at")),
        ]
    }
}

pub type TeamsView = CollectionView<TeamsTable>;
