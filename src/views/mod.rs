// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-resource collection views.
//!
//! A view owns the `CollectionResult` for its resource and turns it into a
//! [`Rendered`] value: a loading line, an error panel, an empty-state
//! message, or a table. The five resources differ only in columns, so each
//! one is a [`ResourceView`] impl plugged into the shared
//! [`CollectionView`].

pub mod activities;
pub mod leaderboard;
pub mod teams;
pub mod users;
pub mod workouts;

use std::fmt;
use std::marker::PhantomData;

use crate::models::{CollectionResult, Identity, Record, Resource};
use crate::services::ResourceFetcher;

pub use activities::{ActivitiesTable, ActivitiesView};
pub use leaderboard::{LeaderboardTable, LeaderboardView};
pub use teams::{TeamsTable, TeamsView};
pub use users::{UsersTable, UsersView};
pub use workouts::{Difficulty, WorkoutsTable, WorkoutsView};

/// Column layout of one resource.
pub trait ResourceView {
    const RESOURCE: Resource;
    const TITLE: &'static str;
    const EMPTY_MESSAGE: &'static str;
    const HEADERS: &'static [&'static str];

    /// Cells for the record at `position` (0-based), one per header.
    fn row(record: &Record, position: usize) -> Vec<String>;
}

/// Key identifying a rendered row.
///
/// Records without identity fall back to their position. Such keys are
/// only for display and never used to address a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowKey {
    Identity(Identity),
    Position(usize),
}

impl RowKey {
    pub fn for_record(record: &Record, position: usize) -> Self {
        record
            .identity()
            .map(RowKey::Identity)
            .unwrap_or(RowKey::Position(position))
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Identity(id) => write!(f, "{id}"),
            RowKey::Position(p) => write!(f, "#{p}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub key: RowKey,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub title: &'static str,
    pub headers: &'static [&'static str],
    pub rows: Vec<Row>,
}

/// What a view shows for its current collection state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Loading,
    Error(String),
    Empty(&'static str),
    Table(Table),
}

/// Render a collection with the columns of `V`.
pub fn render<V: ResourceView>(collection: &CollectionResult) -> Rendered {
    match collection {
        CollectionResult::Loading => Rendered::Loading,
        CollectionResult::Failed(reason) => Rendered::Error(reason.clone()),
        CollectionResult::Ready(records) if records.is_empty() => {
            Rendered::Empty(V::EMPTY_MESSAGE)
        }
        CollectionResult::Ready(records) => Rendered::Table(Table {
            title: V::TITLE,
            headers: V::HEADERS,
            rows: records
                .iter()
                .enumerate()
                .map(|(position, record)| Row {
                    key: RowKey::for_record(record, position),
                    cells: V::row(record, position),
                })
                .collect(),
        }),
    }
}

/// Render a collection for a resource chosen at runtime.
pub fn render_resource(resource: Resource, collection: &CollectionResult) -> Rendered {
    match resource {
        Resource::Users => render::<UsersTable>(collection),
        Resource::Activities => render::<ActivitiesTable>(collection),
        Resource::Teams => render::<TeamsTable>(collection),
        Resource::Leaderboard => render::<LeaderboardTable>(collection),
        Resource::Workouts => render::<WorkoutsTable>(collection),
    }
}

/// Read-only view of one resource collection.
pub struct CollectionView<V> {
    collection: CollectionResult,
    _columns: PhantomData<V>,
}

impl<V: ResourceView> Default for CollectionView<V> {
    fn default() -> Self {
        Self {
            collection: CollectionResult::Loading,
            _columns: PhantomData,
        }
    }
}

impl<V: ResourceView> CollectionView<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the collection, replacing whatever was loaded before.
    pub async fn load(&mut self, fetcher: &ResourceFetcher) {
        self.collection = CollectionResult::Loading;
        self.collection = fetcher.fetch(V::RESOURCE).await;
    }

    pub fn collection(&self) -> &CollectionResult {
        &self.collection
    }

    pub fn collection_mut(&mut self) -> &mut CollectionResult {
        &mut self.collection
    }

    pub fn render(&self) -> Rendered {
        render::<V>(&self.collection)
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rendered::Loading => writeln!(f, "Loading..."),
            Rendered::Error(reason) => writeln!(f, "Error!\n{reason}"),
            Rendered::Empty(message) => writeln!(f, "{message}"),
            Rendered::Table(table) => write!(f, "{table}"),
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.cells.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(cell.chars().count());
                }
            }
        }

        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", pad_line(self.headers.iter().copied(), &widths))?;
        writeln!(
            f,
            "{}",
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("  ")
        )?;
        for row in &self.rows {
            writeln!(f, "{}", pad_line(row.cells.iter().map(String::as_str), &widths))?;
        }
        Ok(())
    }
}

/// Identity shown in an ID column; blank when the record has none.
pub(crate) fn id_cell(record: &Record) -> String {
    record
        .identity()
        .map(|id| id.to_string())
        .unwrap_or_default()
}

fn pad_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}
