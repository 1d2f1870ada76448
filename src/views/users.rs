// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Users view with inline editing.
//!
//! This is the only editable resource. The view owns the user collection,
//! the (at most one) edit session, and the team names offered in the form.

use std::time::Duration;

use super::{id_cell, render, CollectionView, Rendered, ResourceView};
use crate::error::{AppError, Result};
use crate::models::{CollectionResult, EditableField, Identity, Record, Resource};
use crate::services::format;
use crate::services::{
    ApiClient, EditPhase, EditSession, EditSessionManager, ResourceFetcher, SubmitState,
};

pub struct UsersTable;

impl ResourceView for UsersTable {
    const RESOURCE: Resource = Resource::Users;
    const TITLE: &'static str = "Users";
    const EMPTY_MESSAGE: &'static str = "No users found.";
    const HEADERS: &'static [&'static str] = &["ID", "Name", "Email", "Team", "Created At"];

    fn row(record: &Record, _position: usize) -> Vec<String> {
        vec![
            id_cell(record),
            format::text(record.get("name")),
            format::text(record.get("email")),
            record
                .text("team")
                .unwrap_or_else(|| "No team".to_string()),
            format::date(record.get("created_at")),
        ]
    }
}

/// Users collection plus its edit session.
pub struct UsersView {
    list: CollectionView<UsersTable>,
    edits: EditSessionManager,
    team_options: Vec<String>,
}

impl UsersView {
    /// `save_close_delay` is how long a successful save stays visible.
    pub fn new(save_close_delay: Duration) -> Self {
        Self {
            list: CollectionView::new(),
            edits: EditSessionManager::new(save_close_delay),
            team_options: Vec::new(),
        }
    }

    /// Fetch the users collection.
    pub async fn load(&mut self, fetcher: &ResourceFetcher) {
        self.list.load(fetcher).await;
    }

    /// Fetch team names for the edit form.
    ///
    /// Failure only leaves the choices empty; it never affects the view.
    pub async fn load_team_options(&mut self, fetcher: &ResourceFetcher) {
        self.team_options = match fetcher.fetch(Resource::Teams).await {
            CollectionResult::Ready(teams) => teams.iter().filter_map(|t| t.text("name")).collect(),
            other => {
                tracing::warn!(
                    reason = other.error().unwrap_or("unknown"),
                    "Could not load team choices"
                );
                Vec::new()
            }
        };
    }

    pub fn team_options(&self) -> &[String] {
        &self.team_options
    }

    pub fn collection(&self) -> &CollectionResult {
        self.list.collection()
    }

    pub fn render(&self) -> Rendered {
        render::<UsersTable>(self.list.collection())
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edits.session()
    }

    pub fn edit_phase(&self) -> EditPhase {
        self.edits.phase()
    }

    /// Start editing the user with `identity`.
    pub fn begin_edit(&mut self, identity: &Identity) -> Result<()> {
        let record = self
            .list
            .collection()
            .records()
            .and_then(|records| {
                records
                    .iter()
                    .find(|r| r.identity().is_ok_and(|id| &id == identity))
            })
            .ok_or_else(|| AppError::NotFound(format!("User {}", identity)))?
            .clone();
        self.edits.begin(&record)
    }

    /// Start editing the user at `position` in the rendered list.
    ///
    /// Works for records without identity too; saving those is refused.
    pub fn begin_edit_at(&mut self, position: usize) -> Result<()> {
        let record = self
            .list
            .collection()
            .records()
            .and_then(|records| records.get(position))
            .ok_or_else(|| AppError::NotFound(format!("User at position {}", position)))?
            .clone();
        self.edits.begin(&record)
    }

    pub fn update_field(&mut self, field: EditableField, value: impl Into<String>) -> Result<()> {
        self.edits.update_field(field, value)
    }

    /// Save the open session and reconcile the result into the list.
    pub async fn submit(&mut self, api: &ApiClient) -> Result<SubmitState> {
        self.edits.submit(api, self.list.collection_mut()).await
    }

    pub fn cancel_edit(&mut self) {
        self.edits.cancel();
    }

    /// Wait for the post-save auto-close, if one is scheduled.
    pub async fn wait_for_auto_close(&mut self) -> bool {
        self.edits.wait_for_auto_close().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_row() {
        let user = Record::try_from(json!({
            "id": 7,
            "name": "Ada",
            "email": "ada@example.com",
            "team": null,
            "created_at": "2024-05-06T12:00:00Z"
        }))
        .unwrap();
        assert_eq!(
            UsersTable::row(&user, 0),
            vec!["7", "Ada", "ada@example.com", "No team", "2024-05-06"]
        );
    }

    #[test]
    fn test_begin_edit_requires_loaded_user() {
        let mut view = UsersView::new(Duration::from_millis(10));
        let err = view.begin_edit(&Identity::Numeric(7)).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(view.render(), Rendered::Loading);
    }
}
