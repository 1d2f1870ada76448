// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Collection fetch state and reconciliation.

use crate::error::Result;
use crate::models::{Identity, Record};

/// Outcome of fetching one resource collection.
///
/// Starts as `Loading` and settles exactly once into `Failed` or `Ready`.
/// A new fetch starts a new `CollectionResult`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CollectionResult {
    #[default]
    Loading,
    Failed(String),
    Ready(Vec<Record>),
}

impl CollectionResult {
    /// Settle a pending fetch.
    ///
    /// Returns `false` (and leaves the state alone) if the result has
    /// already settled.
    pub fn complete(&mut self, outcome: Result<Vec<Record>>) -> bool {
        if !self.is_loading() {
            tracing::warn!("Ignoring fetch outcome for an already settled collection");
            return false;
        }

        *self = match outcome {
            Ok(records) => CollectionResult::Ready(records),
            Err(e) => CollectionResult::Failed(e.reason()),
        };
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CollectionResult::Loading)
    }

    /// Records, when the fetch succeeded.
    pub fn records(&self) -> Option<&[Record]> {
        match self {
            CollectionResult::Ready(records) => Some(records),
            _ => None,
        }
    }

    /// Failure reason, when the fetch failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            CollectionResult::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    /// Replace, by identity, the held record matching `updated`.
    ///
    /// Non-matching records and their order are untouched. Returns whether
    /// anything was replaced; a collection that is not `Ready`, or an
    /// updated record without identity, is never modified.
    pub fn reconcile(&mut self, updated: Record) -> bool {
        match updated.identity() {
            Ok(target) => self.reconcile_as(&target, updated),
            Err(e) => {
                tracing::warn!(error = %e, "Cannot reconcile updated record");
                false
            }
        }
    }

    /// Replace the held record whose identity is `target` with `updated`.
    ///
    /// Used after a save, where the record was addressed by `target`; the
    /// server's response may spell its identity differently.
    pub fn reconcile_as(&mut self, target: &Identity, updated: Record) -> bool {
        let CollectionResult::Ready(records) = self else {
            return false;
        };

        let mut replaced = false;
        for record in records.iter_mut() {
            if record.identity().is_ok_and(|id| &id == target) {
                *record = updated.clone();
                replaced = true;
            }
        }

        if !replaced {
            tracing::warn!(identity = %target, "Updated record not present in collection");
        }
        replaced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use serde_json::json;

    fn rec(value: serde_json::Value) -> Record {
        Record::try_from(value).unwrap()
    }

    fn ready() -> CollectionResult {
        CollectionResult::Ready(vec![
            rec(json!({"id": 1, "name": "Ada"})),
            rec(json!({"_id": "x", "name": "Grace"})),
            rec(json!({"name": "anonymous"})),
            rec(json!({"id": 3, "name": "Linus"})),
        ])
    }

    #[test]
    fn test_complete_is_one_way() {
        let mut result = CollectionResult::default();
        assert!(result.complete(Ok(vec![])));
        assert_eq!(result, CollectionResult::Ready(vec![]));

        assert!(!result.complete(Err(AppError::Transport("down".into()))));
        assert_eq!(result, CollectionResult::Ready(vec![]));
    }

    #[test]
    fn test_complete_failure_keeps_reason() {
        let mut result = CollectionResult::Loading;
        result.complete(Err(AppError::Http {
            status: 503,
            body: String::new(),
        }));
        assert!(result.error().unwrap().contains("503"));
    }

    #[test]
    fn test_reconcile_replaces_by_identity_only() {
        let mut result = ready();
        let updated = rec(json!({"_id": "x", "name": "Grace Hopper"}));
        assert!(result.reconcile(updated.clone()));

        let records = result.records().unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[1], updated);
        assert_eq!(records[0].text("name").as_deref(), Some("Ada"));
        assert_eq!(records[2].text("name").as_deref(), Some("anonymous"));
        assert_eq!(records[3].text("name").as_deref(), Some("Linus"));
    }

    #[test]
    fn test_reconcile_unknown_identity_is_noop() {
        let mut result = ready();
        let before = result.clone();
        assert!(!result.reconcile(rec(json!({"id": 99, "name": "Nobody"}))));
        assert_eq!(result, before);
    }

    #[test]
    fn test_reconcile_as_uses_target_not_response_identity() {
        let mut result = CollectionResult::Ready(vec![
            rec(json!({"_id": "abc", "name": "Old"})),
            rec(json!({"_id": "def", "name": "Other"})),
        ]);
        let updated = rec(json!({"id": 12, "_id": "abc", "name": "New"}));

        assert!(result.reconcile_as(&Identity::Key("abc".into()), updated.clone()));
        let records = result.records().unwrap();
        assert_eq!(records[0], updated);
        assert_eq!(records[1].text("name").as_deref(), Some("Other"));
    }

    #[test]
    fn test_reconcile_string_id_with_numeric_response() {
        let mut result = CollectionResult::Ready(vec![
            rec(json!({"id": "6", "name": "Ada"})),
            rec(json!({"id": "7", "name": "Old"})),
        ]);
        assert!(result.reconcile(rec(json!({"id": 7, "name": "New"}))));
        assert_eq!(result.records().unwrap()[1].text("name").as_deref(), Some("New"));
    }

    #[test]
    fn test_reconcile_ignores_non_ready() {
        let mut result = CollectionResult::Failed("boom".into());
        assert!(!result.reconcile(rec(json!({"id": 1}))));
        assert_eq!(result, CollectionResult::Failed("boom".into()));
    }
}
