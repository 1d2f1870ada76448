// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Opaque API records and identity resolution.
//!
//! Two backend dialects are in the wild: one addresses records by a numeric
//! `id`, the other by a document `_id`. Identity is always resolved here,
//! `id` first, so rendering keys and network addressing agree.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{AppError, Result};

/// Primary identifier field.
pub const PRIMARY_ID_FIELD: &str = "id";
/// Identifier field used by the document-store dialect.
pub const SECONDARY_ID_FIELD: &str = "_id";

/// One entity returned by the API (user, activity, team, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Raw value of a field, `None` when absent.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }

    /// Scalar field rendered as text. Null, empty strings and compound
    /// values count as absent.
    pub fn text(&self, field: &str) -> Option<String> {
        match self.get(field)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// First present text field among `fields`.
    pub fn first_text(&self, fields: &[&str]) -> Option<String> {
        fields.iter().find_map(|f| self.text(f))
    }

    /// Resolve this record's identity.
    pub fn identity(&self) -> Result<Identity> {
        resolve_identity(self)
    }
}

impl TryFrom<Value> for Record {
    type Error = AppError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(AppError::Parse(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }
}

/// Resolved unique key of a record within its collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identity {
    Numeric(i64),
    Key(String),
}

impl Identity {
    /// Interpret one identifier field value.
    ///
    /// Numbers and non-empty strings qualify, as does a Mongo extended-JSON
    /// `{"$oid": "..."}` object. Anything else is treated as absent.
    /// Strings holding an integer in canonical form (`"7"`, not `"007"`)
    /// resolve to the same identity as the number.
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(
                n.as_i64()
                    .map(Identity::Numeric)
                    .unwrap_or_else(|| Identity::Key(n.to_string())),
            ),
            Value::String(s) if !s.trim().is_empty() => Some(Identity::from_text(s)),
            Value::Object(map) => match map.get("$oid") {
                Some(Value::String(oid)) if !oid.is_empty() => Some(Identity::Key(oid.clone())),
                _ => None,
            },
            _ => None,
        }
    }

    /// `Numeric` when `text` is exactly an integer's decimal form, so the
    /// display (and path segment) never changes.
    fn from_text(text: &str) -> Self {
        match text.parse::<i64>() {
            Ok(n) if n.to_string() == text => Identity::Numeric(n),
            _ => Identity::Key(text.to_string()),
        }
    }

    /// Identity encoded for use as a single URL path segment.
    pub fn to_path_segment(&self) -> String {
        urlencoding::encode(&self.to_string()).into_owned()
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identity::Numeric(n) => write!(f, "{n}"),
            Identity::Key(k) => f.write_str(k),
        }
    }
}

impl From<i64> for Identity {
    fn from(n: i64) -> Self {
        Identity::Numeric(n)
    }
}

impl std::str::FromStr for Identity {
    type Err = AppError;

    /// Parse a user-supplied identity: integers become numeric ids,
    /// anything else is kept as a key.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AppError::NoIdentity);
        }
        Ok(Identity::from_text(s))
    }
}

/// Resolve a record's identity, checking `id` before `_id`.
///
/// When both are present and disagree the primary wins, but the conflict
/// is logged since it usually means the two dialects got mixed.
pub fn resolve_identity(record: &Record) -> Result<Identity> {
    let primary = record.get(PRIMARY_ID_FIELD).and_then(Identity::from_value);
    let secondary = record
        .get(SECONDARY_ID_FIELD)
        .and_then(Identity::from_value);

    match (primary, secondary) {
        (Some(primary), Some(secondary)) => {
            if primary != secondary {
                tracing::warn!(
                    primary_id = %primary,
                    secondary_id = %secondary,
                    "Record carries conflicting identifiers, using `id`"
                );
            }
            Ok(primary)
        }
        (Some(primary), None) => Ok(primary),
        (None, Some(secondary)) => Ok(secondary),
        (None, None) => Err(AppError::NoIdentity),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
