// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Editable user fields.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Record;

/// A user field that can be changed through a partial update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditableField {
    Name,
    Email,
    Team,
}

impl EditableField {
    pub const ALL: [EditableField; 3] = [Self::Name, Self::Email, Self::Team];

    /// Field name on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Team => "team",
        }
    }
}

impl std::str::FromStr for EditableField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| format!("`{s}` is not an editable user field"))
    }
}

/// Working copy of a user's editable fields; also the PATCH body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UserForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Team name; empty means no team.
    pub team: String,
}

impl UserForm {
    /// Seed a form from a record. Missing fields become empty strings.
    pub fn from_record(record: &Record) -> Self {
        let field = |f: EditableField| record.text(f.as_str()).unwrap_or_default();
        Self {
            name: field(EditableField::Name),
            email: field(EditableField::Email),
            team: field(EditableField::Team),
        }
    }

    pub fn get(&self, field: EditableField) -> &str {
        match field {
            EditableField::Name => &self.name,
            EditableField::Email => &self.email,
            EditableField::Team => &self.team,
        }
    }

    pub fn set(&mut self, field: EditableField, value: String) {
        match field {
            EditableField::Name => self.name = value,
            EditableField::Email => self.email = value,
            EditableField::Team => self.team = value,
        }
    }
}
