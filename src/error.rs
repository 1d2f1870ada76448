// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client error types.
//!
//! Every failure the sync layer can hit is one of these variants. The
//! fetcher and the edit session catch them at their boundary and turn them
//! into explicit `Failed(reason)` states, so nothing here is ever surfaced
//! to a view as an unhandled fault.

/// Errors raised while talking to the OctoFit API.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("HTTP error! status: {status}")]
    Http { status: u16, body: String },

    #[error("Malformed response body: {0}")]
    Parse(String),

    #[error("Record has neither an `id` nor an `_id` field")]
    NoIdentity,

    #[error("Another edit is still being saved")]
    EditInProgress,

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("No record is being edited")]
    NoActiveSession,
}

impl AppError {
    /// HTTP status code, when the failure came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Human-readable reason stored in `Failed` states.
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, AppError>;
