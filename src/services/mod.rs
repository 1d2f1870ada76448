// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - sync and normalization layer.

pub mod api;
pub mod edit_session;
pub mod fetcher;
pub mod format;
pub mod normalize;

pub use api::ApiClient;
pub use edit_session::{EditPhase, EditSession, EditSessionManager, PendingSave, SubmitState};
pub use fetcher::ResourceFetcher;
pub use normalize::{normalize, ResponseShape};
