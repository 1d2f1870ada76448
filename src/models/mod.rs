// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the client.

pub mod collection;
pub mod record;
pub mod resource;
pub mod user;

pub use collection::CollectionResult;
pub use record::{resolve_identity, Identity, Record};
pub use resource::Resource;
pub use user::{EditableField, UserForm};
