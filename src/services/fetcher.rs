// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Resource fetching.

use crate::error::Result;
use crate::models::{CollectionResult, Record, Resource};
use crate::services::normalize::normalize;
use crate::services::ApiClient;

/// Reads resource collections and settles them into a `CollectionResult`.
#[derive(Clone)]
pub struct ResourceFetcher {
    api: ApiClient,
}

impl ResourceFetcher {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Fetch one collection.
    ///
    /// Never fails: transport, status and parse errors all end up in
    /// `CollectionResult::Failed`.
    pub async fn fetch(&self, resource: Resource) -> CollectionResult {
        let mut result = CollectionResult::Loading;
        let outcome = self.fetch_records(resource).await;

        match &outcome {
            Ok(records) => {
                tracing::debug!(resource = %resource, count = records.len(), "Collection loaded")
            }
            Err(e) => tracing::error!(resource = %resource, error = %e, "Error fetching collection"),
        }

        result.complete(outcome);
        result
    }

    async fn fetch_records(&self, resource: Resource) -> Result<Vec<Record>> {
        let payload = self.api.get_collection(resource).await?;
        Ok(normalize(payload))
    }
}
