// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! OctoFit REST API client.
//!
//! Handles:
//! - Collection reads (`GET /api/{resource}/`)
//! - Partial user updates (`PATCH /api/users/{identity}/`)
//! - Mapping transport, status and body failures onto `AppError`

use serde_json::Value;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{Identity, Record, Resource, UserForm};

/// OctoFit API client.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the configured backend.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/api/{resource}/`
    pub fn collection_url(&self, resource: Resource) -> String {
        format!("{}/api/{}/", self.base_url, resource)
    }

    /// `{base}/api/{resource}/{identity}/`
    pub fn record_url(&self, resource: Resource, identity: &Identity) -> String {
        format!(
            "{}/api/{}/{}/",
            self.base_url,
            resource,
            identity.to_path_segment()
        )
    }

    /// Fetch the raw payload of a collection endpoint.
    pub async fn get_collection(&self, resource: Resource) -> Result<Value> {
        let url = self.collection_url(resource);
        tracing::debug!(url = %url, "Fetching collection");

        let response = self.http.get(&url).send().await.map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Collection request failed");
            AppError::Transport(e.to_string())
        })?;

        self.check_response_json(response).await
    }

    /// Send a partial update for one user and return the updated record.
    pub async fn patch_user(&self, identity: &Identity, form: &UserForm) -> Result<Record> {
        let url = self.record_url(Resource::Users, identity);
        tracing::debug!(url = %url, "Updating user");

        let response = self
            .http
            .patch(&url)
            .json(form)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(url = %url, error = %e, "User update request failed");
                AppError::Transport(e.to_string())
            })?;

        let body = self.check_response_json(response).await?;
        Record::try_from(body)
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json(&self, response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), body = %body, "API returned an error status");
            return Err(AppError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::Transport(format!("Failed to read response body: {}", e)))?;

        serde_json::from_slice(&bytes).map_err(|e| AppError::Parse(e.to_string()))
    }
}
