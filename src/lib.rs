// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! OctoFit client: browse and edit OctoFit Tracker records
//!
//! This crate provides the sync layer between the OctoFit REST API and its
//! views: fetching and normalizing collections, formatting fields, and
//! saving user edits with reconciliation by identity.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;
pub mod views;

use config::Config;
use error::Result;
use services::{ApiClient, ResourceFetcher};

/// Shared client state.
pub struct AppState {
    pub config: Config,
    pub api: ApiClient,
    pub fetcher: ResourceFetcher,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let api = ApiClient::new(&config)?;
        let fetcher = ResourceFetcher::new(api.clone());
        Ok(Self {
            config,
            api,
            fetcher,
        })
    }
}
