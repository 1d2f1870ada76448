// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use octofit_client::config::Config;
use octofit_client::AppState;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::MockServer;

/// Auto-close delay used by tests, short enough to wait out in real time.
#[allow(dead_code)]
pub const TEST_CLOSE_DELAY: Duration = Duration::from_millis(20);

/// Client state pointed at a mock API server.
#[allow(dead_code)]
pub fn test_state(server: &MockServer) -> AppState {
    let config = Config {
        api_base_url: server.uri(),
        request_timeout: Duration::from_secs(5),
        save_close_delay: TEST_CLOSE_DELAY,
    };
    AppState::new(config).expect("Failed to build test client")
}

/// Client state pointed at a port nothing listens on.
#[allow(dead_code)]
pub fn unreachable_state() -> AppState {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("No local address").port();
    drop(listener);

    let config = Config {
        api_base_url: format!("http://127.0.0.1:{}", port),
        request_timeout: Duration::from_secs(5),
        save_close_delay: TEST_CLOSE_DELAY,
    };
    AppState::new(config).expect("Failed to build test client")
}

/// Three users in the numeric-id dialect.
#[allow(dead_code)]
pub fn sample_users() -> Value {
    json!([
        {"id": 6, "name": "Ada", "email": "ada@example.com", "team": "Blue", "created_at": "2024-01-02T10:00:00Z"},
        {"id": 7, "name": "Old Name", "email": "old@example.com", "team": "Gold", "created_at": "2024-01-03T10:00:00Z"},
        {"id": 8, "name": "Linus", "email": "linus@example.com", "team": null, "created_at": "2024-01-04T10:00:00Z"}
    ])
}
