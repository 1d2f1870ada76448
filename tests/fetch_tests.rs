// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Collection fetch tests against a mock API.
//!
//! These tests verify that:
//! 1. Bare-array and `results` envelope responses render identically
//! 2. Transport, status and parse failures end up in `Failed`, never panic
//! 3. Each view renders its empty state and columns correctly

use octofit_client::models::{CollectionResult, Resource};
use octofit_client::services::format;
use octofit_client::views::{
    render_resource, LeaderboardView, Rendered, TeamsView, UsersView, WorkoutsView,
};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

async fn mount_get(server: &MockServer, resource: &str, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/api/{resource}/")))
        .respond_with(template)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_teams_bare_array_members() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "teams",
        ResponseTemplate::new(200)
            .set_body_json(json!([{"id": 1, "name": "Alpha", "members": ["a", "b"]}])),
    )
    .await;
    let state = common::test_state(&server);

    let mut view = TeamsView::new();
    view.load(&state.fetcher).await;

    let records = view.collection().records().expect("teams should load");
    let members = format::member_list(records[0].get("members"));
    assert_eq!(members.count, 2);
    assert_eq!(members.joined.as_deref(), Some("a, b"));

    let Rendered::Table(table) = view.render() else {
        panic!("expected a table");
    };
    assert_eq!(table.rows[0].cells[3], "2 members (a, b)");
}

#[tokio::test]
async fn test_users_empty_envelope_is_not_an_error() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "users",
        ResponseTemplate::new(200).set_body_json(json!({"count": 0, "next": null, "results": []})),
    )
    .await;
    let state = common::test_state(&server);

    let mut view = UsersView::new(common::TEST_CLOSE_DELAY);
    view.load(&state.fetcher).await;

    assert_eq!(*view.collection(), CollectionResult::Ready(vec![]));
    assert_eq!(view.render(), Rendered::Empty("No users found."));
}

#[tokio::test]
async fn test_envelope_and_bare_render_the_same() {
    let server = MockServer::start().await;
    let users = common::sample_users();
    mount_get(&server, "users", ResponseTemplate::new(200).set_body_json(users.clone())).await;
    mount_get(
        &server,
        "activities",
        ResponseTemplate::new(200).set_body_json(json!({"results": users})),
    )
    .await;
    let state = common::test_state(&server);

    let bare = state.fetcher.fetch(Resource::Users).await;
    let wrapped = state.fetcher.fetch(Resource::Activities).await;
    assert_eq!(bare.records().unwrap().len(), 3);
    assert_eq!(bare, wrapped);
}

#[tokio::test]
async fn test_unrecognized_body_is_empty() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "workouts",
        ResponseTemplate::new(200).set_body_json(json!({"detail": "paginated elsewhere"})),
    )
    .await;
    let state = common::test_state(&server);

    let mut view = WorkoutsView::new();
    view.load(&state.fetcher).await;
    assert_eq!(view.render(), Rendered::Empty("No workout suggestions found."));
}

#[tokio::test]
async fn test_http_error_becomes_failed_with_status() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "leaderboard",
        ResponseTemplate::new(503).set_body_string("maintenance"),
    )
    .await;
    let state = common::test_state(&server);

    let mut view = LeaderboardView::new();
    view.load(&state.fetcher).await;

    let reason = view.collection().error().expect("should fail");
    assert!(reason.contains("503"), "{reason}");
    assert!(matches!(view.render(), Rendered::Error(_)));
}

#[tokio::test]
async fn test_malformed_body_becomes_failed() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "teams",
        ResponseTemplate::new(200).set_body_string("<html>oops</html>"),
    )
    .await;
    let state = common::test_state(&server);

    let result = state.fetcher.fetch(Resource::Teams).await;
    let reason = result.error().expect("should fail");
    assert!(reason.starts_with("Malformed response body"), "{reason}");
}

#[tokio::test]
async fn test_unreachable_server_becomes_failed() {
    let state = common::unreachable_state();

    let result = state.fetcher.fetch(Resource::Users).await;
    let reason = result.error().expect("should fail");
    assert!(reason.starts_with("Network error"), "{reason}");
}

#[tokio::test]
async fn test_leaderboard_markers_follow_server_order() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "leaderboard",
        ResponseTemplate::new(200).set_body_json(json!({"results": [
            {"_id": "a", "user_name": "Ada", "team": "Blue", "total_calories": 900, "rank": 1},
            {"_id": "b", "user_name": "Grace", "team": "Gold", "total_calories": 800, "rank": 2},
            {"_id": "c", "user_name": "Linus", "total_calories": 700, "rank": 2},
            {"_id": "d", "user": "Ken", "total_calories": 100}
        ]})),
    )
    .await;
    let state = common::test_state(&server);

    let collection = state.fetcher.fetch(Resource::Leaderboard).await;
    let Rendered::Table(table) = render_resource(Resource::Leaderboard, &collection) else {
        panic!("expected a table");
    };

    let ranks: Vec<&str> = table.rows.iter().map(|r| r.cells[0].as_str()).collect();
    assert_eq!(ranks, vec!["🥇 1", "🥈 2", "🥉 2", "4"]);
    assert_eq!(table.rows[2].cells[2], "No team");
    assert_eq!(table.rows[3].cells[1], "Ken");
    assert_eq!(table.rows[3].cells[4], "0");
}

#[tokio::test]
async fn test_team_options_failure_is_silent() {
    let server = MockServer::start().await;
    mount_get(&server, "teams", ResponseTemplate::new(500)).await;
    let state = common::test_state(&server);

    let mut view = UsersView::new(common::TEST_CLOSE_DELAY);
    view.load_team_options(&state.fetcher).await;
    assert!(view.team_options().is_empty());
}

#[tokio::test]
async fn test_team_options_names() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "teams",
        ResponseTemplate::new(200).set_body_json(json!([
            {"_id": "t1", "name": "Blue"},
            {"_id": "t2", "name": "Gold"},
            {"_id": "t3"}
        ])),
    )
    .await;
    let state = common::test_state(&server);

    let mut view = UsersView::new(common::TEST_CLOSE_DELAY);
    view.load_team_options(&state.fetcher).await;
    assert_eq!(view.team_options(), ["Blue".to_string(), "Gold".to_string()]);
}
