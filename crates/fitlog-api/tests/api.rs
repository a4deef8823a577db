//! End-to-end tests for the API router over an in-memory SQLite store.

use std::sync::Arc;

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode, header},
};
use fitlog_store_sqlite::SqliteStore;
use serde_json::Value;
use tower::ServiceExt as _;

async fn app() -> Router {
  let store = SqliteStore::open_in_memory().await.expect("in-memory store");
  fitlog_api::api_router(Arc::new(store))
}

async fn post_form(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
    .body(Body::from(body.to_owned()))
    .unwrap();
  send(app, request).await
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
  let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
  send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
  let response = app.clone().oneshot(request).await.unwrap();
  let status = response.status();
  let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .unwrap();
  let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
  (status, json)
}

/// Create a user and return its id.
async fn create_user(app: &Router, username: &str) -> String {
  let (status, body) =
    post_form(app, "/users", &format!("username={username}")).await;
  assert_eq!(status, StatusCode::CREATED);
  body["id"].as_str().unwrap().to_owned()
}

async fn add_exercise(app: &Router, id: &str, description: &str, date: &str) {
  let (status, _) = post_form(
    app,
    &format!("/users/{id}/exercises"),
    &format!("description={description}&duration=30&date={date}"),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);
}

// ─── Users ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_user_returns_username_and_id() {
  let app = app().await;
  let (status, body) = post_form(&app, "/users", "username=alice").await;

  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(body["username"], "alice");
  assert!(body["id"].as_str().is_some());
}

#[tokio::test]
async fn list_users_returns_summaries_without_logs() {
  let app = app().await;
  let id = create_user(&app, "alice").await;
  create_user(&app, "bob").await;
  add_exercise(&app, &id, "run", "2024-01-01").await;

  let (status, body) = get(&app, "/users").await;
  assert_eq!(status, StatusCode::OK);

  let users = body.as_array().unwrap();
  assert_eq!(users.len(), 2);
  for user in users {
    assert!(user.get("log").is_none());
    assert!(user["id"].as_str().is_some());
    assert!(user["username"].as_str().is_some());
  }
}

// ─── Exercises ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn append_returns_merged_user_and_exercise_fields() {
  let app = app().await;
  let id = create_user(&app, "alice").await;

  let (status, body) = post_form(
    &app,
    &format!("/users/{id}/exercises"),
    "description=run&duration=30&date=2024-01-01",
  )
  .await;

  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(body["id"].as_str().unwrap(), id);
  assert_eq!(body["username"], "alice");
  assert_eq!(body["description"], "run");
  assert_eq!(body["duration"], 30);
  assert_eq!(body["date"], "Mon Jan 01 2024");
}

#[tokio::test]
async fn append_rejects_bad_duration_and_bad_date() {
  let app = app().await;
  let id = create_user(&app, "alice").await;

  let (status, _) = post_form(
    &app,
    &format!("/users/{id}/exercises"),
    "description=run&duration=lots&date=2024-01-01",
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);

  let (status, _) = post_form(
    &app,
    &format!("/users/{id}/exercises"),
    "description=run&duration=30&date=whenever",
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn append_to_unknown_or_malformed_user_id() {
  let app = app().await;

  let (status, _) = post_form(
    &app,
    "/users/00000000-0000-0000-0000-000000000000/exercises",
    "description=run&duration=30",
  )
  .await;
  assert_eq!(status, StatusCode::NOT_FOUND);

  let (status, _) = post_form(
    &app,
    "/users/not-a-uuid/exercises",
    "description=run&duration=30",
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ─── Logs ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn log_round_trip_reflects_one_entry() {
  let app = app().await;
  let id = create_user(&app, "alice").await;
  add_exercise(&app, &id, "run", "2024-01-01").await;

  let (status, body) = get(&app, &format!("/users/{id}/logs")).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["username"], "alice");
  assert_eq!(body["count"], 1);

  let log = body["log"].as_array().unwrap();
  assert_eq!(log.len(), 1);
  assert_eq!(log[0]["description"], "run");
  assert_eq!(log[0]["duration"], 30);
  assert_eq!(log[0]["date"], "Mon Jan 01 2024");
}

#[tokio::test]
async fn log_date_range_is_inclusive_and_filters() {
  let app = app().await;
  let id = create_user(&app, "alice").await;
  add_exercise(&app, &id, "a", "2024-01-01").await;
  add_exercise(&app, &id, "b", "2024-01-15").await;
  add_exercise(&app, &id, "c", "2024-02-01").await;

  let (status, body) = get(
    &app,
    &format!("/users/{id}/logs?from=2024-01-10&to=2024-01-31"),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["count"], 1);
  assert_eq!(body["log"][0]["description"], "b");
}

#[tokio::test]
async fn log_limit_is_a_prefix_cut_and_count_follows() {
  let app = app().await;
  let id = create_user(&app, "alice").await;
  for (description, date) in [
    ("e1", "2024-05-01"),
    ("e2", "2024-01-01"),
    ("e3", "2024-03-01"),
    ("e4", "2024-02-01"),
    ("e5", "2024-04-01"),
  ] {
    add_exercise(&app, &id, description, date).await;
  }

  let (status, body) = get(&app, &format!("/users/{id}/logs?limit=2")).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["count"], 2);
  assert_eq!(body["log"][0]["description"], "e1");
  assert_eq!(body["log"][1]["description"], "e2");
}

#[tokio::test]
async fn malformed_filter_values_behave_as_absent() {
  let app = app().await;
  let id = create_user(&app, "alice").await;
  add_exercise(&app, &id, "a", "2024-01-01").await;
  add_exercise(&app, &id, "b", "2024-02-01").await;

  let (status, body) = get(
    &app,
    &format!("/users/{id}/logs?from=garbage&limit=two"),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["count"], 2);
}

#[tokio::test]
async fn log_for_unknown_or_malformed_user_id() {
  let app = app().await;

  let (status, _) =
    get(&app, "/users/00000000-0000-0000-0000-000000000000/logs").await;
  assert_eq!(status, StatusCode::NOT_FOUND);

  let (status, _) = get(&app, "/users/not-a-uuid/logs").await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
}
