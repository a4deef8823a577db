//! Async HTTP client wrapping the fitlog JSON API.

use anyhow::{Context, Result, anyhow};
use fitlog_core::user::UserSummary;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Connection settings for the fitlog API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

/// `{username, id}` returned by user creation.
#[derive(Debug, Deserialize)]
pub struct CreatedUser {
  pub username: String,
  pub id:       String,
}

/// The merged user+exercise payload returned on append.
#[derive(Debug, Deserialize)]
pub struct AppendedExercise {
  pub username:    String,
  pub description: String,
  pub duration:    i64,
  /// Rendered by the server, e.g. `"Mon Jan 01 2024"`.
  pub date:        String,
}

/// One rendered log entry.
#[derive(Debug, Deserialize)]
pub struct LogEntry {
  pub description: String,
  pub duration:    i64,
  pub date:        String,
}

/// A user's filtered log.
#[derive(Debug, Deserialize)]
pub struct Log {
  pub username: String,
  pub log:      Vec<LogEntry>,
  pub count:    usize,
}

/// Async HTTP client for the fitlog JSON REST API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!("{}/api{}", self.config.base_url.trim_end_matches('/'), path)
  }

  // ── Users ─────────────────────────────────────────────────────────────────

  /// `GET /api/users`
  pub async fn list_users(&self) -> Result<Vec<UserSummary>> {
    let resp = self
      .client
      .get(self.url("/users"))
      .send()
      .await
      .context("GET /users failed")?;

    if !resp.status().is_success() {
      return Err(anyhow!("GET /users → {}", resp.status()));
    }
    resp.json().await.context("deserialising users")
  }

  /// `POST /api/users`
  pub async fn create_user(&self, username: &str) -> Result<CreatedUser> {
    let resp = self
      .client
      .post(self.url("/users"))
      .form(&[("username", username)])
      .send()
      .await
      .context("POST /users failed")?;

    if !resp.status().is_success() {
      return Err(anyhow!("POST /users → {}", resp.status()));
    }
    resp.json().await.context("deserialising created user")
  }

  // ── Exercises ─────────────────────────────────────────────────────────────

  /// `POST /api/users/{id}/exercises`
  pub async fn add_exercise(
    &self,
    user_id: &str,
    description: &str,
    duration: i64,
    date: Option<&str>,
  ) -> Result<AppendedExercise> {
    let mut form = vec![
      ("description", description.to_owned()),
      ("duration", duration.to_string()),
    ];
    if let Some(date) = date {
      form.push(("date", date.to_owned()));
    }

    let resp = self
      .client
      .post(self.url(&format!("/users/{user_id}/exercises")))
      .form(&form)
      .send()
      .await
      .context("POST /users/{id}/exercises failed")?;

    if !resp.status().is_success() {
      return Err(anyhow!("POST exercise → {}", resp.status()));
    }
    resp.json().await.context("deserialising appended exercise")
  }

  // ── Logs ──────────────────────────────────────────────────────────────────

  /// `GET /api/users/{id}/logs[?from][&to][&limit]`
  pub async fn get_log(
    &self,
    user_id: &str,
    from: Option<&str>,
    to: Option<&str>,
    limit: Option<u32>,
  ) -> Result<Log> {
    let mut query: Vec<(&str, String)> = Vec::new();
    if let Some(from) = from {
      query.push(("from", from.to_owned()));
    }
    if let Some(to) = to {
      query.push(("to", to.to_owned()));
    }
    if let Some(limit) = limit {
      query.push(("limit", limit.to_string()));
    }

    let resp = self
      .client
      .get(self.url(&format!("/users/{user_id}/logs")))
      .query(&query)
      .send()
      .await
      .context("GET /users/{id}/logs failed")?;

    if !resp.status().is_success() {
      return Err(anyhow!("GET log → {}", resp.status()));
    }
    resp.json().await.context("deserialising log")
  }
}
