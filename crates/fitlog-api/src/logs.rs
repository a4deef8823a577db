//! Handler for `GET /users/{id}/logs`.
//!
//! Query params `from`, `to` (calendar dates) and `limit` (integer) are
//! parsed leniently: a malformed value behaves as if it were absent. The
//! filtering itself lives in [`fitlog_core::filter`].

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
};
use fitlog_core::{
  exercise::{Exercise, format_date},
  filter::{LogFilter, filter_log},
  store::ExerciseStore,
  user::parse_user_id,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;

#[derive(Debug, Deserialize, Default)]
pub struct LogParams {
  pub from:  Option<String>,
  pub to:    Option<String>,
  pub limit: Option<String>,
}

/// One rendered log entry.
#[derive(Debug, Serialize)]
pub struct LogEntry {
  pub description: String,
  pub duration:    i64,
  /// Human-readable calendar string, e.g. `"Mon Jan 01 2024"`.
  pub date:        String,
}

impl From<Exercise> for LogEntry {
  fn from(e: Exercise) -> Self {
    Self {
      description: e.description,
      duration:    e.duration,
      date:        format_date(e.date),
    }
  }
}

/// The filtered log payload.
#[derive(Debug, Serialize)]
pub struct LogResponse {
  pub id:       Uuid,
  pub username: String,
  pub log:      Vec<LogEntry>,
  /// Length of `log` — after date filtering and after truncation.
  pub count:    usize,
}

/// `GET /users/{id}/logs[?from=...][&to=...][&limit=...]`
pub async fn get_log<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  Query(params): Query<LogParams>,
) -> Result<Json<LogResponse>, ApiError>
where
  S: ExerciseStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let id = parse_user_id(&id).map_err(|e| ApiError::InvalidId(e.to_string()))?;

  let user = store
    .get_user(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("user {id} not found")))?;

  let filter = LogFilter::from_params(
    params.from.as_deref(),
    params.to.as_deref(),
    params.limit.as_deref(),
  );
  let filtered = filter_log(&user.log, &filter);

  Ok(Json(LogResponse {
    id:       user.id,
    username: user.username,
    log:      filtered.entries.into_iter().map(LogEntry::from).collect(),
    count:    filtered.count,
  }))
}
