//! Handlers for `/users` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/users` | Form: `username=alice`; returns 201 `{username, id}` |
//! | `GET`  | `/users` | All users, logs omitted |

use std::sync::Arc;

use axum::{
  Form, Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use fitlog_core::{store::ExerciseStore, user::UserSummary};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;

// ─── Create ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateBody {
  pub username: String,
}

/// The `{username, id}` payload returned on creation.
#[derive(Debug, Serialize)]
pub struct CreatedUser {
  pub username: String,
  pub id:       Uuid,
}

/// `POST /users` — form body: `username=alice`. No uniqueness check.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Form(body): Form<CreateBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ExerciseStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let user = store
    .create_user(body.username)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((
    StatusCode::CREATED,
    Json(CreatedUser { username: user.username, id: user.id }),
  ))
}

// ─── List ────────────────────────────────────────────────────────────────────

/// `GET /users`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<UserSummary>>, ApiError>
where
  S: ExerciseStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let users = store
    .list_users()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(users))
}
