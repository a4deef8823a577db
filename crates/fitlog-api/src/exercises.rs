//! Handler for `POST /users/{id}/exercises`.
//!
//! Form fields: `description`, `duration`, optional `date` (`YYYY-MM-DD`,
//! defaults to today). Returns 201 with the merged user+exercise fields.

use std::sync::Arc;

use axum::{
  Form, Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use chrono::{Local, NaiveDate};
use fitlog_core::{
  exercise::{Exercise, format_date, parse_date},
  store::ExerciseStore,
  user::parse_user_id,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct CreateBody {
  pub description: String,
  /// Accepted as a string and coerced; must parse as an integer. The value
  /// itself (unit, sign, magnitude) is not validated.
  pub duration:    String,
  pub date:        Option<String>,
}

/// The merged user+exercise payload returned on creation.
#[derive(Debug, Serialize)]
pub struct AppendedExercise {
  pub id:          Uuid,
  pub username:    String,
  pub description: String,
  pub duration:    i64,
  /// Human-readable calendar string, e.g. `"Mon Jan 01 2024"`.
  pub date:        String,
}

/// `POST /users/{id}/exercises`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  Form(body): Form<CreateBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ExerciseStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let id = parse_user_id(&id).map_err(|e| ApiError::InvalidId(e.to_string()))?;

  let duration: i64 = body
    .duration
    .trim()
    .parse()
    .map_err(|_| ApiError::BadRequest(format!("invalid duration: {:?}", body.duration)))?;

  let date = resolve_date(body.date.as_deref())?;

  let user = store
    .get_user(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("user {id} not found")))?;

  let exercise = store
    .append_exercise(id, Exercise { description: body.description, duration, date })
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  Ok((
    StatusCode::CREATED,
    Json(AppendedExercise {
      id,
      username:    user.username,
      description: exercise.description,
      duration:    exercise.duration,
      date:        format_date(exercise.date),
    }),
  ))
}

/// Omitted or empty `date` defaults to today (server-local); anything else
/// must be a `YYYY-MM-DD` calendar date.
fn resolve_date(raw: Option<&str>) -> Result<NaiveDate, ApiError> {
  match raw {
    None => Ok(Local::now().date_naive()),
    Some(s) if s.trim().is_empty() => Ok(Local::now().date_naive()),
    Some(s) => parse_date(s).map_err(|e| ApiError::BadRequest(e.to_string())),
  }
}
