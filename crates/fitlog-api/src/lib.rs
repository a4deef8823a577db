//! JSON REST API for fitlog.
//!
//! Exposes an axum [`Router`] backed by any [`fitlog_core::store::ExerciseStore`].
//! TLS and transport concerns are the caller's responsibility. Request bodies
//! are URL-encoded forms; responses are JSON.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", fitlog_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod exercises;
pub mod logs;
pub mod users;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use fitlog_core::store::ExerciseStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ExerciseStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/users", get(users::list::<S>).post(users::create::<S>))
    .route("/users/{id}/exercises", post(exercises::create::<S>))
    .route("/users/{id}/logs", get(logs::get_log::<S>))
    .with_state(store)
}
