//! HTTP server assembly for fitlog.
//!
//! Mounts the JSON API under `/api` and serves the static landing page from
//! a configurable directory. Transport, configuration, and lifecycle live
//! here; all domain logic is in `fitlog-core`.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use fitlog_core::store::ExerciseStore;
use serde::Deserialize;
use tower_http::{services::ServeDir, trace::TraceLayer};

// ─── Configuration ───────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `FITLOG_*` environment variables.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:       String,
  #[serde(default = "default_port")]
  pub port:       u16,
  /// Path to the SQLite database file; `~` is expanded.
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
  /// Directory served for `GET /` and other non-API paths.
  #[serde(default = "default_static_dir")]
  pub static_dir: PathBuf,
}

fn default_host() -> String { "127.0.0.1".to_owned() }
fn default_port() -> u16 { 3000 }
fn default_store_path() -> PathBuf { PathBuf::from("fitlog.db") }
fn default_static_dir() -> PathBuf { PathBuf::from("public") }

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build the full application router: `/api/*` plus static files.
pub fn router<S>(store: Arc<S>, static_dir: &Path) -> Router
where
  S: ExerciseStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .nest("/api", fitlog_api::api_router(store))
    .fallback_service(ServeDir::new(static_dir))
    .layer(TraceLayer::new_for_http())
}
