//! The `ExerciseStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `fitlog-store-sqlite`).
//! Higher layers (`fitlog-api`, `fitlog-server`) depend on this abstraction,
//! not on any concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::{
  exercise::Exercise,
  user::{User, UserSummary},
};

/// Abstraction over a fitlog storage backend.
///
/// A user's log is append-only: the only write against an existing user is
/// [`ExerciseStore::append_exercise`]. Concurrent appends to the *same* user
/// are not required to be coordinated; backends may accept last-write-wins.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ExerciseStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Create and persist a user with an empty log. Returns the stored record
  /// including its assigned id. Usernames are not checked for uniqueness.
  fn create_user(
    &self,
    username: String,
  ) -> impl Future<Output = Result<User, Self::Error>> + Send + '_;

  /// List all users, logs omitted. Order is store-defined.
  fn list_users(
    &self,
  ) -> impl Future<Output = Result<Vec<UserSummary>, Self::Error>> + Send + '_;

  /// Retrieve a user by id with the full log in insertion order.
  /// Returns `None` if not found.
  fn get_user(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + '_;

  /// Append `exercise` to the user's log and persist it. Returns the stored
  /// entry. Fails if `id` does not resolve to a user.
  fn append_exercise(
    &self,
    id: Uuid,
    exercise: Exercise,
  ) -> impl Future<Output = Result<Exercise, Self::Error>> + Send + '_;
}
