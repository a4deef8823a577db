//! [`SqliteStore`] — the SQLite implementation of [`ExerciseStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use fitlog_core::{
  exercise::Exercise,
  store::ExerciseStore,
  user::{User, UserSummary},
};

use crate::{
  Error, Result,
  encode::{RawExercise, RawUser, encode_date, encode_dt, encode_uuid},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A fitlog store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Flush and close the underlying connection. Counterpart to
  /// [`SqliteStore::open`]; call on shutdown.
  pub async fn close(self) -> Result<()> {
    self.conn.close().await?;
    Ok(())
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Load a user's exercise rows in insertion order.
  async fn load_log(&self, id: Uuid) -> Result<Vec<Exercise>> {
    let id_str = encode_uuid(id);

    let raws: Vec<RawExercise> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT description, duration, date FROM exercises
           WHERE user_id = ?1
           ORDER BY seq",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![id_str], |row| {
            Ok(RawExercise {
              description: row.get(0)?,
              duration:    row.get(1)?,
              date:        row.get(2)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawExercise::into_exercise).collect()
  }
}

// ─── ExerciseStore impl ──────────────────────────────────────────────────────

impl ExerciseStore for SqliteStore {
  type Error = Error;

  async fn create_user(&self, username: String) -> Result<User> {
    let user = User {
      id: Uuid::new_v4(),
      username,
      created_at: Utc::now(),
      log: Vec::new(),
    };

    let id_str   = encode_uuid(user.id);
    let name     = user.username.clone();
    let at_str   = encode_dt(user.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO users (user_id, username, created_at) VALUES (?1, ?2, ?3)",
          rusqlite::params![id_str, name, at_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(user)
  }

  async fn list_users(&self) -> Result<Vec<UserSummary>> {
    let raws: Vec<RawUser> = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare("SELECT user_id, username, created_at FROM users")?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawUser {
              user_id:    row.get(0)?,
              username:   row.get(1)?,
              created_at: row.get(2)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawUser::into_summary).collect()
  }

  async fn get_user(&self, id: Uuid) -> Result<Option<User>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawUser> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT user_id, username, created_at FROM users WHERE user_id = ?1",
              rusqlite::params![id_str],
              |row| {
                Ok(RawUser {
                  user_id:    row.get(0)?,
                  username:   row.get(1)?,
                  created_at: row.get(2)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;

    let Some(raw) = raw else { return Ok(None) };
    let log = self.load_log(id).await?;
    raw.into_user(log).map(Some)
  }

  async fn append_exercise(&self, id: Uuid, exercise: Exercise) -> Result<Exercise> {
    let id_str       = encode_uuid(id);
    let description  = exercise.description.clone();
    let duration     = exercise.duration;
    let date_str     = encode_date(exercise.date);

    // The next `seq` is computed inside the INSERT itself, making the append
    // a single atomic statement rather than a load-mutate-save cycle.
    let appended: bool = self
      .conn
      .call(move |conn| {
        let exists: bool = conn
          .query_row(
            "SELECT 1 FROM users WHERE user_id = ?1",
            rusqlite::params![id_str],
            |_| Ok(true),
          )
          .optional()?
          .unwrap_or(false);

        if !exists {
          return Ok(false);
        }

        conn.execute(
          "INSERT INTO exercises (user_id, seq, description, duration, date)
           VALUES (
             ?1,
             COALESCE((SELECT MAX(seq) + 1 FROM exercises WHERE user_id = ?1), 0),
             ?2, ?3, ?4
           )",
          rusqlite::params![id_str, description, duration, date_str],
        )?;
        Ok(true)
      })
      .await?;

    if !appended {
      return Err(Error::UserNotFound(id));
    }

    Ok(exercise)
  }
}
