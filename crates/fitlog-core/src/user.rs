//! User — the envelope that owns an exercise log.
//!
//! A user holds identity metadata plus its log. The log is append-only:
//! entries are added by [`crate::store::ExerciseStore::append_exercise`] and
//! never individually mutated or deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result, exercise::Exercise};

/// An account with an ordered exercise log.
///
/// `id` is assigned by the persistence layer at creation and is immutable.
/// `username` is not unique — several users may share one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
  pub id:         Uuid,
  pub username:   String,
  /// Server-assigned creation timestamp; never changes after creation.
  pub created_at: DateTime<Utc>,
  /// Exercise entries in insertion order. Not necessarily chronological by
  /// entry date, since callers may log past or future dates.
  pub log:        Vec<Exercise>,
}

/// The log-free projection returned by user listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
  pub id:       Uuid,
  pub username: String,
}

/// Parse a caller-supplied user id.
///
/// Distinguishes a malformed identifier from a well-formed one that does not
/// resolve; the latter is the store's concern, not this function's.
pub fn parse_user_id(raw: &str) -> Result<Uuid> {
  Uuid::parse_str(raw.trim()).map_err(|_| Error::InvalidId(raw.to_owned()))
}

#[cfg(test)]
mod tests {
  use super::parse_user_id;
  use crate::Error;
  use uuid::Uuid;

  #[test]
  fn parses_hyphenated_uuid() {
    let id = Uuid::new_v4();
    assert_eq!(parse_user_id(&id.to_string()).unwrap(), id);
  }

  #[test]
  fn rejects_malformed_id() {
    let err = parse_user_id("not-a-uuid").unwrap_err();
    assert!(matches!(err, Error::InvalidId(_)));
  }

  #[test]
  fn trims_surrounding_whitespace() {
    let id = Uuid::new_v4();
    assert_eq!(parse_user_id(&format!("  {id}\n")).unwrap(), id);
  }
}
