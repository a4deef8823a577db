//! Exercise — a single logged activity, embedded in a user's log.
//!
//! Exercises have no independent identity or lifecycle. They are created
//! whole by an append operation and never individually mutated or deleted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One logged activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
  pub description: String,
  /// Duration in whatever unit the caller uses; the value is not validated.
  pub duration:    i64,
  /// Calendar date with no time component.
  pub date:        NaiveDate,
}

/// Wire format for calendar dates: ISO 8601, `2024-01-15`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Human-readable format used on API responses: `Mon Jan 01 2024`.
const DISPLAY_FORMAT: &str = "%a %b %d %Y";

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
    .map_err(|_| Error::DateParse(raw.to_owned()))
}

/// Render a date in the human-readable form used by API responses.
pub fn format_date(date: NaiveDate) -> String {
  date.format(DISPLAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
  use super::{format_date, parse_date};
  use crate::Error;
  use chrono::NaiveDate;

  #[test]
  fn parses_iso_date() {
    assert_eq!(
      parse_date("2024-01-15").unwrap(),
      NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    );
  }

  #[test]
  fn rejects_garbage() {
    assert!(matches!(parse_date("yesterday"), Err(Error::DateParse(_))));
    assert!(matches!(parse_date("2024-13-01"), Err(Error::DateParse(_))));
    assert!(matches!(parse_date(""), Err(Error::DateParse(_))));
  }

  #[test]
  fn formats_like_a_calendar_string() {
    let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    assert_eq!(format_date(d), "Mon Jan 01 2024");
  }
}
