//! The log filtering engine.
//!
//! A pure, synchronous transformation over an exercise log: an inclusive
//! date-range predicate followed by a prefix `limit` cut. Performs no I/O
//! and holds no state; callers fetch the full log from the store and hand
//! it here together with a [`LogFilter`].

use chrono::NaiveDate;

use crate::exercise::{Exercise, parse_date};

// ─── Filter ──────────────────────────────────────────────────────────────────

/// Caller-supplied log query: optional date range and result-count limit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogFilter {
  /// Entries dated before this are excluded. Inclusive.
  pub from:  Option<NaiveDate>,
  /// Entries dated after this are excluded. Inclusive.
  pub to:    Option<NaiveDate>,
  /// Keep at most this many entries, by insertion order. Zero means no
  /// truncation.
  pub limit: Option<u32>,
}

impl LogFilter {
  /// Build a filter from raw query-string values.
  ///
  /// Parsing is lenient: a `from`/`to` that is not a `YYYY-MM-DD` calendar
  /// date, or a `limit` that is not an unsigned integer, is treated as
  /// absent rather than rejected.
  pub fn from_params(
    from:  Option<&str>,
    to:    Option<&str>,
    limit: Option<&str>,
  ) -> Self {
    Self {
      from:  from.and_then(|s| parse_date(s).ok()),
      to:    to.and_then(|s| parse_date(s).ok()),
      limit: limit.and_then(|s| s.trim().parse().ok()),
    }
  }

  /// Whether an entry dated `date` survives the date predicate.
  pub fn matches(&self, date: NaiveDate) -> bool {
    match (self.from, self.to) {
      (Some(from), Some(to)) => from <= date && date <= to,
      (Some(from), None) => date >= from,
      (None, Some(to)) => date <= to,
      (None, None) => true,
    }
  }
}

// ─── Result ──────────────────────────────────────────────────────────────────

/// The filtered, bounded view of a log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredLog {
  /// Surviving entries, in their original insertion order.
  pub entries: Vec<Exercise>,
  /// `entries.len()` — the count after date filtering AND after truncation,
  /// not the pre-truncation match count.
  pub count:   usize,
}

/// Filter and bound an exercise log.
///
/// The date predicate is a stable pass: surviving entries keep their
/// relative insertion order. A positive `limit` then keeps the first
/// `limit` survivors — a prefix cut, not a smallest/largest-date selection.
pub fn filter_log(log: &[Exercise], filter: &LogFilter) -> FilteredLog {
  let mut entries: Vec<Exercise> = log
    .iter()
    .filter(|e| filter.matches(e.date))
    .cloned()
    .collect();

  if let Some(limit) = filter.limit
    && limit > 0
  {
    entries.truncate(limit as usize);
  }

  let count = entries.len();
  FilteredLog { entries, count }
}
