//! Error types for `fitlog-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid user id: {0:?}")]
  InvalidId(String),

  #[error("invalid calendar date: {0:?}")]
  DateParse(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
