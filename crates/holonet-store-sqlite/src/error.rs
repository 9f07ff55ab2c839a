//! Error type for `holonet-store-sqlite`.

use rusqlite::ErrorCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] holonet_core::Error),

  /// A UNIQUE, NOT NULL, CHECK or FOREIGN KEY constraint rejected a write.
  #[error("constraint violation: {0}")]
  Constraint(String),

  #[error("database error: {0}")]
  Database(#[source] tokio_rusqlite::Error),
}

impl Error {
  pub fn is_constraint(&self) -> bool { matches!(self, Self::Constraint(_)) }
}

impl From<tokio_rusqlite::Error> for Error {
  fn from(e: tokio_rusqlite::Error) -> Self {
    match e {
      tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(
        failure,
        message,
      )) if failure.code == ErrorCode::ConstraintViolation => {
        Self::Constraint(message.unwrap_or_else(|| failure.to_string()))
      }
      other => Self::Database(other),
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
