//! Error types for `holonet-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("favorite {0} references neither a person nor a planet")]
  MissingTarget(i64),

  #[error("favorite {0} references both a person and a planet")]
  AmbiguousTarget(i64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
