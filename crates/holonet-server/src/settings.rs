//! Runtime configuration.
//!
//! Layered with the `config` crate: built-in defaults, then an optional TOML
//! file, then environment variables.
//!
//! | Key            | Env var        | Default                   |
//! |----------------|----------------|---------------------------|
//! | `host`         | `HOST`         | `0.0.0.0`                 |
//! | `port`         | `PORT`         | `3000`                    |
//! | `database_url` | `DATABASE_URL` | `sqlite:////tmp/test.db`  |

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:////tmp/test.db";

#[derive(Debug, Error)]
pub enum Error {
  #[error("config error: {0}")]
  Config(#[from] config::ConfigError),

  #[error("unsupported database url {0:?}: only sqlite is available")]
  UnsupportedDatabase(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  pub host:         String,
  pub port:         u16,
  pub database_url: String,
}

impl ServerConfig {
  /// Load from `file` (if it exists) and the process environment.
  pub fn load(file: &Path) -> Result<Self, Error> {
    Self::load_with(file, config::Environment::default())
  }

  fn load_with(file: &Path, env: config::Environment) -> Result<Self, Error> {
    let cfg = config::Config::builder()
      .set_default("host", "0.0.0.0")?
      .set_default("port", 3000)?
      .set_default("database_url", DEFAULT_DATABASE_URL)?
      .add_source(config::File::from(file).required(false))
      .add_source(env.try_parsing(true))
      .build()?;
    Ok(cfg.try_deserialize()?)
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  pub fn database(&self) -> Result<Database, Error> { Database::from_url(&self.database_url) }
}

/// Where the SQLite store lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Database {
  File(PathBuf),
  Memory,
}

impl Database {
  /// Accepts `sqlite:////abs/path`, `sqlite:///rel/path`, `sqlite://path`,
  /// `sqlite:path`, `:memory:` and bare paths. Any other `scheme://` URL is
  /// rejected.
  pub fn from_url(url: &str) -> Result<Self, Error> {
    let rest = ["sqlite:///", "sqlite://", "sqlite:"]
      .iter()
      .find_map(|prefix| url.strip_prefix(prefix));

    let path = match rest {
      Some(rest) => rest,
      None if url.contains("://") => return Err(Error::UnsupportedDatabase(url.to_owned())),
      None => url,
    };

    match path {
      "" | ":memory:" => Ok(Self::Memory),
      p => Ok(Self::File(PathBuf::from(p))),
    }
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use super::*;

  fn env(vars: &[(&str, &str)]) -> config::Environment {
    let map: HashMap<String, String> = vars
      .iter()
      .map(|(k, v)| (k.to_string(), v.to_string()))
      .collect();
    config::Environment::default().source(Some(map))
  }

  #[test]
  fn defaults_apply_without_file_or_env() {
    let cfg = ServerConfig::load_with(Path::new("does-not-exist.toml"), env(&[])).unwrap();
    assert_eq!(cfg.host, "0.0.0.0");
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.database_url, DEFAULT_DATABASE_URL);
    assert_eq!(cfg.database().unwrap(), Database::File("/tmp/test.db".into()));
  }

  #[test]
  fn environment_overrides_defaults() {
    let cfg = ServerConfig::load_with(
      Path::new("does-not-exist.toml"),
      env(&[("PORT", "8080"), ("DATABASE_URL", "sqlite:///data/holonet.db")]),
    )
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.address(), "0.0.0.0:8080");
    assert_eq!(cfg.database().unwrap(), Database::File("data/holonet.db".into()));
  }

  #[test]
  fn database_url_forms() {
    assert_eq!(Database::from_url(":memory:").unwrap(), Database::Memory);
    assert_eq!(Database::from_url("sqlite://").unwrap(), Database::Memory);
    assert_eq!(
      Database::from_url("sqlite://holonet.db").unwrap(),
      Database::File("holonet.db".into())
    );
    assert_eq!(
      Database::from_url("./local.db").unwrap(),
      Database::File("./local.db".into())
    );
  }

  #[test]
  fn postgres_urls_are_rejected() {
    let err = Database::from_url("postgres://u:p@localhost/db").unwrap_err();
    assert!(matches!(err, Error::UnsupportedDatabase(_)));
  }
}
