//! `holonet` server binary.
//!
//! Reads `holonet.toml` (or the path given with `--config`) plus the
//! `HOST`, `PORT` and `DATABASE_URL` environment variables, opens the SQLite
//! store and serves the JSON API.
//!
//! # Loading data
//!
//! ```
//! holonet seed fixtures/galaxy.json
//! ```

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use holonet_server::{ServerConfig, open_store, seed};
use tokio::{net::TcpListener, signal};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Holonet people/planets API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "holonet.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
  /// Serve the HTTP API (default).
  Serve,
  /// Insert people, planets and users from a JSON fixture file and exit.
  Seed {
    /// Fixture with optional `people`, `planets` and `users` arrays.
    file: PathBuf,
  },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config).context("failed to load configuration")?;
  let database = server_cfg.database()?;

  let store = open_store(&database)
    .await
    .with_context(|| format!("failed to open store at {database:?}"))?;

  match cli.command.unwrap_or(Command::Serve) {
    Command::Serve => serve(&server_cfg, store).await,
    Command::Seed { file } => {
      let raw = tokio::fs::read_to_string(&file)
        .await
        .with_context(|| format!("failed to read {}", file.display()))?;
      let fixture: seed::Fixture = serde_json::from_str(&raw)
        .with_context(|| format!("invalid fixture {}", file.display()))?;
      seed::seed(&store, fixture).await.context("seeding failed")?;
      Ok(())
    }
  }
}

async fn serve(
  server_cfg: &ServerConfig,
  store: holonet_store_sqlite::SqliteStore,
) -> anyhow::Result<()> {
  let app = holonet_server::app(Arc::new(store));
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  tracing::info!("server stopped");
  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = signal::ctrl_c().await {
    tracing::error!(error = %e, "failed to listen for ctrl-c");
    std::future::pending::<()>().await;
  }
}
