//! Process-level wiring for the Holonet server: configuration, store
//! selection, fixture seeding and the HTTP middleware stack.

pub mod seed;
pub mod settings;

pub use settings::{Database, ServerConfig};

use std::sync::Arc;

use axum::Router;
use holonet_core::store::GalaxyStore;
use holonet_store_sqlite::SqliteStore;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// The API router wrapped in request tracing and permissive CORS.
pub fn app<S>(store: Arc<S>) -> Router
where
  S: GalaxyStore + 'static,
{
  holonet_api::api_router(store)
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive())
}

/// Open the store named by `database`.
pub async fn open_store(database: &Database) -> holonet_store_sqlite::Result<SqliteStore> {
  match database {
    Database::File(path) => SqliteStore::open(path).await,
    Database::Memory => SqliteStore::open_in_memory().await,
  }
}
