//! JSON REST API for Holonet.
//!
//! Exposes an axum [`Router`] backed by any [`holonet_core::store::GalaxyStore`].
//! Transport concerns (binding, CORS, request tracing) are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = holonet_api::api_router(Arc::new(store));
//! ```

pub mod error;
pub mod favorites;
pub mod msg;
pub mod path;
pub mod people;
pub mod planets;
pub mod sitemap;
pub mod users;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use holonet_core::store::GalaxyStore;

pub use error::ApiError;

/// Build the API router for `store`.
///
/// Favorite routes glue the user id onto a literal (`/users1/favorites`,
/// `/user1/favorite/...`); the router captures the whole first segment as
/// `{owner}` and the handlers split it.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: GalaxyStore + 'static,
{
  Router::new()
    .route("/", get(sitemap::handler))
    // Records
    .route("/people", get(people::list::<S>))
    .route("/people/{id}", get(people::get_one::<S>))
    .route("/planets", get(planets::list::<S>))
    .route("/planets/{id}", get(planets::get_one::<S>))
    .route("/users", get(users::list::<S>))
    // Favorites
    .route("/{owner}/favorites", get(favorites::list::<S>))
    .route(
      "/{owner}/favorite/planet/{planet_id}",
      post(favorites::add_planet::<S>).delete(favorites::remove_planet::<S>),
    )
    .route(
      "/{owner}/favorite/people/{people_id}",
      post(favorites::add_person::<S>).delete(favorites::remove_person::<S>),
    )
    .with_state(store)
}
