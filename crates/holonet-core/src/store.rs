//! The `GalaxyStore` trait.
//!
//! Implemented by storage backends (e.g. `holonet-store-sqlite`). The HTTP
//! layer depends on this abstraction and receives a concrete store as
//! router state.

use std::future::Future;

use crate::{
  favorite::{Favorite, FavoriteTarget, NewFavorite},
  record::{NewPerson, NewPlanet, NewUser, Person, Planet, User},
};

/// Abstraction over a Holonet storage backend.
///
/// Every write is a single insert or delete committed on its own. Lookups
/// by primary key return `None` when the row does not exist; listings are
/// ordered by id.
///
/// All methods return `Send` futures so the trait can be used behind axum.
pub trait GalaxyStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── People ────────────────────────────────────────────────────────────

  fn get_person(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Person>, Self::Error>> + Send + '_;

  fn list_people(
    &self,
  ) -> impl Future<Output = Result<Vec<Person>, Self::Error>> + Send + '_;

  fn add_person(
    &self,
    input: NewPerson,
  ) -> impl Future<Output = Result<Person, Self::Error>> + Send + '_;

  // ── Planets ───────────────────────────────────────────────────────────

  fn get_planet(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Planet>, Self::Error>> + Send + '_;

  fn list_planets(
    &self,
  ) -> impl Future<Output = Result<Vec<Planet>, Self::Error>> + Send + '_;

  fn add_planet(
    &self,
    input: NewPlanet,
  ) -> impl Future<Output = Result<Planet, Self::Error>> + Send + '_;

  // ── Users ─────────────────────────────────────────────────────────────

  fn get_user(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + '_;

  fn list_users(
    &self,
  ) -> impl Future<Output = Result<Vec<User>, Self::Error>> + Send + '_;

  fn add_user(
    &self,
    input: NewUser,
  ) -> impl Future<Output = Result<User, Self::Error>> + Send + '_;

  // ── Favorites ─────────────────────────────────────────────────────────

  /// All favorites owned by `user_id`. Does not check that the user exists.
  fn list_favorites(
    &self,
    user_id: i64,
  ) -> impl Future<Output = Result<Vec<Favorite>, Self::Error>> + Send + '_;

  /// Insert a favorite. Fails if the user or target row is missing.
  fn add_favorite(
    &self,
    input: NewFavorite,
  ) -> impl Future<Output = Result<Favorite, Self::Error>> + Send + '_;

  /// The lowest-id favorite of `user_id` pointing at `target`, if any.
  fn find_favorite(
    &self,
    user_id: i64,
    target: FavoriteTarget,
  ) -> impl Future<Output = Result<Option<Favorite>, Self::Error>> + Send + '_;

  /// Delete a favorite by id. Returns `false` if no row was removed.
  fn delete_favorite(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
