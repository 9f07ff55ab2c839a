//! Handlers for the per-user favorites endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/users{id}/favorites` | 404 unknown user, 400 if the list is empty |
//! | `POST`   | `/user{id}/favorite/planet/{planet_id}` | Link user → planet |
//! | `POST`   | `/user{id}/favorite/people/{people_id}` | Link user → person |
//! | `DELETE` | `/user{id}/favorite/planet/{planet_id}` | 404 if no such favorite |
//! | `DELETE` | `/user{id}/favorite/people/{people_id}` | A missing favorite is not an error |
//!
//! The user id is glued onto a literal prefix (`users1`, `user1`), so the
//! whole segment is captured and split by [`owner_id`](crate::path::owner_id).

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use holonet_core::{
  favorite::{Favorite, FavoriteTarget, NewFavorite},
  record::User,
  store::GalaxyStore,
};

use crate::{
  error::ApiError,
  msg::Msg,
  path::{owner_id, parse_id},
};

async fn require_user<S: GalaxyStore>(store: &S, id: i64) -> Result<User, ApiError> {
  store
    .get_user(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound(format!("user{id} not found")))
}

/// Resolve the user and the target row, in that order, before any write.
async fn require_pair<S: GalaxyStore>(
  store:   &S,
  user_id: i64,
  target:  FavoriteTarget,
) -> Result<User, ApiError> {
  let user = require_user(store, user_id).await?;
  match target {
    FavoriteTarget::Planet(id) => {
      store
        .get_planet(id)
        .await
        .map_err(ApiError::store)?
        .ok_or_else(|| ApiError::NotFound("planet not found".into()))?;
    }
    FavoriteTarget::Person(id) => {
      store
        .get_person(id)
        .await
        .map_err(ApiError::store)?
        .ok_or_else(|| ApiError::NotFound("people not found".into()))?;
    }
  }
  Ok(user)
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /users{id}/favorites`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Path(owner): Path<String>,
) -> Result<Json<Vec<Favorite>>, ApiError>
where
  S: GalaxyStore,
{
  let user = require_user(store.as_ref(), owner_id(&owner, "users")?).await?;

  let favorites = store.list_favorites(user.id).await.map_err(ApiError::store)?;
  if favorites.is_empty() {
    return Err(ApiError::BadRequest(format!("user{} has no favorites", user.id)));
  }
  Ok(Json(favorites))
}

// ─── Add ──────────────────────────────────────────────────────────────────────

async fn add<S: GalaxyStore>(
  store:   &S,
  owner:   &str,
  target:  FavoriteTarget,
) -> Result<Favorite, ApiError> {
  let user = require_pair(store, owner_id(owner, "user")?, target).await?;
  let favorite = store
    .add_favorite(NewFavorite { user_id: user.id, target })
    .await
    .map_err(ApiError::store)?;
  tracing::info!(favorite_id = favorite.id, user_id = user.id, ?target, "favorite added");
  Ok(favorite)
}

/// `POST /user{id}/favorite/planet/{planet_id}`
pub async fn add_planet<S>(
  State(store): State<Arc<S>>,
  Path((owner, planet_id)): Path<(String, String)>,
) -> Result<Msg, ApiError>
where
  S: GalaxyStore,
{
  let planet_id = parse_id(&planet_id)?;
  add(store.as_ref(), &owner, FavoriteTarget::Planet(planet_id)).await?;
  Ok(Msg("Planet added to favorites"))
}

/// `POST /user{id}/favorite/people/{people_id}`
pub async fn add_person<S>(
  State(store): State<Arc<S>>,
  Path((owner, people_id)): Path<(String, String)>,
) -> Result<Msg, ApiError>
where
  S: GalaxyStore,
{
  let people_id = parse_id(&people_id)?;
  add(store.as_ref(), &owner, FavoriteTarget::Person(people_id)).await?;
  Ok(Msg("People added to favorites"))
}

// ─── Remove ───────────────────────────────────────────────────────────────────

/// `DELETE /user{id}/favorite/planet/{planet_id}`
pub async fn remove_planet<S>(
  State(store): State<Arc<S>>,
  Path((owner, planet_id)): Path<(String, String)>,
) -> Result<Msg, ApiError>
where
  S: GalaxyStore,
{
  let planet_id = parse_id(&planet_id)?;
  let target = FavoriteTarget::Planet(planet_id);
  let user = require_pair(store.as_ref(), owner_id(&owner, "user")?, target).await?;

  let favorite = store
    .find_favorite(user.id, target)
    .await
    .map_err(ApiError::store)?
    .ok_or(ApiError::FavoriteNotFound)?;

  let removed = store.delete_favorite(favorite.id).await.map_err(ApiError::store)?;
  if !removed {
    return Err(ApiError::FavoriteNotFound);
  }
  Ok(Msg("Planet deleted from favorites"))
}

/// `DELETE /user{id}/favorite/people/{people_id}`
///
/// Unlike the planet variant, an absent favorite still answers 200; nothing
/// is deleted in that case.
pub async fn remove_person<S>(
  State(store): State<Arc<S>>,
  Path((owner, people_id)): Path<(String, String)>,
) -> Result<Msg, ApiError>
where
  S: GalaxyStore,
{
  let people_id = parse_id(&people_id)?;
  let target = FavoriteTarget::Person(people_id);
  let user = require_pair(store.as_ref(), owner_id(&owner, "user")?, target).await?;

  match store.find_favorite(user.id, target).await.map_err(ApiError::store)? {
    Some(favorite) => {
      store.delete_favorite(favorite.id).await.map_err(ApiError::store)?;
    }
    None => tracing::warn!(user_id = user.id, people_id, "no favorite to delete"),
  }
  Ok(Msg("People deleted from favorites"))
}
