//! Handlers for `/planets` endpoints.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use holonet_core::{record::Planet, store::GalaxyStore};

use crate::{error::ApiError, path::parse_id};

/// `GET /planets`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<Planet>>, ApiError>
where
  S: GalaxyStore,
{
  let planets = store.list_planets().await.map_err(ApiError::store)?;
  Ok(Json(planets))
}

/// `GET /planets/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Planet>, ApiError>
where
  S: GalaxyStore,
{
  let id = parse_id(&id)?;
  let planet = store
    .get_planet(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound("planet not found".into()))?;
  Ok(Json(planet))
}
