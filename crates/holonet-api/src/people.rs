//! Handlers for `/people` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/people` | All people, ordered by id |
//! | `GET`  | `/people/{id}` | 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use holonet_core::{record::Person, store::GalaxyStore};

use crate::{error::ApiError, path::parse_id};

/// `GET /people`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<Person>>, ApiError>
where
  S: GalaxyStore,
{
  let people = store.list_people().await.map_err(ApiError::store)?;
  Ok(Json(people))
}

/// `GET /people/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Person>, ApiError>
where
  S: GalaxyStore,
{
  let id = parse_id(&id)?;
  let person = store
    .get_person(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound("person not found".into()))?;
  Ok(Json(person))
}
