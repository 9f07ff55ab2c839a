//! Handler for `GET /users`.

use std::sync::Arc;

use axum::{Json, extract::State};
use holonet_core::{record::User, store::GalaxyStore};

use crate::error::ApiError;

pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<User>>, ApiError>
where
  S: GalaxyStore,
{
  let users = store.list_users().await.map_err(ApiError::store)?;
  Ok(Json(users))
}
