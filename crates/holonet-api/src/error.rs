//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  /// The user and target exist but are not linked by any favorite.
  #[error("favorite not found")]
  FavoriteNotFound,

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  pub fn store(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Store(Box::new(e))
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::NotFound(m) => {
        (StatusCode::NOT_FOUND, Json(json!({ "message": m }))).into_response()
      }
      ApiError::BadRequest(m) => {
        (StatusCode::BAD_REQUEST, Json(json!({ "message": m }))).into_response()
      }
      ApiError::FavoriteNotFound => (
        StatusCode::NOT_FOUND,
        Json(json!({ "msg": "Favorite not found" })),
      )
        .into_response(),
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store operation failed");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": e.to_string() })))
          .into_response()
      }
    }
  }
}
