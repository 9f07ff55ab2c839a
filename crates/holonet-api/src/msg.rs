//! The `{"msg": ...}` acknowledgement returned by favorite mutations.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Msg(pub &'static str);

impl IntoResponse for Msg {
  fn into_response(self) -> Response {
    (StatusCode::OK, Json(json!({ "msg": self.0 }))).into_response()
  }
}
