//! Handler for `GET /` — a JSON index of every route.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Endpoint {
  pub method: &'static str,
  pub path:   &'static str,
}

/// Every route served by [`api_router`](crate::api_router), in mount order.
pub const ENDPOINTS: &[Endpoint] = &[
  Endpoint { method: "GET",    path: "/" },
  Endpoint { method: "GET",    path: "/people" },
  Endpoint { method: "GET",    path: "/people/{id}" },
  Endpoint { method: "GET",    path: "/planets" },
  Endpoint { method: "GET",    path: "/planets/{id}" },
  Endpoint { method: "GET",    path: "/users" },
  Endpoint { method: "GET",    path: "/users{id}/favorites" },
  Endpoint { method: "POST",   path: "/user{user_id}/favorite/planet/{planet_id}" },
  Endpoint { method: "DELETE", path: "/user{user_id}/favorite/planet/{planet_id}" },
  Endpoint { method: "POST",   path: "/user{user_id}/favorite/people/{people_id}" },
  Endpoint { method: "DELETE", path: "/user{user_id}/favorite/people/{people_id}" },
];

#[derive(Debug, Serialize)]
pub struct Sitemap {
  pub endpoints: &'static [Endpoint],
}

pub async fn handler() -> Json<Sitemap> { Json(Sitemap { endpoints: ENDPOINTS }) }
