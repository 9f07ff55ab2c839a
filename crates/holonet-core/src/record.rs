//! People, planets and users — the three independent tables.
//!
//! Each record serializes to a flat object of its own columns. Relations to
//! favorites are never embedded; they are read through
//! [`GalaxyStore::list_favorites`](crate::store::GalaxyStore::list_favorites).

use serde::{Deserialize, Serialize};

// ─── Person ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
  pub id:        i64,
  pub name:      String,
  pub eye_color: String,
  pub is_alive:  bool,
}

/// Insert payload for [`Person`]; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPerson {
  pub name:      String,
  pub eye_color: String,
  pub is_alive:  bool,
}

// ─── Planet ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
  pub id:         i64,
  pub name:       String,
  pub population: i64,
  pub climate:    String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPlanet {
  pub name:       String,
  pub population: i64,
  pub climate:    String,
}

// ─── User ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  pub id:    i64,
  pub name:  String,
  pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
  pub name:  String,
  pub email: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn person_serializes_only_its_columns() {
    let person = Person {
      id:        1,
      name:      "Luke Skywalker".into(),
      eye_color: "blue".into(),
      is_alive:  true,
    };
    let json = serde_json::to_value(&person).unwrap();
    assert_eq!(
      json,
      serde_json::json!({
        "id": 1,
        "name": "Luke Skywalker",
        "eye_color": "blue",
        "is_alive": true,
      })
    );
  }

  #[test]
  fn planet_serializes_only_its_columns() {
    let planet = Planet {
      id:         5,
      name:       "Tatooine".into(),
      population: 200_000,
      climate:    "arid".into(),
    };
    let json = serde_json::to_value(&planet).unwrap();
    let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys.len(), 4);
    assert!(["id", "name", "population", "climate"].iter().all(|k| keys.contains(k)));
  }
}
