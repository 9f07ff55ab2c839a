//! Favorites — the join between a user and a person or planet.
//!
//! The table shape is flat (`people_id` and `planets_id` are both nullable
//! columns) but every favorite points at exactly one target. Inserts go
//! through [`FavoriteTarget`] so the API can never build a row with zero or
//! two targets.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// What a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
  Person(i64),
  Planet(i64),
}

impl FavoriteTarget {
  /// The `(people_id, planets_id)` column pair for this target.
  pub fn columns(self) -> (Option<i64>, Option<i64>) {
    match self {
      Self::Person(id) => (Some(id), None),
      Self::Planet(id) => (None, Some(id)),
    }
  }
}

/// A persisted favorite, serialized exactly as its row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
  pub id:         i64,
  pub user_id:    i64,
  pub people_id:  Option<i64>,
  pub planets_id: Option<i64>,
}

impl Favorite {
  /// Recover the typed target from the nullable column pair.
  pub fn target(&self) -> Result<FavoriteTarget> {
    match (self.people_id, self.planets_id) {
      (Some(p), None) => Ok(FavoriteTarget::Person(p)),
      (None, Some(p)) => Ok(FavoriteTarget::Planet(p)),
      (None, None) => Err(Error::MissingTarget(self.id)),
      (Some(_), Some(_)) => Err(Error::AmbiguousTarget(self.id)),
    }
  }
}

/// Insert payload for [`Favorite`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewFavorite {
  pub user_id: i64,
  pub target:  FavoriteTarget,
}

impl NewFavorite {
  pub fn person(user_id: i64, people_id: i64) -> Self {
    Self { user_id, target: FavoriteTarget::Person(people_id) }
  }

  pub fn planet(user_id: i64, planets_id: i64) -> Self {
    Self { user_id, target: FavoriteTarget::Planet(planets_id) }
  }
}
