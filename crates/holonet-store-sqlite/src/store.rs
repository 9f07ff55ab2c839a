//! [`SqliteStore`] — the SQLite implementation of [`GalaxyStore`].

use std::path::Path;

use rusqlite::{OptionalExtension as _, Row};
use tracing::debug;

use holonet_core::{
  favorite::{Favorite, FavoriteTarget, NewFavorite},
  record::{NewPerson, NewPlanet, NewUser, Person, Planet, User},
  store::GalaxyStore,
};

use crate::{
  Result,
  rows::{self, FAVORITE_COLUMNS, PERSON_COLUMNS, PLANET_COLUMNS, USER_COLUMNS},
  schema::SCHEMA,
};

type RowMapper<T> = fn(&Row<'_>) -> rusqlite::Result<T>;

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Holonet store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  pub(crate) async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// `SELECT <columns> FROM <table> WHERE id = ?1`.
  async fn fetch_by_id<T: Send + 'static>(
    &self,
    table:   &'static str,
    columns: &'static str,
    id:      i64,
    map:     RowMapper<T>,
  ) -> Result<Option<T>> {
    let row = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {columns} FROM {table} WHERE id = ?1"),
              rusqlite::params![id],
              map,
            )
            .optional()?,
        )
      })
      .await?;
    Ok(row)
  }

  /// `SELECT <columns> FROM <table> ORDER BY id`.
  async fn fetch_all<T: Send + 'static>(
    &self,
    table:   &'static str,
    columns: &'static str,
    map:     RowMapper<T>,
  ) -> Result<Vec<T>> {
    let rows = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!("SELECT {columns} FROM {table} ORDER BY id"))?;
        let rows = stmt
          .query_map([], map)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  /// Favorites decoded from rows are checked against the one-target rule.
  fn checked(favorites: Vec<Favorite>) -> Result<Vec<Favorite>> {
    for fav in &favorites {
      fav.target()?;
    }
    Ok(favorites)
  }
}

// ─── GalaxyStore impl ────────────────────────────────────────────────────────

impl GalaxyStore for SqliteStore {
  type Error = crate::Error;

  // ── People ────────────────────────────────────────────────────────────────

  async fn get_person(&self, id: i64) -> Result<Option<Person>> {
    self.fetch_by_id("people", PERSON_COLUMNS, id, rows::person).await
  }

  async fn list_people(&self) -> Result<Vec<Person>> {
    self.fetch_all("people", PERSON_COLUMNS, rows::person).await
  }

  async fn add_person(&self, input: NewPerson) -> Result<Person> {
    let NewPerson { name, eye_color, is_alive } = input;
    let (n, e) = (name.clone(), eye_color.clone());

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO people (name, eye_color, is_alive) VALUES (?1, ?2, ?3)",
          rusqlite::params![n, e, is_alive],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    debug!(id, "inserted person");
    Ok(Person { id, name, eye_color, is_alive })
  }

  // ── Planets ───────────────────────────────────────────────────────────────

  async fn get_planet(&self, id: i64) -> Result<Option<Planet>> {
    self.fetch_by_id("planets", PLANET_COLUMNS, id, rows::planet).await
  }

  async fn list_planets(&self) -> Result<Vec<Planet>> {
    self.fetch_all("planets", PLANET_COLUMNS, rows::planet).await
  }

  async fn add_planet(&self, input: NewPlanet) -> Result<Planet> {
    let NewPlanet { name, population, climate } = input;
    let (n, c) = (name.clone(), climate.clone());

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO planets (name, population, climate) VALUES (?1, ?2, ?3)",
          rusqlite::params![n, population, c],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    debug!(id, "inserted planet");
    Ok(Planet { id, name, population, climate })
  }

  // ── Users ─────────────────────────────────────────────────────────────────

  async fn get_user(&self, id: i64) -> Result<Option<User>> {
    self.fetch_by_id("users", USER_COLUMNS, id, rows::user).await
  }

  async fn list_users(&self) -> Result<Vec<User>> {
    self.fetch_all("users", USER_COLUMNS, rows::user).await
  }

  async fn add_user(&self, input: NewUser) -> Result<User> {
    let NewUser { name, email } = input;
    let (n, e) = (name.clone(), email.clone());

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO users (name, email) VALUES (?1, ?2)",
          rusqlite::params![n, e],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    debug!(id, "inserted user");
    Ok(User { id, name, email })
  }

  // ── Favorites ─────────────────────────────────────────────────────────────

  async fn list_favorites(&self, user_id: i64) -> Result<Vec<Favorite>> {
    let favorites = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {FAVORITE_COLUMNS} FROM favorites WHERE user_id = ?1 ORDER BY id"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![user_id], rows::favorite)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Self::checked(favorites)
  }

  async fn add_favorite(&self, input: NewFavorite) -> Result<Favorite> {
    let user_id = input.user_id;
    let (people_id, planets_id) = input.target.columns();

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO favorites (user_id, people_id, planets_id) VALUES (?1, ?2, ?3)",
          rusqlite::params![user_id, people_id, planets_id],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    debug!(id, user_id, ?people_id, ?planets_id, "inserted favorite");
    Ok(Favorite { id, user_id, people_id, planets_id })
  }

  async fn find_favorite(
    &self,
    user_id: i64,
    target:  FavoriteTarget,
  ) -> Result<Option<Favorite>> {
    let sql = match target {
      FavoriteTarget::Person(_) => format!(
        "SELECT {FAVORITE_COLUMNS} FROM favorites
         WHERE user_id = ?1 AND people_id = ?2 ORDER BY id LIMIT 1"
      ),
      FavoriteTarget::Planet(_) => format!(
        "SELECT {FAVORITE_COLUMNS} FROM favorites
         WHERE user_id = ?1 AND planets_id = ?2 ORDER BY id LIMIT 1"
      ),
    };
    let target_id = match target {
      FavoriteTarget::Person(id) | FavoriteTarget::Planet(id) => id,
    };

    let found = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(&sql, rusqlite::params![user_id, target_id], rows::favorite)
            .optional()?,
        )
      })
      .await?;

    if let Some(fav) = &found {
      fav.target()?;
    }
    Ok(found)
  }

  async fn delete_favorite(&self, id: i64) -> Result<bool> {
    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM favorites WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;

    debug!(id, removed, "deleted favorite");
    Ok(removed > 0)
  }
}
