//! Row mappers between SQLite result rows and domain records.
//!
//! Column order in every mapper matches the `*_COLUMNS` constant next to it.

use holonet_core::{
  favorite::Favorite,
  record::{Person, Planet, User},
};
use rusqlite::Row;

pub const PERSON_COLUMNS: &str = "id, name, eye_color, is_alive";

pub fn person(row: &Row<'_>) -> rusqlite::Result<Person> {
  Ok(Person {
    id:        row.get(0)?,
    name:      row.get(1)?,
    eye_color: row.get(2)?,
    is_alive:  row.get(3)?,
  })
}

pub const PLANET_COLUMNS: &str = "id, name, population, climate";

pub fn planet(row: &Row<'_>) -> rusqlite::Result<Planet> {
  Ok(Planet {
    id:         row.get(0)?,
    name:       row.get(1)?,
    population: row.get(2)?,
    climate:    row.get(3)?,
  })
}

pub const USER_COLUMNS: &str = "id, name, email";

pub fn user(row: &Row<'_>) -> rusqlite::Result<User> {
  Ok(User {
    id:    row.get(0)?,
    name:  row.get(1)?,
    email: row.get(2)?,
  })
}

pub const FAVORITE_COLUMNS: &str = "id, user_id, people_id, planets_id";

pub fn favorite(row: &Row<'_>) -> rusqlite::Result<Favorite> {
  Ok(Favorite {
    id:         row.get(0)?,
    user_id:    row.get(1)?,
    people_id:  row.get(2)?,
    planets_id: row.get(3)?,
  })
}
