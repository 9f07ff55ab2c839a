//! Fixture loading for `holonet seed`.
//!
//! A fixture is a JSON object with optional `people`, `planets` and `users`
//! arrays of insert payloads. Favorites are not part of fixtures; they are
//! created through the API.

use holonet_core::{
  record::{NewPerson, NewPlanet, NewUser},
  store::GalaxyStore,
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Fixture {
  #[serde(default)]
  pub people:  Vec<NewPerson>,
  #[serde(default)]
  pub planets: Vec<NewPlanet>,
  #[serde(default)]
  pub users:   Vec<NewUser>,
}

/// Row counts inserted by [`seed`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
  pub people:  usize,
  pub planets: usize,
  pub users:   usize,
}

/// Insert every record of `fixture`, one commit per row. Stops at the first
/// failing insert; rows written before it stay.
pub async fn seed<S: GalaxyStore>(store: &S, fixture: Fixture) -> Result<SeedReport, S::Error> {
  let mut report = SeedReport::default();

  for person in fixture.people {
    store.add_person(person).await?;
    report.people += 1;
  }
  for planet in fixture.planets {
    store.add_planet(planet).await?;
    report.planets += 1;
  }
  for user in fixture.users {
    store.add_user(user).await?;
    report.users += 1;
  }

  tracing::info!(
    people = report.people,
    planets = report.planets,
    users = report.users,
    "fixture loaded"
  );
  Ok(report)
}

#[cfg(test)]
mod tests {
  use holonet_store_sqlite::SqliteStore;

  use super::*;

  const FIXTURE: &str = r#"{
    "people":  [{ "name": "Leia Organa", "eye_color": "brown", "is_alive": true }],
    "planets": [
      { "name": "Alderaan", "population": 2000000000, "climate": "temperate" },
      { "name": "Bespin", "population": 6000000, "climate": "temperate" }
    ]
  }"#;

  #[tokio::test]
  async fn seed_inserts_all_sections() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let fixture: Fixture = serde_json::from_str(FIXTURE).unwrap();

    let report = seed(&store, fixture).await.unwrap();
    assert_eq!(report, SeedReport { people: 1, planets: 2, users: 0 });
    assert_eq!(store.list_planets().await.unwrap()[1].name, "Bespin");
  }

  #[tokio::test]
  async fn seed_stops_on_duplicate() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let fixture = Fixture {
      users: vec![
        NewUser { name: "han".into(), email: "han@falcon.net".into() },
        NewUser { name: "han".into(), email: "solo@falcon.net".into() },
      ],
      ..Fixture::default()
    };

    let err = seed(&store, fixture).await.unwrap_err();
    assert!(err.is_constraint());
    assert_eq!(store.list_users().await.unwrap().len(), 1);
  }
}
