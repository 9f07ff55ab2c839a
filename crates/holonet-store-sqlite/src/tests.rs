//! Integration tests for `SqliteStore` against an in-memory database.

use holonet_core::{
  favorite::{FavoriteTarget, NewFavorite},
  record::{NewPerson, NewPlanet, NewUser},
  store::GalaxyStore,
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn luke() -> NewPerson {
  NewPerson {
    name:      "Luke Skywalker".into(),
    eye_color: "blue".into(),
    is_alive:  true,
  }
}

fn tatooine() -> NewPlanet {
  NewPlanet {
    name:       "Tatooine".into(),
    population: 200_000,
    climate:    "arid".into(),
  }
}

fn user(name: &str, email: &str) -> NewUser {
  NewUser { name: name.into(), email: email.into() }
}

// ─── Records ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_get_person() {
  let s = store().await;

  let person = s.add_person(luke()).await.unwrap();
  assert_eq!(person.name, "Luke Skywalker");

  let fetched = s.get_person(person.id).await.unwrap().unwrap();
  assert_eq!(fetched, person);
  assert!(fetched.is_alive);
}

#[tokio::test]
async fn get_missing_records_return_none() {
  let s = store().await;
  assert!(s.get_person(42).await.unwrap().is_none());
  assert!(s.get_planet(42).await.unwrap().is_none());
  assert!(s.get_user(42).await.unwrap().is_none());
}

#[tokio::test]
async fn list_planets_in_id_order() {
  let s = store().await;
  let a = s.add_planet(tatooine()).await.unwrap();
  let b = s
    .add_planet(NewPlanet {
      name:       "Hoth".into(),
      population: 0,
      climate:    "frozen".into(),
    })
    .await
    .unwrap();

  let all = s.list_planets().await.unwrap();
  assert_eq!(all, vec![a, b]);
}

#[tokio::test]
async fn list_empty_tables() {
  let s = store().await;
  assert!(s.list_people().await.unwrap().is_empty());
  assert!(s.list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_name_is_constraint_violation() {
  let s = store().await;
  s.add_person(luke()).await.unwrap();

  let err = s.add_person(luke()).await.unwrap_err();
  assert!(err.is_constraint(), "unexpected error: {err}");
}

#[tokio::test]
async fn duplicate_email_is_constraint_violation() {
  let s = store().await;
  s.add_user(user("leia", "leia@rebel.org")).await.unwrap();

  let err = s.add_user(user("han", "leia@rebel.org")).await.unwrap_err();
  assert!(err.is_constraint(), "unexpected error: {err}");
}

#[tokio::test]
async fn overlong_email_is_constraint_violation() {
  let s = store().await;
  let err = s
    .add_user(user("obi-wan", "ben.kenobi@jundlandwastes.tat"))
    .await
    .unwrap_err();
  assert!(err.is_constraint(), "unexpected error: {err}");
}

#[tokio::test]
async fn schema_init_is_idempotent() {
  let s = store().await;
  s.add_person(luke()).await.unwrap();
  s.init_schema().await.unwrap();
  assert_eq!(s.list_people().await.unwrap().len(), 1);
}

// ─── Favorites ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_planet_favorite_sets_only_planet_column() {
  let s = store().await;
  let u = s.add_user(user("leia", "leia@rebel.org")).await.unwrap();
  let p = s.add_planet(tatooine()).await.unwrap();

  let fav = s.add_favorite(NewFavorite::planet(u.id, p.id)).await.unwrap();
  assert_eq!(fav.user_id, u.id);
  assert_eq!(fav.planets_id, Some(p.id));
  assert_eq!(fav.people_id, None);

  let listed = s.list_favorites(u.id).await.unwrap();
  assert_eq!(listed, vec![fav]);
}

#[tokio::test]
async fn favorites_are_scoped_to_user() {
  let s = store().await;
  let leia = s.add_user(user("leia", "leia@rebel.org")).await.unwrap();
  let han = s.add_user(user("han", "han@falcon.net")).await.unwrap();
  let person = s.add_person(luke()).await.unwrap();

  s.add_favorite(NewFavorite::person(leia.id, person.id)).await.unwrap();

  assert_eq!(s.list_favorites(leia.id).await.unwrap().len(), 1);
  assert!(s.list_favorites(han.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn favorite_for_missing_user_is_rejected() {
  let s = store().await;
  let p = s.add_planet(tatooine()).await.unwrap();

  let err = s.add_favorite(NewFavorite::planet(99, p.id)).await.unwrap_err();
  assert!(err.is_constraint(), "unexpected error: {err}");
}

#[tokio::test]
async fn find_favorite_matches_target_kind() {
  let s = store().await;
  let u = s.add_user(user("leia", "leia@rebel.org")).await.unwrap();
  let person = s.add_person(luke()).await.unwrap();
  let planet = s.add_planet(tatooine()).await.unwrap();
  assert_eq!(person.id, planet.id);

  let fav = s.add_favorite(NewFavorite::planet(u.id, planet.id)).await.unwrap();

  let found = s
    .find_favorite(u.id, FavoriteTarget::Planet(planet.id))
    .await
    .unwrap();
  assert_eq!(found, Some(fav));

  // Same numeric id, different table.
  let none = s
    .find_favorite(u.id, FavoriteTarget::Person(person.id))
    .await
    .unwrap();
  assert!(none.is_none());
}

#[tokio::test]
async fn delete_favorite_reports_removal() {
  let s = store().await;
  let u = s.add_user(user("leia", "leia@rebel.org")).await.unwrap();
  let person = s.add_person(luke()).await.unwrap();
  let fav = s.add_favorite(NewFavorite::person(u.id, person.id)).await.unwrap();

  assert!(s.delete_favorite(fav.id).await.unwrap());
  assert!(!s.delete_favorite(fav.id).await.unwrap());
  assert!(s.list_favorites(u.id).await.unwrap().is_empty());
}
