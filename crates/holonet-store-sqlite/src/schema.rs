//! SQL schema for the Holonet SQLite store.
//!
//! Executed once at connection startup. The version is recorded in
//! `PRAGMA user_version` so later migrations can be gated on it.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS users (
    id     INTEGER PRIMARY KEY,
    name   TEXT NOT NULL UNIQUE CHECK (length(name) <= 50),
    email  TEXT NOT NULL UNIQUE CHECK (length(email) <= 20)
);

CREATE TABLE IF NOT EXISTS people (
    id         INTEGER PRIMARY KEY,
    name       TEXT    NOT NULL UNIQUE CHECK (length(name) <= 50),
    eye_color  TEXT    NOT NULL CHECK (length(eye_color) <= 20),
    is_alive   INTEGER NOT NULL CHECK (is_alive IN (0, 1))
);

CREATE TABLE IF NOT EXISTS planets (
    id          INTEGER PRIMARY KEY,
    name        TEXT    NOT NULL UNIQUE CHECK (length(name) <= 50),
    population  INTEGER NOT NULL,
    climate     TEXT    NOT NULL CHECK (length(climate) <= 20)
);

-- Each favorite points at exactly one of people/planets.
CREATE TABLE IF NOT EXISTS favorites (
    id          INTEGER PRIMARY KEY,
    user_id     INTEGER NOT NULL REFERENCES users(id),
    people_id   INTEGER REFERENCES people(id),
    planets_id  INTEGER REFERENCES planets(id),
    CHECK ((people_id IS NULL) <> (planets_id IS NULL))
);

CREATE INDEX IF NOT EXISTS favorites_user_idx ON favorites(user_id);

PRAGMA user_version = 1;
";
