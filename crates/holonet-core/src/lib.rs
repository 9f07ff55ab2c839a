//! Core types and trait definitions for the Holonet dataset.
//!
//! This crate is free of HTTP and database dependencies. The store and API
//! crates depend on it.

pub mod error;
pub mod favorite;
pub mod record;
pub mod store;

pub use error::{Error, Result};
