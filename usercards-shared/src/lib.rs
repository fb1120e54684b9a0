#![cfg_attr(not(test), forbid(unsafe_code))]
#![deny(warnings, clippy::pedantic)]
//! Domain core for User Cards: the user schema, the page-scoped directory
//! store with its filter/sort derivation, and the gateway that loads the
//! initial collection.

pub mod config;
pub mod directory;
pub mod gateway;
pub mod models;

pub use config::{ConfigError, DirectoryConfig};
pub use directory::{ListAction, ListState, SortKey};
pub use gateway::{FetchError, FetchResult, UserGateway};
pub use models::{Address, Company, DraftField, FieldPathError, NewUserDraft, User};
