//! # Fetch Gateway
//!
//! One-shot read of the user listing that seeds the directory.

pub mod client;
pub mod errors;

pub use client::UserGateway;
pub use errors::{FetchError, FetchResult};
