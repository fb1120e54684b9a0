//! # Configuration
//!
//! Settings for locating the remote user listing.

pub mod directory;

pub use directory::{ConfigError, DEFAULT_USERS_ENDPOINT, DirectoryConfig};
