//! # Directory
//!
//! The page-scoped list store and the filter/sort pipeline that derives the
//! rendered subset from it.

pub mod pipeline;
pub mod state;

pub use pipeline::{filter_users, sort_users, visible_users};
pub use state::{ListAction, ListState, SortKey};
