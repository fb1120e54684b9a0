//! # Models
//!
//! User records and the add-user draft.

pub mod draft;
pub mod user;

pub use draft::{DraftField, FieldPathError, NewUserDraft};
pub use user::{Address, Company, User};
