//! Top-level page views.

mod directory;
pub(crate) mod error;

pub use directory::DirectoryPage;
pub use error::ErrorPage;
