//! Components that compose the page sections.

pub(crate) mod layout;
pub(crate) mod user_directory;


pub use layout::Layout;
pub use user_directory::UserDirectory;
