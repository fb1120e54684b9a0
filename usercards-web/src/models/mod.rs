//! Web-side state.

pub mod app_state;
