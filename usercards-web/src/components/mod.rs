//! Presentational components.

pub(crate) mod loading;
pub(crate) mod search_bar;
pub(crate) mod sort_selector;
pub(crate) mod user_card;
pub(crate) mod user_form;

#[cfg(all(test, target_arch = "wasm32"))]
mod user_card_test;
#[cfg(all(test, target_arch = "wasm32"))]
mod user_form_test;

// Re-export components for convenience
pub use loading::Loading;
pub use search_bar::SearchBar;
pub use sort_selector::SortSelector;
pub use user_card::UserCards;
pub use user_form::UserForm;
