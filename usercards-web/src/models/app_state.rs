//! Store shared by every component of the page.

use shared::{FetchError, ListAction, ListState, User};
use std::rc::Rc;
use yewdux::{Reducer, Store};

/// Progress of the one-time initial fetch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Bootstrap {
    /// The fetch has not completed yet.
    #[default]
    Pending,
    /// Users arrived and seeded the directory.
    Ready,
    /// The fetch failed; only the fault view is shown.
    Failed(FetchError),
}

/// Page-scoped store: lives in the `YewduxRoot` context of one page.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct AppState {
    /// Outcome of the startup fetch.
    pub bootstrap: Bootstrap,
    /// The directory store. Empty until the fetch succeeds.
    pub directory: ListState,
}

impl AppState {
    /// State after a successful fetch, seeded with `users`.
    #[must_use]
    pub fn loaded(users: Vec<User>) -> Self {
        Self {
            bootstrap: Bootstrap::Ready,
            directory: ListState::seeded(users),
        }
    }

    /// State after a failed fetch. The directory stays empty.
    #[must_use]
    pub fn failed(error: FetchError) -> Self {
        Self {
            bootstrap: Bootstrap::Failed(error),
            directory: ListState::default(),
        }
    }
}

impl Reducer<AppState> for ListAction {
    fn apply(self, mut state: Rc<AppState>) -> Rc<AppState> {
        Rc::make_mut(&mut state).directory.apply(self);
        state
    }
}
