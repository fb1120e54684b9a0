//! Directory store: the user collection, the active query and sort key.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use tracing::trace;

use crate::models::{NewUserDraft, User};

use super::pipeline;

/// Field the rendered directory is ordered by.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortKey {
    /// Order by `name`.
    #[default]
    Name,
    /// Order by `company.name`.
    Company,
}

impl SortKey {
    /// Human-readable option label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Company => "Company",
        }
    }

    /// The user field this key orders by.
    #[must_use]
    pub fn field(self, user: &User) -> &str {
        match self {
            Self::Name => &user.name,
            Self::Company => &user.company.name,
        }
    }
}

/// Transitions accepted by [`ListState`]. All of them always succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    /// Replace the active search query.
    SetSearchQuery(String),
    /// Replace the active sort key.
    SetSortKey(SortKey),
    /// Append a user built from the draft, with a store-assigned id.
    AddUser(Box<NewUserDraft>),
}

/// The page's directory state: the collection plus the active query and
/// sort key.
///
/// Fields are private so the three [`ListAction`] transitions are the only
/// way to mutate it. Users are never removed or edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    users: Vec<User>,
    search_query: String,
    sort_key: SortKey,
    id_counter: Option<u64>,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            search_query: String::new(),
            sort_key: SortKey::default(),
            id_counter: Some(1),
        }
    }
}

impl ListState {
    /// Creates the state from the fetched collection.
    ///
    /// Locally added users get ids above the largest seeded id, so they
    /// cannot collide with server ids however sparse those are. Once the
    /// counter runs past `u64::MAX` the smallest unused id is handed out.
    #[must_use]
    pub fn seeded(users: Vec<User>) -> Self {
        let id_counter = users
            .iter()
            .map(|user| user.id)
            .max()
            .map_or(Some(1), |max| max.checked_add(1));
        Self {
            users,
            id_counter,
            ..Self::default()
        }
    }

    /// All users in insertion order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// The active search query.
    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// The active sort key.
    #[must_use]
    pub const fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    /// The id the next added user will receive.
    #[must_use]
    pub fn next_id(&self) -> u64 {
        self.id_counter.unwrap_or_else(|| self.smallest_unused_id())
    }

    fn smallest_unused_id(&self) -> u64 {
        let taken: HashSet<u64> = self.users.iter().map(|user| user.id).collect();
        (1..=u64::MAX)
            .find(|id| !taken.contains(id))
            .unwrap_or_default()
    }

    /// Applies one transition in place.
    pub fn apply(&mut self, action: ListAction) {
        match action {
            ListAction::SetSearchQuery(query) => {
                trace!(query = %query, "search query changed");
                self.search_query = query;
            }
            ListAction::SetSortKey(key) => {
                trace!(sort_key = %key, "sort key changed");
                self.sort_key = key;
            }
            ListAction::AddUser(draft) => {
                let id = self.next_id();
                self.id_counter = self.id_counter.and_then(|next| next.checked_add(1));
                trace!(id, name = %draft.name, "user added");
                self.users.push((*draft).into_user(id));
            }
        }
    }

    /// By-value form of [`ListState::apply`].
    #[must_use]
    pub fn reduce(mut self, action: ListAction) -> Self {
        self.apply(action);
        self
    }

    /// The filtered and sorted users to render. Recomputed on every call.
    #[must_use]
    pub fn visible_users(&self) -> Vec<User> {
        pipeline::visible_users(&self.users, &self.search_query, self.sort_key)
    }
}
