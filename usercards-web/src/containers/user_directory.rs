//! The directory body: add-user form, search and sort controls, and the
//! derived card grid.

use crate::components::{SearchBar, SortSelector, UserCards, UserForm};
use shared::{ListAction, ListState, NewUserDraft};
use yew::{Callback, Html, Properties, function_component, html};

/// Shown when the derived subset is empty.
pub const EMPTY_PLACEHOLDER: &str = "No users found...";

/// Properties for [`UserDirectory`].
#[derive(Properties, PartialEq)]
pub struct UserDirectoryProps {
    /// Current directory state; the visible subset is derived from it on
    /// every render.
    pub state: ListState,
    /// Receives every transition raised by the form and the controls.
    pub on_action: Callback<ListAction>,
}

/// Form, controls and the derived card grid.
#[function_component(UserDirectory)]
pub fn user_directory(props: &UserDirectoryProps) -> Html {
    let on_add = props
        .on_action
        .reform(|draft: NewUserDraft| ListAction::AddUser(Box::new(draft)));
    let on_search = props.on_action.reform(ListAction::SetSearchQuery);
    let on_sort = props.on_action.reform(ListAction::SetSortKey);

    let visible = props.state.visible_users();

    html! {
        <div>
            <UserForm {on_add} />
            <SearchBar value={props.state.search_query().to_string()} on_change={on_search} />
            <SortSelector value={props.state.sort_key()} on_change={on_sort} />
            {
                if visible.is_empty() {
                    html! { <div class="text-center text-base-content/60">{ EMPTY_PLACEHOLDER }</div> }
                } else {
                    html! { <UserCards users={visible} /> }
                }
            }
        </div>
    }
}
