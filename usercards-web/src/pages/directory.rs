//! The directory page.

use crate::containers::{Layout, UserDirectory};
use crate::models::app_state::AppState;
use shared::ListAction;
use yew::{Html, function_component, html};
use yewdux::prelude::use_store;

/// Binds the page-scoped store to the directory view.
#[function_component(DirectoryPage)]
pub fn directory_page() -> Html {
    let (state, dispatch) = use_store::<AppState>();
    let on_action = dispatch.apply_callback(|action: ListAction| action);

    html! {
        <Layout>
            <UserDirectory state={state.directory.clone()} {on_action} />
        </Layout>
    }
}
