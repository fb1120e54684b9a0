//! Root component and startup fetch.

use crate::api::load_directory;
use crate::components::Loading;
use crate::config::FrontendConfig;
use crate::models::app_state::{AppState, Bootstrap};
use crate::pages::{DirectoryPage, ErrorPage};
use wasm_bindgen_futures::spawn_local;
use yew::{Html, Properties, function_component, html, use_effect_with};
use yewdux::prelude::use_store;

/// Runs the initial fetch once, then renders the directory or the fault view.
#[function_component(App)]
pub fn app() -> Html {
    let (store_state, store_dispatch) = use_store::<AppState>();

    {
        let store_dispatch = store_dispatch.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let config = FrontendConfig::new();
                let state = match load_directory(&config).await {
                    Ok(users) => AppState::loaded(users),
                    Err(err) => AppState::failed(err),
                };
                store_dispatch.set(state);
            });
            || ()
        });
    }

    html! { <BootstrapView bootstrap={store_state.bootstrap.clone()} /> }
}

/// Properties for [`BootstrapView`].
#[derive(Properties, PartialEq)]
pub struct BootstrapViewProps {
    /// Outcome of the startup fetch.
    pub bootstrap: Bootstrap,
}

/// Picks the page for the current fetch outcome. A failure renders only the
/// fault view.
#[function_component(BootstrapView)]
pub fn bootstrap_view(props: &BootstrapViewProps) -> Html {
    match &props.bootstrap {
        Bootstrap::Pending => html! { <Loading /> },
        Bootstrap::Failed(error) => html! { <ErrorPage error={error.clone()} /> },
        Bootstrap::Ready => html! { <DirectoryPage /> },
    }
}
