//! Fault view for a failed startup fetch.

use shared::FetchError;
use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct ErrorPageProps {
    /// Why the startup fetch failed.
    pub error: FetchError,
}

/// Replaces the whole page when the initial fetch fails. No directory state
/// is rendered alongside it.
#[function_component(ErrorPage)]
pub fn error_page(props: &ErrorPageProps) -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center p-4">
            <div role="alert" class="alert alert-error max-w-xl">
                <div>
                    <h1 class="text-2xl font-bold">{ "Unable to load users" }</h1>
                    <p>{ props.error.to_string() }</p>
                </div>
            </div>
        </div>
    }
}
