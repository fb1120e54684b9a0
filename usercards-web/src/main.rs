//! User Cards web client.

mod api;
mod app;
mod components;
mod config;
mod containers;
mod logging;
mod models;
mod pages;


use std::any::Any;

use app::App;
use tracing::{error, info};
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

/// Scopes the directory store to this page instance.
#[function_component(DirectoryRoot)]
fn directory_root() -> Html {
    html! {
        <YewduxRoot>
            <App />
        </YewduxRoot>
    }
}

/// Text of a panic payload, for the two payload types `panic!` produces.
fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic")
}

fn main() {
    logging::init();

    std::panic::set_hook(Box::new(|info| {
        let message = panic_message(info.payload());
        match info.location() {
            Some(location) => error!(
                file = location.file(),
                line = location.line(),
                column = location.column(),
                "panic: {message}"
            ),
            None => error!("panic: {message}"),
        }
    }));

    info!("starting User Cards");

    // Mounts onto <body>
    Renderer::<DirectoryRoot>::new().render();
}
