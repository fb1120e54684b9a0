use web_sys::window;
use yew::{Children, Html, Properties, classes, function_component, html, use_effect_with};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    /// Page body.
    pub children: Children,
}

/// Page chrome: heading, dark theme and footer.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    // Adds data-theme attribute to html tag for theme support
    use_effect_with((), |_| {
        if let Some(window) = window()
            && let Some(document) = window.document()
            && let Some(html_element) = document.document_element()
        {
            html_element
                .set_attribute("data-theme", "dark")
                .unwrap_or_default();
        }
        || {}
    });

    html! {
        <div class="min-h-screen bg-base-100 flex flex-col">
            <main class={classes!("flex-grow", "p-8")}>
                <h1 class="text-4xl font-bold text-center mb-8">{"User Cards"}</h1>
                { props.children.clone() }
            </main>
            <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                <div>
                    <p>{"User Cards · Powered by Rust, Yew and DaisyUI"}</p>
                </div>
            </footer>
        </div>
    }
}
