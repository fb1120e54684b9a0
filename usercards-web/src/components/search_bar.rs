use web_sys::HtmlInputElement;
use yew::{Callback, Html, Properties, TargetCast, events::InputEvent, function_component, html};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    /// Current query.
    pub value: String,
    /// Fired with the full input value on every keystroke.
    pub on_change: Callback<String>,
}

/// Free-text filter input.
#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <div class="mb-4 flex justify-center">
            <label class="input input-bordered flex items-center gap-2 w-full max-w-md">
                <Icon icon_id={IconId::HeroiconsOutlineMagnifyingGlass} class="w-4 h-4 opacity-70" />
                <input
                    type="text"
                    class="grow text-center"
                    placeholder="search by name or company"
                    value={props.value.clone()}
                    oninput={on_input}
                />
            </label>
        </div>
    }
}
