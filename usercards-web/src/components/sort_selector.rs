//! Sort key selector.

use shared::SortKey;
use strum::IntoEnumIterator;
use web_sys::HtmlSelectElement;
use yew::{Callback, Html, Properties, TargetCast, events::Event, function_component, html};

#[derive(Properties, PartialEq)]
pub struct SortSelectorProps {
    /// Key shown as selected.
    pub value: SortKey,
    /// Fired with the newly chosen key.
    pub on_change: Callback<SortKey>,
}

/// Drop-down listing every [`SortKey`].
#[function_component(SortSelector)]
pub fn sort_selector(props: &SortSelectorProps) -> Html {
    let on_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            if let Ok(key) = select.value().parse::<SortKey>() {
                on_change.emit(key);
            }
        })
    };

    html! {
        <div class="mb-4 flex items-center justify-center gap-2">
            <label for="sort" class="text-lg">{"Sort by:"}</label>
            <select id="sort" class="select select-bordered" onchange={on_change}>
                { for SortKey::iter().map(|key| html! {
                    <option value={key.to_string()} selected={key == props.value}>
                        { key.label() }
                    </option>
                })}
            </select>
        </div>
    }
}
