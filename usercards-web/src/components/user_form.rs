//! Add-user form with its form-local draft.

use shared::{DraftField, NewUserDraft};
use std::rc::Rc;
use strum::IntoEnumIterator;
use web_sys::HtmlInputElement;
use yew::{
    Callback, Html, Properties, Reducible, TargetCast, classes,
    events::{InputEvent, SubmitEvent},
    function_component, html, use_reducer,
};

#[derive(Default, PartialEq)]
struct DraftState(NewUserDraft);

enum DraftAction {
    Set(DraftField, String),
    Reset,
}

impl Reducible for DraftState {
    type Action = DraftAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            DraftAction::Set(field, value) => {
                Rc::new(Self(self.0.clone().with(field, value)))
            }
            DraftAction::Reset => Rc::new(Self::default()),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct UserFormProps {
    /// Receives the completed draft on submit.
    pub on_add: Callback<NewUserDraft>,
}

/// Add-user form. One input per draft field; required fields rely on
/// browser-native validation.
#[function_component(UserForm)]
pub fn user_form(props: &UserFormProps) -> Html {
    let draft = use_reducer(DraftState::default);

    let on_submit = {
        let draft = draft.clone();
        let on_add = props.on_add.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_add.emit(draft.0.clone());
            draft.dispatch(DraftAction::Reset);
        })
    };

    let inputs = DraftField::iter().map(|field| {
        let on_input = {
            let draft = draft.clone();
            Callback::from(move |event: InputEvent| {
                let input: HtmlInputElement = event.target_unchecked_into();
                draft.dispatch(DraftAction::Set(field, input.value()));
            })
        };

        html! {
            <input
                key={field.key()}
                type={field.input_type()}
                name={field.key()}
                placeholder={field.placeholder()}
                value={draft.0.get(field).to_string()}
                oninput={on_input}
                required={field.is_required()}
                class={classes!("input", "input-bordered", "w-full")}
            />
        }
    });

    html! {
        <form class="mb-8 px-6 md:px-20" onsubmit={on_submit}>
            <h2 class="text-2xl font-semibold mb-4">{"Add New User"}</h2>
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                { for inputs }
            </div>
            <button class="btn btn-primary mt-4" type="submit">{"Add User"}</button>
        </form>
    }
}
