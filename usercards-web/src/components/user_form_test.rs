//! Rendering tests for the add-user form.

use super::user_form::{UserForm, UserFormProps};
use shared::DraftField;
use strum::IntoEnumIterator;
use wasm_bindgen_test::*;
use yew::{Callback, LocalServerRenderer};

wasm_bindgen_test_configure!(run_in_browser);

async fn render() -> String {
    LocalServerRenderer::<UserForm>::with_props(UserFormProps {
        on_add: Callback::noop(),
    })
    .render()
    .await
}

/// The attribute text of every `<input>` tag, in document order.
fn input_tags(rendered: &str) -> Vec<&str> {
    rendered
        .split("<input")
        .skip(1)
        .filter_map(|rest| rest.split('>').next())
        .collect()
}

fn tag_for<'a>(tags: &[&'a str], field: DraftField) -> &'a str {
    let name = format!("name=\"{}\"", field.key());
    tags.iter()
        .copied()
        .find(|tag| tag.contains(&name))
        .unwrap_or_else(|| panic!("no input for {field}"))
}

#[wasm_bindgen_test]
async fn renders_one_input_per_field() {
    let rendered = render().await;
    let tags = input_tags(&rendered);

    assert_eq!(tags.len(), 12);
    assert!(rendered.contains("Add New User"));
    assert!(rendered.contains("type=\"submit\""));
}

#[wasm_bindgen_test]
async fn only_catch_phrase_and_bs_are_optional() {
    let rendered = render().await;
    let tags = input_tags(&rendered);

    for field in DraftField::iter() {
        let tag = tag_for(&tags, field);
        assert_eq!(tag.contains("required"), field.is_required(), "{field}");
    }
    assert_eq!(tags.iter().filter(|tag| tag.contains("required")).count(), 10);
    assert!(!tag_for(&tags, DraftField::CatchPhrase).contains("required"));
    assert!(!tag_for(&tags, DraftField::Bs).contains("required"));
}

#[wasm_bindgen_test]
async fn email_input_uses_email_type() {
    let rendered = render().await;
    let tags = input_tags(&rendered);

    assert!(tag_for(&tags, DraftField::Email).contains("type=\"email\""));
    for field in DraftField::iter().filter(|f| *f != DraftField::Email) {
        assert!(tag_for(&tags, field).contains("type=\"text\""), "{field}");
    }
}

#[wasm_bindgen_test]
async fn inputs_carry_placeholders() {
    let rendered = render().await;
    let tags = input_tags(&rendered);

    assert!(tag_for(&tags, DraftField::CompanyName).contains("placeholder=\"Company Name\""));
    assert!(tag_for(&tags, DraftField::Bs).contains("placeholder=\"Business Specialty (bs)\""));
}
