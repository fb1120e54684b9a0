//! Rendering tests for the profile cards.

use super::user_card::{UserCard, UserCardProps, UserCards, UserCardsProps};
use shared::{Address, Company, User};
use wasm_bindgen_test::*;
use yew::LocalServerRenderer;

wasm_bindgen_test_configure!(run_in_browser);

fn leanne() -> User {
    User {
        id: 1,
        name: "Leanne Graham".to_string(),
        username: "Bret".to_string(),
        email: "Sincere@april.biz".to_string(),
        phone: "1-770-736-8031 x56442".to_string(),
        website: "hildegard.org".to_string(),
        address: Address {
            street: "Kulas Light".to_string(),
            suite: "Apt. 556".to_string(),
            city: "Gwenborough".to_string(),
            zipcode: "92998-3874".to_string(),
        },
        company: Company {
            name: "Romaguera-Crona".to_string(),
            catch_phrase: "Multi-layered client-server neural-net".to_string(),
            bs: "harness real-time e-markets".to_string(),
        },
    }
}

#[wasm_bindgen_test]
async fn card_renders_every_field() {
    let rendered = LocalServerRenderer::<UserCard>::with_props(UserCardProps { user: leanne() })
        .render()
        .await;

    assert!(rendered.contains("Leanne Graham"));
    assert!(rendered.contains("@Bret"));
    assert!(rendered.contains("Sincere@april.biz"));
    assert!(rendered.contains("1-770-736-8031 x56442"));
    assert!(rendered.contains("href=\"http://hildegard.org\""));
    assert!(rendered.contains("target=\"_blank\""));
    assert!(rendered.contains("Kulas Light, Apt. 556, Gwenborough, 92998-3874"));
    assert!(rendered.contains("Romaguera-Crona"));
    assert!(rendered.contains("Multi-layered client-server neural-net"));
    assert!(rendered.contains("harness real-time e-markets"));
}

#[wasm_bindgen_test]
async fn grid_keeps_given_order() {
    let zed = User {
        id: 2,
        name: "Zed Smith".to_string(),
        ..User::default()
    };
    let rendered = LocalServerRenderer::<UserCards>::with_props(UserCardsProps {
        users: vec![zed, leanne()],
    })
    .render()
    .await;

    let zed_at = rendered.find("Zed Smith").unwrap();
    let leanne_at = rendered.find("Leanne Graham").unwrap();
    assert!(zed_at < leanne_at);
}

#[wasm_bindgen_test]
async fn grid_renders_nothing_for_no_users() {
    let rendered = LocalServerRenderer::<UserCards>::with_props(UserCardsProps { users: vec![] })
        .render()
        .await;

    assert!(!rendered.contains("card-body"));
}
