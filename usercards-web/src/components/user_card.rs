//! Profile cards.

use shared::User;
use yew::{Html, Properties, function_component, html};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct UserCardProps {
    /// The profile to render.
    pub user: User,
}

/// One profile card. Renders whatever fields are present.
#[function_component(UserCard)]
pub fn user_card(props: &UserCardProps) -> Html {
    let user = &props.user;

    html! {
        <div class="card bg-base-200 shadow-xl">
            <div class="card-body">
                <h2 class="card-title text-3xl justify-center">{ user.name.clone() }</h2>
                <p class="text-center text-base-content/60 mb-2">{ user.handle() }</p>
                <div class="space-y-1 text-left">
                    <p class="flex items-center gap-2">
                        <Icon icon_id={IconId::HeroiconsOutlineEnvelope} class="w-4 h-4" />
                        <span class="font-semibold">{"Email:"}</span>
                        <span>{ user.email.clone() }</span>
                    </p>
                    <p class="flex items-center gap-2">
                        <Icon icon_id={IconId::HeroiconsOutlinePhone} class="w-4 h-4" />
                        <span class="font-semibold">{"Phone:"}</span>
                        <span>{ user.phone.clone() }</span>
                    </p>
                    <p class="flex items-center gap-2">
                        <Icon icon_id={IconId::HeroiconsOutlineGlobeAlt} class="w-4 h-4" />
                        <span class="font-semibold">{"Website:"}</span>
                        <a
                            href={user.website_href()}
                            class="link link-info"
                            target="_blank"
                            rel="noreferrer"
                        >
                            { user.website.clone() }
                        </a>
                    </p>
                    <p class="flex items-center gap-2">
                        <Icon icon_id={IconId::HeroiconsOutlineMapPin} class="w-4 h-4" />
                        <span class="font-semibold">{"Address:"}</span>
                        <span>{ user.address.single_line() }</span>
                    </p>
                </div>
                <div class="my-4 text-center">
                    <h3 class="text-xl font-semibold">{"Company"}</h3>
                    <p class="text-base-content/70">{ user.company.name.clone() }</p>
                    <p class="italic text-base-content/50">{ format!("\"{}\"", user.company.catch_phrase) }</p>
                    <p class="badge badge-outline">{ user.company.bs.clone() }</p>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct UserCardsProps {
    /// Profiles in display order.
    pub users: Vec<User>,
}

/// Responsive grid of cards, in the order given.
#[function_component(UserCards)]
pub fn user_cards(props: &UserCardsProps) -> Html {
    html! {
        <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6 w-full mx-auto px-6">
            { for props.users.iter().map(|user| html! {
                <UserCard key={user.id} user={user.clone()} />
            })}
        </div>
    }
}
