//! Listing grids: live auctions and popular collections

use athena_core::content::{CardIcon, ListingCard, LIVE_AUCTIONS, POPULAR_COLLECTIONS};
use leptos::prelude::*;
use leptos_router::components::A;

fn glyph(icon: CardIcon) -> &'static str {
    match icon {
        CardIcon::Brush => "🖌",
        CardIcon::Camera => "📷",
        CardIcon::Robot => "🤖",
        CardIcon::Palette => "🎨",
    }
}

#[component]
pub fn LiveAuctions() -> impl IntoView {
    view! {
        <ListingGrid
            class_prefix="Live"
            heading="Auctions"
            subheading="Live Auctions ---"
            cards=LIVE_AUCTIONS
        />
    }
}

#[component]
pub fn Collections() -> impl IntoView {
    view! {
        <ListingGrid
            class_prefix="auction"
            heading="Popular collections"
            subheading="Most popular ---"
            cards=POPULAR_COLLECTIONS
        />
    }
}

#[component]
fn ListingGrid(
    class_prefix: &'static str,
    heading: &'static str,
    subheading: &'static str,
    cards: &'static [ListingCard],
) -> impl IntoView {
    view! {
        <div class=format!("{}__section", class_prefix)>
            <div class=format!("{}__wrapper", class_prefix)>
                <h1 class=format!("{}__heading", class_prefix)>{heading}</h1>
                <h3 class=format!("{}__subheading", class_prefix)>{subheading}</h3>
                <div class=format!("{}__container", class_prefix)>
                    {cards
                        .iter()
                        .map(|card| view! { <Card class_prefix card/> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn Card(class_prefix: &'static str, card: &'static ListingCard) -> impl IntoView {
    let features = (card.artist.is_some() || card.price.is_some()).then(|| {
        view! {
            <ul class=format!("{}__container-features", class_prefix)>
                {card.artist.map(|artist| view! { <li>{artist}</li> })}
                {card.price.map(|price| view! { <li>{price}</li> })}
            </ul>
        }
    });

    view! {
        <A href=card.route.path()>
            <div class=format!("{}__container-card", class_prefix)>
                <div class=format!("{}__container-cardInfo", class_prefix)>
                    <div class="icon">{glyph(card.icon)}</div>
                    <h3>{card.title}</h3>
                    {features}
                    <span class=format!("btn btn--wide {}", card.accent.class())>"View more"</span>
                </div>
            </div>
        </A>
    }
}
