//! Pages, each a fixed list of sections from the route table

pub mod connect;

use athena_core::{Route, Section};
use leptos::prelude::*;

use crate::components::{Artists, Collections, ContactForm, Hero, LiveAuctions, Testimonials, Upload, Works};
use connect::WalletCard;

#[component]
pub fn Page(route: Route) -> impl IntoView {
    view! {
        <main class="page">
            {route
                .sections()
                .iter()
                .map(|section| view! { <SectionView section=*section/> })
                .collect_view()}
        </main>
    }
}

#[component]
fn SectionView(section: Section) -> impl IntoView {
    match section {
        Section::Hero(content) => view! { <Hero content/> }.into_any(),
        Section::Works => view! { <Works/> }.into_any(),
        Section::LiveAuctions => view! { <LiveAuctions/> }.into_any(),
        Section::Collections => view! { <Collections/> }.into_any(),
        Section::Artists => view! { <Artists/> }.into_any(),
        Section::Testimonials => view! { <Testimonials/> }.into_any(),
        Section::ContactForm => view! { <ContactForm/> }.into_any(),
        Section::Upload => view! { <Upload/> }.into_any(),
        Section::WalletCard => view! { <WalletCard/> }.into_any(),
    }
}
