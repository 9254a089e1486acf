//! Site footer

use athena_core::content::FOOTER_GROUPS;
use athena_core::{Route, SiteConfig};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    view! {
        <div class="footer-container">
            <div class="footer-links">
                {FOOTER_GROUPS
                    .iter()
                    .map(|group| {
                        view! {
                            <div class="footer-link-items">
                                <h2>{group.heading}</h2>
                                {group
                                    .links
                                    .iter()
                                    .map(|label| view! { <A href=Route::Home.path()>{*label}</A> })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <section class="social-media">
                <div class="social-media-wrap">
                    <div class="footer-logo">
                        <A href=Route::Home.path()>
                            <span class="social-logo">{config.brand.clone()}</span>
                        </A>
                    </div>
                    <small class="website-rights">{config.copyright.clone()}</small>
                </div>
            </section>
        </div>
    }
}
