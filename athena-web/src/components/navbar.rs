//! Navigation Bar Component
//!
//! Hamburger menu, route links and the connect control. The connect button
//! moves into the mobile menu when the viewport is at or below the
//! configured breakpoint.

use athena_core::navbar::{NavbarState, NAV_LINKS};
use athena_core::{Route, SiteConfig};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::ConnectButton;
use crate::utils::dom::viewport_width;

#[component]
pub fn Navbar() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let navbar = RwSignal::new(NavbarState::new(config.menu_breakpoint));

    let show_button = move || {
        if let Some(width) = viewport_width() {
            navbar.maybe_update(|state| state.button.update(width));
        }
    };
    show_button();

    let resize = window_event_listener(leptos::ev::resize, move |_| show_button());
    on_cleanup(move || resize.remove());

    let toggle = move |_| navbar.update(|state| state.menu.toggle());
    let activate = move |route: Route| {
        navbar.update(|state| {
            state.activate(route);
        })
    };

    let menu_open = move || navbar.with(|state| state.menu.is_open());
    let button_visible = move || navbar.with(|state| state.button.is_visible());

    view! {
        <nav class="navbar">
            <div class="navbar-container container">
                <div class="navbar-logo" on:click=move |_| activate(Route::Home)>
                    <A href=Route::Home.path()>
                        <span class="nav-title">
                            <span class="navbar-icon">"◎"</span>
                            {config.nav_brand.clone()}
                        </span>
                    </A>
                </div>
                <div class="menu-icon" on:click=toggle>
                    {move || if menu_open() { "✕" } else { "☰" }}
                </div>
                <ul class=move || navbar.with(|state| state.menu.class())>
                    {NAV_LINKS
                        .into_iter()
                        .map(|route| {
                            view! {
                                <li class="nav-item" on:click=move |_| activate(route)>
                                    <A href=route.path()>
                                        <span class="nav-links">{route.title()}</span>
                                    </A>
                                </li>
                            }
                        })
                        .collect_view()}
                    <Show
                        when=button_visible
                        fallback=|| view! {
                            <li class="nav-btn nav-btn--mobile">
                                <ConnectButton mobile=true/>
                            </li>
                        }
                    >
                        <li class="nav-btn">
                            <ConnectButton/>
                        </li>
                    </Show>
                </ul>
            </div>
        </nav>
    }
}
