//! Athena Marketplace - App root
//!
//! Provides the site config and wallet context, then dispatches the current
//! location through the route table.
//!
//! Paths go through `Route::resolve` rather than `<Routes>` because matching
//! is case-insensitive (listing cards link to `/connect`) and `leptos_router`
//! matches case-sensitively.

use athena_core::{Route, SiteConfig};
use leptos::prelude::*;
use leptos_router::{
    components::{Router, A},
    hooks::use_location,
};

use crate::components::{Footer, Navbar};
use crate::pages::Page;
use crate::state::wallet::provide_wallet_context;
use crate::utils::dom::set_document_title;

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_context(config);
    provide_wallet_context();

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <RoutedPage/>
                <Footer/>
            </div>
        </Router>
    }
}

/// Renders the page mapped to the current path, or the not-found page.
#[component]
fn RoutedPage() -> impl IntoView {
    let location = use_location();
    let brand = expect_context::<SiteConfig>().brand;
    let route = Memo::new(move |_| Route::resolve(&location.pathname.get()));

    Effect::new(move || {
        let page = route.get().map_or("Not Found", |route| route.title());
        set_document_title(&format!("{} | {}", page, brand));
    });

    move || match route.get() {
        Some(route) => view! { <Page route/> }.into_any(),
        None => view! { <NotFound/> }.into_any(),
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <div class="card">
                <h1>"404 - Page Not Found"</h1>
                <p>"The page you're looking for doesn't exist."</p>
                <A href=Route::Home.path()>
                    <span class="btn">"Go to Home"</span>
                </A>
            </div>
        </div>
    }
}
