//! Hero banner section

use athena_core::content::HeroContent;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Hero(content: &'static HeroContent) -> impl IntoView {
    let section_class = if content.light_bg {
        "home__hero-section"
    } else {
        "home__hero-section darkBg"
    };
    let row_class = if content.image_start {
        "row home__hero-row row-reverse"
    } else {
        "row home__hero-row"
    };

    view! {
        <section class=section_class id=content.id>
            <div class="container">
                <div class=row_class>
                    <div class="col">
                        <div class="home__hero-text-wrapper">
                            <div class="top-line">{content.top_line}</div>
                            <h1 class="heading">{content.headline}</h1>
                            <p class="home__hero-subtitle">{content.description}</p>
                            <A href=content.button_route.path()>
                                <span class="btn btn--primary btn--wide">{content.button_label}</span>
                            </A>
                        </div>
                    </div>
                    <div class="col">
                        <div class="home__hero-img-wrapper">
                            <img src=content.image alt=content.alt class="home__hero-img"/>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
