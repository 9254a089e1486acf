//! Static showcase sections: how it works, artists, testimonials

use athena_core::content::{ARTISTS, TESTIMONIALS, WORK_STEPS};
use leptos::prelude::*;

#[component]
pub fn Works() -> impl IntoView {
    view! {
        <section class="works__section">
            <h1 class="works__heading">"How it works"</h1>
            <div class="works__container">
                {WORK_STEPS
                    .iter()
                    .enumerate()
                    .map(|(i, step)| {
                        view! {
                            <div class="works__step">
                                <span class="works__step-number">{i + 1}</span>
                                <h3>{step.title}</h3>
                                <p>{step.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Artists() -> impl IntoView {
    view! {
        <section class="artist__section">
            <h1 class="artist__heading">"Top artists"</h1>
            <div class="artist__container">
                {ARTISTS
                    .iter()
                    .map(|artist| {
                        view! {
                            <div class="artist__card">
                                <h3>{artist.name}</h3>
                                <p class="artist__handle">{artist.handle}</p>
                                <p class="artist__works">{format!("{} works", artist.works)}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="testimonial__section">
            <h1 class="testimonial__heading">"What our community says"</h1>
            <div class="testimonial__container">
                {TESTIMONIALS
                    .iter()
                    .map(|testimonial| {
                        view! {
                            <blockquote class="testimonial__card">
                                <p>{testimonial.quote}</p>
                                <footer>
                                    <b>{testimonial.author}</b>
                                    {format!(", {}", testimonial.role)}
                                </footer>
                            </blockquote>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
