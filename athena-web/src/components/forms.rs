//! Contact and upload forms
//!
//! Neither form has a backend; submission only acknowledges locally.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::state::wallet::use_wallet_context;

#[component]
pub fn ContactForm() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (sent, set_sent) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        log::info!("Contact form submitted by {}", name.get_untracked());
        set_sent.set(true);
    };

    let can_submit = move || {
        !name.with(|v| v.trim().is_empty())
            && email.with(|v| v.contains('@'))
            && !message.with(|v| v.trim().is_empty())
    };

    view! {
        <section class="form__section">
            <h1 class="form__heading">"Get in touch"</h1>
            <Show
                when=move || !sent.get()
                fallback=|| view! { <p class="form__notice">"Thanks! We'll get back to you soon."</p> }
            >
                <form class="form__container" on:submit=on_submit>
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Your Name"
                        prop:value=name
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <input
                        class="form__input"
                        type="email"
                        placeholder="Your Email"
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <textarea
                        class="form__input"
                        placeholder="Message"
                        prop:value=message
                        on:input=move |ev| set_message.set(event_target_value(&ev))
                    ></textarea>
                    <button class="btn btn--primary" type="submit" disabled=move || !can_submit()>
                        "Send"
                    </button>
                </form>
            </Show>
        </section>
    }
}

#[component]
pub fn Upload() -> impl IntoView {
    let wallet = use_wallet_context();
    let (title, set_title) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (notice, set_notice) = signal(None::<&'static str>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if !wallet.is_connected() {
            set_notice.set(Some("Connect your wallet to list this work."));
            return;
        }
        log::info!("Listing drafted: {} at {}", title.get_untracked(), price.get_untracked());
        set_notice.set(Some("Listing drafted. Minting opens soon."));
    };

    view! {
        <section class="upload__section">
            <h1 class="upload__heading">"Upload your work"</h1>
            <form class="upload__container" on:submit=on_submit>
                <input class="upload__input" type="file" accept="image/*,video/*,audio/*"/>
                <input
                    class="upload__input"
                    type="text"
                    placeholder="Title"
                    prop:value=title
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <input
                    class="upload__input"
                    type="text"
                    placeholder="Price (BNB)"
                    prop:value=price
                    on:input=move |ev| set_price.set(event_target_value(&ev))
                />
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || title.with(|v| v.trim().is_empty())
                >
                    "Create Listing"
                </button>
            </form>
            {move || notice.get().map(|text| view! { <p class="upload__notice">{text}</p> })}
        </section>
    }
}
