//! Connect / disconnect control with connection status.

use athena_core::utils::truncate_address;
use athena_core::PendingRequest;
use leptos::prelude::*;

use crate::state::wallet::use_wallet_context;

#[component]
pub fn ConnectButton(#[prop(optional)] mobile: bool) -> impl IntoView {
    let wallet = use_wallet_context();

    let on_click = move |_| {
        if wallet.is_connected() {
            wallet.disconnect();
        } else {
            wallet.connect();
        }
    };

    let label = move || match wallet.connection.with(|state| state.pending()) {
        Some(PendingRequest::Connect) => "Connecting...",
        Some(PendingRequest::Disconnect) => "Disconnecting...",
        None if wallet.is_connected() => "Disconnect",
        None => "Connect",
    };

    let class = if mobile {
        "btn btn--outline btn--mobile"
    } else {
        "btn btn--outline"
    };

    view! {
        <div class="connect-control">
            <button class=class disabled=move || wallet.is_pending() on:click=on_click>
                {label}
            </button>
            <span class="connect-status">
                {move || match wallet.account() {
                    Some(account) => {
                        let short = truncate_address(&account);
                        view! {
                            <span>"Connected With " <b title=account>{short}</b></span>
                        }
                            .into_any()
                    }
                    None => view! { <span>"Not Connected"</span> }.into_any(),
                }}
            </span>
            {move || {
                wallet
                    .last_error()
                    .map(|err| view! { <span class="connect-error" role="alert">{err}</span> })
            }}
        </div>
    }
}
