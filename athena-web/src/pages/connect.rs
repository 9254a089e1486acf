//! Connect Wallet Page - full account and connection status

use athena_core::WalletProvider;
use leptos::prelude::*;

use crate::components::ConnectButton;
use crate::services::wallet::InjectedProvider;
use crate::state::wallet::use_wallet_context;

#[component]
pub fn WalletCard() -> impl IntoView {
    let wallet = use_wallet_context();
    let provider_installed = InjectedProvider.is_available();

    view! {
        <div class="wallet-card-container">
            <div class="card">
                <h1 class="card-title">"Connect Wallet"</h1>

                {move || match wallet.account() {
                    Some(account) => view! {
                        <div class="wallet-status">
                            <p class="wallet-status__label">"Status"</p>
                            <p class="wallet-status__value connected">"Connected"</p>
                            <p class="wallet-status__label">"Wallet Address"</p>
                            <p class="wallet-status__address">{account}</p>
                        </div>
                    }
                        .into_any(),
                    None => view! {
                        <div class="wallet-status">
                            <p class="wallet-status__label">"Status"</p>
                            <p class="wallet-status__value">"Not Connected"</p>
                        </div>
                    }
                        .into_any(),
                }}

                <ConnectButton/>

                {(!provider_installed).then(|| view! {
                    <p class="wallet-hint">
                        "No wallet extension detected. Install a browser wallet such as MetaMask, then reload the page."
                    </p>
                })}
            </div>
        </div>
    }
}
