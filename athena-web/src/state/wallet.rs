//! Wallet state management

use athena_core::{ConnectionController, ConnectionState, ConnectionStore, WalletError};
use leptos::prelude::*;

use crate::services::wallet::InjectedProvider;

/// Global wallet context, provided once by the app root.
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub connection: RwSignal<ConnectionState>,
    pub last_error: RwSignal<Option<WalletError>>,
}

impl WalletContext {
    pub fn new() -> Self {
        Self {
            connection: RwSignal::new(ConnectionState::disconnected()),
            last_error: RwSignal::new(None),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connection.with(|state| state.is_connected())
    }

    pub fn account(&self) -> Option<String> {
        self.connection.with(|state| state.account().map(|s| s.to_string()))
    }

    pub fn is_pending(&self) -> bool {
        self.connection.with(|state| state.is_pending())
    }

    pub fn last_error(&self) -> Option<String> {
        self.last_error.with(|err| err.as_ref().map(|e| e.to_string()))
    }

    /// Ask the injected wallet for an account.
    pub fn connect(&self) {
        let ctx = *self;
        leptos::task::spawn_local(async move {
            let provider = InjectedProvider;
            let store = SignalStore(ctx.connection);
            let result = ConnectionController::new(&provider, &store)
                .connect()
                .await
                .map(|_| ());
            ctx.record(result);
        });
    }

    /// Ask the injected wallet to end the session.
    pub fn disconnect(&self) {
        let ctx = *self;
        leptos::task::spawn_local(async move {
            let provider = InjectedProvider;
            let store = SignalStore(ctx.connection);
            let result = ConnectionController::new(&provider, &store).disconnect().await;
            ctx.record(result);
        });
    }

    fn record(&self, result: Result<(), WalletError>) {
        match result {
            Ok(()) => self.last_error.set(None),
            // The in-flight request will report its own outcome
            Err(WalletError::RequestPending) => {}
            Err(err) => self.last_error.set(Some(err)),
        }
    }
}

impl Default for WalletContext {
    fn default() -> Self {
        Self::new()
    }
}

/// [`ConnectionStore`] over the context signal.
struct SignalStore(RwSignal<ConnectionState>);

impl ConnectionStore for SignalStore {
    fn get(&self) -> ConnectionState {
        self.0.get_untracked()
    }

    fn set(&self, state: ConnectionState) {
        self.0.set(state);
    }
}

pub fn provide_wallet_context() -> WalletContext {
    let context = WalletContext::new();
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_context(test: impl FnOnce(WalletContext)) {
        let owner = Owner::new();
        owner.with(|| test(WalletContext::new()));
    }

    #[test]
    fn test_context_starts_disconnected_without_error() {
        with_context(|ctx| {
            assert_eq!(ctx.connection.get_untracked(), ConnectionState::disconnected());
            assert!(ctx.last_error.get_untracked().is_none());
        });
    }

    #[test]
    fn test_failure_is_recorded() {
        with_context(|ctx| {
            ctx.record(Err(WalletError::UserRejected));
            assert_eq!(ctx.last_error.get_untracked(), Some(WalletError::UserRejected));
        });
    }

    #[test]
    fn test_success_clears_recorded_failure() {
        with_context(|ctx| {
            ctx.record(Err(WalletError::ProviderMissing));
            ctx.record(Ok(()));
            assert!(ctx.last_error.get_untracked().is_none());
        });
    }

    #[test]
    fn test_pending_rejection_keeps_previous_error() {
        with_context(|ctx| {
            ctx.record(Err(WalletError::RequestPending));
            assert!(ctx.last_error.get_untracked().is_none());

            ctx.record(Err(WalletError::DisconnectFailed("revoke failed".to_string())));
            ctx.record(Err(WalletError::RequestPending));
            assert_eq!(
                ctx.last_error.get_untracked(),
                Some(WalletError::DisconnectFailed("revoke failed".to_string()))
            );
        });
    }

    #[test]
    fn test_signal_store_round_trips_state() {
        with_context(|ctx| {
            let store = SignalStore(ctx.connection);
            store.set(ConnectionState::connected("0xabc".to_string()));
            assert_eq!(store.get().account(), Some("0xabc"));
            assert!(ctx.connection.get_untracked().is_connected());
        });
    }
}
