//! # Connection Lifecycle
//!
//! In-memory record of whether a wallet account is linked to the page, and
//! the controller that moves it between states.
//!
//! ```text
//! Disconnected --connect()--> [pending: Connect] --ok--> Connected{account}
//!       ^                            |
//!       +----------- err ------------+   (previous state restored)
//!
//! Connected --disconnect()--> [pending: Disconnect] --ok--> Disconnected
//! ```
//!
//! The state lives in a [`ConnectionStore`]. The browser store is a reactive
//! signal; tests use a `RefCell`.

use std::cell::RefCell;

use crate::error::WalletError;
use crate::provider::WalletProvider;

/// Wallet request currently awaiting the provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingRequest {
    Connect,
    Disconnect,
}

/// Connection state. `account` is `Some` exactly when connected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConnectionState {
    account: Option<String>,
    pending: Option<PendingRequest>,
}

impl ConnectionState {
    pub fn disconnected() -> Self {
        Self::default()
    }

    pub fn connected(account: String) -> Self {
        Self {
            account: Some(account),
            pending: None,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }

    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    pub fn pending(&self) -> Option<PendingRequest> {
        self.pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn with_pending(mut self, request: PendingRequest) -> Self {
        self.pending = Some(request);
        self
    }
}

/// Storage cell the controller reads and writes.
pub trait ConnectionStore {
    fn get(&self) -> ConnectionState;
    fn set(&self, state: ConnectionState);
}

impl ConnectionStore for RefCell<ConnectionState> {
    fn get(&self) -> ConnectionState {
        self.borrow().clone()
    }

    fn set(&self, state: ConnectionState) {
        *self.borrow_mut() = state;
    }
}

/// Drives connect/disconnect requests against a provider and a store.
pub struct ConnectionController<'a, P: ?Sized, S: ?Sized> {
    provider: &'a P,
    store: &'a S,
}

impl<'a, P, S> ConnectionController<'a, P, S>
where
    P: WalletProvider + ?Sized,
    S: ConnectionStore + ?Sized,
{
    pub fn new(provider: &'a P, store: &'a S) -> Self {
        Self { provider, store }
    }

    #[cfg(test)]
    fn state(&self) -> ConnectionState {
        self.store.get()
    }

    /// Request account access. On success the store holds the first
    /// account returned; on failure it is left as it was.
    pub async fn connect(&self) -> Result<String, WalletError> {
        let previous = self.store.get();
        if previous.is_pending() {
            log::warn!("Connect ignored: {:?} request in flight", previous.pending());
            return Err(WalletError::RequestPending);
        }

        self.store.set(previous.clone().with_pending(PendingRequest::Connect));

        match self.request_account().await {
            Ok(account) => {
                log::info!("Wallet connected: {}", account);
                self.store.set(ConnectionState::connected(account.clone()));
                Ok(account)
            }
            Err(err) => {
                log::warn!("Wallet connect failed: {}", err);
                self.store.set(previous);
                Err(err)
            }
        }
    }

    /// Drop the active session. A no-op when nothing is connected.
    pub async fn disconnect(&self) -> Result<(), WalletError> {
        let previous = self.store.get();
        if previous.is_pending() {
            log::warn!("Disconnect ignored: {:?} request in flight", previous.pending());
            return Err(WalletError::RequestPending);
        }
        if !previous.is_connected() {
            log::debug!("Disconnect requested while disconnected");
            return Ok(());
        }

        self.store.set(previous.clone().with_pending(PendingRequest::Disconnect));

        match self.provider.end_session().await {
            Ok(()) => {
                log::info!("Wallet disconnected");
                self.store.set(ConnectionState::disconnected());
                Ok(())
            }
            Err(err) => {
                let reason = match err {
                    WalletError::Provider(msg) | WalletError::DisconnectFailed(msg) => msg,
                    other => other.to_string(),
                };
                log::warn!("Wallet disconnect failed: {}", reason);
                self.store.set(previous);
                Err(WalletError::DisconnectFailed(reason))
            }
        }
    }

    async fn request_account(&self) -> Result<String, WalletError> {
        if !self.provider.is_available() {
            return Err(WalletError::ProviderMissing);
        }

        let accounts = self.provider.request_accounts().await?;
        accounts
            .into_iter()
            .find(|account| !account.is_empty())
            .ok_or_else(|| WalletError::Provider("wallet returned no accounts".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::mock::MockProvider;

    const ACCOUNT: &str = "0x5aeda56215b167893e80b4fe645ba6d5bab767de";

    fn store() -> RefCell<ConnectionState> {
        RefCell::new(ConnectionState::disconnected())
    }

    #[test]
    fn test_initial_state_is_disconnected() {
        let state = ConnectionState::default();
        assert!(!state.is_connected());
        assert!(state.account().is_none());
        assert!(!state.is_pending());
    }

    #[tokio::test]
    async fn test_connect_success_stores_first_account() {
        let provider = MockProvider::installed()
            .with_accounts(Ok(vec![ACCOUNT.to_string(), "0xother".to_string()]));
        let store = store();
        let controller = ConnectionController::new(&provider, &store);

        let account = controller.connect().await.expect("connect should succeed");

        assert_eq!(account, ACCOUNT);
        let state = controller.state();
        assert!(state.is_connected());
        assert_eq!(state.account(), Some(ACCOUNT));
        assert!(!state.is_pending());
    }

    #[tokio::test]
    async fn test_connect_without_provider_leaves_state_unchanged() {
        let provider = MockProvider::missing();
        let store = store();
        let controller = ConnectionController::new(&provider, &store);

        let result = controller.connect().await;

        assert_eq!(result, Err(WalletError::ProviderMissing));
        assert_eq!(controller.state(), ConnectionState::disconnected());
        assert_eq!(provider.account_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_connect_rejected_by_user_leaves_state_unchanged() {
        let provider = MockProvider::installed().with_accounts(Err(WalletError::UserRejected));
        let store = store();
        let controller = ConnectionController::new(&provider, &store);

        assert_eq!(controller.connect().await, Err(WalletError::UserRejected));
        assert_eq!(controller.state(), ConnectionState::disconnected());
    }

    #[tokio::test]
    async fn test_connect_with_empty_account_list_is_provider_error() {
        let provider = MockProvider::installed().with_accounts(Ok(vec![]));
        let store = store();
        let controller = ConnectionController::new(&provider, &store);

        let result = controller.connect().await;

        assert!(matches!(result, Err(WalletError::Provider(_))));
        assert!(!controller.state().is_connected());
    }

    #[tokio::test]
    async fn test_failed_reconnect_keeps_existing_account() {
        let provider = MockProvider::installed()
            .with_accounts(Err(WalletError::Provider("wallet locked".to_string())));
        let store = RefCell::new(ConnectionState::connected(ACCOUNT.to_string()));
        let controller = ConnectionController::new(&provider, &store);

        assert!(controller.connect().await.is_err());
        assert_eq!(controller.state().account(), Some(ACCOUNT));
    }

    #[tokio::test]
    async fn test_disconnect_from_connected_clears_account() {
        let provider = MockProvider::installed().with_end_session(Ok(()));
        let store = RefCell::new(ConnectionState::connected(ACCOUNT.to_string()));
        let controller = ConnectionController::new(&provider, &store);

        controller.disconnect().await.expect("disconnect should succeed");

        let state = controller.state();
        assert!(!state.is_connected());
        assert!(state.account().is_none());
        assert_eq!(provider.end_calls.get(), 1);
    }

    #[tokio::test]
    async fn test_disconnect_while_disconnected_is_noop() {
        let provider = MockProvider::installed();
        let store = store();
        let controller = ConnectionController::new(&provider, &store);

        assert_eq!(controller.disconnect().await, Ok(()));
        assert_eq!(controller.state(), ConnectionState::disconnected());
        assert_eq!(provider.end_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_disconnect_failure_leaves_state_unchanged() {
        let provider = MockProvider::installed()
            .with_end_session(Err(WalletError::Provider("revoke failed".to_string())));
        let store = RefCell::new(ConnectionState::connected(ACCOUNT.to_string()));
        let controller = ConnectionController::new(&provider, &store);

        let result = controller.disconnect().await;

        assert_eq!(result, Err(WalletError::DisconnectFailed("revoke failed".to_string())));
        assert_eq!(controller.state(), ConnectionState::connected(ACCOUNT.to_string()));
    }

    #[tokio::test]
    async fn test_requests_rejected_while_pending() {
        let provider = MockProvider::installed().with_accounts(Ok(vec![ACCOUNT.to_string()]));
        let pending = ConnectionState::disconnected().with_pending(PendingRequest::Connect);
        let store = RefCell::new(pending.clone());
        let controller = ConnectionController::new(&provider, &store);

        assert_eq!(controller.connect().await, Err(WalletError::RequestPending));
        assert_eq!(controller.disconnect().await, Err(WalletError::RequestPending));
        assert_eq!(controller.state(), pending);
        assert_eq!(provider.account_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_connect_then_disconnect_round_trip() {
        let provider = MockProvider::installed()
            .with_accounts(Ok(vec![ACCOUNT.to_string()]))
            .with_end_session(Ok(()));
        let store = store();
        let controller = ConnectionController::new(&provider, &store);

        controller.connect().await.expect("connect should succeed");
        assert!(controller.state().is_connected());

        controller.disconnect().await.expect("disconnect should succeed");
        assert_eq!(controller.state(), ConnectionState::disconnected());
    }
}
