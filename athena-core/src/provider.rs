//! Wallet provider seam.
//!
//! The browser build implements [`WalletProvider`] over the injected
//! `window.ethereum` object; tests use a scripted mock.

use async_trait::async_trait;

use crate::error::WalletError;

/// Capability object for an injected wallet.
///
/// Futures are `?Send`: the browser event loop is single-threaded and the
/// provider handles are JS values.
#[async_trait(?Send)]
pub trait WalletProvider {
    /// Whether a provider object is present in the environment.
    fn is_available(&self) -> bool;

    /// Ask the wallet for account access. Resolves to the exposed accounts,
    /// the active one first.
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError>;

    /// Ask the wallet to drop the session's account permission.
    async fn end_session(&self) -> Result<(), WalletError>;
}

#[cfg(test)]
pub(crate) mod mock {
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    use super::*;

    /// Scripted provider: each call pops the next queued response.
    #[derive(Default)]
    pub struct MockProvider {
        pub available: bool,
        pub accounts: RefCell<VecDeque<Result<Vec<String>, WalletError>>>,
        pub end_results: RefCell<VecDeque<Result<(), WalletError>>>,
        pub account_calls: Cell<usize>,
        pub end_calls: Cell<usize>,
    }

    impl MockProvider {
        pub fn installed() -> Self {
            Self {
                available: true,
                ..Default::default()
            }
        }

        pub fn missing() -> Self {
            Self::default()
        }

        pub fn with_accounts(self, result: Result<Vec<String>, WalletError>) -> Self {
            self.accounts.borrow_mut().push_back(result);
            self
        }

        pub fn with_end_session(self, result: Result<(), WalletError>) -> Self {
            self.end_results.borrow_mut().push_back(result);
            self
        }
    }

    #[async_trait(?Send)]
    impl WalletProvider for MockProvider {
        fn is_available(&self) -> bool {
            self.available
        }

        async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
            self.account_calls.set(self.account_calls.get() + 1);
            self.accounts
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(WalletError::Provider("no scripted response".to_string())))
        }

        async fn end_session(&self) -> Result<(), WalletError> {
            self.end_calls.set(self.end_calls.get() + 1);
            self.end_results.borrow_mut().pop_front().unwrap_or(Ok(()))
        }
    }
}
