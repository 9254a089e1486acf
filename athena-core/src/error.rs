//! # Error Types
//!
//! Failures of the wallet connection lifecycle.
//!
//! Every variant is recoverable: the controller restores the previous
//! [`crate::connection::ConnectionState`] and hands the error back to the
//! caller, which logs it and keeps it for display.

use thiserror::Error;

/// EIP-1193 code for "the user rejected the request".
pub const CODE_USER_REJECTED: i64 = 4001;
/// EIP-1193 code for "the requested method is not supported".
pub const CODE_UNSUPPORTED_METHOD: i64 = 4200;
/// JSON-RPC code for "method not found".
pub const CODE_METHOD_NOT_FOUND: i64 = -32601;

/// Wallet connect/disconnect failure.
///
/// # Example
///
/// ```rust
/// use athena_core::error::WalletError;
///
/// let err = WalletError::from_provider(Some(4001), "User rejected the request.".to_string());
/// assert_eq!(err, WalletError::UserRejected);
/// assert_eq!(err.to_string(), "Connection request was rejected");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// No injected provider exists in the page (no extension installed).
    #[error("No wallet provider found. Install a browser wallet extension")]
    ProviderMissing,

    /// The user dismissed or denied the account request.
    #[error("Connection request was rejected")]
    UserRejected,

    /// The provider failed at runtime (locked wallet, bad response, RPC error).
    #[error("Wallet provider error: {0}")]
    Provider(String),

    /// The provider refused to end the session.
    #[error("Failed to disconnect wallet: {0}")]
    DisconnectFailed(String),

    /// A connect or disconnect request is already in flight.
    #[error("A wallet request is already in progress")]
    RequestPending,
}

impl WalletError {
    /// Classify a raw provider rejection by its EIP-1193 error code.
    pub fn from_provider(code: Option<i64>, message: String) -> Self {
        match code {
            Some(CODE_USER_REJECTED) => WalletError::UserRejected,
            _ if message.is_empty() => WalletError::Provider("unknown error".to_string()),
            _ => WalletError::Provider(message),
        }
    }

    /// True for codes meaning the provider has no session-revocation method.
    pub fn is_unsupported_method(code: Option<i64>) -> bool {
        matches!(code, Some(CODE_UNSUPPORTED_METHOD) | Some(CODE_METHOD_NOT_FOUND))
    }
}
