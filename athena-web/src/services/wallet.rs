//! Injected Wallet Provider via wasm-bindgen
//!
//! JavaScript interop for the EIP-1193 provider extensions inject at
//! `window.ethereum`. The lifecycle itself lives in
//! [`athena_core::connection`]; this module only moves requests and errors
//! across the JS boundary.

use async_trait::async_trait;
use athena_core::{WalletError, WalletProvider};
use js_sys::Reflect;
use wasm_bindgen::prelude::*;

// ============================================================================
// PROVIDER BINDINGS (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
function injected() {
    if (typeof window === 'undefined' || !window.ethereum) {
        return null;
    }
    return window.ethereum;
}

export function hasInjectedProvider() {
    return injected() !== null;
}

export async function requestAccounts() {
    const provider = injected();
    if (!provider) {
        throw { code: null, message: 'No injected wallet provider' };
    }
    return await provider.request({ method: 'eth_requestAccounts' });
}

export async function revokeAccounts() {
    const provider = injected();
    if (!provider) {
        throw { code: null, message: 'No injected wallet provider' };
    }
    await provider.request({
        method: 'wallet_revokePermissions',
        params: [{ eth_accounts: {} }],
    });
}
")]
extern "C" {
    /// Whether `window.ethereum` exists
    fn hasInjectedProvider() -> bool;

    /// `eth_requestAccounts`, resolves to an array of hex addresses
    #[wasm_bindgen(catch)]
    async fn requestAccounts() -> Result<JsValue, JsValue>;

    /// `wallet_revokePermissions` for `eth_accounts`
    #[wasm_bindgen(catch)]
    async fn revokeAccounts() -> Result<JsValue, JsValue>;
}

// ============================================================================
// PROVIDER SERVICE
// ============================================================================

/// The browser's injected provider. Looks `window.ethereum` up on every
/// call, so an extension that loads after the page is still picked up.
#[derive(Clone, Copy, Debug, Default)]
pub struct InjectedProvider;

#[async_trait(?Send)]
impl WalletProvider for InjectedProvider {
    fn is_available(&self) -> bool {
        hasInjectedProvider()
    }

    async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
        let accounts = requestAccounts().await.map_err(|err| {
            let (code, message) = read_provider_error(&err);
            WalletError::from_provider(code, message)
        })?;

        serde_wasm_bindgen::from_value::<Vec<String>>(accounts)
            .map_err(|e| WalletError::Provider(format!("unexpected accounts payload: {}", e)))
    }

    async fn end_session(&self) -> Result<(), WalletError> {
        match revokeAccounts().await {
            Ok(_) => Ok(()),
            Err(err) => {
                let (code, message) = read_provider_error(&err);
                revoke_rejection_outcome(code, message)
            }
        }
    }
}

/// Outcome of a rejected `wallet_revokePermissions`.
///
/// Older providers cannot revoke; forgetting the account locally is all we
/// can do, so an unsupported method counts as a finished session.
fn revoke_rejection_outcome(code: Option<i64>, message: String) -> Result<(), WalletError> {
    if WalletError::is_unsupported_method(code) {
        log::info!("Provider cannot revoke permissions, ending session locally");
        Ok(())
    } else {
        Err(WalletError::from_provider(code, message))
    }
}

/// Pull `{ code, message }` out of a provider rejection.
fn read_provider_error(err: &JsValue) -> (Option<i64>, String) {
    let code = Reflect::get(err, &JsValue::from_str("code"))
        .ok()
        .and_then(|value| value.as_f64())
        .map(|value| value as i64);

    let message = Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|value| value.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err));

    (code, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_revoke_ends_session_locally() {
        assert_eq!(revoke_rejection_outcome(Some(4200), "Unsupported method".to_string()), Ok(()));
        assert_eq!(revoke_rejection_outcome(Some(-32601), "Method not found".to_string()), Ok(()));
    }

    #[test]
    fn test_user_rejected_revoke_is_an_error() {
        assert_eq!(
            revoke_rejection_outcome(Some(4001), "User rejected".to_string()),
            Err(WalletError::UserRejected)
        );
    }

    #[test]
    fn test_other_revoke_failures_keep_the_message() {
        assert_eq!(
            revoke_rejection_outcome(Some(-32603), "Internal error".to_string()),
            Err(WalletError::Provider("Internal error".to_string()))
        );
        assert_eq!(
            revoke_rejection_outcome(None, String::new()),
            Err(WalletError::Provider("unknown error".to_string()))
        );
    }
}
