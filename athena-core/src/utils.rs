//! # Display Utilities
//!
//! Helpers for showing wallet accounts in compact UI slots.
//!
//! ```rust
//! use athena_core::utils::truncate_address;
//!
//! let account = "0x5aeda56215b167893e80b4fe645ba6d5bab767de";
//! assert_eq!(truncate_address(account), "0x5aed...67de");
//! ```

/// Show the first `prefix_len` and last `suffix_len` characters of an
/// address joined by an ellipsis.
///
/// Addresses too short to shorten, or containing non-ASCII characters, are
/// returned as-is.
///
/// # Examples
///
/// ```rust
/// use athena_core::utils::format_address;
///
/// let account = "0x5aeda56215b167893e80b4fe645ba6d5bab767de";
/// assert_eq!(format_address(account, 4, 4), "0x5a...67de");
/// assert_eq!(format_address("0x1234", 4, 4), "0x1234");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if address_len <= prefix_len + suffix_len || !address.is_ascii() {
        return address.to_string();
    }

    // ASCII-only, so byte offsets are char boundaries
    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Account shortened for the navbar: `0x` plus four hex digits, then the
/// last four.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCOUNT: &str = "0x5aeda56215b167893e80b4fe645ba6d5bab767de";

    #[test]
    fn test_format_address() {
        assert_eq!(format_address(ACCOUNT, 6, 6), "0x5aed...b767de");
        assert_eq!(format_address(ACCOUNT, 0, 4), "...67de");
    }

    #[test]
    fn test_truncate_address() {
        assert_eq!(truncate_address(ACCOUNT), "0x5aed...67de");
    }

    #[test]
    fn test_short_addresses_are_unchanged() {
        assert_eq!(truncate_address("0xabc"), "0xabc");
        assert_eq!(truncate_address("0x12345678"), "0x12345678");
        assert_eq!(truncate_address(""), "");
    }

    #[test]
    fn test_non_ascii_is_unchanged() {
        let addr = "ünïcødé-wallet-identifier";
        assert_eq!(truncate_address(addr), addr);
    }
}
