//! # Site Configuration
//!
//! Branding and UI tuning read at startup from a JSON blob embedded in the
//! host page. Every field has a default, so an absent or empty blob yields
//! the stock site.
//!
//! ```rust
//! use athena_core::config::SiteConfig;
//!
//! let config = SiteConfig::from_json(r#"{ "menu_breakpoint": 720 }"#).unwrap();
//! assert_eq!(config.menu_breakpoint, 720);
//! assert_eq!(config.brand, "Athena");
//! ```

use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::navbar::DEFAULT_BREAKPOINT;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid site config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid site config: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Footer and document-title brand.
    pub brand: String,
    /// Logo text in the navbar.
    pub nav_brand: String,
    pub copyright: String,
    /// Width (px) at or below which the nav button is hidden.
    pub menu_breakpoint: u32,
    /// `log` level name: error, warn, info, debug or trace.
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "Athena".to_string(),
            nav_brand: "RaNoLa".to_string(),
            copyright: "Athena © 2021".to_string(),
            menu_breakpoint: DEFAULT_BREAKPOINT,
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate. Whitespace-only input gives the defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(320..=3840).contains(&self.menu_breakpoint) {
            return Err(ConfigError::Invalid(format!(
                "menu_breakpoint must be between 320 and 3840, got {}",
                self.menu_breakpoint
            )));
        }
        self.level()?;
        Ok(())
    }

    pub fn level(&self) -> Result<log::Level, ConfigError> {
        log::Level::from_str(&self.log_level)
            .map_err(|_| ConfigError::Invalid(format!("unknown log_level '{}'", self.log_level)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.nav_brand, "RaNoLa");
        assert_eq!(config.menu_breakpoint, 968);
        assert_eq!(config.level().unwrap(), log::Level::Info);
    }

    #[test]
    fn test_empty_input_gives_defaults() {
        assert_eq!(SiteConfig::from_json("  \n").unwrap(), SiteConfig::default());
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = SiteConfig::from_json(r#"{"brand": "Athena Beta", "log_level": "debug"}"#).unwrap();
        assert_eq!(config.brand, "Athena Beta");
        assert_eq!(config.level().unwrap(), log::Level::Debug);
        assert_eq!(config.menu_breakpoint, DEFAULT_BREAKPOINT);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = SiteConfig::from_json("{ brand: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = SiteConfig::from_json(r#"{"theme": "dark"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_out_of_range_breakpoint_is_invalid() {
        let err = SiteConfig::from_json(r#"{"menu_breakpoint": 10}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_unknown_log_level_is_invalid() {
        let err = SiteConfig::from_json(r#"{"log_level": "loud"}"#).unwrap_err();
        assert_eq!(err.to_string(), "Invalid site config: unknown log_level 'loud'");
    }
}
