//! # Athena Core
//!
//! Browser-independent logic for the Athena marketplace site.
//!
//! ## Modules
//!
//! - [`connection`]: wallet connection state and the connect/disconnect controller
//! - [`provider`]: the injected-wallet capability trait
//! - [`route`]: route table, path matching and page composition
//! - [`navbar`]: menu toggle and responsive button visibility
//! - [`content`]: static marketing copy and listing cards
//! - [`config`]: site configuration
//! - [`error`]: wallet error taxonomy
//! - [`utils`]: address formatting
//!
//! The `athena-web` crate binds these to Leptos signals and the DOM.

pub mod config;
pub mod connection;
pub mod content;
pub mod error;
pub mod navbar;
pub mod provider;
pub mod route;
pub mod utils;

pub use config::{ConfigError, SiteConfig};
pub use connection::{ConnectionController, ConnectionState, ConnectionStore, PendingRequest};
pub use error::WalletError;
pub use navbar::{ButtonVisibility, MenuState, NavbarState};
pub use provider::WalletProvider;
pub use route::{Route, Section};
