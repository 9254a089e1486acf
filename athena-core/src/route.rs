//! # Route Table
//!
//! Static path-to-page mapping and the page compositions.
//!
//! ## Matching
//!
//! - Home (`/`) matches exactly; every other route matches as a prefix on a
//!   segment boundary (`/Create/draft` is Create, `/Creates` is nothing).
//! - Comparison ignores ASCII case, so `/connect` resolves to Connect.
//! - Query string, fragment and trailing slashes are ignored.
//! - The first route in [`Route::ALL`] order that matches wins.

use crate::content::{
    HeroContent, AUCTIONS_HERO, COMMUNITY_HERO, COMMUNITY_SPOTLIGHT_HERO, CONTACT_HERO,
    CREATE_HERO, HOME_HERO,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchRule {
    Exact,
    Prefix,
}

/// Page the site can display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Community,
    Auctions,
    Create,
    Connect,
    Contact,
    LiveAuctions,
}

impl Route {
    /// Table order, which is also match priority.
    pub const ALL: [Route; 7] = [
        Route::Home,
        Route::Community,
        Route::Auctions,
        Route::Create,
        Route::Connect,
        Route::Contact,
        Route::LiveAuctions,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Community => "/Community",
            Route::Auctions => "/Auctions",
            Route::Create => "/Create",
            Route::Connect => "/Connect",
            Route::Contact => "/Contact",
            Route::LiveAuctions => "/LiveAuctions",
        }
    }

    pub fn rule(self) -> MatchRule {
        match self {
            Route::Home => MatchRule::Exact,
            _ => MatchRule::Prefix,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Community => "Community",
            Route::Auctions => "Auctions",
            Route::Create => "Create",
            Route::Connect => "Connect Wallet",
            Route::Contact => "Contact",
            Route::LiveAuctions => "Live Auctions",
        }
    }

    /// Resolve a location (path, optionally with query/fragment) to a route.
    pub fn resolve(location: &str) -> Option<Route> {
        let path = normalize(location);
        let resolved = Route::ALL.into_iter().find(|route| route.matches(path));
        if resolved.is_none() {
            log::debug!("No route for path {}", location);
        }
        resolved
    }

    fn matches(self, path: &str) -> bool {
        let pattern = self.path().as_bytes();
        let path = path.as_bytes();
        match self.rule() {
            MatchRule::Exact => path.eq_ignore_ascii_case(pattern),
            MatchRule::Prefix => {
                path.len() >= pattern.len()
                    && path[..pattern.len()].eq_ignore_ascii_case(pattern)
                    && (path.len() == pattern.len() || path[pattern.len()] == b'/')
            }
        }
    }

    /// Sections the page renders, top to bottom.
    pub fn sections(self) -> &'static [Section] {
        match self {
            Route::Home => HOME_SECTIONS,
            Route::Community => COMMUNITY_SECTIONS,
            Route::Auctions => AUCTIONS_SECTIONS,
            Route::Create => CREATE_SECTIONS,
            Route::Connect => CONNECT_SECTIONS,
            Route::Contact => CONTACT_SECTIONS,
            Route::LiveAuctions => LIVE_AUCTIONS_SECTIONS,
        }
    }
}

fn normalize(location: &str) -> &str {
    let path = location
        .split(['?', '#'])
        .next()
        .unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Presentational block of a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Hero(&'static HeroContent),
    Works,
    LiveAuctions,
    Collections,
    Artists,
    Testimonials,
    ContactForm,
    Upload,
    WalletCard,
}

static HOME_SECTIONS: &[Section] = &[
    Section::Hero(&HOME_HERO),
    Section::Works,
    Section::LiveAuctions,
    Section::Artists,
    Section::Collections,
    Section::Testimonials,
];

static COMMUNITY_SECTIONS: &[Section] = &[
    Section::Hero(&COMMUNITY_HERO),
    Section::Works,
    Section::Hero(&COMMUNITY_SPOTLIGHT_HERO),
    Section::Collections,
];

static AUCTIONS_SECTIONS: &[Section] = &[
    Section::Hero(&AUCTIONS_HERO),
    Section::LiveAuctions,
    Section::Collections,
];

static CREATE_SECTIONS: &[Section] = &[Section::Hero(&CREATE_HERO), Section::Upload];

static CONNECT_SECTIONS: &[Section] = &[Section::WalletCard];

static CONTACT_SECTIONS: &[Section] = &[
    Section::Hero(&CONTACT_HERO),
    Section::Works,
    Section::ContactForm,
];

static LIVE_AUCTIONS_SECTIONS: &[Section] = &[Section::LiveAuctions];
