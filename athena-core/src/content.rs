//! Static page content.
//!
//! Compile-time copy for every presentational section. Nothing here is
//! mutated at runtime.

use crate::route::Route;

/// Glyph shown on a listing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardIcon {
    Brush,
    Camera,
    Robot,
    Palette,
}

/// Button color variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Primary,
    Purple,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Primary => "btn--primary",
            Accent::Purple => "btn--purple",
        }
    }
}

/// Hero banner copy.
#[derive(Debug, PartialEq, Eq)]
pub struct HeroContent {
    pub id: &'static str,
    pub top_line: &'static str,
    pub headline: &'static str,
    pub description: &'static str,
    pub button_label: &'static str,
    pub button_route: Route,
    pub image: &'static str,
    pub alt: &'static str,
    pub light_bg: bool,
    pub image_start: bool,
}

/// Card in the live-auction or collection grids.
#[derive(Debug, PartialEq, Eq)]
pub struct ListingCard {
    pub title: &'static str,
    pub icon: CardIcon,
    pub accent: Accent,
    /// Shown on live auctions only.
    pub artist: Option<&'static str>,
    pub price: Option<&'static str>,
    pub route: Route,
}

#[derive(Debug, PartialEq, Eq)]
pub struct WorkStep {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ArtistProfile {
    pub name: &'static str,
    pub handle: &'static str,
    pub works: u32,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct FooterGroup {
    pub heading: &'static str,
    pub links: &'static [&'static str],
}

pub static HOME_HERO: HeroContent = HeroContent {
    id: "home-hero",
    top_line: "Athena NFT marketplace",
    headline: "Discover, collect and sell extraordinary NFTs",
    description: "Browse digital art from independent creators, follow live auctions and \
                  connect your wallet to start bidding.",
    button_label: "Get Started",
    button_route: Route::Connect,
    image: "images/hero-home.svg",
    alt: "Collage of featured artworks",
    light_bg: false,
    image_start: false,
};

pub static COMMUNITY_HERO: HeroContent = HeroContent {
    id: "community-hero",
    top_line: "Community",
    headline: "Meet the people behind the art",
    description: "Artists, collectors and curators share drops, trade tips and feedback \
                  every day.",
    button_label: "Join the Community",
    button_route: Route::Connect,
    image: "images/hero-community.svg",
    alt: "Community members around a gallery wall",
    light_bg: false,
    image_start: false,
};

pub static COMMUNITY_SPOTLIGHT_HERO: HeroContent = HeroContent {
    id: "community-spotlight",
    top_line: "Spotlight",
    headline: "Creators earn royalties on every resale",
    description: "Each token carries its creator's royalty so the artist keeps earning \
                  as the work changes hands.",
    button_label: "Start Creating",
    button_route: Route::Create,
    image: "images/hero-spotlight.svg",
    alt: "Artist at work on a tablet",
    light_bg: true,
    image_start: true,
};

pub static AUCTIONS_HERO: HeroContent = HeroContent {
    id: "auctions-hero",
    top_line: "Auctions",
    headline: "Bid on one-of-a-kind pieces",
    description: "Live auctions close on a timer. Connect your wallet to place a bid.",
    button_label: "View Live Auctions",
    button_route: Route::LiveAuctions,
    image: "images/hero-auctions.svg",
    alt: "Auction gavel over a digital canvas",
    light_bg: false,
    image_start: false,
};

pub static CREATE_HERO: HeroContent = HeroContent {
    id: "create-hero",
    top_line: "Create",
    headline: "Mint your work in a few steps",
    description: "Upload your file, add a title and description, and set your price. \
                  Connect a wallet to sign the listing.",
    button_label: "Connect Wallet",
    button_route: Route::Connect,
    image: "images/hero-create.svg",
    alt: "Upload illustration",
    light_bg: true,
    image_start: false,
};

pub static CONTACT_HERO: HeroContent = HeroContent {
    id: "contact-hero",
    top_line: "Contact",
    headline: "Questions? We are here to help",
    description: "Reach the Athena team about listings, partnerships or support.",
    button_label: "Browse Auctions",
    button_route: Route::Auctions,
    image: "images/hero-contact.svg",
    alt: "Support desk illustration",
    light_bg: false,
    image_start: true,
};

pub static WORK_STEPS: &[WorkStep] = &[
    WorkStep {
        title: "Set up your wallet",
        description: "Install a browser wallet and connect it with the button in the top right.",
    },
    WorkStep {
        title: "Create your collection",
        description: "Add social links, a description and banner images to your collection.",
    },
    WorkStep {
        title: "Add your NFTs",
        description: "Upload your work, add a title and description, and customize properties.",
    },
    WorkStep {
        title: "List them for sale",
        description: "Choose between auctions and fixed-price listings.",
    },
];

const LIVE_ARTIST: &str = "by Sairam Nomula";
const LIVE_PRICE: &str = "1.7BNB";

pub static LIVE_AUCTIONS: &[ListingCard] = &[
    ListingCard {
        title: "Illusions",
        icon: CardIcon::Brush,
        accent: Accent::Primary,
        artist: Some(LIVE_ARTIST),
        price: Some(LIVE_PRICE),
        route: Route::Connect,
    },
    ListingCard {
        title: "Photography",
        icon: CardIcon::Camera,
        accent: Accent::Purple,
        artist: Some(LIVE_ARTIST),
        price: Some(LIVE_PRICE),
        route: Route::Connect,
    },
    ListingCard {
        title: "Robotic Arts",
        icon: CardIcon::Robot,
        accent: Accent::Primary,
        artist: Some(LIVE_ARTIST),
        price: Some(LIVE_PRICE),
        route: Route::Connect,
    },
    ListingCard {
        title: "Arts",
        icon: CardIcon::Palette,
        accent: Accent::Purple,
        artist: Some(LIVE_ARTIST),
        price: Some(LIVE_PRICE),
        route: Route::Connect,
    },
];

pub static POPULAR_COLLECTIONS: &[ListingCard] = &[
    ListingCard {
        title: "Illusions",
        icon: CardIcon::Brush,
        accent: Accent::Primary,
        artist: None,
        price: None,
        route: Route::Connect,
    },
    ListingCard {
        title: "Photography",
        icon: CardIcon::Camera,
        accent: Accent::Purple,
        artist: None,
        price: None,
        route: Route::Connect,
    },
    ListingCard {
        title: "Robotic Arts",
        icon: CardIcon::Robot,
        accent: Accent::Primary,
        artist: None,
        price: None,
        route: Route::Connect,
    },
    ListingCard {
        title: "Arts",
        icon: CardIcon::Palette,
        accent: Accent::Purple,
        artist: None,
        price: None,
        route: Route::Connect,
    },
];

pub static ARTISTS: &[ArtistProfile] = &[
    ArtistProfile {
        name: "Sairam Nomula",
        handle: "@sairam",
        works: 42,
    },
    ArtistProfile {
        name: "Nova Reyes",
        handle: "@novareyes",
        works: 27,
    },
    ArtistProfile {
        name: "Kenji Ito",
        handle: "@kenji",
        works: 18,
    },
    ArtistProfile {
        name: "Lena Fischer",
        handle: "@lenaf",
        works: 35,
    },
];

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Listing my first collection took minutes and the auction sold out in a day.",
        author: "Nova Reyes",
        role: "Digital painter",
    },
    Testimonial {
        quote: "The live auction grid is the first thing I check every morning.",
        author: "Marcus Hale",
        role: "Collector",
    },
    Testimonial {
        quote: "Royalties on resales finally make digital art a sustainable practice.",
        author: "Kenji Ito",
        role: "3D artist",
    },
];

pub static FOOTER_GROUPS: &[FooterGroup] = &[
    FooterGroup {
        heading: "About Us",
        links: &["How it works", "Investors", "Terms of Service"],
    },
    FooterGroup {
        heading: "Contact Us",
        links: &["Contact", "Support", "Sponsorships"],
    },
    FooterGroup {
        heading: "Social Media",
        links: &["Instagram", "Twitter"],
    },
];
