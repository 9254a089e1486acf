//! UI Components

pub mod connect_button;
pub mod footer;
pub mod forms;
pub mod hero;
pub mod listings;
pub mod navbar;
pub mod showcase;

pub use connect_button::ConnectButton;
pub use footer::Footer;
pub use forms::{ContactForm, Upload};
pub use hero::Hero;
pub use listings::{Collections, LiveAuctions};
pub use navbar::Navbar;
pub use showcase::{Artists, Testimonials, Works};
