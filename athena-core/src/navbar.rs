//! Navbar state: hamburger menu and responsive connect-button visibility.

use crate::route::Route;

/// Viewport width (px) at or below which the nav button is hidden.
pub const DEFAULT_BREAKPOINT: u32 = 968;

/// Links in the nav menu, in display order.
pub const NAV_LINKS: [Route; 5] = [
    Route::Home,
    Route::Auctions,
    Route::Community,
    Route::Create,
    Route::Contact,
];

/// Mobile menu open/closed flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn class(self) -> &'static str {
        if self.open {
            "nav-menu active"
        } else {
            "nav-menu"
        }
    }
}

/// Connect-button visibility derived from the viewport width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonVisibility {
    breakpoint: u32,
    visible: bool,
}

impl ButtonVisibility {
    /// Starts visible until the first width is reported.
    pub fn new(breakpoint: u32) -> Self {
        Self {
            breakpoint,
            visible: true,
        }
    }

    pub fn visible_at(breakpoint: u32, width: f64) -> bool {
        width > f64::from(breakpoint)
    }

    pub fn is_visible(self) -> bool {
        self.visible
    }

    /// Recompute for a new width. Returns true if the flag flipped.
    pub fn update(&mut self, width: f64) -> bool {
        let visible = Self::visible_at(self.breakpoint, width);
        let changed = visible != self.visible;
        self.visible = visible;
        changed
    }
}

impl Default for ButtonVisibility {
    fn default() -> Self {
        Self::new(DEFAULT_BREAKPOINT)
    }
}

/// Combined navbar UI state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavbarState {
    pub menu: MenuState,
    pub button: ButtonVisibility,
}

impl NavbarState {
    pub fn new(breakpoint: u32) -> Self {
        Self {
            menu: MenuState::default(),
            button: ButtonVisibility::new(breakpoint),
        }
    }

    /// Link (or logo) activation: close the menu and hand back where to go.
    pub fn activate(&mut self, route: Route) -> &'static str {
        self.menu.close();
        route.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_starts_closed() {
        let menu = MenuState::default();
        assert!(!menu.is_open());
        assert_eq!(menu.class(), "nav-menu");
    }

    #[test]
    fn test_toggle_twice_restores_menu() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.class(), "nav-menu active");
        menu.toggle();
        assert_eq!(menu, MenuState::default());
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut menu = MenuState::default();
        menu.close();
        assert!(!menu.is_open());
        menu.toggle();
        menu.close();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_button_flips_exactly_at_breakpoint() {
        assert!(ButtonVisibility::visible_at(968, 969.0));
        assert!(ButtonVisibility::visible_at(968, 968.5));
        assert!(!ButtonVisibility::visible_at(968, 968.0));
        assert!(!ButtonVisibility::visible_at(968, 500.0));
    }

    #[test]
    fn test_repeated_resize_at_same_width_is_idempotent() {
        let mut button = ButtonVisibility::default();
        assert!(button.update(500.0));
        assert!(!button.update(500.0));
        assert!(!button.update(500.0));
        assert!(!button.is_visible());

        assert!(button.update(1200.0));
        assert!(!button.update(1200.0));
        assert!(button.is_visible());
    }

    #[test]
    fn test_custom_breakpoint() {
        let mut button = ButtonVisibility::new(640);
        assert!(!button.update(800.0));
        assert!(button.is_visible());
        assert!(button.update(640.0));
        assert!(!button.is_visible());
    }

    #[test]
    fn test_activate_closes_menu_and_returns_path() {
        let mut navbar = NavbarState::default();
        navbar.menu.toggle();
        assert_eq!(navbar.activate(Route::Community), "/Community");
        assert!(!navbar.menu.is_open());
    }

    #[test]
    fn test_mobile_navigation_scenario() {
        let mut navbar = NavbarState::new(DEFAULT_BREAKPOINT);

        navbar.button.update(1200.0);
        assert!(navbar.button.is_visible());

        navbar.button.update(500.0);
        assert!(!navbar.button.is_visible());

        navbar.menu.toggle();
        assert!(navbar.menu.is_open());

        let path = navbar.activate(Route::Auctions);
        assert!(!navbar.menu.is_open());
        assert_eq!(Route::resolve(path), Some(Route::Auctions));
    }

    #[test]
    fn test_nav_links_resolve_to_themselves() {
        for route in NAV_LINKS {
            assert_eq!(Route::resolve(route.path()), Some(route));
        }
    }
}
