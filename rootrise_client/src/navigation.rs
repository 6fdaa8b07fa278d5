use tracing::debug;

use crate::routes::Route;

/// Navigation chrome state: current location and the mobile menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    location: String,
    route: Route,
    menu_open: bool,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Navigator {
    pub fn new(location: impl Into<String>) -> Self {
        let location = location.into();
        Self {
            route: Route::resolve(&location),
            location,
            menu_open: false,
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Moves to `location`. The mobile menu is always closed afterwards.
    pub fn navigate(&mut self, location: impl Into<String>) -> Route {
        self.location = location.into();
        self.route = Route::resolve(&self.location);
        self.menu_open = false;
        debug!(location = %self.location, route = ?self.route, "navigated");
        self.route
    }

    /// Whether the navigation entry for `route` is highlighted.
    pub fn is_active(&self, route: Route) -> bool {
        route.path() == Some(self.location.as_str())
    }
}
