//! Navigation bar state

/// Mobile menu and scroll styling of the top navigation bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavBar {
    /// Mobile menu expanded (`.nav-links.active`)
    pub menu_open: bool,
    /// Page scrolled past the threshold (`#navbar.scrolled`)
    pub scrolled: bool,
    threshold: f64,
}

impl NavBar {
    pub fn new(threshold: f64) -> Self {
        Self {
            menu_open: false,
            scrolled: false,
            threshold,
        }
    }

    /// Toggle button clicked; returns the new state
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// A menu link was followed
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Record the page scroll offset. Returns true when `scrolled` flipped.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let scrolled = offset > self.threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }
}
