use tracing::debug;

use crate::theme::{self, PreferenceStore, Theme};

// transient page state
//
// owned by the root component and reset on every reload; only the theme has a persisted
// counterpart, and toggle_theme is the only place it changes after startup
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub mobile_menu_open: bool,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        UiState {
            theme,
            mobile_menu_open: false,
        }
    }

    pub fn is_dark_mode(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn toggle_theme<S>(&mut self, store: &S) -> Theme
    where
        S: PreferenceStore + ?Sized,
    {
        self.theme = theme::toggle(self.theme, store);
        self.theme
    }

    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.mobile_menu_open = !self.mobile_menu_open;
        debug!(open = self.mobile_menu_open, "mobile menu toggled");
        self.mobile_menu_open
    }

    // following a nav link from the mobile panel also dismisses it
    pub fn select_nav_item(&mut self, href: &str) {
        debug!(href, "nav item selected");
        self.close_mobile_menu();
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }
}
