//! Application state — single-owner, main-thread only.
//!
//! Wraps the navigation controller with the drawer's open/closed state and
//! the focus ring, and applies the controller's effects.

use ratatui::layout::Rect;
use tracing::{debug, info};

use menudrawer_core::{Effect, FocusTarget, MenuNode, MenuTree, NavigationController};

use crate::config::DrawerConfig;
use crate::theme::Theme;
use crate::ui::menu_list;

/// Which control has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// "Open Menu" button, the only control while the drawer is closed.
    Trigger,
    /// "Back" control, present at every sub-level.
    BackControl,
    /// Row in the visible item list.
    Item(usize),
}

pub struct AppState {
    pub nav: NavigationController,
    pub drawer_open: bool,
    pub focus: Focus,
    pub running: bool,
    pub drawer: DrawerConfig,
    pub theme: Theme,
    /// Last drawn terminal area, used to hit-test mouse clicks.
    pub viewport: Rect,
}

impl AppState {
    pub fn new(tree: MenuTree, drawer: DrawerConfig, theme: Theme) -> Self {
        Self {
            nav: NavigationController::new(tree),
            drawer_open: false,
            focus: Focus::Trigger,
            running: true,
            drawer,
            theme,
            viewport: Rect::default(),
        }
    }

    pub fn visible_items(&self) -> &[MenuNode] {
        self.nav.visible_items()
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn open_drawer(&mut self) {
        if self.drawer_open {
            return;
        }
        self.drawer_open = true;
        self.focus = self.first_item_or_back();
        info!("drawer opened");
    }

    pub fn close_drawer(&mut self) {
        if !self.drawer_open {
            return;
        }
        self.nav.on_close();
        self.drawer_open = false;
        self.focus = Focus::Trigger;
        info!("drawer closed");
    }

    /// Activate the row at `index`. Leaf rows are inert.
    pub fn activate_item(&mut self, index: usize) {
        let Some(item) = self.visible_items().get(index) else {
            return;
        };
        if item.is_leaf() {
            return;
        }
        let id = item.id;
        let effect = self.nav.activate(id);
        self.apply(effect);
    }

    /// Enter/Space on whatever currently has focus.
    pub fn activate_focused(&mut self) {
        match self.focus {
            Focus::Trigger => self.open_drawer(),
            Focus::BackControl => self.go_back(),
            Focus::Item(index) => self.activate_item(index),
        }
    }

    pub fn go_back(&mut self) {
        let effect = self.nav.back();
        self.apply(effect);
    }

    pub fn escape(&mut self) {
        if !self.drawer_open {
            return;
        }
        let effect = self.nav.on_escape();
        self.apply(effect);
    }

    /// Carry out a controller effect.
    pub fn apply(&mut self, effect: Effect) {
        debug!(?effect, view = %self.nav.view_key(), "applying effect");
        match effect {
            Effect::None => {}
            Effect::Focus(FocusTarget::BackControl) => {
                self.focus = if self.nav.is_submenu() {
                    Focus::BackControl
                } else {
                    self.first_item_or_back()
                };
            }
            Effect::Focus(FocusTarget::FirstItem) => self.focus = self.first_item_or_back(),
            Effect::Close => self.close_drawer(),
        }
    }

    /// Focusable controls in tab order.
    pub fn focus_ring(&self) -> Vec<Focus> {
        if !self.drawer_open {
            return vec![Focus::Trigger];
        }
        let mut ring = Vec::with_capacity(self.visible_items().len() + 1);
        if self.nav.is_submenu() {
            ring.push(Focus::BackControl);
        }
        ring.extend((0..self.visible_items().len()).map(Focus::Item));
        ring
    }

    pub fn focus_next(&mut self) {
        self.step_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.step_focus(-1);
    }

    pub fn focus_first(&mut self) {
        if let Some(first) = self.focus_ring().first() {
            self.focus = *first;
        }
    }

    pub fn focus_last(&mut self) {
        if let Some(last) = self.focus_ring().last() {
            self.focus = *last;
        }
    }

    fn step_focus(&mut self, delta: isize) {
        let ring = self.focus_ring();
        if ring.is_empty() {
            return;
        }
        let len = ring.len() as isize;
        let current = ring.iter().position(|f| *f == self.focus).unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.focus = ring[next];
    }

    fn first_item_or_back(&self) -> Focus {
        if !self.visible_items().is_empty() {
            Focus::Item(0)
        } else if self.nav.is_submenu() {
            Focus::BackControl
        } else {
            Focus::Trigger
        }
    }

    /// Title of the sheet: breadcrumb of the current path.
    pub fn title(&self) -> String {
        let crumbs = self.nav.breadcrumb();
        if crumbs.is_empty() {
            "Menu".to_string()
        } else {
            format!("Menu › {}", crumbs.join(" › "))
        }
    }

    /// Accessible description of the focused control, shown in the
    /// announcement line.
    pub fn announcement(&self) -> String {
        match self.focus {
            Focus::Trigger => "Open Menu, button. Press Enter to open.".to_string(),
            Focus::BackControl => {
                let target = match self.nav.level() {
                    0 | 1 => "Menu".to_string(),
                    _ => {
                        let crumbs = self.nav.breadcrumb();
                        crumbs
                            .get(crumbs.len().saturating_sub(2))
                            .map(|s| s.to_string())
                            .unwrap_or_else(|| "Menu".to_string())
                    }
                };
                format!("Back, button. Returns to {target}.")
            }
            Focus::Item(index) => match self.visible_items().get(index) {
                Some(item) => menu_list::accessible_label(item),
                None => String::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_menu;

    fn app() -> AppState {
        AppState::new(sample_menu::tree(), DrawerConfig::default(), Theme::default())
    }

    #[test]
    fn test_open_focuses_first_item() {
        let mut app = app();
        assert_eq!(app.focus, Focus::Trigger);
        app.activate_focused();
        assert!(app.drawer_open);
        assert_eq!(app.focus, Focus::Item(0));
    }

    #[test]
    fn test_drill_in_moves_focus_to_back() {
        let mut app = app();
        app.open_drawer();
        app.activate_item(1); // Account
        assert_eq!(app.nav.path().ids(), &[2]);
        assert_eq!(app.focus, Focus::BackControl);
        assert_eq!(app.title(), "Menu › Account");
    }

    #[test]
    fn test_leaf_row_is_inert() {
        let mut app = app();
        app.open_drawer();
        app.activate_item(0); // Home
        assert!(app.nav.path().is_empty());
        assert_eq!(app.focus, Focus::Item(0));
    }

    #[test]
    fn test_back_to_root_focuses_first_item() {
        let mut app = app();
        app.open_drawer();
        app.activate_item(1);
        app.activate_focused(); // Back control
        assert!(app.nav.path().is_empty());
        assert_eq!(app.focus, Focus::Item(0));
    }

    #[test]
    fn test_escape_sequence_closes_and_resets() {
        let mut app = app();
        app.open_drawer();
        app.activate_item(1); // Account
        app.focus = Focus::Item(1);
        app.activate_focused(); // Security
        assert_eq!(app.nav.level(), 2);

        app.escape();
        assert_eq!(app.nav.level(), 1);
        assert_eq!(app.focus, Focus::BackControl);
        app.escape();
        assert_eq!(app.nav.level(), 0);
        assert!(app.drawer_open);
        app.escape();
        assert!(!app.drawer_open);
        assert_eq!(app.focus, Focus::Trigger);
    }

    #[test]
    fn test_reopen_starts_at_root() {
        let mut app = app();
        app.open_drawer();
        app.activate_item(3); // Settings
        app.close_drawer();
        app.open_drawer();
        assert!(!app.nav.is_submenu());
        assert_eq!(app.visible_items().len(), 5);
    }

    #[test]
    fn test_focus_ring_wraps() {
        let mut app = app();
        app.open_drawer();
        app.activate_item(2); // Orders: back + 3 items
        assert_eq!(app.focus_ring().len(), 4);
        app.focus_prev();
        assert_eq!(app.focus, Focus::Item(2));
        app.focus_next();
        assert_eq!(app.focus, Focus::BackControl);
        app.focus_last();
        assert_eq!(app.focus, Focus::Item(2));
        app.focus_first();
        assert_eq!(app.focus, Focus::BackControl);
    }

    #[test]
    fn test_announcements() {
        let mut app = app();
        assert!(app.announcement().starts_with("Open Menu"));
        app.open_drawer();
        app.focus = Focus::Item(1);
        assert_eq!(
            app.announcement(),
            "Account. Profile, security and billing. Has submenu, press Enter to open."
        );
        app.activate_focused();
        assert_eq!(app.announcement(), "Back, button. Returns to Menu.");
        app.focus = Focus::Item(1);
        app.activate_focused(); // Security
        assert_eq!(app.announcement(), "Back, button. Returns to Account.");
    }
}
