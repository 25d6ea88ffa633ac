//! menudrawer TUI — bottom-sheet drill-down menu for the terminal.
//!
//! Provides:
//! - A trigger page with an "Open Menu" button
//! - A bottom sheet listing the current menu level, with a back control
//!   and breadcrumb title at sub-levels
//! - Keyboard and mouse activation, focus management and an
//!   announcement line describing the focused control

pub mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod outline;
pub mod sample_menu;
pub mod theme;
pub mod ui;

pub use app::{AppState, Focus};
pub use config::Config;
pub use theme::Theme;
