//! menudrawer core — menu tree model and drill-down navigation.
//!
//! This crate contains everything the drawer needs that is independent of
//! rendering:
//! - Menu tree types (`MenuNode`, `MenuTree`) with depth-first id lookup
//! - The navigation path (breadcrumb of drilled-into ids)
//! - The navigation controller and the effects it asks the UI to apply
//! - Loading menu files (TOML / JSON) with id validation

pub mod controller;
pub mod error;
pub mod loader;
pub mod menu;
pub mod path;

pub use controller::{Effect, FocusTarget, NavigationController};
pub use error::MenuError;
pub use menu::{MenuNode, MenuTree};
pub use path::NavigationPath;
