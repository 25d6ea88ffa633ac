//! Navigation controller — owns the drill-down path over a static tree.
//!
//! The controller is the only place the path is mutated. Every operation
//! returns an [`Effect`] telling the presentation layer what to do next
//! (move focus, close the drawer). Unknown ids and leaf activations are
//! silent no-ops.

use tracing::{debug, warn};

use crate::menu::{MenuNode, MenuTree};
use crate::path::NavigationPath;

/// Where the presentation layer should put focus after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// The "Back" control shown at every sub-level.
    BackControl,
    /// First row of the visible list.
    FirstItem,
}

/// Instruction for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Focus(FocusTarget),
    /// Escape at the root: the drawer should close.
    Close,
}

#[derive(Debug, Clone)]
pub struct NavigationController {
    tree: MenuTree,
    path: NavigationPath,
}

impl NavigationController {
    pub fn new(tree: MenuTree) -> Self {
        Self {
            tree,
            path: NavigationPath::new(),
        }
    }

    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    pub fn path(&self) -> &NavigationPath {
        &self.path
    }

    /// Number of levels below the root.
    pub fn level(&self) -> usize {
        self.path.len()
    }

    pub fn is_submenu(&self) -> bool {
        !self.path.is_root()
    }

    /// Items shown for an arbitrary path. An unresolvable last id or a leaf
    /// yields an empty slice.
    pub fn resolve(&self, path: &NavigationPath) -> &[MenuNode] {
        let Some(last) = path.last() else {
            return self.tree.root();
        };
        match self.tree.find(last) {
            Some(node) => &node.children,
            None => {
                warn!(id = last, path = %path, "menu id not found, showing empty level");
                &[]
            }
        }
    }

    /// Items shown for the current path.
    pub fn visible_items(&self) -> &[MenuNode] {
        self.resolve(&self.path)
    }

    /// Node at the end of the current path, if any.
    pub fn current_node(&self) -> Option<&MenuNode> {
        self.path.last().and_then(|id| self.tree.find(id))
    }

    /// Names along the current path, root first. Unknown ids are skipped.
    pub fn breadcrumb(&self) -> Vec<&str> {
        self.path
            .ids()
            .iter()
            .filter_map(|id| self.tree.find(*id))
            .map(|node| node.name.as_str())
            .collect()
    }

    pub fn view_key(&self) -> String {
        self.path.view_key()
    }

    /// Drill into `id` when it names an expandable node anywhere in the tree.
    pub fn activate(&mut self, id: u32) -> Effect {
        match self.tree.find(id) {
            Some(node) if node.is_expandable() => {
                self.path.push(id);
                debug!(id, name = %node.name, path = %self.path, "entered submenu");
                Effect::Focus(FocusTarget::BackControl)
            }
            Some(_) => {
                debug!(id, "activated leaf, ignoring");
                Effect::None
            }
            None => {
                debug!(id, "activated unknown id, ignoring");
                Effect::None
            }
        }
    }

    /// Leave the current level. No-op at the root.
    pub fn back(&mut self) -> Effect {
        if self.path.pop().is_none() {
            return Effect::None;
        }
        debug!(path = %self.path, "went back");
        if self.path.is_root() {
            Effect::Focus(FocusTarget::FirstItem)
        } else {
            Effect::Focus(FocusTarget::BackControl)
        }
    }

    /// Escape goes back one level, or asks to close the drawer at the root.
    pub fn on_escape(&mut self) -> Effect {
        if self.is_submenu() {
            return self.back();
        }
        self.path.clear();
        debug!("escape at root, closing");
        Effect::Close
    }

    /// Drawer closed: the next open starts at the root.
    pub fn on_close(&mut self) {
        self.path.clear();
    }
}
