//! Menu tree model.
//!
//! A `MenuTree` is the ordered list of root entries. Every node carries an id
//! that is unique across the whole tree; lookups walk the tree depth-first in
//! declaration order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::MenuError;

/// A single menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuNode {
    pub id: u32,
    pub name: String,
    /// Display glyph. Opaque to navigation.
    #[serde(default)]
    pub icon: String,
    #[serde(default, alias = "subTitle", skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    pub fn leaf(id: u32, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            icon: icon.into(),
            subtitle: None,
            children: Vec::new(),
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_children(mut self, children: Vec<MenuNode>) -> Self {
        self.children = children;
        self
    }

    /// A node with at least one child can be drilled into.
    pub fn is_expandable(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Immutable, non-empty menu tree, validated for unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTree {
    items: Vec<MenuNode>,
}

impl MenuTree {
    /// Build a tree from its root items, rejecting an empty root level and
    /// duplicate ids.
    pub fn new(items: Vec<MenuNode>) -> Result<Self, MenuError> {
        if items.is_empty() {
            return Err(MenuError::EmptyMenu);
        }
        let tree = Self { items };
        tree.check_unique_ids()?;
        Ok(tree)
    }

    /// Root-level entries.
    pub fn root(&self) -> &[MenuNode] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of nodes at every depth.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Depth-first search for `id`, visiting each node before its children
    /// and children before later siblings.
    pub fn find(&self, id: u32) -> Option<&MenuNode> {
        find_in(&self.items, id)
    }

    /// Chain of ids from the root down to `id` (inclusive), or `None` when
    /// the id is not in the tree.
    pub fn chain_to(&self, id: u32) -> Option<Vec<u32>> {
        let mut chain = Vec::new();
        if chain_in(&self.items, id, &mut chain) {
            Some(chain)
        } else {
            None
        }
    }

    /// Pre-order walk yielding `(depth, node)`.
    pub fn iter(&self) -> DepthFirst<'_> {
        DepthFirst {
            stack: self.items.iter().rev().map(|n| (0, n)).collect(),
        }
    }

    fn check_unique_ids(&self) -> Result<(), MenuError> {
        let mut seen: HashMap<u32, &str> = HashMap::new();
        for (_, node) in self.iter() {
            if let Some(first) = seen.insert(node.id, &node.name) {
                return Err(MenuError::DuplicateId {
                    id: node.id,
                    first: first.to_string(),
                    second: node.name.clone(),
                });
            }
        }
        Ok(())
    }
}

fn find_in(items: &[MenuNode], id: u32) -> Option<&MenuNode> {
    for item in items {
        if item.id == id {
            return Some(item);
        }
        if let Some(found) = find_in(&item.children, id) {
            return Some(found);
        }
    }
    None
}

fn chain_in(items: &[MenuNode], id: u32, chain: &mut Vec<u32>) -> bool {
    for item in items {
        chain.push(item.id);
        if item.id == id || chain_in(&item.children, id, chain) {
            return true;
        }
        chain.pop();
    }
    false
}

/// Iterator returned by [`MenuTree::iter`].
pub struct DepthFirst<'a> {
    stack: Vec<(usize, &'a MenuNode)>,
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = (usize, &'a MenuNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().map(|c| (depth + 1, c)));
        Some((depth, node))
    }
}
