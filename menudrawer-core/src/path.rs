//! Navigation path: the breadcrumb of drilled-into node ids.

use std::fmt;

/// Ordered ids of the expandable nodes entered from the root.
/// Empty means the root level is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NavigationPath {
    ids: Vec<u32>,
}

impl NavigationPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids(ids: Vec<u32>) -> Self {
        Self { ids }
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn last(&self) -> Option<u32> {
        self.ids.last().copied()
    }

    /// Number of levels below the root.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.ids.is_empty()
    }

    pub(crate) fn push(&mut self, id: u32) {
        self.ids.push(id);
    }

    pub(crate) fn pop(&mut self) -> Option<u32> {
        self.ids.pop()
    }

    pub(crate) fn clear(&mut self) {
        self.ids.clear();
    }

    /// Stable key for the view this path shows: ids joined by `-`, or
    /// `main` at the root.
    pub fn view_key(&self) -> String {
        if self.ids.is_empty() {
            return "main".to_string();
        }
        self.ids
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join("-")
    }
}

impl fmt::Display for NavigationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.view_key())
    }
}
