//! Menu file loading.
//!
//! Two formats are accepted, picked by file extension:
//! - TOML: `[[items]]` tables with nested `[[items.children]]`
//! - JSON: either a bare array of nodes or `{ "items": [...] }`
//!
//! The loaded tree must be non-empty and use unique ids.

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::MenuError;
use crate::menu::{MenuNode, MenuTree};

#[derive(Debug, Deserialize)]
struct MenuDocument {
    items: Vec<MenuNode>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonMenu {
    Bare(Vec<MenuNode>),
    Document(MenuDocument),
}

/// Parse a TOML menu document.
pub fn from_toml_str(content: &str) -> Result<MenuTree, MenuError> {
    let doc: MenuDocument = toml::from_str(content)?;
    MenuTree::new(doc.items)
}

/// Parse a JSON menu document.
pub fn from_json_str(content: &str) -> Result<MenuTree, MenuError> {
    let items = match serde_json::from_str::<JsonMenu>(content)? {
        JsonMenu::Bare(items) => items,
        JsonMenu::Document(doc) => doc.items,
    };
    MenuTree::new(items)
}

/// Load a menu file, choosing the parser from its extension.
pub fn load(path: &Path) -> Result<MenuTree, MenuError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let parse: fn(&str) -> Result<MenuTree, MenuError> = match ext.as_str() {
        "toml" => from_toml_str,
        "json" => from_json_str,
        _ => return Err(MenuError::UnsupportedFormat(ext)),
    };

    let content = std::fs::read_to_string(path).map_err(|source| MenuError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let tree = parse(&content)?;
    info!(path = %path.display(), nodes = tree.len(), "loaded menu file");
    Ok(tree)
}
