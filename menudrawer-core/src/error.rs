//! Errors raised while building or loading a menu tree.
//!
//! Navigation itself never fails: unknown ids and leaf activations are no-ops.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("failed to read menu file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML menu: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON menu: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported menu file extension '{0}' (expected .toml or .json)")]
    UnsupportedFormat(String),

    #[error("duplicate menu id {id}: used by '{first}' and '{second}'")]
    DuplicateId {
        id: u32,
        first: String,
        second: String,
    },

    #[error("menu has no items")]
    EmptyMenu,
}
