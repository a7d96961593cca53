//! Sidebar Document Loading
//!
//! Reads a static snapshot of the browser's persisted sidebar. Only two
//! failures surface here: a missing file and an undecodable document. The
//! record lists inside the document are decoded leniently; a malformed
//! container field yields an empty list rather than an error.

pub mod paths;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::info;

use crate::error::SourceError;

/// File name of the sidebar snapshot inside the Arc data directory.
pub const SIDEBAR_FILE_NAME: &str = "StorableSidebar.json";

/// Top-level sidebar document: `{ sidebarSyncState: { items, spaceModels } }`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SidebarDocument {
    sidebar_sync_state: SyncState,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SyncState {
    #[serde(deserialize_with = "lenient_list")]
    items: Vec<Value>,
    #[serde(deserialize_with = "lenient_list")]
    space_models: Vec<Value>,
}

impl SidebarDocument {
    /// Load and decode the sidebar snapshot at `path`.
    pub fn load(path: &Path) -> Result<Self, SourceError> {
        let raw = fs::read_to_string(path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                SourceError::NotFound(path.to_path_buf())
            } else {
                SourceError::IoError(err)
            }
        })?;
        let document: SidebarDocument = serde_json::from_str(&raw)?;
        info!(
            items = document.items().len(),
            spaces = document.space_models().len(),
            "loaded sidebar snapshot"
        );
        Ok(document)
    }

    /// Parse a document from a JSON string, without touching the filesystem.
    pub fn from_json(raw: &str) -> Result<Self, SourceError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Raw item record list.
    pub fn items(&self) -> &[Value] {
        &self.sidebar_sync_state.items
    }

    /// Raw space record list.
    pub fn space_models(&self) -> &[Value] {
        &self.sidebar_sync_state.space_models
    }
}

/// Accept any JSON value where a list is expected; non-arrays decode to an
/// empty list so that a malformed container field degrades instead of
/// failing the whole document.
fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(list) => list,
        _ => Vec::new(),
    })
}
