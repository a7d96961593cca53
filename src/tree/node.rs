//! Bookmark node types produced by tree reconstruction.

use serde::Serialize;

use crate::types::{ItemId, SpaceId};

/// A reconstructed bookmark node.
///
/// The tag is derived during expansion, never stored in the source: a record
/// with non-empty tab data is a tab, a record with children is a folder, and
/// folder classification wins when both are present.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Tab {
        id: ItemId,
        title: String,
        url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        created_at: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        last_active_at: Option<String>,
    },
    Folder {
        id: ItemId,
        title: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        created_at: Option<String>,
        /// Present only when at least one child resolved.
        #[serde(skip_serializing_if = "Option::is_none")]
        children: Option<Vec<Node>>,
    },
}

impl Node {
    pub fn title(&self) -> &str {
        match self {
            Node::Tab { title, .. } | Node::Folder { title, .. } => title,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Node::Folder { .. })
    }
}

/// One exported space with its pinned root nodes, in sidebar order.
#[derive(Debug, Clone, Serialize)]
pub struct SpaceExport {
    pub id: SpaceId,
    pub title: String,
    pub pinned: Vec<Node>,
}
