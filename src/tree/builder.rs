//! Tree Builder
//!
//! Expands each space's pinned containers into fully resolved subtrees.
//! All edges are indirect: containers reference root items through their
//! `parentID` field, and folders reference children through `childrenIds`.
//! Any reference that does not resolve is skipped silently; the source is
//! known to contain soft-deleted and stale ids.

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::index::{ContainerRef, ItemIndex, SectionMarker, SpaceIndex, SpaceModel};
use crate::timestamp::convert_timestamp;
use crate::tree::node::{Node, SpaceExport};

/// Hard cap on expansion depth. The sidebar is a tree by construction, but a
/// corrupted snapshot could nest deeper than any legitimate sidebar does.
const MAX_EXPANSION_DEPTH: usize = 64;

/// Rebuilds bookmark subtrees from the flat item index.
///
/// The index is borrowed immutably for the builder's lifetime; nodes are
/// freshly constructed value copies, never views into the index.
pub struct TreeBuilder<'a> {
    items: &'a ItemIndex,
    /// parentID -> child item ids, in item-index insertion order.
    children_of: IndexMap<&'a str, Vec<&'a str>>,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(items: &'a ItemIndex) -> Self {
        let mut children_of: IndexMap<&str, Vec<&str>> = IndexMap::new();
        for (item_id, item) in items {
            if let Some(parent_id) = item.parent_id.as_deref() {
                children_of
                    .entry(parent_id)
                    .or_default()
                    .push(item_id.as_str());
            }
        }
        Self { items, children_of }
    }

    /// Expand every space into its pinned root nodes, in space-index order.
    pub fn build_spaces(&self, spaces: &SpaceIndex) -> Vec<SpaceExport> {
        spaces
            .iter()
            .map(|(space_id, space)| self.build_space(space_id, space))
            .collect()
    }

    /// Expand one space: collect container ids between a `pinned` marker and
    /// the next `unpinned` marker (or end of list), then expand each
    /// container's root items in encounter order.
    fn build_space(&self, space_id: &str, space: &SpaceModel) -> SpaceExport {
        let mut pinned = Vec::new();
        let mut in_pinned_section = false;
        for entry in &space.new_container_ids {
            if let Some(marker) = entry.marker() {
                in_pinned_section = marker == SectionMarker::Pinned;
                continue;
            }
            if let ContainerRef::Id(container_id) = entry {
                if in_pinned_section {
                    self.expand_container(container_id, &mut pinned);
                }
            }
        }
        SpaceExport {
            id: space_id.to_string(),
            title: space
                .title
                .clone()
                .unwrap_or_else(|| "Untitled Space".to_string()),
            pinned,
        }
    }

    /// Root items of a container are the items whose `parentID` equals the
    /// container id, in item-index insertion order.
    fn expand_container(&self, container_id: &str, out: &mut Vec<Node>) {
        let Some(root_ids) = self.children_of.get(container_id) else {
            debug!("pinned container {} has no root items", container_id);
            return;
        };
        for &root_id in root_ids {
            let mut trail = Vec::new();
            if let Some(node) = self.expand_item(root_id, &mut trail) {
                out.push(node);
            }
        }
    }

    /// Recursively expand one item into a node. Unresolvable ids yield no
    /// node; an id already on the current expansion path is a cycle and is
    /// skipped the same way.
    fn expand_item(&self, item_id: &'a str, trail: &mut Vec<&'a str>) -> Option<Node> {
        let item = self.items.get(item_id)?;
        if trail.contains(&item_id) {
            warn!("cyclic reference at item {}; skipping", item_id);
            return None;
        }
        if trail.len() >= MAX_EXPANSION_DEPTH {
            warn!("expansion depth limit reached at item {}; skipping", item_id);
            return None;
        }

        let id = item
            .id
            .clone()
            .unwrap_or_else(|| item_id.to_string());
        let tab = item.tab();
        let title = item
            .title
            .clone()
            .filter(|title| !title.is_empty())
            .or_else(|| tab.and_then(|tab| tab.saved_title.clone()))
            .unwrap_or_else(|| "Untitled".to_string());
        let created_at = item
            .created_at
            .map(convert_timestamp)
            .filter(|rendered| !rendered.is_empty());

        // Folder classification wins when children and tab data coexist.
        if !item.children_ids.is_empty() {
            trail.push(item_id);
            let children: Vec<Node> = item
                .children_ids
                .iter()
                .filter_map(|child_id| self.expand_item(child_id, trail))
                .collect();
            trail.pop();
            return Some(Node::Folder {
                id,
                title,
                created_at,
                children: (!children.is_empty()).then_some(children),
            });
        }

        if let Some(tab) = tab {
            return Some(Node::Tab {
                id,
                title,
                url: normalize_url(tab.saved_url.as_deref().unwrap_or_default()),
                created_at,
                last_active_at: tab
                    .time_last_active_at
                    .map(convert_timestamp)
                    .filter(|rendered| !rendered.is_empty()),
            });
        }

        // Neither tab data nor children: a childless folder.
        Some(Node::Folder {
            id,
            title,
            created_at,
            children: None,
        })
    }
}

/// Collapse literal `\/` escape sequences left behind by the source's
/// double-escaped JSON encoding.
pub fn normalize_url(url: &str) -> String {
    url.replace("\\/", "/")
}
