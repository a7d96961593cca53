//! Sidebar Statistics
//!
//! Flat counts over the two indices, independent of tree reconstruction.

use serde::Serialize;

use crate::index::{ItemIndex, SpaceIndex};

/// Counts of spaces, tabs, and folders in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SidebarStats {
    pub spaces: usize,
    pub tabs: usize,
    pub folders: usize,
}

/// Count spaces, tabs (non-empty saved URL), and folders (non-empty child
/// list, among items not already counted as tabs).
pub fn collect(items: &ItemIndex, spaces: &SpaceIndex) -> SidebarStats {
    let mut tabs = 0;
    let mut folders = 0;
    for item in items.values() {
        let has_url = item
            .tab()
            .and_then(|tab| tab.saved_url.as_deref())
            .is_some_and(|url| !url.is_empty());
        if has_url {
            tabs += 1;
        } else if !item.children_ids.is_empty() {
            folders += 1;
        }
    }
    SidebarStats {
        spaces: spaces.len(),
        tabs,
        folders,
    }
}
