//! arc-export: Arc Sidebar Export
//!
//! Reconstructs the hierarchical bookmark tree from the Arc browser's
//! flattened, id-indexed sidebar storage and re-serializes it into portable
//! formats (JSON, Netscape bookmark HTML).

pub mod config;
pub mod error;
pub mod export;
pub mod index;
pub mod logging;
pub mod sidebar;
pub mod stats;
pub mod timestamp;
pub mod tooling;
pub mod tree;
pub mod types;
