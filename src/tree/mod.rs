//! Tree Reconstruction
//!
//! Rebuilds the hierarchical bookmark tree from the flat id-keyed indices.

pub mod builder;
pub mod node;

pub use builder::TreeBuilder;
pub use node::{Node, SpaceExport};
