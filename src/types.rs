//! Core identifier types for the sidebar export pipeline.

/// ItemId: Identifier of a sidebar item (tab, folder, or container)
pub type ItemId = String;

/// SpaceId: Identifier of a sidebar space (workspace)
pub type SpaceId = String;
