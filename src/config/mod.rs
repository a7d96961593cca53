//! Configuration
//!
//! Layered configuration: built-in defaults, an optional global file under
//! the platform config directory, and `ARC_EXPORT`-prefixed environment
//! variables, highest precedence last.

mod loader;

pub use loader::ConfigLoader;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::logging::LoggingConfig;

/// Root configuration for the export tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub source: SourceConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Where the sidebar snapshot comes from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Explicit path to StorableSidebar.json; platform discovery otherwise.
    pub sidebar_path: Option<PathBuf>,
}

/// Where and how exports are written.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory
    pub dir: PathBuf,

    /// Output file basename, without extension
    pub basename: String,

    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("outputs"),
            basename: "arc_pinned".to_string(),
            pretty: true,
        }
    }
}
