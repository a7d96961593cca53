//! ConfigLoader: composes defaults, the global file, and environment sources.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};

use super::ExportConfig;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from standard sources.
    /// Precedence: defaults (lowest) -> global file -> environment (highest).
    pub fn load() -> Result<ExportConfig, ConfigError> {
        let mut builder = Config::builder();
        if let Some(global) = Self::global_config_path() {
            builder = builder.add_source(File::from(global).required(false));
        }
        let config = builder.add_source(Self::environment()).build()?;
        config.try_deserialize()
    }

    /// Load configuration from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<ExportConfig, ConfigError> {
        let config = Config::builder()
            .add_source(File::from(path.to_path_buf()))
            .add_source(Self::environment())
            .build()?;
        config.try_deserialize()
    }

    fn environment() -> Environment {
        Environment::with_prefix("ARC_EXPORT")
            .separator("__")
            .try_parsing(true)
    }

    /// Platform config file path (~/.config/arc-export/config.toml or
    /// equivalent).
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "arc-export", "arc-export")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
