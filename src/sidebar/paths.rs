//! Platform path discovery for the sidebar snapshot.
//!
//! macOS keeps the Arc data directory under `~/Library/Application Support`;
//! on Windows, Arc installs through the Microsoft Store and its data lives
//! under a versioned package directory whose suffix varies per machine.

use std::path::PathBuf;

use crate::error::SourceError;
use crate::sidebar::SIDEBAR_FILE_NAME;

/// Resolve the default location of the sidebar snapshot for this platform.
pub fn default_sidebar_path() -> Result<PathBuf, SourceError> {
    arc_data_dir().map(|dir| dir.join(SIDEBAR_FILE_NAME))
}

#[cfg(target_os = "macos")]
fn arc_data_dir() -> Result<PathBuf, SourceError> {
    let base = directories::BaseDirs::new().ok_or_else(|| {
        SourceError::UnsupportedPlatform("could not determine home directory".to_string())
    })?;
    // data_dir() is ~/Library/Application Support on macOS.
    Ok(base.data_dir().join("Arc"))
}

#[cfg(target_os = "windows")]
fn arc_data_dir() -> Result<PathBuf, SourceError> {
    const PACKAGE_PREFIX: &str = "TheBrowserCompany.Arc_";
    // Known common suffix, used when no package directory is found.
    const PACKAGE_FALLBACK: &str = "TheBrowserCompany.Arc_ttt1ap7aakyb4";

    let base = directories::BaseDirs::new().ok_or_else(|| {
        SourceError::UnsupportedPlatform("could not determine local app data".to_string())
    })?;
    // data_local_dir() is %LOCALAPPDATA% on Windows.
    let packages = base.data_local_dir().join("Packages");

    let package = std::fs::read_dir(&packages)
        .ok()
        .and_then(|entries| {
            entries
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.file_name())
                .find(|name| name.to_string_lossy().starts_with(PACKAGE_PREFIX))
        })
        .map(|name| packages.join(name))
        .unwrap_or_else(|| packages.join(PACKAGE_FALLBACK));

    Ok(package.join("LocalCache").join("Local").join("Arc"))
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn arc_data_dir() -> Result<PathBuf, SourceError> {
    Err(SourceError::UnsupportedPlatform(
        std::env::consts::OS.to_string(),
    ))
}
