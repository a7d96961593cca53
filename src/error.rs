//! Error types for the sidebar export pipeline.
//!
//! Only source-level failures (missing file, undecodable document) surface as
//! hard errors; anomalies inside the data degrade to omitted nodes or fields.

use std::path::PathBuf;
use thiserror::Error;

/// Failures while locating or decoding the sidebar document.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("sidebar file not found at {0}")]
    NotFound(PathBuf),

    #[error("failed to read sidebar file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse sidebar file: {0}")]
    MalformedDocument(#[from] serde_json::Error),

    #[error("unsupported platform: {0}; only macOS and Windows are supported")]
    UnsupportedPlatform(String),
}

/// Top-level error surface for CLI operations.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    SourceError(#[from] SourceError),

    #[error("failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to encode export document: {0}")]
    EncodeError(#[from] serde_json::Error),

    #[error("no data to export")]
    EmptyExport,
}
