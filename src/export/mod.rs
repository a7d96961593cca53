//! Export Document and Serializers
//!
//! Owns the output data shape consumed by both renderers: structured JSON
//! (pretty or compact) and Chrome-importable bookmark HTML.

pub mod html;

use std::fs;
use std::path::Path;

use chrono::{Local, SecondsFormat};
use serde::Serialize;

use crate::error::ExportError;
use crate::sidebar::SIDEBAR_FILE_NAME;
use crate::tree::SpaceExport;

/// The complete export payload.
#[derive(Debug, Clone, Serialize)]
pub struct ExportDocument {
    /// ISO timestamp of the export run.
    pub export_date: String,
    /// Literal name of the source file.
    pub source: String,
    pub spaces: Vec<SpaceExport>,
}

impl ExportDocument {
    pub fn new(spaces: Vec<SpaceExport>) -> Self {
        Self {
            export_date: Local::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            source: SIDEBAR_FILE_NAME.to_string(),
            spaces,
        }
    }

    /// Total pinned root nodes across all spaces.
    pub fn pinned_count(&self) -> usize {
        self.spaces.iter().map(|space| space.pinned.len()).sum()
    }
}

/// Renders and writes export documents.
pub struct Exporter;

impl Exporter {
    /// Serialize the document as JSON text.
    pub fn to_json_string(document: &ExportDocument, pretty: bool) -> Result<String, ExportError> {
        let rendered = if pretty {
            serde_json::to_string_pretty(document)?
        } else {
            serde_json::to_string(document)?
        };
        Ok(rendered)
    }

    /// Write the document as a JSON file.
    pub fn write_json(
        document: &ExportDocument,
        path: &Path,
        pretty: bool,
    ) -> Result<(), ExportError> {
        let rendered = Self::to_json_string(document, pretty)?;
        fs::write(path, rendered).map_err(|source| ExportError::WriteError {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the document as a Netscape bookmark HTML file.
    pub fn write_html(document: &ExportDocument, path: &Path) -> Result<(), ExportError> {
        let rendered = html::render(document);
        fs::write(path, rendered).map_err(|source| ExportError::WriteError {
            path: path.to_path_buf(),
            source,
        })
    }
}
