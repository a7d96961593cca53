//! CLI Tooling
//!
//! Command-line interface for sidebar export operations. Commands return
//! their rendered output as a string; the binary prints it to stdout.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::info;

use crate::config::{ConfigLoader, ExportConfig};
use crate::error::ExportError;
use crate::export::{ExportDocument, Exporter};
use crate::index::{build_item_index, build_space_index, ItemIndex, SpaceIndex};
use crate::sidebar::{paths, SidebarDocument};
use crate::stats;
use crate::tree::TreeBuilder;

/// arc-export CLI - Export pinned tabs from the Arc browser sidebar
#[derive(Parser)]
#[command(name = "arc-export")]
#[command(about = "Export pinned tabs from the Arc browser sidebar, organized by space")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to StorableSidebar.json (overrides platform discovery)
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export pinned tabs as JSON and/or HTML
    Export {
        /// Export as JSON
        #[arg(long, short = 'j')]
        json: bool,

        /// Export as HTML (Chrome-compatible bookmarks)
        #[arg(long, short = 'H')]
        html: bool,

        /// Output filename without extension
        #[arg(long, short = 'o')]
        output: Option<String>,

        /// Output directory
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Compact JSON output (no indentation)
        #[arg(long)]
        compact: bool,
    },
    /// Show sidebar statistics
    Stats {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List spaces with their pinned item counts
    Spaces {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

/// One row for the spaces listing.
#[derive(Debug, Clone, Serialize)]
pub struct SpaceSummaryEntry {
    pub id: String,
    pub title: String,
    pub pinned_count: usize,
}

/// Spaces listing output for JSON.
#[derive(Debug, Clone, Serialize)]
pub struct SpaceSummaryOutput {
    pub spaces: Vec<SpaceSummaryEntry>,
    pub total: usize,
}

/// CLI context holding resolved configuration and source path.
pub struct CliContext {
    config: ExportConfig,
    source_path: PathBuf,
}

impl CliContext {
    /// Create a new CLI context.
    pub fn new(
        source_override: Option<PathBuf>,
        config_path: Option<PathBuf>,
    ) -> Result<Self, ExportError> {
        let config = match &config_path {
            Some(path) => ConfigLoader::load_from_file(path),
            None => ConfigLoader::load(),
        }
        .map_err(|e| ExportError::ConfigError(e.to_string()))?;

        let source_path = match source_override.or_else(|| config.source.sidebar_path.clone()) {
            Some(path) => path,
            None => paths::default_sidebar_path()?,
        };

        Ok(Self {
            config,
            source_path,
        })
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Load the sidebar snapshot and build both indices. The indices are
    /// rebuilt on every invocation; nothing is cached across commands.
    fn load_indices(&self) -> Result<(ItemIndex, SpaceIndex), ExportError> {
        let document = SidebarDocument::load(&self.source_path)?;
        let items = build_item_index(document.items());
        let spaces = build_space_index(document.space_models());
        Ok((items, spaces))
    }

    /// Execute a CLI command.
    pub fn execute(&self, command: &Commands) -> Result<String, ExportError> {
        match command {
            Commands::Export {
                json,
                html,
                output,
                out_dir,
                compact,
            } => self.handle_export(
                *json,
                *html,
                output.as_deref(),
                out_dir.as_deref(),
                *compact,
            ),
            Commands::Stats { format } => self.handle_stats(format),
            Commands::Spaces { format } => self.handle_spaces(format),
        }
    }

    fn handle_export(
        &self,
        json: bool,
        html: bool,
        output: Option<&str>,
        out_dir: Option<&Path>,
        compact: bool,
    ) -> Result<String, ExportError> {
        let (want_json, want_html) = resolve_formats(json, html);

        let (items, spaces) = self.load_indices()?;
        let sidebar_stats = stats::collect(&items, &spaces);
        let builder = TreeBuilder::new(&items);
        let document = ExportDocument::new(builder.build_spaces(&spaces));
        if document.spaces.is_empty() {
            return Err(ExportError::EmptyExport);
        }
        info!(
            spaces = document.spaces.len(),
            pinned = document.pinned_count(),
            "export document built"
        );

        let out_dir = out_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.config.output.dir.clone());
        fs::create_dir_all(&out_dir).map_err(|source| ExportError::WriteError {
            path: out_dir.clone(),
            source,
        })?;
        let basename = output.unwrap_or(&self.config.output.basename);
        let pretty = !compact && self.config.output.pretty;

        let mut out = String::new();
        out.push_str(&format!(
            "{}\n\n",
            format_section_heading("Arc Sidebar Export")
        ));
        out.push_str(&format!("Source: {}\n", self.source_path.display()));
        out.push_str(&format!(
            "Found {} spaces, {} tabs, {} folders\n",
            sidebar_stats.spaces, sidebar_stats.tabs, sidebar_stats.folders
        ));
        out.push_str(&format!(
            "Exporting {} pinned items from {} spaces\n\n",
            document.pinned_count(),
            document.spaces.len()
        ));

        out.push_str("Exported:\n");
        if want_json {
            let path = out_dir.join(format!("{}.json", basename));
            Exporter::write_json(&document, &path, pretty)?;
            out.push_str(&format!("  JSON: {}\n", path.display()));
        }
        if want_html {
            let path = out_dir.join(format!("{}.html", basename));
            Exporter::write_html(&document, &path)?;
            out.push_str(&format!("  HTML: {}\n", path.display()));
            out.push_str(
                "\nTo import into Chrome: open chrome://bookmarks, choose \
                 \"Import bookmarks\", and select the HTML file.\n",
            );
        }

        Ok(out)
    }

    fn handle_stats(&self, format: &str) -> Result<String, ExportError> {
        let (items, spaces) = self.load_indices()?;
        let sidebar_stats = stats::collect(&items, &spaces);
        if format == "json" {
            return Ok(serde_json::to_string_pretty(&sidebar_stats)?);
        }

        let mut out = String::new();
        out.push_str(&format!(
            "{}\n\n",
            format_section_heading("Sidebar Statistics")
        ));
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Spaces", "Tabs", "Folders"]);
        table.add_row(vec![
            sidebar_stats.spaces.to_string(),
            sidebar_stats.tabs.to_string(),
            sidebar_stats.folders.to_string(),
        ]);
        out.push_str(&format!("{}\n", table));
        Ok(out)
    }

    fn handle_spaces(&self, format: &str) -> Result<String, ExportError> {
        let (items, spaces) = self.load_indices()?;
        let builder = TreeBuilder::new(&items);
        let exports = builder.build_spaces(&spaces);
        let entries: Vec<SpaceSummaryEntry> = exports
            .iter()
            .map(|space| SpaceSummaryEntry {
                id: space.id.clone(),
                title: space.title.clone(),
                pinned_count: space.pinned.len(),
            })
            .collect();

        if format == "json" {
            return Ok(serde_json::to_string_pretty(&SpaceSummaryOutput {
                total: entries.len(),
                spaces: entries,
            })?);
        }

        let mut out = String::new();
        out.push_str(&format!("{}\n\n", format_section_heading("Spaces")));
        if entries.is_empty() {
            out.push_str("No spaces found.\n");
            return Ok(out);
        }
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Space", "Pinned items"]);
        for entry in &entries {
            table.add_row(vec![entry.title.clone(), entry.pinned_count.to_string()]);
        }
        out.push_str(&format!("{}\n\n", table));
        out.push_str(&format!("Total: {} spaces.\n", entries.len()));
        Ok(out)
    }
}

/// Neither format flag means both formats.
fn resolve_formats(json: bool, html: bool) -> (bool, bool) {
    if !json && !html {
        (true, true)
    } else {
        (json, html)
    }
}

/// Format a section heading with bold/underline. Respects NO_COLOR and TTY.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}
