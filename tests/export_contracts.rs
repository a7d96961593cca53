use std::fs;
use std::path::{Path, PathBuf};

use arc_export::error::{ExportError, SourceError};
use arc_export::tooling::cli::{CliContext, Commands};
use tempfile::TempDir;

/// A snapshot exercising both record encodings, pinned/unpinned sections,
/// nested folders, a dangling child, and a double-escaped URL.
const FIXTURE: &str = r#"{
  "sidebarSyncState": {
    "items": [
      {"id": "F1", "parentID": "C1", "title": "Reading", "childrenIds": ["T2", "GONE"], "createdAt": 694224000},
      {"id": "T1", "parentID": "C1", "createdAt": 694224000,
       "data": {"tab": {"savedURL": "https://example.com\\/a", "savedTitle": "Example", "timeLastActiveAt": 694224100}}},
      "T2",
      {"value": {"id": "T2", "data": {"tab": {"savedURL": "https://news.site/x", "savedTitle": "News"}}}},
      {"id": "T3", "parentID": "C2",
       "data": {"tab": {"savedURL": "https://archived.example", "savedTitle": "Archived"}}}
    ],
    "spaceModels": [
      "S1",
      {"value": {"id": "S1", "title": "Personal",
                 "newContainerIDs": [{"unpinned": {}}, "C2", {"pinned": {}}, "C1"]}}
    ]
  }
}"#;

fn write_fixture(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("StorableSidebar.json");
    fs::write(&path, contents).unwrap();
    path
}

fn context_for(source: &Path) -> CliContext {
    CliContext::new(Some(source.to_path_buf()), None).unwrap()
}

#[test]
fn export_json_contract_has_required_fields() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_fixture(temp_dir.path(), FIXTURE);
    let out_dir = temp_dir.path().join("outputs");

    let cli = context_for(&source);
    let output = cli
        .execute(&Commands::Export {
            json: true,
            html: false,
            output: None,
            out_dir: Some(out_dir.clone()),
            compact: false,
        })
        .unwrap();
    assert!(output.contains("arc_pinned.json"));

    let raw = fs::read_to_string(out_dir.join("arc_pinned.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(parsed.get("export_date").and_then(|v| v.as_str()).is_some());
    assert_eq!(
        parsed.get("source").and_then(|v| v.as_str()),
        Some("StorableSidebar.json")
    );

    let spaces = parsed
        .get("spaces")
        .and_then(|v| v.as_array())
        .expect("spaces array should exist");
    assert_eq!(spaces.len(), 1);
    assert_eq!(spaces[0]["id"], "S1");
    assert_eq!(spaces[0]["title"], "Personal");

    let pinned = spaces[0]["pinned"].as_array().expect("pinned array");
    assert_eq!(pinned.len(), 2);

    // First root: the folder, in item-index insertion order.
    assert_eq!(pinned[0]["type"], "folder");
    assert_eq!(pinned[0]["title"], "Reading");
    let children = pinned[0]["children"].as_array().expect("children array");
    assert_eq!(children.len(), 1, "dangling child must be dropped");
    assert_eq!(children[0]["type"], "tab");
    assert_eq!(children[0]["url"], "https://news.site/x");

    // Second root: the tab with the de-escaped URL and both timestamps.
    assert_eq!(pinned[1]["type"], "tab");
    assert_eq!(pinned[1]["url"], "https://example.com/a");
    assert!(pinned[1]
        .get("created_at")
        .and_then(|v| v.as_str())
        .is_some_and(|s| !s.is_empty()));
    assert!(pinned[1].get("last_active_at").is_some());

    // The unpinned container's tab must not appear anywhere.
    assert!(!raw.contains("archived.example"));
}

#[test]
fn export_html_contract_renders_bookmark_markup() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_fixture(temp_dir.path(), FIXTURE);
    let out_dir = temp_dir.path().join("outputs");

    let cli = context_for(&source);
    let output = cli
        .execute(&Commands::Export {
            json: false,
            html: true,
            output: Some("bookmarks".to_string()),
            out_dir: Some(out_dir.clone()),
            compact: false,
        })
        .unwrap();
    assert!(output.contains("bookmarks.html"));

    let html = fs::read_to_string(out_dir.join("bookmarks.html")).unwrap();
    assert!(html.starts_with("<!DOCTYPE NETSCAPE-Bookmark-file-1>"));
    assert!(html.contains("<DT><H3>Personal</H3>"));
    assert!(html.contains("<DT><H3>Reading</H3>"));
    assert!(html.contains("<DT><A HREF=\"https://example.com/a\">Example</A>"));
    assert!(html.contains("<DT><A HREF=\"https://news.site/x\">News</A>"));
    assert!(!html.contains("Archived"));
}

#[test]
fn export_default_writes_both_formats() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_fixture(temp_dir.path(), FIXTURE);
    let out_dir = temp_dir.path().join("outputs");

    let cli = context_for(&source);
    cli.execute(&Commands::Export {
        json: false,
        html: false,
        output: None,
        out_dir: Some(out_dir.clone()),
        compact: false,
    })
    .unwrap();

    assert!(out_dir.join("arc_pinned.json").exists());
    assert!(out_dir.join("arc_pinned.html").exists());
}

#[test]
fn export_compact_json_is_minified() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_fixture(temp_dir.path(), FIXTURE);
    let out_dir = temp_dir.path().join("outputs");

    let cli = context_for(&source);
    cli.execute(&Commands::Export {
        json: true,
        html: false,
        output: None,
        out_dir: Some(out_dir.clone()),
        compact: true,
    })
    .unwrap();

    let raw = fs::read_to_string(out_dir.join("arc_pinned.json")).unwrap();
    assert!(!raw.contains('\n'));
    assert!(serde_json::from_str::<serde_json::Value>(&raw).is_ok());
}

#[test]
fn stats_json_contract_has_required_fields() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_fixture(temp_dir.path(), FIXTURE);

    let cli = context_for(&source);
    let output = cli
        .execute(&Commands::Stats {
            format: "json".to_string(),
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed.get("spaces").and_then(|v| v.as_u64()), Some(1));
    assert_eq!(parsed.get("tabs").and_then(|v| v.as_u64()), Some(3));
    assert_eq!(parsed.get("folders").and_then(|v| v.as_u64()), Some(1));
}

#[test]
fn spaces_json_contract_has_required_fields() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_fixture(temp_dir.path(), FIXTURE);

    let cli = context_for(&source);
    let output = cli
        .execute(&Commands::Spaces {
            format: "json".to_string(),
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed.get("total").and_then(|v| v.as_u64()), Some(1));
    let spaces = parsed
        .get("spaces")
        .and_then(|v| v.as_array())
        .expect("spaces array should exist");
    assert_eq!(spaces[0]["title"], "Personal");
    assert_eq!(spaces[0]["pinned_count"], 2);
}

#[test]
fn missing_source_file_is_a_hard_error() {
    let temp_dir = TempDir::new().unwrap();
    let cli = context_for(&temp_dir.path().join("missing.json"));
    let err = cli
        .execute(&Commands::Stats {
            format: "text".to_string(),
        })
        .unwrap_err();
    assert!(matches!(
        err,
        ExportError::SourceError(SourceError::NotFound(_))
    ));
}

#[test]
fn malformed_document_is_a_hard_error() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_fixture(temp_dir.path(), "{ definitely not json");
    let cli = context_for(&source);
    let err = cli
        .execute(&Commands::Spaces {
            format: "text".to_string(),
        })
        .unwrap_err();
    assert!(matches!(
        err,
        ExportError::SourceError(SourceError::MalformedDocument(_))
    ));
}

#[test]
fn export_without_spaces_is_empty_export() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_fixture(
        temp_dir.path(),
        r#"{"sidebarSyncState": {"items": [{"id": "a"}], "spaceModels": []}}"#,
    );
    let cli = context_for(&source);
    let err = cli
        .execute(&Commands::Export {
            json: true,
            html: true,
            output: None,
            out_dir: Some(temp_dir.path().join("outputs")),
            compact: false,
        })
        .unwrap_err();
    assert!(matches!(err, ExportError::EmptyExport));
}
