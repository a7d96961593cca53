//! Netscape Bookmark Rendering
//!
//! Renders the export document in the legacy bookmark-file markup that
//! Chrome and Firefox import. Each space becomes a top-level folder heading;
//! folders nest as heading/list blocks; tabs become link entries. Spaces
//! with nothing pinned and tabs with an empty URL are omitted.

use crate::export::ExportDocument;
use crate::tree::Node;

/// Render the full bookmark document.
pub fn render(document: &ExportDocument) -> String {
    let mut lines: Vec<String> = vec![
        "<!DOCTYPE NETSCAPE-Bookmark-file-1>".to_string(),
        "<!-- Exported from Arc Browser -->".to_string(),
        "<META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=UTF-8\">".to_string(),
        "<TITLE>Bookmarks</TITLE>".to_string(),
        "<H1>Bookmarks</H1>".to_string(),
        "<DL><p>".to_string(),
    ];

    for space in &document.spaces {
        if space.pinned.is_empty() {
            continue;
        }
        lines.push(format!("    <DT><H3>{}</H3>", escape(&space.title)));
        lines.push("    <DL><p>".to_string());
        for node in &space.pinned {
            render_node(node, 2, &mut lines);
        }
        lines.push("    </DL><p>".to_string());
    }

    lines.push("</DL><p>".to_string());
    lines.join("\n")
}

fn render_node(node: &Node, indent: usize, lines: &mut Vec<String>) {
    let prefix = "    ".repeat(indent);
    match node {
        Node::Folder {
            title, children, ..
        } => {
            lines.push(format!("{}<DT><H3>{}</H3>", prefix, escape(title)));
            lines.push(format!("{}<DL><p>", prefix));
            for child in children.iter().flatten() {
                render_node(child, indent + 1, lines);
            }
            lines.push(format!("{}</DL><p>", prefix));
        }
        Node::Tab { title, url, .. } => {
            if !url.is_empty() {
                lines.push(format!(
                    "{}<DT><A HREF=\"{}\">{}</A>",
                    prefix,
                    escape(url),
                    escape(title)
                ));
            }
        }
    }
}

/// Escape the five characters with meaning in HTML text and attributes.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::SpaceExport;

    fn document_with(spaces: Vec<SpaceExport>) -> ExportDocument {
        ExportDocument::new(spaces)
    }

    fn tab(id: &str, title: &str, url: &str) -> Node {
        Node::Tab {
            id: id.to_string(),
            title: title.to_string(),
            url: url.to_string(),
            created_at: None,
            last_active_at: None,
        }
    }

    #[test]
    fn test_header_and_space_heading() {
        let rendered = render(&document_with(vec![SpaceExport {
            id: "s1".to_string(),
            title: "Personal".to_string(),
            pinned: vec![tab("t", "A", "https://a.com")],
        }]));
        assert!(rendered.starts_with("<!DOCTYPE NETSCAPE-Bookmark-file-1>"));
        assert!(rendered.contains("    <DT><H3>Personal</H3>"));
        assert!(rendered.contains("<DT><A HREF=\"https://a.com\">A</A>"));
    }

    #[test]
    fn test_empty_space_is_omitted() {
        let rendered = render(&document_with(vec![SpaceExport {
            id: "s1".to_string(),
            title: "Empty".to_string(),
            pinned: vec![],
        }]));
        assert!(!rendered.contains("Empty"));
    }

    #[test]
    fn test_empty_url_tab_is_omitted() {
        let rendered = render(&document_with(vec![SpaceExport {
            id: "s1".to_string(),
            title: "Personal".to_string(),
            pinned: vec![tab("t", "No URL", "")],
        }]));
        assert!(!rendered.contains("No URL"));
    }

    #[test]
    fn test_folder_nesting_indents() {
        let rendered = render(&document_with(vec![SpaceExport {
            id: "s1".to_string(),
            title: "Personal".to_string(),
            pinned: vec![Node::Folder {
                id: "f".to_string(),
                title: "Docs".to_string(),
                created_at: None,
                children: Some(vec![tab("t", "A", "https://a.com")]),
            }],
        }]));
        assert!(rendered.contains("        <DT><H3>Docs</H3>"));
        assert!(rendered.contains("            <DT><A HREF=\"https://a.com\">A</A>"));
    }

    #[test]
    fn test_childless_folder_renders_empty_list() {
        let rendered = render(&document_with(vec![SpaceExport {
            id: "s1".to_string(),
            title: "Personal".to_string(),
            pinned: vec![Node::Folder {
                id: "f".to_string(),
                title: "Bare".to_string(),
                created_at: None,
                children: None,
            }],
        }]));
        assert!(rendered.contains("        <DT><H3>Bare</H3>"));
        assert!(rendered.contains("        <DL><p>"));
    }

    #[test]
    fn test_escaping() {
        assert_eq!(
            escape(r#"<a & "b" 'c'>"#),
            "&lt;a &amp; &quot;b&quot; &#x27;c&#x27;&gt;"
        );
        let rendered = render(&document_with(vec![SpaceExport {
            id: "s1".to_string(),
            title: "A & B".to_string(),
            pinned: vec![tab("t", "<script>", "https://a.com?q=1&r=2")],
        }]));
        assert!(rendered.contains("<DT><H3>A &amp; B</H3>"));
        assert!(rendered.contains("&lt;script&gt;"));
        assert!(rendered.contains("https://a.com?q=1&amp;r=2"));
    }
}
