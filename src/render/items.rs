//! Per-artifact HTML fragments.

use crate::scan::ArtifactRecord;

/// HTML-escape a string for safe insertion into HTML content.
///
/// Escapes: & < > " '
pub fn html_escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Render the link block for one artifact.
///
/// With `escape` unset, name, description and path are inserted literally.
pub fn render_item(record: &ArtifactRecord, escape: bool) -> String {
    let (path, name, description) = if escape {
        (
            html_escape(&record.path),
            html_escape(&record.name),
            html_escape(&record.description),
        )
    } else {
        (
            record.path.clone(),
            record.name.clone(),
            record.description.clone(),
        )
    };

    format!(
        r#"
        <a href="{path}" class="artifact-item">
            <div class="artifact-name">{name}</div>
            <div class="artifact-desc">{description}</div>
        </a>
        "#
    )
}

/// Concatenate the fragments of all records, preserving order.
pub fn render_items(records: &[ArtifactRecord], escape: bool) -> String {
    records
        .iter()
        .map(|record| render_item(record, escape))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("plain"), "plain");
        assert_eq!(
            html_escape(r#"<a href="x">O'Reilly & co</a>"#),
            "&lt;a href=&quot;x&quot;&gt;O&#x27;Reilly &amp; co&lt;/a&gt;"
        );
    }

    #[test]
    fn test_render_item_shape() {
        let record = ArtifactRecord::new("foo", "A simple tool.");
        let html = render_item(&record, false);
        assert_eq!(
            html,
            "\n        <a href=\"/foo/\" class=\"artifact-item\">\n            \
             <div class=\"artifact-name\">foo</div>\n            \
             <div class=\"artifact-desc\">A simple tool.</div>\n        \
             </a>\n        "
        );
    }

    #[test]
    fn test_render_item_literal_by_default() {
        let record = ArtifactRecord::new("x", "Uses <b>bold</b> & more");
        let html = render_item(&record, false);
        assert!(html.contains("Uses <b>bold</b> & more"));
    }

    #[test]
    fn test_render_item_escaped() {
        let record = ArtifactRecord::new("<x>", "<script>alert('xss')</script>");
        let html = render_item(&record, true);
        assert!(!html.contains("<script>"), "Should escape script tags");
        assert!(html.contains("&lt;script&gt;alert(&#x27;xss&#x27;)&lt;/script&gt;"));
        assert!(html.contains(r#"href="/&lt;x&gt;/""#));
    }

    #[test]
    fn test_render_items_preserves_order() {
        let records = vec![
            ArtifactRecord::new("bar", "B"),
            ArtifactRecord::new("foo", "F"),
        ];
        let html = render_items(&records, false);
        let bar = html.find("/bar/").unwrap();
        let foo = html.find("/foo/").unwrap();
        assert!(bar < foo);
    }

    #[test]
    fn test_render_items_empty() {
        assert_eq!(render_items(&[], false), "");
    }
}
