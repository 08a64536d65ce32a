//! Index page rendering.
//!
//! The template is plain HTML with two marker comments. The artifact list
//! replaces [`ARTIFACTS_LIST_PLACEHOLDER`]; the build timestamp, when given,
//! replaces [`BUILD_TIMESTAMP_PLACEHOLDER`]. Nothing else is interpreted.

pub mod items;

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::scan::ArtifactRecord;
use crate::{IndexError, IndexResult};

pub use items::{html_escape, render_item, render_items};

/// Marker replaced with the rendered artifact list.
pub const ARTIFACTS_LIST_PLACEHOLDER: &str = "<!-- ARTIFACTS_LIST_PLACEHOLDER -->";

/// Marker replaced with the build timestamp, if one is supplied.
pub const BUILD_TIMESTAMP_PLACEHOLDER: &str = "<!-- BUILD_TIMESTAMP_PLACEHOLDER -->";

/// Read the page template from disk.
pub fn load_template(path: &Path) -> IndexResult<String> {
    fs::read_to_string(path).map_err(|source| IndexError::Template {
        path: path.to_path_buf(),
        source,
    })
}

/// Substitute records and timestamp into `template`.
///
/// An empty timestamp is treated like no timestamp: the marker stays as is.
pub fn render_page(
    template: &str,
    records: &[ArtifactRecord],
    timestamp: Option<&str>,
    escape: bool,
) -> String {
    if !template.contains(ARTIFACTS_LIST_PLACEHOLDER) {
        warn!("template has no artifact list marker; list will not appear");
    }

    let items = render_items(records, escape);
    let html = template.replace(ARTIFACTS_LIST_PLACEHOLDER, &items);

    match timestamp {
        Some(ts) if !ts.is_empty() => html.replace(BUILD_TIMESTAMP_PLACEHOLDER, ts),
        _ => html,
    }
}

/// Load the template at `template_path` and render the full document.
///
/// Does not write anything; a missing template is an error.
pub fn generate_html(
    records: &[ArtifactRecord],
    template_path: &Path,
    timestamp: Option<&str>,
    escape: bool,
) -> IndexResult<String> {
    let template = load_template(template_path)?;
    debug!(
        template = %template_path.display(),
        artifacts = records.len(),
        "rendering index page"
    );
    Ok(render_page(&template, records, timestamp, escape))
}
