//! Build the index page: scan artifacts, render the template, write output.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::IndexConfig;
use crate::render::generate_html;
use crate::scan::{ArtifactRecord, scan_artifacts};
use crate::{IndexError, IndexResult};

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    pub artifact_count: usize,
    pub html_path: PathBuf,
    pub manifest_path: Option<PathBuf>,
}

/// Write the scanned records as compact JSON.
///
/// Compact output keeps the bytes identical across runs.
pub fn write_manifest(records: &[ArtifactRecord], output_path: &Path) -> IndexResult<()> {
    let json = serde_json::to_string(records)
        .map_err(|e| IndexError::Message(format!("failed to serialize manifest: {e}")))?;
    fs::write(output_path, json).map_err(|source| IndexError::Write {
        path: output_path.to_path_buf(),
        source,
    })
}

/// Run a full generation.
///
/// The template is loaded before the output directory is touched, so a
/// missing template leaves no output behind.
pub fn run(config: &IndexConfig, timestamp: Option<&str>) -> IndexResult<GenerateSummary> {
    let records = scan_artifacts(&config.artifacts_dir)?;
    info!(
        dir = %config.artifacts_dir.display(),
        count = records.len(),
        "scanned artifacts"
    );

    let html = generate_html(&records, &config.template_path, timestamp, config.escape_html)?;

    fs::create_dir_all(&config.out_dir).map_err(|e| {
        IndexError::io(
            format!("failed to create output directory {}", config.out_dir.display()),
            e,
        )
    })?;

    let html_path = config.index_html_path();
    fs::write(&html_path, html).map_err(|source| IndexError::Write {
        path: html_path.clone(),
        source,
    })?;
    info!(path = %html_path.display(), "wrote index page");

    let manifest_path = if config.write_manifest {
        let path = config.manifest_path();
        write_manifest(&records, &path)?;
        info!(path = %path.display(), "wrote manifest");
        Some(path)
    } else {
        None
    };

    Ok(GenerateSummary {
        artifact_count: records.len(),
        html_path,
        manifest_path,
    })
}
