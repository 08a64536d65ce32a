//! Artifact discovery.
//!
//! Every immediate sub-directory of the artifacts directory is one artifact.
//! Records are derived fresh on every run and returned sorted by name.

pub mod readme;

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, trace};

use crate::{IndexError, IndexResult};

pub use readme::{README_FILE_NAME, describe, first_description_line, is_description_line};

/// Description used when an artifact has no usable README line.
pub const DEFAULT_DESCRIPTION: &str = "No description available.";

/// One listed artifact.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ArtifactRecord {
    /// Directory name
    pub name: String,
    /// First prose line of the README, or [`DEFAULT_DESCRIPTION`]
    pub description: String,
    /// Site-relative link, always `/{name}/`
    pub path: String,
}

impl ArtifactRecord {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        let mut description = description.into();
        if description.is_empty() {
            description = DEFAULT_DESCRIPTION.to_string();
        }
        let path = make_artifact_path(&name);
        ArtifactRecord {
            name,
            description,
            path,
        }
    }
}

/// Link target for an artifact name.
pub fn make_artifact_path(name: &str) -> String {
    format!("/{name}/")
}

/// Sort records by name (code-point order).
fn sort_records(records: &mut [ArtifactRecord]) {
    records.sort_by(|a, b| a.name.cmp(&b.name));
}

/// Scan `base_dir` for artifacts.
///
/// A missing base directory yields an empty list. Non-directory entries are
/// ignored. Failing to list an existing directory is an error.
pub fn scan_artifacts(base_dir: &Path) -> IndexResult<Vec<ArtifactRecord>> {
    if !base_dir.exists() {
        debug!(dir = %base_dir.display(), "artifacts directory not found");
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(base_dir).map_err(|e| {
        IndexError::io(format!("failed to list {}", base_dir.display()), e)
    })?;

    let mut records = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            IndexError::io(format!("failed to read entry in {}", base_dir.display()), e)
        })?;
        let path = entry.path();
        if !path.is_dir() {
            trace!(path = %path.display(), "skipping non-directory entry");
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        let description = describe(&path);
        debug!(artifact = %name, %description, "found artifact");
        records.push(ArtifactRecord::new(name, description));
    }

    sort_records(&mut records);
    Ok(records)
}
