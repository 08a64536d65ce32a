pub mod config;
pub mod generate_cmd;
pub mod render;
pub mod scan;

use std::path::PathBuf;

use thiserror::Error;

pub use config::IndexConfig;
pub use generate_cmd::GenerateSummary;
pub use scan::{ArtifactRecord, DEFAULT_DESCRIPTION, scan_artifacts};

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read template {}: {source}", .path.display())]
    Template {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Config(String),
    #[error("{0}")]
    Message(String),
}

impl IndexError {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        IndexError::Io {
            context: context.into(),
            source,
        }
    }
}

pub type IndexResult<T> = Result<T, IndexError>;

// Shared helpers
/// Current UTC time as an RFC 3339 string, for stamping builds.
pub fn now_rfc3339() -> IndexResult<String> {
    use time::OffsetDateTime;
    use time::format_description::well_known::Rfc3339;
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|e| IndexError::Message(format!("failed to format timestamp: {e}")))
}

/// Pick the build timestamp: the current time when `now` is set, else the
/// explicit value as given.
pub fn resolve_build_timestamp(explicit: Option<&str>, now: bool) -> IndexResult<Option<String>> {
    if now {
        return now_rfc3339().map(Some);
    }
    Ok(explicit.map(str::to_string))
}
