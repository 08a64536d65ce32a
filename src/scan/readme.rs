//! Description extraction from an artifact's README.
//!
//! The description is the first line of `README.md` that reads like prose:
//! headings, badges and monorepo boilerplate are skipped. Any failure to read
//! the file yields [`DEFAULT_DESCRIPTION`].

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use super::DEFAULT_DESCRIPTION;

/// File name looked up directly inside each artifact directory.
pub const README_FILE_NAME: &str = "README.md";

/// Returns true if a trimmed line qualifies as a description.
pub fn is_description_line(line: &str) -> bool {
    if line.is_empty() || line.starts_with('#') || line.starts_with("[!") {
        return false;
    }
    // "Part of the ... Monorepo" boilerplate
    !(line.contains("Part of") && line.contains("Monorepo"))
}

/// Scan lines in order and return the first qualifying one, trimmed.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. Stops reading as soon as a
/// line matches, so large files are never fully loaded. A read or UTF-8
/// error before a match is returned to the caller.
pub fn first_description_line<R: BufRead>(mut reader: R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let chunk = std::str::from_utf8(&buf)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        // A `\n`-terminated chunk may still hold several `\r`-separated lines
        for line in chunk.split(['\r', '\n']) {
            let trimmed = line.trim();
            if is_description_line(trimmed) {
                return Ok(Some(trimmed.to_string()));
            }
        }
    }
}

/// Description for the artifact rooted at `artifact_dir`.
pub fn describe(artifact_dir: &Path) -> String {
    let readme_path = artifact_dir.join(README_FILE_NAME);
    let file = match File::open(&readme_path) {
        Ok(f) => f,
        Err(e) => {
            debug!(path = %readme_path.display(), error = %e, "no readable README");
            return DEFAULT_DESCRIPTION.to_string();
        }
    };

    match first_description_line(BufReader::new(file)) {
        Ok(Some(line)) => line,
        Ok(None) => {
            debug!(path = %readme_path.display(), "README has no description line");
            DEFAULT_DESCRIPTION.to_string()
        }
        Err(e) => {
            debug!(path = %readme_path.display(), error = %e, "failed to read README");
            DEFAULT_DESCRIPTION.to_string()
        }
    }
}
