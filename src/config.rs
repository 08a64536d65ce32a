//! Run configuration.
//!
//! All paths the generator touches come from one [`IndexConfig`]. Values are
//! layered: built-in defaults, then an optional TOML file, then CLI flags.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{IndexError, IndexResult};

/// Default artifacts directory, relative to the working directory.
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUT_DIR: &str = "dist";

/// Template file name looked up next to the executable.
pub const TEMPLATE_FILE_NAME: &str = "index_template.html";

/// Shipped template, relative to the working directory.
pub const SHIPPED_TEMPLATE_PATH: &str = "templates/index_template.html";

pub const INDEX_HTML_FILE_NAME: &str = "index.html";
pub const MANIFEST_FILE_NAME: &str = "index.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
    pub artifacts_dir: PathBuf,
    pub template_path: PathBuf,
    pub out_dir: PathBuf,
    /// HTML-escape artifact names and descriptions
    pub escape_html: bool,
    /// Also write `index.json` next to `index.html`
    pub write_manifest: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        IndexConfig {
            artifacts_dir: PathBuf::from(DEFAULT_ARTIFACTS_DIR),
            template_path: default_template_path(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            escape_html: false,
            write_manifest: false,
        }
    }
}

/// Default template location.
///
/// A template installed next to the running executable wins; otherwise the
/// shipped [`SHIPPED_TEMPLATE_PATH`] under the working directory is used.
pub fn default_template_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(TEMPLATE_FILE_NAME)))
        .filter(|candidate| candidate.is_file())
        .unwrap_or_else(|| PathBuf::from(SHIPPED_TEMPLATE_PATH))
}

/// Values given on the command line. Set fields beat the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub artifacts_dir: Option<PathBuf>,
    pub template_path: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    /// Only ever switches escaping on
    pub escape_html: bool,
    /// Only ever switches the manifest on
    pub write_manifest: bool,
}

/// Keys accepted in the TOML config file. All are optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    artifacts_dir: Option<PathBuf>,
    template: Option<PathBuf>,
    out_dir: Option<PathBuf>,
    escape_html: Option<bool>,
    manifest: Option<bool>,
}

impl IndexConfig {
    /// Location of the rendered page.
    pub fn index_html_path(&self) -> PathBuf {
        self.out_dir.join(INDEX_HTML_FILE_NAME)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.out_dir.join(MANIFEST_FILE_NAME)
    }

    /// Overlay values from a TOML document onto `self`.
    pub fn merge_toml(mut self, s: &str) -> IndexResult<Self> {
        let raw: RawConfig = toml::from_str(s).map_err(|e| IndexError::Config(e.to_string()))?;
        if let Some(dir) = raw.artifacts_dir {
            self.artifacts_dir = dir;
        }
        if let Some(template) = raw.template {
            self.template_path = template;
        }
        if let Some(dir) = raw.out_dir {
            self.out_dir = dir;
        }
        if let Some(escape) = raw.escape_html {
            self.escape_html = escape;
        }
        if let Some(manifest) = raw.manifest {
            self.write_manifest = manifest;
        }
        Ok(self)
    }

    /// Overlay command-line values onto `self`.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(dir) = &overrides.artifacts_dir {
            self.artifacts_dir = dir.clone();
        }
        if let Some(template) = &overrides.template_path {
            self.template_path = template.clone();
        }
        if let Some(dir) = &overrides.out_dir {
            self.out_dir = dir.clone();
        }
        self.escape_html |= overrides.escape_html;
        self.write_manifest |= overrides.write_manifest;
        self
    }
}

/// Load a config file and layer it over the defaults.
pub fn load_index_config(path: &Path) -> IndexResult<IndexConfig> {
    let s = std::fs::read_to_string(path)
        .map_err(|e| IndexError::io(format!("failed to read config {}", path.display()), e))?;
    IndexConfig::default().merge_toml(&s)
}

/// Defaults, then the optional config file, then command-line values.
pub fn resolve_index_config(
    config_file: Option<&Path>,
    overrides: &ConfigOverrides,
) -> IndexResult<IndexConfig> {
    let base = match config_file {
        Some(path) => load_index_config(path)?,
        None => IndexConfig::default(),
    };
    Ok(base.with_overrides(overrides))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let cfg = IndexConfig::default();
        assert_eq!(cfg.artifacts_dir, PathBuf::from("artifacts"));
        assert_eq!(cfg.out_dir, PathBuf::from("dist"));
        assert_eq!(cfg.index_html_path(), PathBuf::from("dist/index.html"));
        assert!(cfg.template_path.ends_with(TEMPLATE_FILE_NAME));
        assert!(!cfg.escape_html);
        assert!(!cfg.write_manifest);
    }

    #[test]
    fn test_default_template_exists_from_crate_root() {
        // Tests run with the package root as working directory
        let cfg = IndexConfig::default();
        assert_eq!(cfg.template_path, PathBuf::from(SHIPPED_TEMPLATE_PATH));
        assert!(
            cfg.template_path.is_file(),
            "default template {} should exist",
            cfg.template_path.display()
        );
    }

    #[test]
    fn test_overrides_beat_config_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("index.toml");
        std::fs::write(
            &path,
            "artifacts_dir = \"from-file\"\nout_dir = \"file-dist\"\nmanifest = true\n",
        )
        .unwrap();

        let overrides = ConfigOverrides {
            out_dir: Some(PathBuf::from("cli-dist")),
            escape_html: true,
            ..ConfigOverrides::default()
        };
        let cfg = resolve_index_config(Some(&path), &overrides).unwrap();

        assert_eq!(cfg.out_dir, PathBuf::from("cli-dist"));
        assert_eq!(cfg.artifacts_dir, PathBuf::from("from-file"));
        assert!(cfg.escape_html);
        // An unset flag does not switch off a value from the file
        assert!(cfg.write_manifest);
        assert_eq!(cfg.template_path, PathBuf::from(SHIPPED_TEMPLATE_PATH));
    }

    #[test]
    fn test_overrides_without_config_file() {
        let overrides = ConfigOverrides {
            artifacts_dir: Some(PathBuf::from("site")),
            template_path: Some(PathBuf::from("page.html")),
            ..ConfigOverrides::default()
        };
        let cfg = resolve_index_config(None, &overrides).unwrap();
        assert_eq!(cfg.artifacts_dir, PathBuf::from("site"));
        assert_eq!(cfg.template_path, PathBuf::from("page.html"));
        assert_eq!(cfg.out_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_empty_overrides_are_identity() {
        let cfg = IndexConfig::default().with_overrides(&ConfigOverrides::default());
        assert_eq!(cfg, IndexConfig::default());
    }

    #[test]
    fn test_merge_partial_toml() {
        let cfg = IndexConfig::default()
            .merge_toml("out_dir = \"public\"\nescape_html = true\n")
            .unwrap();
        assert_eq!(cfg.out_dir, PathBuf::from("public"));
        assert!(cfg.escape_html);
        assert_eq!(cfg.artifacts_dir, PathBuf::from("artifacts"));
    }

    #[test]
    fn test_merge_empty_toml_keeps_defaults() {
        let cfg = IndexConfig::default().merge_toml("").unwrap();
        assert_eq!(cfg, IndexConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = IndexConfig::default().merge_toml("artefacts = \"x\"\n");
        assert!(matches!(result, Err(IndexError::Config(_))));
    }

    #[test]
    fn test_load_index_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("index.toml");
        std::fs::write(
            &path,
            "artifacts_dir = \"site/artifacts\"\ntemplate = \"scripts/index_template.html\"\nmanifest = true\n",
        )
        .unwrap();

        let cfg = load_index_config(&path).unwrap();
        assert_eq!(cfg.artifacts_dir, PathBuf::from("site/artifacts"));
        assert_eq!(cfg.template_path, PathBuf::from("scripts/index_template.html"));
        assert!(cfg.write_manifest);
    }

    #[test]
    fn test_load_missing_config_errors() {
        let temp = TempDir::new().unwrap();
        let result = load_index_config(&temp.path().join("missing.toml"));
        assert!(matches!(result, Err(IndexError::Io { .. })));
    }
}
