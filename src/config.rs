//! Resolver configuration loader describing the public assets layout.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::layout::AssetLayout;

/// File name searched for by [`ResolverConfig::discover`].
pub const DEFAULT_CONFIG_FILE: &str = "assets.config.json";

/// Discoverable configuration describing where the public image directories live.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverConfig {
    /// Public assets root. Relative values resolve against the config file's directory.
    pub public_root: String,
    /// Gallery directory name beneath the public root.
    pub gallery_dir: String,
    /// Journey directory name beneath the public root.
    pub journey_dir: String,
    /// Project directory name beneath the public root.
    pub project_dir: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            public_root: "public".into(),
            gallery_dir: "gallery".into(),
            journey_dir: "journey".into(),
            project_dir: "project".into(),
        }
    }
}

impl ResolverConfig {
    /// Attempt to load configuration from the provided directory.
    ///
    /// A missing or unparsable file falls back to the defaults.
    pub fn discover(dir: &Path) -> Self {
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        match Self::load(&candidate) {
            Ok(config) => config,
            Err(err) => {
                tracing::debug!(%err, "using default resolver config");
                Self::default()
            }
        }
    }

    /// Read configuration from a specific JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Public root joined onto `base_dir` (a no-op when the root is absolute).
    pub fn public_root_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.public_root)
    }

    /// Build the layout, resolving the public root against `base_dir`.
    pub fn to_layout(&self, base_dir: &Path) -> AssetLayout {
        AssetLayout {
            public_root: self.public_root_path(base_dir),
            gallery_dir_name: self.gallery_dir.clone(),
            journey_dir_name: self.journey_dir.clone(),
            project_dir_name: self.project_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn discover_falls_back_to_defaults_without_a_file() {
        let dir = tempdir().unwrap();
        assert_eq!(ResolverConfig::discover(dir.path()), ResolverConfig::default());
    }

    #[test]
    fn discover_falls_back_to_defaults_on_invalid_json() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "{ not json").unwrap();
        assert_eq!(ResolverConfig::discover(dir.path()), ResolverConfig::default());
    }

    #[test]
    fn partial_files_keep_remaining_defaults() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            r#"{ "publicRoot": "static", "projectDir": "work" }"#,
        )
        .unwrap();

        let config = ResolverConfig::discover(dir.path());
        assert_eq!(config.public_root, "static");
        assert_eq!(config.project_dir, "work");
        assert_eq!(config.gallery_dir, "gallery");

        let layout = config.to_layout(dir.path());
        assert_eq!(layout.public_root, dir.path().join("static"));
        assert_eq!(layout.project_dir_name, "work");
    }

    #[test]
    fn load_reports_the_offending_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.json");
        match ResolverConfig::load(&path) {
            Err(ConfigError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected io error, got {other:?}"),
        }

        let bad = dir.path().join("bad.json");
        fs::write(&bad, "[1, 2").unwrap();
        assert!(matches!(
            ResolverConfig::load(&bad),
            Err(ConfigError::Parse { .. })
        ));
    }
}
