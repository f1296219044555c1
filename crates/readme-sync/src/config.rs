use crate::constants::CONFIG_FILENAME;
use crate::errors::SyncError;
use crate::package::PackageKind;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Sync configuration with layered defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SyncConfig {
    /// Monorepo root every other path is resolved against
    pub workspace_root: PathBuf,

    /// Directory holding NPM-style packages
    pub npm_packages_dir: PathBuf,

    /// Directory holding Composer-style packages (flat and nested)
    pub composer_packages_dir: PathBuf,

    /// Root-level directory synced as an NPM package when it has a manifest
    pub root_package: Option<String>,

    /// Documentation site directory; generated docs land in `<site_dir>/packages`
    pub site_dir: PathBuf,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            workspace_root: PathBuf::from("."),
            npm_packages_dir: PathBuf::from("NPM_Package"),
            composer_packages_dir: PathBuf::from("COMPOSER_Package"),
            root_package: Some("Alert_Box".to_string()),
            site_dir: PathBuf::from("docs/docs"),
        }
    }
}

impl SyncConfig {
    /// Load configuration from all sources with proper precedence
    pub fn load(workspace_root: Option<&Path>) -> Result<Self> {
        let mut config = SyncConfig::default();

        if let Some(root) = workspace_root {
            config.workspace_root = root.to_path_buf();
        }

        // readme-sync.toml in the workspace root takes precedence over defaults
        if let Some(file_config) = Self::load_from_file(&config.workspace_root)? {
            config.merge(file_config);
        }

        config.validate()?;
        Ok(config)
    }

    /// Config rooted at `workspace_root` with every other field defaulted
    pub fn for_workspace(workspace_root: impl Into<PathBuf>) -> Self {
        Self { workspace_root: workspace_root.into(), ..Default::default() }
    }

    fn load_from_file(workspace_root: &Path) -> Result<Option<PartialConfig>> {
        let config_path = workspace_root.join(CONFIG_FILENAME);
        if !config_path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config: PartialConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        Ok(Some(config))
    }

    /// Merge partial config into this one (partial takes precedence for specified fields)
    fn merge(&mut self, other: PartialConfig) {
        if let Some(val) = other.npm_packages_dir {
            self.npm_packages_dir = val;
        }
        if let Some(val) = other.composer_packages_dir {
            self.composer_packages_dir = val;
        }
        if let Some(val) = other.root_package {
            // An empty name switches the root-level package off
            self.root_package = if val.is_empty() { None } else { Some(val) };
        }
        if let Some(val) = other.site_dir {
            self.site_dir = val;
        }
    }

    fn validate(&self) -> Result<(), SyncError> {
        if let Some(name) = &self.root_package {
            if name.contains(['/', '\\']) || name == "." || name == ".." {
                return Err(SyncError::Config(format!(
                    "root_package must be a single directory name, got '{}'",
                    name
                )));
            }
        }
        Ok(())
    }

    /// Source directory for NPM packages
    pub fn npm_source_dir(&self) -> PathBuf {
        self.workspace_root.join(&self.npm_packages_dir)
    }

    /// Source directory for Composer packages
    pub fn composer_source_dir(&self) -> PathBuf {
        self.workspace_root.join(&self.composer_packages_dir)
    }

    /// Directory of the root-level package, if one is configured
    pub fn root_package_dir(&self) -> Option<PathBuf> {
        self.root_package.as_ref().map(|name| self.workspace_root.join(name))
    }

    /// Destination directory for one documentation section
    pub fn docs_dir(&self, kind: PackageKind) -> PathBuf {
        self.workspace_root.join(&self.site_dir).join("packages").join(kind.docs_subdir())
    }
}

/// Partial configuration for deserializing from TOML with optional fields
#[derive(Debug, Deserialize)]
struct PartialConfig {
    npm_packages_dir: Option<PathBuf>,
    composer_packages_dir: Option<PathBuf>,
    root_package: Option<String>,
    site_dir: Option<PathBuf>,
}
