//! Package directory discovery

use crate::constants::{
    COMPOSER_EXCLUDED_MARKERS, COMPOSER_EXCLUDED_NAMES, HIDDEN_PREFIX, NPM_EXCLUDED_NAMES,
    README_FILENAME,
};
use crate::package::PackageName;
use anyhow::{Context, Result};
use std::path::Path;
use walkdir::WalkDir;

/// Rules deciding which directory names are never packages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionRules {
    /// Names starting with this prefix are hidden
    pub hidden_prefix: String,
    /// Exact names to skip (dependency caches, template and tmp directories)
    pub names: Vec<String>,
    /// Substrings marking copied directories
    pub markers: Vec<String>,
}

impl ExclusionRules {
    /// Rules for the NPM package root
    pub fn npm() -> Self {
        Self {
            hidden_prefix: HIDDEN_PREFIX.to_string(),
            names: NPM_EXCLUDED_NAMES.iter().map(|s| s.to_string()).collect(),
            markers: Vec::new(),
        }
    }

    /// Rules for the Composer package root
    pub fn composer() -> Self {
        Self {
            hidden_prefix: HIDDEN_PREFIX.to_string(),
            names: COMPOSER_EXCLUDED_NAMES.iter().map(|s| s.to_string()).collect(),
            markers: COMPOSER_EXCLUDED_MARKERS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        (!self.hidden_prefix.is_empty() && name.starts_with(&self.hidden_prefix))
            || self.names.iter().any(|n| n == name)
            || self.markers.iter().any(|m| name.contains(m.as_str()))
    }
}

/// Lists package directories under a source root
#[derive(Debug, Clone)]
pub struct PackageEnumerator {
    rules: ExclusionRules,
}

impl PackageEnumerator {
    pub fn new(rules: ExclusionRules) -> Self {
        Self { rules }
    }

    /// Sorted names of the direct subdirectories of `root` that pass the exclusion rules.
    ///
    /// A missing root yields an empty list; callers decide whether to warn.
    pub fn list_dirs(&self, root: &Path) -> Result<Vec<String>> {
        if !root.is_dir() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(root).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry =
                entry.with_context(|| format!("Failed to read directory {}", root.display()))?;
            if !entry.file_type().is_dir() {
                continue;
            }
            // Non-UTF-8 names cannot be written into frontmatter
            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            if self.rules.is_excluded(name) {
                continue;
            }
            names.push(name.to_string());
        }

        Ok(names)
    }

    /// Every surviving subdirectory as a flat package, README or not
    pub fn flat_packages(&self, root: &Path) -> Result<Vec<PackageName>> {
        self.list_dirs(root)?
            .into_iter()
            .map(|name| PackageName::flat(name).map_err(anyhow::Error::from))
            .collect()
    }

    /// Flat and nested packages that carry a README.
    ///
    /// Flat candidates come first, then `parent/child` candidates, each in
    /// sorted order. Directories without a README are grouping directories
    /// and are left out.
    pub fn nested_packages(&self, root: &Path) -> Result<Vec<PackageName>> {
        let parents = self.list_dirs(root)?;
        let mut packages = Vec::new();

        for parent in &parents {
            if root.join(parent).join(README_FILENAME).is_file() {
                packages.push(PackageName::flat(parent.as_str())?);
            }
        }

        for parent in &parents {
            let parent_path = root.join(parent);
            for child in self.list_dirs(&parent_path)? {
                if parent_path.join(&child).join(README_FILENAME).is_file() {
                    packages.push(PackageName::nested(parent.as_str(), child)?);
                }
            }
        }

        Ok(packages)
    }
}
