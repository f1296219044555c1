//! Category descriptor files for documentation sections

use crate::constants::CATEGORY_FILENAME;
use crate::errors::SyncError;
use crate::package::PackageKind;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Sidebar properties for a documentation section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDescriptor {
    pub label: String,
    pub position: u32,
    pub collapsible: bool,
    pub collapsed: bool,
}

impl CategoryDescriptor {
    pub fn for_kind(kind: PackageKind) -> Self {
        Self {
            label: kind.category_label().to_string(),
            position: kind.category_position(),
            collapsible: true,
            collapsed: false,
        }
    }

    /// Pretty JSON with two-space indentation and no trailing newline
    pub fn to_json(&self) -> Result<String, SyncError> {
        serde_json::to_string_pretty(self)
            .map_err(|source| SyncError::Serialize { what: CATEGORY_FILENAME.to_string(), source })
    }
}

/// Write `_category_.json` into `docs_dir` unless it already exists.
///
/// Returns whether the file was (or, with `dry_run`, would be) created.
/// An existing file is never rewritten.
pub fn write_category_file(
    docs_dir: &Path,
    descriptor: &CategoryDescriptor,
    dry_run: bool,
) -> Result<bool> {
    let path = docs_dir.join(CATEGORY_FILENAME);
    if path.exists() {
        return Ok(false);
    }

    let json = descriptor.to_json()?;
    if !dry_run {
        fs::write(&path, json).map_err(|e| SyncError::io(&path, e))?;
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_json_shape() {
        let json = CategoryDescriptor::for_kind(PackageKind::Npm).to_json().unwrap();
        assert_eq!(
            json,
            "{\n  \"label\": \"NPM Packages\",\n  \"position\": 1,\n  \
             \"collapsible\": true,\n  \"collapsed\": false\n}"
        );
    }

    #[test]
    fn test_writes_when_absent() {
        let temp = TempDir::new().unwrap();
        let descriptor = CategoryDescriptor::for_kind(PackageKind::Composer);

        assert!(write_category_file(temp.path(), &descriptor, false).unwrap());

        let content = fs::read_to_string(temp.path().join(CATEGORY_FILENAME)).unwrap();
        let parsed: CategoryDescriptor = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, descriptor);
        assert_eq!(parsed.label, "Composer Packages");
        assert_eq!(parsed.position, 2);
    }

    #[test]
    fn test_existing_file_left_untouched() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CATEGORY_FILENAME);
        let custom = "{\"label\": \"Hand Edited\", \"position\": 9}";
        fs::write(&path, custom).unwrap();

        let descriptor = CategoryDescriptor::for_kind(PackageKind::Npm);
        assert!(!write_category_file(temp.path(), &descriptor, false).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), custom);
    }

    #[test]
    fn test_dry_run_creates_nothing() {
        let temp = TempDir::new().unwrap();
        let descriptor = CategoryDescriptor::for_kind(PackageKind::Npm);

        assert!(write_category_file(temp.path(), &descriptor, true).unwrap());
        assert!(!temp.path().join(CATEGORY_FILENAME).exists());
    }
}
