//! Package names, kinds and descriptors

use crate::constants::README_FILENAME;
use crate::errors::SyncError;
use std::fmt;
use std::path::{Path, PathBuf};

/// Which documentation section a package belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageKind {
    Npm,
    Composer,
}

impl PackageKind {
    /// Label used in the generated description ("NPM", "Composer")
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageKind::Npm => "NPM",
            PackageKind::Composer => "Composer",
        }
    }

    /// Sidebar label for the section
    pub fn category_label(&self) -> &'static str {
        match self {
            PackageKind::Npm => "NPM Packages",
            PackageKind::Composer => "Composer Packages",
        }
    }

    /// Sidebar position for the section
    pub fn category_position(&self) -> u32 {
        match self {
            PackageKind::Npm => 1,
            PackageKind::Composer => 2,
        }
    }

    /// Directory under `<site>/packages` holding the section's documents
    pub fn docs_subdir(&self) -> &'static str {
        match self {
            PackageKind::Npm => "npm-packages",
            PackageKind::Composer => "composer-packages",
        }
    }

    pub fn all() -> [PackageKind; 2] {
        [PackageKind::Npm, PackageKind::Composer]
    }
}

impl fmt::Display for PackageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name of a package, either a top-level directory or a parent/child pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PackageName {
    Flat(String),
    Nested { parent: String, child: String },
}

impl PackageName {
    /// Flat name from a single directory component
    pub fn flat(name: impl Into<String>) -> Result<Self, SyncError> {
        let name = name.into();
        check_component(&name)?;
        Ok(PackageName::Flat(name))
    }

    /// Nested name from a parent and child directory component
    pub fn nested(parent: impl Into<String>, child: impl Into<String>) -> Result<Self, SyncError> {
        let parent = parent.into();
        let child = child.into();
        check_component(&parent)?;
        check_component(&child)?;
        Ok(PackageName::Nested { parent, child })
    }

    /// Human-readable name: `name` or `parent/child`
    pub fn display_name(&self) -> String {
        match self {
            PackageName::Flat(name) => name.clone(),
            PackageName::Nested { parent, child } => format!("{}/{}", parent, child),
        }
    }

    /// Destination file stem: `name` or `parent-child`
    pub fn doc_stem(&self) -> String {
        match self {
            PackageName::Flat(name) => name.clone(),
            PackageName::Nested { parent, child } => format!("{}-{}", parent, child),
        }
    }

    /// Destination file name (`<stem>.md`)
    pub fn doc_filename(&self) -> String {
        format!("{}.md", self.doc_stem())
    }

    /// Package directory relative to its source root
    pub fn relative_dir(&self) -> PathBuf {
        match self {
            PackageName::Flat(name) => PathBuf::from(name),
            PackageName::Nested { parent, child } => Path::new(parent).join(child),
        }
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

fn check_component(name: &str) -> Result<(), SyncError> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(SyncError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// One README to copy: where it comes from and where it goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDescriptor {
    pub name: PackageName,
    pub kind: PackageKind,
    pub readme_path: PathBuf,
    pub doc_path: PathBuf,
}

impl PackageDescriptor {
    /// Build a descriptor for a package found under `source_root`
    pub fn new(
        name: PackageName,
        kind: PackageKind,
        source_root: &Path,
        docs_dir: &Path,
    ) -> Self {
        let readme_path = source_root.join(name.relative_dir()).join(README_FILENAME);
        let doc_path = docs_dir.join(name.doc_filename());
        Self { name, kind, readme_path, doc_path }
    }

    /// Descriptor whose package directory is given directly
    pub fn at_dir(
        name: PackageName,
        kind: PackageKind,
        package_dir: &Path,
        docs_dir: &Path,
    ) -> Self {
        let readme_path = package_dir.join(README_FILENAME);
        let doc_path = docs_dir.join(name.doc_filename());
        Self { name, kind, readme_path, doc_path }
    }

    pub fn display_name(&self) -> String {
        self.name.display_name()
    }
}
