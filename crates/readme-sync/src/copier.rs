//! README copying

use crate::errors::SyncError;
use crate::frontmatter::compose_document;
use crate::package::{PackageDescriptor, PackageKind, PackageName};
use anyhow::Result;
use std::fs;
use std::path::Path;

/// Copy a README to `dest` with frontmatter prepended.
///
/// Returns `Ok(false)` without touching anything when `src` does not exist.
/// The destination is overwritten unconditionally. With `dry_run` the
/// source is still read but nothing is written. Bytes that are not valid
/// UTF-8 are replaced with U+FFFD rather than failing the package.
pub fn copy_readme_with_frontmatter(
    src: &Path,
    dest: &Path,
    name: &PackageName,
    kind: PackageKind,
    dry_run: bool,
) -> Result<bool> {
    if !src.is_file() {
        return Ok(false);
    }

    let bytes = fs::read(src).map_err(|e| SyncError::io(src, e))?;
    let content = String::from_utf8_lossy(&bytes);
    let document = compose_document(&content, name, kind);

    if !dry_run {
        fs::write(dest, document).map_err(|e| SyncError::io(dest, e))?;
    }

    Ok(true)
}

/// Copy the README a descriptor points at
pub fn copy_package(desc: &PackageDescriptor, dry_run: bool) -> Result<bool> {
    copy_readme_with_frontmatter(
        &desc.readme_path,
        &desc.doc_path,
        &desc.name,
        desc.kind,
        dry_run,
    )
}
