//! README synchronization library
//!
//! This library discovers README files in a monorepo's NPM-style and
//! Composer-style package directories and copies them into a documentation
//! site's content tree with frontmatter prepended.

pub mod category;
pub mod config;
pub mod constants;
pub mod copier;
pub mod discover;
pub mod errors;
pub mod frontmatter;
pub mod package;
pub mod sync;
pub mod theme;

pub use category::{write_category_file, CategoryDescriptor};
pub use config::SyncConfig;
pub use copier::copy_readme_with_frontmatter;
pub use discover::{ExclusionRules, PackageEnumerator};
pub use frontmatter::{compose_document, extract_title, title_from_name, Frontmatter};
pub use package::{PackageDescriptor, PackageKind, PackageName};
pub use sync::{CategoryPlan, CategoryReport, PackageEvent, SyncPlan, SyncReport, Synchronizer};

/// Re-export common error types
pub use anyhow::{Error, Result};
