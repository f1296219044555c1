//! Constants used throughout the readme-sync crate

/// The README file looked up in every package directory
pub const README_FILENAME: &str = "README.md";

/// Manifest whose presence marks the root-level package as an NPM package
pub const NPM_MANIFEST_FILENAME: &str = "package.json";

/// Category descriptor file read by the documentation site
pub const CATEGORY_FILENAME: &str = "_category_.json";

/// Optional configuration file in the workspace root
pub const CONFIG_FILENAME: &str = "readme-sync.toml";

/// Sidebar position written into every generated document
pub const SIDEBAR_POSITION: u32 = 1;

/// Prefix marking hidden directories
pub const HIDDEN_PREFIX: &str = ".";

/// Directory names never treated as NPM packages
pub const NPM_EXCLUDED_NAMES: &[&str] = &["node_modules", "temp"];

/// Directory names never treated as Composer packages
pub const COMPOSER_EXCLUDED_NAMES: &[&str] =
    &["node_modules", "vendor", "project", "project_tmp"];

/// Substrings marking copied directories ("package copy", "package copy 2")
pub const COMPOSER_EXCLUDED_MARKERS: &[&str] = &[" copy"];
