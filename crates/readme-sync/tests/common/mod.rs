// Test infrastructure and utilities for readme-sync tests

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Monorepo layout builder on a temporary directory
pub struct TestWorkspace {
    pub root: TempDir,
}

impl TestWorkspace {
    /// Create an empty workspace
    pub fn new() -> std::io::Result<Self> {
        let root = TempDir::new()?;
        Ok(Self { root })
    }

    /// Get the root path
    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    /// Create a package directory, with a README if `readme` is given
    pub fn add_package(&self, rel: &str, readme: Option<&str>) -> std::io::Result<PathBuf> {
        let dir = self.root.path().join(rel);
        fs::create_dir_all(&dir)?;
        if let Some(content) = readme {
            fs::write(dir.join("README.md"), content)?;
        }
        Ok(dir)
    }

    /// NPM package under NPM_Package/
    pub fn add_npm_package(&self, name: &str, readme: Option<&str>) -> std::io::Result<PathBuf> {
        self.add_package(&format!("NPM_Package/{}", name), readme)
    }

    /// Composer package under COMPOSER_Package/ (`name` may be `parent/child`)
    pub fn add_composer_package(
        &self,
        name: &str,
        readme: Option<&str>,
    ) -> std::io::Result<PathBuf> {
        self.add_package(&format!("COMPOSER_Package/{}", name), readme)
    }

    /// Root-level Alert_Box package with a package.json manifest
    pub fn add_root_npm_package(&self, readme: &str) -> std::io::Result<PathBuf> {
        let dir = self.add_package("Alert_Box", Some(readme))?;
        fs::write(dir.join("package.json"), "{\"name\": \"alert-box\"}")?;
        Ok(dir)
    }

    /// Write an arbitrary file relative to the root
    pub fn write_file(&self, rel: &str, content: &str) -> std::io::Result<PathBuf> {
        let path = self.root.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Generated NPM document path
    pub fn npm_doc(&self, file: &str) -> PathBuf {
        self.root.path().join("docs/docs/packages/npm-packages").join(file)
    }

    /// Generated Composer document path
    pub fn composer_doc(&self, file: &str) -> PathBuf {
        self.root.path().join("docs/docs/packages/composer-packages").join(file)
    }

    /// Markdown files in a generated docs directory, sorted
    pub fn doc_files(&self, dir: &Path) -> Vec<String> {
        let mut files: Vec<String> = match fs::read_dir(dir) {
            Ok(entries) => entries
                .filter_map(|e| e.ok())
                .filter_map(|e| e.file_name().to_str().map(str::to_string))
                .filter(|name| name.ends_with(".md"))
                .collect(),
            Err(_) => Vec::new(),
        };
        files.sort();
        files
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new().expect("Failed to create test workspace")
    }
}

/// Split a generated document into its frontmatter and body
pub fn split_document(content: &str) -> (&str, &str) {
    assert!(content.starts_with("---\n"), "Document should start with frontmatter marker");
    let rest = &content[4..];
    let end = rest.find("\n---\n\n").expect("Frontmatter should be closed by ---");
    (&rest[..end], &rest[end + 6..])
}

/// Assert that a document carries valid YAML frontmatter and return it parsed
pub fn assert_valid_frontmatter(content: &str) -> serde_yaml::Value {
    let (frontmatter, _) = split_document(content);
    serde_yaml::from_str(frontmatter).expect("Frontmatter should be valid YAML")
}
