//! Sync orchestration
//!
//! A run goes through the same steps every time: make sure the section
//! directories exist, write missing category files, then copy NPM READMEs
//! followed by Composer READMEs. Nothing is rolled back; re-running after a
//! failure finishes the job because every step is idempotent.

use crate::category::{write_category_file, CategoryDescriptor};
use crate::config::SyncConfig;
use crate::constants::{NPM_MANIFEST_FILENAME, README_FILENAME};
use crate::copier::copy_package;
use crate::discover::{ExclusionRules, PackageEnumerator};
use crate::errors::SyncError;
use crate::package::{PackageDescriptor, PackageKind, PackageName};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Packages discovered for one section, before anything is written
#[derive(Debug, Clone)]
pub struct CategoryPlan {
    pub kind: PackageKind,
    pub source_dir: PathBuf,
    pub source_missing: bool,
    pub packages: Vec<PackageDescriptor>,
}

/// Discovery result for both sections
#[derive(Debug, Clone)]
pub struct SyncPlan {
    pub npm: CategoryPlan,
    pub composer: CategoryPlan,
}

impl SyncPlan {
    pub fn categories(&self) -> [&CategoryPlan; 2] {
        [&self.npm, &self.composer]
    }
}

/// What happened to one package during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageEvent {
    Copied { name: PackageName, doc_path: PathBuf },
    MissingReadme { name: PackageName, readme_path: PathBuf },
    Collision { name: PackageName, claimed_by: PackageName, doc_path: PathBuf },
}

/// Outcome of syncing one section
#[derive(Debug, Clone)]
pub struct CategoryReport {
    pub kind: PackageKind,
    pub source_dir: PathBuf,
    pub source_missing: bool,
    pub events: Vec<PackageEvent>,
}

impl CategoryReport {
    pub fn copied_count(&self) -> usize {
        self.events.iter().filter(|e| matches!(e, PackageEvent::Copied { .. })).count()
    }

    pub fn missing_count(&self) -> usize {
        self.events.iter().filter(|e| matches!(e, PackageEvent::MissingReadme { .. })).count()
    }

    pub fn collision_count(&self) -> usize {
        self.events.iter().filter(|e| matches!(e, PackageEvent::Collision { .. })).count()
    }
}

/// Outcome of a full run
#[derive(Debug, Clone)]
pub struct SyncReport {
    pub dry_run: bool,
    pub created_dirs: Vec<PathBuf>,
    pub created_categories: Vec<PackageKind>,
    pub npm: CategoryReport,
    pub composer: CategoryReport,
}

impl SyncReport {
    pub fn categories(&self) -> [&CategoryReport; 2] {
        [&self.npm, &self.composer]
    }

    pub fn total_copied(&self) -> usize {
        self.npm.copied_count() + self.composer.copied_count()
    }
}

/// Runs README synchronization for one workspace
#[derive(Debug, Clone)]
pub struct Synchronizer {
    config: SyncConfig,
    dry_run: bool,
}

impl Synchronizer {
    pub fn new(config: SyncConfig) -> Self {
        Self { config, dry_run: false }
    }

    /// Discover and report, but write nothing
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Discover packages for both sections
    pub fn plan(&self) -> Result<SyncPlan> {
        Ok(SyncPlan { npm: self.plan_npm()?, composer: self.plan_composer()? })
    }

    fn plan_npm(&self) -> Result<CategoryPlan> {
        let kind = PackageKind::Npm;
        let source_dir = self.config.npm_source_dir();
        let docs_dir = self.config.docs_dir(kind);
        let enumerator = PackageEnumerator::new(ExclusionRules::npm());

        let mut packages: Vec<PackageDescriptor> = enumerator
            .flat_packages(&source_dir)
            .with_context(|| format!("Failed to list NPM packages in {}", source_dir.display()))?
            .into_iter()
            .map(|name| PackageDescriptor::new(name, kind, &source_dir, &docs_dir))
            .collect();

        // The root-level package only counts when it is an NPM package with a README
        if let (Some(name), Some(dir)) = (&self.config.root_package, self.config.root_package_dir())
        {
            if dir.join(NPM_MANIFEST_FILENAME).is_file() && dir.join(README_FILENAME).is_file() {
                let name = PackageName::flat(name.as_str())?;
                packages.push(PackageDescriptor::at_dir(name, kind, &dir, &docs_dir));
            }
        }

        Ok(CategoryPlan { kind, source_missing: !source_dir.is_dir(), source_dir, packages })
    }

    fn plan_composer(&self) -> Result<CategoryPlan> {
        let kind = PackageKind::Composer;
        let source_dir = self.config.composer_source_dir();
        let docs_dir = self.config.docs_dir(kind);
        let enumerator = PackageEnumerator::new(ExclusionRules::composer());

        let packages = enumerator
            .nested_packages(&source_dir)
            .with_context(|| {
                format!("Failed to list Composer packages in {}", source_dir.display())
            })?
            .into_iter()
            .map(|name| PackageDescriptor::new(name, kind, &source_dir, &docs_dir))
            .collect();

        Ok(CategoryPlan { kind, source_missing: !source_dir.is_dir(), source_dir, packages })
    }

    /// Create missing section directories; returns the ones created
    fn ensure_dirs(&self) -> Result<Vec<PathBuf>> {
        let mut created = Vec::new();
        for kind in PackageKind::all() {
            let dir = self.config.docs_dir(kind);
            if dir.is_dir() {
                continue;
            }
            if !self.dry_run {
                fs::create_dir_all(&dir).map_err(|e| SyncError::io(&dir, e))?;
            }
            created.push(dir);
        }
        Ok(created)
    }

    /// Write category files that do not exist yet; returns the sections written
    fn write_categories(&self) -> Result<Vec<PackageKind>> {
        let mut created = Vec::new();
        for kind in PackageKind::all() {
            let descriptor = CategoryDescriptor::for_kind(kind);
            if write_category_file(&self.config.docs_dir(kind), &descriptor, self.dry_run)? {
                created.push(kind);
            }
        }
        Ok(created)
    }

    /// Copy every planned package of one section.
    ///
    /// A package whose destination was already written in this section is
    /// skipped and reported as a collision; the first claimant wins.
    fn sync_category(&self, plan: &CategoryPlan) -> Result<CategoryReport> {
        let mut claimed: HashMap<PathBuf, PackageName> = HashMap::new();
        let mut events = Vec::new();

        for desc in &plan.packages {
            if let Some(owner) = claimed.get(&desc.doc_path) {
                events.push(PackageEvent::Collision {
                    name: desc.name.clone(),
                    claimed_by: owner.clone(),
                    doc_path: desc.doc_path.clone(),
                });
                continue;
            }

            if copy_package(desc, self.dry_run)
                .with_context(|| format!("Failed to sync {} package {}", plan.kind, desc.name))?
            {
                claimed.insert(desc.doc_path.clone(), desc.name.clone());
                events.push(PackageEvent::Copied {
                    name: desc.name.clone(),
                    doc_path: desc.doc_path.clone(),
                });
            } else {
                events.push(PackageEvent::MissingReadme {
                    name: desc.name.clone(),
                    readme_path: desc.readme_path.clone(),
                });
            }
        }

        Ok(CategoryReport {
            kind: plan.kind,
            source_dir: plan.source_dir.clone(),
            source_missing: plan.source_missing,
            events,
        })
    }

    /// Full run: directories, category files, NPM packages, Composer packages
    pub fn run(&self) -> Result<SyncReport> {
        let created_dirs = self.ensure_dirs()?;
        let created_categories = self.write_categories()?;
        let plan = self.plan()?;
        let npm = self.sync_category(&plan.npm)?;
        let composer = self.sync_category(&plan.composer)?;

        Ok(SyncReport { dry_run: self.dry_run, created_dirs, created_categories, npm, composer })
    }
}
