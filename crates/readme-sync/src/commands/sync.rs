//! Sync command implementation

use anyhow::Result;
use colored::*;
use readme_sync::errors::print_warning;
use readme_sync::sync::{CategoryReport, PackageEvent, SyncReport, Synchronizer};
use readme_sync::theme;

/// Copy every package README into the docs tree
pub fn sync_readmes(sync: &Synchronizer, quiet: bool) -> Result<()> {
    println!("\n{}", "Starting README sync...".bold());
    if sync.is_dry_run() {
        println!("{} Dry run: no files will be written", theme::info(theme::info_symbol()));
    }
    println!("{}", theme::rule());

    let report = sync.run()?;
    print_report(&report, quiet);
    Ok(())
}

fn print_report(report: &SyncReport, quiet: bool) {
    let verb = if report.dry_run { "Would create" } else { "Created" };

    for dir in &report.created_dirs {
        println!(
            "{} {} directory: {}",
            theme::success(theme::success_symbol()),
            verb,
            dir.display()
        );
    }

    for kind in &report.created_categories {
        println!(
            "{} {} {} category file",
            theme::success(theme::success_symbol()),
            verb,
            kind.category_label()
        );
    }

    for category in report.categories() {
        println!("\n{}", format!("Syncing {}...", category.kind.category_label()).bold());
        println!("{}", theme::rule());
        print_category(category, quiet);
    }

    println!(
        "{} README sync complete: {} document(s) {}",
        theme::success(theme::success_symbol()).bold(),
        report.total_copied(),
        if report.dry_run { "would be written" } else { "written" }
    );
    println!("{}\n", theme::rule());
}

fn print_category(report: &CategoryReport, quiet: bool) {
    if report.source_missing {
        print_warning(&format!(
            "{} packages directory not found: {}",
            report.kind,
            report.source_dir.display()
        ));
    }

    for event in &report.events {
        match event {
            PackageEvent::Copied { name, doc_path } => {
                if !quiet {
                    let file =
                        doc_path.file_name().map(|f| f.to_string_lossy()).unwrap_or_default();
                    println!(
                        "  {} Copied: {} {} {}",
                        theme::success(theme::success_symbol()),
                        theme::package_name(&name.display_name()),
                        theme::info_symbol(),
                        file
                    );
                }
            }
            PackageEvent::MissingReadme { readme_path, .. } => {
                print_warning(&format!("README not found: {}", readme_path.display()));
            }
            PackageEvent::Collision { name, claimed_by, doc_path } => {
                print_warning(&format!(
                    "{} maps to {} which {} already wrote; skipped",
                    name,
                    doc_path.display(),
                    claimed_by
                ));
            }
        }
    }

    println!(
        "\n{} Synced {} {} package(s)\n",
        theme::success(theme::success_symbol()).bold(),
        report.copied_count(),
        report.kind
    );
}
