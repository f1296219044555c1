//! List command implementation

use anyhow::Result;
use colored::*;
use readme_sync::errors::print_warning;
use readme_sync::sync::Synchronizer;
use readme_sync::theme;

/// Print discovered packages and where their documents would go
pub fn list_packages(sync: &Synchronizer) -> Result<()> {
    let plan = sync.plan()?;
    println!(
        "\n{} {}",
        "Workspace:".dimmed(),
        sync.config().workspace_root.display()
    );

    for category in plan.categories() {
        println!("\n{}", category.kind.category_label().bold());
        println!("{}", theme::rule());

        if category.source_missing {
            print_warning(&format!(
                "{} packages directory not found: {}",
                category.kind,
                category.source_dir.display()
            ));
        }

        if category.packages.is_empty() {
            println!("  {}", "No packages found".dimmed());
            continue;
        }

        for desc in &category.packages {
            let status = if desc.readme_path.is_file() {
                theme::success(theme::success_symbol())
            } else {
                theme::warning(theme::warning_symbol())
            };
            println!(
                "  {} {} {} {}",
                status,
                theme::package_name(&desc.display_name()),
                theme::info_symbol(),
                desc.doc_path.display().to_string().dimmed()
            );
        }
    }

    println!();
    Ok(())
}
