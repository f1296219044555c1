//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sync-readmes")]
#[command(about = "Sync package READMEs into the documentation site", long_about = None)]
#[command(after_help = "Runs 'sync' when no command is given.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Workspace root holding the package directories (defaults to .)
    #[arg(short, long, global = true)]
    pub workspace_root: Option<PathBuf>,

    /// Documentation site directory, relative to the workspace root
    #[arg(short, long, global = true)]
    pub site_dir: Option<PathBuf>,

    /// Only print warnings and the summary
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Copy READMEs into the docs tree with frontmatter
    Sync {
        /// Show what would be done without making changes
        #[arg(long)]
        dry_run: bool,
    },

    /// List discovered packages and their destination documents
    #[command(visible_alias = "ls")]
    List,
}
