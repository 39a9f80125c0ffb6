//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use runway_catalog::Category;

#[derive(Parser)]
#[command(name = "runway")]
#[command(about = "Regenerate the agency site's model pages and catalog", long_about = None)]
pub(crate) struct Cli {
    /// Settings file (default: ./runway.toml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Regenerate the model cards in the men/women pages
    Render {
        /// Pages to update (e.g., men,women; default: both)
        #[arg(long, value_delimiter = ',')]
        pages: Option<Vec<Category>>,

        /// Catalog file to read
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Report what would change without writing
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Rebuild portfolio image lists from the portfolio folders
    Portfolio {
        /// Model ids to refresh (e.g., floriane,gaelle)
        #[arg(long, value_delimiter = ',')]
        ids: Option<Vec<String>>,

        /// Directory containing one folder per model
        #[arg(long)]
        root: Option<PathBuf>,

        /// Catalog file to read
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Where to write the updated catalog (never the source file)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Report what would change without writing
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Add empty polaroids/videos lists to new models
    MediaFields {
        /// Model ids to patch (e.g., floriane,gaelle)
        #[arg(long, value_delimiter = ',')]
        ids: Option<Vec<String>>,

        /// Catalog file to patch in place
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Report what would change without writing
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// List catalog models with their resolved portfolio slugs
    List {
        /// Only list this category
        #[arg(long)]
        category: Option<Category>,

        /// Catalog file to read
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Inspect the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the effective settings and where they came from
    Show,

    /// Print the settings file path
    Path,
}
