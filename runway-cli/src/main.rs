//! runway CLI
//!
//! Batch jobs that keep the agency site in step with the model catalog.

mod cli_types;
mod commands;
mod error;
mod logging;
mod settings;

use std::process::ExitCode;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
use error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.quiet, cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let (settings, source) = settings::load_settings(cli.config.as_deref())?;

    match cli.command {
        Commands::Render {
            pages,
            catalog,
            dry_run,
        } => commands::render::run_render(&settings, pages, catalog, dry_run),
        Commands::Portfolio {
            ids,
            root,
            catalog,
            output,
            dry_run,
        } => commands::portfolio::run_portfolio(&settings, ids, root, catalog, output, dry_run),
        Commands::MediaFields {
            ids,
            catalog,
            dry_run,
        } => commands::media_fields::run_media_fields(&settings, ids, catalog, dry_run),
        Commands::List { category, catalog } => {
            commands::list::run_list(&settings, category, catalog)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(&settings, &source),
            ConfigAction::Path => {
                commands::config::run_config_path(&source);
                Ok(())
            }
        },
    }
}
