use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use runway_catalog::{ensure_media_fields, load_catalog, save_catalog};

use super::require_file;
use crate::error::CliError;
use crate::settings::Settings;

/// Add empty `polaroids`/`videos` lists to the listed models, in place.
pub(crate) fn run_media_fields(
    settings: &Settings,
    ids: Option<Vec<String>>,
    catalog: Option<PathBuf>,
    dry_run: bool,
) -> Result<(), CliError> {
    let path = catalog.unwrap_or_else(|| settings.media_fields.catalog.clone());
    let ids = ids.unwrap_or_else(|| settings.media_fields.ids.clone());
    require_file(&path)?;

    let mut catalog = load_catalog(&path)?;
    let changed = ensure_media_fields(&mut catalog, &ids);

    for id in &ids {
        if catalog.find(id).is_none() {
            log::warn!("No model with id {id} in {}", path.display());
        }
    }
    for id in &changed {
        log::info!("  Added polaroids/videos to {}", id.if_supports_color(Stdout, |t| t.bold()));
    }

    if changed.is_empty() {
        log::info!("Nothing to add; {} left as is", path.display());
    } else if dry_run {
        log::info!("Dry run: {} model(s) would be patched in {}", changed.len(), path.display());
    } else {
        save_catalog(&path, &catalog)?;
        log::info!(
            "{} {} with placeholder fields for {} model(s)",
            "Updated".if_supports_color(Stdout, |t| t.green()),
            path.display(),
            changed.len(),
        );
    }
    Ok(())
}
