use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use runway_catalog::{Category, load_catalog};
use runway_site::{attribute_lines, resolve_slug};

use super::require_file;
use crate::error::CliError;
use crate::settings::Settings;

/// Print each model with the slug its card links to.
pub(crate) fn run_list(
    settings: &Settings,
    category: Option<Category>,
    catalog: Option<PathBuf>,
) -> Result<(), CliError> {
    let path = catalog.unwrap_or_else(|| settings.catalog.clone());
    require_file(&path)?;
    let catalog = load_catalog(&path)?;

    let categories: Vec<Category> = match category {
        Some(c) => vec![c],
        None => Category::ALL.to_vec(),
    };

    for (i, category) in categories.into_iter().enumerate() {
        if i > 0 {
            log::info!("");
        }
        let models: Vec<_> = catalog.by_category(category).collect();
        log::info!(
            "{} ({}):",
            category.as_str().if_supports_color(Stdout, |t| t.bold()),
            models.len(),
        );

        for model in models {
            let slug = resolve_slug(model);
            let attributes = attribute_lines(&model.details, category).len();
            log::info!(
                "  {} [{}] {}",
                model.name.if_supports_color(Stdout, |t| t.bold()),
                slug.value.if_supports_color(Stdout, |t| t.cyan()),
                format!(
                    "{}, {} attributes, {} images",
                    slug.source.as_str(),
                    attributes,
                    model.portfolio_images.len()
                )
                .if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
    }
    Ok(())
}
