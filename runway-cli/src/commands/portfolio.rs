use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use runway_catalog::{load_catalog, save_catalog};
use runway_portfolio::{RefreshOutcome, refresh_portfolios};

use super::require_file;
use crate::error::CliError;
use crate::settings::Settings;

/// Rebuild the allowlisted models' portfolio images and write the result to
/// a separate catalog file.
pub(crate) fn run_portfolio(
    settings: &Settings,
    ids: Option<Vec<String>>,
    root: Option<PathBuf>,
    catalog: Option<PathBuf>,
    output: Option<PathBuf>,
    dry_run: bool,
) -> Result<(), CliError> {
    let source = catalog.unwrap_or_else(|| settings.portfolio.catalog.clone());
    let output = output.unwrap_or_else(|| settings.portfolio.output.clone());
    let mut options = settings.portfolio.refresh_options();
    if let Some(ids) = ids {
        options.ids = ids;
    }
    if let Some(root) = root {
        options.root = root;
    }

    require_file(&source)?;
    if same_file(&source, &output) {
        return Err(CliError::config(format!(
            "portfolio output {} must differ from the source catalog",
            output.display()
        )));
    }

    let catalog = load_catalog(&source)?;
    let (catalog, report) = refresh_portfolios(catalog, &options)?;

    for id in &report.missing_ids {
        log::warn!("No model with id {id} in {}", source.display());
    }
    for entry in &report.models {
        match &entry.outcome {
            RefreshOutcome::Updated {
                folder,
                method,
                images,
            } => {
                log::info!(
                    "Updated portfolio for {} with {} images {}",
                    entry.name.if_supports_color(Stdout, |t| t.bold()),
                    images,
                    format!("({folder}, by {})", method.as_str())
                        .if_supports_color(Stdout, |t| t.dimmed()),
                );
            }
            RefreshOutcome::Unresolved => {
                log::warn!("No folder found for model {} (ID: {})", entry.name, entry.id);
            }
            RefreshOutcome::FolderError { folder, message } => {
                log::warn!("Error processing folder {folder} for {}: {message}", entry.id);
            }
        }
    }

    if dry_run {
        log::info!(
            "Dry run: {} model(s) would be updated in {}",
            report.updated(),
            output.display()
        );
        return Ok(());
    }

    save_catalog(&output, &catalog)?;
    log::info!(
        "{} {} ({} updated, {} skipped)",
        "Saved".if_supports_color(Stdout, |t| t.green()),
        output.display(),
        report.updated(),
        report.skipped(),
    );
    Ok(())
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const CATALOG: &str = r#"{"models": [
  {"id": "giulia", "name": "GIULIA", "category": "women", "thumbnailUrl": "/t.webp", "portfolioImages": ["/t.webp"]}
]}"#;

    fn setup(dir: &Path) -> (Settings, PathBuf) {
        let source = dir.join("models.json");
        fs::write(&source, CATALOG).unwrap();
        let root = dir.join("mujeres");
        fs::create_dir_all(root.join("giulia")).unwrap();
        fs::write(root.join("giulia").join("01.webp"), b"img").unwrap();

        let mut settings = Settings::default();
        settings.portfolio.catalog = source.clone();
        settings.portfolio.root = root;
        (settings, source)
    }

    #[test]
    fn test_output_over_source_is_refused() {
        let tmp = TempDir::new().unwrap();
        let (settings, source) = setup(tmp.path());

        let aliases = [
            source.clone(),
            tmp.path().join(".").join("models.json"),
            tmp.path().join("mujeres").join("..").join("models.json"),
        ];
        for output in aliases {
            let err = run_portfolio(&settings, None, None, None, Some(output.clone()), false)
                .unwrap_err();
            assert!(matches!(err, CliError::Config(_)), "{}", output.display());
            assert_eq!(fs::read_to_string(&source).unwrap(), CATALOG);
        }
    }

    #[test]
    fn test_writes_separate_output() {
        let tmp = TempDir::new().unwrap();
        let (settings, source) = setup(tmp.path());
        let output = tmp.path().join("out").join("models_updated.json");

        run_portfolio(&settings, None, None, None, Some(output.clone()), false).unwrap();

        assert_eq!(fs::read_to_string(&source).unwrap(), CATALOG);
        let written = fs::read_to_string(&output).unwrap();
        assert!(written.contains("/giulia/01.webp"));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let (settings, _) = setup(tmp.path());
        let output = tmp.path().join("models_updated.json");

        run_portfolio(&settings, None, None, None, Some(output.clone()), true).unwrap();
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_source_aborts() {
        let tmp = TempDir::new().unwrap();
        let (settings, _) = setup(tmp.path());
        let output = tmp.path().join("models_updated.json");

        let err = run_portfolio(
            &settings,
            None,
            None,
            Some(tmp.path().join("nope.json")),
            Some(output.clone()),
            false,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::MissingInput(_)));
        assert!(!output.exists());
    }
}
