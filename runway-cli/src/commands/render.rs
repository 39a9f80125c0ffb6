use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use runway_catalog::{Category, load_catalog};
use runway_site::{SiteError, splice_page};

use super::require_file;
use crate::error::CliError;
use crate::settings::Settings;

/// Splice freshly rendered cards into each page.
///
/// The catalog and every page must exist before anything is written. A page
/// without the model-grid marker is reported and skipped.
pub(crate) fn run_render(
    settings: &Settings,
    pages: Option<Vec<Category>>,
    catalog: Option<PathBuf>,
    dry_run: bool,
) -> Result<(), CliError> {
    let catalog_path = catalog.unwrap_or_else(|| settings.catalog.clone());
    let categories = pages.unwrap_or_else(|| Category::ALL.to_vec());

    require_file(&catalog_path)?;
    for &category in &categories {
        require_file(settings.pages.path_for(category))?;
    }

    let catalog = load_catalog(&catalog_path)?;
    log::info!(
        "Loaded {} models from {}",
        catalog.len(),
        catalog_path.display().if_supports_color(Stdout, |t| t.cyan()),
    );

    let mut updated = 0usize;
    let mut skipped = 0usize;
    for category in categories {
        let path = settings.pages.path_for(category);
        match splice_page(path, &catalog, category, dry_run) {
            Ok(report) => {
                updated += 1;
                let verb = match (dry_run, report.changed) {
                    (_, false) => "Unchanged",
                    (true, true) => "Would update",
                    (false, true) => "Updated",
                };
                log::info!(
                    "{} {} with {} models",
                    verb.if_supports_color(Stdout, |t| t.green()),
                    path.display(),
                    report.cards,
                );
            }
            Err(e @ SiteError::MarkerNotFound(_)) => {
                skipped += 1;
                log::warn!("{e}");
            }
            Err(e) => return Err(e.into()),
        }
    }

    log::info!(
        "{}",
        format!("Done: {updated} page(s) processed, {skipped} skipped")
            .if_supports_color(Stdout, |t| t.bold()),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Pages;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const CATALOG: &str = r#"{"models": [
  {"id": "sergei", "name": "SERGEI", "category": "men", "thumbnailUrl": "/m/sergei.webp"},
  {"id": "lucia", "name": "LUCIA", "category": "women", "thumbnailUrl": "/m/lucia.webp"}
]}"#;

    const PAGE: &str = "<main>\n    <div id=\"model-grid\" class=\"model-grid-container\">\n        <!-- Model cards will be generated here -->\n    </div>\n</main>\n";

    fn settings(dir: &Path) -> Settings {
        Settings {
            catalog: dir.join("models.json"),
            pages: Pages {
                men: dir.join("men.html"),
                women: dir.join("women.html"),
            },
            ..Settings::default()
        }
    }

    #[test]
    fn test_missing_page_aborts_before_writing() {
        let tmp = TempDir::new().unwrap();
        let settings = settings(tmp.path());
        fs::write(&settings.catalog, CATALOG).unwrap();
        fs::write(&settings.pages.men, PAGE).unwrap();

        let err = run_render(&settings, None, None, false).unwrap_err();
        assert!(matches!(err, CliError::MissingInput(_)));
        assert_eq!(fs::read_to_string(&settings.pages.men).unwrap(), PAGE);
        assert!(!settings.pages.women.exists());
    }

    #[test]
    fn test_missing_catalog_aborts_before_writing() {
        let tmp = TempDir::new().unwrap();
        let settings = settings(tmp.path());
        fs::write(&settings.pages.men, PAGE).unwrap();
        fs::write(&settings.pages.women, PAGE).unwrap();

        let err = run_render(&settings, None, None, false).unwrap_err();
        assert!(matches!(err, CliError::MissingInput(_)));
        assert_eq!(fs::read_to_string(&settings.pages.men).unwrap(), PAGE);
        assert_eq!(fs::read_to_string(&settings.pages.women).unwrap(), PAGE);
    }

    #[test]
    fn test_page_without_marker_is_skipped() {
        let tmp = TempDir::new().unwrap();
        let settings = settings(tmp.path());
        let unmarked = PAGE.replace("<!-- Model cards will be generated here -->", "");
        fs::write(&settings.catalog, CATALOG).unwrap();
        fs::write(&settings.pages.men, &unmarked).unwrap();
        fs::write(&settings.pages.women, PAGE).unwrap();

        run_render(&settings, None, None, false).unwrap();

        assert_eq!(fs::read_to_string(&settings.pages.men).unwrap(), unmarked);
        let women = fs::read_to_string(&settings.pages.women).unwrap();
        assert!(women.contains("portfolio.html?id=lucia"));
        assert!(!women.contains("sergei"));
    }

    #[test]
    fn test_pages_filter_limits_work() {
        let tmp = TempDir::new().unwrap();
        let settings = settings(tmp.path());
        fs::write(&settings.catalog, CATALOG).unwrap();
        fs::write(&settings.pages.men, PAGE).unwrap();

        // The women page is missing but not requested.
        run_render(&settings, Some(vec![Category::Men]), None, false).unwrap();
        assert!(
            fs::read_to_string(&settings.pages.men)
                .unwrap()
                .contains("portfolio.html?id=sergei")
        );
    }
}
