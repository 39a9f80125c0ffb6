//! Rebuild `portfolioImages` from the images on disk.
//!
//! Only an explicit allowlist of model ids is touched. For each resolved
//! model the thumbnail (element 0) is kept and the rest of the list is
//! replaced by the folder's images, sorted by file name.

use std::path::{Path, PathBuf};

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use runway_catalog::{Catalog, Category};

use crate::error::PortfolioError;
use crate::folders::{FolderIndex, FolderOverride, MatchMethod, default_overrides};

/// Characters left as-is in a path segment.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Model ids refreshed when none are configured.
pub const DEFAULT_REFRESH_IDS: &[&str] = &["floriane", "gaelle", "giulia"];

#[derive(Debug, Clone)]
pub struct RefreshOptions {
    /// Directory holding one subfolder per model. Also the prefix of the
    /// generated image paths.
    pub root: PathBuf,
    pub ids: Vec<String>,
    /// Only models in this category are considered.
    pub category: Option<Category>,
    /// Image file extension, compared case-insensitively.
    pub extension: String,
    pub overrides: Vec<FolderOverride>,
}

impl Default for RefreshOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("models/mujeres"),
            ids: DEFAULT_REFRESH_IDS.iter().map(|s| s.to_string()).collect(),
            category: Some(Category::Women),
            extension: "webp".to_string(),
            overrides: default_overrides(),
        }
    }
}

/// What happened to one allowlisted model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    Updated {
        folder: String,
        method: MatchMethod,
        images: usize,
    },
    /// No folder matched; images left untouched.
    Unresolved,
    /// The folder matched but could not be read; images left untouched.
    FolderError { folder: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRefresh {
    pub id: String,
    pub name: String,
    pub outcome: RefreshOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshReport {
    pub models: Vec<ModelRefresh>,
    /// Allowlisted ids with no matching model in the catalog.
    pub missing_ids: Vec<String>,
}

impl RefreshReport {
    pub fn updated(&self) -> usize {
        self.models
            .iter()
            .filter(|m| matches!(m.outcome, RefreshOutcome::Updated { .. }))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.models.len() - self.updated()
    }
}

/// Percent-encode each segment of a `/`-separated path and give it a
/// single leading slash. Backslashes count as separators.
pub fn encode_path(path: &str) -> String {
    let normalized = path.replace('\\', "/");
    let segments: Vec<String> = normalized
        .trim_start_matches('/')
        .split('/')
        .map(|segment| utf8_percent_encode(segment, SEGMENT).to_string())
        .collect();
    format!("/{}", segments.join("/"))
}

/// File names in `dir` with the given extension, sorted. Not recursive.
pub fn list_images(dir: &Path, extension: &str) -> std::io::Result<Vec<String>> {
    let mut names: Vec<String> = std::fs::read_dir(dir)?
        .flatten()
        .filter(|e| e.path().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
        })
        .filter_map(|e| match e.file_name().into_string() {
            Ok(name) => Some(name),
            Err(raw) => {
                log::warn!(
                    "Skipping image with a non-UTF-8 name in {}: {}",
                    dir.display(),
                    raw.to_string_lossy()
                );
                None
            }
        })
        .collect();
    names.sort();
    Ok(names)
}

/// Thumbnail (if any) followed by the encoded image paths.
pub fn rebuild_images(existing: &[String], image_paths: Vec<String>) -> Vec<String> {
    existing.iter().take(1).cloned().chain(image_paths).collect()
}

/// Refresh the allowlisted models' portfolio images.
///
/// Returns the whole catalog with only those models' `portfolioImages`
/// changed. Fails only if the portfolio root cannot be read.
pub fn refresh_portfolios(
    mut catalog: Catalog,
    options: &RefreshOptions,
) -> Result<(Catalog, RefreshReport), PortfolioError> {
    let index = FolderIndex::scan(&options.root)?;
    let prefix = options
        .root
        .to_string_lossy()
        .replace('\\', "/")
        .trim_end_matches('/')
        .to_string();

    let mut report = RefreshReport::default();

    for id in &options.ids {
        if !catalog.models.iter().any(|m| &m.id == id) {
            log::debug!("Allowlisted id {id} is not in the catalog");
            report.missing_ids.push(id.clone());
        }
    }

    for model in &mut catalog.models {
        if !options.ids.iter().any(|id| *id == model.id) {
            continue;
        }
        if options.category.is_some_and(|c| c != model.category) {
            continue;
        }

        let outcome = match index.resolve(model, &options.overrides) {
            None => RefreshOutcome::Unresolved,
            Some(found) => {
                let dir = options.root.join(&found.folder);
                match list_images(&dir, &options.extension) {
                    Ok(files) => {
                        let paths: Vec<String> = files
                            .iter()
                            .map(|f| encode_path(&format!("{prefix}/{}/{f}", found.folder)))
                            .collect();
                        let images = paths.len();
                        model.portfolio_images = rebuild_images(&model.portfolio_images, paths);
                        RefreshOutcome::Updated {
                            folder: found.folder,
                            method: found.method,
                            images,
                        }
                    }
                    Err(e) => RefreshOutcome::FolderError {
                        folder: found.folder,
                        message: e.to_string(),
                    },
                }
            }
        };

        report.models.push(ModelRefresh {
            id: model.id.clone(),
            name: model.name.clone(),
            outcome,
        });
    }

    Ok((catalog, report))
}
