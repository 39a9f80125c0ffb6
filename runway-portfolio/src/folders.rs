//! Matching catalog models to portfolio folders.
//!
//! Folder names on disk are typed by hand and rarely match a catalog field
//! exactly. The general rule compares names with case, spaces, hyphens and
//! underscores ignored. A short list of per-id overrides handles folders
//! that need a more specific match.

use std::collections::HashMap;
use std::path::Path;

use runway_catalog::Model;
use serde::{Deserialize, Serialize};

use crate::error::PortfolioError;

/// Uppercase and drop spaces, `-` and `_`.
pub fn normalize_name(name: &str) -> String {
    name.to_uppercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .collect()
}

/// A per-id folder rule: the first folder whose name contains every
/// substring (case-insensitive) is the model's folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderOverride {
    pub id: String,
    pub contains: Vec<String>,
}

impl FolderOverride {
    pub fn new(id: &str, contains: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            contains: contains.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn applies_to(&self, model: &Model) -> bool {
        self.id.eq_ignore_ascii_case(&model.id)
    }

    pub fn matches(&self, folder: &str) -> bool {
        let upper = folder.to_uppercase();
        !self.contains.is_empty()
            && self
                .contains
                .iter()
                .all(|needle| upper.contains(&needle.to_uppercase()))
    }
}

/// Overrides for the current women's portfolio folders.
pub fn default_overrides() -> Vec<FolderOverride> {
    vec![
        FolderOverride::new("floriane", &["FLORIANE", "RIBEIRO"]),
        FolderOverride::new("gaelle", &["GAELLE", "FRANCESA"]),
    ]
}

/// How a folder was matched to a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMethod {
    Name,
    Id,
    Override,
}

impl MatchMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Id => "id",
            Self::Override => "override",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderMatch {
    pub folder: String,
    pub method: MatchMethod,
}

/// The subfolders of a portfolio root, sorted by name.
#[derive(Debug, Clone, Default)]
pub struct FolderIndex {
    folders: Vec<String>,
    normalized: HashMap<String, usize>,
}

impl FolderIndex {
    /// Build from folder names. On normalized-name collisions the first
    /// name in sorted order wins.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut folders: Vec<String> = names.into_iter().map(Into::into).collect();
        folders.sort();
        folders.dedup();

        let mut normalized = HashMap::new();
        for (i, folder) in folders.iter().enumerate() {
            normalized.entry(normalize_name(folder)).or_insert(i);
        }
        Self {
            folders,
            normalized,
        }
    }

    /// Index the immediate subdirectories of `root`.
    pub fn scan(root: &Path) -> Result<Self, PortfolioError> {
        if !root.is_dir() {
            return Err(PortfolioError::root_not_found(root.display().to_string()));
        }
        let names: Vec<String> = std::fs::read_dir(root)
            .map_err(|e| PortfolioError::io(root.display().to_string(), e))?
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_dir())
            .filter_map(|e| match e.file_name().into_string() {
                Ok(name) => Some(name),
                Err(raw) => {
                    log::warn!(
                        "Skipping portfolio folder with a non-UTF-8 name: {}",
                        raw.to_string_lossy()
                    );
                    None
                }
            })
            .collect();
        log::debug!("Found {} portfolio folders in {}", names.len(), root.display());
        Ok(Self::from_names(names))
    }

    /// Folder whose normalized name equals the normalized `key`.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.normalized
            .get(&normalize_name(key))
            .map(|&i| self.folders[i].as_str())
    }

    /// Resolve the folder for a model.
    ///
    /// A model with an override is matched by that override alone: if no
    /// folder satisfies it the model is unresolved, even when the name or
    /// id would have matched.
    pub fn resolve(&self, model: &Model, overrides: &[FolderOverride]) -> Option<FolderMatch> {
        if let Some(rule) = overrides.iter().find(|o| o.applies_to(model)) {
            return self
                .folders
                .iter()
                .find(|f| rule.matches(f))
                .map(|f| FolderMatch {
                    folder: f.clone(),
                    method: MatchMethod::Override,
                });
        }

        if let Some(folder) = self.lookup(&model.name) {
            return Some(FolderMatch {
                folder: folder.to_string(),
                method: MatchMethod::Name,
            });
        }
        self.lookup(&model.id).map(|folder| FolderMatch {
            folder: folder.to_string(),
            method: MatchMethod::Id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runway_catalog::Category;

    fn model(id: &str, name: &str) -> Model {
        Model {
            id: id.to_string(),
            name: name.to_string(),
            category: Category::Women,
            thumbnail_url: String::new(),
            details: Default::default(),
            portfolio_images: Vec::new(),
            polaroids: None,
            videos: None,
            extra: Default::default(),
        }
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("Maria-Jose_ Lopez"), "MARIAJOSELOPEZ");
        assert_eq!(normalize_name("giulia"), "GIULIA");
    }

    #[test]
    fn test_resolve_by_name_then_id() {
        let index = FolderIndex::from_names(["ANA MARIA", "giulia"]);
        let by_name = index.resolve(&model("ana", "ANA-MARIA"), &[]).unwrap();
        assert_eq!(by_name.folder, "ANA MARIA");
        assert_eq!(by_name.method, MatchMethod::Name);

        let by_id = index.resolve(&model("giulia", "GIULIA B"), &[]).unwrap();
        assert_eq!(by_id.folder, "giulia");
        assert_eq!(by_id.method, MatchMethod::Id);

        assert_eq!(index.resolve(&model("zoe", "ZOE"), &[]), None);
    }

    #[test]
    fn test_override_takes_precedence() {
        let index = FolderIndex::from_names(["Floriane", "floriane ribeiro 2024"]);
        let found = index
            .resolve(&model("floriane", "FLORIANE"), &default_overrides())
            .unwrap();
        assert_eq!(found.folder, "floriane ribeiro 2024");
        assert_eq!(found.method, MatchMethod::Override);
    }

    #[test]
    fn test_unsatisfied_override_is_unresolved() {
        // "GAELLE" would match by name, but the override needs FRANCESA too.
        let index = FolderIndex::from_names(["GAELLE", "GAELLE BELGA"]);
        assert_eq!(
            index.resolve(&model("gaelle", "GAELLE"), &default_overrides()),
            None
        );
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_scan_skips_non_utf8_folders() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::create_dir(tmp.path().join("GIULIA")).unwrap();
        std::fs::create_dir(tmp.path().join(OsStr::from_bytes(b"LUC\xeda"))).unwrap();
        std::fs::write(tmp.path().join("notes.txt"), b"x").unwrap();

        let index = FolderIndex::scan(tmp.path()).unwrap();
        assert_eq!(index.folders, vec!["GIULIA"]);
    }

    #[test]
    fn test_override_needs_every_substring() {
        let rule = FolderOverride::new("x", &["ana", "lopez"]);
        assert!(rule.matches("ANA LOPEZ"));
        assert!(!rule.matches("ANA GOMEZ"));
        assert!(!FolderOverride::new("x", &[]).matches("ANY"));
    }
}
