//! Pipeline settings (`runway.toml`).
//!
//! Resolution order:
//!
//! 1. `--config <path>` (must exist)
//! 2. `./runway.toml`
//! 3. `~/.config/runway/runway.toml`
//! 4. Built-in defaults
//!
//! Missing keys fall back to the defaults, and command-line flags override
//! whatever was loaded. Relative paths are relative to the working directory.

use std::fmt;
use std::path::{Path, PathBuf};

use runway_catalog::{Category, DEFAULT_MEDIA_FIELD_IDS};
use runway_portfolio::{DEFAULT_REFRESH_IDS, FolderOverride, RefreshOptions, default_overrides};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

pub(crate) const SETTINGS_FILE: &str = "runway.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    /// Catalog read by `render` and `list`.
    pub catalog: PathBuf,
    pub pages: Pages,
    pub portfolio: PortfolioSettings,
    pub media_fields: MediaFieldSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from("json/models_actualizado.json"),
            pages: Pages::default(),
            portfolio: PortfolioSettings::default(),
            media_fields: MediaFieldSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Pages {
    pub men: PathBuf,
    pub women: PathBuf,
}

impl Pages {
    pub(crate) fn path_for(&self, category: Category) -> &Path {
        match category {
            Category::Men => &self.men,
            Category::Women => &self.women,
        }
    }
}

impl Default for Pages {
    fn default() -> Self {
        Self {
            men: PathBuf::from("pages/men.html"),
            women: PathBuf::from("pages/women.html"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct PortfolioSettings {
    pub catalog: PathBuf,
    pub output: PathBuf,
    pub root: PathBuf,
    pub category: Option<Category>,
    pub extension: String,
    pub ids: Vec<String>,
    pub overrides: Vec<FolderOverride>,
}

impl Default for PortfolioSettings {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from("json/models.json"),
            output: PathBuf::from("json/models_updated_women.json"),
            root: PathBuf::from("models/mujeres"),
            category: Some(Category::Women),
            extension: "webp".to_string(),
            ids: DEFAULT_REFRESH_IDS.iter().map(|s| s.to_string()).collect(),
            overrides: default_overrides(),
        }
    }
}

impl PortfolioSettings {
    pub(crate) fn refresh_options(&self) -> RefreshOptions {
        RefreshOptions {
            root: self.root.clone(),
            ids: self.ids.clone(),
            category: self.category,
            extension: self.extension.clone(),
            overrides: self.overrides.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct MediaFieldSettings {
    pub catalog: PathBuf,
    pub ids: Vec<String>,
}

impl Default for MediaFieldSettings {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from("json/models.json"),
            ids: DEFAULT_MEDIA_FIELD_IDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Where the effective settings were read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingsSource {
    Flag(PathBuf),
    Local(PathBuf),
    User(PathBuf),
    Defaults,
}

impl SettingsSource {
    pub(crate) fn path(&self) -> Option<&Path> {
        match self {
            Self::Flag(p) | Self::Local(p) | Self::User(p) => Some(p),
            Self::Defaults => None,
        }
    }
}

impl fmt::Display for SettingsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(_) => write!(f, "--config"),
            Self::Local(_) => write!(f, "working directory"),
            Self::User(_) => write!(f, "user config"),
            Self::Defaults => write!(f, "defaults"),
        }
    }
}

/// Canonical path to the per-user settings file.
pub(crate) fn user_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("runway").join(SETTINGS_FILE))
}

/// Pick the settings file to read, without reading it.
pub(crate) fn locate_settings(
    explicit: Option<&Path>,
    cwd: &Path,
    user: Option<PathBuf>,
) -> Result<SettingsSource, CliError> {
    if let Some(p) = explicit {
        if !p.is_file() {
            return Err(CliError::missing_input(p));
        }
        return Ok(SettingsSource::Flag(p.to_path_buf()));
    }
    let local = cwd.join(SETTINGS_FILE);
    if local.is_file() {
        return Ok(SettingsSource::Local(local));
    }
    match user {
        Some(p) if p.is_file() => Ok(SettingsSource::User(p)),
        _ => Ok(SettingsSource::Defaults),
    }
}

/// Parse settings from TOML text.
pub(crate) fn parse_settings(text: &str) -> Result<Settings, CliError> {
    toml::from_str(text).map_err(|e| CliError::config(e.to_string()))
}

/// Locate and load the effective settings.
pub(crate) fn load_settings(explicit: Option<&Path>) -> Result<(Settings, SettingsSource), CliError> {
    let cwd = std::env::current_dir()?;
    let source = locate_settings(explicit, &cwd, user_settings_path())?;
    let settings = match source.path() {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            parse_settings(&text).map_err(|e| CliError::config(format!("{}: {e}", path.display())))?
        }
        None => Settings::default(),
    };
    log::debug!("Using settings from {source}");
    Ok((settings, source))
}
