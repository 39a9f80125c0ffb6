//! Data model types for the model catalog.
//!
//! The catalog is a single JSON document with a top-level `models` list.
//! Fields this crate does not know about are kept in `extra` maps so a
//! load → save cycle writes the full original data back.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::store::KeyOrder;

// ── Category ────────────────────────────────────────────────────────────────

/// Which roster a model belongs to. Selects the attribute display order,
/// the target page, and the portfolio folder rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Men,
    Women,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Men, Category::Women];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Men => "men",
            Self::Women => "women",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "men" => Ok(Self::Men),
            "women" => Ok(Self::Women),
            other => Err(format!("unknown category '{other}' (expected men or women)")),
        }
    }
}

// ── Model ───────────────────────────────────────────────────────────────────

/// One person in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique id; fallback URL slug and portfolio folder lookup key.
    pub id: String,
    /// Display name, uppercase by convention.
    pub name: String,
    pub category: Category,
    pub thumbnail_url: String,
    /// Attribute code (e.g. `ESTATURA`) to value, in file order.
    #[serde(default)]
    pub details: Map<String, Value>,
    /// Element 0 is the thumbnail by convention.
    #[serde(default)]
    pub portfolio_images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polaroids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub videos: Option<Vec<String>>,
    /// Any other record fields, carried through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Model {
    /// Polaroid paths; empty when the field is absent.
    pub fn polaroids(&self) -> &[String] {
        self.polaroids.as_deref().unwrap_or_default()
    }

    /// Video URLs; empty when the field is absent.
    pub fn videos(&self) -> &[String] {
        self.videos.as_deref().unwrap_or_default()
    }

    /// The portfolio thumbnail (first portfolio image), if any.
    pub fn portfolio_thumbnail(&self) -> Option<&str> {
        self.portfolio_images.first().map(String::as_str)
    }
}

// ── Catalog ─────────────────────────────────────────────────────────────────

/// The whole catalog document. Owned and passed explicitly between jobs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub models: Vec<Model>,
    /// Top-level keys other than `models`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    /// Key order of the file this catalog was loaded from.
    #[serde(skip)]
    pub(crate) key_order: KeyOrder,
}

impl Catalog {
    pub fn new(models: Vec<Model>) -> Self {
        Self {
            models,
            extra: Map::new(),
            key_order: KeyOrder::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Models in the given category, in catalog order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Model> {
        self.models.iter().filter(move |m| m.category == category)
    }

    pub fn find(&self, id: &str) -> Option<&Model> {
        self.models.iter().find(|m| m.id == id)
    }
}
