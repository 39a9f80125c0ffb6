//! Portfolio slug resolution for card links.
//!
//! Resolution order: the irregular-slug table, then the mechanical
//! derivation from the display name, then the model id.

use runway_catalog::Model;

/// Display names whose slug does not follow from the name.
///
/// Matched exactly, trailing spaces included. `FANNY` links to `daniela`;
/// that mapping is reproduced as the live site has it.
pub const IRREGULAR_SLUGS: &[(&str, &str)] = &[
    ("DAVID A", "david-a"),
    ("DAVID C", "david-c"),
    ("JUAN JOSE", "juan-jose"),
    ("MATIAS P", "matias-p"),
    ("SEBAS", "sebas"),
    ("SERGEI", "sergei"),
    ("FANNY", "daniela"),
    ("MA CARO", "maria-caro"),
    ("MA JULI", "maria-juli"),
    ("MARIA NELLY", "maria-nelly"),
    ("MARIA PAU", "maria-pau"),
    ("SOPHIA ", "sophia"),
    ("VALE E", "vale-e"),
    ("VALERIA A", "valeria-a"),
    ("VALERIA M", "valeria-m"),
];

/// Which rule produced a slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugSource {
    Irregular,
    Derived,
    Id,
}

impl SlugSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Irregular => "irregular",
            Self::Derived => "derived",
            Self::Id => "id",
        }
    }
}

/// A resolved slug and the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slug {
    pub value: String,
    pub source: SlugSource,
}

/// Exact lookup in [`IRREGULAR_SLUGS`].
pub fn irregular_slug(name: &str) -> Option<&'static str> {
    IRREGULAR_SLUGS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, slug)| *slug)
}

/// Lowercase, hyphenate spaces, and strip the Spanish accents.
pub fn derive_slug(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| match c {
            ' ' => '-',
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' => 'u',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}

pub fn resolve_slug(model: &Model) -> Slug {
    if let Some(slug) = irregular_slug(&model.name) {
        return Slug {
            value: slug.to_string(),
            source: SlugSource::Irregular,
        };
    }
    let derived = derive_slug(&model.name);
    if !derived.is_empty() {
        return Slug {
            value: derived,
            source: SlugSource::Derived,
        };
    }
    log::debug!("No slug derivable from name of {}, using id", model.id);
    Slug {
        value: model.id.clone(),
        source: SlugSource::Id,
    }
}
