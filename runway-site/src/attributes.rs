//! Ordered "KEY: value" attribute lines for model cards.
//!
//! Each category has one fixed display order. Keys outside that order never
//! render, whatever the catalog contains.

use runway_catalog::Category;
use serde_json::{Map, Value};

pub const MEN_ORDER: &[&str] = &["ESTATURA", "CAMISA", "PANTALON", "ZAPATOS", "CABELLO", "OJOS"];

pub const WOMEN_ORDER: &[&str] = &[
    "ESTATURA", "BUSTO", "CINTURA", "CADERA", "BLUSA", "PANTALON", "ZAPATOS", "CABELLO", "OJOS",
    "BRASSIER", "PANTY",
];

/// The display order for a category.
pub fn canonical_order(category: Category) -> &'static [&'static str] {
    match category {
        Category::Men => MEN_ORDER,
        Category::Women => WOMEN_ORDER,
    }
}

/// One rendered attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub key: &'static str,
    pub value: String,
}

impl Attribute {
    /// `KEY: value`
    pub fn line(&self) -> String {
        format!("{}: {}", self.key, self.value)
    }
}

/// Display form of an attribute value, or `None` if it should be skipped.
///
/// Empty strings and `null` are skipped. Numbers equal to their integer
/// truncation drop the fractional part (`36.0` → `36`).
pub fn format_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(match n.as_f64() {
            Some(f) if !n.is_i64() && !n.is_u64() && f.is_finite() && f.fract() == 0.0 => {
                if f == 0.0 {
                    "0".to_string()
                } else {
                    format!("{f:.0}")
                }
            }
            _ => n.to_string(),
        }),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// Qualifying attributes in canonical order for `category`.
pub fn attribute_lines(details: &Map<String, Value>, category: Category) -> Vec<Attribute> {
    canonical_order(category)
        .iter()
        .filter_map(|&key| {
            let value = format_value(details.get(key)?)?;
            Some(Attribute { key, value })
        })
        .collect()
}

/// Newline-joined `KEY: value` block, no trailing newline.
///
/// Returns an empty string when no attribute qualifies.
pub fn format_attributes(details: &Map<String, Value>, category: Category) -> String {
    attribute_lines(details, category)
        .iter()
        .map(Attribute::line)
        .collect::<Vec<_>>()
        .join("\n")
}
