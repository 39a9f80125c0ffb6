//! JSON loading and saving for the catalog file.
//!
//! Output is two-space indented with non-ASCII text written literally and
//! keys kept in file order, so saved catalogs diff cleanly against the
//! hand-maintained originals. Keys added since loading go after the keys
//! the file already had.

use std::collections::HashMap;
use std::path::Path;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::types::Catalog;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error reading {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("I/O error writing {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Load a catalog from a JSON file.
///
/// Fails with [`CatalogError::Read`] if the file is missing and with
/// [`CatalogError::Parse`] if it is not a catalog document.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::Read {
        path: path.display().to_string(),
        source: e,
    })?;
    let parse_error = |e| CatalogError::Parse {
        path: path.display().to_string(),
        source: e,
    };
    let doc: Value = serde_json::from_str(&contents).map_err(parse_error)?;
    let key_order = KeyOrder::capture(&doc);
    let mut catalog: Catalog = serde_json::from_value(doc).map_err(parse_error)?;
    catalog.key_order = key_order;
    log::debug!("Loaded {} models from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Render a catalog to the on-disk text form, trailing newline included.
pub fn catalog_to_string(catalog: &Catalog) -> Result<String, CatalogError> {
    let mut doc = serde_json::to_value(catalog)?;
    catalog.key_order.apply(&mut doc);
    let mut text = serde_json::to_string_pretty(&doc)?;
    text.push('\n');
    Ok(text)
}

/// Write a catalog to a JSON file, replacing its contents.
pub fn save_catalog(path: &Path, catalog: &Catalog) -> Result<(), CatalogError> {
    let text = catalog_to_string(catalog)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CatalogError::Write {
            path: parent.display().to_string(),
            source: e,
        })?;
    }
    std::fs::write(path, text).map_err(|e| CatalogError::Write {
        path: path.display().to_string(),
        source: e,
    })?;
    log::debug!("Saved {} models to {}", catalog.len(), path.display());
    Ok(())
}

// ── Key order ───────────────────────────────────────────────────────────────

/// Key order of a catalog file, captured on load and reapplied on save.
///
/// Typed fields always serialize in declaration order, so without this a
/// record written as `id, category, name` would come back as
/// `id, name, category`.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct KeyOrder {
    top: Vec<String>,
    /// Record key order by model id.
    records: HashMap<String, Vec<String>>,
}

impl KeyOrder {
    fn capture(doc: &Value) -> Self {
        let Some(top) = doc.as_object() else {
            return Self::default();
        };
        let records = top
            .get("models")
            .and_then(Value::as_array)
            .map(|models| {
                models
                    .iter()
                    .filter_map(Value::as_object)
                    .filter_map(|record| {
                        let id = record.get("id")?.as_str()?;
                        Some((id.to_string(), record.keys().cloned().collect()))
                    })
                    .collect()
            })
            .unwrap_or_default();
        Self {
            top: top.keys().cloned().collect(),
            records,
        }
    }

    fn apply(&self, doc: &mut Value) {
        let Some(top) = doc.as_object_mut() else {
            return;
        };
        reorder(top, &self.top);
        let Some(models) = top.get_mut("models").and_then(Value::as_array_mut) else {
            return;
        };
        for record in models.iter_mut().filter_map(Value::as_object_mut) {
            let order = record
                .get("id")
                .and_then(Value::as_str)
                .and_then(|id| self.records.get(id));
            if let Some(order) = order {
                reorder(record, order);
            }
        }
    }
}

/// Put the keys listed in `order` first, in that order. Other keys keep
/// their relative order after them.
fn reorder(map: &mut Map<String, Value>, order: &[String]) {
    if order.is_empty() {
        return;
    }
    let mut entries: Vec<(String, Value)> = std::mem::take(map).into_iter().collect();
    entries.sort_by_key(|(key, _)| {
        order
            .iter()
            .position(|k| k == key)
            .unwrap_or(order.len())
    });
    map.extend(entries);
}
