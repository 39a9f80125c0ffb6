//! Placeholder media fields for newly added models.

use crate::types::Catalog;

/// Models that get empty `polaroids`/`videos` lists when none are given.
pub const DEFAULT_MEDIA_FIELD_IDS: &[&str] = &["floriane", "gaelle", "giulia"];

/// Add empty `polaroids` and `videos` lists to the listed models.
///
/// Lists that already exist are left alone, even when empty. Returns the ids
/// of the models that gained at least one field, in catalog order.
pub fn ensure_media_fields<S: AsRef<str>>(catalog: &mut Catalog, ids: &[S]) -> Vec<String> {
    let mut changed = Vec::new();
    for model in &mut catalog.models {
        if !ids.iter().any(|id| id.as_ref() == model.id) {
            continue;
        }
        let mut touched = false;
        if model.polaroids.is_none() {
            model.polaroids = Some(Vec::new());
            touched = true;
        }
        if model.videos.is_none() {
            model.videos = Some(Vec::new());
            touched = true;
        }
        if touched {
            log::debug!("Added media placeholders to {}", model.id);
            changed.push(model.id.clone());
        }
    }
    changed
}
