//! Replace the model grid of a static page with freshly rendered cards.
//!
//! The grid is found by exact substring search:
//!
//! ```text
//! <div id="model-grid" class="model-grid-container">
//!     <!-- Model cards will be generated here -->
//!     ...region body...
//! </div>
//! </main>
//! ```
//!
//! Everything before the placeholder comment and from the closing `</div>`
//! onward is copied through untouched. The whitespace between the last card
//! and the closing `</div>` is rebuilt on every run, so splicing the same
//! catalog twice gives byte-identical output.

use std::path::{Path, PathBuf};

use runway_catalog::{Catalog, Category};

use crate::card::render_cards;
use crate::error::SiteError;

pub const GRID_OPEN_TAG: &str = r#"<div id="model-grid" class="model-grid-container">"#;
pub const GRID_PLACEHOLDER: &str = "<!-- Model cards will be generated here -->";

const CLOSE_DIV: &str = "</div>";
const CLOSE_MAIN: &str = "</main>";
const CLOSING_INDENT: &str = "        ";

/// Byte offsets of the replaceable span inside a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerRegion {
    /// Just past the placeholder comment.
    pub body_start: usize,
    /// Start of the closing `</div>` that is followed by `</main>`.
    pub close_start: usize,
}

/// Find the model-grid region, or `None` if the page lacks it.
pub fn find_marker_region(doc: &str) -> Option<MarkerRegion> {
    let body_start = doc.match_indices(GRID_OPEN_TAG).find_map(|(open, _)| {
        let after = open + GRID_OPEN_TAG.len();
        let rest = &doc[after..];
        let trimmed = rest.trim_start();
        trimmed
            .starts_with(GRID_PLACEHOLDER)
            .then(|| after + (rest.len() - trimmed.len()) + GRID_PLACEHOLDER.len())
    })?;

    let close_start = doc[body_start..]
        .match_indices(CLOSE_DIV)
        .map(|(i, _)| body_start + i)
        .find(|&pos| {
            doc[pos + CLOSE_DIV.len()..]
                .trim_start()
                .starts_with(CLOSE_MAIN)
        })?;

    (body_start <= close_start).then_some(MarkerRegion {
        body_start,
        close_start,
    })
}

/// Rebuild `doc` with `cards` as the region body.
///
/// Fails with [`SiteError::MarkerNotFound`] when the marker region is
/// missing. The error names the document as `document`; [`splice_page`]
/// reports the page path instead.
pub fn splice_document(doc: &str, cards: &str) -> Result<String, SiteError> {
    let region =
        find_marker_region(doc).ok_or_else(|| SiteError::marker_not_found("document"))?;
    let mut out = String::with_capacity(doc.len() + cards.len());
    out.push_str(&doc[..region.body_start]);
    out.push('\n');
    out.push_str(cards);
    out.push_str(CLOSING_INDENT);
    out.push_str(&doc[region.close_start..]);
    Ok(out)
}

/// Outcome of splicing one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpliceReport {
    pub path: PathBuf,
    pub category: Category,
    /// Cards written into the region.
    pub cards: usize,
    /// Whether the new document differs from what was on disk.
    pub changed: bool,
}

/// Splice the cards for `category` into the page at `path`.
///
/// A page without the marker region is left untouched and reported as
/// [`SiteError::MarkerNotFound`]. With `dry_run` nothing is written.
pub fn splice_page(
    path: &Path,
    catalog: &Catalog,
    category: Category,
    dry_run: bool,
) -> Result<SpliceReport, SiteError> {
    let doc =
        std::fs::read_to_string(path).map_err(|e| SiteError::io(path.display().to_string(), e))?;

    let (cards, count) = render_cards(catalog, category);
    let updated = splice_document(&doc, &cards)
        .map_err(|_| SiteError::marker_not_found(path.display().to_string()))?;

    let changed = updated != doc;
    if changed && !dry_run {
        std::fs::write(path, &updated)
            .map_err(|e| SiteError::io(path.display().to_string(), e))?;
    }
    log::debug!(
        "Spliced {} {} cards into {} (changed: {})",
        count,
        category,
        path.display(),
        changed
    );

    Ok(SpliceReport {
        path: path.to_path_buf(),
        category,
        cards: count,
        changed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "<main>\n    <div id=\"model-grid\" class=\"model-grid-container\">\n        <!-- Model cards will be generated here -->\n        <p>old</p>\n    </div>\n</main>\n<footer></footer>\n";

    #[test]
    fn test_find_region() {
        let region = find_marker_region(PAGE).unwrap();
        assert!(PAGE[..region.body_start].ends_with(GRID_PLACEHOLDER));
        assert!(PAGE[region.close_start..].starts_with("</div>\n</main>"));
        assert!(PAGE[region.body_start..region.close_start].contains("<p>old</p>"));
    }

    #[test]
    fn test_splice_replaces_body_only() {
        let out = splice_document(PAGE, "CARD\n").unwrap();
        assert_eq!(
            out,
            "<main>\n    <div id=\"model-grid\" class=\"model-grid-container\">\n        <!-- Model cards will be generated here -->\nCARD\n        </div>\n</main>\n<footer></footer>\n"
        );
    }

    #[test]
    fn test_splice_is_idempotent() {
        let once = splice_document(PAGE, "A\nB\n").unwrap();
        let twice = splice_document(&once, "A\nB\n").unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_inner_divs_do_not_close_region() {
        let cards = "<div><div>x</div></div>\n";
        let once = splice_document(PAGE, cards).unwrap();
        let twice = splice_document(&once, cards).unwrap();
        assert_eq!(once, twice);
        assert!(twice.ends_with("        </div>\n</main>\n<footer></footer>\n"));
    }

    #[test]
    fn test_missing_placeholder() {
        let page = "<div id=\"model-grid\" class=\"model-grid-container\">\n</div>\n</main>";
        assert_eq!(find_marker_region(page), None);
        assert!(matches!(
            splice_document(page, "x"),
            Err(SiteError::MarkerNotFound(_))
        ));
    }

    #[test]
    fn test_missing_closing_sequence() {
        let page = "<div id=\"model-grid\" class=\"model-grid-container\"><!-- Model cards will be generated here --></div><footer>";
        assert_eq!(find_marker_region(page), None);
    }

    #[test]
    fn test_empty_region() {
        let page = "<div id=\"model-grid\" class=\"model-grid-container\"><!-- Model cards will be generated here --></div></main>";
        let out = splice_document(page, "").unwrap();
        assert!(out.ends_with("-->\n        </div></main>"));
    }
}
