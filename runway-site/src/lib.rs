//! Static page generation for the agency site.
//!
//! Turns catalog records into model-grid cards and splices them into the
//! existing men/women pages.

pub mod attributes;
pub mod card;
pub mod error;
pub mod slug;
pub mod splice;

pub use attributes::{Attribute, attribute_lines, canonical_order, format_attributes};
pub use card::{render_card, render_cards};
pub use error::SiteError;
pub use slug::{Slug, SlugSource, resolve_slug};
pub use splice::{SpliceReport, splice_document, splice_page};
