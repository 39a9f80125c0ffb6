//! Model catalog data types and JSON I/O.
//!
//! This crate defines the record shape shared by every pipeline job and the
//! load/save functions for the catalog file. Jobs take a [`Catalog`] by value
//! or `&mut` and the caller decides where to persist the result.

pub mod defaults;
pub mod store;
pub mod types;

pub use defaults::{DEFAULT_MEDIA_FIELD_IDS, ensure_media_fields};
pub use store::{CatalogError, catalog_to_string, load_catalog, save_catalog};
pub use types::*;
