//! Directory-backed portfolio refresh.
//!
//! Rewrites the `portfolioImages` list of a fixed set of models from the
//! image files found in their portfolio folders. The catalog is taken by
//! value and returned; the caller decides where to save it.

pub mod error;
pub mod folders;
pub mod refresh;

pub use error::PortfolioError;
pub use folders::{
    FolderIndex, FolderMatch, FolderOverride, MatchMethod, default_overrides, normalize_name,
};
pub use refresh::{
    DEFAULT_REFRESH_IDS, ModelRefresh, RefreshOptions, RefreshOutcome, RefreshReport, encode_path,
    list_images, refresh_portfolios,
};
