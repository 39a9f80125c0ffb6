/// Errors that can occur while regenerating site pages.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// The page has no model-grid marker region; it was left untouched.
    #[error("Could not find model grid container in {0}")]
    MarkerNotFound(String),
}

impl SiteError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn marker_not_found(path: impl Into<String>) -> Self {
        Self::MarkerNotFound(path.into())
    }
}
