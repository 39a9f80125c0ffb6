use thiserror::Error;

/// Errors that abort a portfolio refresh.
///
/// Problems with a single model's folder are not errors; they are recorded
/// in the [`RefreshReport`](crate::RefreshReport) and the run continues.
#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("Portfolio directory not found: {0}")]
    RootNotFound(String),

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

impl PortfolioError {
    pub fn root_not_found(path: impl Into<String>) -> Self {
        Self::RootNotFound(path.into())
    }

    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
