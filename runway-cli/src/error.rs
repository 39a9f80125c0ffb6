use runway_catalog::CatalogError;
use runway_portfolio::PortfolioError;
use runway_site::SiteError;
use thiserror::Error;

/// Errors that abort a CLI run.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// A required input file does not exist; nothing was written
    #[error("Required file not found: {0}")]
    MissingInput(String),

    /// Catalog could not be read or written
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    /// Page could not be read or written
    #[error("{0}")]
    Site(#[from] SiteError),

    /// Portfolio refresh could not start
    #[error("{0}")]
    Portfolio(#[from] PortfolioError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn missing_input(path: &std::path::Path) -> Self {
        Self::MissingInput(path.display().to_string())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
