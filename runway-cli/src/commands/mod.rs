pub(crate) mod config;
pub(crate) mod list;
pub(crate) mod media_fields;
pub(crate) mod portfolio;
pub(crate) mod render;

use std::path::Path;

use crate::error::CliError;

/// Abort before doing any work if a required input is missing.
pub(crate) fn require_file(path: &Path) -> Result<(), CliError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(CliError::missing_input(path))
    }
}
