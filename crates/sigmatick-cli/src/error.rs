//! CLI error type and process exit-code mapping.

use sigmatick_core::{CatalogError, ValidationError};
use thiserror::Error;

/// Errors that abort a CLI invocation before a result envelope is produced.
///
/// Upstream fetch failures are not represented here: they are reported inside
/// the envelope so callers still receive metadata and a readable message.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("catalogue error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("{0}")]
    Command(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Validation(_) | CliError::Catalog(_) | CliError::Command(_) => 2,
            CliError::Serialization(_) => 4,
            CliError::Io(_) => 10,
        }
    }
}
