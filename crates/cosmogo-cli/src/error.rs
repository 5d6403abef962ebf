//! CLI error types.

use cosmogo_core::{Base36Error, IdentifierError};
use thiserror::Error;

/// CLI errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Base36 encoding or decoding failed.
    #[error("base36: {0}")]
    Base36(#[from] Base36Error),

    /// Invalid identifier configuration.
    #[error("identifier: {0}")]
    Identifier(#[from] IdentifierError),

    /// Result could not be serialized.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}
