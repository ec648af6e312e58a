//! Cross-cutting error types.
//!
//! Domain-specific errors (e.g., `GraphError`, `SchemaError`) are defined in
//! their respective crates. Validation findings are never errors; they are
//! returned as structured data by the validator crates.

use thiserror::Error;

/// Errors that can be raised by any crate in the workspace.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A field the caller treats as mandatory is absent or blank.
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
