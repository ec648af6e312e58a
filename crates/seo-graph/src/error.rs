//! Graph construction error types.

use seo_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    /// The entity record cannot produce a graph (e.g., it has no name).
    #[error("invalid entity input: {0}")]
    Input(#[from] CoreError),

    /// The graph could not be converted to or from JSON.
    #[error("graph serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
