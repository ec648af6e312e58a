//! Pipeline error types.

use thiserror::Error;

/// Failures reported by a [`StructuredDataStore`](crate::StructuredDataStore).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not be reached or refused the operation.
    #[error("store backend error: {0}")]
    Backend(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] seo_config::ConfigError),

    #[error("Graph error: {0}")]
    Graph(#[from] seo_graph::GraphError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Schema error: {0}")]
    Schema(#[from] seo_schema::SchemaError),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
