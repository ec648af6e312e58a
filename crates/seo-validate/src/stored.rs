//! Persisted form of one regeneration.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use seo_core::needs_regeneration;
use seo_graph::{KnowledgeGraph, NormalizedGraph};
use serde::{Deserialize, Serialize};

use crate::report::ValidationReport;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoredStructuredData {
    #[schemars(with = "KnowledgeGraph")]
    pub graph: NormalizedGraph,
    pub report: ValidationReport,
    pub last_generated: DateTime<Utc>,
}

impl StoredStructuredData {
    /// Whether an entity updated at `updated_at` has outgrown this record.
    #[must_use]
    pub fn is_stale(&self, updated_at: DateTime<Utc>) -> bool {
        needs_regeneration(Some(self.last_generated), updated_at)
    }
}
