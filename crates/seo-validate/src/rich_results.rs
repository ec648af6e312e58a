//! Contract for the external rich-results checker.
//!
//! The checker itself lives outside this workspace. Implementations receive
//! the normalized graph and hand back findings plus whatever raw payload the
//! service produced; the report keeps that payload verbatim.

use std::future::Future;

use seo_graph::NormalizedGraph;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::section::ValidationSection;

#[derive(Debug, Error)]
pub enum RichResultsError {
    /// The checker could not be reached or did not answer in time.
    #[error("rich results checker unavailable: {0}")]
    Unavailable(String),

    /// The checker answered but refused the payload.
    #[error("rich results checker rejected the graph: {0}")]
    Rejected(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichResultsItem {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl RichResultsItem {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: None,
        }
    }

    #[must_use]
    pub fn at(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    fn render(&self) -> String {
        match &self.path {
            Some(path) => format!("{path}: {}", self.message),
            None => self.message.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RichResultsReport {
    pub valid: bool,
    #[serde(default)]
    pub errors: Vec<RichResultsItem>,
    #[serde(default)]
    pub warnings: Vec<RichResultsItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<Value>,
}

impl RichResultsReport {
    /// Clean report with no findings.
    #[must_use]
    pub const fn passing() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            raw: None,
        }
    }

    /// Flatten into a report section. The checker's own `valid` flag is kept
    /// only if it agrees with the error list; errors always make it invalid.
    #[must_use]
    pub fn into_section(self) -> ValidationSection {
        ValidationSection {
            valid: self.valid && self.errors.is_empty(),
            errors: self.errors.iter().map(RichResultsItem::render).collect(),
            warnings: self.warnings.iter().map(RichResultsItem::render).collect(),
            info: Vec::new(),
            raw: self.raw,
        }
    }
}

/// Capability to check a graph against a rich-results service.
pub trait RichResultsValidator: Send + Sync {
    fn validate(
        &self,
        graph: &NormalizedGraph,
    ) -> impl Future<Output = Result<RichResultsReport, RichResultsError>> + Send;
}

/// Stand-in for deployments without a checker: always passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRichResults;

impl RichResultsValidator for NoopRichResults {
    async fn validate(&self, _graph: &NormalizedGraph) -> Result<RichResultsReport, RichResultsError> {
        Ok(RichResultsReport::passing())
    }
}
