//! Per-field outcome types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FieldStatus {
    Good,
    Warning,
    Error,
    Info,
}

/// Bucket used for partial rollups (e.g. metadata-only score).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum FieldGroup {
    Content,
    Metadata,
    Media,
    Contact,
    StructuredData,
}

/// What a rule says about one value, before the engine clamps the score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEvaluation {
    pub status: FieldStatus,
    pub message: String,
    pub score: u32,
}

impl FieldEvaluation {
    #[must_use]
    pub fn good(score: u32, message: impl Into<String>) -> Self {
        Self {
            status: FieldStatus::Good,
            message: message.into(),
            score,
        }
    }

    #[must_use]
    pub fn warning(score: u32, message: impl Into<String>) -> Self {
        Self {
            status: FieldStatus::Warning,
            message: message.into(),
            score,
        }
    }

    #[must_use]
    pub fn error(score: u32, message: impl Into<String>) -> Self {
        Self {
            status: FieldStatus::Error,
            message: message.into(),
            score,
        }
    }

    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            status: FieldStatus::Info,
            message: message.into(),
            score: 0,
        }
    }
}

/// One row of a score card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldValidationResult {
    pub field: String,
    pub label: String,
    pub group: FieldGroup,
    pub status: FieldStatus,
    pub message: String,
    pub score: u32,
    pub max_score: u32,
}

impl FieldValidationResult {
    #[must_use]
    pub const fn lost_points(&self) -> u32 {
        self.max_score.saturating_sub(self.score)
    }
}
