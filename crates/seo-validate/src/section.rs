//! One validator's findings in report form.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ValidationSection {
    pub valid: bool,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub info: Vec<String>,
    /// Untouched payload from an external validator, when there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<serde_json::Value>,
}

impl ValidationSection {
    /// Section whose validity is derived from its error list.
    #[must_use]
    pub fn from_findings(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
            info: Vec::new(),
            raw: None,
        }
    }

    /// Placeholder for a validator that could not run: not valid, no findings.
    #[must_use]
    pub fn degraded() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_error_free(&self) -> bool {
        self.errors.is_empty()
    }
}
