//! Declarative scoring tables.

use crate::field::FieldGroup;
use crate::rule::FieldRule;

/// One scored field: where to read it, how much it is worth, how to judge it.
#[derive(Debug, Clone)]
pub struct FieldValidator {
    /// Record key; dots reach into nested objects (`logo.url`).
    pub name: String,
    pub label: String,
    pub max_score: u32,
    pub group: FieldGroup,
    pub rule: FieldRule,
}

impl FieldValidator {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        max_score: u32,
        group: FieldGroup,
        rule: FieldRule,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            max_score,
            group,
            rule,
        }
    }
}

/// Ordered field table for one entity type.
#[derive(Debug, Clone)]
pub struct SeoScoreConfig {
    pub entity_type: String,
    pub fields: Vec<FieldValidator>,
}

impl SeoScoreConfig {
    #[must_use]
    pub fn new(entity_type: impl Into<String>, fields: Vec<FieldValidator>) -> Self {
        Self {
            entity_type: entity_type.into(),
            fields,
        }
    }

    /// Sum of every field's maximum.
    #[must_use]
    pub fn max_score(&self) -> u32 {
        self.fields.iter().map(|f| f.max_score).sum()
    }
}
