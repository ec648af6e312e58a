//! Three-section validation report.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::section::ValidationSection;

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// True iff no section reports an error. Warnings never affect it.
    pub valid: bool,
    pub structural: ValidationSection,
    pub business_rules: ValidationSection,
    pub rich_results: ValidationSection,
}

impl ValidationReport {
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.sections().map(|s| s.errors.len()).sum()
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.sections().map(|s| s.warnings.len()).sum()
    }

    fn sections(&self) -> impl Iterator<Item = &ValidationSection> {
        [&self.structural, &self.business_rules, &self.rich_results].into_iter()
    }
}

/// Merge three independent sections. Sections are stored as given.
#[must_use]
pub fn aggregate(
    structural: ValidationSection,
    business_rules: ValidationSection,
    rich_results: ValidationSection,
) -> ValidationReport {
    let valid = structural.is_error_free()
        && business_rules.is_error_free()
        && rich_results.is_error_free();
    ValidationReport {
        valid,
        structural,
        business_rules,
        rich_results,
    }
}
