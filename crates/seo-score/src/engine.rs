//! Evaluation and percentage rollup.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::SeoScoreConfig;
use crate::field::{FieldGroup, FieldStatus, FieldValidationResult};

/// Result of one scoring call. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreCard {
    pub percentage: u8,
    pub field_results: Vec<FieldValidationResult>,
}

impl ScoreCard {
    /// Rollup restricted to one group.
    #[must_use]
    pub fn group_percentage(&self, group: FieldGroup) -> u8 {
        self.percentage_where(|result| result.group == group)
    }

    /// Rollup over the results matching `keep`. Fields are not re-evaluated.
    #[must_use]
    pub fn percentage_where<F>(&self, keep: F) -> u8
    where
        F: Fn(&FieldValidationResult) -> bool,
    {
        let (earned, max) = self
            .field_results
            .iter()
            .filter(|result| keep(result))
            .fold((0_u64, 0_u64), |(earned, max), result| {
                (earned + u64::from(result.score), max + u64::from(result.max_score))
            });
        percentage(earned, max)
    }

    /// Results that are not `good`, most points lost first; ties keep
    /// config order.
    #[must_use]
    pub fn improvements(&self) -> Vec<&FieldValidationResult> {
        let mut pending: Vec<&FieldValidationResult> = self
            .field_results
            .iter()
            .filter(|result| result.status != FieldStatus::Good)
            .collect();
        pending.sort_by(|a, b| b.lost_points().cmp(&a.lost_points()));
        pending
    }
}

/// Score a record against a field table.
///
/// Fields not listed in `config` are ignored. Every field score is clamped
/// into `0..=max_score`.
#[must_use]
pub fn score(record: &Value, config: &SeoScoreConfig) -> ScoreCard {
    let field_results: Vec<FieldValidationResult> = config
        .fields
        .iter()
        .map(|field| {
            let value = lookup(record, &field.name);
            let evaluation = field.rule.evaluate(&field.label, value, record, field.max_score);
            FieldValidationResult {
                field: field.name.clone(),
                label: field.label.clone(),
                group: field.group,
                status: evaluation.status,
                message: evaluation.message,
                score: evaluation.score.min(field.max_score),
                max_score: field.max_score,
            }
        })
        .collect();

    let earned: u64 = field_results.iter().map(|r| u64::from(r.score)).sum();
    let card = ScoreCard {
        percentage: percentage(earned, u64::from(config.max_score())),
        field_results,
    };
    tracing::debug!(
        entity_type = %config.entity_type,
        percentage = card.percentage,
        fields = card.field_results.len(),
        "scored record"
    );
    card
}

/// `round(100 * earned / max)`, 0 when nothing is scoreable.
fn percentage(earned: u64, max: u64) -> u8 {
    if max == 0 {
        return 0;
    }
    let rounded = (200 * earned.min(max) + max) / (2 * max);
    u8::try_from(rounded).unwrap_or(100)
}

/// Resolve a dotted path. `null` counts as absent.
pub(crate) fn lookup<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(record, |current, key| current.get(key))
        .filter(|value| !value.is_null())
}
