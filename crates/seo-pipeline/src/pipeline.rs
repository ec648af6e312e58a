//! Regeneration orchestration.

use std::any::Any;
use std::sync::Arc;

use chrono::Utc;
use seo_config::{RichResultsConfig, SeoConfig};
use seo_core::EntityRecord;
use seo_graph::{GraphBuilder, NormalizedGraph, normalize};
use seo_schema::SchemaRegistry;
use seo_schema::registry::STORED_STRUCTURED_DATA;
use seo_score::{ScoreCard, SeoScoreConfig, business_entity_config, score};
use seo_validate::{
    BusinessRuleOptions, RichResultsReport, RichResultsValidator, StoredStructuredData,
    ValidationSection, aggregate, validate_business_rules, validate_structure,
};
use serde::Serialize;
use tokio::task::JoinError;

use crate::error::PipelineError;
use crate::store::StructuredDataStore;

/// Outcome of one regeneration or refresh.
///
/// `success` is false whenever anything went wrong, even if a usable
/// `record` was still produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegenerationResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<StoredStructuredData>,
    /// False when a stored record was still current and returned as is.
    pub regenerated: bool,
}

impl RegenerationResult {
    fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            record: None,
            regenerated: false,
        }
    }

    fn push_error(&mut self, message: String) {
        self.success = false;
        self.error = Some(match self.error.take() {
            Some(existing) => format!("{existing}; {message}"),
            None => message,
        });
    }
}

pub struct Pipeline<R> {
    builder: GraphBuilder,
    rules: BusinessRuleOptions,
    rich_results: Arc<R>,
    rich_results_config: RichResultsConfig,
    scoring: SeoScoreConfig,
    schemas: SchemaRegistry,
}

impl<R: RichResultsValidator + 'static> Pipeline<R> {
    #[must_use]
    pub fn new(config: &SeoConfig, rich_results: R) -> Self {
        Self {
            builder: GraphBuilder::new(config.site.clone()),
            rules: BusinessRuleOptions::from(&config.rules),
            rich_results: Arc::new(rich_results),
            rich_results_config: config.rich_results.clone(),
            scoring: business_entity_config(),
            schemas: SchemaRegistry::new(),
        }
    }

    /// Build from the layered configuration (`.env`, TOML files, env vars).
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::Config` if configuration cannot be loaded.
    pub fn from_env(rich_results: R) -> Result<Self, PipelineError> {
        let config = SeoConfig::load_with_dotenv()?;
        Ok(Self::new(&config, rich_results))
    }

    /// Replace the score table used by [`Self::score`].
    #[must_use]
    pub fn with_scoring(mut self, scoring: SeoScoreConfig) -> Self {
        self.scoring = scoring;
        self
    }

    /// Build, normalize, validate, and aggregate. Nothing is persisted.
    ///
    /// Every validator sees the normalized graph, read back into its typed
    /// form, so all three sections describe the stored shape.
    pub async fn regenerate(
        &self,
        entity: &EntityRecord,
        canonical_url: Option<&str>,
    ) -> RegenerationResult {
        let graph = match self.builder.build(entity, canonical_url) {
            Ok(graph) => graph,
            Err(e) => {
                tracing::warn!(entity_id = %entity.id, error = %e, "graph build failed");
                return RegenerationResult::failed(e.to_string());
            }
        };
        let (normalized, snapshot) = match normalize(&graph)
            .and_then(|normalized| normalized.to_graph().map(|typed| (normalized, typed)))
        {
            Ok(pair) => pair,
            Err(e) => {
                tracing::warn!(entity_id = %entity.id, error = %e, "graph normalization failed");
                return RegenerationResult::failed(e.to_string());
            }
        };

        let snapshot = Arc::new(snapshot);
        let structural = run_isolated("structural", {
            let graph = Arc::clone(&snapshot);
            move || validate_structure(&graph)
        });
        let business_rules = run_isolated("business rules", {
            let graph = Arc::clone(&snapshot);
            let options = self.rules.clone();
            move || validate_business_rules(&graph, &options).into_section()
        });
        let rich_results = self.check_rich_results(&normalized);

        let (structural, business_rules, rich_results) =
            tokio::join!(structural, business_rules, rich_results);

        let mut failures = Vec::new();
        let mut settle = |outcome: Result<ValidationSection, Degraded>| {
            outcome.unwrap_or_else(|degraded| {
                failures.push(degraded.message);
                degraded.section
            })
        };
        let report = aggregate(
            settle(structural),
            settle(business_rules),
            settle(rich_results),
        );

        tracing::info!(
            entity_id = %entity.id,
            valid = report.valid,
            errors = report.error_count(),
            warnings = report.warning_count(),
            degraded = failures.len(),
            "regenerated structured data"
        );

        let record = StoredStructuredData {
            graph: normalized,
            report,
            last_generated: Utc::now().max(entity.updated_at),
        };
        RegenerationResult {
            success: failures.is_empty(),
            error: (!failures.is_empty()).then(|| failures.join("; ")),
            record: Some(record),
            regenerated: true,
        }
    }

    /// Reuse the stored record while it is current, otherwise regenerate
    /// and save.
    pub async fn refresh<S: StructuredDataStore>(
        &self,
        store: &S,
        entity: &EntityRecord,
        canonical_url: Option<&str>,
    ) -> RegenerationResult {
        let stored = match store.load(&entity.id).await {
            Ok(blob) => blob.and_then(|blob| self.trusted_record(&entity.id, blob)),
            Err(e) => {
                tracing::warn!(entity_id = %entity.id, error = %e, "loading stored record failed");
                return RegenerationResult::failed(e.to_string());
            }
        };

        if let Some(record) = stored.filter(|record| !record.is_stale(entity.updated_at)) {
            tracing::debug!(entity_id = %entity.id, "stored record is current");
            return RegenerationResult {
                success: true,
                error: None,
                record: Some(record),
                regenerated: false,
            };
        }

        let mut result = self.regenerate(entity, canonical_url).await;
        let saved = match &result.record {
            Some(record) => persist(store, &entity.id, record).await,
            None => return result,
        };
        if let Err(e) = saved {
            tracing::warn!(entity_id = %entity.id, error = %e, "saving record failed");
            result.push_error(e.to_string());
        }
        result
    }

    /// Live score of the entity against the configured table.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::Serialize` if the entity cannot be converted
    /// to JSON.
    pub fn score(&self, entity: &EntityRecord) -> Result<ScoreCard, PipelineError> {
        let record = serde_json::to_value(entity)?;
        Ok(score(&record, &self.scoring))
    }

    /// A stored blob that fails the schema counts as absent.
    fn trusted_record(&self, entity_id: &str, blob: serde_json::Value) -> Option<StoredStructuredData> {
        let checked = self
            .schemas
            .validate(STORED_STRUCTURED_DATA, &blob)
            .map_err(PipelineError::from)
            .and_then(|()| serde_json::from_value(blob).map_err(PipelineError::from));
        match checked {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(entity_id, error = %e, "ignoring invalid stored record");
                None
            }
        }
    }

    async fn check_rich_results(&self, graph: &NormalizedGraph) -> Result<ValidationSection, Degraded> {
        if !self.rich_results_config.enabled {
            return Ok(RichResultsReport::passing().into_section());
        }
        let timeout = self.rich_results_config.timeout();
        let checker = Arc::clone(&self.rich_results);
        let graph = graph.clone();
        // A checker panic stays inside this task.
        let call = tokio::spawn(async move { checker.validate(&graph).await });
        let abort = call.abort_handle();
        match tokio::time::timeout(timeout, call).await {
            Ok(Ok(Ok(report))) => Ok(report.into_section()),
            Ok(Ok(Err(e))) => {
                tracing::warn!(error = %e, "rich results check failed");
                Err(Degraded::quiet(e.to_string()))
            }
            Ok(Err(e)) => {
                let message = describe_join_error("rich results", e);
                tracing::warn!(error = %message, "rich results check did not complete");
                Err(Degraded::quiet(message))
            }
            Err(_) => {
                abort.abort();
                let timeout_ms = self.rich_results_config.timeout_ms;
                tracing::warn!(timeout_ms, "rich results check timed out");
                Err(Degraded::quiet(format!(
                    "rich results check timed out after {timeout_ms}ms"
                )))
            }
        }
    }
}

async fn persist<S: StructuredDataStore>(
    store: &S,
    entity_id: &str,
    record: &StoredStructuredData,
) -> Result<(), PipelineError> {
    let blob = serde_json::to_value(record)?;
    store.save(entity_id, blob).await?;
    Ok(())
}

/// A section that could not be produced normally.
#[derive(Debug)]
struct Degraded {
    section: ValidationSection,
    message: String,
}

impl Degraded {
    /// Empty degraded section; the reason travels only in the result.
    fn quiet(message: String) -> Self {
        Self {
            section: ValidationSection::degraded(),
            message,
        }
    }

    /// Degraded section that also records the reason as an error.
    fn recorded(message: String) -> Self {
        Self {
            section: ValidationSection {
                errors: vec![message.clone()],
                ..ValidationSection::degraded()
            },
            message,
        }
    }
}

/// Run a synchronous validator on the blocking pool so a panic stays inside
/// its own section.
async fn run_isolated<F>(name: &'static str, validator: F) -> Result<ValidationSection, Degraded>
where
    F: FnOnce() -> ValidationSection + Send + 'static,
{
    tokio::task::spawn_blocking(validator).await.map_err(|e| {
        let message = describe_join_error(name, e);
        tracing::warn!(validator = name, error = %message, "validator did not complete");
        Degraded::recorded(message)
    })
}

fn describe_join_error(name: &str, error: JoinError) -> String {
    if error.is_panic() {
        format!("{name} validator panicked: {}", panic_message(error.into_panic().as_ref()))
    } else {
        format!("{name} validator was cancelled")
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}
