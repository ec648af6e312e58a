//! Central schema registry.
//!
//! The `SchemaRegistry` builds JSON Schemas from workspace types at
//! construction time using [`schemars::schema_for!`] and provides validation
//! via `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;
use serde_json::Value;

use crate::error::SchemaError;

pub const ENTITY_RECORD: &str = "entity_record";
pub const KNOWLEDGE_GRAPH: &str = "knowledge_graph";
pub const VALIDATION_REPORT: &str = "validation_report";
pub const STORED_STRUCTURED_DATA: &str = "stored_structured_data";
pub const SCORE_CARD: &str = "score_card";

/// Named JSON Schemas for the workspace's wire and storage types.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, Value>,
}

macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, schema_for!($ty).to_value());
    };
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaRegistry {
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        register!(schemas, ENTITY_RECORD, seo_core::EntityRecord);
        register!(schemas, KNOWLEDGE_GRAPH, seo_graph::KnowledgeGraph);
        register!(schemas, VALIDATION_REPORT, seo_validate::ValidationReport);
        register!(
            schemas,
            STORED_STRUCTURED_DATA,
            seo_validate::StoredStructuredData
        );
        register!(schemas, SCORE_CARD, seo_score::ScoreCard);

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown,
    /// `SchemaError::Compilation` if the schema does not compile, or
    /// `SchemaError::ValidationFailed` with every violation found.
    pub fn validate(&self, name: &str, instance: &Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Compilation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{}: {e}", e.instance_path))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }
}
