//! Canonical JSON form of a knowledge graph.
//!
//! Normalization sorts object keys, drops empty optional values (null, blank
//! strings, empty arrays and objects), and pins `@context` to
//! [`SCHEMA_CONTEXT`]. It is idempotent:
//! `normalize_value(n.as_value()) == n` for every normalized graph `n`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::GraphError;
use crate::node::{KnowledgeGraph, SCHEMA_CONTEXT};

const CONTEXT_KEY: &str = "@context";
const GRAPH_KEY: &str = "@graph";

/// A graph in its storage form. Serializes transparently as the JSON value;
/// deserializing re-normalizes whatever was stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NormalizedGraph(Value);

impl<'de> Deserialize<'de> for NormalizedGraph {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(|value| normalize_value(&value))
    }
}

impl NormalizedGraph {
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Byte-stable string used for storage and diffing.
    #[must_use]
    pub fn to_canonical_string(&self) -> String {
        self.0.to_string()
    }

    /// Read the stored form back into typed nodes.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::Serialize` if a node does not fit the node model.
    pub fn to_graph(&self) -> Result<KnowledgeGraph, GraphError> {
        Ok(serde_json::from_value(self.0.clone())?)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.0
            .get(GRAPH_KEY)
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }
}

/// Normalize a typed graph.
///
/// # Errors
///
/// Returns `GraphError::Serialize` if the graph cannot be converted to JSON.
pub fn normalize(graph: &KnowledgeGraph) -> Result<NormalizedGraph, GraphError> {
    let value = serde_json::to_value(graph)?;
    Ok(normalize_value(&value))
}

/// Normalize an arbitrary graph-shaped JSON value without mutating it.
///
/// A non-object input yields an empty graph; a single node object under
/// `@graph` is wrapped into an array.
#[must_use]
pub fn normalize_value(value: &Value) -> NormalizedGraph {
    let mut root = match prune(value) {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    };

    let nodes = match root.remove(GRAPH_KEY) {
        Some(Value::Array(nodes)) => nodes,
        Some(node @ Value::Object(_)) => vec![node],
        _ => Vec::new(),
    };
    root.insert(CONTEXT_KEY.into(), Value::String(SCHEMA_CONTEXT.into()));
    root.insert(GRAPH_KEY.into(), Value::Array(nodes));

    NormalizedGraph(Value::Object(sorted(root)))
}

/// Recursively drop empty values; `None` means "omit this value".
fn prune(value: &Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::Array(items) => {
            let items: Vec<Value> = items.iter().filter_map(prune).collect();
            (!items.is_empty()).then_some(Value::Array(items))
        }
        Value::Object(map) => {
            let map: Map<String, Value> = map
                .iter()
                .filter_map(|(key, value)| prune(value).map(|v| (key.clone(), v)))
                .collect();
            (!map.is_empty()).then(|| Value::Object(sorted(map)))
        }
        other => Some(other.clone()),
    }
}

/// Rebuild a map in key order regardless of the map's backing store.
fn sorted(map: Map<String, Value>) -> Map<String, Value> {
    let mut entries: Vec<(String, Value)> = map.into_iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    entries.into_iter().collect()
}
