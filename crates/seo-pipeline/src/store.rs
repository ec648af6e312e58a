//! Persistence seam for regenerated records.
//!
//! Stores deal in opaque JSON blobs keyed by entity id. The pipeline checks
//! a loaded blob against the `stored_structured_data` schema before trusting
//! it, so a store never needs to understand the record shape.

use std::collections::HashMap;
use std::future::Future;

use serde_json::Value;
use tokio::sync::RwLock;

use crate::error::StoreError;

pub trait StructuredDataStore: Send + Sync {
    /// The stored blob for an entity, `None` if nothing was saved yet.
    fn load(&self, entity_id: &str) -> impl Future<Output = Result<Option<Value>, StoreError>> + Send;

    /// Replace the stored blob for an entity. Last writer wins.
    fn save(&self, entity_id: &str, blob: Value) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// Process-local store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a blob in place without going through the pipeline.
    pub async fn insert(&self, entity_id: impl Into<String>, blob: Value) {
        self.blobs.write().await.insert(entity_id.into(), blob);
    }

    pub async fn len(&self) -> usize {
        self.blobs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.blobs.read().await.is_empty()
    }
}

impl StructuredDataStore for MemoryStore {
    async fn load(&self, entity_id: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.blobs.read().await.get(entity_id).cloned())
    }

    async fn save(&self, entity_id: &str, blob: Value) -> Result<(), StoreError> {
        self.blobs.write().await.insert(entity_id.to_string(), blob);
        Ok(())
    }
}
