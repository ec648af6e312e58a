//! # seo-pipeline
//!
//! Drives one entity from record to stored structured data:
//!
//! 1. build the knowledge graph and normalize it
//! 2. run the structural, business-rule, and rich-results validators
//!    concurrently over one snapshot
//! 3. aggregate a `ValidationReport`
//! 4. persist graph + report + generation time through a
//!    [`StructuredDataStore`]
//!
//! A failing collaborator never takes the whole run down. Its section is
//! degraded and the result carries `success: false` with the reason.

mod error;
mod pipeline;
mod store;

pub use error::{PipelineError, StoreError};
pub use pipeline::{Pipeline, RegenerationResult};
pub use store::{MemoryStore, StructuredDataStore};
