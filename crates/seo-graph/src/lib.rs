//! # seo-graph
//!
//! Linked-data knowledge graph for business-entity pages.
//!
//! - [`node`]: the typed node model (`GraphNode` tagged by `@type`)
//! - [`builder`]: `EntityRecord` → `KnowledgeGraph`, pure and deterministic
//! - [`normalize`]: canonical, idempotent JSON form used for storage and diffing

pub mod builder;
pub mod error;
pub mod node;
pub mod normalize;

pub use builder::{GraphBuilder, build_graph};
pub use error::GraphError;
pub use node::{GraphNode, KnowledgeGraph, NodeKind, SCHEMA_CONTEXT};
pub use normalize::{NormalizedGraph, normalize, normalize_value};
