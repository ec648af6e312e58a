//! # seo-core
//!
//! Core types, value normalization helpers, and error types for the
//! structured-data pipeline.
//!
//! This crate provides the foundational types shared across all crates:
//! - `EntityRecord`, the flat business-entity snapshot every stage reads
//! - URL and locale normalization helpers used by the graph builder
//! - The regeneration trigger contract for stored structured data
//! - Cross-cutting error types

pub mod entity;
pub mod errors;
pub mod regeneration;
pub mod urls;

pub use entity::{EntityRecord, MediaRef, ParentRef, PostalAddressFields};
pub use errors::CoreError;
pub use regeneration::needs_regeneration;
