//! # seo-schema
//!
//! JSON Schemas for everything this workspace puts on the wire or in storage,
//! generated from the Rust types with `schemars` and checked with
//! `jsonschema`.
//!
//! The pipeline uses the `stored_structured_data` schema to decide whether a
//! previously saved blob can be trusted before deserializing it.

pub mod error;
pub mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
