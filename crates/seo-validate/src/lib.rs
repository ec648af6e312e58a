//! # seo-validate
//!
//! Three independent validators over one knowledge-graph snapshot and the
//! aggregator that merges their findings:
//!
//! - [`structural`]: per-node-kind shape checks
//! - [`business`]: semantic rules with configurable strictness
//! - [`rich_results`]: contract for the external rich-results checker
//! - [`report`]: the three-section `ValidationReport`
//! - [`stored`]: graph + report + generation time, as persisted
//!
//! Findings are data. None of the validators return `Err` for a bad graph.

pub mod business;
pub mod report;
pub mod rich_results;
pub mod section;
pub mod stored;
pub mod structural;

pub use business::{BusinessRuleFindings, BusinessRuleOptions, validate_business_rules};
pub use report::{ValidationReport, aggregate};
pub use rich_results::{
    NoopRichResults, RichResultsError, RichResultsItem, RichResultsReport, RichResultsValidator,
};
pub use section::ValidationSection;
pub use stored::StoredStructuredData;
pub use structural::validate_structure;
