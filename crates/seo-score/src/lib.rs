//! # seo-score
//!
//! Generic field scorer. A [`SeoScoreConfig`] is an ordered table of
//! [`FieldValidator`]s; [`score`] evaluates each one against a JSON record and
//! rolls the bounded per-field scores up into a percentage.
//!
//! The engine knows nothing about entity types. Business entities and image
//! assets differ only by the config passed in; see [`presets`].

pub mod config;
pub mod engine;
pub mod field;
pub mod presets;
pub mod rule;

pub use config::{FieldValidator, SeoScoreConfig};
pub use engine::{ScoreCard, score};
pub use field::{FieldEvaluation, FieldGroup, FieldStatus, FieldValidationResult};
pub use presets::{business_entity_config, image_asset_config};
pub use rule::{CustomRule, FieldRule};
