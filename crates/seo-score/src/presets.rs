//! Ready-made field tables.
//!
//! Field names follow the snake_case JSON form of the records they score.
//! Both presets sum to 100 points.

use seo_config::ScoringConfig;

use crate::config::{FieldValidator, SeoScoreConfig};
use crate::field::FieldGroup;
use crate::rule::FieldRule;

pub const BUSINESS_ENTITY: &str = "business_entity";
pub const IMAGE_ASSET: &str = "image_asset";

/// Profile completeness for a business-entity record.
#[must_use]
pub fn business_entity_config() -> SeoScoreConfig {
    SeoScoreConfig::new(
        BUSINESS_ENTITY,
        vec![
            FieldValidator::new(
                "name",
                "Name",
                10,
                FieldGroup::Content,
                FieldRule::TextLength { min: 2, max: 100 },
            ),
            FieldValidator::new(
                "seo_title",
                "SEO title",
                15,
                FieldGroup::Metadata,
                FieldRule::TextLength { min: 30, max: 60 },
            ),
            FieldValidator::new(
                "seo_description",
                "SEO description",
                15,
                FieldGroup::Metadata,
                FieldRule::TextLength { min: 120, max: 160 },
            ),
            FieldValidator::new(
                "description",
                "Description",
                10,
                FieldGroup::Content,
                FieldRule::TextLength { min: 100, max: 2000 },
            ),
            FieldValidator::new(
                "logo.url",
                "Logo",
                10,
                FieldGroup::Media,
                FieldRule::Presence { critical: false },
            ),
            FieldValidator::new(
                "share_image.url",
                "Share image",
                5,
                FieldGroup::Media,
                FieldRule::Presence { critical: false },
            ),
            FieldValidator::new(
                "url",
                "Website",
                10,
                FieldGroup::StructuredData,
                FieldRule::AbsoluteUrl { critical: false },
            ),
            FieldValidator::new(
                "email",
                "Email",
                5,
                FieldGroup::Contact,
                FieldRule::Presence { critical: false },
            ),
            FieldValidator::new(
                "phone",
                "Phone",
                5,
                FieldGroup::Contact,
                FieldRule::Presence { critical: false },
            ),
            FieldValidator::new(
                "address.locality",
                "City",
                5,
                FieldGroup::StructuredData,
                FieldRule::Presence { critical: false },
            ),
            FieldValidator::new(
                "social_links",
                "Social profiles",
                10,
                FieldGroup::StructuredData,
                FieldRule::ListCount { recommended: 3 },
            ),
        ],
    )
}

/// Metadata quality for an uploaded image.
#[must_use]
pub fn image_asset_config(scoring: &ScoringConfig) -> SeoScoreConfig {
    SeoScoreConfig::new(
        IMAGE_ASSET,
        vec![
            FieldValidator::new(
                "filename",
                "Filename",
                20,
                FieldGroup::Metadata,
                FieldRule::Filename {
                    generic_prefixes: scoring.generic_filename_prefixes.clone(),
                },
            ),
            FieldValidator::new(
                "alt",
                "Alt text",
                30,
                FieldGroup::Metadata,
                FieldRule::TextLength { min: 10, max: 125 },
            ),
            FieldValidator::new(
                "title",
                "Title",
                10,
                FieldGroup::Metadata,
                FieldRule::Presence { critical: false },
            ),
            FieldValidator::new(
                "caption",
                "Caption",
                10,
                FieldGroup::Metadata,
                FieldRule::Presence { critical: false },
            ),
            FieldValidator::new(
                "dimensions",
                "Dimensions",
                30,
                FieldGroup::Media,
                FieldRule::ImageDimensions {
                    width_field: "width".into(),
                    height_field: "height".into(),
                    min_width: scoring.min_image_width,
                    min_height: scoring.min_image_height,
                },
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_sum_to_one_hundred() {
        assert_eq!(business_entity_config().max_score(), 100);
        assert_eq!(image_asset_config(&ScoringConfig::default()).max_score(), 100);
    }

    #[test]
    fn field_names_are_unique() {
        for config in [business_entity_config(), image_asset_config(&ScoringConfig::default())] {
            let mut names: Vec<&str> = config.fields.iter().map(|f| f.name.as_str()).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), config.fields.len(), "{}", config.entity_type);
        }
    }
}
