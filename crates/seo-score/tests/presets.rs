//! Presets applied to realistic records.

use pretty_assertions::assert_eq;
use seo_config::ScoringConfig;
use seo_core::{EntityRecord, MediaRef};
use seo_score::{FieldGroup, FieldStatus, business_entity_config, image_asset_config, score};
use serde_json::json;

#[test]
fn business_entity_scores_serialized_record() {
    let entity = EntityRecord {
        seo_title: Some("Acme Trading | Industrial Fasteners in Dubai".into()),
        url: Some("https://acme.example".into()),
        email: Some("sales@acme.example".into()),
        logo: Some(MediaRef {
            url: "/uploads/acme.png".into(),
            alt: None,
            width: None,
            height: None,
        }),
        social_links: vec!["https://www.linkedin.com/company/acme".into()],
        ..EntityRecord::new("ent-1", "Acme Trading")
    };
    let record = serde_json::to_value(&entity).unwrap();
    let card = score(&record, &business_entity_config());

    let by_field = |name: &str| {
        card.field_results
            .iter()
            .find(|r| r.field == name)
            .unwrap()
            .clone()
    };
    assert_eq!(by_field("name").status, FieldStatus::Good);
    assert_eq!(by_field("seo_title").score, 15);
    assert_eq!(by_field("seo_description").status, FieldStatus::Error);
    assert_eq!(by_field("logo.url").score, 10);
    assert_eq!(by_field("social_links").score, 3);

    // 10 + 15 + 10 + 10 + 5 + 3 = 53
    assert_eq!(card.percentage, 53);
    assert_eq!(card.group_percentage(FieldGroup::Contact), 50);
    assert_eq!(card.improvements()[0].field, "seo_description");
}

#[test]
fn camera_image_scores_below_descriptive_image() {
    let config = image_asset_config(&ScoringConfig::default());
    let camera = score(
        &json!({"filename": "IMG_2041.jpg", "width": 4032, "height": 3024}),
        &config,
    );
    let descriptive = score(
        &json!({
            "filename": "acme-warehouse-loading-dock.jpg",
            "alt": "Forklift loading pallets at the Acme warehouse dock",
            "title": "Acme warehouse",
            "width": 1600,
            "height": 900
        }),
        &config,
    );
    assert!(camera.percentage < descriptive.percentage);
    assert_eq!(camera.group_percentage(FieldGroup::Media), 100);
    assert_eq!(descriptive.percentage, 90);
}
