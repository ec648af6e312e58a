//! Validators run against graphs produced by the builder.

use pretty_assertions::assert_eq;
use seo_config::SiteConfig;
use seo_core::{EntityRecord, MediaRef, PostalAddressFields};
use seo_graph::GraphBuilder;
use seo_validate::{
    BusinessRuleOptions, ValidationSection, aggregate, validate_business_rules, validate_structure,
};

fn builder() -> GraphBuilder {
    GraphBuilder::new(SiteConfig {
        base_url: Some("https://directory.example".into()),
        name: Some("Business Directory".into()),
        entity_path_prefix: "companies".into(),
    })
}

fn complete_entity() -> EntityRecord {
    EntityRecord {
        slug: Some("acme-trading".into()),
        description: Some(
            "Acme Trading distributes industrial fasteners, anchors and fixings to contractors \
             across the Gulf region from two warehouses."
                .into(),
        ),
        url: Some("https://acme.example".into()),
        email: Some("sales@acme.example".into()),
        phone: Some("+971 4 123 4567".into()),
        address: Some(PostalAddressFields {
            street: Some("12 Harbour Rd".into()),
            locality: Some("Dubai".into()),
            country: Some("AE".into()),
            ..Default::default()
        }),
        logo: Some(MediaRef {
            url: "/uploads/acme.png".into(),
            alt: None,
            width: Some(512),
            height: Some(512),
        }),
        social_links: vec!["https://www.linkedin.com/company/acme".into()],
        ..EntityRecord::new("ent-1", "Acme Trading")
    }
}

#[test]
fn complete_entity_produces_a_clean_report() {
    let graph = builder().build(&complete_entity(), None).unwrap();
    let structural = validate_structure(&graph);
    let business = validate_business_rules(&graph, &BusinessRuleOptions::default());

    assert!(structural.errors.is_empty(), "{:?}", structural.errors);
    assert!(structural.warnings.is_empty(), "{:?}", structural.warnings);
    assert!(business.errors.is_empty(), "{:?}", business.errors);
    assert!(business.warnings.is_empty(), "{:?}", business.warnings);

    let report = aggregate(
        structural,
        business.into_section(),
        ValidationSection::from_findings(vec![], vec![]),
    );
    assert!(report.valid);
}

#[test]
fn sparse_entity_warns_but_stays_valid() {
    let graph = builder().build(&EntityRecord::new("ent-2", "Bare Co"), None).unwrap();
    let business = validate_business_rules(&graph, &BusinessRuleOptions::default());
    assert!(business.errors.is_empty());
    assert_eq!(
        business.warnings,
        vec!["Description is missing (recommended for SEO)".to_string()]
    );

    let report = aggregate(
        validate_structure(&graph),
        business.into_section(),
        ValidationSection::from_findings(vec![], vec![]),
    );
    assert!(report.valid);
    assert!(report.warning_count() > 1);
}
