//! Knowledge graph builder.
//!
//! Turns a flat [`EntityRecord`] into a linked set of nodes: one
//! business-entity node, a web-page node when the entity has a published
//! page, and a web-site node when the site identity is configured. The build
//! is pure: identical input yields an identical graph.

use seo_config::SiteConfig;
use seo_core::entity::non_blank;
use seo_core::urls::{dedupe_urls, map_languages, normalize_locale, normalize_url, truncate_to_date};
use seo_core::{CoreError, EntityRecord, MediaRef, ParentRef};
use url::Url;

use crate::error::GraphError;
use crate::node::{
    ContactPoint, ContactPoints, GeoCoordinates, GraphNode, IdReference, ImageObject,
    KnowledgeGraph, NodeKind, NodeReference, OrganizationNode, PostalAddress, PropertyValue,
    SchemaType, WebPageNode, WebSiteNode,
};

/// Preferred minimum width of the page's primary share image.
pub const SHARE_IMAGE_MIN_WIDTH: u32 = 1200;
/// Preferred minimum height of the page's primary share image.
pub const SHARE_IMAGE_MIN_HEIGHT: u32 = 630;

const DEFAULT_CONTACT_TYPE: &str = "customer service";

/// Build a graph with no site identity configured.
///
/// # Errors
///
/// Returns `GraphError::Input` when the entity has no name.
pub fn build_graph(
    entity: &EntityRecord,
    canonical_page_url: Option<&str>,
) -> Result<KnowledgeGraph, GraphError> {
    GraphBuilder::default().build(entity, canonical_page_url)
}

#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    site: SiteConfig,
}

impl GraphBuilder {
    #[must_use]
    pub const fn new(site: SiteConfig) -> Self {
        Self { site }
    }

    #[must_use]
    pub const fn site(&self) -> &SiteConfig {
        &self.site
    }

    /// Build the graph for one entity.
    ///
    /// `canonical_page_url` is the entity's published page as resolved by
    /// the caller's routing layer, and it always wins. Only when it is absent
    /// and the site has a `base_url` does the builder fall back to
    /// `{base_url}/{entity_path_prefix}/{slug}`, a convenience for callers
    /// whose routes follow that layout. Without either, no page nodes are
    /// emitted.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::Input` when the entity has no name. Every other
    /// field degrades to omission.
    pub fn build(
        &self,
        entity: &EntityRecord,
        canonical_page_url: Option<&str>,
    ) -> Result<KnowledgeGraph, GraphError> {
        let name = entity.display_name().ok_or_else(|| CoreError::MissingField {
            field: "name".into(),
        })?;

        let page_url = self.page_url(entity, canonical_page_url);
        let media_base = self.media_base(page_url.as_deref());
        let media_base = media_base.as_deref();

        let languages = map_languages(&entity.languages);
        let in_language = entity
            .locale
            .as_deref()
            .and_then(normalize_locale)
            .or_else(|| languages.first().cloned());

        let logo = entity
            .logo
            .as_ref()
            .and_then(|media| image_object(media, media_base))
            .map(|mut image| {
                image.id = page_url.as_ref().map(|page| format!("{page}#logo"));
                image
            });
        let share_image = entity
            .share_image
            .as_ref()
            .and_then(|media| image_object(media, media_base));
        // share image -> logo -> absent
        let primary_image = share_image.or_else(|| logo.clone()).map(|image| ImageObject {
            id: None,
            ..image
        });
        let page_image = primary_image
            .as_ref()
            .map(|image| image.with_min_dimensions(SHARE_IMAGE_MIN_WIDTH, SHARE_IMAGE_MIN_HEIGHT));

        let organization_id = page_url
            .as_ref()
            .map(|page| format!("{page}{}", NodeKind::BusinessEntity.id_suffix()));

        let organization = OrganizationNode {
            id: organization_id.clone(),
            name: name.to_string(),
            legal_name: owned(entity.legal_name.as_deref()),
            url: entity
                .url
                .as_deref()
                .and_then(|url| normalize_url(url, None)),
            description: entity.summary().map(String::from),
            founding_date: entity.founding_date.as_deref().and_then(truncate_to_date),
            email: owned(entity.email.as_deref()),
            telephone: owned(entity.phone.as_deref()),
            tax_id: owned(entity.tax_id.as_deref()),
            identifier: non_blank(entity.registration_number.as_deref())
                .map(|number| PropertyValue {
                    kind: SchemaType::PropertyValue,
                    property_id: "registrationNumber".into(),
                    value: number.to_string(),
                })
                .into_iter()
                .collect(),
            same_as: dedupe_urls(&entity.social_links, None),
            image: primary_image,
            logo,
            address: postal_address(entity),
            geo: geo_coordinates(entity),
            contact_point: contact_point(entity, &languages).map(ContactPoints::One),
            knows_language: languages,
            parent_organization: entity
                .parent
                .as_ref()
                .map(|parent| self.parent_reference(parent, page_url.as_deref())),
        };

        let website = self.website(in_language.as_deref());

        let mut nodes = Vec::with_capacity(3);
        let web_page = page_url.as_ref().map(|page| WebPageNode {
            id: Some(format!("{page}{}", NodeKind::WebPage.id_suffix())),
            url: Some(page.clone()),
            name: non_blank(entity.seo_title.as_deref())
                .or(Some(name))
                .map(String::from),
            description: non_blank(entity.seo_description.as_deref())
                .or_else(|| entity.summary())
                .map(String::from),
            in_language: in_language.clone(),
            date_modified: Some(entity.updated_at.format("%Y-%m-%dT%H:%M:%SZ").to_string()),
            about: organization_id.map(|id| IdReference { id }),
            is_part_of: website
                .as_ref()
                .and_then(|site| site.id.clone())
                .map(|id| IdReference { id }),
            primary_image_of_page: page_image,
        });

        nodes.push(GraphNode::BusinessEntity(organization));
        if let Some(page) = web_page {
            nodes.push(GraphNode::WebPage(page));
        }
        if let Some(site) = website {
            nodes.push(GraphNode::WebSite(site));
        }

        tracing::debug!(
            entity_id = %entity.id,
            nodes = nodes.len(),
            has_page = page_url.is_some(),
            "built knowledge graph"
        );

        Ok(KnowledgeGraph {
            nodes,
            ..KnowledgeGraph::default()
        })
    }

    /// Caller-supplied canonical URL, else the conventional entity route.
    fn page_url(&self, entity: &EntityRecord, canonical_page_url: Option<&str>) -> Option<String> {
        canonical_page_url
            .and_then(|url| normalize_url(url, self.site.origin()))
            .or_else(|| {
                non_blank(entity.slug.as_deref()).and_then(|slug| self.site.entity_page_url(slug))
            })
            .map(|url| url.trim_end_matches('/').to_string())
    }

    /// Origin relative media paths are resolved against.
    fn media_base(&self, page_url: Option<&str>) -> Option<String> {
        self.site.origin().map(String::from).or_else(|| {
            page_url
                .and_then(|page| Url::parse(page).ok())
                .map(|url| url.origin().ascii_serialization())
                .filter(|origin| origin != "null")
        })
    }

    fn website(&self, in_language: Option<&str>) -> Option<WebSiteNode> {
        if !self.site.has_website() {
            return None;
        }
        let origin = self.site.origin()?;
        Some(WebSiteNode {
            id: Some(format!("{origin}{}", NodeKind::WebSite.id_suffix())),
            url: Some(format!("{origin}/")),
            name: owned(self.site.name.as_deref()),
            in_language: in_language.map(String::from),
        })
    }

    /// Same-site `@id` from the slug, else the parent's own URL, else no `@id`.
    fn parent_reference(&self, parent: &ParentRef, page_url: Option<&str>) -> NodeReference {
        let name = owned(parent.name.as_deref());
        let same_site_page = non_blank(parent.slug.as_deref()).and_then(|slug| {
            self.site
                .entity_page_url(slug)
                .or_else(|| page_url.and_then(|page| sibling_page(page, slug)))
        });

        if let Some(page) = same_site_page {
            return NodeReference {
                kind: SchemaType::Organization,
                id: Some(format!("{page}{}", NodeKind::BusinessEntity.id_suffix())),
                name,
                url: Some(page),
            };
        }

        let url = parent
            .url
            .as_deref()
            .and_then(|url| normalize_url(url, None));
        NodeReference {
            kind: SchemaType::Organization,
            id: url.clone(),
            name,
            url,
        }
    }
}

/// `https://site/companies/acme` + `parent` → `https://site/companies/parent`.
fn sibling_page(page_url: &str, slug: &str) -> Option<String> {
    let page = Url::parse(page_url.trim_end_matches('/')).ok()?;
    page.join(slug).ok().map(String::from)
}

fn owned(value: Option<&str>) -> Option<String> {
    non_blank(value).map(String::from)
}

fn image_object(media: &MediaRef, base: Option<&str>) -> Option<ImageObject> {
    let url = normalize_url(&media.url, base)?;
    Some(ImageObject {
        caption: owned(media.alt.as_deref()),
        width: media.width,
        height: media.height,
        ..ImageObject::new(url)
    })
}

fn postal_address(entity: &EntityRecord) -> Option<PostalAddress> {
    let fields = entity.address.as_ref().filter(|a| !a.is_blank())?;
    Some(PostalAddress {
        kind: SchemaType::PostalAddress,
        street_address: owned(fields.street.as_deref()),
        address_locality: owned(fields.locality.as_deref()),
        address_region: owned(fields.region.as_deref()),
        postal_code: owned(fields.postal_code.as_deref()),
        address_country: owned(fields.country.as_deref()),
    })
}

/// Only a complete, finite coordinate pair produces a geo block.
fn geo_coordinates(entity: &EntityRecord) -> Option<GeoCoordinates> {
    match (entity.latitude, entity.longitude) {
        (Some(latitude), Some(longitude)) if latitude.is_finite() && longitude.is_finite() => {
            Some(GeoCoordinates {
                kind: SchemaType::GeoCoordinates,
                latitude,
                longitude,
            })
        }
        _ => None,
    }
}

fn contact_point(entity: &EntityRecord, languages: &[String]) -> Option<ContactPoint> {
    let email = owned(entity.email.as_deref());
    let telephone = owned(entity.phone.as_deref());
    if email.is_none() && telephone.is_none() {
        return None;
    }
    Some(ContactPoint {
        kind: SchemaType::ContactPoint,
        contact_type: Some(
            owned(entity.contact_type.as_deref()).unwrap_or_else(|| DEFAULT_CONTACT_TYPE.into()),
        ),
        email,
        telephone,
        available_language: languages.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use seo_core::PostalAddressFields;

    const PAGE: &str = "https://directory.test/companies/acme";

    fn entity() -> EntityRecord {
        EntityRecord::new("ent-1", "Acme Trading")
    }

    fn media(url: &str, width: u32, height: u32) -> MediaRef {
        MediaRef {
            url: url.into(),
            alt: Some("Acme logo".into()),
            width: Some(width),
            height: Some(height),
        }
    }

    #[test]
    fn missing_name_is_an_input_error() {
        let mut entity = entity();
        entity.name = Some("  ".into());
        let err = build_graph(&entity, Some(PAGE)).unwrap_err();
        assert!(matches!(
            err,
            GraphError::Input(CoreError::MissingField { ref field }) if field == "name"
        ));
        assert_eq!(err.to_string(), "invalid entity input: Missing required field: name");
    }

    #[test]
    fn organization_id_derives_from_page() {
        let graph = build_graph(&entity(), Some(PAGE)).unwrap();
        let org = graph.business_entity().unwrap();
        assert_eq!(org.id.as_deref(), Some("https://directory.test/companies/acme#organization"));
        assert_eq!(org.name, "Acme Trading");

        let page = graph.web_page().unwrap();
        assert_eq!(page.id.as_deref(), Some("https://directory.test/companies/acme#webpage"));
        assert_eq!(page.about.as_ref().map(|r| r.id.as_str()), org.id.as_deref());
    }

    #[test]
    fn no_page_means_no_web_page_node() {
        let graph = build_graph(&entity(), None).unwrap();
        assert_eq!(graph.nodes.len(), 1);
        assert!(graph.web_page().is_none());
        assert!(graph.business_entity().unwrap().id.is_none());
    }

    #[test]
    fn page_url_falls_back_to_site_slug() {
        let builder = GraphBuilder::new(SiteConfig {
            base_url: Some("https://directory.test".into()),
            name: Some("Directory".into()),
            entity_path_prefix: "companies".into(),
        });
        let mut entity = entity();
        entity.slug = Some("acme".into());
        let graph = builder.build(&entity, None).unwrap();
        assert_eq!(graph.nodes.len(), 3);
        assert_eq!(
            graph.web_page().unwrap().is_part_of.as_ref().map(|r| r.id.as_str()),
            Some("https://directory.test/#website")
        );
        assert_eq!(
            graph.business_entity().unwrap().id.as_deref(),
            Some("https://directory.test/companies/acme#organization")
        );
    }

    #[test]
    fn caller_page_url_wins_over_slug_route() {
        let builder = GraphBuilder::new(SiteConfig {
            base_url: Some("https://directory.test".into()),
            name: None,
            entity_path_prefix: "companies".into(),
        });
        let mut entity = entity();
        entity.slug = Some("acme".into());
        let graph = builder
            .build(&entity, Some("https://directory.test/en/c/acme-trading/"))
            .unwrap();
        assert_eq!(
            graph.web_page().unwrap().url.as_deref(),
            Some("https://directory.test/en/c/acme-trading")
        );
    }

    #[test]
    fn slug_without_site_base_has_no_page() {
        let mut entity = entity();
        entity.slug = Some("acme".into());
        let graph = build_graph(&entity, None).unwrap();
        assert!(graph.web_page().is_none());
        assert!(graph.business_entity().unwrap().id.is_none());
    }

    #[test]
    fn logo_fallback_clamps_page_image_only() {
        let mut entity = entity();
        entity.logo = Some(media("/uploads/logo.png", 800, 600));
        let graph = build_graph(&entity, Some(PAGE)).unwrap();

        let org = graph.business_entity().unwrap();
        let logo = org.logo.as_ref().unwrap();
        assert_eq!(logo.url, "https://directory.test/uploads/logo.png");
        assert_eq!((logo.width, logo.height), (Some(800), Some(600)));

        let page_image = graph.web_page().unwrap().primary_image_of_page.as_ref().unwrap();
        assert_eq!(page_image.url, logo.url);
        assert_eq!((page_image.width, page_image.height), (Some(1200), Some(630)));
    }

    #[test]
    fn share_image_wins_over_logo() {
        let mut entity = entity();
        entity.logo = Some(media("https://cdn.test/logo.png", 400, 400));
        entity.share_image = Some(media("https://cdn.test/share.png", 1600, 900));
        let graph = build_graph(&entity, Some(PAGE)).unwrap();
        let org = graph.business_entity().unwrap();
        assert_eq!(org.image.as_ref().map(|i| i.url.as_str()), Some("https://cdn.test/share.png"));
        assert_eq!(org.logo.as_ref().map(|i| i.url.as_str()), Some("https://cdn.test/logo.png"));
        let page_image = graph.web_page().unwrap().primary_image_of_page.as_ref().unwrap();
        assert_eq!((page_image.width, page_image.height), (Some(1600), Some(900)));
    }

    #[test]
    fn no_images_means_no_image_slots() {
        let mut entity = entity();
        entity.description = Some("A description that must never land in an image slot".into());
        let graph = build_graph(&entity, Some(PAGE)).unwrap();
        let org = graph.business_entity().unwrap();
        assert!(org.logo.is_none());
        assert!(org.image.is_none());
        assert!(graph.web_page().unwrap().primary_image_of_page.is_none());
    }

    #[test]
    fn same_as_deduplicates_case_insensitively() {
        let mut entity = entity();
        entity.social_links = vec![
            "HTTP://Example.com/X".into(),
            "http://example.com/x".into(),
            "linkedin.com/company/acme".into(),
        ];
        let graph = build_graph(&entity, Some(PAGE)).unwrap();
        assert_eq!(
            graph.business_entity().unwrap().same_as,
            vec![
                "https://Example.com/X".to_string(),
                "https://linkedin.com/company/acme".to_string()
            ]
        );
    }

    #[test]
    fn partial_geo_is_dropped() {
        let mut entity = entity();
        entity.latitude = Some(25.2);
        assert!(build_graph(&entity, None).unwrap().business_entity().unwrap().geo.is_none());

        entity.longitude = Some(f64::NAN);
        assert!(build_graph(&entity, None).unwrap().business_entity().unwrap().geo.is_none());

        entity.longitude = Some(55.3);
        let geo = build_graph(&entity, None).unwrap().business_entity().unwrap().geo.clone();
        assert_eq!(geo.map(|g| (g.latitude, g.longitude)), Some((25.2, 55.3)));
    }

    #[test]
    fn languages_and_contact_point() {
        let mut entity = entity();
        entity.languages = vec!["Arabic and English".into(), "en".into()];
        entity.email = Some("sales@acme.test".into());
        let graph = build_graph(&entity, Some(PAGE)).unwrap();
        let org = graph.business_entity().unwrap();
        assert_eq!(org.knows_language, vec!["ar".to_string(), "en".to_string()]);

        let points = org.contact_point.as_ref().unwrap().as_slice();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].contact_type.as_deref(), Some("customer service"));
        assert_eq!(points[0].available_language, vec!["ar".to_string(), "en".to_string()]);
        assert_eq!(graph.web_page().unwrap().in_language.as_deref(), Some("ar"));
    }

    #[test]
    fn founding_date_and_identifiers() {
        let mut entity = entity();
        entity.founding_date = Some("2009-05-01T08:30:00Z".into());
        entity.registration_number = Some("CN-123".into());
        entity.tax_id = Some(" ".into());
        entity.address = Some(PostalAddressFields {
            locality: Some("Dubai".into()),
            ..Default::default()
        });
        let graph = build_graph(&entity, None).unwrap();
        let org = graph.business_entity().unwrap();
        assert_eq!(org.founding_date.as_deref(), Some("2009-05-01"));
        assert_eq!(org.identifier[0].value, "CN-123");
        assert!(org.tax_id.is_none());
        assert_eq!(
            org.address.as_ref().and_then(|a| a.address_locality.as_deref()),
            Some("Dubai")
        );
    }

    #[rstest]
    #[case::slug(
        ParentRef {
            slug: Some("acme-holdings".into()),
            name: Some("Acme Holdings".into()),
            ..Default::default()
        },
        Some("https://directory.test/companies/acme-holdings#organization")
    )]
    #[case::url(
        ParentRef {
            url: Some("holdings.example".into()),
            name: Some("Acme Holdings".into()),
            ..Default::default()
        },
        Some("https://holdings.example")
    )]
    #[case::neither(
        ParentRef {
            id: Some("ent-0".into()),
            name: Some("Acme Holdings".into()),
            ..Default::default()
        },
        None
    )]
    fn parent_reference_fallback(#[case] parent: ParentRef, #[case] expected_id: Option<&str>) {
        let mut entity = entity();
        entity.parent = Some(parent);
        let graph = build_graph(&entity, Some(PAGE)).unwrap();
        let value = serde_json::to_value(&graph).unwrap();
        let reference = &value["@graph"][0]["parentOrganization"];

        assert_eq!(reference["@type"], "Organization");
        assert_eq!(reference["name"], "Acme Holdings");
        assert_eq!(reference.get("@id").and_then(|id| id.as_str()), expected_id);
    }

    #[test]
    fn seo_title_preferred_for_page_name() {
        let mut entity = entity();
        entity.seo_title = Some("Acme | Fasteners".into());
        let graph = build_graph(&entity, Some(PAGE)).unwrap();
        assert_eq!(graph.web_page().unwrap().name.as_deref(), Some("Acme | Fasteners"));
    }
}
