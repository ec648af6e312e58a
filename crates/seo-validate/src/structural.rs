//! Type-conditional shape checks.
//!
//! Each node kind has one check function; [`validate_structure`] dispatches
//! on the `@type` tag. Missing or malformed *required* fields are errors,
//! recommended fields and optional formats are warnings. Relationships
//! between nodes are left to the business rules.

use std::sync::LazyLock;

use regex::Regex;
use seo_graph::node::{ImageObject, OrganizationNode, WebPageNode, WebSiteNode};
use seo_graph::{GraphNode, KnowledgeGraph, NodeKind, SCHEMA_CONTEXT};

use crate::section::ValidationSection;

static ABSOLUTE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)https?://[^\s/$.?#][^\s]*$").expect("absolute URL pattern compiles")
});

#[derive(Default)]
struct Findings {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl Findings {
    fn error(&mut self, label: &str, message: impl AsRef<str>) {
        self.errors.push(format!("{label}: {}", message.as_ref()));
    }

    fn warning(&mut self, label: &str, message: impl AsRef<str>) {
        self.warnings.push(format!("{label}: {}", message.as_ref()));
    }
}

fn is_absolute(value: &str) -> bool {
    ABSOLUTE_URL.is_match(value)
}

fn blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Validate node shapes and graph-level cardinality.
#[must_use]
pub fn validate_structure(graph: &KnowledgeGraph) -> ValidationSection {
    let mut findings = Findings::default();

    if graph.context != SCHEMA_CONTEXT {
        findings.error(
            "graph",
            format!("@context must be \"{SCHEMA_CONTEXT}\", found \"{}\"", graph.context),
        );
    }
    if graph.nodes.is_empty() {
        findings.error("graph", "@graph contains no nodes");
    }
    for kind in [NodeKind::BusinessEntity, NodeKind::WebPage] {
        let count = graph.count(kind);
        if count > 1 {
            findings.error(
                "graph",
                format!("found {count} {kind} nodes, at most one is allowed"),
            );
        }
    }

    for (index, node) in graph.nodes.iter().enumerate() {
        let label = format!("{}[{index}]", node.kind());
        match node {
            GraphNode::BusinessEntity(org) => check_organization(&label, org, &mut findings),
            GraphNode::WebPage(page) => check_web_page(&label, page, &mut findings),
            GraphNode::WebSite(site) => check_website(&label, site, &mut findings),
        }
    }

    ValidationSection::from_findings(findings.errors, findings.warnings)
}

fn check_organization(label: &str, org: &OrganizationNode, findings: &mut Findings) {
    if org.name.trim().is_empty() {
        findings.error(label, "name is required");
    }
    check_id(label, org.id.as_deref(), findings);

    match org.url.as_deref() {
        None => findings.warning(label, "url is recommended"),
        Some(url) if !is_absolute(url) => {
            findings.warning(label, format!("url \"{url}\" is not an absolute URL"));
        }
        Some(_) => {}
    }

    match &org.logo {
        None => findings.warning(label, "logo is recommended"),
        Some(logo) => check_image(label, "logo", logo, findings),
    }
    if let Some(image) = &org.image {
        check_image(label, "image", image, findings);
    }

    for (i, same_as) in org.same_as.iter().enumerate() {
        if !is_absolute(same_as) {
            findings.warning(label, format!("sameAs[{i}] \"{same_as}\" is not an absolute URL"));
        }
    }

    if let Some(geo) = &org.geo {
        if !(-90.0..=90.0).contains(&geo.latitude) {
            findings.warning(label, format!("geo.latitude {} is out of range", geo.latitude));
        }
        if !(-180.0..=180.0).contains(&geo.longitude) {
            findings.warning(label, format!("geo.longitude {} is out of range", geo.longitude));
        }
    }
}

fn check_web_page(label: &str, page: &WebPageNode, findings: &mut Findings) {
    match page.url.as_deref() {
        None => findings.error(label, "url is required"),
        Some(url) if !is_absolute(url) => {
            findings.error(label, format!("url \"{url}\" is not an absolute URL"));
        }
        Some(_) => {}
    }
    check_id(label, page.id.as_deref(), findings);
    if blank(page.name.as_deref()) {
        findings.warning(label, "name is recommended");
    }
    if let Some(image) = &page.primary_image_of_page {
        check_image(label, "primaryImageOfPage", image, findings);
    }
}

fn check_website(label: &str, site: &WebSiteNode, findings: &mut Findings) {
    match site.url.as_deref() {
        None => findings.error(label, "url is required"),
        Some(url) if !is_absolute(url) => {
            findings.error(label, format!("url \"{url}\" is not an absolute URL"));
        }
        Some(_) => {}
    }
    if blank(site.name.as_deref()) {
        findings.error(label, "name is required");
    }
    check_id(label, site.id.as_deref(), findings);
}

fn check_id(label: &str, id: Option<&str>, findings: &mut Findings) {
    match id {
        None => findings.warning(label, "@id is missing"),
        Some(id) if !is_absolute(id) => {
            findings.warning(label, format!("@id \"{id}\" is not an absolute URL"));
        }
        Some(_) => {}
    }
}

fn check_image(label: &str, field: &str, image: &ImageObject, findings: &mut Findings) {
    if !is_absolute(&image.url) {
        findings.warning(
            label,
            format!("{field}.url \"{}\" is not an absolute URL", image.url),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn organization(name: &str) -> OrganizationNode {
        OrganizationNode {
            id: Some("https://site.test/companies/acme#organization".into()),
            name: name.into(),
            url: Some("https://acme.test".into()),
            logo: Some(ImageObject::new("https://site.test/logo.png")),
            ..Default::default()
        }
    }

    fn graph(nodes: Vec<GraphNode>) -> KnowledgeGraph {
        KnowledgeGraph {
            nodes,
            ..KnowledgeGraph::default()
        }
    }

    #[rstest]
    #[case("https://example.com", true)]
    #[case("HTTP://Example.com/x", true)]
    #[case("example.com", false)]
    #[case("https:// example.com", false)]
    #[case("/relative", false)]
    fn absolute_url_pattern(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_absolute(input), expected);
    }

    #[test]
    fn complete_organization_passes_cleanly() {
        let section = validate_structure(&graph(vec![GraphNode::BusinessEntity(organization("Acme"))]));
        assert!(section.valid);
        assert!(section.errors.is_empty());
        assert!(section.warnings.is_empty(), "{:?}", section.warnings);
    }

    #[test]
    fn organization_requires_name() {
        let section = validate_structure(&graph(vec![GraphNode::BusinessEntity(organization(" "))]));
        assert!(!section.valid);
        assert_eq!(section.errors, vec!["Organization[0]: name is required".to_string()]);
    }

    #[test]
    fn recommended_fields_warn() {
        let org = OrganizationNode {
            name: "Acme".into(),
            url: Some("acme.test".into()),
            ..Default::default()
        };
        let section = validate_structure(&graph(vec![GraphNode::BusinessEntity(org)]));
        assert!(section.valid);
        assert_eq!(
            section.warnings,
            vec![
                "Organization[0]: @id is missing".to_string(),
                "Organization[0]: url \"acme.test\" is not an absolute URL".to_string(),
                "Organization[0]: logo is recommended".to_string(),
            ]
        );
    }

    #[test]
    fn web_page_requires_absolute_url() {
        let page = WebPageNode {
            id: Some("https://site.test/a#webpage".into()),
            url: Some("/a".into()),
            name: Some("A".into()),
            ..Default::default()
        };
        let section = validate_structure(&graph(vec![
            GraphNode::BusinessEntity(organization("Acme")),
            GraphNode::WebPage(page),
        ]));
        assert_eq!(section.errors, vec!["WebPage[1]: url \"/a\" is not an absolute URL".to_string()]);

        let missing = validate_structure(&graph(vec![GraphNode::WebPage(WebPageNode::default())]));
        assert!(missing.errors.contains(&"WebPage[0]: url is required".to_string()));
    }

    #[test]
    fn website_requires_url_and_name() {
        let section = validate_structure(&graph(vec![GraphNode::WebSite(WebSiteNode {
            id: Some("https://site.test/#website".into()),
            ..Default::default()
        })]));
        assert_eq!(
            section.errors,
            vec![
                "WebSite[0]: url is required".to_string(),
                "WebSite[0]: name is required".to_string(),
            ]
        );
    }

    #[test]
    fn wrong_context_and_duplicates_are_errors() {
        let mut g = graph(vec![
            GraphNode::BusinessEntity(organization("Acme")),
            GraphNode::BusinessEntity(organization("Acme Two")),
        ]);
        g.context = "http://schema.org".into();
        let section = validate_structure(&g);
        assert_eq!(section.errors.len(), 2);
        assert!(section.errors[1].contains("found 2 Organization nodes"));
    }

    #[test]
    fn empty_graph_is_an_error() {
        let section = validate_structure(&KnowledgeGraph::default());
        assert_eq!(section.errors, vec!["graph: @graph contains no nodes".to_string()]);
    }
}
