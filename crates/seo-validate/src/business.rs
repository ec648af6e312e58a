//! Semantic business rules over the business-entity node.
//!
//! Every rule runs on every call; one call can report many findings. Only a
//! missing business-entity node stops evaluation. Messages always carry the
//! offending value or count.

use seo_config::RulesConfig;
use seo_core::urls::is_absolute_http_url;
use seo_graph::KnowledgeGraph;
use seo_graph::node::{ContactPoints, OrganizationNode};

use crate::section::ValidationSection;

/// Strictness knobs. Each check can be toggled independently.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct BusinessRuleOptions {
    pub require_logo: bool,
    pub require_address: bool,
    pub require_contact_point: bool,
    pub min_name_length: usize,
    pub max_name_length: usize,
    pub min_logo_dimension: u32,
    pub min_description_length: usize,
}

impl Default for BusinessRuleOptions {
    fn default() -> Self {
        Self::from(&RulesConfig::default())
    }
}

impl From<&RulesConfig> for BusinessRuleOptions {
    fn from(config: &RulesConfig) -> Self {
        Self {
            require_logo: config.require_logo,
            require_address: config.require_address,
            require_contact_point: config.require_contact_point,
            min_name_length: config.min_name_length,
            max_name_length: config.max_name_length,
            min_logo_dimension: config.min_logo_dimension,
            min_description_length: config.min_description_length,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusinessRuleFindings {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
}

impl BusinessRuleFindings {
    #[must_use]
    pub fn into_section(self) -> ValidationSection {
        ValidationSection {
            info: self.info,
            ..ValidationSection::from_findings(self.errors, self.warnings)
        }
    }
}

/// Evaluate all business rules against the graph's business-entity node.
#[must_use]
pub fn validate_business_rules(
    graph: &KnowledgeGraph,
    options: &BusinessRuleOptions,
) -> BusinessRuleFindings {
    let mut findings = BusinessRuleFindings::default();

    let Some(org) = graph.business_entity() else {
        findings
            .errors
            .push("No Organization node found in graph; business rules cannot be evaluated".into());
        return findings;
    };

    check_name(org, options, &mut findings);
    check_logo(org, options, &mut findings);
    check_urls(org, &mut findings);
    check_address(org, options, &mut findings);
    check_contact_points(org, options, &mut findings);
    check_description(org, options, &mut findings);

    if !org.same_as.is_empty() {
        findings
            .info
            .push(format!("{} sameAs profile(s) linked", org.same_as.len()));
    }
    if org.geo.is_some() {
        findings.info.push("Geo coordinates present".into());
    }

    tracing::debug!(
        errors = findings.errors.len(),
        warnings = findings.warnings.len(),
        "evaluated business rules"
    );
    findings
}

fn check_name(org: &OrganizationNode, options: &BusinessRuleOptions, findings: &mut BusinessRuleFindings) {
    let name = org.name.trim();
    if name.is_empty() {
        findings.errors.push("Organization name is missing".into());
        return;
    }
    let length = name.chars().count();
    if length < options.min_name_length {
        findings.errors.push(format!(
            "Organization name \"{name}\" is too short ({length} of minimum {} characters)",
            options.min_name_length
        ));
    } else if length > options.max_name_length {
        findings.warnings.push(format!(
            "Organization name is {length} characters long (recommended maximum {})",
            options.max_name_length
        ));
    }
}

fn check_logo(org: &OrganizationNode, options: &BusinessRuleOptions, findings: &mut BusinessRuleFindings) {
    let Some(logo) = &org.logo else {
        if options.require_logo {
            findings.errors.push("Logo is required but missing".into());
        }
        return;
    };
    let floor = options.min_logo_dimension;
    if let Some(width) = logo.width.filter(|w| *w < floor) {
        findings
            .warnings
            .push(format!("Logo width {width}px is below the minimum {floor}px"));
    }
    if let Some(height) = logo.height.filter(|h| *h < floor) {
        findings
            .warnings
            .push(format!("Logo height {height}px is below the minimum {floor}px"));
    }
    if logo.width.is_none() || logo.height.is_none() {
        findings
            .info
            .push(format!("Logo dimensions unknown for \"{}\"", logo.url));
    }
}

fn check_urls(org: &OrganizationNode, findings: &mut BusinessRuleFindings) {
    if let Some(url) = org.url.as_deref() {
        if !is_absolute_http_url(url) {
            findings
                .errors
                .push(format!("Invalid url \"{url}\": not a well-formed absolute URL"));
        }
    }
    for (i, same_as) in org.same_as.iter().enumerate() {
        if !is_absolute_http_url(same_as) {
            findings.errors.push(format!(
                "Invalid sameAs[{i}] \"{same_as}\": not a well-formed absolute URL"
            ));
        }
    }
}

fn check_address(org: &OrganizationNode, options: &BusinessRuleOptions, findings: &mut BusinessRuleFindings) {
    let Some(address) = &org.address else {
        if options.require_address {
            findings.errors.push("Address is required but missing".into());
        }
        return;
    };
    if address.street_address.is_none() && address.address_locality.is_none() {
        findings
            .warnings
            .push("Address has neither streetAddress nor addressLocality".into());
    }
    if address.address_country.is_none() {
        findings.warnings.push("Address is missing addressCountry".into());
    }
}

fn check_contact_points(
    org: &OrganizationNode,
    options: &BusinessRuleOptions,
    findings: &mut BusinessRuleFindings,
) {
    let Some(points) = &org.contact_point else {
        if options.require_contact_point {
            findings.errors.push("Contact point is required but missing".into());
        }
        return;
    };
    if matches!(points, ContactPoints::Many(list) if list.is_empty()) {
        findings
            .errors
            .push("contactPoint is an empty array; provide at least one contact point".into());
        return;
    }

    for (i, point) in points.as_slice().iter().enumerate() {
        if let Some(email) = point.email.as_deref() {
            if !email.contains('@') {
                findings
                    .errors
                    .push(format!("contactPoint[{i}] email \"{email}\" is missing '@'"));
            }
        }
        if let Some(phone) = point.telephone.as_deref() {
            let digits = phone.chars().filter(|c| !c.is_whitespace()).count();
            if digits < 8 {
                findings.warnings.push(format!(
                    "contactPoint[{i}] telephone \"{phone}\" has {digits} characters without whitespace (minimum 8)"
                ));
            }
        }
    }
}

fn check_description(
    org: &OrganizationNode,
    options: &BusinessRuleOptions,
    findings: &mut BusinessRuleFindings,
) {
    match org.description.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
        None => findings
            .warnings
            .push("Description is missing (recommended for SEO)".into()),
        Some(description) => {
            let length = description.chars().count();
            if length < options.min_description_length {
                findings.warnings.push(format!(
                    "Description is only {length} characters (recommended at least {})",
                    options.min_description_length
                ));
            }
        }
    }
}
