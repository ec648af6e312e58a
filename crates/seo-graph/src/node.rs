//! Typed linked-data node model.
//!
//! `GraphNode` is internally tagged by `@type`, so every node serializes as a
//! flat JSON-LD object. Nested value objects (images, addresses, contact
//! points) carry their own `@type` through [`SchemaType`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The single canonical `@context` value.
pub const SCHEMA_CONTEXT: &str = "https://schema.org";

fn default_context() -> String {
    SCHEMA_CONTEXT.to_string()
}

/// `{ "@context": ..., "@graph": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct KnowledgeGraph {
    #[serde(rename = "@context", default = "default_context")]
    pub context: String,

    #[serde(rename = "@graph", default)]
    pub nodes: Vec<GraphNode>,
}

impl Default for KnowledgeGraph {
    fn default() -> Self {
        Self {
            context: default_context(),
            nodes: Vec::new(),
        }
    }
}

impl KnowledgeGraph {
    /// First business-entity node, if any.
    #[must_use]
    pub fn business_entity(&self) -> Option<&OrganizationNode> {
        self.nodes.iter().find_map(|node| match node {
            GraphNode::BusinessEntity(org) => Some(org),
            _ => None,
        })
    }

    /// First web-page node, if any.
    #[must_use]
    pub fn web_page(&self) -> Option<&WebPageNode> {
        self.nodes.iter().find_map(|node| match node {
            GraphNode::WebPage(page) => Some(page),
            _ => None,
        })
    }

    /// Number of nodes of the given kind.
    #[must_use]
    pub fn count(&self, kind: NodeKind) -> usize {
        self.nodes.iter().filter(|node| node.kind() == kind).count()
    }
}

/// Node kind discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    BusinessEntity,
    WebPage,
    WebSite,
}

impl NodeKind {
    /// The `@type` value emitted for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BusinessEntity => "Organization",
            Self::WebPage => "WebPage",
            Self::WebSite => "WebSite",
        }
    }

    /// Suffix appended to the page (or site) URL to form the node `@id`.
    #[must_use]
    pub const fn id_suffix(self) -> &'static str {
        match self {
            Self::BusinessEntity => "#organization",
            Self::WebPage => "#webpage",
            Self::WebSite => "/#website",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(tag = "@type")]
pub enum GraphNode {
    #[serde(rename = "Organization")]
    BusinessEntity(OrganizationNode),
    WebPage(WebPageNode),
    WebSite(WebSiteNode),
}

impl GraphNode {
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::BusinessEntity(_) => NodeKind::BusinessEntity,
            Self::WebPage(_) => NodeKind::WebPage,
            Self::WebSite(_) => NodeKind::WebSite,
        }
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::BusinessEntity(node) => node.id.as_deref(),
            Self::WebPage(node) => node.id.as_deref(),
            Self::WebSite(node) => node.id.as_deref(),
        }
    }
}

/// `@type` of nested value objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum SchemaType {
    Organization,
    ImageObject,
    PostalAddress,
    GeoCoordinates,
    ContactPoint,
    PropertyValue,
}

/// `{ "@id": ... }` pointer to another node in the same graph.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct IdReference {
    #[serde(rename = "@id")]
    pub id: String,
}

/// Business entity (`@type: Organization`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationNode {
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founding_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(rename = "taxID", default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<PropertyValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub same_as: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<ImageObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<PostalAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo: Option<GeoCoordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_point: Option<ContactPoints>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub knows_language: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_organization: Option<NodeReference>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WebPageNode {
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<IdReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_part_of: Option<IdReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_image_of_page: Option<ImageObject>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WebSiteNode {
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImageObject {
    #[serde(rename = "@type")]
    pub kind: SchemaType,
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl ImageObject {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            kind: SchemaType::ImageObject,
            id: None,
            url: url.into(),
            caption: None,
            width: None,
            height: None,
        }
    }

    /// Copy with width/height raised to at least the given floors.
    ///
    /// Unknown dimensions take the floor; known ones are never reduced.
    #[must_use]
    pub fn with_min_dimensions(&self, min_width: u32, min_height: u32) -> Self {
        Self {
            id: None,
            width: Some(self.width.unwrap_or(0).max(min_width)),
            height: Some(self.height.unwrap_or(0).max(min_height)),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    pub kind: SchemaType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_locality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct GeoCoordinates {
    #[serde(rename = "@type")]
    pub kind: SchemaType,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactPoint {
    #[serde(rename = "@type")]
    pub kind: SchemaType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub available_language: Vec<String>,
}

/// `contactPoint` may be a single object or an array.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum ContactPoints {
    Many(Vec<ContactPoint>),
    One(ContactPoint),
}

impl ContactPoints {
    #[must_use]
    pub fn as_slice(&self) -> &[ContactPoint] {
        match self {
            Self::Many(points) => points,
            Self::One(point) => std::slice::from_ref(point),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PropertyValue {
    #[serde(rename = "@type")]
    pub kind: SchemaType,
    #[serde(rename = "propertyID")]
    pub property_id: String,
    pub value: String,
}

/// Reference to another organization, possibly on another site.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NodeReference {
    #[serde(rename = "@type")]
    pub kind: SchemaType,
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
