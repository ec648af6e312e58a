//! Business-entity record snapshot.
//!
//! The owning CRUD workflow mutates these records; every stage of the
//! pipeline only reads them. All structs derive `Serialize`, `Deserialize`,
//! and `JsonSchema` so the scoring engine can address fields by name and the
//! schema registry can publish the input shape.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A media reference (logo, social-share image) attached to an entity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MediaRef {
    pub url: String,
    pub alt: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Postal address components as entered on the record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PostalAddressFields {
    pub street: Option<String>,
    pub locality: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

impl PostalAddressFields {
    /// True when no component carries a non-blank value.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        [
            &self.street,
            &self.locality,
            &self.region,
            &self.postal_code,
            &self.country,
        ]
        .iter()
        .all(|part| non_blank(part.as_deref()).is_none())
    }
}

/// Weak back-reference to a parent entity. Never implies ownership.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ParentRef {
    pub id: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub url: Option<String>,
}

/// Flat business-entity record read from the persistence layer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct EntityRecord {
    pub id: String,
    pub slug: Option<String>,
    pub name: Option<String>,
    pub legal_name: Option<String>,
    pub description: Option<String>,
    pub brief: Option<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    /// Public website of the entity (not the canonical page on this site).
    pub url: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub contact_type: Option<String>,
    pub address: Option<PostalAddressFields>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub registration_number: Option<String>,
    pub tax_id: Option<String>,
    /// Free-form founding timestamp or date; truncated to a date on output.
    pub founding_date: Option<String>,
    pub logo: Option<MediaRef>,
    pub share_image: Option<MediaRef>,
    #[serde(default)]
    pub social_links: Vec<String>,
    /// Free-text language hints, e.g. `["English, Arabic"]`.
    #[serde(default)]
    pub languages: Vec<String>,
    pub locale: Option<String>,
    pub parent: Option<ParentRef>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EntityRecord {
    /// A record with only identity and timestamps set.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            slug: None,
            name: Some(name.into()),
            legal_name: None,
            description: None,
            brief: None,
            seo_title: None,
            seo_description: None,
            url: None,
            email: None,
            phone: None,
            contact_type: None,
            address: None,
            latitude: None,
            longitude: None,
            registration_number: None,
            tax_id: None,
            founding_date: None,
            logo: None,
            share_image: None,
            social_links: Vec::new(),
            languages: Vec::new(),
            locale: None,
            parent: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Trimmed name, `None` when absent or blank.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        non_blank(self.name.as_deref())
    }

    /// Description with the short brief as fallback.
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        non_blank(self.description.as_deref()).or_else(|| non_blank(self.brief.as_deref()))
    }
}

/// Trim a value and treat blank strings as absent.
#[must_use]
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_name_is_absent() {
        let mut entity = EntityRecord::new("ent-1", "   ");
        assert_eq!(entity.display_name(), None);
        entity.name = Some("  Acme Trading  ".into());
        assert_eq!(entity.display_name(), Some("Acme Trading"));
    }

    #[test]
    fn summary_falls_back_to_brief() {
        let mut entity = EntityRecord::new("ent-1", "Acme");
        entity.brief = Some("Short brief".into());
        assert_eq!(entity.summary(), Some("Short brief"));
        entity.description = Some("Long description".into());
        assert_eq!(entity.summary(), Some("Long description"));
    }

    #[test]
    fn blank_address_detection() {
        let mut address = PostalAddressFields {
            street: Some("  ".into()),
            ..Default::default()
        };
        assert!(address.is_blank());
        address.country = Some("AE".into());
        assert!(!address.is_blank());
    }

    #[test]
    fn deserializes_without_collections() {
        let json = serde_json::json!({
            "id": "ent-1",
            "name": "Acme",
            "created_at": "2026-02-08T12:00:00Z",
            "updated_at": "2026-02-08T12:00:00Z"
        });
        let entity: EntityRecord = serde_json::from_value(json).unwrap();
        assert!(entity.social_links.is_empty());
        assert!(entity.languages.is_empty());
        assert_eq!(entity.display_name(), Some("Acme"));
    }
}
