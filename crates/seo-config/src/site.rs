//! Site identity used when linking graph nodes across pages.

use serde::{Deserialize, Serialize};

/// Default path segment under which entity pages are published.
fn default_entity_path_prefix() -> String {
    String::from("companies")
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SiteConfig {
    /// Public origin of the site (e.g., `https://directory.example`).
    #[serde(default)]
    pub base_url: Option<String>,

    /// Human-readable site name, emitted on the `WebSite` node.
    #[serde(default)]
    pub name: Option<String>,

    /// Path segment for entity pages: `{base_url}/{prefix}/{slug}`.
    #[serde(default = "default_entity_path_prefix")]
    pub entity_path_prefix: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            name: None,
            entity_path_prefix: default_entity_path_prefix(),
        }
    }
}

impl SiteConfig {
    /// Base URL without a trailing slash, `None` when unset or blank.
    #[must_use]
    pub fn origin(&self) -> Option<&str> {
        self.base_url
            .as_deref()
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
    }

    /// Whether enough is configured to emit a `WebSite` node.
    #[must_use]
    pub fn has_website(&self) -> bool {
        self.origin().is_some() && self.name.as_deref().is_some_and(|n| !n.trim().is_empty())
    }

    /// Published page URL of the entity with the given slug.
    #[must_use]
    pub fn entity_page_url(&self, slug: &str) -> Option<String> {
        let prefix = self.entity_path_prefix.trim_matches('/');
        self.origin().map(|origin| {
            if prefix.is_empty() {
                format!("{origin}/{slug}")
            } else {
                format!("{origin}/{prefix}/{slug}")
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_no_origin() {
        let config = SiteConfig::default();
        assert_eq!(config.origin(), None);
        assert!(!config.has_website());
        assert_eq!(config.entity_path_prefix, "companies");
    }

    #[test]
    fn entity_page_url_trims_slashes() {
        let config = SiteConfig {
            base_url: Some("https://directory.example/".into()),
            name: Some("Directory".into()),
            entity_path_prefix: "/companies/".into(),
        };
        assert!(config.has_website());
        assert_eq!(
            config.entity_page_url("acme").as_deref(),
            Some("https://directory.example/companies/acme")
        );
    }

    #[test]
    fn empty_prefix_publishes_at_root() {
        let config = SiteConfig {
            base_url: Some("https://directory.example".into()),
            name: None,
            entity_path_prefix: String::new(),
        };
        assert_eq!(
            config.entity_page_url("acme").as_deref(),
            Some("https://directory.example/acme")
        );
    }
}
