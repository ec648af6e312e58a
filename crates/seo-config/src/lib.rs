//! # seo-config
//!
//! Layered configuration loading for the structured-data pipeline using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SEOGRAPH_*` prefix, `__` as separator)
//! 2. Project-level `.seograph/config.toml`
//! 3. User-level `~/.config/seograph/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SEOGRAPH_SITE__BASE_URL` -> `site.base_url`,
//! `SEOGRAPH_RULES__REQUIRE_LOGO` -> `rules.require_logo`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use seo_config::SeoConfig;
//!
//! let config = SeoConfig::load_with_dotenv().expect("config");
//! if config.rich_results.enabled {
//!     println!("rich-results timeout: {}ms", config.rich_results.timeout_ms);
//! }
//! ```

mod error;
mod rich_results;
mod rules;
mod scoring;
mod site;

pub use error::ConfigError;
pub use rich_results::RichResultsConfig;
pub use rules::RulesConfig;
pub use scoring::ScoringConfig;
pub use site::SiteConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct SeoConfig {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub rules: RulesConfig,
    #[serde(default)]
    pub rich_results: RichResultsConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
}

impl SeoConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading. The loaded values are checked with
    /// [`Self::validate`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` when a source cannot be parsed, or
    /// `ConfigError::InvalidValue` when the merged values are inconsistent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".seograph/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("SEOGRAPH_").split("__"))
    }

    /// Reject combinations no pipeline stage can honor.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rules.min_name_length > self.rules.max_name_length {
            return Err(ConfigError::InvalidValue {
                field: "rules.min_name_length".into(),
                reason: format!(
                    "{} exceeds rules.max_name_length ({})",
                    self.rules.min_name_length, self.rules.max_name_length
                ),
            });
        }
        if self.rich_results.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "rich_results.timeout_ms".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if let Some(base_url) = &self.site.base_url {
            if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
                return Err(ConfigError::InvalidValue {
                    field: "site.base_url".into(),
                    reason: format!("'{base_url}' is not an absolute http(s) URL"),
                });
            }
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("seograph").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir looking
    /// for a `.env` file. Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}
