//! Business-rule thresholds.
//!
//! Every floor can be overridden per deployment.

use serde::{Deserialize, Serialize};

const fn default_min_name_length() -> usize {
    2
}

const fn default_max_name_length() -> usize {
    100
}

const fn default_min_logo_dimension() -> u32 {
    112
}

const fn default_min_description_length() -> usize {
    100
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct RulesConfig {
    #[serde(default)]
    pub require_logo: bool,

    #[serde(default)]
    pub require_address: bool,

    #[serde(default)]
    pub require_contact_point: bool,

    #[serde(default = "default_min_name_length")]
    pub min_name_length: usize,

    /// Names longer than this produce a warning, never an error.
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,

    /// Logo width/height floor in pixels.
    #[serde(default = "default_min_logo_dimension")]
    pub min_logo_dimension: u32,

    #[serde(default = "default_min_description_length")]
    pub min_description_length: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            require_logo: false,
            require_address: false,
            require_contact_point: false,
            min_name_length: default_min_name_length(),
            max_name_length: default_max_name_length(),
            min_logo_dimension: default_min_logo_dimension(),
            min_description_length: default_min_description_length(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = RulesConfig::default();
        assert!(!config.require_logo);
        assert!(!config.require_address);
        assert!(!config.require_contact_point);
        assert_eq!(config.min_name_length, 2);
        assert_eq!(config.max_name_length, 100);
        assert_eq!(config.min_logo_dimension, 112);
        assert_eq!(config.min_description_length, 100);
    }
}
