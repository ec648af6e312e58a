//! Scoring preset tunables.

use serde::{Deserialize, Serialize};

fn default_generic_filename_prefixes() -> Vec<String> {
    ["IMG_", "IMG-", "DSC_", "DSCN", "DCIM", "screenshot", "image", "photo", "untitled"]
        .into_iter()
        .map(String::from)
        .collect()
}

const fn default_min_image_width() -> u32 {
    1200
}

const fn default_min_image_height() -> u32 {
    630
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ScoringConfig {
    /// Filename prefixes (case-insensitive) that mark a camera/default name.
    #[serde(default = "default_generic_filename_prefixes")]
    pub generic_filename_prefixes: Vec<String>,

    /// Share-image width floor used by the image dimension policy.
    #[serde(default = "default_min_image_width")]
    pub min_image_width: u32,

    /// Share-image height floor used by the image dimension policy.
    #[serde(default = "default_min_image_height")]
    pub min_image_height: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            generic_filename_prefixes: default_generic_filename_prefixes(),
            min_image_width: default_min_image_width(),
            min_image_height: default_min_image_height(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_include_camera_prefixes() {
        let config = ScoringConfig::default();
        assert!(config.generic_filename_prefixes.iter().any(|p| p == "IMG_"));
        assert!(config.generic_filename_prefixes.iter().any(|p| p == "screenshot"));
        assert_eq!((config.min_image_width, config.min_image_height), (1200, 630));
    }
}
