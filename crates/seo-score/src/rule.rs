//! Field scoring policies.
//!
//! Each [`FieldRule`] maps the field's value (plus the whole record, for
//! composite rules) to a [`FieldEvaluation`]. Rules may return any score; the
//! engine clamps it to the field's maximum.

use std::fmt;
use std::sync::Arc;

use seo_core::urls::is_absolute_http_url;
use serde_json::Value;

use crate::engine::lookup;
use crate::field::FieldEvaluation;

/// Injected policy: `(value, record, max_score) -> evaluation`.
pub type CustomRule = Arc<dyn Fn(Option<&Value>, &Value, u32) -> FieldEvaluation + Send + Sync>;

#[derive(Clone)]
pub enum FieldRule {
    /// Error below `min` characters, good within `min..=max`, warning above.
    TextLength { min: usize, max: usize },
    /// Good when set. Missing is a warning, or an error when `critical`.
    Presence { critical: bool },
    /// Scales with the number of entries up to `recommended`.
    ListCount { recommended: usize },
    /// Must parse as an absolute http(s) URL.
    AbsoluteUrl { critical: bool },
    /// Reads width and height from the record rather than the field value.
    ImageDimensions {
        width_field: String,
        height_field: String,
        min_width: u32,
        min_height: u32,
    },
    /// Penalizes camera and placeholder filenames.
    Filename { generic_prefixes: Vec<String> },
    Custom(CustomRule),
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TextLength { min, max } => f
                .debug_struct("TextLength")
                .field("min", min)
                .field("max", max)
                .finish(),
            Self::Presence { critical } => {
                f.debug_struct("Presence").field("critical", critical).finish()
            }
            Self::ListCount { recommended } => f
                .debug_struct("ListCount")
                .field("recommended", recommended)
                .finish(),
            Self::AbsoluteUrl { critical } => {
                f.debug_struct("AbsoluteUrl").field("critical", critical).finish()
            }
            Self::ImageDimensions {
                width_field,
                height_field,
                min_width,
                min_height,
            } => f
                .debug_struct("ImageDimensions")
                .field("width_field", width_field)
                .field("height_field", height_field)
                .field("min_width", min_width)
                .field("min_height", min_height)
                .finish(),
            Self::Filename { generic_prefixes } => f
                .debug_struct("Filename")
                .field("generic_prefixes", generic_prefixes)
                .finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl FieldRule {
    /// Wrap a closure as a rule.
    pub fn custom<F>(rule: F) -> Self
    where
        F: Fn(Option<&Value>, &Value, u32) -> FieldEvaluation + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(rule))
    }

    #[must_use]
    pub fn evaluate(
        &self,
        label: &str,
        value: Option<&Value>,
        record: &Value,
        max_score: u32,
    ) -> FieldEvaluation {
        match self {
            Self::TextLength { min, max } => text_length(label, value, *min, *max, max_score),
            Self::Presence { critical } => presence(label, value, *critical, max_score),
            Self::ListCount { recommended } => list_count(label, value, *recommended, max_score),
            Self::AbsoluteUrl { critical } => absolute_url(label, value, *critical, max_score),
            Self::ImageDimensions {
                width_field,
                height_field,
                min_width,
                min_height,
            } => image_dimensions(
                dimension(record, width_field),
                dimension(record, height_field),
                (*min_width, *min_height),
                max_score,
            ),
            Self::Filename { generic_prefixes } => {
                filename(label, value, generic_prefixes, max_score)
            }
            Self::Custom(rule) => rule(value, record, max_score),
        }
    }
}

fn text(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(map)) => !map.is_empty(),
        Some(_) => true,
    }
}

/// `max * part / whole`, rounded down.
fn proportional(max: u32, part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return max;
    }
    let scaled = u64::from(max) * part as u64 / whole as u64;
    u32::try_from(scaled).unwrap_or(max)
}

fn missing(label: &str, critical: bool) -> FieldEvaluation {
    if critical {
        FieldEvaluation::error(0, format!("{label} is required"))
    } else {
        FieldEvaluation::warning(0, format!("{label} is missing"))
    }
}

fn text_length(
    label: &str,
    value: Option<&Value>,
    min: usize,
    max: usize,
    max_score: u32,
) -> FieldEvaluation {
    let Some(text) = text(value) else {
        return FieldEvaluation::error(0, format!("{label} is missing"));
    };
    let length = text.chars().count();
    if length < min {
        FieldEvaluation::error(
            proportional(max_score / 2, length, min),
            format!("{label} is too short ({length} of {min}-{max} characters)"),
        )
    } else if length > max {
        FieldEvaluation::warning(
            max_score / 2,
            format!("{label} is too long ({length} characters, aim for at most {max})"),
        )
    } else {
        FieldEvaluation::good(max_score, format!("{label} length is good ({length} characters)"))
    }
}

fn presence(label: &str, value: Option<&Value>, critical: bool, max_score: u32) -> FieldEvaluation {
    if is_present(value) {
        FieldEvaluation::good(max_score, format!("{label} is set"))
    } else {
        missing(label, critical)
    }
}

fn list_count(
    label: &str,
    value: Option<&Value>,
    recommended: usize,
    max_score: u32,
) -> FieldEvaluation {
    let count = match value {
        Some(Value::Array(items)) => items.iter().filter(|item| is_present(Some(item))).count(),
        other => usize::from(is_present(other)),
    };
    if count == 0 {
        FieldEvaluation::warning(0, format!("No {label} added"))
    } else if count < recommended {
        FieldEvaluation::warning(
            proportional(max_score, count, recommended),
            format!("{count} {label} added, {} more recommended", recommended - count),
        )
    } else {
        FieldEvaluation::good(max_score, format!("{count} {label} added"))
    }
}

fn absolute_url(
    label: &str,
    value: Option<&Value>,
    critical: bool,
    max_score: u32,
) -> FieldEvaluation {
    let Some(url) = text(value) else {
        return missing(label, critical);
    };
    if is_absolute_http_url(url) {
        FieldEvaluation::good(max_score, format!("{label} is a valid URL"))
    } else {
        FieldEvaluation::error(0, format!("{label} \"{url}\" is not an absolute http(s) URL"))
    }
}

fn dimension(record: &Value, field: &str) -> Option<u64> {
    lookup(record, field).and_then(|v| match v {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn image_dimensions(
    width: Option<u64>,
    height: Option<u64>,
    (min_width, min_height): (u32, u32),
    max_score: u32,
) -> FieldEvaluation {
    let (Some(width), Some(height)) = (width, height) else {
        return if width.is_none() && height.is_none() {
            FieldEvaluation::info("Image dimensions unknown")
        } else {
            FieldEvaluation::warning(0, "Image dimensions incomplete")
        };
    };
    let (min_w, min_h) = (u64::from(min_width), u64::from(min_height));
    if width >= min_w && height >= min_h {
        FieldEvaluation::good(
            max_score,
            format!("{width}×{height} meets the recommended {min_width}×{min_height}"),
        )
    } else if width.saturating_mul(2) >= min_w && height.saturating_mul(2) >= min_h {
        FieldEvaluation::warning(
            max_score / 2,
            format!("{width}×{height} is below the recommended {min_width}×{min_height}"),
        )
    } else {
        FieldEvaluation::error(
            0,
            format!("{width}×{height} is far below the recommended {min_width}×{min_height}"),
        )
    }
}

/// File stem of a path or URL: last segment, no query, no extension.
fn file_stem(value: &str) -> &str {
    let path = value.split(['?', '#']).next().unwrap_or(value);
    let name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    }
}

fn is_generic_stem(stem: &str, prefixes: &[String]) -> bool {
    let lower = stem.to_lowercase();
    let prefixed = prefixes
        .iter()
        .any(|prefix| lower.starts_with(&prefix.to_lowercase()));
    let digits_only = stem.chars().any(|c| c.is_ascii_digit())
        && stem
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '-' | '_' | ' '));
    prefixed || digits_only
}

fn filename(
    label: &str,
    value: Option<&Value>,
    prefixes: &[String],
    max_score: u32,
) -> FieldEvaluation {
    let Some(raw) = text(value) else {
        return FieldEvaluation::warning(0, format!("{label} is missing"));
    };
    let stem = file_stem(raw);
    if is_generic_stem(stem, prefixes) {
        FieldEvaluation::warning(
            max_score / 4,
            format!("\"{stem}\" looks like a camera or placeholder name; use descriptive words"),
        )
    } else {
        FieldEvaluation::good(max_score, format!("\"{stem}\" is descriptive"))
    }
}
