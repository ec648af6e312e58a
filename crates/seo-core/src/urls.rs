//! URL and value normalization helpers.
//!
//! Pure functions used by the graph builder: absolute-URL coercion, HTTPS
//! upgrade, case-insensitive de-duplication, language/locale mapping, and
//! date truncation. None of them fail; values that cannot be interpreted are
//! dropped (`None`) so the builder degrades to omission.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use url::Url;

/// Date format emitted for date-only fields.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Coerce a value into an absolute URL.
///
/// - blank → `None`
/// - `//host/path` → `https://host/path`
/// - `scheme://...` → kept as-is
/// - `/path` or `./path` → joined onto `base` (or `None` without a base)
/// - `example.com/x` → `https://example.com/x`
/// - anything else → joined onto `base` when one is given
#[must_use]
pub fn to_absolute_url(value: &str, base: Option<&str>) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Some(rest) = value.strip_prefix("//") {
        return Some(format!("https://{rest}"));
    }
    if has_scheme(value) {
        return Some(value.to_string());
    }
    if value.starts_with('/') || value.starts_with("./") || value.starts_with("../") {
        return join_onto(base?, value);
    }
    if looks_like_host(value) {
        return Some(format!("https://{value}"));
    }
    join_onto(base?, value)
}

/// Rewrite an `http://` prefix (any case) to `https://`.
#[must_use]
pub fn upgrade_to_https(value: &str) -> String {
    match value.get(..7) {
        Some(prefix) if prefix.eq_ignore_ascii_case("http://") => {
            format!("https://{}", &value[7..])
        }
        _ => value.to_string(),
    }
}

/// Absolute-URL coercion followed by the HTTPS upgrade.
#[must_use]
pub fn normalize_url(value: &str, base: Option<&str>) -> Option<String> {
    to_absolute_url(value, base).map(|url| upgrade_to_https(&url))
}

/// Normalize every entry and drop case-insensitive duplicates.
///
/// The first spelling of each URL wins and input order is preserved.
#[must_use]
pub fn dedupe_urls<I, S>(urls: I, base: Option<&str>) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    urls.into_iter()
        .filter_map(|raw| normalize_url(raw.as_ref(), base))
        .filter(|url| seen.insert(url.to_lowercase()))
        .collect()
}

/// Whether a value parses as an absolute `http`/`https` URL with a host.
#[must_use]
pub fn is_absolute_http_url(value: &str) -> bool {
    Url::parse(value).is_ok_and(|url| {
        matches!(url.scheme(), "http" | "https") && url.host_str().is_some_and(|h| !h.is_empty())
    })
}

/// Map free-text language hints onto normalized language tokens.
///
/// Each entry may hold several languages separated by `,` `;` `/` `|` `&`
/// or the word "and". Arabic and English are recognized by name or code;
/// anything else passes through trimmed. Duplicates are removed, keeping the
/// first occurrence.
#[must_use]
pub fn map_languages<S: AsRef<str>>(languages: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    languages
        .iter()
        .flat_map(|entry| split_language_list(entry.as_ref()))
        .map(|token| map_language_token(&token))
        .filter(|token| seen.insert(token.to_lowercase()))
        .collect()
}

/// Normalize a locale code to BCP 47 casing (`EN_us` → `en-US`).
#[must_use]
pub fn normalize_locale(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let mut parts = value.split(['_', '-']).filter(|p| !p.is_empty());
    let language = parts.next()?.to_lowercase();
    match parts.next() {
        Some(region) => Some(format!("{language}-{}", region.to_uppercase())),
        None => Some(language),
    }
}

/// Truncate a timestamp or date string to `YYYY-MM-DD`.
#[must_use]
pub fn truncate_to_date(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive().format(DATE_FORMAT).to_string());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, pattern) {
            return Some(dt.date().format(DATE_FORMAT).to_string());
        }
    }
    value
        .get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, DATE_FORMAT).ok())
        .map(|date| date.format(DATE_FORMAT).to_string())
}

fn has_scheme(value: &str) -> bool {
    value.split_once("://").is_some_and(|(scheme, _)| {
        let mut chars = scheme.chars();
        chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

fn looks_like_host(value: &str) -> bool {
    let host = value.split(['/', '?', '#']).next().unwrap_or_default();
    host.contains('.')
        && !host.starts_with('.')
        && !host.ends_with('.')
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | ':'))
}

fn join_onto(base: &str, value: &str) -> Option<String> {
    let base = Url::parse(&upgrade_to_https(base.trim())).ok()?;
    base.join(value).ok().map(String::from)
}

fn split_language_list(entry: &str) -> Vec<String> {
    entry
        .split([',', ';', '/', '|', '&'])
        .flat_map(|part| {
            let mut tokens = Vec::new();
            let mut current: Vec<&str> = Vec::new();
            for word in part.split_whitespace() {
                if word.eq_ignore_ascii_case("and") {
                    tokens.push(current.join(" "));
                    current.clear();
                } else {
                    current.push(word);
                }
            }
            tokens.push(current.join(" "));
            tokens
        })
        .filter(|token| !token.is_empty())
        .collect()
}

fn map_language_token(token: &str) -> String {
    let lower = token.to_lowercase();
    let is_code = |code: &str| {
        lower == code
            || lower
                .strip_prefix(code)
                .is_some_and(|rest| rest.starts_with('-') || rest.starts_with('_'))
    };
    if lower.contains("arabic") || is_code("ar") {
        "ar".to_string()
    } else if lower.contains("english") || is_code("en") {
        "en".to_string()
    } else {
        token.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("example.com", None, Some("https://example.com"))]
    #[case("  example.com/about ", None, Some("https://example.com/about"))]
    #[case("//cdn.example.com/logo.png", None, Some("https://cdn.example.com/logo.png"))]
    #[case("http://example.com", None, Some("http://example.com"))]
    #[case("/uploads/logo.png", Some("https://site.test"), Some("https://site.test/uploads/logo.png"))]
    #[case("/uploads/logo.png", None, None)]
    #[case("uploads/logo.png", Some("https://site.test/"), Some("https://site.test/uploads/logo.png"))]
    #[case("   ", None, None)]
    #[case("not a url", None, None)]
    fn absolute_url_coercion(
        #[case] input: &str,
        #[case] base: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(to_absolute_url(input, base).as_deref(), expected);
    }

    #[test]
    fn upgrade_is_case_insensitive() {
        assert_eq!(upgrade_to_https("HTTP://Example.com/X"), "https://Example.com/X");
        assert_eq!(upgrade_to_https("https://example.com"), "https://example.com");
        assert_eq!(upgrade_to_https("ftp://example.com"), "ftp://example.com");
        assert_eq!(upgrade_to_https("http"), "http");
    }

    #[test]
    fn bare_host_becomes_https() {
        assert_eq!(
            normalize_url("example.com", None).as_deref(),
            Some("https://example.com")
        );
    }

    #[test]
    fn dedupe_is_case_insensitive_and_keeps_first() {
        let urls = dedupe_urls(
            ["HTTP://Example.com/X", "http://example.com/x", "twitter.com/acme"],
            None,
        );
        assert_eq!(
            urls,
            vec![
                "https://Example.com/X".to_string(),
                "https://twitter.com/acme".to_string()
            ]
        );
    }

    #[test]
    fn dedupe_drops_blank_entries() {
        let urls = dedupe_urls(["", "  ", "https://a.test"], None);
        assert_eq!(urls, vec!["https://a.test".to_string()]);
    }

    #[rstest]
    #[case("https://example.com", true)]
    #[case("http://example.com/path?q=1", true)]
    #[case("ftp://example.com", false)]
    #[case("example.com", false)]
    #[case("https://", false)]
    fn absolute_http_detection(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_absolute_http_url(input), expected);
    }

    #[test]
    fn languages_map_by_name_and_code() {
        let mapped = map_languages(&["Arabic, English", "en", "AR-ae", "French and arabic"]);
        assert_eq!(mapped, vec!["ar", "en", "French"]);
    }

    #[test]
    fn unmapped_language_passes_through() {
        assert_eq!(map_languages(&[" Urdu / Hindi "]), vec!["Urdu", "Hindi"]);
    }

    #[test]
    fn locale_normalization() {
        assert_eq!(normalize_locale("EN_us").as_deref(), Some("en-US"));
        assert_eq!(normalize_locale("ar").as_deref(), Some("ar"));
        assert_eq!(normalize_locale("  "), None);
    }

    #[rstest]
    #[case("2019-03-04T10:20:30Z", Some("2019-03-04"))]
    #[case("2019-03-04T10:20:30+04:00", Some("2019-03-04"))]
    #[case("2019-03-04T10:20:30", Some("2019-03-04"))]
    #[case("2019-03-04 10:20:30", Some("2019-03-04"))]
    #[case("2019-03-04", Some("2019-03-04"))]
    #[case("March 2019", None)]
    fn date_truncation(#[case] input: &str, #[case] expected: Option<&str>) {
        assert_eq!(truncate_to_date(input).as_deref(), expected);
    }
}
