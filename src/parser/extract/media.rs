use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!\[.*?\]\((.*?)\)").unwrap());

/// Every image target in document order, deduplicated on the raw (trimmed)
/// target and then normalized. Distinct raw strings that normalize to the
/// same URL are both kept.
pub fn extract(markdown: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut media = Vec::new();

    for caps in IMAGE_RE.captures_iter(markdown) {
        let Some(target) = caps.get(1) else { continue };
        let raw = target.as_str().trim();
        if raw.is_empty() || !seen.insert(raw) {
            continue;
        }
        media.push(normalize_url(raw));
    }

    media
}

/// Canonical serialization of an absolute URL; anything unparseable comes
/// back unchanged. Query `&` separators stay literal.
pub fn normalize_url(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(url) => url.to_string(),
        Err(_) => raw.to_string(),
    }
}
