//! Line-shape predicates and description cleanup shared by the passes.

use std::sync::LazyLock;

use regex::Regex;

static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!\[.*?\]\(.*?\)").unwrap());
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap());
static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

pub const IMAGE_MARKER: char = '!';

/// Has at least one cased letter and no lowercase ones.
pub fn is_all_caps(s: &str) -> bool {
    s.chars().any(char::is_uppercase) && !s.chars().any(char::is_lowercase)
}

/// Every whitespace-separated word starts with an uppercase letter.
/// The rest of each word is unconstrained ("KAY/O", "McQueen").
pub fn is_title_case(s: &str) -> bool {
    let mut words = s.split_whitespace().peekable();
    words.peek().is_some()
        && words.all(|w| w.chars().next().is_some_and(char::is_uppercase))
}

/// Length window shared by name candidates and the description stop test.
pub fn is_short_line(s: &str) -> bool {
    let n = s.chars().count();
    n > 3 && n < 50
}

/// All-caps or title-case: the shape of an ability name.
pub fn looks_like_name(s: &str) -> bool {
    is_all_caps(s) || is_title_case(s)
}

pub fn is_image_line(s: &str) -> bool {
    s.starts_with(IMAGE_MARKER)
}

/// Strip images, unwrap links to their label, collapse whitespace, then cut
/// at each footer fragment. A fragment at offset 0 is left alone.
pub fn clean_description(raw: &str, footer_fragments: &[String]) -> String {
    let text = IMAGE_RE.replace_all(raw, "");
    let text = LINK_RE.replace_all(&text, "$1");
    let mut text = WS_RE.replace_all(&text, " ").trim().to_string();

    for fragment in footer_fragments {
        if let Some(idx) = text.find(fragment.as_str()) {
            if idx > 0 {
                text.truncate(idx);
            }
        }
    }

    text.trim().to_string()
}
