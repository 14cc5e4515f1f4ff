use std::sync::LazyLock;

use regex::Regex;

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#\s+(\S.*)$").unwrap());

/// Text of the first `# heading` line, trimmed; empty if there is none.
pub fn extract(markdown: &str) -> String {
    markdown
        .lines()
        .find_map(|line| TITLE_RE.captures(line))
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_top_level_heading() {
        assert_eq!(extract("intro\n# Jett\n# Other"), "Jett");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(extract("#    KAY/O   \r\nbody"), "KAY/O");
    }

    #[test]
    fn keeps_trailing_content() {
        assert_eq!(extract("# Jett // Duelist"), "Jett // Duelist");
    }

    #[test]
    fn ignores_deeper_headings_and_hashtags() {
        assert_eq!(extract("## SPECIAL ABILITIES\n#hashtag\n  # indented"), "");
    }

    #[test]
    fn whitespace_only_heading_is_skipped() {
        assert_eq!(extract("#   \n# Jett"), "Jett");
        assert_eq!(extract("#\t\r\n# Sage"), "Sage");
    }

    #[test]
    fn empty_document() {
        assert_eq!(extract(""), "");
    }
}
