use crate::heuristics::Heuristics;

/// Slice of `markdown` from the section heading up to the earliest end marker
/// after it (or end of document). `None` if the heading is absent.
pub fn locate<'a>(markdown: &'a str, heuristics: &Heuristics) -> Option<&'a str> {
    let heading = heuristics.section_heading.as_str();
    if heading.is_empty() {
        return None;
    }
    let start = markdown.find(heading)?;
    let section = &markdown[start..];

    // Markers are searched past the heading itself so they never cut it.
    let body = &section[heading.len()..];
    let end = heuristics
        .section_end_markers
        .iter()
        .filter(|m| !m.is_empty())
        .filter_map(|m| body.find(m.as_str()))
        .min()
        .map_or(section.len(), |idx| heading.len() + idx);

    Some(&section[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locate_default(md: &str) -> Option<&str> {
        locate(md, &Heuristics::default())
    }

    #[test]
    fn absent_heading() {
        assert_eq!(locate_default("# Jett\nROLE\nDuelist"), None);
        assert_eq!(locate_default("## SPECIAL"), None);
    }

    #[test]
    fn runs_to_end_without_markers() {
        let md = "# Jett\n## SPECIAL ABILITIES\nCLOUDBURST\nThrows a cloud.";
        assert_eq!(
            locate_default(md),
            Some("## SPECIAL ABILITIES\nCLOUDBURST\nThrows a cloud.")
        );
    }

    #[test]
    fn stops_before_copyright() {
        let md = "## SPECIAL ABILITIES\nUPDRAFT\nLifts up.\n© 2020-2025 Riot Games\nPrivacy";
        let section = locate_default(md).unwrap();
        assert_eq!(section, "## SPECIAL ABILITIES\nUPDRAFT\nLifts up.");
        assert!(!section.contains("Riot Games"));
        assert!(!section.contains("Privacy"));
    }

    #[test]
    fn earliest_marker_wins() {
        let md = "## SPECIAL ABILITIES\nA\n[Riot Games](https://riot)\nB\n- [Download Riot Mobile Companion App](x)\n© 2020-2025";
        assert_eq!(locate_default(md), Some("## SPECIAL ABILITIES\nA"));
    }

    #[test]
    fn markers_before_heading_are_ignored() {
        let md = "[Riot Games](https://riot)\n## SPECIAL ABILITIES\nDASH\n© 2020-2025 Riot Games";
        assert_eq!(locate_default(md), Some("## SPECIAL ABILITIES\nDASH"));
    }

    #[test]
    fn custom_heading_and_markers() {
        let h = Heuristics {
            section_heading: "## SKILLS".to_string(),
            section_end_markers: vec!["\n---".to_string()],
            ..Heuristics::default()
        };
        assert_eq!(locate("x\n## SKILLS\nJUMP\n---\nfooter", &h), Some("## SKILLS\nJUMP"));
    }
}
