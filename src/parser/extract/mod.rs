pub mod abilities;
pub mod field;
pub mod media;
pub mod title;

use super::sections;
use crate::catalog::Agent;
use crate::heuristics::Heuristics;
use field::LabelPattern;

/// Run every pass over one document. Title, role and media see the whole
/// text; abilities only see the bounded section.
pub fn extract_all(markdown: &str, heuristics: &Heuristics, role: &LabelPattern) -> Agent {
    let abilities = sections::locate(markdown, heuristics)
        .map(|section| abilities::extract(section, heuristics))
        .unwrap_or_default();

    Agent {
        name: title::extract(markdown),
        role: role.extract(markdown),
        abilities,
        media: media::extract(markdown),
        markdown: markdown.to_string(),
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(md: &str) -> Agent {
        let h = Heuristics::default();
        let role = LabelPattern::new(&h.role_label).unwrap();
        extract_all(md, &h, &role)
    }

    fn fixture(name: &str) -> Agent {
        let md = std::fs::read_to_string(format!("tests/fixtures/{}.md", name)).unwrap();
        parse(&md)
    }

    #[test]
    fn minimal_document() {
        let md = "# Jett\nROLE\n\nDuelist\n\n## SPECIAL ABILITIES\n1. ![a](http://x/1.png)\nCLOUDBURST\nThrows a cloud.\n© 2020-2025 Riot Games";
        let a = parse(md);
        assert_eq!(a.name, "Jett");
        assert_eq!(a.role, "Duelist");
        assert_eq!(a.media, vec!["http://x/1.png"]);
        assert_eq!(a.abilities.len(), 1);
        assert_eq!(a.abilities[0].name, "CLOUDBURST");
        assert_eq!(a.abilities[0].description, "Throws a cloud.");
        assert_eq!(a.abilities[0].image, "http://x/1.png");
        assert_eq!(a.markdown, md);
    }

    #[test]
    fn no_heading_means_unnamed() {
        let a = parse("ROLE\nDuelist\n![a](http://x/1.png)");
        assert_eq!(a.name, "");
        assert_eq!(a.role, "Duelist");
        assert_eq!(a.media.len(), 1);
        assert!(a.abilities.is_empty());
    }

    #[test]
    fn no_abilities_section() {
        let a = parse("# Sage\nROLE\nSentinel\n1. ![a](http://x/1.png)\n![b](http://x/b.png)\nBARRIER ORB\nMakes a wall.");
        assert_eq!(a.name, "Sage");
        assert!(a.abilities.is_empty());
    }

    #[test]
    fn jett_fixture() {
        let a = fixture("jett");
        assert_eq!(a.name, "JETT");
        assert_eq!(a.role, "Duelist");

        let names: Vec<&str> = a.abilities.iter().map(|x| x.name.as_str()).collect();
        assert_eq!(names, vec!["CLOUDBURST", "UPDRAFT", "TAILWIND", "BLADE STORM"]);
        assert!(a.abilities.iter().all(|x| !x.description.is_empty()));
        assert!(a.abilities.iter().all(|x| !x.image.is_empty()));
        assert!(a.abilities[3].image.contains("&"));
        // Footer chrome never leaks into descriptions
        for x in &a.abilities {
            assert!(!x.description.contains("Riot Games"), "{}", x.description);
            assert!(!x.description.contains("Privacy"), "{}", x.description);
        }

        // Media dedups the thumbnails repeated further down the page
        let unique: std::collections::HashSet<_> = a.media.iter().collect();
        assert_eq!(unique.len(), a.media.len());
        assert!(a.media.iter().any(|m| m.contains("&")));
    }

    #[test]
    fn sage_fixture_skips_stop_words() {
        let a = fixture("sage");
        assert_eq!(a.name, "SAGE");
        assert_eq!(a.role, "Sentinel");
        let names: Vec<&str> = a.abilities.iter().map(|x| x.name.as_str()).collect();
        assert_eq!(names, vec!["Barrier Orb", "Slow Orb", "Healing Orb", "Resurrection"]);
        assert!(!names.iter().any(|n| n.eq_ignore_ascii_case("role")));
    }
}
