//! Ability extraction inside the bounded abilities section.
//!
//! The section opens with numbered thumbnails (`1. ![..](url)`) that fix the
//! image for each ordinal slot. After them come the abilities themselves: a
//! short all-caps or title-case name line followed by free-text description
//! lines, up to the next name-shaped line.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::media::normalize_url;
use crate::catalog::Ability;
use crate::heuristics::Heuristics;
use crate::parser::text::{clean_description, is_image_line, is_short_line, looks_like_name};

static NUMBERED_IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.\s*!\[.*?\]\((.*?)\)").unwrap());

const MAX_NAME_SPACES: usize = 3;

pub fn extract(section: &str, heuristics: &Heuristics) -> Vec<Ability> {
    let lines: Vec<&str> = section.lines().collect();
    let (ordinals, scan_start) = numbered_images(&lines);

    // Thumbnails count as images already seen.
    let mut seen_large_image = scan_start > 0;
    let mut abilities = Vec::new();

    // Single pass: after a name the walk resumes on the very next line, so
    // description lines are scanned again as potential names.
    for (i, raw) in lines.iter().enumerate().skip(scan_start) {
        if abilities.len() >= heuristics.max_abilities {
            break;
        }

        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if is_image_line(line) {
            seen_large_image = true;
            continue;
        }
        if !seen_large_image || !is_name_candidate(line, heuristics) {
            continue;
        }

        let description = collect_description(&lines[i + 1..], heuristics);
        let image = ordinals
            .get(&(abilities.len() + 1))
            .map(|raw| normalize_url(raw))
            .unwrap_or_default();

        abilities.push(Ability {
            name: line.to_string(),
            description,
            image,
        });
    }

    abilities
}

/// Ordinal → raw image target, plus the line index just past the last
/// numbered image (0 if there were none).
fn numbered_images(lines: &[&str]) -> (BTreeMap<usize, String>, usize) {
    let mut ordinals = BTreeMap::new();
    let mut scan_start = 0;

    for (i, line) in lines.iter().enumerate() {
        if let Some(caps) = NUMBERED_IMAGE_RE.captures(line) {
            if let Ok(n) = caps[1].parse::<usize>() {
                ordinals.insert(n, caps[2].trim().to_string());
            }
            scan_start = i + 1;
        }
    }

    (ordinals, scan_start)
}

fn is_name_candidate(line: &str, heuristics: &Heuristics) -> bool {
    is_short_line(line)
        && line.matches(' ').count() <= MAX_NAME_SPACES
        && looks_like_name(line)
        && !heuristics.is_stop_word(line)
}

/// A line that would open the next ability. List items and links never do.
fn starts_next_ability(line: &str) -> bool {
    !line.is_empty()
        && !is_image_line(line)
        && !line.starts_with('-')
        && !line.starts_with('[')
        && is_short_line(line)
        && looks_like_name(line)
}

fn collect_description(rest: &[&str], heuristics: &Heuristics) -> String {
    let mut parts = Vec::new();

    for raw in rest {
        let line = raw.trim();
        if starts_next_ability(line) {
            break;
        }
        if heuristics
            .description_stop_markers
            .iter()
            .any(|m| !m.is_empty() && line.contains(m.as_str()))
        {
            break;
        }
        if !line.is_empty() && !is_image_line(line) {
            parts.push(line);
        }
    }

    clean_description(&parts.join(" "), &heuristics.footer_fragments)
}
