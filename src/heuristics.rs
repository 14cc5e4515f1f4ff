//! Heuristic data driving the extractor: section/label names, boilerplate
//! markers and the name stop-list.
//!
//! Defaults match the agent pages the tool was written for. Other sources can
//! override any list from a config file without touching the extraction code.

use std::path::Path;

use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::debug;

use crate::error::Result;

const ENV_PREFIX: &str = "AGENT_CATALOG";

const SECTION_HEADING: &str = "## SPECIAL ABILITIES";
const ROLE_LABEL: &str = "ROLE";
const MAX_ABILITIES: usize = 4;

/// Markers that end the abilities section. Leading newline pins them to a line start.
const SECTION_END_MARKERS: &[&str] = &[
    "\n- [Download Riot Mobile Companion App]",
    "\n[Riot Games]",
    "\n© 2020-2025",
];

/// Line fragments that end description accumulation mid-paragraph.
const DESCRIPTION_STOP_MARKERS: &[&str] = &["Download Riot", "Riot Games", "© 2020"];

/// Fragments cut from a cleaned description, keeping the text before them.
const FOOTER_FRAGMENTS: &[&str] = &[
    "Download Riot Mobile Companion App",
    "Twitter",
    "YouTube",
    "Instagram",
    "TikTok",
    "Facebook",
    "Discord",
    "Riot Games",
    "© 2020-2025 Riot Games",
    "Privacy Notice",
    "Terms of Service",
    "ESRB",
    "Blood",
    "Language",
    "Violence",
    "Users Interact",
    "In-Game Purchases",
    "Check Session IFrame",
    "OIDC OP Iframe",
    "Auth Error",
];

/// Lines that look like ability names but are page chrome. Compared upper-cased.
const NAME_STOP_WORDS: &[&str] = &[
    "ROLE", "SPECIAL", "ABILITIES", "BLOOD", "LANGUAGE", "VIOLENCE", "USERS", "INTERACT",
    "PURCHASES", "Download", "Twitter", "YouTube", "Instagram", "TikTok", "Facebook", "Discord",
    "Riot", "Games", "Privacy", "Notice", "Terms", "Service", "ESRB", "Check", "Session",
    "IFrame", "OIDC", "OP", "Auth", "Error",
];

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Heuristics {
    pub section_heading: String,
    pub role_label: String,
    pub max_abilities: usize,
    pub section_end_markers: Vec<String>,
    pub description_stop_markers: Vec<String>,
    pub footer_fragments: Vec<String>,
    pub name_stop_words: Vec<String>,
}

impl Default for Heuristics {
    fn default() -> Self {
        Heuristics {
            section_heading: SECTION_HEADING.to_string(),
            role_label: ROLE_LABEL.to_string(),
            max_abilities: MAX_ABILITIES,
            section_end_markers: to_owned(SECTION_END_MARKERS),
            description_stop_markers: to_owned(DESCRIPTION_STOP_MARKERS),
            footer_fragments: to_owned(FOOTER_FRAGMENTS),
            name_stop_words: to_owned(NAME_STOP_WORDS),
        }
    }
}

impl Heuristics {
    /// Built-in defaults, overlaid by an optional file and `AGENT_CATALOG_*`
    /// environment variables (scalar keys only).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_env(path: Option<&Path>, env: Environment) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        let settings = builder
            .add_source(env.try_parsing(true))
            .build()?;

        let heuristics: Heuristics = settings.try_deserialize()?;
        debug!(
            section = %heuristics.section_heading,
            stop_words = heuristics.name_stop_words.len(),
            "Loaded heuristics"
        );
        Ok(heuristics)
    }

    /// True if `line` upper-cased equals any stop word upper-cased.
    pub fn is_stop_word(&self, line: &str) -> bool {
        let upper = line.to_uppercase();
        self.name_stop_words
            .iter()
            .any(|w| w.to_uppercase() == upper)
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
