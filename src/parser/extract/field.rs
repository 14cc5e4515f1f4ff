use regex::Regex;

use crate::error::{CatalogError, Result};

/// Compiled matcher for a `LABEL` line followed by its value line.
#[derive(Debug, Clone)]
pub struct LabelPattern {
    re: Regex,
}

impl LabelPattern {
    pub fn new(label: &str) -> Result<Self> {
        // Label alone on its line; blank lines may sit between it and the value.
        let pattern = format!(r"(?m)^[ \t]*{}[ \t]*\r?\n\s*(\S.*)$", regex::escape(label));
        let re = Regex::new(&pattern).map_err(|source| CatalogError::Pattern {
            label: label.to_string(),
            source,
        })?;
        Ok(LabelPattern { re })
    }

    /// Trimmed value of the first match, or empty.
    pub fn extract(&self, markdown: &str) -> String {
        self.re
            .captures(markdown)
            .map(|caps| caps[1].trim().to_string())
            .unwrap_or_default()
    }
}
