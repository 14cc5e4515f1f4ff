pub mod extract;
pub mod sections;
pub mod text;

use crate::catalog::Agent;
use crate::error::Result;
use crate::heuristics::Heuristics;
use extract::field::LabelPattern;

/// Heuristics plus the patterns compiled from them. Built once per run and
/// shared read-only across workers.
#[derive(Debug, Clone)]
pub struct Extractor {
    heuristics: Heuristics,
    role: LabelPattern,
}

impl Extractor {
    pub fn new(heuristics: Heuristics) -> Result<Self> {
        let role = LabelPattern::new(&heuristics.role_label)?;
        Ok(Extractor { heuristics, role })
    }

    /// markdown → agent. Never fails; missing pieces come back empty.
    pub fn parse(&self, markdown: &str) -> Agent {
        extract::extract_all(markdown, &self.heuristics, &self.role)
    }
}
