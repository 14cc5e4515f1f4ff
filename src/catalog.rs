use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use crate::error::{CatalogError, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Ability {
    pub name: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Agent {
    pub name: String,
    pub role: String,
    pub abilities: Vec<Ability>,
    pub media: Vec<String>,
    pub markdown: String,
}

/// Agents keyed by name. `BTreeMap` keeps the serialized order stable.
#[derive(Debug, Default, Serialize)]
pub struct Catalog {
    pub agents: BTreeMap<String, Agent>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an agent, replacing any earlier one with the same name.
    /// Unnamed agents are dropped; returns whether the agent was stored.
    pub fn insert(&mut self, agent: Agent) -> bool {
        if agent.name.is_empty() {
            return false;
        }
        self.agents.insert(agent.name.clone(), agent);
        true
    }

    /// Fold a partial catalog in; entries from `other` win on collision.
    pub fn merge(&mut self, other: Catalog) {
        self.agents.extend(other.agents);
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Pretty JSON with two-space indent. serde_json leaves `&` unescaped.
    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut writer, self).map_err(CatalogError::Write)?;
        writer
            .write_all(b"\n")
            .map_err(|e| CatalogError::Write(serde_json::Error::io(e)))
    }
}
