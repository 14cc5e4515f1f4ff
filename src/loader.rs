//! Input collection: scrape envelopes on disk → (path, raw text) pairs, and
//! envelope decoding into the markdown the extractor consumes.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{CatalogError, Result};

const ENVELOPE_EXT: &str = "json";

/// One raw input document, identified by its path.
#[derive(Debug, Clone)]
pub struct Source {
    pub path: PathBuf,
    pub text: String,
}

/// Scrape output wrapper. `metadata` is carried along but never interpreted.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub markdown: String,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

/// Read every `*.json` file directly under `dir`, in path order.
///
/// Failing to list `dir` is fatal; a single unreadable file is logged and skipped.
pub fn collect_sources(dir: &Path, limit: Option<usize>) -> Result<Vec<Source>> {
    let entries = fs::read_dir(dir).map_err(|source| CatalogError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(e) => Some(e.path()),
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                None
            }
        })
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == ENVELOPE_EXT))
        .collect();
    paths.sort();
    if let Some(n) = limit {
        paths.truncate(n);
    }

    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        match fs::read_to_string(&path) {
            Ok(text) => sources.push(Source { path, text }),
            Err(e) => warn!("Error reading {}: {}", path.display(), e),
        }
    }
    debug!("Collected {} envelopes from {}", sources.len(), dir.display());
    Ok(sources)
}

pub fn decode_envelope(source: &Source) -> Result<Envelope> {
    serde_json::from_str(&source.text).map_err(|e| CatalogError::Envelope {
        path: source.path.clone(),
        source: e,
    })
}

/// Load one document for inspection: `.md` files are taken as-is, anything
/// else is decoded as an envelope.
pub fn load_markdown(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|source| CatalogError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    if path.extension().is_some_and(|ext| ext == "md") {
        return Ok(text);
    }
    let source = Source {
        path: path.to_path_buf(),
        text,
    };
    decode_envelope(&source).map(|env| env.markdown)
}
