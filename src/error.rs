use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read input directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed envelope in {path}: {source}")]
    Envelope {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid heuristics configuration: {0}")]
    Heuristics(#[from] config::ConfigError),

    #[error("invalid label pattern for {label:?}: {source}")]
    Pattern { label: String, source: regex::Error },

    #[error("cannot write catalog: {0}")]
    Write(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
