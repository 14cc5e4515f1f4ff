use indicatif::ProgressBar;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::catalog::{Agent, Catalog};
use crate::loader::{self, Source};
use crate::parser::Extractor;

const CHUNK_SIZE: usize = 500;

pub struct RunSummary {
    pub catalog: Catalog,
    pub documents: usize,
    /// Envelopes that failed to decode.
    pub skipped: usize,
    /// Documents without a top-level heading.
    pub unnamed: usize,
}

enum Outcome {
    Parsed(Agent),
    Malformed,
}

/// Extract every source in parallel and fold the results into one catalog.
///
/// Each chunk yields a partial catalog that is merged in input order, so on a
/// name collision the later source wins regardless of worker scheduling.
pub fn build_catalog(sources: &[Source], extractor: &Extractor, pb: &ProgressBar) -> RunSummary {
    let mut summary = RunSummary {
        catalog: Catalog::new(),
        documents: sources.len(),
        skipped: 0,
        unnamed: 0,
    };

    for chunk in sources.chunks(CHUNK_SIZE) {
        let outcomes: Vec<Outcome> = chunk
            .par_iter()
            .map(|source| process_source(source, extractor))
            .collect();

        let mut partial = Catalog::new();
        for outcome in outcomes {
            match outcome {
                Outcome::Parsed(agent) => {
                    if !partial.insert(agent) {
                        summary.unnamed += 1;
                    }
                }
                Outcome::Malformed => summary.skipped += 1,
            }
        }
        summary.catalog.merge(partial);
        pb.inc(chunk.len() as u64);
    }

    summary
}

fn process_source(source: &Source, extractor: &Extractor) -> Outcome {
    match loader::decode_envelope(source) {
        Ok(envelope) => {
            debug!(
                path = %source.path.display(),
                metadata_keys = envelope.metadata.as_object().map_or(0, |m| m.len()),
                "Decoded envelope"
            );
            Outcome::Parsed(extractor.parse(&envelope.markdown))
        }
        Err(e) => {
            warn!("Skipping document: {}", e);
            Outcome::Malformed
        }
    }
}

// ── Tests ──
