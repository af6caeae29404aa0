//! Connection discovery: scan a candidate population for a target artifact

use crate::error::SimilarityError;
use crate::similarity::SimilarityEngine;
use cortex_domain::{Artifact, ArtifactId, SimilarityScore};
use thiserror::Error;
use tracing::{debug, warn};

/// A candidate accepted by discovery: an artifact and its score.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection<'a> {
    /// The matched artifact
    pub artifact: &'a Artifact,

    /// Its similarity to the target; always >= the threshold used
    pub score: SimilarityScore,
}

/// Non-fatal per-candidate problems encountered during a scan.
///
/// The scan itself never fails: bad candidates degrade to fewer results,
/// and these diagnostics say which candidates were excluded and why.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiscoveryDiagnostic {
    /// A candidate had no id and cannot participate in connections
    #[error("candidate at position {position} has no id and was skipped")]
    MissingId {
        /// Zero-based position of the candidate in the input sequence
        position: usize,
    },

    /// Scoring one pair failed; the candidate was excluded
    #[error("scoring candidate {candidate} failed: {source}")]
    ScoreFailure {
        /// The candidate that could not be scored
        candidate: ArtifactId,
        /// The underlying scoring error
        source: SimilarityError,
    },
}

/// The result of one discovery scan.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveryOutcome<'a> {
    /// Accepted connections, ordered by score descending then id ascending
    pub connections: Vec<Connection<'a>>,

    /// Candidates that were excluded, and why
    pub diagnostics: Vec<DiscoveryDiagnostic>,
}

impl SimilarityEngine {
    /// Find the candidates connected to `target`.
    ///
    /// Scans every candidate, scoring it against the target and keeping
    /// those at or above `threshold` (0-100). Candidates that are the
    /// target itself are skipped silently; candidates without an id are
    /// skipped with a diagnostic; a scoring failure excludes only that
    /// candidate. Results are ordered by score descending, with ties
    /// broken by ascending candidate id so the scan is reproducible.
    pub fn find_connections<'a>(
        &self,
        target: &Artifact,
        candidates: &'a [Artifact],
        threshold: f64,
    ) -> DiscoveryOutcome<'a> {
        let mut connections = Vec::new();
        let mut diagnostics = Vec::new();

        if candidates.is_empty() {
            debug!("no candidates to scan");
            return DiscoveryOutcome {
                connections,
                diagnostics,
            };
        }

        for (position, candidate) in candidates.iter().enumerate() {
            let Some(candidate_id) = candidate.id else {
                diagnostics.push(DiscoveryDiagnostic::MissingId { position });
                continue;
            };
            if target.id == Some(candidate_id) {
                // Expected self-exclusion, not worth a diagnostic.
                continue;
            }

            match self.score(target, candidate) {
                Ok(score) if score.meets(threshold) => {
                    connections.push(Connection {
                        artifact: candidate,
                        score,
                    });
                }
                Ok(_) => {}
                Err(source) => {
                    warn!(
                        target_id = ?target.id,
                        candidate = %candidate_id,
                        error = %source,
                        "failed to score candidate pair"
                    );
                    diagnostics.push(DiscoveryDiagnostic::ScoreFailure {
                        candidate: candidate_id,
                        source,
                    });
                }
            }
        }

        connections.sort_by(|x, y| {
            y.score
                .total_cmp(&x.score)
                .then_with(|| x.artifact.id.cmp(&y.artifact.id))
        });

        debug!(
            found = connections.len(),
            skipped = diagnostics.len(),
            threshold,
            "discovery scan complete"
        );

        DiscoveryOutcome {
            connections,
            diagnostics,
        }
    }
}
