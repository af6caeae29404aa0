//! Cortex Relationship Engine
//!
//! Computes weighted fuzzy similarity between artifacts and discovers which
//! pairs are connected. This is the algorithmic core of the organizer:
//!
//! - [`text::attribute_score`] — fuzzy partial alignment of two text
//!   attributes (title, description, content)
//! - [`tags::tag_score`] — case-insensitive Jaccard overlap of tag sets
//! - [`SimilarityEngine`] — combines the component scores under a
//!   normalized weight table
//! - [`SimilarityEngine::find_connections`] — scans a candidate population,
//!   filters by threshold, and ranks matches deterministically
//!
//! The engine is pure: it is handed in-memory artifacts and returns scores,
//! connections, and diagnostics. Persistence and rendering are external
//! collaborators. Failures degrade to fewer results, never to an aborted
//! scan — the engine's output is advisory.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod discovery;
pub mod error;
pub mod similarity;
pub mod tags;
pub mod text;

pub use config::{EngineConfig, WeightConfig, DEFAULT_THRESHOLD};
pub use discovery::{Connection, DiscoveryDiagnostic, DiscoveryOutcome};
pub use error::{EngineError, SimilarityError};
pub use similarity::SimilarityEngine;
