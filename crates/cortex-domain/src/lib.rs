//! Cortex Domain Layer
//!
//! This crate contains the core domain model for Cortex: the entities a
//! content organizer works with and the value types the relationship engine
//! computes over. It has ZERO external dependencies and defines the
//! fundamental concepts and trait interfaces that the other layers depend
//! upon.
//!
//! ## Key Concepts
//!
//! - **Project**: a user-owned container of artifacts
//! - **Artifact**: a unit of content (title, description, body, tags) that
//!   can be linked to others
//! - **SimilarityScore**: a 0–100 measure of how alike two artifacts are
//! - **RelationshipEdge**: an undirected, canonically ordered link between
//!   two artifacts ("synapse"), carrying a kind and a strength score
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure data and invariants only
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod artifact;
pub mod project;
pub mod relationship;
pub mod score;
pub mod tag;
pub mod traits;

// Re-exports for convenience
pub use artifact::{Artifact, ArtifactId};
pub use project::{Project, ProjectId};
pub use relationship::{RelationshipEdge, SelfReferenceError};
pub use score::SimilarityScore;
pub use tag::{Tag, TagId};
