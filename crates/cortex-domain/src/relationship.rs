//! Relationship module - undirected links ("synapses") between artifacts

use crate::{ArtifactId, SimilarityScore};
use std::error::Error;
use std::fmt;

/// Well-known relationship kinds.
///
/// Kinds are free-form tags; these constants cover the ones the engine and
/// the original organizer produce. Anything else is valid too.
pub mod kind {
    /// A fuzzy-similarity link discovered by the engine
    pub const SYNAPSE: &str = "synapse";

    /// A structural parent/child link in the artifact tree
    pub const TREE_BRANCH: &str = "tree_branch";

    /// A manually asserted association
    pub const RELATED: &str = "related";
}

/// Error returned when both endpoints of an edge are the same artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelfReferenceError(pub ArtifactId);

impl fmt::Display for SelfReferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "artifact {} cannot relate to itself", self.0)
    }
}

impl Error for SelfReferenceError {}

/// An undirected relationship between two artifacts.
///
/// Endpoints are canonically ordered: the smaller id is always first, so an
/// unordered pair has exactly one representation and the persistence layer
/// can reject duplicates with a plain uniqueness constraint. The fields are
/// private to make the invariant unbreakable from outside.
#[derive(Debug, Clone, PartialEq)]
pub struct RelationshipEdge {
    artifact_a: ArtifactId,
    artifact_b: ArtifactId,

    /// Relationship kind (free-form tag, see [`kind`])
    pub kind: String,

    /// Strength of the relationship
    pub score: SimilarityScore,

    /// Optional human-readable note
    pub note: Option<String>,
}

impl RelationshipEdge {
    /// Create a new edge between two distinct artifacts.
    ///
    /// The endpoints are stored in canonical order regardless of argument
    /// order. An edge from an artifact to itself is rejected.
    pub fn new(
        a: ArtifactId,
        b: ArtifactId,
        kind: impl Into<String>,
        score: SimilarityScore,
    ) -> Result<Self, SelfReferenceError> {
        if a == b {
            return Err(SelfReferenceError(a));
        }
        let (artifact_a, artifact_b) = if a < b { (a, b) } else { (b, a) };
        Ok(Self {
            artifact_a,
            artifact_b,
            kind: kind.into(),
            score,
            note: None,
        })
    }

    /// Attach a human-readable note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// The canonically first (smaller) endpoint
    pub fn artifact_a(&self) -> ArtifactId {
        self.artifact_a
    }

    /// The canonically second (larger) endpoint
    pub fn artifact_b(&self) -> ArtifactId {
        self.artifact_b
    }

    /// Both endpoints in canonical order
    pub fn endpoints(&self) -> (ArtifactId, ArtifactId) {
        (self.artifact_a, self.artifact_b)
    }

    /// Whether the edge touches the given artifact
    pub fn touches(&self, id: ArtifactId) -> bool {
        self.artifact_a == id || self.artifact_b == id
    }

    /// The endpoint opposite to `id`, if `id` is an endpoint
    pub fn other_end(&self, id: ArtifactId) -> Option<ArtifactId> {
        if self.artifact_a == id {
            Some(self.artifact_b)
        } else if self.artifact_b == id {
            Some(self.artifact_a)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(v: i64) -> ArtifactId {
        ArtifactId::from_value(v)
    }

    #[test]
    fn test_canonical_ordering() {
        let edge = RelationshipEdge::new(id(9), id(4), kind::SYNAPSE, SimilarityScore::new(80.0))
            .unwrap();
        assert_eq!(edge.artifact_a(), id(4));
        assert_eq!(edge.artifact_b(), id(9));
    }

    #[test]
    fn test_already_canonical_unchanged() {
        let edge = RelationshipEdge::new(id(4), id(9), kind::SYNAPSE, SimilarityScore::new(80.0))
            .unwrap();
        assert_eq!(edge.endpoints(), (id(4), id(9)));
    }

    #[test]
    fn test_self_edge_rejected() {
        let result = RelationshipEdge::new(id(5), id(5), kind::SYNAPSE, SimilarityScore::MAX);
        assert_eq!(result.unwrap_err(), SelfReferenceError(id(5)));
    }

    #[test]
    fn test_touches_and_other_end() {
        let edge = RelationshipEdge::new(id(1), id(2), kind::RELATED, SimilarityScore::new(50.0))
            .unwrap();
        assert!(edge.touches(id(1)));
        assert!(edge.touches(id(2)));
        assert!(!edge.touches(id(3)));
        assert_eq!(edge.other_end(id(1)), Some(id(2)));
        assert_eq!(edge.other_end(id(3)), None);
    }

    #[test]
    fn test_note() {
        let edge = RelationshipEdge::new(id(1), id(2), kind::SYNAPSE, SimilarityScore::new(75.0))
            .unwrap()
            .with_note("auto-discovered");
        assert_eq!(edge.note.as_deref(), Some("auto-discovered"));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: endpoints always come out canonically ordered
        #[test]
        fn test_endpoints_canonical(a: i64, b: i64) {
            prop_assume!(a != b);
            let edge = RelationshipEdge::new(
                ArtifactId::from_value(a),
                ArtifactId::from_value(b),
                kind::SYNAPSE,
                SimilarityScore::new(50.0),
            ).unwrap();
            prop_assert!(edge.artifact_a() < edge.artifact_b());
        }

        /// Property: argument order never changes the stored pair
        #[test]
        fn test_order_independent(a: i64, b: i64) {
            prop_assume!(a != b);
            let ia = ArtifactId::from_value(a);
            let ib = ArtifactId::from_value(b);
            let score = SimilarityScore::new(50.0);
            let e1 = RelationshipEdge::new(ia, ib, kind::SYNAPSE, score).unwrap();
            let e2 = RelationshipEdge::new(ib, ia, kind::SYNAPSE, score).unwrap();
            prop_assert_eq!(e1.endpoints(), e2.endpoints());
        }
    }
}
