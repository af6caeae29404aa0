//! Artifact module - the unit of content the relationship engine compares

use crate::ProjectId;
use std::fmt;

/// Unique identifier for an artifact.
///
/// Artifact identity is assigned by the persistence layer (integer rowids),
/// so the newtype wraps an `i64` and provides ordering for the canonical
/// edge invariant (smaller id first) and for deterministic tie-breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArtifactId(i64);

impl ArtifactId {
    /// Create an ArtifactId from a raw i64 value.
    ///
    /// This is primarily for the storage layer boundary.
    pub fn from_value(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw i64 value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A unit of content owned by a project.
///
/// Artifacts are consumed read-only by the relationship engine: it compares
/// their textual attributes and tag labels but never mutates them. An
/// artifact has no id until the persistence layer assigns one; such drafts
/// are invalid input to connection discovery.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    /// Storage-assigned identifier (None for unsaved drafts)
    pub id: Option<ArtifactId>,

    /// Owning project
    pub project_id: ProjectId,

    /// Short title
    pub title: String,

    /// Free-form description
    pub description: String,

    /// Main content body
    pub content: String,

    /// Presentation classification (drives node color in the rendered
    /// graph; no semantic weight)
    pub kind: String,

    /// Unordered tag labels
    pub tags: Vec<String>,
}

impl Artifact {
    /// Create a draft artifact with the given title.
    pub fn new(project_id: ProjectId, title: impl Into<String>) -> Self {
        Self {
            id: None,
            project_id,
            title: title.into(),
            description: String::new(),
            content: String::new(),
            kind: "artifact".to_string(),
            tags: Vec::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the content body
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Set the presentation kind
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Set the tag labels
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Set the storage-assigned id
    pub fn with_id(mut self, id: ArtifactId) -> Self {
        self.id = Some(id);
        self
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: ArtifactId ordering matches i64 ordering
        #[test]
        fn test_id_ordering_property(a: i64, b: i64) {
            let id_a = ArtifactId::from_value(a);
            let id_b = ArtifactId::from_value(b);

            prop_assert_eq!(id_a < id_b, a < b);
            prop_assert_eq!(id_a == id_b, a == b);
            prop_assert_eq!(id_a > id_b, a > b);
        }
    }
}
