//! Project module - the container artifacts belong to

use std::fmt;

/// Unique identifier for a project (storage-assigned).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProjectId(i64);

impl ProjectId {
    /// Create a ProjectId from a raw i64 value
    pub fn from_value(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw i64 value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user-owned container of artifacts.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    /// Storage-assigned identifier (None for unsaved drafts)
    pub id: Option<ProjectId>,

    /// Unique title
    pub title: String,

    /// Free-form description
    pub description: String,

    /// Presentation category (e.g. "creative", "business", "analytical");
    /// consumed only by visualization collaborators
    pub category: String,

    /// Creation time (unix epoch milliseconds, set by the store)
    pub created_at: u64,

    /// Last update time (unix epoch milliseconds, set by the store)
    pub updated_at: u64,
}

impl Project {
    /// Create a draft project with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: String::new(),
            category: String::new(),
            created_at: 0,
            updated_at: 0,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_project() {
        let project = Project::new("Atlas")
            .with_description("maps of everything")
            .with_category("creative");

        assert!(project.id.is_none());
        assert_eq!(project.title, "Atlas");
        assert_eq!(project.category, "creative");
    }
}
