//! Trait definitions for external interactions
//!
//! These traits define the boundary between domain logic and
//! infrastructure. The relationship engine never calls persistence — it is
//! handed in-memory data and returns data — so the trait exists for the
//! application layer to load and save through.

use crate::{
    Artifact, ArtifactId, Project, ProjectId, RelationshipEdge, Tag, TagId,
};

/// Trait for storing and retrieving organizer content.
///
/// Implemented by the infrastructure layer (cortex-store). The contract the
/// engine relies on: relationship edges are unique per unordered artifact
/// pair (duplicates rejected, not overwritten) and cascade away when either
/// endpoint artifact is deleted.
pub trait ContentStore {
    /// Error type for store operations
    type Error;

    // --- Projects ---

    /// Create a project, returning its assigned id
    fn create_project(&mut self, project: Project) -> Result<ProjectId, Self::Error>;

    /// Get a project by id
    fn get_project(&self, id: ProjectId) -> Result<Option<Project>, Self::Error>;

    /// List all projects, most recently updated first
    fn list_projects(&self) -> Result<Vec<Project>, Self::Error>;

    /// Update a persisted project's title, description, and category
    fn update_project(&mut self, project: &Project) -> Result<(), Self::Error>;

    /// Delete a project and, by cascade, its artifacts and their edges
    fn delete_project(&mut self, id: ProjectId) -> Result<(), Self::Error>;

    // --- Artifacts ---

    /// Create an artifact (persisting its tag labels), returning its id
    fn create_artifact(&mut self, artifact: Artifact) -> Result<ArtifactId, Self::Error>;

    /// Get an artifact by id, with its tag labels loaded
    fn get_artifact(&self, id: ArtifactId) -> Result<Option<Artifact>, Self::Error>;

    /// List the artifacts belonging to one project
    fn artifacts_for_project(&self, id: ProjectId) -> Result<Vec<Artifact>, Self::Error>;

    /// List all artifacts across projects
    fn list_artifacts(&self) -> Result<Vec<Artifact>, Self::Error>;

    /// Update a persisted artifact's attributes and tag labels
    fn update_artifact(&mut self, artifact: &Artifact) -> Result<(), Self::Error>;

    /// Delete an artifact and, by cascade, its edges and tag links
    fn delete_artifact(&mut self, id: ArtifactId) -> Result<(), Self::Error>;

    // --- Tags ---

    /// Create a tag with a unique name
    fn create_tag(&mut self, name: &str) -> Result<TagId, Self::Error>;

    /// Look a tag up by name
    fn get_tag_by_name(&self, name: &str) -> Result<Option<Tag>, Self::Error>;

    /// List all tags
    fn list_tags(&self) -> Result<Vec<Tag>, Self::Error>;

    /// Attach a tag to an artifact
    fn tag_artifact(&mut self, artifact: ArtifactId, tag: TagId) -> Result<(), Self::Error>;

    /// Detach a tag from an artifact
    fn untag_artifact(&mut self, artifact: ArtifactId, tag: TagId) -> Result<(), Self::Error>;

    /// List the tags attached to an artifact
    fn tags_for_artifact(&self, artifact: ArtifactId) -> Result<Vec<Tag>, Self::Error>;

    // --- Relationships ---

    /// Store a relationship edge.
    ///
    /// The edge arrives canonically ordered by construction; a duplicate
    /// unordered pair must be rejected, never overwritten.
    fn add_relationship(&mut self, edge: RelationshipEdge) -> Result<(), Self::Error>;

    /// List the edges touching one artifact
    fn relationships_for_artifact(
        &self,
        id: ArtifactId,
    ) -> Result<Vec<RelationshipEdge>, Self::Error>;

    /// List all edges
    fn list_relationships(&self) -> Result<Vec<RelationshipEdge>, Self::Error>;

    /// List the edges whose BOTH endpoints belong to the given project
    /// (the graph-view query)
    fn relationships_for_project(
        &self,
        id: ProjectId,
    ) -> Result<Vec<RelationshipEdge>, Self::Error>;

    /// Delete the edge between two artifacts (argument order irrelevant)
    fn delete_relationship(
        &mut self,
        a: ArtifactId,
        b: ArtifactId,
    ) -> Result<(), Self::Error>;
}
