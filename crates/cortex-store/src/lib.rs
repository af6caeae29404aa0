//! Cortex Storage Layer
//!
//! Implements the [`ContentStore`] trait over SQLite. The store owns the
//! lifecycle of projects, artifacts, tags, and relationship edges; the
//! relationship engine never touches it directly — it is handed data loaded
//! from here and its output is stored back through here.
//!
//! # Invariants enforced
//!
//! - Relationship edges arrive canonically ordered (smaller artifact id
//!   first); a duplicate unordered pair is rejected with
//!   [`StoreError::Duplicate`], never overwritten.
//! - Deleting an artifact cascades to its edges and tag links; deleting a
//!   project cascades to its artifacts and onward.
//!
//! # Thread Safety
//!
//! SQLite connections are not thread-safe. Each thread should have its own
//! `SqliteStore` instance.
//!
//! # Examples
//!
//! ```no_run
//! use cortex_store::SqliteStore;
//!
//! let store = SqliteStore::new("cortex.db").unwrap();
//! // Store is now ready for content operations
//! ```

#![warn(missing_docs)]

use cortex_domain::traits::ContentStore;
use cortex_domain::{
    Artifact, ArtifactId, Project, ProjectId, RelationshipEdge, SimilarityScore, Tag, TagId,
};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Row not found
    #[error("not found: {0}")]
    NotFound(String),

    /// Uniqueness violation: the row already exists
    #[error("duplicate: {0}")]
    Duplicate(String),

    /// Data that cannot be stored or reconstructed
    #[error("invalid data: {0}")]
    InvalidData(String),
}

/// Classify an insert/update failure by its SQLite constraint kind.
fn constraint_error(err: rusqlite::Error, what: &str) -> StoreError {
    if let rusqlite::Error::SqliteFailure(e, _) = &err {
        if e.code == rusqlite::ErrorCode::ConstraintViolation {
            return match e.extended_code {
                rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                | rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
                    StoreError::Duplicate(what.to_string())
                }
                rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY => StoreError::InvalidData(format!(
                    "{}: references a row that does not exist",
                    what
                )),
                _ => StoreError::Database(err),
            };
        }
    }
    StoreError::Database(err)
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// SQLite-based implementation of [`ContentStore`].
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a store backed by the database at `path`.
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    /// The schema is created on first open.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.execute_batch(include_str!("schema.sql"))?;
        debug!("content store opened");
        Ok(Self { conn })
    }

    fn row_to_project(row: &Row<'_>) -> rusqlite::Result<Project> {
        Ok(Project {
            id: Some(ProjectId::from_value(row.get(0)?)),
            title: row.get(1)?,
            description: row.get(2)?,
            category: row.get(3)?,
            created_at: row.get::<_, i64>(4)? as u64,
            updated_at: row.get::<_, i64>(5)? as u64,
        })
    }

    fn row_to_artifact(row: &Row<'_>) -> rusqlite::Result<Artifact> {
        Ok(Artifact {
            id: Some(ArtifactId::from_value(row.get(0)?)),
            project_id: ProjectId::from_value(row.get(1)?),
            title: row.get(2)?,
            description: row.get(3)?,
            content: row.get(4)?,
            kind: row.get(5)?,
            tags: Vec::new(),
        })
    }

    fn row_to_edge(row: &Row<'_>) -> rusqlite::Result<(i64, i64, String, f64, Option<String>)> {
        Ok((
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
        ))
    }

    fn edge_from_parts(
        parts: (i64, i64, String, f64, Option<String>),
    ) -> Result<RelationshipEdge, StoreError> {
        let (a, b, kind, score, note) = parts;
        let edge = RelationshipEdge::new(
            ArtifactId::from_value(a),
            ArtifactId::from_value(b),
            kind,
            SimilarityScore::new(score),
        )
        .map_err(|e| StoreError::InvalidData(e.to_string()))?;
        Ok(match note {
            Some(note) => edge.with_note(note),
            None => edge,
        })
    }

    fn load_tags(&self, artifact: ArtifactId) -> Result<Vec<String>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT t.name FROM tags t
             JOIN artifact_tags at ON t.id = at.tag_id
             WHERE at.artifact_id = ?1
             ORDER BY t.name",
        )?;
        let names = stmt
            .query_map(params![artifact.value()], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(names)
    }

    /// Get the tag id for `name`, creating the tag if it does not exist.
    fn ensure_tag(&mut self, name: &str) -> Result<TagId, StoreError> {
        self.conn
            .execute("INSERT OR IGNORE INTO tags (name) VALUES (?1)", params![name])?;
        let id: i64 = self.conn.query_row(
            "SELECT id FROM tags WHERE name = ?1",
            params![name],
            |row| row.get(0),
        )?;
        Ok(TagId::from_value(id))
    }

    fn link_tags(&mut self, artifact: ArtifactId, labels: &[String]) -> Result<(), StoreError> {
        for label in labels {
            let tag_id = self.ensure_tag(label)?;
            self.conn
                .execute(
                    "INSERT OR IGNORE INTO artifact_tags (artifact_id, tag_id) VALUES (?1, ?2)",
                    params![artifact.value(), tag_id.value()],
                )
                .map_err(|e| constraint_error(e, "artifact tag link"))?;
        }
        Ok(())
    }
}

impl ContentStore for SqliteStore {
    type Error = StoreError;

    // --- Projects ---

    fn create_project(&mut self, project: Project) -> Result<ProjectId, Self::Error> {
        let now = now_millis();
        self.conn
            .execute(
                "INSERT INTO projects (title, description, category, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    project.title,
                    project.description,
                    project.category,
                    now as i64,
                    now as i64,
                ],
            )
            .map_err(|e| constraint_error(e, &format!("project '{}'", project.title)))?;
        Ok(ProjectId::from_value(self.conn.last_insert_rowid()))
    }

    fn get_project(&self, id: ProjectId) -> Result<Option<Project>, Self::Error> {
        let project = self
            .conn
            .query_row(
                "SELECT id, title, description, category, created_at, updated_at
                 FROM projects WHERE id = ?1",
                params![id.value()],
                Self::row_to_project,
            )
            .optional()?;
        Ok(project)
    }

    fn list_projects(&self) -> Result<Vec<Project>, Self::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, description, category, created_at, updated_at
             FROM projects ORDER BY updated_at DESC, id DESC",
        )?;
        let projects = stmt
            .query_map([], Self::row_to_project)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(projects)
    }

    fn update_project(&mut self, project: &Project) -> Result<(), Self::Error> {
        let Some(id) = project.id else {
            return Err(StoreError::InvalidData(
                "cannot update a project that has no id".to_string(),
            ));
        };
        let rows = self
            .conn
            .execute(
                "UPDATE projects SET title = ?1, description = ?2, category = ?3, updated_at = ?4
                 WHERE id = ?5",
                params![
                    project.title,
                    project.description,
                    project.category,
                    now_millis() as i64,
                    id.value(),
                ],
            )
            .map_err(|e| constraint_error(e, &format!("project '{}'", project.title)))?;
        if rows == 0 {
            return Err(StoreError::NotFound(format!("project {}", id)));
        }
        Ok(())
    }

    fn delete_project(&mut self, id: ProjectId) -> Result<(), Self::Error> {
        let rows = self
            .conn
            .execute("DELETE FROM projects WHERE id = ?1", params![id.value()])?;
        if rows == 0 {
            return Err(StoreError::NotFound(format!("project {}", id)));
        }
        Ok(())
    }

    // --- Artifacts ---

    fn create_artifact(&mut self, artifact: Artifact) -> Result<ArtifactId, Self::Error> {
        let now = now_millis();
        self.conn
            .execute(
                "INSERT INTO artifacts (project_id, title, description, content, kind, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    artifact.project_id.value(),
                    artifact.title,
                    artifact.description,
                    artifact.content,
                    artifact.kind,
                    now as i64,
                    now as i64,
                ],
            )
            .map_err(|e| constraint_error(e, &format!("artifact '{}'", artifact.title)))?;
        let id = ArtifactId::from_value(self.conn.last_insert_rowid());
        self.link_tags(id, &artifact.tags)?;
        Ok(id)
    }

    fn get_artifact(&self, id: ArtifactId) -> Result<Option<Artifact>, Self::Error> {
        let artifact = self
            .conn
            .query_row(
                "SELECT id, project_id, title, description, content, kind
                 FROM artifacts WHERE id = ?1",
                params![id.value()],
                Self::row_to_artifact,
            )
            .optional()?;
        match artifact {
            Some(mut artifact) => {
                artifact.tags = self.load_tags(id)?;
                Ok(Some(artifact))
            }
            None => Ok(None),
        }
    }

    fn artifacts_for_project(&self, id: ProjectId) -> Result<Vec<Artifact>, Self::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT id, project_id, title, description, content, kind
             FROM artifacts WHERE project_id = ?1 ORDER BY id",
        )?;
        let mut artifacts = stmt
            .query_map(params![id.value()], Self::row_to_artifact)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        drop(stmt);
        for artifact in &mut artifacts {
            if let Some(artifact_id) = artifact.id {
                artifact.tags = self.load_tags(artifact_id)?;
            }
        }
        Ok(artifacts)
    }

    fn list_artifacts(&self) -> Result<Vec<Artifact>, Self::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT id, project_id, title, description, content, kind
             FROM artifacts ORDER BY id",
        )?;
        let mut artifacts = stmt
            .query_map([], Self::row_to_artifact)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        drop(stmt);
        for artifact in &mut artifacts {
            if let Some(artifact_id) = artifact.id {
                artifact.tags = self.load_tags(artifact_id)?;
            }
        }
        Ok(artifacts)
    }

    fn update_artifact(&mut self, artifact: &Artifact) -> Result<(), Self::Error> {
        let Some(id) = artifact.id else {
            return Err(StoreError::InvalidData(
                "cannot update an artifact that has no id".to_string(),
            ));
        };
        let rows = self.conn.execute(
            "UPDATE artifacts SET title = ?1, description = ?2, content = ?3, kind = ?4, updated_at = ?5
             WHERE id = ?6",
            params![
                artifact.title,
                artifact.description,
                artifact.content,
                artifact.kind,
                now_millis() as i64,
                id.value(),
            ],
        )?;
        if rows == 0 {
            return Err(StoreError::NotFound(format!("artifact {}", id)));
        }
        // Replace the tag links with the updated label set.
        self.conn.execute(
            "DELETE FROM artifact_tags WHERE artifact_id = ?1",
            params![id.value()],
        )?;
        self.link_tags(id, &artifact.tags)?;
        Ok(())
    }

    fn delete_artifact(&mut self, id: ArtifactId) -> Result<(), Self::Error> {
        let rows = self
            .conn
            .execute("DELETE FROM artifacts WHERE id = ?1", params![id.value()])?;
        if rows == 0 {
            return Err(StoreError::NotFound(format!("artifact {}", id)));
        }
        Ok(())
    }

    // --- Tags ---

    fn create_tag(&mut self, name: &str) -> Result<TagId, Self::Error> {
        self.conn
            .execute("INSERT INTO tags (name) VALUES (?1)", params![name])
            .map_err(|e| constraint_error(e, &format!("tag '{}'", name)))?;
        Ok(TagId::from_value(self.conn.last_insert_rowid()))
    }

    fn get_tag_by_name(&self, name: &str) -> Result<Option<Tag>, Self::Error> {
        let tag = self
            .conn
            .query_row(
                "SELECT id, name FROM tags WHERE name = ?1",
                params![name],
                |row| {
                    Ok(Tag {
                        id: TagId::from_value(row.get(0)?),
                        name: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(tag)
    }

    fn list_tags(&self) -> Result<Vec<Tag>, Self::Error> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM tags ORDER BY name")?;
        let tags = stmt
            .query_map([], |row| {
                Ok(Tag {
                    id: TagId::from_value(row.get(0)?),
                    name: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(tags)
    }

    fn tag_artifact(&mut self, artifact: ArtifactId, tag: TagId) -> Result<(), Self::Error> {
        self.conn
            .execute(
                "INSERT INTO artifact_tags (artifact_id, tag_id) VALUES (?1, ?2)",
                params![artifact.value(), tag.value()],
            )
            .map_err(|e| {
                constraint_error(e, &format!("tag {} on artifact {}", tag, artifact))
            })?;
        Ok(())
    }

    fn untag_artifact(&mut self, artifact: ArtifactId, tag: TagId) -> Result<(), Self::Error> {
        let rows = self.conn.execute(
            "DELETE FROM artifact_tags WHERE artifact_id = ?1 AND tag_id = ?2",
            params![artifact.value(), tag.value()],
        )?;
        if rows == 0 {
            return Err(StoreError::NotFound(format!(
                "tag {} on artifact {}",
                tag, artifact
            )));
        }
        Ok(())
    }

    fn tags_for_artifact(&self, artifact: ArtifactId) -> Result<Vec<Tag>, Self::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT t.id, t.name FROM tags t
             JOIN artifact_tags at ON t.id = at.tag_id
             WHERE at.artifact_id = ?1
             ORDER BY t.name",
        )?;
        let tags = stmt
            .query_map(params![artifact.value()], |row| {
                Ok(Tag {
                    id: TagId::from_value(row.get(0)?),
                    name: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(tags)
    }

    // --- Relationships ---

    fn add_relationship(&mut self, edge: RelationshipEdge) -> Result<(), Self::Error> {
        let (a, b) = edge.endpoints();
        self.conn
            .execute(
                "INSERT INTO relationships (artifact_id_1, artifact_id_2, kind, score, note, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    a.value(),
                    b.value(),
                    edge.kind,
                    edge.score.value(),
                    edge.note,
                    now_millis() as i64,
                ],
            )
            .map_err(|e| constraint_error(e, &format!("relationship {}-{}", a, b)))?;
        Ok(())
    }

    fn relationships_for_artifact(
        &self,
        id: ArtifactId,
    ) -> Result<Vec<RelationshipEdge>, Self::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT artifact_id_1, artifact_id_2, kind, score, note
             FROM relationships
             WHERE artifact_id_1 = ?1 OR artifact_id_2 = ?1
             ORDER BY id",
        )?;
        let rows = stmt
            .query_map(params![id.value()], Self::row_to_edge)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        rows.into_iter().map(Self::edge_from_parts).collect()
    }

    fn list_relationships(&self) -> Result<Vec<RelationshipEdge>, Self::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT artifact_id_1, artifact_id_2, kind, score, note
             FROM relationships ORDER BY id",
        )?;
        let rows = stmt
            .query_map([], Self::row_to_edge)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        rows.into_iter().map(Self::edge_from_parts).collect()
    }

    fn relationships_for_project(
        &self,
        id: ProjectId,
    ) -> Result<Vec<RelationshipEdge>, Self::Error> {
        // Only edges with BOTH endpoints inside the project belong to a
        // project-scoped view.
        let mut stmt = self.conn.prepare(
            "SELECT r.artifact_id_1, r.artifact_id_2, r.kind, r.score, r.note
             FROM relationships r
             JOIN artifacts a1 ON r.artifact_id_1 = a1.id
             JOIN artifacts a2 ON r.artifact_id_2 = a2.id
             WHERE a1.project_id = ?1 AND a2.project_id = ?1
             ORDER BY r.id",
        )?;
        let rows = stmt
            .query_map(params![id.value()], Self::row_to_edge)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        rows.into_iter().map(Self::edge_from_parts).collect()
    }

    fn delete_relationship(&mut self, a: ArtifactId, b: ArtifactId) -> Result<(), Self::Error> {
        let (first, second) = if a < b { (a, b) } else { (b, a) };
        let rows = self.conn.execute(
            "DELETE FROM relationships WHERE artifact_id_1 = ?1 AND artifact_id_2 = ?2",
            params![first.value(), second.value()],
        )?;
        if rows == 0 {
            return Err(StoreError::NotFound(format!(
                "relationship {}-{}",
                first, second
            )));
        }
        Ok(())
    }
}
