//! Artifact management commands.

use crate::cli::ArtifactCommand;
use anyhow::bail;
use cortex_domain::traits::ContentStore;
use cortex_domain::{Artifact, ArtifactId, ProjectId};
use cortex_store::SqliteStore;

/// Execute an artifact subcommand.
pub fn execute(command: ArtifactCommand, store: &mut SqliteStore) -> anyhow::Result<()> {
    match command {
        ArtifactCommand::Add {
            project,
            title,
            description,
            content,
            kind,
            tags,
        } => {
            let id = store.create_artifact(
                Artifact::new(ProjectId::from_value(project), title.clone())
                    .with_description(description)
                    .with_content(content)
                    .with_kind(kind)
                    .with_tags(tags),
            )?;
            println!("Created artifact {} '{}'", id, title);
        }
        ArtifactCommand::List { project } => {
            let artifacts = match project {
                Some(id) => store.artifacts_for_project(ProjectId::from_value(id))?,
                None => store.list_artifacts()?,
            };
            if artifacts.is_empty() {
                println!("No artifacts.");
                return Ok(());
            }
            for artifact in artifacts {
                let id = artifact.id.map(|i| i.value()).unwrap_or_default();
                if artifact.tags.is_empty() {
                    println!("{:>6}  {}", id, artifact.title);
                } else {
                    println!("{:>6}  {}  [{}]", id, artifact.title, artifact.tags.join(", "));
                }
            }
        }
        ArtifactCommand::Show { id } => {
            let artifact_id = ArtifactId::from_value(id);
            let Some(artifact) = store.get_artifact(artifact_id)? else {
                bail!("artifact {} not found", id);
            };
            println!("Artifact {}: {}", id, artifact.title);
            println!("  project: {}", artifact.project_id);
            println!("  kind: {}", artifact.kind);
            if !artifact.description.is_empty() {
                println!("  description: {}", artifact.description);
            }
            if !artifact.tags.is_empty() {
                println!("  tags: {}", artifact.tags.join(", "));
            }
            let edges = store.relationships_for_artifact(artifact_id)?;
            println!("  relationships: {}", edges.len());
            for edge in edges {
                if let Some(other) = edge.other_end(artifact_id) {
                    println!("    -> {} ({}, score {})", other, edge.kind, edge.score);
                }
            }
        }
        ArtifactCommand::Delete { id } => {
            store.delete_artifact(ArtifactId::from_value(id))?;
            println!("Deleted artifact {}", id);
        }
    }
    Ok(())
}
