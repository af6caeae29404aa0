//! Project management commands.

use crate::cli::ProjectCommand;
use anyhow::bail;
use cortex_domain::traits::ContentStore;
use cortex_domain::{Project, ProjectId};
use cortex_store::SqliteStore;

/// Execute a project subcommand.
pub fn execute(command: ProjectCommand, store: &mut SqliteStore) -> anyhow::Result<()> {
    match command {
        ProjectCommand::Create {
            title,
            description,
            category,
        } => {
            let id = store.create_project(
                Project::new(title.clone())
                    .with_description(description)
                    .with_category(category),
            )?;
            println!("Created project {} '{}'", id, title);
        }
        ProjectCommand::List => {
            let projects = store.list_projects()?;
            if projects.is_empty() {
                println!("No projects.");
                return Ok(());
            }
            for project in projects {
                let id = project.id.map(|i| i.value()).unwrap_or_default();
                if project.category.is_empty() {
                    println!("{:>6}  {}", id, project.title);
                } else {
                    println!("{:>6}  {}  [{}]", id, project.title, project.category);
                }
            }
        }
        ProjectCommand::Show { id } => {
            let project_id = ProjectId::from_value(id);
            let Some(project) = store.get_project(project_id)? else {
                bail!("project {} not found", id);
            };
            println!("Project {}: {}", id, project.title);
            if !project.description.is_empty() {
                println!("  description: {}", project.description);
            }
            if !project.category.is_empty() {
                println!("  category: {}", project.category);
            }
            let artifacts = store.artifacts_for_project(project_id)?;
            println!("  artifacts: {}", artifacts.len());
            for artifact in artifacts {
                let artifact_id = artifact.id.map(|i| i.value()).unwrap_or_default();
                println!("  {:>6}  {}", artifact_id, artifact.title);
            }
        }
        ProjectCommand::Delete { id } => {
            store.delete_project(ProjectId::from_value(id))?;
            println!("Deleted project {}", id);
        }
    }
    Ok(())
}
