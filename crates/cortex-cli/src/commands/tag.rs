//! Tag management commands.

use crate::cli::TagCommand;
use anyhow::bail;
use cortex_domain::traits::ContentStore;
use cortex_domain::ArtifactId;
use cortex_store::SqliteStore;

/// Execute a tag subcommand.
pub fn execute(command: TagCommand, store: &mut SqliteStore) -> anyhow::Result<()> {
    match command {
        TagCommand::Create { name } => {
            let id = store.create_tag(&name)?;
            println!("Created tag {} '{}'", id, name);
        }
        TagCommand::List => {
            let tags = store.list_tags()?;
            if tags.is_empty() {
                println!("No tags.");
                return Ok(());
            }
            for tag in tags {
                println!("{:>6}  {}", tag.id.value(), tag.name);
            }
        }
        TagCommand::Attach { artifact, name } => {
            let tag_id = match store.get_tag_by_name(&name)? {
                Some(tag) => tag.id,
                None => store.create_tag(&name)?,
            };
            store.tag_artifact(ArtifactId::from_value(artifact), tag_id)?;
            println!("Tagged artifact {} with '{}'", artifact, name);
        }
        TagCommand::Detach { artifact, name } => {
            let Some(tag) = store.get_tag_by_name(&name)? else {
                bail!("tag '{}' not found", name);
            };
            store.untag_artifact(ArtifactId::from_value(artifact), tag.id)?;
            println!("Removed tag '{}' from artifact {}", name, artifact);
        }
    }
    Ok(())
}
