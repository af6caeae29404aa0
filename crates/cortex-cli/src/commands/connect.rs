//! Connection discovery command.

use crate::cli::ConnectArgs;
use anyhow::bail;
use cortex_domain::relationship::kind;
use cortex_domain::traits::ContentStore;
use cortex_domain::{ArtifactId, RelationshipEdge};
use cortex_engine::{EngineConfig, SimilarityEngine};
use cortex_store::{SqliteStore, StoreError};

/// Execute the connect command: scan for connections and optionally
/// persist them as synapse edges.
pub fn execute(
    args: ConnectArgs,
    store: &mut SqliteStore,
    config: &EngineConfig,
) -> anyhow::Result<()> {
    let target_id = ArtifactId::from_value(args.artifact);
    let Some(target) = store.get_artifact(target_id)? else {
        bail!("artifact {} not found", args.artifact);
    };

    let candidates = if args.all {
        store.list_artifacts()?
    } else {
        store.artifacts_for_project(target.project_id)?
    };

    let engine = SimilarityEngine::new(&config.weights)?;
    let threshold = args.threshold.unwrap_or(config.threshold);
    if !(0.0..=100.0).contains(&threshold) {
        bail!("threshold {} must be within 0-100", threshold);
    }

    let outcome = engine.find_connections(&target, &candidates, threshold);
    for diagnostic in &outcome.diagnostics {
        eprintln!("warning: {}", diagnostic);
    }

    if outcome.connections.is_empty() {
        println!(
            "No connections for artifact {} at threshold {}.",
            target_id, threshold
        );
        return Ok(());
    }

    println!(
        "Connections for artifact {} '{}' (threshold {}):",
        target_id, target.title, threshold
    );
    for connection in &outcome.connections {
        let id = connection.artifact.id.map(|i| i.value()).unwrap_or_default();
        println!(
            "{:>6}  {:>6}  {}",
            id, connection.score, connection.artifact.title
        );
    }

    if args.save {
        let mut saved = 0usize;
        for connection in &outcome.connections {
            let Some(other_id) = connection.artifact.id else {
                continue;
            };
            let edge = RelationshipEdge::new(target_id, other_id, kind::SYNAPSE, connection.score)?
                .with_note(format!("discovered at threshold {}", threshold));
            match store.add_relationship(edge) {
                Ok(()) => saved += 1,
                Err(StoreError::Duplicate(_)) => {
                    println!("  {}-{} already linked, skipped", target_id, other_id);
                }
                Err(e) => return Err(e.into()),
            }
        }
        println!("Saved {} synapse edge(s).", saved);
    }

    Ok(())
}
