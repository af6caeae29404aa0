//! Relationship graph command.

use crate::cli::GraphArgs;
use anyhow::bail;
use cortex_domain::traits::ContentStore;
use cortex_domain::ProjectId;
use cortex_graph::RelationshipGraph;
use cortex_store::SqliteStore;

/// Execute the graph command: build the relationship graph and print it.
pub fn execute(args: GraphArgs, store: &SqliteStore) -> anyhow::Result<()> {
    let (artifacts, relationships) = match args.project {
        Some(id) => {
            let project_id = ProjectId::from_value(id);
            if store.get_project(project_id)?.is_none() {
                bail!("project {} not found", id);
            }
            (
                store.artifacts_for_project(project_id)?,
                store.relationships_for_project(project_id)?,
            )
        }
        None => (store.list_artifacts()?, store.list_relationships()?),
    };

    let (graph, diagnostics) = RelationshipGraph::build(&artifacts, &relationships);
    for diagnostic in &diagnostics {
        eprintln!("warning: {}", diagnostic);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&graph.snapshot())?);
        return Ok(());
    }

    let stats = graph.stats();
    println!("{} node(s), {} edge(s)", stats.node_count, stats.edge_count);

    let snapshot = graph.snapshot();
    for node in &snapshot.nodes {
        println!("{:>6}  {}  [{}]", node.id, node.title, node.kind);
    }
    for edge in &snapshot.edges {
        println!(
            "{:>6} -- {:<6} {} (score {:.2})",
            edge.a, edge.b, edge.kind, edge.score
        );
    }

    Ok(())
}
