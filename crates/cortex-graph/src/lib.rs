//! Cortex Relationship Graph Assembler
//!
//! Converts persisted artifacts and relationship edges into an in-memory
//! undirected graph for traversal and rendering. The graph is a view: it is
//! rebuilt from scratch per request, optionally scoped to one project, and
//! never persisted.
//!
//! The assembler guarantees internal consistency — every edge endpoint is a
//! known node — by dropping edges that reference artifacts outside the
//! supplied set (a normal situation when relationships span project
//! boundaries but the view is project-scoped). Drops are reported as
//! non-fatal diagnostics. Spatial layout is a rendering concern and lives
//! outside this crate; [`RelationshipGraph::snapshot`] is the hand-off
//! surface.

#![warn(missing_docs)]
#![warn(clippy::all)]

use cortex_domain::{Artifact, ArtifactId, RelationshipEdge};
use petgraph::graph::{NodeIndex, UnGraph};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use thiserror::Error;
use tracing::warn;

/// A node in the relationship graph: an artifact's display metadata.
///
/// `kind` drives a presentation color (see [`node_color`]) and has no
/// effect on graph semantics.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    /// The artifact this node represents
    pub id: ArtifactId,

    /// Display title
    pub title: String,

    /// Presentation classification
    pub kind: String,

    /// Display description
    pub description: String,
}

/// An edge in the relationship graph.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphEdge {
    /// Relationship kind (free-form tag)
    pub kind: String,

    /// Relationship strength
    pub score: f64,
}

/// Non-fatal problems encountered while assembling a graph.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphDiagnostic {
    /// An artifact had no id and could not become a node
    #[error("artifact '{title}' has no id and was not added to the graph")]
    UnsavedArtifact {
        /// Title of the skipped artifact
        title: String,
    },

    /// An edge referenced an artifact missing from the node set
    #[error("relationship {a}-{b} references an artifact outside the graph and was dropped")]
    DanglingEdge {
        /// Canonically first endpoint
        a: ArtifactId,
        /// Canonically second endpoint
        b: ArtifactId,
    },

    /// The same unordered pair appeared more than once in the input
    #[error("relationship {a}-{b} appears more than once; duplicate dropped")]
    DuplicateEdge {
        /// Canonically first endpoint
        a: ArtifactId,
        /// Canonically second endpoint
        b: ArtifactId,
    },
}

/// Node and edge counts, for display and quick sanity checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    /// Number of nodes
    pub node_count: usize,
    /// Number of edges
    pub edge_count: usize,
}

/// A sorted, serializable view of a graph for renderers and comparison.
///
/// Nodes are ordered by id and edges by endpoint pair, so two graphs built
/// from the same inputs — in any input order — produce equal snapshots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphSnapshot {
    /// Nodes, ordered by artifact id
    pub nodes: Vec<NodeSnapshot>,
    /// Edges, ordered by canonical endpoint pair
    pub edges: Vec<EdgeSnapshot>,
}

/// One node in a [`GraphSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeSnapshot {
    /// Artifact id
    pub id: i64,
    /// Display title
    pub title: String,
    /// Presentation classification
    pub kind: String,
    /// Display description
    pub description: String,
    /// Presentation color for the node's kind
    pub color: &'static str,
}

/// One edge in a [`GraphSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeSnapshot {
    /// Canonically first endpoint id
    pub a: i64,
    /// Canonically second endpoint id
    pub b: i64,
    /// Relationship kind
    pub kind: String,
    /// Relationship strength
    pub score: f64,
    /// Presentation color for the edge's kind
    pub color: &'static str,
}

/// Presentation color for a node kind. Unknown kinds get a neutral color.
pub fn node_color(kind: &str) -> &'static str {
    match kind {
        "project" => "skyblue",
        "artifact" => "lightgreen",
        "tag" => "orange",
        _ => "lightgray",
    }
}

/// Presentation color for an edge kind. Unknown kinds get a neutral color.
pub fn edge_color(kind: &str) -> &'static str {
    match kind {
        cortex_domain::relationship::kind::TREE_BRANCH => "gray",
        cortex_domain::relationship::kind::RELATED => "purple",
        cortex_domain::relationship::kind::SYNAPSE => "blue",
        _ => "black",
    }
}

/// An in-memory, internally consistent view of artifacts and their
/// relationships.
#[derive(Debug, Clone)]
pub struct RelationshipGraph {
    graph: UnGraph<GraphNode, GraphEdge>,
    index: HashMap<ArtifactId, NodeIndex>,
}

impl RelationshipGraph {
    /// Build a graph from artifacts and relationship edges.
    ///
    /// One node is added per artifact with an id (the first occurrence
    /// wins if an id repeats). An edge is added only when both endpoints
    /// are present as nodes; dangling and duplicate edges are dropped with
    /// a diagnostic. Building is total — it never fails, it only drops.
    pub fn build(
        artifacts: &[Artifact],
        relationships: &[RelationshipEdge],
    ) -> (Self, Vec<GraphDiagnostic>) {
        let mut graph = UnGraph::new_undirected();
        let mut index: HashMap<ArtifactId, NodeIndex> = HashMap::new();
        let mut diagnostics = Vec::new();

        for artifact in artifacts {
            let Some(id) = artifact.id else {
                warn!(title = %artifact.title, "skipping unsaved artifact");
                diagnostics.push(GraphDiagnostic::UnsavedArtifact {
                    title: artifact.title.clone(),
                });
                continue;
            };
            if index.contains_key(&id) {
                continue;
            }
            let node_index = graph.add_node(GraphNode {
                id,
                title: artifact.title.clone(),
                kind: artifact.kind.clone(),
                description: artifact.description.clone(),
            });
            index.insert(id, node_index);
        }

        let mut seen: HashSet<(ArtifactId, ArtifactId)> = HashSet::new();
        for edge in relationships {
            let (a, b) = edge.endpoints();
            let (Some(&index_a), Some(&index_b)) = (index.get(&a), index.get(&b)) else {
                warn!(%a, %b, "dropping relationship with endpoint outside the graph");
                diagnostics.push(GraphDiagnostic::DanglingEdge { a, b });
                continue;
            };
            if !seen.insert((a, b)) {
                warn!(%a, %b, "dropping duplicate relationship");
                diagnostics.push(GraphDiagnostic::DuplicateEdge { a, b });
                continue;
            }
            graph.add_edge(
                index_a,
                index_b,
                GraphEdge {
                    kind: edge.kind.clone(),
                    score: edge.score.value(),
                },
            );
        }

        (Self { graph, index }, diagnostics)
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether the given artifact is a node in this graph
    pub fn contains(&self, id: ArtifactId) -> bool {
        self.index.contains_key(&id)
    }

    /// Look up a node by artifact id
    pub fn node(&self, id: ArtifactId) -> Option<&GraphNode> {
        self.index.get(&id).map(|&idx| &self.graph[idx])
    }

    /// Iterate over all nodes
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.graph.node_weights()
    }

    /// Iterate over all edges as (endpoint node, endpoint node, edge)
    pub fn edges(&self) -> impl Iterator<Item = (&GraphNode, &GraphNode, &GraphEdge)> {
        self.graph.edge_indices().filter_map(move |edge_index| {
            let (ia, ib) = self.graph.edge_endpoints(edge_index)?;
            Some((&self.graph[ia], &self.graph[ib], &self.graph[edge_index]))
        })
    }

    /// The nodes adjacent to the given artifact
    pub fn neighbors(&self, id: ArtifactId) -> Vec<&GraphNode> {
        let Some(&node_index) = self.index.get(&id) else {
            return Vec::new();
        };
        self.graph
            .neighbors(node_index)
            .map(|idx| &self.graph[idx])
            .collect()
    }

    /// Node and edge counts
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
        }
    }

    /// Produce the sorted, serializable view of this graph.
    ///
    /// The snapshot is order-independent: graphs built from the same
    /// inputs compare equal through it regardless of input ordering.
    pub fn snapshot(&self) -> GraphSnapshot {
        let mut nodes: Vec<NodeSnapshot> = self
            .nodes()
            .map(|node| NodeSnapshot {
                id: node.id.value(),
                title: node.title.clone(),
                kind: node.kind.clone(),
                description: node.description.clone(),
                color: node_color(&node.kind),
            })
            .collect();
        nodes.sort_by_key(|node| node.id);

        let mut edges: Vec<EdgeSnapshot> = self
            .edges()
            .map(|(node_a, node_b, edge)| {
                // Edge endpoints are canonical in the domain, but petgraph
                // reports them in insertion order; re-order for stability.
                let (a, b) = if node_a.id <= node_b.id {
                    (node_a.id.value(), node_b.id.value())
                } else {
                    (node_b.id.value(), node_a.id.value())
                };
                EdgeSnapshot {
                    a,
                    b,
                    kind: edge.kind.clone(),
                    score: edge.score,
                    color: edge_color(&edge.kind),
                }
            })
            .collect();
        edges.sort_by_key(|edge| (edge.a, edge.b));

        GraphSnapshot { nodes, edges }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cortex_domain::relationship::kind;
    use cortex_domain::{ProjectId, SimilarityScore};

    fn artifact(id: i64, title: &str, artifact_kind: &str) -> Artifact {
        Artifact::new(ProjectId::from_value(1), title)
            .with_id(ArtifactId::from_value(id))
            .with_kind(artifact_kind)
            .with_description(format!("{} description", title))
    }

    fn edge(a: i64, b: i64, score: f64) -> RelationshipEdge {
        RelationshipEdge::new(
            ArtifactId::from_value(a),
            ArtifactId::from_value(b),
            kind::SYNAPSE,
            SimilarityScore::new(score),
        )
        .unwrap()
    }

    #[test]
    fn test_build_nodes_and_edges() {
        let artifacts = vec![
            artifact(1, "one", "artifact"),
            artifact(2, "two", "artifact"),
            artifact(3, "three", "note"),
        ];
        let relationships = vec![edge(1, 2, 85.0), edge(2, 3, 72.0)];

        let (graph, diagnostics) = RelationshipGraph::build(&artifacts, &relationships);

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert!(diagnostics.is_empty());
        assert!(graph.contains(ArtifactId::from_value(1)));
        assert_eq!(graph.node(ArtifactId::from_value(3)).unwrap().kind, "note");
    }

    #[test]
    fn test_dangling_edge_dropped_with_diagnostic() {
        // Three artifacts, one relationship referencing a fourth that is
        // absent: 3 nodes, 0 edges, one non-fatal diagnostic.
        let artifacts = vec![
            artifact(1, "one", "artifact"),
            artifact(2, "two", "artifact"),
            artifact(3, "three", "artifact"),
        ];
        let relationships = vec![edge(2, 4, 90.0)];

        let (graph, diagnostics) = RelationshipGraph::build(&artifacts, &relationships);

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(
            diagnostics,
            vec![GraphDiagnostic::DanglingEdge {
                a: ArtifactId::from_value(2),
                b: ArtifactId::from_value(4),
            }]
        );
    }

    #[test]
    fn test_unsaved_artifact_skipped_with_diagnostic() {
        let draft = Artifact::new(ProjectId::from_value(1), "draft");
        let artifacts = vec![artifact(1, "one", "artifact"), draft];

        let (graph, diagnostics) = RelationshipGraph::build(&artifacts, &[]);

        assert_eq!(graph.node_count(), 1);
        assert_eq!(
            diagnostics,
            vec![GraphDiagnostic::UnsavedArtifact {
                title: "draft".to_string(),
            }]
        );
    }

    #[test]
    fn test_duplicate_edge_dropped() {
        let artifacts = vec![artifact(1, "one", "artifact"), artifact(2, "two", "artifact")];
        let relationships = vec![edge(1, 2, 85.0), edge(2, 1, 60.0)];

        let (graph, diagnostics) = RelationshipGraph::build(&artifacts, &relationships);

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(
            diagnostics,
            vec![GraphDiagnostic::DuplicateEdge {
                a: ArtifactId::from_value(1),
                b: ArtifactId::from_value(2),
            }]
        );
        // The first occurrence wins.
        let (_, _, kept) = graph.edges().next().unwrap();
        assert_eq!(kept.score, 85.0);
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let artifacts = vec![
            artifact(1, "one", "artifact"),
            artifact(2, "two", "artifact"),
            artifact(3, "three", "artifact"),
        ];
        let relationships = vec![edge(1, 2, 85.0), edge(1, 3, 75.0)];

        let (first, _) = RelationshipGraph::build(&artifacts, &relationships);
        let (second, _) = RelationshipGraph::build(&artifacts, &relationships);

        assert_eq!(first.snapshot(), second.snapshot());
    }

    #[test]
    fn test_snapshot_is_order_independent() {
        let mut artifacts = vec![
            artifact(1, "one", "artifact"),
            artifact(2, "two", "artifact"),
            artifact(3, "three", "artifact"),
        ];
        let mut relationships = vec![edge(1, 2, 85.0), edge(2, 3, 75.0)];

        let (forward, _) = RelationshipGraph::build(&artifacts, &relationships);
        artifacts.reverse();
        relationships.reverse();
        let (backward, _) = RelationshipGraph::build(&artifacts, &relationships);

        assert_eq!(forward.snapshot(), backward.snapshot());
    }

    #[test]
    fn test_neighbors() {
        let artifacts = vec![
            artifact(1, "hub", "artifact"),
            artifact(2, "spoke a", "artifact"),
            artifact(3, "spoke b", "artifact"),
        ];
        let relationships = vec![edge(1, 2, 85.0), edge(1, 3, 75.0)];

        let (graph, _) = RelationshipGraph::build(&artifacts, &relationships);

        let mut neighbor_ids: Vec<i64> = graph
            .neighbors(ArtifactId::from_value(1))
            .iter()
            .map(|node| node.id.value())
            .collect();
        neighbor_ids.sort_unstable();
        assert_eq!(neighbor_ids, vec![2, 3]);
        assert!(graph.neighbors(ArtifactId::from_value(99)).is_empty());
    }

    #[test]
    fn test_colors() {
        assert_eq!(node_color("project"), "skyblue");
        assert_eq!(node_color("artifact"), "lightgreen");
        assert_eq!(node_color("something-else"), "lightgray");
        assert_eq!(edge_color(kind::SYNAPSE), "blue");
        assert_eq!(edge_color("custom"), "black");
    }

    #[test]
    fn test_snapshot_serializes() {
        let artifacts = vec![artifact(1, "one", "artifact"), artifact(2, "two", "artifact")];
        let relationships = vec![edge(1, 2, 85.0)];

        let (graph, _) = RelationshipGraph::build(&artifacts, &relationships);
        let json = serde_json::to_string(&graph.snapshot()).unwrap();

        assert!(json.contains("\"lightgreen\""));
        assert!(json.contains("\"synapse\""));
    }

    #[test]
    fn test_empty_inputs() {
        let (graph, diagnostics) = RelationshipGraph::build(&[], &[]);
        assert_eq!(graph.stats(), GraphStats { node_count: 0, edge_count: 0 });
        assert!(diagnostics.is_empty());
    }
}
