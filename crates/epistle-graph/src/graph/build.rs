//! Graph construction from the filtered edge list.
//!
//! # Overview
//!
//! Builds a [`petgraph`] undirected graph whose nodes are person
//! identifiers and whose edge weights are shared-document counts. The node
//! set is exactly the union of edge endpoints: all sources in edge order
//! first, then any targets not already present. That first-seen order is
//! preserved in petgraph's node indices, which keeps artifact output
//! stable for a given edge list.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use tracing::instrument;

use crate::edges::Edge;

/// An undirected weighted person network.
#[derive(Debug)]
pub struct PersonGraph {
    /// Nodes are person identifiers, edge weights shared-document counts.
    pub graph: UnGraph<String, u64>,
    /// Mapping from person identifier to petgraph `NodeIndex`.
    pub node_map: HashMap<String, NodeIndex>,
}

impl PersonGraph {
    /// Build a graph from a filtered, undirected edge list.
    ///
    /// The list is expected to carry one row per unordered pair (the edge
    /// filter's contract); a mirrored duplicate would collapse into a
    /// single edge here rather than double-count.
    #[must_use]
    #[instrument(skip(edges), fields(edges = edges.len()))]
    pub fn from_edges(edges: &[Edge]) -> Self {
        let mut graph = UnGraph::<String, u64>::new_undirected();
        let mut node_map: HashMap<String, NodeIndex> = HashMap::new();

        // Sources first, then targets, skipping already-seen ids.
        for edge in edges {
            add_node(&mut graph, &mut node_map, &edge.source);
        }
        for edge in edges {
            add_node(&mut graph, &mut node_map, &edge.target);
        }

        for edge in edges {
            let a = node_map[&edge.source];
            let b = node_map[&edge.target];
            if graph.find_edge(a, b).is_none() {
                graph.add_edge(a, b, edge.weight);
            }
        }

        Self { graph, node_map }
    }

    /// Number of persons in the network.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Look up the `NodeIndex` for a person identifier.
    #[must_use]
    pub fn node_index(&self, person: &str) -> Option<NodeIndex> {
        self.node_map.get(person).copied()
    }

    /// Person identifier for a node.
    #[must_use]
    pub fn person(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(String::as_str)
    }

    /// Count of incident edges for a node.
    #[must_use]
    pub fn degree(&self, idx: NodeIndex) -> usize {
        self.graph.edges(idx).count()
    }
}

fn add_node(
    graph: &mut UnGraph<String, u64>,
    node_map: &mut HashMap<String, NodeIndex>,
    person: &str,
) {
    if !node_map.contains_key(person) {
        let idx = graph.add_node(person.to_string());
        node_map.insert(person.to_string(), idx);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
