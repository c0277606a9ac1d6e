//! Whole-graph statistics.
//!
//! # Statistics Provided
//!
//! - **degree**: per-person count of incident edges.
//! - **density**: `2E / (N(N-1))` for an undirected graph; 0.0 for graphs
//!   with fewer than two nodes.
//! - **is_connected**: exactly one connected component (false for the
//!   empty graph, which has none).
//! - **transitivity**: global triadic closure,
//!   `3 × triangles / (open + closed triads)`; 0.0 when the graph has no
//!   triad at all.

use std::collections::{HashMap, HashSet};

use petgraph::algo::connected_components;
use tracing::instrument;

use crate::graph::build::PersonGraph;

/// Summary statistics over the whole person network.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkStats {
    pub node_count: usize,
    pub edge_count: usize,
    /// `2E / (N(N-1))`, in `[0, 1]`.
    pub density: f64,
    pub is_connected: bool,
    /// Global triadic closure ratio, in `[0, 1]`.
    pub transitivity: f64,
    /// Incident-edge count per person identifier.
    pub degree: HashMap<String, usize>,
}

impl NetworkStats {
    /// Compute statistics for a person network.
    #[must_use]
    #[instrument(skip(pg), fields(nodes = pg.node_count(), edges = pg.edge_count()))]
    pub fn from_graph(pg: &PersonGraph) -> Self {
        let node_count = pg.node_count();
        let edge_count = pg.edge_count();

        let degree: HashMap<String, usize> = pg
            .graph
            .node_indices()
            .filter_map(|idx| pg.person(idx).map(|p| (p.to_string(), pg.degree(idx))))
            .collect();

        Self {
            node_count,
            edge_count,
            density: compute_density(node_count, edge_count),
            is_connected: node_count > 0 && connected_components(&pg.graph) == 1,
            transitivity: compute_transitivity(pg),
            degree,
        }
    }

    /// Top `n` persons by degree, ties broken by identifier for stable
    /// diagnostics output.
    #[must_use]
    pub fn top_degree(&self, n: usize) -> Vec<(String, usize)> {
        let mut ranked: Vec<(String, usize)> = self
            .degree
            .iter()
            .map(|(person, d)| (person.clone(), *d))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(n);
        ranked
    }
}

#[allow(clippy::cast_precision_loss)]
fn compute_density(node_count: usize, edge_count: usize) -> f64 {
    if node_count < 2 {
        return 0.0_f64;
    }
    let max_edges = (node_count * (node_count - 1)) as f64 / 2.0;
    edge_count as f64 / max_edges
}

/// Global transitivity: closed neighbor pairs over all neighbor pairs.
///
/// Summing per node counts each triangle three times (once per corner),
/// which is exactly the `3 × triangles` numerator of the standard ratio.
#[allow(clippy::cast_precision_loss)]
fn compute_transitivity(pg: &PersonGraph) -> f64 {
    let neighbor_sets: Vec<HashSet<usize>> = pg
        .graph
        .node_indices()
        .map(|v| pg.graph.neighbors(v).map(petgraph::graph::NodeIndex::index).collect())
        .collect();

    let mut closed: u64 = 0;
    let mut triads: u64 = 0;
    for neighbors in &neighbor_sets {
        let ns: Vec<usize> = neighbors.iter().copied().collect();
        let d = ns.len() as u64;
        triads += d * d.saturating_sub(1) / 2;
        for (k, &u) in ns.iter().enumerate() {
            for &w in &ns[k + 1..] {
                if neighbor_sets[u].contains(&w) {
                    closed += 1;
                }
            }
        }
    }

    if triads == 0 {
        0.0_f64
    } else {
        closed as f64 / triads as f64
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
