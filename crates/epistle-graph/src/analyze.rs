//! Graph analyzer: edge list in, annotated node-link artifact out.
//!
//! # Overview
//!
//! Runs the full metric suite in a fixed order:
//!
//! 1. Build the undirected graph from the filtered edge list.
//! 2. Whole-graph statistics: degree, density, connectivity, transitivity.
//! 3. Isolate the largest connected component (stabilized tie-break).
//! 4. On that component only: diameter, betweenness, eigenvector and
//!    degree centrality, greedy-modularity communities.
//! 5. Assemble the node-link artifact; nodes outside the component carry
//!    only their whole-graph degree.
//!
//! An empty edge list short-circuits to an explicitly marked empty
//! artifact — no metric is attempted on a graph with nothing in it. A
//! non-convergent eigenvector computation is reported and the analysis
//! continues without that attribute; everything else still lands in the
//! artifact.

use tracing::{info, instrument, warn};

use crate::edges::Edge;
use crate::graph::build::PersonGraph;
use crate::graph::components::{diameter, largest_component};
use crate::graph::stats::NetworkStats;
use crate::metrics::{
    betweenness_centrality, degree_centrality, eigenvector_centrality,
    greedy_modularity_communities,
};
use crate::nodelink::{LinkEntry, NodeEntry, NodeLink};

/// Convergence controls for the iterative metrics.
#[derive(Debug, Clone, Copy)]
pub struct AnalyzerConfig {
    pub eigenvector_max_iter: usize,
    pub eigenvector_tolerance: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            eigenvector_max_iter: 100,
            eigenvector_tolerance: 1e-6,
        }
    }
}

/// Everything the analyzer learned about the network.
#[derive(Debug)]
pub struct Analysis {
    /// The serializable artifact.
    pub data: NodeLink,
    /// Whole-graph statistics.
    pub stats: NetworkStats,
    /// Diameter of the largest component; `None` when there is none.
    pub diameter: Option<usize>,
    /// False when eigenvector centrality had to be skipped.
    pub eigenvector_converged: bool,
}

/// Analyze a filtered edge list into an annotated artifact.
#[must_use]
#[instrument(skip(edges, config), fields(edges = edges.len()))]
pub fn analyze(edges: &[Edge], config: &AnalyzerConfig) -> Analysis {
    let pg = PersonGraph::from_edges(edges);
    let stats = NetworkStats::from_graph(&pg);

    if edges.is_empty() {
        info!("no edges above threshold; emitting empty artifact");
        return Analysis {
            data: NodeLink {
                nodes: Vec::new(),
                links: Vec::new(),
                no_component: true,
            },
            stats,
            diameter: None,
            eigenvector_converged: true,
        };
    }

    info!(
        nodes = stats.node_count,
        edges = stats.edge_count,
        density = stats.density,
        connected = stats.is_connected,
        transitivity = stats.transitivity,
        "whole-graph statistics"
    );
    for (person, degree) in stats.top_degree(10) {
        info!(person = %person, degree, "top degree");
    }

    // The edge list is non-empty, so a largest component exists and has at
    // least two nodes.
    let component = largest_component(&pg);
    let (component_diameter, betweenness, eigenvector, degree_cent, communities, converged) =
        match component.as_ref() {
            Some(cg) if cg.node_count() >= 2 => {
                let d = diameter(cg);
                info!(diameter = d, members = cg.node_count(), "largest component");

                let (ev, converged) = match eigenvector_centrality(
                    cg,
                    config.eigenvector_max_iter,
                    config.eigenvector_tolerance,
                ) {
                    Ok(result) => (Some(result), true),
                    Err(err) => {
                        warn!(error = %err, "continuing without eigenvector scores");
                        (None, false)
                    }
                };

                (
                    Some(d),
                    Some(betweenness_centrality(cg)),
                    ev,
                    Some(degree_centrality(cg)),
                    Some(greedy_modularity_communities(cg)),
                    converged,
                )
            }
            _ => (None, None, None, None, None, true),
        };

    let in_component =
        |person: &str| component.as_ref().is_some_and(|cg| cg.contains(person));

    let nodes = pg
        .graph
        .node_indices()
        .filter_map(|idx| pg.person(idx).map(|p| (idx, p.to_string())))
        .map(|(idx, person)| {
            let mut node = NodeEntry::bare(person.clone(), pg.degree(idx));
            if in_component(&person) {
                node.betweenness = betweenness.as_ref().and_then(|bc| bc.get(&person)).copied();
                node.eigenvector = eigenvector
                    .as_ref()
                    .and_then(|ev| ev.scores.get(&person))
                    .copied();
                node.degree_cent = degree_cent.as_ref().and_then(|dc| dc.get(&person)).copied();
                node.modularity = communities
                    .as_ref()
                    .and_then(|cm| cm.labels.get(&person))
                    .copied();
            }
            node
        })
        .collect();

    let links = edges
        .iter()
        .map(|edge| LinkEntry {
            source: edge.source.clone(),
            target: edge.target.clone(),
            weight: edge.weight,
        })
        .collect();

    Analysis {
        data: NodeLink {
            nodes,
            links,
            no_component: false,
        },
        stats,
        diameter: component_diameter,
        eigenvector_converged: converged,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
