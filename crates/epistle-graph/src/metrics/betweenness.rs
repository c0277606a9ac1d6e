//! Betweenness centrality via Brandes' algorithm.
//!
//! # Overview
//!
//! Betweenness measures how often a person lies on shortest paths between
//! other pairs. In a correspondence network, high betweenness marks the
//! intermediaries tying separate circles together.
//!
//! # Algorithm
//!
//! Brandes (2001) for unweighted undirected graphs: a BFS from every
//! source computes shortest-path counts, then dependencies accumulate in
//! reverse BFS order. Co-occurrence weights are deliberately ignored —
//! paths are hop counts, matching the reference network tooling.
//!
//! Scores are normalized the standard undirected way, dividing by
//! `(n-1)(n-2)/2`; running the sweep from every endpoint counts each pair
//! twice, so the combined scale factor is `1 / ((n-1)(n-2))`. Components
//! with fewer than three nodes have no intermediaries and score all zeros.

use std::collections::{HashMap, VecDeque};

use petgraph::graph::NodeIndex;
use tracing::instrument;

use crate::graph::components::ComponentGraph;

/// Compute normalized betweenness centrality for every component member.
#[must_use]
#[instrument(skip(cg), fields(nodes = cg.node_count()))]
pub fn betweenness_centrality(cg: &ComponentGraph) -> HashMap<String, f64> {
    let g = &cg.graph;
    let n = g.node_count();

    let mut cb: Vec<f64> = vec![0.0; n];

    for s in g.node_indices() {
        let si = s.index();

        // Nodes in discovery order; popped farthest-first.
        let mut stack: Vec<NodeIndex> = Vec::with_capacity(n);
        let mut predecessors: Vec<Vec<NodeIndex>> = vec![Vec::new(); n];

        // sigma[t]: number of shortest paths from s to t.
        let mut sigma: Vec<f64> = vec![0.0; n];
        sigma[si] = 1.0;

        let mut dist: Vec<i64> = vec![-1; n];
        dist[si] = 0;

        let mut queue: VecDeque<NodeIndex> = VecDeque::new();
        queue.push_back(s);

        while let Some(v) = queue.pop_front() {
            let vi = v.index();
            stack.push(v);

            for w in g.neighbors(v) {
                let wi = w.index();
                if dist[wi] < 0 {
                    dist[wi] = dist[vi] + 1;
                    queue.push_back(w);
                }
                if dist[wi] == dist[vi] + 1 {
                    sigma[wi] += sigma[vi];
                    predecessors[wi].push(v);
                }
            }
        }

        let mut delta: Vec<f64> = vec![0.0; n];
        while let Some(w) = stack.pop() {
            let wi = w.index();
            for &v in &predecessors[wi] {
                let vi = v.index();
                if sigma[wi] > 0.0 {
                    delta[vi] += (sigma[vi] / sigma[wi]) * (1.0 + delta[wi]);
                }
            }
            if wi != si {
                cb[wi] += delta[wi];
            }
        }
    }

    let scale = normalization_scale(n);
    cg.graph
        .node_indices()
        .filter_map(|idx| {
            cg.graph
                .node_weight(idx)
                .map(|person| (person.clone(), cb[idx.index()] * scale))
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn normalization_scale(n: usize) -> f64 {
    if n < 3 {
        return 1.0;
    }
    1.0 / ((n - 1) as f64 * (n - 2) as f64)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
