//! Eigenvector centrality via power iteration.
//!
//! # Overview
//!
//! Eigenvector centrality scores a person by the scores of their
//! neighbors: connections to well-connected people count for more. It is
//! the dominant eigenvector of the component's adjacency matrix.
//!
//! # Algorithm
//!
//! Power iteration on the unweighted adjacency:
//!
//! 1. Initialize scores uniformly.
//! 2. For each node `v`: `score'(v) = Σ score(u)` over neighbors `u`.
//! 3. Normalize to unit L2 norm.
//! 4. Stop when the L2 change drops below the tolerance, or fail after
//!    the iteration cap.
//!
//! Non-convergence is a reported error, not a panic: the caller decides
//! whether to continue without the metric. On a connected non-bipartite
//! component the iteration converges; bipartite structures (pure
//! correspondence chains with no triangles) can oscillate, which is
//! exactly the case the cap guards against.

use std::collections::HashMap;

use tracing::instrument;

use crate::graph::components::ComponentGraph;
use crate::metrics::MetricError;

/// Converged eigenvector centrality scores.
#[derive(Debug, Clone)]
pub struct EigenvectorScores {
    /// Person identifier → score; the score vector has unit L2 norm.
    pub scores: HashMap<String, f64>,
    /// Iterations actually performed.
    pub iterations: usize,
}

/// Compute eigenvector centrality for every component member.
///
/// # Errors
///
/// Returns [`MetricError::NoConvergence`] if the L2 change between
/// iterations is still above `tolerance` after `max_iter` rounds.
#[instrument(skip(cg), fields(nodes = cg.node_count()))]
pub fn eigenvector_centrality(
    cg: &ComponentGraph,
    max_iter: usize,
    tolerance: f64,
) -> Result<EigenvectorScores, MetricError> {
    let g = &cg.graph;
    let n = g.node_count();

    if n == 0 {
        return Ok(EigenvectorScores {
            scores: HashMap::new(),
            iterations: 0,
        });
    }

    #[allow(clippy::cast_precision_loss)]
    let init = 1.0 / (n as f64).sqrt();
    let mut scores: Vec<f64> = vec![init; n];

    let neighbors: Vec<Vec<usize>> = g
        .node_indices()
        .map(|v| g.neighbors(v).map(petgraph::graph::NodeIndex::index).collect())
        .collect();

    for iteration in 1..=max_iter {
        let mut next = vec![0.0; n];
        for (vi, nbrs) in neighbors.iter().enumerate() {
            for &ui in nbrs {
                next[vi] += scores[ui];
            }
        }

        let norm: f64 = next.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm > 0.0 {
            for x in &mut next {
                *x /= norm;
            }
        }

        let diff: f64 = scores
            .iter()
            .zip(next.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt();

        scores = next;

        if diff < tolerance {
            let scores = g
                .node_indices()
                .filter_map(|idx| {
                    g.node_weight(idx)
                        .map(|person| (person.clone(), scores[idx.index()]))
                })
                .collect();
            return Ok(EigenvectorScores {
                scores,
                iterations: iteration,
            });
        }
    }

    Err(MetricError::NoConvergence { max_iter })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
