//! Degree centrality: direct connections, normalized.
//!
//! The score of a node is `degree / (n - 1)` — the fraction of other
//! component members it shares at least one document with.

use std::collections::HashMap;

use crate::graph::components::ComponentGraph;

/// Compute degree centrality for every component member.
///
/// A single-node component scores 0.0 (no possible neighbors).
#[must_use]
pub fn degree_centrality(cg: &ComponentGraph) -> HashMap<String, f64> {
    let n = cg.node_count();
    let scale = degree_scale(n);

    cg.graph
        .node_indices()
        .filter_map(|idx| {
            cg.graph.node_weight(idx).map(|person| {
                #[allow(clippy::cast_precision_loss)]
                let d = cg.graph.edges(idx).count() as f64;
                (person.clone(), d * scale)
            })
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn degree_scale(n: usize) -> f64 {
    if n < 2 { 0.0 } else { 1.0 / (n - 1) as f64 }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
