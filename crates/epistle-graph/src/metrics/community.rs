//! Community detection via greedy modularity maximization (CNM).
//!
//! # Overview
//!
//! Clauset-Newman-Moore agglomeration: every node starts as its own
//! community; at each step the pair of communities whose merge yields the
//! largest modularity gain is merged; the process stops when no merge has
//! a strictly positive gain.
//!
//! Modularity of a partition (unweighted):
//!
//! ```text
//! Q = Σ_c ( e_c / m  −  (k_c / 2m)² )
//! ```
//!
//! with `m` the edge count, `e_c` the edges inside community `c`, and
//! `k_c` the total degree of its members. The gain of merging `a` and `b`
//! is `ΔQ = e_ab / m − 2·(k_a / 2m)·(k_b / 2m)` where `e_ab` counts the
//! edges between them.
//!
//! The greedy heuristic needs fixed tie-breaking to stay reproducible:
//! equal gains resolve to the lowest community index pair. Final
//! communities are ordered by (size descending, smallest member identifier
//! ascending) and labeled 0..k in that order.

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::graph::components::ComponentGraph;

/// A deterministic partition of the component into communities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Communities {
    /// Person identifier → community label (0-based, by community rank).
    pub labels: HashMap<String, usize>,
    /// Member identifiers per community, in label order.
    pub members: Vec<Vec<String>>,
}

impl Communities {
    /// Number of communities in the partition.
    #[must_use]
    pub fn count(&self) -> usize {
        self.members.len()
    }
}

/// Partition the component by greedy modularity maximization.
#[must_use]
#[instrument(skip(cg), fields(nodes = cg.node_count()))]
pub fn greedy_modularity_communities(cg: &ComponentGraph) -> Communities {
    let g = &cg.graph;
    let n = g.node_count();

    if n == 0 {
        return Communities {
            labels: HashMap::new(),
            members: Vec::new(),
        };
    }

    let m = g.edge_count();
    if m == 0 {
        // No edges, no merges: singleton communities.
        return finalize(cg, &(0..n).collect::<Vec<_>>());
    }

    #[allow(clippy::cast_precision_loss)]
    let two_m = 2.0 * m as f64;

    // Community state: assignment per node, degree fraction per community,
    // and inter-community edge counts keyed by (low, high) index.
    let mut assignment: Vec<usize> = (0..n).collect();
    let mut degree_frac: Vec<f64> = g
        .node_indices()
        .map(|v| {
            #[allow(clippy::cast_precision_loss)]
            let k = g.edges(v).count() as f64;
            k / two_m
        })
        .collect();
    let mut alive: Vec<bool> = vec![true; n];

    let mut between: HashMap<(usize, usize), usize> = HashMap::new();
    for edge in g.edge_indices() {
        if let Some((a, b)) = g.edge_endpoints(edge) {
            let pair = ordered(a.index(), b.index());
            *between.entry(pair).or_insert(0) += 1;
        }
    }

    loop {
        let Some((pair, gain)) = best_merge(&between, &degree_frac, m) else {
            break;
        };
        if gain <= 0.0 {
            break;
        }

        let (keep, drop) = pair;
        debug!(keep, drop, gain, "merging communities");

        // Fold `drop` into `keep`.
        for slot in &mut assignment {
            if *slot == drop {
                *slot = keep;
            }
        }
        degree_frac[keep] += degree_frac[drop];
        degree_frac[drop] = 0.0;
        alive[drop] = false;

        // Rewire inter-community edge counts touching `drop`.
        let affected: Vec<((usize, usize), usize)> = between
            .iter()
            .filter(|((x, y), _)| *x == drop || *y == drop)
            .map(|(k, v)| (*k, *v))
            .collect();
        for (key, count) in affected {
            between.remove(&key);
            let other = if key.0 == drop { key.1 } else { key.0 };
            if other == keep {
                continue; // now internal to `keep`
            }
            *between.entry(ordered(keep, other)).or_insert(0) += count;
        }

        if alive.iter().filter(|&&a| a).count() < 2 {
            break;
        }
    }

    finalize(cg, &assignment)
}

/// Pick the merge with the largest gain; equal gains resolve to the
/// lowest (low, high) community index pair.
fn best_merge(
    between: &HashMap<(usize, usize), usize>,
    degree_frac: &[f64],
    m: usize,
) -> Option<((usize, usize), f64)> {
    #[allow(clippy::cast_precision_loss)]
    let m = m as f64;

    let mut best: Option<((usize, usize), f64)> = None;
    for (&(a, b), &edges_between) in between {
        #[allow(clippy::cast_precision_loss)]
        let gain = edges_between as f64 / m - 2.0 * degree_frac[a] * degree_frac[b];
        let better = match best {
            None => true,
            Some((best_pair, best_gain)) => {
                gain > best_gain || ((gain - best_gain).abs() < f64::EPSILON && (a, b) < best_pair)
            }
        };
        if better {
            best = Some(((a, b), gain));
        }
    }
    best
}

const fn ordered(a: usize, b: usize) -> (usize, usize) {
    if a < b { (a, b) } else { (b, a) }
}

/// Turn the node→community assignment into ranked, labeled communities.
fn finalize(cg: &ComponentGraph, assignment: &[usize]) -> Communities {
    let mut grouped: HashMap<usize, Vec<String>> = HashMap::new();
    for idx in cg.graph.node_indices() {
        if let Some(person) = cg.graph.node_weight(idx) {
            grouped
                .entry(assignment[idx.index()])
                .or_default()
                .push(person.clone());
        }
    }

    let mut members: Vec<Vec<String>> = grouped.into_values().collect();
    for community in &mut members {
        community.sort();
    }
    members.sort_by(|a, b| {
        b.len()
            .cmp(&a.len())
            .then_with(|| a.first().cmp(&b.first()))
    });

    let mut labels = HashMap::new();
    for (label, community) in members.iter().enumerate() {
        for person in community {
            labels.insert(person.clone(), label);
        }
    }

    Communities { labels, members }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
