//! Edge filtering: adjacency matrix to a thresholded undirected edge list.
//!
//! # Overview
//!
//! The adjacency matrix carries every person pair, including noise pairs
//! that share a single document. The filter melts it into an edge list and
//! keeps a pair only when:
//!
//! - the endpoints differ (the diagonal is already zero, but the rule is
//!   restated here as a guard),
//! - the weight strictly exceeds the configured threshold,
//! - neither endpoint is the sentinel identifier or empty.
//!
//! Because the matrix is symmetric, (a, b) and (b, a) carry the same
//! weight; only the upper triangle is emitted, so the list is already an
//! undirected edge set with no duplicate pairs.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::cooccur::Cooccurrence;

/// One undirected weighted edge of the person network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    /// Shared-document count, strictly above the filter threshold.
    pub weight: u64,
}

/// Threshold and sentinel rules for turning a matrix into edges.
#[derive(Debug, Clone)]
pub struct EdgeFilter {
    threshold: u64,
    sentinel: String,
}

impl EdgeFilter {
    /// Create a filter keeping pairs with `weight > threshold` and no
    /// `sentinel` endpoint.
    #[must_use]
    pub fn new(threshold: u64, sentinel: impl Into<String>) -> Self {
        Self {
            threshold,
            sentinel: sentinel.into(),
        }
    }

    /// The configured weight cutoff.
    #[must_use]
    pub const fn threshold(&self) -> u64 {
        self.threshold
    }

    /// Melt the matrix's upper triangle into a filtered edge list.
    ///
    /// Edges appear in row-major upper-triangle order, so output order is
    /// determined by the matrix's person order.
    #[must_use]
    #[instrument(skip(self, co), fields(persons = co.person_count(), threshold = self.threshold))]
    pub fn filter(&self, co: &Cooccurrence) -> Vec<Edge> {
        debug_assert!(co.is_symmetric());

        let n = co.person_count();
        let mut edges = Vec::new();
        for i in 0..n {
            if self.excluded(&co.persons[i]) {
                continue;
            }
            for j in i + 1..n {
                if self.excluded(&co.persons[j]) {
                    continue;
                }
                let weight = co.weight(i, j);
                if weight > self.threshold {
                    edges.push(Edge {
                        source: co.persons[i].clone(),
                        target: co.persons[j].clone(),
                        weight,
                    });
                }
            }
        }

        debug!(edges = edges.len(), "edge list filtered");
        edges
    }

    fn excluded(&self, person: &str) -> bool {
        person.is_empty() || person == self.sentinel
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cooccur::build_cooccurrence;
    use epistle_core::expand::Role;
    use epistle_core::Mention;

    fn mention(document_id: &str, person: &str) -> Mention {
        Mention {
            document_id: document_id.to_string(),
            person: person.to_string(),
            role: Role::Reference,
        }
    }

    /// a and b co-occur in three documents; c tags along in one.
    fn three_document_matrix() -> Cooccurrence {
        build_cooccurrence(&[
            mention("d1", "a"),
            mention("d1", "b"),
            mention("d2", "a"),
            mention("d2", "b"),
            mention("d3", "a"),
            mention("d3", "b"),
            mention("d3", "c"),
        ])
    }

    #[test]
    fn weight_must_strictly_exceed_threshold() {
        let co = three_document_matrix();

        let kept = EdgeFilter::new(2, "u").filter(&co);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0], Edge {
            source: "a".to_string(),
            target: "b".to_string(),
            weight: 3,
        });

        // weight == threshold is dropped.
        let dropped = EdgeFilter::new(3, "u").filter(&co);
        assert!(dropped.is_empty());
    }

    #[test]
    fn each_unordered_pair_appears_once() {
        let co = three_document_matrix();
        let edges = EdgeFilter::new(0, "u").filter(&co);
        for edge in &edges {
            let reversed = edges
                .iter()
                .any(|e| e.source == edge.target && e.target == edge.source);
            assert!(!reversed, "found mirrored duplicate of {edge:?}");
        }
    }

    #[test]
    fn sentinel_endpoints_are_excluded() {
        let co = build_cooccurrence(&[
            mention("d1", "a"),
            mention("d1", "u"),
            mention("d2", "a"),
            mention("d2", "u"),
        ]);
        let edges = EdgeFilter::new(0, "u").filter(&co);
        assert!(edges.is_empty(), "a-u pair must not survive");
    }

    #[test]
    fn edges_are_subset_of_off_diagonal_entries() {
        let co = three_document_matrix();
        let edges = EdgeFilter::new(1, "u").filter(&co);
        for edge in &edges {
            assert_ne!(edge.source, edge.target);
            assert!(edge.weight > 1);
        }
    }

    #[test]
    fn empty_matrix_yields_no_edges() {
        let co = build_cooccurrence(&[]);
        assert!(EdgeFilter::new(0, "u").filter(&co).is_empty());
    }
}
