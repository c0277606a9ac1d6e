//! Co-occurrence matrix construction.
//!
//! # Overview
//!
//! Builds a document×person incidence matrix from the mention table, then
//! derives the person×person adjacency by matrix self-multiplication:
//!
//! ```text
//! adjacency = incidence^T · incidence
//! ```
//!
//! Cell (i, j) counts the documents persons i and j share. A person
//! attached to the same document through several roles (say, recipient and
//! referenced) contributes once per attachment, so the incidence matrix
//! holds counts, not 0/1 flags. The diagonal is forced to zero: a person
//! does not co-occur with themself.
//!
//! The product of a matrix transpose with itself is symmetric by
//! construction; [`Cooccurrence::is_symmetric`] exists so tests and
//! callers can assert the invariant rather than trust it.

use std::collections::HashMap;

use nalgebra::DMatrix;
use tracing::{debug, instrument};

use epistle_core::Mention;

/// Person×person shared-document counts.
#[derive(Debug, Clone, PartialEq)]
pub struct Cooccurrence {
    /// Person identifiers in matrix index order (first-seen in the
    /// mention table).
    pub persons: Vec<String>,
    /// Symmetric adjacency matrix with a zero diagonal.
    pub adjacency: DMatrix<u64>,
}

impl Cooccurrence {
    /// Number of distinct persons in the matrix.
    #[must_use]
    pub fn person_count(&self) -> usize {
        self.persons.len()
    }

    /// Shared-document count for a pair of matrix indices.
    #[must_use]
    pub fn weight(&self, i: usize, j: usize) -> u64 {
        self.adjacency[(i, j)]
    }

    /// Verify `adjacency[i][j] == adjacency[j][i]` for all pairs.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        let n = self.person_count();
        (0..n).all(|i| (i + 1..n).all(|j| self.adjacency[(i, j)] == self.adjacency[(j, i)]))
    }

    /// Verify the diagonal is all zeros.
    #[must_use]
    pub fn diagonal_is_zero(&self) -> bool {
        (0..self.person_count()).all(|i| self.adjacency[(i, i)] == 0)
    }
}

/// Build the co-occurrence matrix from flat mentions.
///
/// Documents index rows and persons index columns of the incidence matrix,
/// both in first-seen order, which keeps the output deterministic for a
/// given mention order.
#[must_use]
#[instrument(skip(mentions), fields(mentions = mentions.len()))]
pub fn build_cooccurrence(mentions: &[Mention]) -> Cooccurrence {
    let mut document_index: HashMap<&str, usize> = HashMap::new();
    let mut person_index: HashMap<&str, usize> = HashMap::new();
    let mut persons: Vec<String> = Vec::new();

    for mention in mentions {
        let next_doc = document_index.len();
        document_index
            .entry(mention.document_id.as_str())
            .or_insert(next_doc);
        let next_person = person_index.len();
        person_index
            .entry(mention.person.as_str())
            .or_insert_with(|| {
                persons.push(mention.person.clone());
                next_person
            });
    }

    let mut incidence = DMatrix::<u64>::zeros(document_index.len(), persons.len());
    for mention in mentions {
        let d = document_index[mention.document_id.as_str()];
        let p = person_index[mention.person.as_str()];
        incidence[(d, p)] += 1;
    }

    let mut adjacency = incidence.transpose() * &incidence;
    for i in 0..persons.len() {
        adjacency[(i, i)] = 0;
    }

    debug!(
        documents = document_index.len(),
        persons = persons.len(),
        "co-occurrence matrix built"
    );

    let co = Cooccurrence { persons, adjacency };
    debug_assert!(co.is_symmetric());
    co
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
