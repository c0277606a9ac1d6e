//! Centrality metrics and community detection for the largest component.
//!
//! # Overview
//!
//! All metrics operate on a [`crate::graph::ComponentGraph`] and return
//! scores indexed by person identifier:
//!
//! - **Betweenness centrality** (`betweenness`): who bridges otherwise
//!   distant parts of the correspondence network?
//! - **Eigenvector centrality** (`eigenvector`): who is connected to other
//!   well-connected people? Power iteration; may fail to converge.
//! - **Degree centrality** (`degree`): normalized direct connections.
//! - **Greedy modularity communities** (`community`): clusters of people
//!   who co-occur more among themselves than with the rest.

pub mod betweenness;
pub mod community;
pub mod degree;
pub mod eigenvector;

pub use betweenness::betweenness_centrality;
pub use community::{Communities, greedy_modularity_communities};
pub use degree::degree_centrality;
pub use eigenvector::{EigenvectorScores, eigenvector_centrality};

/// A metric-level failure that callers report without aborting the run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetricError {
    /// Power iteration did not reach the tolerance within the cap.
    #[error("eigenvector centrality failed to converge within {max_iter} iterations")]
    NoConvergence { max_iter: usize },
}
