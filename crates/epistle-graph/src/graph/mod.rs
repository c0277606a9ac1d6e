//! Undirected person network: construction, statistics, components.
//!
//! # Overview
//!
//! ```text
//! Vec<Edge>
//!        ↓  build::PersonGraph::from_edges()
//! PersonGraph (petgraph UnGraph, node map)
//!        ↓  stats::NetworkStats::from_graph()
//! NetworkStats (degree, density, connectivity, transitivity)
//!        ↓  components::largest_component()
//! ComponentGraph (induced subgraph for the metric suite)
//! ```

pub mod build;
pub mod components;
pub mod stats;

pub use build::PersonGraph;
pub use components::{ComponentGraph, connected_components_sorted, diameter, largest_component};
pub use stats::NetworkStats;
