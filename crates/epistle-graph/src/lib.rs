#![forbid(unsafe_code)]
//! epistle-graph: from mentions to an annotated network artifact.
//!
//! # Overview
//!
//! This crate turns the flat (document, person) mention table into a
//! weighted undirected person network and computes its structural metrics.
//!
//! ## Pipeline
//!
//! ```text
//! Vec<Mention>
//!        ↓  cooccur::build_cooccurrence()
//! Cooccurrence (document×person incidence → person×person adjacency)
//!        ↓  edges::EdgeFilter::filter()
//! Vec<Edge> (weight > threshold, no self-pairs, no sentinel)
//!        ↓  analyze::analyze()
//! Analysis
//!   ├─ NetworkStats (degree, density, connectivity, transitivity)
//!   ├─ largest-component metrics (diameter, betweenness, eigenvector,
//!   │   degree centrality, greedy-modularity communities)
//!   └─ NodeLink artifact ready for JSON serialization
//! ```
//!
//! # Conventions
//!
//! - **Errors**: construction is infallible; per-metric failures are
//!   explicit values ([`metrics::MetricError`]), never panics.
//! - **Logging**: `tracing` macros; diagnostics go to `info!`.

pub mod analyze;
pub mod cooccur;
pub mod edges;
pub mod graph;
pub mod metrics;
pub mod nodelink;

pub use analyze::{Analysis, AnalyzerConfig, analyze};
pub use cooccur::{Cooccurrence, build_cooccurrence};
pub use edges::{Edge, EdgeFilter};
pub use graph::build::PersonGraph;
pub use nodelink::{LinkEntry, NodeEntry, NodeLink};
