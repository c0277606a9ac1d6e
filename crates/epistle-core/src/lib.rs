#![forbid(unsafe_code)]
//! epistle-core: record model and tabular plumbing for the epistle pipeline.
//!
//! # Overview
//!
//! This crate owns everything upstream of the co-occurrence matrix:
//!
//! - [`record::Record`] — one row per correspondence document, as produced
//!   by an external record extractor.
//! - [`expand`] — unnests multi-valued person columns into flat
//!   [`expand::Mention`] rows and normalizes identifiers.
//! - [`source`] — the [`source::RecordSource`] seam plus the shipped
//!   JSON-file reader.
//! - [`config`] — `epistle.toml` pipeline configuration.
//!
//! # Conventions
//!
//! - **Errors**: `anyhow::Result` with `.context(...)` at I/O seams.
//! - **Logging**: `tracing` macros (`info!`, `warn!`, `debug!`).

pub mod config;
pub mod expand;
pub mod record;
pub mod source;

pub use config::PipelineConfig;
pub use expand::{Mention, Role, expand_records};
pub use record::{Record, normalize_id};
pub use source::{JsonRecordReader, RecordSource};
