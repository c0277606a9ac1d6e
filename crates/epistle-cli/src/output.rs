//! Artifact output: pretty-printed JSON for the visualization layer.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};

use epistle_graph::NodeLink;

/// Write the artifact to `path` as indented JSON.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save(data: &NodeLink, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating output file {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), data)
        .with_context(|| format!("writing output file {}", path.display()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
