//! Record sources: the seam between the pipeline and the record extractor.
//!
//! # Overview
//!
//! XML parsing of the archive's source documents is owned by an external
//! extractor. The pipeline consumes its output through [`RecordSource`],
//! which hides where records come from. The shipped implementation,
//! [`JsonRecordReader`], reads one JSON record file per document from a
//! folder tree: files are discovered recursively, sorted by path for
//! deterministic runs, and truncated to a caller-supplied limit so large
//! archives can be sampled from the front.
//!
//! Files that fail to parse are dropped with a warning rather than
//! aborting the run; a missing person field inside an otherwise valid
//! record is handled downstream by the relation expander, which simply
//! emits no mention for it.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, instrument, warn};

use crate::record::Record;

/// Anything that can produce a batch of correspondence records.
pub trait RecordSource {
    /// Produce all records, in a deterministic order.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be read at all.
    /// Individually malformed records are dropped, not surfaced.
    fn records(&self) -> Result<Vec<Record>>;
}

/// Reads per-document JSON record files from a folder tree.
#[derive(Debug, Clone)]
pub struct JsonRecordReader {
    folder: PathBuf,
    limit: usize,
}

impl JsonRecordReader {
    /// Create a reader over `folder`, keeping at most `limit` files.
    #[must_use]
    pub fn new(folder: impl Into<PathBuf>, limit: usize) -> Self {
        Self {
            folder: folder.into(),
            limit,
        }
    }

    /// Discover record files under the folder: recursive walk, `.json`
    /// suffix filter, sorted by path, truncated to the limit.
    fn record_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        walk(&self.folder, &mut files)
            .with_context(|| format!("walking record folder {}", self.folder.display()))?;
        files.sort();
        files.truncate(self.limit);
        Ok(files)
    }
}

impl RecordSource for JsonRecordReader {
    #[instrument(skip(self), fields(folder = %self.folder.display(), limit = self.limit))]
    fn records(&self) -> Result<Vec<Record>> {
        let files = self.record_files()?;
        debug!(count = files.len(), "record files discovered");

        let mut records = Vec::with_capacity(files.len());
        for path in files {
            match read_record(&path) {
                Ok(record) => records.push(record),
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "dropping malformed record file");
                }
            }
        }
        Ok(records)
    }
}

fn read_record(path: &Path) -> Result<Record> {
    let file =
        File::open(path).with_context(|| format!("opening record file {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("decoding record file {}", path.display()))
}

fn walk(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            walk(&path, out)?;
        } else if path.extension().is_some_and(|ext| ext == "json") {
            out.push(path);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
