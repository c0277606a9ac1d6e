//! Pipeline configuration loaded from an optional `epistle.toml`.
//!
//! Every field has a default, so a missing config file is equivalent to an
//! empty one. The weight threshold is the domain-tuned noise cutoff for
//! co-occurrence edges; it is not derived from the data.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::record::UNKNOWN_PERSON;

/// Default location checked when no `--config` path is given.
pub const DEFAULT_CONFIG_PATH: &str = "epistle.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Co-occurrence weight cutoff: only pairs with `weight > threshold`
    /// become edges.
    #[serde(default = "default_weight_threshold")]
    pub weight_threshold: u64,
    /// Placeholder identifier excluded from the network.
    #[serde(default = "default_sentinel")]
    pub sentinel: String,
    #[serde(default)]
    pub eigenvector: EigenvectorConfig,
    #[serde(default)]
    pub names: NamesConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            weight_threshold: default_weight_threshold(),
            sentinel: default_sentinel(),
            eigenvector: EigenvectorConfig::default(),
            names: NamesConfig::default(),
        }
    }
}

/// Convergence controls for eigenvector centrality power iteration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EigenvectorConfig {
    #[serde(default = "default_max_iter")]
    pub max_iter: usize,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

impl Default for EigenvectorConfig {
    fn default() -> Self {
        Self {
            max_iter: default_max_iter(),
            tolerance: default_tolerance(),
        }
    }
}

/// Name-enrichment endpoints and cache location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamesConfig {
    /// Base URL of the names lookup service.
    #[serde(default = "default_service_url")]
    pub service_url: String,
    /// Local id-to-name cache file, read-modify-write.
    #[serde(default = "default_cache_path")]
    pub cache_path: PathBuf,
}

impl Default for NamesConfig {
    fn default() -> Self {
        Self {
            service_url: default_service_url(),
            cache_path: default_cache_path(),
        }
    }
}

/// Load configuration from `path`, or from `epistle.toml` in the current
/// directory when `path` is `None`. A missing file yields the defaults; a
/// present-but-invalid file is an error.
///
/// # Errors
///
/// Returns an error if an explicitly named file is missing, or if any
/// config file fails to parse.
pub fn load(path: Option<&Path>) -> Result<PipelineConfig> {
    match path {
        Some(explicit) => read_config(explicit),
        None => {
            let fallback = Path::new(DEFAULT_CONFIG_PATH);
            if fallback.exists() {
                read_config(fallback)
            } else {
                Ok(PipelineConfig::default())
            }
        }
    }
}

fn read_config(path: &Path) -> Result<PipelineConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("parsing config file {}", path.display()))
}

fn default_weight_threshold() -> u64 {
    3
}

fn default_sentinel() -> String {
    UNKNOWN_PERSON.to_string()
}

fn default_max_iter() -> usize {
    100
}

fn default_tolerance() -> f64 {
    1e-6
}

fn default_service_url() -> String {
    "https://primarysourcecoop.org/mhs-api/ext/names".to_string()
}

fn default_cache_path() -> PathBuf {
    PathBuf::from("data/idtoname.json")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_archive_tuning() {
        let config = PipelineConfig::default();
        assert_eq!(config.weight_threshold, 3);
        assert_eq!(config.sentinel, "u");
        assert_eq!(config.eigenvector.max_iter, 100);
        assert!((config.eigenvector.tolerance - 1e-6).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_default_file_yields_defaults() {
        let config = load(None).expect("load without file");
        assert_eq!(config.weight_threshold, 3);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("epistle.toml");
        std::fs::write(&path, "weight_threshold = 15\n").expect("write config");

        let config = load(Some(&path)).expect("load partial config");
        assert_eq!(config.weight_threshold, 15);
        assert_eq!(config.sentinel, "u");
    }

    #[test]
    fn nested_sections_parse() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("epistle.toml");
        std::fs::write(
            &path,
            "[eigenvector]\nmax_iter = 500\n\n[names]\ncache_path = \"cache.json\"\n",
        )
        .expect("write config");

        let config = load(Some(&path)).expect("load nested config");
        assert_eq!(config.eigenvector.max_iter, 500);
        assert_eq!(config.names.cache_path, PathBuf::from("cache.json"));
        assert!((config.eigenvector.tolerance - 1e-6).abs() < f64::EPSILON);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        assert!(load(Some(Path::new("/nonexistent/epistle.toml"))).is_err());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("epistle.toml");
        std::fs::write(&path, "weight_threshold = [not a number").expect("write config");
        assert!(load(Some(&path)).is_err());
    }
}
