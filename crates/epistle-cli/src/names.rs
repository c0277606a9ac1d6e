//! Name enrichment: attach display names to artifact nodes.
//!
//! # Overview
//!
//! Node identifiers are archive-internal tokens; the visualization wants
//! human names. Resolution goes through two layers:
//!
//! 1. A local JSON cache file mapping id → `{given_name, family_name}`.
//!    Missing or corrupt files count as an empty cache, never an error.
//! 2. The names lookup service: a blocking GET per unresolved id, one at
//!    a time. The response carries a `data` map keyed by id; a valid
//!    response without the requested id means the service does not know
//!    the person, and the raw id is used as the display name. That
//!    fallback is *not* written to the cache, so a later run retries.
//!
//! Transport-level failures are propagated and abort enrichment — a dead
//! service is not the same as an unknown person. The cache is rewritten
//! once after all nodes resolve.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use epistle_graph::NodeLink;

/// A person's name as the lookup service reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    pub given_name: String,
    pub family_name: String,
}

impl PersonName {
    /// Display form: given name, space, family name.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }
}

/// Anything that can look up a person's name remotely.
pub trait NameLookup {
    /// Look up `id`. `Ok(None)` means the service answered but does not
    /// know the person; `Err` means the service could not be reached.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an undecodable response.
    fn lookup(&self, id: &str) -> Result<Option<PersonName>>;
}

/// Blocking HTTP client for the names service.
#[derive(Debug, Clone)]
pub struct HttpNameLookup {
    base_url: String,
}

impl HttpNameLookup {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    data: HashMap<String, PersonName>,
}

impl NameLookup for HttpNameLookup {
    fn lookup(&self, id: &str) -> Result<Option<PersonName>> {
        let url = format!("{}?huscs={}", self.base_url, id);
        let response = ureq::get(&url)
            .set("User-Agent", "epistle-cli")
            .call()
            .map_err(|err| anyhow!("name service request failed for {url}: {err}"))?;
        let body: LookupResponse = response
            .into_json()
            .context("failed to decode name service JSON response")?;
        Ok(body.data.get(id).cloned())
    }
}

/// The local id-to-name cache, read once and rewritten once.
#[derive(Debug)]
pub struct NameCache {
    path: PathBuf,
    entries: HashMap<String, PersonName>,
}

impl NameCache {
    /// Load the cache from `path`. A missing or unreadable file yields an
    /// empty cache; only later persistence failures are errors.
    #[must_use]
    #[instrument]
    pub fn load(path: &Path) -> Self {
        let entries = match std::fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "corrupt name cache, starting empty");
                    HashMap::new()
                }
            },
            Err(err) => {
                debug!(path = %path.display(), error = %err, "no name cache, starting empty");
                HashMap::new()
            }
        };
        Self {
            path: path.to_path_buf(),
            entries,
        }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&PersonName> {
        self.entries.get(id)
    }

    pub fn insert(&mut self, id: impl Into<String>, name: PersonName) {
        self.entries.insert(id.into(), name);
    }

    /// Number of cached names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the cache back to its file, creating parent folders as
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating cache folder {}", parent.display()))?;
            }
        }
        let json = serde_json::to_string(&self.entries).context("serializing name cache")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("writing name cache {}", self.path.display()))
    }
}

/// Cache-first name resolution over any [`NameLookup`].
#[derive(Debug)]
pub struct NameResolver<L> {
    cache: NameCache,
    lookup: L,
}

impl<L: NameLookup> NameResolver<L> {
    #[must_use]
    pub const fn new(cache: NameCache, lookup: L) -> Self {
        Self { cache, lookup }
    }

    /// Resolve one identifier to a display name.
    ///
    /// # Errors
    ///
    /// Propagates lookup transport failures.
    pub fn resolve(&mut self, id: &str) -> Result<String> {
        if let Some(name) = self.cache.get(id) {
            return Ok(name.display());
        }
        match self.lookup.lookup(id)? {
            Some(name) => {
                let display = name.display();
                self.cache.insert(id, name);
                Ok(display)
            }
            None => {
                debug!(id, "name service has no entry, using raw id");
                Ok(id.to_string())
            }
        }
    }

    /// Attach a display name to every node, then persist the cache.
    ///
    /// # Errors
    ///
    /// Aborts on the first lookup transport failure; the cache file is
    /// only rewritten after every node resolved.
    #[instrument(skip(self, data), fields(nodes = data.nodes.len()))]
    pub fn enrich(&mut self, data: &mut NodeLink) -> Result<()> {
        for node in &mut data.nodes {
            node.name = Some(self.resolve(&node.id)?);
        }
        self.cache.save()?;
        info!(cached = self.cache.len(), "name enrichment complete");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
