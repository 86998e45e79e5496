//! The index document: the single JSON artifact produced by a run.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entry::EntryPayload;
use crate::hash::Sha256Digest;

/// Errors raised while loading or persisting an index document.
#[derive(Error, Debug)]
pub enum IndexError {
    /// Filesystem read/write failure.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The document is not valid JSON for this schema.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The two entry categories of the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Base root-filesystem images.
    Distros,
    /// Overlay addons.
    Addons,
}

impl Category {
    /// The category's key in the index document.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Distros => "distros",
            Category::Addons => "addons",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The output document: every id and alias of every entry maps to that
/// entry's exported payload, partitioned by category.
///
/// A previously written document doubles as the checksum cache for the next
/// run (see [`Index::cached_sha256`]).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Index {
    /// Distro payloads keyed by id and alias.
    #[serde(default)]
    pub distros: BTreeMap<String, EntryPayload>,
    /// Addon payloads keyed by id and alias.
    #[serde(default)]
    pub addons: BTreeMap<String, EntryPayload>,
}

impl Index {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// The mutable key-to-payload mapping for one category.
    pub fn category_mut(&mut self, category: Category) -> &mut BTreeMap<String, EntryPayload> {
        match category {
            Category::Distros => &mut self.distros,
            Category::Addons => &mut self.addons,
        }
    }

    /// The key-to-payload mapping for one category.
    pub fn category(&self, category: Category) -> &BTreeMap<String, EntryPayload> {
        match category {
            Category::Distros => &self.distros,
            Category::Addons => &self.addons,
        }
    }

    /// Load an index document from disk.
    ///
    /// # Errors
    ///
    /// Returns an [`IndexError`] if the file cannot be read or is not a
    /// valid index document. Callers using the document as a checksum cache
    /// treat any error as an empty cache.
    pub fn load(path: &Path) -> Result<Self, IndexError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Persist the document as pretty-printed JSON, fully replacing any
    /// prior file at `path`.
    ///
    /// The entire document is serialized in memory first and written with a
    /// single call, so an interrupted run never leaves a truncated file
    /// from this step.
    ///
    /// # Errors
    ///
    /// Returns an [`IndexError`] if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), IndexError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Look up a previously computed digest for `url` under the entry with
    /// canonical id `id` in `category`.
    ///
    /// Matches on the literal URL string and only returns non-empty digests,
    /// so a rerun never re-downloads an artifact whose checksum was already
    /// persisted.
    pub fn cached_sha256(
        &self,
        category: Category,
        id: &str,
        url: &str,
    ) -> Option<&Sha256Digest> {
        let payload = self.category(category).get(id)?;
        payload
            .urls
            .iter()
            .find(|u| u.url == url)
            .and_then(|u| u.sha256.as_ref())
            .filter(|d| !d.is_empty())
    }
}
