//! Catalog model: distros, addons, and their exported wire form.
//!
//! The in-memory model types ([`Distro`], [`Addon`]) carry aliases as plain
//! data; the exported wire form ([`EntryPayload`]) has no alias field at
//! all. Aliases exist only as lookup keys in the index document, never as a
//! field inside an entry payload, and the split into two types makes that a
//! compile-time contract rather than a serialization convention.

use serde::{Deserialize, Serialize};

use crate::hash::Sha256Digest;

/// One downloadable artifact for one CPU architecture of one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Url {
    /// CPU architecture this artifact targets (e.g. "amd64").
    pub arch: String,

    /// Download URL of the rootfs archive.
    pub url: String,

    /// SHA-256 digest of the artifact's exact byte content, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256: Option<Sha256Digest>,
}

impl Url {
    /// Create a URL record with no digest.
    pub fn new(arch: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            arch: arch.into(),
            url: url.into(),
            sha256: None,
        }
    }

    /// Create a URL record with a preset digest.
    pub fn with_sha256(
        arch: impl Into<String>,
        url: impl Into<String>,
        sha256: Sha256Digest,
    ) -> Self {
        Self {
            arch: arch.into(),
            url: url.into(),
            sha256: Some(sha256),
        }
    }
}

/// A base root-filesystem image entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distro {
    /// Canonical identifier, unique among distros (e.g. "ubuntu-24.04-vanilla").
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// Per-architecture download URLs; at least one.
    pub urls: Vec<Url>,
    /// Alternate identifiers resolving to the same entry.
    pub aliases: Vec<String>,
}

/// An optional overlay entry, layered onto a base distro.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Addon {
    /// Canonical identifier, unique among addons.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// Per-architecture download URLs; at least one.
    pub urls: Vec<Url>,
    /// Alternate identifiers resolving to the same entry.
    pub aliases: Vec<String>,
    /// Distro ids this addon is compatible with; empty means all distros.
    pub distro_ids: Vec<String>,
}

/// The exported wire form of a catalog entry.
///
/// This is the value stored under every id and alias key of the index
/// document. `distro_ids` is present (possibly empty) for addons and absent
/// for distros.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPayload {
    /// Canonical identifier of the entry this payload was exported from.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// Per-architecture download URLs.
    pub urls: Vec<Url>,
    /// Compatible distro ids (addons only; empty means all distros).
    #[serde(
        rename = "distroIds",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub distro_ids: Option<Vec<String>>,
}

/// Errors reported when validating a catalog entry.
#[derive(thiserror::Error, Debug)]
pub enum EntryError {
    /// A required field (id or name) is empty.
    #[error("{id}: empty field: {field}")]
    EmptyField {
        /// Entry id (or "<unnamed>" when the id itself is empty).
        id: String,
        /// Name of the offending field.
        field: String,
    },

    /// The entry declares no download URLs.
    #[error("{0}: entry has no urls")]
    NoUrls(String),

    /// A download URL is malformed or uses an unsupported scheme.
    #[error("{id}: invalid url: {url}")]
    InvalidUrl {
        /// Entry id.
        id: String,
        /// The offending URL string.
        url: String,
    },

    /// A preset digest is not a 64-character hex string.
    #[error("{id}: {message}")]
    InvalidDigest {
        /// Entry id.
        id: String,
        /// Validation failure detail.
        message: String,
    },
}

fn validate_common(id: &str, name: &str, urls: &[Url]) -> Result<(), EntryError> {
    if id.is_empty() {
        return Err(EntryError::EmptyField {
            id: "<unnamed>".to_string(),
            field: "id".to_string(),
        });
    }
    if name.is_empty() {
        return Err(EntryError::EmptyField {
            id: id.to_string(),
            field: "name".to_string(),
        });
    }
    if urls.is_empty() {
        return Err(EntryError::NoUrls(id.to_string()));
    }
    for u in urls {
        if !(u.url.starts_with("http://") || u.url.starts_with("https://")) {
            return Err(EntryError::InvalidUrl {
                id: id.to_string(),
                url: u.url.clone(),
            });
        }
        if let Some(digest) = &u.sha256 {
            Sha256Digest::validated(digest.as_str()).map_err(|message| {
                EntryError::InvalidDigest {
                    id: id.to_string(),
                    message,
                }
            })?;
        }
    }
    Ok(())
}

/// Common surface of catalog entries, used by the index builder to expand
/// ids and aliases without caring about the concrete entry kind.
pub trait CatalogEntry {
    /// Canonical identifier.
    fn id(&self) -> &str;

    /// Alternate identifiers, in declared order.
    fn aliases(&self) -> &[String];

    /// Per-architecture download URLs.
    fn urls(&self) -> &[Url];

    /// Produce the exported wire form of this entry.
    fn export(&self) -> EntryPayload;

    /// Check the entry's structural integrity.
    ///
    /// # Errors
    ///
    /// Returns an [`EntryError`] if a required field is empty, the entry has
    /// no URLs, a URL does not use http(s), or a preset digest is malformed.
    fn validate(&self) -> Result<(), EntryError>;
}

impl CatalogEntry for Distro {
    fn id(&self) -> &str {
        &self.id
    }

    fn aliases(&self) -> &[String] {
        &self.aliases
    }

    fn urls(&self) -> &[Url] {
        &self.urls
    }

    fn export(&self) -> EntryPayload {
        EntryPayload {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            urls: self.urls.clone(),
            distro_ids: None,
        }
    }

    fn validate(&self) -> Result<(), EntryError> {
        validate_common(&self.id, &self.name, &self.urls)
    }
}

impl CatalogEntry for Addon {
    fn id(&self) -> &str {
        &self.id
    }

    fn aliases(&self) -> &[String] {
        &self.aliases
    }

    fn urls(&self) -> &[Url] {
        &self.urls
    }

    fn export(&self) -> EntryPayload {
        EntryPayload {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            urls: self.urls.clone(),
            distro_ids: Some(self.distro_ids.clone()),
        }
    }

    fn validate(&self) -> Result<(), EntryError> {
        validate_common(&self.id, &self.name, &self.urls)
    }
}

/// The full declared catalog, partitioned by category.
///
/// Built once by an explicit factory at process start and never mutated
/// afterwards; consumed exactly once by the index builder.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Base root-filesystem images, in declared order.
    pub distros: Vec<Distro>,
    /// Overlay addons, in declared order.
    pub addons: Vec<Addon>,
}

impl Catalog {
    /// Total number of entries across both categories.
    pub fn len(&self) -> usize {
        self.distros.len() + self.addons.len()
    }

    /// Whether the catalog contains no entries.
    pub fn is_empty(&self) -> bool {
        self.distros.is_empty() && self.addons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_distro() -> Distro {
        Distro {
            id: "ubuntu-24.04-vanilla".to_string(),
            name: "Ubuntu 24.04 vanilla".to_string(),
            description: "Ubuntu 24.04 base rootfs".to_string(),
            urls: vec![Url::new(
                "amd64",
                "https://cdimage.ubuntu.com/ubuntu-base/releases/24.04/release/ubuntu-base-24.04.3-base-amd64.tar.gz",
            )],
            aliases: vec![
                "ubuntu-24-vanilla".to_string(),
                "ubuntu-vanilla".to_string(),
            ],
        }
    }

    #[test]
    fn export_excludes_aliases() {
        let payload = sample_distro().export();
        let value = serde_json::to_value(&payload).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("aliases"));
        assert_eq!(obj["id"], "ubuntu-24.04-vanilla");
        assert_eq!(obj["urls"][0]["arch"], "amd64");
    }

    #[test]
    fn export_is_idempotent() {
        let distro = sample_distro();
        assert_eq!(distro.export(), distro.export());
    }

    #[test]
    fn distro_payload_has_no_distro_ids_field() {
        let value = serde_json::to_value(sample_distro().export()).unwrap();
        assert!(!value.as_object().unwrap().contains_key("distroIds"));
    }

    #[test]
    fn addon_payload_keeps_empty_distro_ids() {
        let addon = Addon {
            id: "dev-tools".to_string(),
            name: "Dev tools".to_string(),
            description: "Compiler and build tooling overlay".to_string(),
            urls: vec![Url::new("amd64", "https://example.invalid/dev-tools.tar.gz")],
            aliases: vec![],
            distro_ids: vec![],
        };
        let value = serde_json::to_value(addon.export()).unwrap();
        assert_eq!(value["distroIds"], serde_json::json!([]));
    }

    #[test]
    fn sha256_omitted_when_absent() {
        let value = serde_json::to_value(sample_distro().export()).unwrap();
        assert!(!value["urls"][0].as_object().unwrap().contains_key("sha256"));
    }

    #[test]
    fn validate_rejects_entry_without_urls() {
        let mut distro = sample_distro();
        distro.urls.clear();
        assert!(matches!(distro.validate(), Err(EntryError::NoUrls(_))));
    }

    #[test]
    fn validate_rejects_non_http_url() {
        for url in ["ftp://mirror/rootfs.tar.gz", "httpx://mirror/rootfs.tar.gz"] {
            let mut distro = sample_distro();
            distro.urls[0].url = url.to_string();
            assert!(
                matches!(distro.validate(), Err(EntryError::InvalidUrl { .. })),
                "accepted {url}"
            );
        }
    }

    #[test]
    fn validate_accepts_both_http_schemes() {
        for url in ["http://mirror/rootfs.tar.gz", "https://mirror/rootfs.tar.gz"] {
            let mut distro = sample_distro();
            distro.urls[0].url = url.to_string();
            distro.validate().unwrap();
        }
    }

    #[test]
    fn validate_rejects_malformed_digest() {
        let mut distro = sample_distro();
        distro.urls[0].sha256 = Some(Sha256Digest::new("not-a-digest"));
        assert!(matches!(
            distro.validate(),
            Err(EntryError::InvalidDigest { .. })
        ));
    }
}
