//! Shared types and wire format for the rootfs image index.
//!
//! This crate defines the catalog model (distros, addons, per-architecture
//! download URLs) and the JSON index document produced by the indexer and
//! consumed by the provisioning client. It is deliberately free of any
//! network or filesystem logic beyond loading and saving the document
//! itself.

pub mod entry;
pub mod hash;
pub mod index;

// Re-exports
pub use entry::{Addon, Catalog, CatalogEntry, Distro, EntryError, EntryPayload, Url};
pub use hash::Sha256Digest;
pub use index::{Category, Index, IndexError};
