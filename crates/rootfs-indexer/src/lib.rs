//! rootfs-indexer - builds the rootfs image index document.
//!
//! The indexer turns a statically declared catalog of distros and addons
//! into a single JSON index mapping every id and alias to its exported
//! entry payload, optionally filling in missing SHA-256 checksums by
//! streaming each artifact through a hash accumulator (reusing digests
//! from the previous run's document whenever possible).

/// Index construction: export, checksum splicing, alias expansion.
pub mod build;
/// The statically declared catalog of distros and addons.
pub mod catalog;
/// Checksum resolution: digest reuse and streaming fetch.
pub mod checksum;
/// Parametric generation of release-family entries.
pub mod family;

pub use build::{build_index, BuildOptions};
pub use catalog::catalog;
pub use checksum::{ChecksumResolver, FetchError, Fetcher, HttpFetcher};
pub use family::{release_distro, ReleaseSpec};

/// User-Agent sent with every checksum fetch.
pub const USER_AGENT: &str = concat!("rootfs-indexer/", env!("CARGO_PKG_VERSION"));
