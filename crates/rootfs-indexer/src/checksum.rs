//! Checksum resolution: reuse persisted digests, fetch the rest.
//!
//! Every URL in the final document should carry a trustworthy SHA-256
//! digest without redundant network transfer. Digests already present in
//! the previous run's document are reused verbatim; everything else is
//! fetched once, streamed through a hash accumulator, and any transport
//! failure is reported per URL without aborting the run.

use futures::StreamExt;
use reqwest::Client;
use sha2::{Digest, Sha256};
use thiserror::Error;

use rootfs_schema::{Category, EntryPayload, Index, Sha256Digest};

/// Errors raised while fetching an artifact for hashing.
///
/// Always non-fatal: the offending URL is left without a digest and
/// processing continues.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP transport failure or non-success status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// The fetch seam of the resolver.
///
/// Production uses [`HttpFetcher`]; tests inject stubs to prove that cached
/// digests are reused without any network traffic.
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch `url` and return the SHA-256 digest of its full byte content.
    async fn fetch_sha256(&self, url: &str) -> Result<Sha256Digest, FetchError>;
}

/// Streams HTTP(S) bodies through a SHA-256 accumulator.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher with its own connection pool.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_sha256(&self, url: &str) -> Result<Sha256Digest, FetchError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, crate::USER_AGENT)
            .send()
            .await?
            .error_for_status()?;

        // Stream chunks through the hasher; the payload is never buffered
        // whole in memory.
        let mut stream = response.bytes_stream();
        let mut hasher = Sha256::new();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            hasher.update(&chunk);
        }

        Ok(Sha256Digest::new(hex::encode(hasher.finalize())))
    }
}

/// Fills in missing digests on exported payloads.
#[derive(Debug)]
pub struct ChecksumResolver<'a, F: Fetcher> {
    cache: Option<&'a Index>,
    fetcher: &'a F,
}

impl<'a, F: Fetcher> ChecksumResolver<'a, F> {
    /// Create a resolver over an optional previously written document.
    pub fn new(cache: Option<&'a Index>, fetcher: &'a F) -> Self {
        Self { cache, fetcher }
    }

    /// Resolve digests for every URL of `payload` that lacks one.
    ///
    /// URLs are processed strictly in order, one at a time. A fetch failure
    /// leaves that URL's digest absent and is reported on stderr; it never
    /// aborts the remaining URLs or entries.
    pub async fn resolve(&self, category: Category, payload: &mut EntryPayload) {
        for url in &mut payload.urls {
            if url.sha256.is_some() {
                continue;
            }

            if let Some(cached) = self
                .cache
                .and_then(|index| index.cached_sha256(category, &payload.id, &url.url))
            {
                println!("    reusing checksum for {}", url.url);
                url.sha256 = Some(cached.clone());
                continue;
            }

            println!("    downloading {}", url.url);
            match self.fetcher.fetch_sha256(&url.url).await {
                Ok(digest) => {
                    tracing::debug!("computed {} for {}", digest, url.url);
                    url.sha256 = Some(digest);
                }
                Err(e) => {
                    eprintln!("    checksum failed for {}: {e}", url.url);
                }
            }
        }
    }
}
