//! End-to-end checks over the full declared catalog: build the document,
//! persist it, and make sure a rerun can reuse it as a checksum cache.

use rootfs_indexer::checksum::{FetchError, Fetcher};
use rootfs_indexer::{build_index, catalog, BuildOptions, ChecksumResolver, HttpFetcher};
use rootfs_schema::{Category, Index, Sha256Digest};

const DIGEST: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

struct FixedFetcher;

#[async_trait::async_trait]
impl Fetcher for FixedFetcher {
    async fn fetch_sha256(&self, _url: &str) -> Result<Sha256Digest, FetchError> {
        Ok(Sha256Digest::new(DIGEST))
    }
}

struct PanickingFetcher;

#[async_trait::async_trait]
impl Fetcher for PanickingFetcher {
    async fn fetch_sha256(&self, url: &str) -> Result<Sha256Digest, FetchError> {
        panic!("unexpected fetch of {url}");
    }
}

#[tokio::test]
async fn document_survives_a_disk_round_trip() {
    let catalog = catalog();
    let index = build_index(
        &catalog,
        None::<&ChecksumResolver<HttpFetcher>>,
        &BuildOptions::default(),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("index.json");
    index.save(&path).unwrap();

    let loaded = Index::load(&path).unwrap();
    assert_eq!(loaded.distros.len(), index.distros.len());
    assert_eq!(loaded.addons.len(), index.addons.len());
    assert_eq!(
        loaded.distros["ubuntu"].id,
        index.distros["ubuntu-24.04-vanilla"].id
    );
}

#[tokio::test]
async fn second_run_reuses_every_digest_from_the_first() {
    let catalog = catalog();

    // First run: a fetcher that hands out digests for everything.
    let fetcher = FixedFetcher;
    let resolver = ChecksumResolver::new(None, &fetcher);
    let first = build_index(&catalog, Some(&resolver), &BuildOptions::default()).await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("index.json");
    first.save(&path).unwrap();

    // Second run: loading the first document as cache must satisfy every
    // URL without a single fetch.
    let prior = Index::load(&path).unwrap();
    let fetcher = PanickingFetcher;
    let resolver = ChecksumResolver::new(Some(&prior), &fetcher);
    let second = build_index(&catalog, Some(&resolver), &BuildOptions::default()).await;

    for payload in second.distros.values().chain(second.addons.values()) {
        for url in &payload.urls {
            assert_eq!(
                url.sha256.as_ref().map(Sha256Digest::as_str),
                Some(DIGEST),
                "missing digest for {}",
                url.url
            );
        }
    }
}

#[tokio::test]
async fn cache_lookups_stay_within_their_category() {
    let mut prior = Index::new();
    let catalog = catalog();

    // Persist a digest under the distros category only.
    let fetcher = FixedFetcher;
    let resolver = ChecksumResolver::new(None, &fetcher);
    let built = build_index(&catalog, Some(&resolver), &BuildOptions::default()).await;
    prior.distros = built.distros;

    let addon = &catalog.addons[0];
    assert!(prior
        .cached_sha256(Category::Addons, &addon.id, &addon.urls[0].url)
        .is_none());
}
