//! Index construction: export, checksum splicing, alias expansion.

use rootfs_schema::{Catalog, CatalogEntry, Category, Index};

use crate::checksum::{ChecksumResolver, Fetcher};

/// Knobs for one build run.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    /// Report every id/alias overwrite on stderr. The overwrite still
    /// happens either way; last write wins.
    pub report_collisions: bool,
}

/// Turn the catalog into the output document.
///
/// For each category, in declared entry order: export the entry, resolve
/// checksums when a resolver is given (splicing by literal URL match), and
/// assign the payload under the entry's id followed by each alias. Keys are
/// last-write-wins; no uniqueness is enforced. With no resolver, URLs still
/// missing a digest are only warned about.
pub async fn build_index<F: Fetcher>(
    catalog: &Catalog,
    resolver: Option<&ChecksumResolver<'_, F>>,
    options: &BuildOptions,
) -> Index {
    let mut index = Index::new();

    build_category(
        &catalog.distros,
        Category::Distros,
        resolver,
        options,
        &mut index,
    )
    .await;
    build_category(
        &catalog.addons,
        Category::Addons,
        resolver,
        options,
        &mut index,
    )
    .await;

    index
}

async fn build_category<E: CatalogEntry, F: Fetcher>(
    entries: &[E],
    category: Category,
    resolver: Option<&ChecksumResolver<'_, F>>,
    options: &BuildOptions,
    index: &mut Index,
) {
    for entry in entries {
        println!("  {category}/{}", entry.id());

        let mut payload = entry.export();
        match resolver {
            Some(resolver) => resolver.resolve(category, &mut payload).await,
            None => {
                for url in &payload.urls {
                    if url.sha256.is_none() {
                        println!("    missing checksum: {}", url.url);
                    }
                }
            }
        }

        let target = index.category_mut(category);
        for key in std::iter::once(entry.id()).chain(entry.aliases().iter().map(String::as_str)) {
            if options.report_collisions {
                if let Some(previous) = target.get(key) {
                    eprintln!(
                        "  collision: {category} key '{key}' of '{}' overwritten by '{}'",
                        previous.id,
                        entry.id()
                    );
                }
            }
            target.insert(key.to_string(), payload.clone());
        }
    }
}
