//! rootfs-indexer - regenerates the rootfs image index document.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rootfs_indexer::{build_index, catalog, BuildOptions, ChecksumResolver, HttpFetcher};
use rootfs_schema::Index;

#[derive(Parser)]
#[command(name = "rootfs-indexer")]
#[command(about = "Builds the rootfs image index consumed by the provisioning client", long_about = None)]
struct Cli {
    /// Output path for the index document
    #[arg(short, long, default_value = "index.json")]
    output: PathBuf,

    /// Compute missing checksums by streaming each artifact once; digests
    /// already present in the previous document are reused
    #[arg(long)]
    checksums: bool,

    /// Report id/alias collisions instead of silently overwriting
    #[arg(long)]
    check_collisions: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let catalog = catalog();
    println!(
        "Regenerating index ({} distros, {} addons)...",
        catalog.distros.len(),
        catalog.addons.len()
    );

    // The previous document at the output path doubles as the checksum
    // cache. Missing or malformed documents are tolerated.
    let cache = if cli.checksums {
        if cli.output.exists() {
            match Index::load(&cli.output) {
                Ok(prior) => Some(prior),
                Err(e) => {
                    eprintln!("  failed to load previous index, starting cold: {e}");
                    None
                }
            }
        } else {
            None
        }
    } else {
        None
    };

    let options = BuildOptions {
        report_collisions: cli.check_collisions,
    };

    let fetcher = HttpFetcher::new();
    let resolver = cli
        .checksums
        .then(|| ChecksumResolver::new(cache.as_ref(), &fetcher));

    let index = build_index(&catalog, resolver.as_ref(), &options).await;

    index
        .save(&cli.output)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    println!("Wrote {}", cli.output.display());
    Ok(())
}
