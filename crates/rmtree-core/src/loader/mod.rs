/// Loader module — turns a document-store directory into an item table.
///
/// The directory holds one `<id>.metadata` JSON record per item plus
/// optional `<id>.pdf` / `<id>.epub` content files. Enumeration is a single
/// sequential `read_dir` pass; the records are then ingested in parallel
/// (see [`parallel`]).
///
/// Loading is best-effort: a record that cannot be read or parsed is simply
/// absent from the table. Only failing to enumerate the directory itself is
/// an error.
pub mod content;
pub mod metadata;
pub mod parallel;

use crate::model::ItemTable;
use content::ContentIndex;
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;
use tracing::debug;

pub use parallel::IngestStats;

/// Extension of metadata record files.
pub const METADATA_EXTENSION: &str = "metadata";

/// Errors that abort a load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot start loader threads: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Loader tuning.
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Worker threads used for record ingestion.
    pub threads: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            threads: num_cpus::get(),
        }
    }
}

/// Files found in one pass over the source directory.
#[derive(Debug, Default)]
pub struct SourceListing {
    /// `<id>.metadata` paths, in directory order.
    pub records: Vec<PathBuf>,
    pub content: ContentIndex,
}

/// Enumerate `dir`, splitting entries into metadata records and content
/// files. Entries that cannot be inspected are skipped.
pub fn list_source(dir: &Path) -> Result<SourceListing, LoadError> {
    let entries = std::fs::read_dir(dir).map_err(|source| LoadError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut listing = SourceListing::default();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_some_and(|e| e == METADATA_EXTENSION) {
            listing.records.push(path);
        } else {
            listing.content.observe(&path);
        }
    }
    Ok(listing)
}

/// Load every item under `dir` with default options.
pub fn load_items(dir: &Path) -> Result<ItemTable, LoadError> {
    load_items_with(dir, LoadOptions::default()).map(|(table, _)| table)
}

/// Load every item under `dir`, also returning ingestion counters.
pub fn load_items_with(
    dir: &Path,
    options: LoadOptions,
) -> Result<(ItemTable, IngestStats), LoadError> {
    let start = Instant::now();
    let listing = list_source(dir)?;
    debug!(
        "Found {} records, {} pdf and {} epub files in {}",
        listing.records.len(),
        listing.content.pdf_count(),
        listing.content.epub_count(),
        dir.display()
    );

    let (table, stats) =
        parallel::ingest_parallel(&listing.records, &listing.content, options.threads)?;

    debug!(
        loaded = stats.loaded,
        deleted = stats.deleted,
        unreadable = stats.unreadable,
        "Loading complete in {:?}",
        start.elapsed()
    );
    Ok((table, stats))
}
