/// Parallel record ingestion on a dedicated rayon pool.
///
/// One task per metadata record. Each task reads and parses its file
/// outside any lock, then takes the shared table's mutex only for the
/// single insert. `ThreadPool::install` does not return until every task
/// has finished, which is the join barrier: the table is unwrapped only
/// after that, so nothing downstream can observe a partial table.
use super::content::ContentIndex;
use super::metadata::RecordMetadata;
use super::LoadError;
use crate::model::{Item, ItemTable};
use parking_lot::Mutex;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::trace;

/// Outcome counters for one ingestion pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestStats {
    /// Records that produced an item.
    pub loaded: u64,
    /// Records marked deleted by the store.
    pub deleted: u64,
    /// Records that could not be read or parsed.
    pub unreadable: u64,
}

/// Result of processing one record file.
enum Ingested {
    Item(Item),
    Deleted,
    Unreadable,
}

/// Read and convert a single record. Never fails: problems are reported
/// as `Unreadable` and the record is left out.
fn ingest_record(path: &Path, content: &ContentIndex) -> Ingested {
    let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
        return Ingested::Unreadable;
    };

    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(err) => {
            trace!("skipping unreadable record {}: {err}", path.display());
            return Ingested::Unreadable;
        }
    };

    let metadata = match RecordMetadata::parse(&bytes) {
        Ok(m) => m,
        Err(err) => {
            trace!("skipping unparsable record {}: {err}", path.display());
            return Ingested::Unreadable;
        }
    };

    match metadata.into_item(id, content) {
        Some(item) => Ingested::Item(item),
        None => Ingested::Deleted,
    }
}

/// Ingest every record in `records` using `threads` workers.
pub fn ingest_parallel(
    records: &[PathBuf],
    content: &ContentIndex,
    threads: usize,
) -> Result<(ItemTable, IngestStats), LoadError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads.max(1))
        .thread_name(|i| format!("rmtree-loader-{i}"))
        .build()?;

    let table = Mutex::new(ItemTable::with_capacity(records.len()));
    let deleted = AtomicU64::new(0);
    let unreadable = AtomicU64::new(0);

    pool.install(|| {
        records
            .par_iter()
            .for_each(|path| match ingest_record(path, content) {
                Ingested::Item(item) => {
                    table.lock().insert(item);
                }
                Ingested::Deleted => {
                    deleted.fetch_add(1, Ordering::Relaxed);
                }
                Ingested::Unreadable => {
                    unreadable.fetch_add(1, Ordering::Relaxed);
                }
            });
    });

    let table = table.into_inner();
    let stats = IngestStats {
        loaded: table.len() as u64,
        deleted: deleted.into_inner(),
        unreadable: unreadable.into_inner(),
    };
    Ok((table, stats))
}
