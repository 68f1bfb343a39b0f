//! Run every entry on a fixed-size pool.
use crate::entry::Entry;
use crate::job::{fetch_and_write, FetchOptions, Outcome};
use crate::source::StructureSource;
use anyhow::{Context, Result};
use rayon::prelude::*;

/// Process `entries` on `threads` workers.
///
/// Entries run in no particular order, but the returned outcomes line up
/// one-to-one with `entries`. Only pool construction can fail here; per-entry
/// failures are carried inside each [`Outcome`].
pub fn run_batch(
    entries: &[Entry],
    source: &dyn StructureSource,
    options: &FetchOptions,
    threads: usize,
) -> Result<Vec<Outcome>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("ferritin-fetch-{i}"))
        .build()
        .context("failed to build worker pool")?;

    tracing::info!(entries = entries.len(), threads, "starting batch");
    let outcomes: Vec<Outcome> = pool.install(|| {
        entries
            .par_iter()
            .map(|entry| fetch_and_write(source, entry, options))
            .collect()
    });

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    tracing::info!(
        succeeded = outcomes.len() - failed,
        failed,
        "batch finished"
    );
    Ok(outcomes)
}
