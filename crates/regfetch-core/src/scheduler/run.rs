//! Run batches one after another, members of a batch concurrently.

use anyhow::Result;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc::Sender;
use tokio::task::JoinSet;

use crate::downloader::Fetcher;
use crate::failure_log::FailureLog;

use super::batch::BatchPlan;
use super::progress::BatchProgress;

/// Outcome counts over all batches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchTotals {
    pub batches: usize,
    pub saved: usize,
    pub failed: usize,
}

/// Fetch every name in `names`, `batch_size` at a time.
///
/// Each batch is a `JoinSet` that is drained completely before the next one
/// is filled, so at most one batch of fetches is ever in flight. A name that
/// permanently fails is recorded in `failures` and does not affect its
/// siblings. A storage error from any member is returned immediately; the
/// rest of that batch is aborted when the set is dropped.
pub async fn run_batches(
    fetcher: Arc<Fetcher>,
    names: &[String],
    batch_size: usize,
    failures: Arc<FailureLog>,
    progress_tx: Option<&Sender<BatchProgress>>,
) -> Result<BatchTotals> {
    let plan = BatchPlan::new(names.len(), batch_size);
    let total_batches = plan.total_batches();
    let start = Instant::now();
    let mut totals = BatchTotals::default();

    for (index, range) in plan.ranges().enumerate() {
        let batch_len = range.len();
        tracing::debug!(batch = index + 1, total_batches, size = batch_len, "starting batch");

        let mut set = JoinSet::new();
        for name in &names[range] {
            let fetcher = Arc::clone(&fetcher);
            let failures = Arc::clone(&failures);
            let name = name.clone();
            set.spawn(async move { fetcher.fetch_one(&name, &failures).await });
        }

        let (mut saved, mut failed) = (0usize, 0usize);
        while let Some(res) = set.join_next().await {
            let outcome = res.map_err(|e| anyhow::anyhow!("fetch task join: {}", e))??;
            if outcome.is_saved() {
                saved += 1;
            } else {
                failed += 1;
            }
        }
        debug_assert_eq!(saved + failed, batch_len);

        totals.batches += 1;
        totals.saved += saved;
        totals.failed += failed;
        tracing::info!(
            "Batch {}/{} completed ({} saved, {} failed).",
            index + 1,
            total_batches,
            saved,
            failed
        );

        if let Some(tx) = progress_tx {
            let progress = BatchProgress {
                batch: index + 1,
                total_batches,
                saved,
                failed,
                done: totals.saved + totals.failed,
                total: names.len(),
                elapsed_secs: start.elapsed().as_secs_f64(),
            };
            if tx.send(progress).await.is_err() {
                tracing::debug!("progress receiver dropped");
            }
        }
    }

    Ok(totals)
}
