//! Whole-run orchestration: one client, one failure log, all batches, reports.

use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::Sender;

use crate::config::RegfetchConfig;
use crate::downloader::Fetcher;
use crate::failure_log::{FailureLog, FailureSnapshot, ReportPaths};

use super::progress::BatchProgress;
use super::run::run_batches;

/// What a finished run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub total: usize,
    pub saved: usize,
    pub failed: usize,
    pub batches: usize,
    pub failures: FailureSnapshot,
    pub reports: ReportPaths,
    pub elapsed: Duration,
}

/// Fetch every name in `names` according to `cfg`, then write
/// `failed_packages.json` and `error_messages.txt` into `cfg.report_dir`.
///
/// Fails only on environment problems (invalid config, output or report
/// directory not writable); remote failures end up in the reports.
pub async fn run_all(
    cfg: &RegfetchConfig,
    names: &[String],
    progress_tx: Option<&Sender<BatchProgress>>,
) -> Result<RunSummary> {
    let start = Instant::now();
    cfg.validate()?;

    tokio::fs::create_dir_all(&cfg.output_dir)
        .await
        .with_context(|| format!("create output dir {}", cfg.output_dir.display()))?;
    tokio::fs::create_dir_all(&cfg.report_dir)
        .await
        .with_context(|| format!("create report dir {}", cfg.report_dir.display()))?;

    let fetcher = Arc::new(Fetcher::from_config(cfg)?);
    let failures = Arc::new(FailureLog::new());

    tracing::info!(
        names = names.len(),
        batch_size = cfg.batch_size,
        base_url = %cfg.base_url,
        output_dir = %cfg.output_dir.display(),
        "run started"
    );

    let totals = run_batches(
        fetcher,
        names,
        cfg.batch_size,
        Arc::clone(&failures),
        progress_tx,
    )
    .await?;

    let reports = failures.write_reports(&cfg.report_dir).await?;
    let snapshot = failures.snapshot();
    debug_assert_eq!(snapshot.failed.len(), totals.failed);

    let elapsed = start.elapsed();
    tracing::info!(
        saved = totals.saved,
        failed = totals.failed,
        "Total execution time: {} seconds.",
        elapsed.as_secs_f64()
    );

    Ok(RunSummary {
        total: names.len(),
        saved: totals.saved,
        failed: totals.failed,
        batches: totals.batches,
        failures: snapshot,
        reports,
        elapsed,
    })
}
