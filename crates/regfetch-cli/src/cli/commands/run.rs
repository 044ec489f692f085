//! `regfetch run` – fetch every name, print batch progress and the final report.

use anyhow::Result;
use regfetch_core::config::RegfetchConfig;
use regfetch_core::input;
use regfetch_core::scheduler::{self, BatchProgress};

pub async fn run_fetch(cfg: &RegfetchConfig, limit: Option<usize>) -> Result<()> {
    let names = input::load_names(&cfg.names_path, limit)?;
    if names.is_empty() {
        println!(
            "No names in {}; writing empty reports.",
            cfg.names_path.display()
        );
    }
    tracing::info!(
        "loaded {} name(s) from {}",
        names.len(),
        cfg.names_path.display()
    );

    let (progress_tx, mut progress_rx) = tokio::sync::mpsc::channel::<BatchProgress>(16);
    let progress_handle = tokio::spawn(async move {
        while let Some(p) = progress_rx.recv().await {
            println!(
                "Batch {}/{} completed. ({} saved, {} failed, {:.1}% done, {:.0} names/s)",
                p.batch,
                p.total_batches,
                p.saved,
                p.failed,
                p.fraction() * 100.0,
                p.names_per_sec()
            );
        }
    });

    let result = scheduler::run_all(cfg, &names, Some(&progress_tx)).await;
    drop(progress_tx);
    let _ = progress_handle.await;
    let summary = result?;

    println!(
        "Fetched {} of {} name(s); {} failed ({} noteworthy).",
        summary.saved,
        summary.total,
        summary.failed,
        summary.failures.errors.len()
    );
    if summary.failed > 0 {
        println!(
            "Failures written to {} and {}.",
            summary.reports.failed_packages.display(),
            summary.reports.error_messages.display()
        );
    }
    println!(
        "Total execution time: {} seconds.",
        summary.elapsed.as_secs_f64()
    );
    Ok(())
}
