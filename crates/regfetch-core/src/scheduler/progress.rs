//! Per-batch progress reporting.
//!
//! Sent by the scheduler after each batch so the CLI can print a checkpoint
//! line; consumers can compute names per second from `done` and `elapsed_secs`.

/// Snapshot after one batch completed.
#[derive(Debug, Clone)]
pub struct BatchProgress {
    /// 1-based index of the batch that just finished.
    pub batch: usize,
    pub total_batches: usize,
    /// Names saved in this batch.
    pub saved: usize,
    /// Names that permanently failed in this batch.
    pub failed: usize,
    /// Names finished so far across all batches.
    pub done: usize,
    /// Size of the whole work list.
    pub total: usize,
    /// Elapsed time since the first batch started (seconds).
    pub elapsed_secs: f64,
}

impl BatchProgress {
    /// Names per second so far (0 if elapsed is 0).
    pub fn names_per_sec(&self) -> f64 {
        if self.elapsed_secs <= 0.0 {
            return 0.0;
        }
        self.done as f64 / self.elapsed_secs
    }

    /// Fraction complete in [0.0, 1.0].
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        (self.done as f64 / self.total as f64).min(1.0)
    }
}
