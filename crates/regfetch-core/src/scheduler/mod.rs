//! Batch scheduler and run coordinator.
//!
//! Splits the work list into consecutive batches, runs every member of a
//! batch concurrently on the shared client, and only starts batch N+1 once
//! every member of batch N has a terminal outcome.

mod batch;
mod coordinator;
mod progress;
mod run;

pub use batch::BatchPlan;
pub use coordinator::{run_all, RunSummary};
pub use progress::BatchProgress;
pub use run::{run_batches, BatchTotals};
