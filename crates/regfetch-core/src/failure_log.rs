//! Run-wide record of names that permanently failed.
//!
//! Fetchers only append; the run coordinator owns the log and reads it once
//! every batch has finished.

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::retry::FetchError;
use crate::storage;

/// File name of the failed-names report.
pub const FAILED_PACKAGES_FILE: &str = "failed_packages.json";
/// File name of the noteworthy-errors report.
pub const ERROR_MESSAGES_FILE: &str = "error_messages.txt";

#[derive(Debug, Default)]
struct Entries {
    failed: Vec<String>,
    errors: Vec<String>,
}

/// Append-only failed list and error log, safe to share across tasks.
///
/// The lock is only held for two `Vec::push` calls and never across an
/// `.await`, so a plain `std::sync::Mutex` is enough.
#[derive(Debug, Default)]
pub struct FailureLog {
    entries: Mutex<Entries>,
}

/// Paths written by [`FailureLog::write_reports`].
#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub failed_packages: PathBuf,
    pub error_messages: PathBuf,
}

/// Owned copy of the log, taken after the last batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailureSnapshot {
    pub failed: Vec<String>,
    pub errors: Vec<String>,
}

impl FailureLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a permanent failure for `name`.
    ///
    /// The name always goes to the failed list. The error log gets
    /// `"<name>: <error>"` unless the registry's last answer was 404.
    pub fn record(&self, name: &str, err: &FetchError) {
        let mut entries = self.lock();
        entries.failed.push(name.to_string());
        if !err.is_not_found() {
            entries.errors.push(format!("{}: {}", name, err));
        }
    }

    pub fn snapshot(&self) -> FailureSnapshot {
        let entries = self.lock();
        FailureSnapshot {
            failed: entries.failed.clone(),
            errors: entries.errors.clone(),
        }
    }

    /// Write `failed_packages.json` and `error_messages.txt` into `dir`,
    /// replacing earlier reports. Both are JSON arrays with 2-space indentation.
    pub async fn write_reports(&self, dir: &Path) -> Result<ReportPaths> {
        let snapshot = self.snapshot();
        let paths = ReportPaths {
            failed_packages: dir.join(FAILED_PACKAGES_FILE),
            error_messages: dir.join(ERROR_MESSAGES_FILE),
        };
        storage::write_json_pretty(&paths.failed_packages, &snapshot.failed).await?;
        storage::write_json_pretty(&paths.error_messages, &snapshot.errors).await?;
        Ok(paths)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Entries> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
