//! Single-item fetcher: one name → one request/retry loop → one record file
//! or one entry in the failure log.

mod attempt;
mod client;

pub use client::build_client;

use anyhow::Result;
use std::path::PathBuf;

use crate::config::RegfetchConfig;
use crate::failure_log::FailureLog;
use crate::retry::{run_with_retry, ErrorKind, FetchError, RetryPolicy};
use crate::url_model::{record_path, request_url};

/// Terminal result for one name in one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Record written to `path`.
    Saved { path: PathBuf, attempts: u32 },
    /// Retry ceiling exhausted; already recorded in the failure log.
    Failed { error: FetchError, attempts: u32 },
}

impl Outcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Outcome::Saved { .. })
    }
}

/// Fetches and stores registry records. Cheap to clone; all clones share
/// one connection pool.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    base_url: String,
    output_dir: PathBuf,
    policy: RetryPolicy,
}

impl Fetcher {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        output_dir: impl Into<PathBuf>,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            output_dir: output_dir.into(),
            policy,
        }
    }

    /// Fetcher using the client, endpoint, output directory and retry policy from `cfg`.
    pub fn from_config(cfg: &RegfetchConfig) -> Result<Self> {
        Ok(Self::new(
            build_client(cfg)?,
            cfg.base_url.clone(),
            cfg.output_dir.clone(),
            cfg.retry_policy(),
        ))
    }

    /// Retrieve `name`, retrying every remote failure up to the policy's
    /// ceiling, and persist it as `<output_dir>/<sanitized>.json`.
    ///
    /// Remote failures never escape: on give-up the name is appended to
    /// `failures` and `Outcome::Failed` is returned. Only a local write
    /// failure is returned as `Err`.
    pub async fn fetch_one(&self, name: &str, failures: &FailureLog) -> Result<Outcome> {
        let url = request_url(&self.base_url, name);
        let path = record_path(&self.output_dir, name);

        let mut attempts = 0u32;
        let res = run_with_retry(&self.policy, |n| {
            attempts = n;
            self.attempt(&url, &path)
        })
        .await;

        match res {
            Ok(()) => {
                tracing::trace!(resource = name, attempts, path = %path.display(), "saved");
                Ok(Outcome::Saved { path, attempts })
            }
            Err((error, _)) if error.kind == ErrorKind::Storage => Err(anyhow::Error::new(error)
                .context(format!("cannot store record for {}", name))),
            Err((error, attempts)) => {
                tracing::warn!(
                    resource = name,
                    status = ?error.status,
                    attempts,
                    "Error: {} {}",
                    name,
                    error
                );
                failures.record(name, &error);
                Ok(Outcome::Failed { error, attempts })
            }
        }
    }
}
