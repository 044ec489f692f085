//! Shared HTTP client construction.

use anyhow::{Context, Result};

use crate::config::RegfetchConfig;

const DEFAULT_USER_AGENT: &str = concat!("regfetch/", env!("CARGO_PKG_VERSION"));

/// Build the one client a run shares across all fetches. No timeout unless
/// `request_timeout_secs` is set.
pub fn build_client(cfg: &RegfetchConfig) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder()
        .user_agent(cfg.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT));
    if let Some(timeout) = cfg.request_timeout() {
        builder = builder.timeout(timeout);
    }
    builder.build().context("build HTTP client")
}
