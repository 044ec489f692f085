use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::retry::RetryPolicy;

/// Retry policy parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts per name (including the first).
    pub max_attempts: u32,
    /// Fixed delay in milliseconds between attempts.
    pub delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay_ms: 100,
        }
    }
}

/// Global configuration loaded from `~/.config/regfetch/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegfetchConfig {
    /// Registry endpoint; the raw resource name is appended to it.
    pub base_url: String,
    /// JSON array of names to fetch.
    pub names_path: PathBuf,
    /// Directory receiving one `<sanitized>.json` per fetched name.
    pub output_dir: PathBuf,
    /// Directory receiving `failed_packages.json` and `error_messages.txt`.
    pub report_dir: PathBuf,
    /// Maximum number of fetches in flight at once.
    pub batch_size: usize,
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
    /// Per-request timeout in seconds (None = client default, no timeout).
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    /// User-Agent header sent with every request.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for RegfetchConfig {
    fn default() -> Self {
        Self {
            base_url: "https://registry.npmjs.org/".to_string(),
            names_path: PathBuf::from("names.json"),
            output_dir: PathBuf::from("npmDetails"),
            report_dir: PathBuf::from("."),
            batch_size: 10_000,
            retry: None,
            request_timeout_secs: None,
            user_agent: None,
        }
    }
}

impl RegfetchConfig {
    /// Retry policy from the `[retry]` section, or the defaults (3 attempts, 100 ms).
    pub fn retry_policy(&self) -> RetryPolicy {
        let retry = self.retry.clone().unwrap_or_default();
        RetryPolicy {
            max_attempts: retry.max_attempts,
            delay: Duration::from_millis(retry.delay_ms),
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Reject settings that would make a run meaningless.
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.base_url)
            .with_context(|| format!("invalid base_url: {}", self.base_url))?;
        if let Some(retry) = &self.retry {
            if retry.max_attempts == 0 {
                anyhow::bail!("retry.max_attempts must be at least 1");
            }
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("regfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RegfetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RegfetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

/// Load configuration from an explicit file (e.g. `--config`).
pub fn load_from_path(path: &Path) -> Result<RegfetchConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: RegfetchConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
