//! CLI for regfetch.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use regfetch_core::config::{self, RegfetchConfig};
use std::path::PathBuf;

use commands::{run_fetch, run_sanitize};

/// Top-level CLI for regfetch.
#[derive(Debug, Parser)]
#[command(name = "regfetch")]
#[command(about = "regfetch: batched registry metadata fetcher", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch metadata for every name in the names file.
    Run {
        /// Config file to use instead of ~/.config/regfetch/config.toml.
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
        /// JSON array of names to fetch.
        #[arg(long, value_name = "PATH")]
        names: Option<PathBuf>,
        /// Directory for per-name record files.
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
        /// Directory for failed_packages.json and error_messages.txt.
        #[arg(long, value_name = "DIR")]
        report_dir: Option<PathBuf>,
        /// Registry endpoint the name is appended to.
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
        /// Maximum number of requests in flight at once.
        #[arg(long, value_name = "N")]
        batch_size: Option<usize>,
        /// Only fetch the first N names.
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },

    /// Print the record filename a name is stored under.
    Sanitize {
        /// Resource name, e.g. @types/node.
        name: String,
    },
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub names: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub report_dir: Option<PathBuf>,
    pub base_url: Option<String>,
    pub batch_size: Option<usize>,
}

impl Overrides {
    pub fn apply(self, cfg: &mut RegfetchConfig) {
        if let Some(v) = self.names {
            cfg.names_path = v;
        }
        if let Some(v) = self.output_dir {
            cfg.output_dir = v;
        }
        if let Some(v) = self.report_dir {
            cfg.report_dir = v;
        }
        if let Some(v) = self.base_url {
            cfg.base_url = v;
        }
        if let Some(v) = self.batch_size {
            cfg.batch_size = v;
        }
    }
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Run {
                config: config_path,
                names,
                output_dir,
                report_dir,
                base_url,
                batch_size,
                limit,
            } => {
                let mut cfg = match config_path {
                    Some(path) => config::load_from_path(&path)?,
                    None => config::load_or_init()?,
                };
                Overrides {
                    names,
                    output_dir,
                    report_dir,
                    base_url,
                    batch_size,
                }
                .apply(&mut cfg);
                tracing::debug!("effective config: {:?}", cfg);
                run_fetch(&cfg, limit).await?;
            }
            CliCommand::Sanitize { name } => run_sanitize(&name),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
