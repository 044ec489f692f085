//! CLI parse tests.

use super::commands::run_fetch;
use super::{Cli, CliCommand, Overrides};
use clap::Parser;
use regfetch_core::config::RegfetchConfig;
use std::path::{Path, PathBuf};

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_run_defaults() {
    match parse(&["regfetch", "run"]) {
        CliCommand::Run {
            config,
            names,
            output_dir,
            report_dir,
            base_url,
            batch_size,
            limit,
        } => {
            assert!(config.is_none());
            assert!(names.is_none());
            assert!(output_dir.is_none());
            assert!(report_dir.is_none());
            assert!(base_url.is_none());
            assert!(batch_size.is_none());
            assert!(limit.is_none());
        }
        _ => panic!("expected Run"),
    }
}

#[test]
fn cli_parse_run_all_flags() {
    match parse(&[
        "regfetch",
        "run",
        "--config",
        "/etc/regfetch.toml",
        "--names",
        "names.json",
        "--output-dir",
        "out",
        "--report-dir",
        "reports",
        "--base-url",
        "http://localhost:4873/",
        "--batch-size",
        "500",
        "--limit",
        "1000",
    ]) {
        CliCommand::Run {
            config,
            names,
            output_dir,
            report_dir,
            base_url,
            batch_size,
            limit,
        } => {
            assert_eq!(config.as_deref(), Some(Path::new("/etc/regfetch.toml")));
            assert_eq!(names.as_deref(), Some(Path::new("names.json")));
            assert_eq!(output_dir.as_deref(), Some(Path::new("out")));
            assert_eq!(report_dir.as_deref(), Some(Path::new("reports")));
            assert_eq!(base_url.as_deref(), Some("http://localhost:4873/"));
            assert_eq!(batch_size, Some(500));
            assert_eq!(limit, Some(1000));
        }
        _ => panic!("expected Run with flags"),
    }
}

#[test]
fn cli_parse_run_rejects_non_numeric_batch_size() {
    assert!(Cli::try_parse_from(["regfetch", "run", "--batch-size", "many"]).is_err());
}

#[test]
fn cli_parse_sanitize() {
    match parse(&["regfetch", "sanitize", "@types/node"]) {
        CliCommand::Sanitize { name } => assert_eq!(name, "@types/node"),
        _ => panic!("expected Sanitize"),
    }
}

#[test]
fn overrides_replace_only_given_values() {
    let mut cfg = RegfetchConfig::default();
    Overrides {
        output_dir: Some(PathBuf::from("elsewhere")),
        batch_size: Some(25),
        ..Overrides::default()
    }
    .apply(&mut cfg);
    assert_eq!(cfg.output_dir, PathBuf::from("elsewhere"));
    assert_eq!(cfg.batch_size, 25);
    assert_eq!(cfg.names_path, PathBuf::from("names.json"));
    assert_eq!(cfg.base_url, "https://registry.npmjs.org/");
}

#[tokio::test]
async fn empty_names_list_still_replaces_old_reports() {
    let root = tempfile::tempdir().unwrap();
    let names_path = root.path().join("names.json");
    std::fs::write(&names_path, "[]").unwrap();
    let failed = root.path().join("failed_packages.json");
    let errors = root.path().join("error_messages.txt");
    std::fs::write(&failed, "[\n  \"left-over\"\n]").unwrap();
    std::fs::write(&errors, "[\n  \"left-over: HTTP error 500\"\n]").unwrap();

    let cfg = RegfetchConfig {
        base_url: "http://127.0.0.1:9/".to_string(),
        names_path,
        output_dir: root.path().join("out"),
        report_dir: root.path().to_path_buf(),
        ..RegfetchConfig::default()
    };
    run_fetch(&cfg, None).await.unwrap();

    assert_eq!(std::fs::read_to_string(&failed).unwrap(), "[]");
    assert_eq!(std::fs::read_to_string(&errors).unwrap(), "[]");
}
