//! update-settings — entry point.
//!
//! Provisions a Redmine instance for a deployment hostname by rewriting the
//! `default` values in `config/settings.yml`.  Run it from the Redmine root
//! once per deployment, before Redmine starts.
//!
//! # Usage
//!
//! ```text
//! update-settings --hostname <HOSTNAME> [--settings <PATH>]
//!
//! Options:
//!   --hostname <HOSTNAME>  Public hostname of the deployment (required)
//!   --settings <PATH>      Settings file to patch [default: config/settings.yml]
//! ```
//!
//! # Exit status
//!
//! | Status | Meaning                                               |
//! |--------|-------------------------------------------------------|
//! | `0`    | File rewritten; one confirmation line on stdout       |
//! | `1`    | Load, schema or write failure; file left as it was*   |
//! | `2`    | Bad or missing arguments; file not touched            |
//!
//! \* A write failure part-way through can leave the file truncated.
//!
//! Logs go to stderr and are filtered by `RUST_LOG` (default `info`).

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use settings_core::Hostname;
use update_settings::application::update_settings::{
    UpdateReport, UpdateRequest, UpdateSettingsUseCase,
};
use update_settings::infrastructure::storage::{YamlSettingsFile, DEFAULT_SETTINGS_PATH};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Apply deployment defaults to a Redmine settings file.
#[derive(Debug, Parser)]
#[command(
    name = "update-settings",
    about = "Apply deployment defaults to a Redmine config/settings.yml",
    version
)]
struct Cli {
    /// Public hostname of the deployment.
    ///
    /// Used for `host_name` (as HOSTNAME:9441), `email_domains_allowed` and
    /// `mail_from` (as redmine@HOSTNAME).
    #[arg(long, value_name = "HOSTNAME")]
    hostname: Hostname,

    /// Settings file to patch in place.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_SETTINGS_PATH)]
    settings: PathBuf,
}

impl Cli {
    fn into_request(self) -> UpdateRequest {
        UpdateRequest {
            hostname: self.hostname,
            settings_path: self.settings,
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    // stdout is reserved for the confirmation line.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let request = Cli::parse().into_request();
    let report = run(&request)?;

    println!("Updated {} successfully.", report.path.display());
    Ok(())
}

fn run(request: &UpdateRequest) -> anyhow::Result<UpdateReport> {
    let store = YamlSettingsFile::new(&request.settings_path);
    let report = UpdateSettingsUseCase::new(store)
        .execute(&request.hostname)
        .with_context(|| format!("failed to update {}", request.settings_path.display()))?;
    info!(
        applied = report.applied,
        changed = report.changed,
        "provisioning defaults applied"
    );
    Ok(report)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
