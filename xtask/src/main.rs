// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Repository maintenance tasks.
//!
//! Single entrypoint for repo automation via `cargo xtask …`.
//!
//! Invariants:
//! - This is *not* production runtime code.
//! - `license-headers` holds this workspace to the same rule it ships: one
//!   allow-listed SPDX line per source file.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use header_scan::{HeaderScanner, ScanConfig, ScanReport};

/// Workspace trees holding first-party sources.
const SOURCE_DIRS: [&str; 2] = ["crates", "xtask"];

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Repo maintenance tasks (cargo xtask …)",
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that every workspace source file carries one allowed SPDX header.
    LicenseHeaders(LicenseHeadersArgs),
}

#[derive(Args)]
struct LicenseHeadersArgs {
    /// Directories to scan (repeatable). Defaults to the workspace's
    /// `crates/` and `xtask/` trees.
    #[arg(long)]
    root: Vec<PathBuf>,

    /// Source-file extension to scan (without the dot).
    #[arg(long, default_value = "rs")]
    extension: String,

    /// JSON config for comment token and allowed licenses.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::LicenseHeaders(args) => run_license_headers(args),
    }
}

fn run_license_headers(args: LicenseHeadersArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => ScanConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ScanConfig::default(),
    };
    config.extension = args.extension;

    let roots: Vec<PathBuf> = if args.root.is_empty() {
        let base = workspace_root()?;
        SOURCE_DIRS.iter().map(|dir| base.join(dir)).collect()
    } else {
        args.root
    };

    let scanner = HeaderScanner::new(config).context("invalid scan configuration")?;
    let mut report = ScanReport::default();
    for root in &roots {
        let partial = scanner
            .scan(root)
            .with_context(|| format!("license header scan of {} failed", root.display()))?;
        report.files_scanned += partial.files_scanned;
        report.violations.extend(partial.violations);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report.write_to(&mut out)?;

    if !report.is_clean() {
        bail!(
            "{} license header violation(s) across {} file(s)",
            report.violations.len(),
            report.files_scanned
        );
    }

    Ok(())
}

/// `xtask` lives one level below the workspace root.
fn workspace_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask manifest dir has no parent")
}
