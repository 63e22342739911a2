// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `scan-license-header`: checks every source file under the current
//! directory for exactly one allow-listed SPDX marker line.
//!
//! # Usage
//! ```text
//! scan-license-header [--root DIR] [--config FILE] [--extension EXT]
//! ```
//!
//! Diagnostics go to stdout, one line per violation. Exit code is `0` when
//! every file passes and `1` when any file is missing a header, has more than
//! one, or names a license outside the allow-list. A file that cannot be read
//! also exits `1`, with the error on stderr and nothing on stdout. Set
//! `RUST_LOG=debug` for per-file tracing on stderr.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use header_scan::{HeaderScanner, ScanConfig};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "scan-license-header",
    version,
    about = "Check source files for a single allow-listed SPDX license header"
)]
struct Args {
    /// Directory to scan.
    #[arg(long, default_value = ".")]
    root: PathBuf,
    /// JSON config overriding extension, comment token, or allowed licenses.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Source-file extension to scan (without the dot); overrides the config.
    #[arg(long)]
    extension: Option<String>,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let mut config = match &args.config {
        Some(path) => ScanConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ScanConfig::default(),
    };
    if let Some(extension) = args.extension {
        config.extension = extension;
    }
    debug!(?config, root = %args.root.display(), "starting scan");

    let scanner = HeaderScanner::new(config).context("invalid scan configuration")?;
    let report = scanner.scan(&args.root)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report
        .write_to(&mut out)
        .context("failed to write diagnostics")?;

    Ok(ExitCode::from(report.exit_status()))
}
