// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Per-file classification and the whole-tree scan.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, info, instrument};

use crate::config::{ConfigError, ScanConfig};
use crate::discover::{display_path, ScanTarget};
use crate::error::ScanError;
use crate::license::AllowList;
use crate::marker::{HeaderMatch, Marker};

/// Classification of a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// No marker line.
    Missing,
    /// Exactly one marker with an accepted identifier.
    Valid(HeaderMatch),
    /// Exactly one marker with an identifier outside the allow-list.
    Invalid(HeaderMatch),
    /// Two or more marker lines, in ascending line order.
    Multiple(Vec<HeaderMatch>),
}

impl FileOutcome {
    /// Classify the matches found in one file.
    pub fn classify(mut matches: Vec<HeaderMatch>, allowed: &AllowList) -> Self {
        match matches.len() {
            0 => Self::Missing,
            1 => {
                let only = matches.remove(0);
                if allowed.contains(&only.identifier) {
                    Self::Valid(only)
                } else {
                    Self::Invalid(only)
                }
            }
            _ => Self::Multiple(matches),
        }
    }

    /// Violations this outcome contributes for `path`.
    pub fn into_violations(self, path: &str) -> Vec<Violation> {
        let at = |kind| Violation {
            path: path.to_owned(),
            kind,
        };
        match self {
            Self::Valid(_) => Vec::new(),
            Self::Missing => vec![at(ViolationKind::Missing)],
            Self::Invalid(m) => vec![at(ViolationKind::InvalidLicense(m))],
            Self::Multiple(all) => all
                .into_iter()
                .map(|m| at(ViolationKind::Duplicate(m)))
                .collect(),
        }
    }
}

/// What is wrong with a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// No marker line at all.
    Missing,
    /// One of several marker lines.
    Duplicate(HeaderMatch),
    /// The single marker names an identifier outside the allow-list.
    InvalidLicense(HeaderMatch),
}

/// One diagnostic line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Forward-slash path of the offending file.
    pub path: String,
    /// Kind and location.
    pub kind: ViolationKind,
}

impl Violation {
    /// Line the diagnostic points at. Missing headers point at line 1.
    pub fn line(&self) -> usize {
        match &self.kind {
            ViolationKind::Missing => 1,
            ViolationKind::Duplicate(m) | ViolationKind::InvalidLicense(m) => m.line,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} ", self.path, self.line())?;
        match &self.kind {
            ViolationKind::Missing => f.write_str("missing license header"),
            ViolationKind::Duplicate(m) => {
                write!(f, "found multiple license headers: {}", m.identifier)
            }
            ViolationKind::InvalidLicense(m) => write!(f, "invalid license: {}", m.identifier),
        }
    }
}

/// Result of a completed scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Number of files classified.
    pub files_scanned: usize,
    /// Violations in discovery order.
    pub violations: Vec<Violation>,
}

impl ScanReport {
    /// True when no file produced a violation.
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Process exit status: `0` when clean, `1` otherwise.
    pub fn exit_status(&self) -> u8 {
        u8::from(!self.is_clean())
    }

    /// Write one line per violation.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for violation in &self.violations {
            writeln!(out, "{violation}")?;
        }
        out.flush()
    }
}

/// Scanner for one configuration.
#[derive(Debug, Clone)]
pub struct HeaderScanner {
    extension: String,
    marker: Marker,
    allowed: AllowList,
}

impl HeaderScanner {
    /// Validate `config` and compile its marker.
    pub fn new(config: ScanConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let marker = Marker::new(&config.comment_token)?;
        let allowed = config.allow_list();
        Ok(Self {
            extension: config.extension,
            marker,
            allowed,
        })
    }

    /// Classify already-loaded file text.
    pub fn check_source(&self, text: &str) -> FileOutcome {
        FileOutcome::classify(self.marker.find_all(text), &self.allowed)
    }

    /// Scan every candidate file under `root`.
    ///
    /// The first unreadable file aborts the scan.
    #[instrument(skip(self), fields(extension = %self.extension))]
    pub fn scan(&self, root: &Path) -> Result<ScanReport, ScanError> {
        let target = ScanTarget::discover(root, &self.extension)?;
        debug!(files = target.len(), "discovered candidate files");

        let mut report = ScanReport::default();
        for path in target.files() {
            let text = fs::read_to_string(path).map_err(|source| ScanError::Read {
                path: path.clone(),
                source,
            })?;
            let shown = display_path(path);
            let outcome = self.check_source(&text);
            debug!(file = %shown, ?outcome, "classified");
            report.violations.extend(outcome.into_violations(&shown));
            report.files_scanned += 1;
        }

        info!(
            files = report.files_scanned,
            violations = report.violations.len(),
            "license header scan finished"
        );
        Ok(report)
    }
}
