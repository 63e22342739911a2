// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! SPDX license-header scanner.
//!
//! `header-scan` walks a source tree, finds every file with the configured
//! extension, and checks that each one carries exactly one marker line of the
//! shape
//!
//! ```text
//! <comment-token> SPDX-License-Identifier: <identifier>
//! ```
//!
//! whose identifier is on the [`AllowList`]. Each file lands in one of four
//! [`FileOutcome`]s; anything other than [`FileOutcome::Valid`] becomes one or
//! more [`Violation`]s in the returned [`ScanReport`].
//!
//! # Invariants
//!
//! - The scan is sequential; files are classified in discovery order.
//! - Duplicate markers fail on duplication alone. Their identifiers are never
//!   checked against the allow-list.
//! - Reported paths always use `/` as the separator.
//! - A file that cannot be read aborts the scan with [`ScanError::Read`]; no
//!   partial report is produced.
#![forbid(unsafe_code)]

mod config;
mod discover;
mod error;
mod license;
mod marker;
mod scan;

pub use config::{ConfigError, ScanConfig, DEFAULT_COMMENT_TOKEN, DEFAULT_EXTENSION};
pub use discover::{display_path, normalize_separators, ScanTarget};
pub use error::ScanError;
pub use license::{AllowList, DEFAULT_LICENSES};
pub use marker::{HeaderMatch, Marker, SPDX_TAG};
pub use scan::{FileOutcome, HeaderScanner, ScanReport, Violation, ViolationKind};
