// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fatal scan errors.
use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop a scan. Violations are not errors; they live in the report.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The scan root itself could not be walked.
    #[error("failed to walk source tree: {0}")]
    Walk(#[from] walkdir::Error),
    /// A candidate file could not be read as UTF-8 text.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
