// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Candidate-file discovery.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::{DirEntry, WalkDir};

use crate::error::ScanError;

/// Files selected for a scan, in file-system enumeration order.
#[derive(Debug, Clone, Default)]
pub struct ScanTarget {
    files: Vec<PathBuf>,
}

impl ScanTarget {
    /// Recursively collect regular files under `root` whose extension is
    /// `extension`. Hidden entries below the root are skipped. Symlinked
    /// directories are not descended into; a symlink to a regular file counts
    /// as that file.
    ///
    /// Only a root that cannot be walked is an error. Subdirectories that
    /// cannot be listed are logged and skipped.
    pub fn discover(root: &Path, extension: &str) -> Result<Self, ScanError> {
        let wanted = OsStr::new(extension);
        let mut files = Vec::new();
        let walker = WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() > 0 => {
                    warn!(path = ?err.path(), %err, "skipping unreadable directory");
                    continue;
                }
                Err(err) => return Err(err.into()),
            };
            if is_candidate_file(&entry) && entry.path().extension() == Some(wanted) {
                files.push(entry.into_path());
            }
        }
        Ok(Self { files })
    }

    /// Discovered paths.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Number of discovered files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// True when nothing matched.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

fn is_candidate_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|s| s.starts_with('.'))
}

/// Path as it appears in diagnostics: a leading `./` is dropped and every
/// separator is `/`.
pub fn display_path(path: &Path) -> String {
    let relative = path.strip_prefix(".").unwrap_or(path);
    normalize_separators(&relative.to_string_lossy())
}

/// Replace backslash separators with forward slashes.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}
