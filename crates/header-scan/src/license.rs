// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Accepted license identifiers.

/// Identifiers accepted when no config overrides them.
pub const DEFAULT_LICENSES: [&str; 4] = ["GPL-3.0-only", "MIT", "MPL-2.0", "Apache-2.0"];

/// Exact-match set of accepted identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    ids: Vec<String>,
}

impl AllowList {
    /// Build an allow-list from identifiers, dropping repeats.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for id in ids {
            let id = id.into();
            if !out.contains(&id) {
                out.push(id);
            }
        }
        Self { ids: out }
    }

    /// Whether `identifier` is accepted. No trimming or case folding.
    pub fn contains(&self, identifier: &str) -> bool {
        self.ids.iter().any(|id| id == identifier)
    }

    /// Accepted identifiers, in insertion order.
    pub fn identifiers(&self) -> &[String] {
        &self.ids
    }

    /// True when nothing is accepted.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl Default for AllowList {
    fn default() -> Self {
        Self::new(DEFAULT_LICENSES)
    }
}
