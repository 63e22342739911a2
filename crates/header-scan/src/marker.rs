// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Marker-line matching.

use regex::Regex;

/// Literal tag that follows the comment token on a marker line.
pub const SPDX_TAG: &str = "SPDX-License-Identifier: ";

/// One marker line found in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMatch {
    /// 1-indexed line number.
    pub line: usize,
    /// Identifier text captured after the tag, without the line terminator.
    pub identifier: String,
}

/// Compiled marker pattern for a single comment token.
#[derive(Debug, Clone)]
pub struct Marker {
    pattern: Regex,
    line_ending: Regex,
}

impl Marker {
    /// Build the marker `<token> SPDX-License-Identifier: (.*)`.
    ///
    /// The token is matched literally.
    pub fn new(comment_token: &str) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!(
            "{} {}(.*)",
            regex::escape(comment_token),
            regex::escape(SPDX_TAG)
        ))?;
        let line_ending = Regex::new(r"\r\n|\n|\r")?;
        Ok(Self {
            pattern,
            line_ending,
        })
    }

    /// Match the body of a single line, terminator already removed. The
    /// marker may appear anywhere on the line; the first occurrence wins and
    /// captures everything after it.
    pub fn match_line(&self, line: &str) -> Option<String> {
        self.pattern
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_owned())
    }

    /// Collect every marker line in `text`, in ascending line order.
    ///
    /// `\r\n`, `\n` and a bare `\r` all end a line. Text after the last
    /// terminator is not a complete line and never matches.
    pub fn find_all(&self, text: &str) -> Vec<HeaderMatch> {
        let mut found = Vec::new();
        let mut start = 0;
        for (idx, ending) in self.line_ending.find_iter(text).enumerate() {
            let line = &text[start..ending.start()];
            if let Some(identifier) = self.match_line(line) {
                found.push(HeaderMatch {
                    line: idx + 1,
                    identifier,
                });
            }
            start = ending.end();
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // `\x20` keeps these fixtures from tripping the workspace's own header scan.

    fn slashes() -> Marker {
        Marker::new("//").unwrap()
    }

    #[test]
    fn captures_identifier_after_tag() {
        let marker = slashes();
        assert_eq!(
            marker.match_line("//\x20SPDX-License-Identifier: MIT"),
            Some("MIT".to_owned())
        );
    }

    #[test]
    fn crlf_terminator_is_not_captured() {
        let found = slashes().find_all("//\x20SPDX-License-Identifier: MPL-2.0\r\npackage x\r\n");
        assert_eq!(
            found,
            vec![HeaderMatch {
                line: 1,
                identifier: "MPL-2.0".to_owned()
            }]
        );
    }

    #[test]
    fn line_numbers_are_one_indexed() {
        let text = "package main\n\n//\x20SPDX-License-Identifier: MIT\n";
        let found = slashes().find_all(text);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].line, 3);
    }

    #[test]
    fn unterminated_last_line_is_not_a_marker() {
        let marker = slashes();
        assert!(marker
            .find_all("package x\n//\x20SPDX-License-Identifier: Apache-2.0")
            .is_empty());
        assert!(marker.find_all("//\x20SPDX-License-Identifier: MIT").is_empty());
    }

    #[test]
    fn bare_carriage_return_ends_a_line() {
        let found = slashes().find_all("//\x20SPDX-License-Identifier: MIT\rpackage x\r");
        assert_eq!(
            found,
            vec![HeaderMatch {
                line: 1,
                identifier: "MIT".to_owned()
            }]
        );

        let found = slashes().find_all("package x\r\r//\x20SPDX-License-Identifier: MIT\r");
        assert_eq!(found[0].line, 3);
    }

    #[test]
    fn mixed_terminators_count_lines_once_each() {
        let text = "a\r\nb\nc\r//\x20SPDX-License-Identifier: MPL-2.0\r\n";
        let found = slashes().find_all(text);
        assert_eq!(found[0].line, 4);
        assert_eq!(found[0].identifier, "MPL-2.0");
    }

    #[test]
    fn trailing_text_is_part_of_identifier() {
        assert_eq!(
            slashes().match_line("//\x20SPDX-License-Identifier: MIT OR Apache-2.0 "),
            Some("MIT OR Apache-2.0 ".to_owned())
        );
    }

    #[test]
    fn marker_after_code_still_matches() {
        assert_eq!(
            slashes().match_line("x := 1 //\x20SPDX-License-Identifier: MIT"),
            Some("MIT".to_owned())
        );
    }

    #[test]
    fn other_comment_tokens_do_not_match() {
        let marker = slashes();
        assert!(marker.match_line("# SPDX-License-Identifier: MIT").is_none());
        assert!(marker.match_line("//SPDX-License-Identifier: MIT").is_none());
        assert!(marker.match_line("// SPDX-License-Identifier:MIT").is_none());
    }

    #[test]
    fn custom_token_is_matched_literally() {
        let marker = Marker::new("#").unwrap();
        assert_eq!(
            marker.match_line("# SPDX-License-Identifier: MIT"),
            Some("MIT".to_owned())
        );

        let marker = Marker::new("/*").unwrap();
        assert_eq!(
            marker.match_line("/* SPDX-License-Identifier: MIT */"),
            Some("MIT */".to_owned())
        );
    }
}
