use crate::error::SubstError;
use regex::{Captures, Regex};
use std::str::FromStr;

/// A compiled search pattern.
///
/// Thin seam over the host regex engine so the substitution driver stays
/// engine-agnostic: compilation from a string, and leftmost capture search
/// at or after a byte offset. Flags (case-insensitivity, multi-line, ...)
/// are caller-controlled through the `regex` crate's own syntax or a
/// precompiled [`Regex`] passed via `From`; nothing is reinterpreted here.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compile a pattern string with host-default flags.
    ///
    /// Malformed syntax is fatal and propagates as [`SubstError::Pattern`].
    pub fn new(pattern: &str) -> Result<Self, SubstError> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    /// Number of capture groups the pattern declares (excluding the
    /// implicit whole-match group).
    pub fn group_count(&self) -> usize {
        self.regex.captures_len() - 1
    }

    /// Check whether the pattern matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Leftmost match at or after `start`, with capture spans.
    ///
    /// Returns `None` when no further occurrence exists or `start` is past
    /// the end of `text`.
    pub(crate) fn captures_from<'t>(&self, text: &'t str, start: usize) -> Option<Captures<'t>> {
        if start > text.len() {
            return None;
        }
        self.regex.captures_at(text, start)
    }

    /// Access the underlying engine object.
    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Self { regex }
    }
}

impl FromStr for Pattern {
    type Err = SubstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::new(s)
    }
}
