//! Core types for parsed reply bodies

use crate::error::{ParseError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed email body, split into fragments in top-to-bottom order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Email {
    fragments: Vec<Fragment>,
}

impl Email {
    pub(crate) const fn new(fragments: Vec<Fragment>) -> Self {
        Self { fragments }
    }

    /// All fragments, hidden ones included
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    #[must_use]
    pub fn into_fragments(self) -> Vec<Fragment> {
        self.fragments
    }

    /// Fragments a reader should see
    pub fn visible_fragments(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments.iter().filter(|f| !f.hidden)
    }

    /// Fragments hidden from a reader (trailing quotes and signatures)
    pub fn hidden_fragments(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments.iter().filter(|f| f.hidden)
    }

    /// Text of the visible fragments joined with newlines.
    ///
    /// Trailing whitespace is trimmed from the combined text only, never
    /// from individual fragments.
    #[must_use]
    pub fn visible_text(&self) -> String {
        join_content(self.visible_fragments())
            .trim_end()
            .to_string()
    }

    /// Text of every quoted fragment joined with newlines, hidden or not
    #[must_use]
    pub fn quoted_text(&self) -> String {
        join_content(self.fragments.iter().filter(|f| f.quoted))
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.fragments.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

fn join_content<'a>(fragments: impl Iterator<Item = &'a Fragment>) -> String {
    fragments
        .map(|f| f.content.as_deref().unwrap_or_default())
        .collect::<Vec<_>>()
        .join("\n")
}

/// A run of lines sharing one classification.
///
/// While open, a fragment buffers its lines from the bottom of the body
/// upwards. Closing it turns the buffer into the final text and fixes the
/// signature and hidden flags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Fragment {
    quoted: bool,
    signature: bool,
    hidden: bool,
    #[serde(skip)]
    lines: Vec<String>,
    content: Option<String>,
}

impl Fragment {
    /// Open a fragment seeded with its first (lowest) line
    pub(crate) fn open(quoted: bool, first_line: &str) -> Self {
        Self {
            quoted,
            signature: false,
            hidden: false,
            lines: vec![first_line.to_string()],
            content: None,
        }
    }

    pub(crate) fn push_line(&mut self, line: &str) {
        debug_assert!(self.content.is_none(), "line pushed to a closed fragment");
        self.lines.push(line.to_string());
    }

    /// Most recently buffered line, i.e. the highest one seen so far
    pub(crate) fn last_line(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    pub(crate) const fn mark_signature(&mut self) {
        self.signature = true;
    }

    pub(crate) const fn mark_hidden(&mut self) {
        self.hidden = true;
    }

    /// Turn the line buffer into the final text, restoring reading order
    pub(crate) fn finish(&mut self) {
        let mut lines = std::mem::take(&mut self.lines);
        lines.reverse();
        self.content = Some(lines.join("\n"));
    }

    #[must_use]
    pub const fn is_quoted(&self) -> bool {
        self.quoted
    }

    #[must_use]
    pub const fn is_signature(&self) -> bool {
        self.signature
    }

    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.content.is_some()
    }

    /// Final text of the fragment
    pub fn text(&self) -> Result<&str> {
        self.content.as_deref().ok_or(ParseError::NotFinalized)
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.content.as_deref().unwrap_or_default())
    }
}
