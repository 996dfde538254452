//! Reply segmentation
//!
//! The body is read from the last line to the first. Walking upwards means a
//! quoted block is always met before the `On ... wrote:` line that
//! introduces it, and a signature delimiter before the blank line above it,
//! so both can be settled without looking back.

use crate::normalize::normalize;
use crate::patterns::{is_quote_continuation, is_quote_header, is_signature_boundary, strip_line};
use crate::types::{Email, Fragment};
use tracing::{debug, trace};

/// Split an email body into quoted, signature and original fragments
#[must_use]
pub fn parse(body: &str) -> Email {
    let text = normalize(body);

    let mut scanner = Scanner::default();
    for line in text.split('\n').rev() {
        scanner.scan_line(line);
    }
    let email = scanner.finish();

    debug!(
        "Parsed reply body: {} fragments, {} visible",
        email.len(),
        email.visible_fragments().count()
    );

    email
}

/// Text of the visible fragments of an email body
#[must_use]
pub fn extract_visible_text(body: &str) -> String {
    parse(body).visible_text()
}

/// Scan state for one parse
#[derive(Default)]
struct Scanner {
    /// Fragment currently collecting lines
    fragment: Option<Fragment>,
    /// Closed fragments, bottom of the body first
    fragments: Vec<Fragment>,
    /// Set once the lowest piece of original content has been closed.
    /// From then on nothing is hidden.
    found_visible: bool,
}

impl Scanner {
    fn scan_line(&mut self, raw: &str) {
        let line = strip_line(raw);
        let quoted = is_quote_continuation(line);

        // A blank line above a delimiter closes the signature below it
        if line.is_empty()
            && self
                .fragment
                .as_ref()
                .and_then(Fragment::last_line)
                .is_some_and(is_signature_boundary)
        {
            if let Some(fragment) = self.fragment.as_mut() {
                fragment.mark_signature();
            }
            self.finish_fragment();
        }

        // Header lines and blank lines above a quote stay with the quote
        let extends = self.fragment.as_ref().is_some_and(|fragment| {
            fragment.is_quoted() == quoted
                || (fragment.is_quoted() && (line.is_empty() || is_quote_header(line)))
        });

        if extends {
            if let Some(fragment) = self.fragment.as_mut() {
                fragment.push_line(line);
            }
        } else {
            self.finish_fragment();
            self.fragment = Some(Fragment::open(quoted, line));
        }
    }

    /// Close the open fragment and decide whether it is hidden.
    ///
    /// Fragments are closed bottom-up. Until the first one with real content
    /// shows up, quotes, signatures and blank fragments are hidden.
    fn finish_fragment(&mut self) {
        let Some(mut fragment) = self.fragment.take() else {
            return;
        };
        fragment.finish();

        if !self.found_visible {
            let blank = fragment.text().unwrap_or_default().trim().is_empty();
            if fragment.is_quoted() || fragment.is_signature() || blank {
                fragment.mark_hidden();
            } else {
                self.found_visible = true;
            }
        }

        trace!(
            quoted = fragment.is_quoted(),
            signature = fragment.is_signature(),
            hidden = fragment.is_hidden(),
            "Closed fragment"
        );

        self.fragments.push(fragment);
    }

    fn finish(mut self) -> Email {
        self.finish_fragment();
        self.fragments.reverse();
        Email::new(self.fragments)
    }
}
