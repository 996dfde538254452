//! Line classification
//!
//! Stateless predicates over a single line of an email body. Lines are read
//! in their normal left-to-right order, even though the segmentation engine
//! visits them from the bottom of the body to the top.

use regex::Regex;

// Signature boundaries:
//   `--` or `__` after optional indentation ("-- ", "__________")
//   a leading hyphen glued to a word ("-Abhishek")
//   a device footer ("Sent from my iPhone", up to three words)
static SIGNATURE_REGEX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"^(?:\s*--|\s*__|-\w)|^Sent from my (?:\s*\w+){1,3}$").unwrap()
});

// "On <date>, <author> wrote:" on a single line
static QUOTE_HEADER_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"^On.*wrote:$").unwrap());

/// Marker that opens a quoted line
pub const QUOTE_MARKER: char = '>';

/// Check if a line belongs to a quoted block.
///
/// Classification is purely syntactic: any line whose first character is
/// `>` counts, including a sentence that merely happens to start with one.
/// Indented markers (`"  > text"`) do not count.
#[must_use]
pub fn is_quote_continuation(line: &str) -> bool {
    line.trim_end_matches('\n').starts_with(QUOTE_MARKER)
}

/// Check if a line marks the start of a signature block.
///
/// Matches `--` and `__` delimiters (with or without indentation or
/// trailing text), a hyphen directly followed by a word such as
/// `-Abhishek Kona`, and device footers of the form `Sent from my <1-3
/// words>`. A `--` that appears in the middle of a line does not count.
#[must_use]
pub fn is_signature_boundary(line: &str) -> bool {
    SIGNATURE_REGEX.is_match(line)
}

/// Check if a line is an `On ... wrote:` header introducing a quoted block.
///
/// Only meaningful for the line directly above a quoted region.
#[must_use]
pub fn is_quote_header(line: &str) -> bool {
    QUOTE_HEADER_REGEX.is_match(line)
}

/// Strip trailing whitespace from a line unless it is a signature boundary.
///
/// A `"-- "` delimiter keeps its trailing space so it can still be told
/// apart from ordinary text.
#[must_use]
pub fn strip_line(line: &str) -> &str {
    if is_signature_boundary(line) {
        line
    } else {
        line.trim_end()
    }
}
