//! Body normalization ahead of segmentation

/// Shortest run of underscores treated as a divider line
const DIVIDER_MIN_UNDERSCORES: usize = 8;

const HEADER_OPEN: &[u8] = b"on";
const HEADER_CLOSE: &[u8] = b"wrote:";

/// Convert a body into the canonical form the segmentation engine expects.
///
/// - CRLF line endings become `\n`
/// - reply headers that a mail client wrapped over several lines are joined
///   back into one line
/// - a divider line of underscores always has a blank line above it
#[must_use]
pub fn normalize(body: &str) -> String {
    let text = body.replace("\r\n", "\n");
    let text = collapse_multiline_headers(&text);
    separate_underscore_dividers(&text)
}

/// Join an `On ... wrote:` header that spans several lines into one line.
///
/// A candidate starts at a line start with `on` + whitespace (any case) and
/// runs to the first `wrote:` that ends a line. It is skipped when the text
/// after it holds another `on <something> wrote:`, so two separate headers
/// are never glued together.
fn collapse_multiline_headers(text: &str) -> String {
    let scan = HeaderScan::new(text);
    let bytes = text.as_bytes();

    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        if let Some(end) = scan.header_at(pos) {
            out.push_str(&text[copied..pos]);
            out.push_str(&text[pos..end].replace('\n', " "));
            copied = end;
            pos = end;
        }

        // Advance to the next line start
        match bytes[pos..].iter().position(|&b| b == b'\n') {
            Some(offset) => pos += offset + 1,
            None => break,
        }
    }

    out.push_str(&text[copied..]);
    out
}

/// Positions of the header keywords, computed once per body
struct HeaderScan {
    /// `on` + whitespace: (start, earliest start of a following `wrote:`)
    openers: Vec<(usize, usize)>,
    /// starts of every `wrote:` that ends a line
    closers_at_eol: Vec<usize>,
    /// start of the last `wrote:` in the body
    last_closer: Option<usize>,
}

impl HeaderScan {
    fn new(text: &str) -> Self {
        let bytes = text.as_bytes();
        let mut openers = Vec::new();
        let mut closers_at_eol = Vec::new();
        let mut last_closer = None;

        for i in 0..bytes.len() {
            if matches_ignore_case(bytes, i, HEADER_OPEN)
                && let Some(floor) = closer_floor(text, i)
            {
                openers.push((i, floor));
            }
            if matches_ignore_case(bytes, i, HEADER_CLOSE) {
                last_closer = Some(i);
                let end = i + HEADER_CLOSE.len();
                if end == bytes.len() || bytes[end] == b'\n' {
                    closers_at_eol.push(i);
                }
            }
        }

        Self {
            openers,
            closers_at_eol,
            last_closer,
        }
    }

    /// End of a collapsible header starting at `pos`, if there is one
    fn header_at(&self, pos: usize) -> Option<usize> {
        let idx = self.openers.partition_point(|&(start, _)| start < pos);
        let &(start, floor) = self.openers.get(idx)?;
        if start != pos || self.followed_by_another_header(pos) {
            return None;
        }

        let idx = self.closers_at_eol.partition_point(|&c| c < floor);
        let closer = self.closers_at_eol.get(idx)?;
        Some(closer + HEADER_CLOSE.len())
    }

    /// True when some `on` + whitespace after the one at `pos` still has a
    /// `wrote:` somewhere behind it
    fn followed_by_another_header(&self, pos: usize) -> bool {
        let Some(last_closer) = self.last_closer else {
            return false;
        };
        let idx = self
            .openers
            .partition_point(|&(start, _)| start < pos + HEADER_OPEN.len());
        self.openers
            .get(idx)
            .is_some_and(|&(_, floor)| floor <= last_closer)
    }
}

/// Earliest offset where `wrote:` may start for an opener at `start`.
///
/// `None` when `on` is not followed by whitespace. At least one character
/// must sit between the whitespace and `wrote:`; when the body ends first
/// the floor is the body length, which no closer can reach.
fn closer_floor(text: &str, start: usize) -> Option<usize> {
    let offset = start + HEADER_OPEN.len();
    let mut chars = text[offset..].char_indices();
    let (_, ws) = chars.next()?;
    if !ws.is_whitespace() {
        return None;
    }
    Some(chars.next().map_or(text.len(), |(at, c)| offset + at + c.len_utf8()))
}

fn matches_ignore_case(bytes: &[u8], at: usize, needle: &[u8]) -> bool {
    bytes
        .get(at..at + needle.len())
        .is_some_and(|window| window.eq_ignore_ascii_case(needle))
}

/// Put a blank line above any line that starts with a run of underscores
/// and directly follows a non-empty line.
fn separate_underscore_dividers(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous: Option<&str> = None;

    for line in text.split('\n') {
        if let Some(prev) = previous {
            out.push('\n');
            if !prev.is_empty() && is_divider(line) {
                out.push('\n');
            }
        }
        out.push_str(line);
        previous = Some(line);
    }

    out
}

fn is_divider(line: &str) -> bool {
    line.bytes().take_while(|&b| b == b'_').count() >= DIVIDER_MIN_UNDERSCORES
}
