//! Line splitting
//!
//! Splits a source snapshot into lines while keeping the absolute byte offsets the tree
//! needs. Every byte of the source belongs to exactly one line: the span `start..next` of
//! consecutive lines tiles the whole document.

/// One line of the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// Absolute offset of the first byte of the line (indentation included)
    pub start: usize,
    /// Absolute offset just past the line content, excluding `\n` and a preceding `\r`
    pub end: usize,
    /// Absolute offset where the following line starts, or the document length
    pub next: usize,
    /// Line content without its terminator
    pub text: &'a str,
}

/// Split `source` into lines.
///
/// A document ending with a newline yields a final empty line; the structure parser keeps it
/// as a trailing blank node so that the last open scope reaches the end of the input. The
/// empty document has no lines at all.
pub fn split_lines(source: &str) -> Vec<SourceLine<'_>> {
    let mut lines = Vec::new();
    if source.is_empty() {
        return lines;
    }

    let mut start = 0;
    for piece in source.split('\n') {
        let raw_end = start + piece.len();
        let next = if raw_end < source.len() {
            raw_end + 1
        } else {
            raw_end
        };
        let text = piece.strip_suffix('\r').unwrap_or(piece);
        lines.push(SourceLine {
            start,
            end: start + text.len(),
            next,
            text,
        });
        start = next;
    }

    lines
}
