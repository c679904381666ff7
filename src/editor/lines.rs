//! Line addressing over the raw byte buffer.
//!
//! Nothing is indexed: every lookup walks the content from offset 0,
//! splitting on `\n`. A run of `line_size` bytes without a newline is cut
//! there and reported as a [`Diagnostic`].

use std::ops::Range;

use super::buffer::TextBuffer;
use super::diagnostic::Diagnostic;

/// One line as found by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based line number.
    pub number: usize,
    /// Byte span in the buffer, including the terminating newline if any.
    pub span: Range<usize>,
    /// The scanner cut this line at `line_size` bytes.
    pub forced: bool,
}

impl Line {
    /// The line's bytes without its newline.
    pub fn content<'a>(&self, bytes: &'a [u8]) -> &'a [u8] {
        let raw = &bytes[self.span.clone()];
        raw.strip_suffix(b"\n").unwrap_or(raw)
    }

    /// Diagnostic for a forced boundary, if this line has one.
    pub const fn diagnostic(&self, limit: usize) -> Option<Diagnostic> {
        if self.forced {
            Some(Diagnostic::LineTooLong {
                line: self.number,
                limit,
            })
        } else {
            None
        }
    }
}

/// Sequential line scanner over `[0, len)`.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    bytes: &'a [u8],
    pos: usize,
    number: usize,
    line_size: usize,
}

impl<'a> Lines<'a> {
    pub const fn new(bytes: &'a [u8], line_size: usize) -> Self {
        Self {
            bytes,
            pos: 0,
            number: 0,
            line_size,
        }
    }
}

impl Iterator for Lines<'_> {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        if self.pos >= self.bytes.len() {
            return None;
        }
        let start = self.pos;
        let window_end = start.saturating_add(self.line_size).min(self.bytes.len());
        let (end, forced) = match self.bytes[start..window_end]
            .iter()
            .position(|&b| b == b'\n')
        {
            Some(idx) => (start + idx + 1, false),
            None => (window_end, window_end - start == self.line_size),
        };
        self.pos = end;
        self.number += 1;
        Some(Line {
            number: self.number,
            span: start..end,
            forced,
        })
    }
}

/// Byte span covering a line range, plus what the scan ran into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located {
    /// `start..end`; empty when the range starts past the last line.
    pub span: Range<usize>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Located {
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}

/// Map the 1-based range `first..=last` to byte offsets in `bytes`.
///
/// `last < first` is read as the single line `first`; `first == 0` is read
/// as 1. If the content ends before `last`, the span runs to the end. If it
/// ends before `first`, the span is empty at `bytes.len()`.
pub fn locate(bytes: &[u8], first: usize, last: usize, line_size: usize) -> Located {
    let first = first.max(1);
    let last = last.max(first);
    let mut diagnostics = Vec::new();
    let mut start = None;
    let mut end = bytes.len();

    for line in Lines::new(bytes, line_size) {
        if let Some(diag) = line.diagnostic(line_size) {
            diagnostics.push(diag);
        }
        if line.number == first {
            start = Some(line.span.start);
        }
        if line.number == last {
            end = line.span.end;
            break;
        }
    }

    let span = start.map_or(bytes.len()..bytes.len(), |start| start..end);
    Located { span, diagnostics }
}

impl TextBuffer {
    /// Scan the document line by line.
    pub fn lines(&self) -> Lines<'_> {
        Lines::new(self.as_bytes(), self.line_size())
    }

    /// Byte span of lines `first..=last` in the current content.
    pub fn locate(&self, first: usize, last: usize) -> Located {
        locate(self.as_bytes(), first, last, self.line_size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &[u8] = b"alpha\nbeta\ngamma\n";

    #[test]
    fn test_lines_split_on_newline() {
        let lines: Vec<_> = Lines::new(TEXT, 132).collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].number, 2);
        assert_eq!(lines[1].span, 6..11);
        assert_eq!(lines[1].content(TEXT), b"beta");
        assert!(lines.iter().all(|l| !l.forced));
    }

    #[test]
    fn test_lines_final_unterminated_line() {
        let lines: Vec<_> = Lines::new(b"one\ntwo", 132).collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].span, 4..7);
        assert_eq!(lines[1].content(b"one\ntwo"), b"two");
    }

    #[test]
    fn test_lines_force_boundary_at_line_size() {
        let text = b"abcdefgh\n";
        let lines: Vec<_> = Lines::new(text, 4).collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].forced);
        assert_eq!(lines[0].span, 0..4);
        assert!(lines[1].forced);
        assert_eq!(lines[2].span, 8..9);
        assert!(!lines[2].forced);
    }

    #[test]
    fn test_unbounded_line_size_never_forces() {
        let lines: Vec<_> = Lines::new(TEXT, usize::MAX).collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| !line.forced));
    }

    #[test]
    fn test_empty_content_has_no_lines() {
        assert_eq!(Lines::new(b"", 132).count(), 0);
    }

    #[test]
    fn test_locate_single_line() {
        let located = locate(TEXT, 2, 2, 132);
        assert_eq!(located.span, 6..11);
        assert!(located.diagnostics.is_empty());
    }

    #[test]
    fn test_locate_range() {
        assert_eq!(locate(TEXT, 1, 2, 132).span, 0..11);
        assert_eq!(locate(TEXT, 2, 3, 132).span, 6..17);
    }

    #[test]
    fn test_locate_reversed_range_is_first_line_only() {
        assert_eq!(locate(TEXT, 3, 1, 132).span, locate(TEXT, 3, 3, 132).span);
    }

    #[test]
    fn test_locate_clamps_end_to_content() {
        assert_eq!(locate(TEXT, 2, 99, 132).span, 6..17);
    }

    #[test]
    fn test_locate_past_last_line_is_empty_at_end() {
        let located = locate(TEXT, 4, 9, 132);
        assert!(located.is_empty());
        assert_eq!(located.span, 17..17);
    }

    #[test]
    fn test_locate_zero_reads_as_first_line() {
        assert_eq!(locate(TEXT, 0, 1, 132).span, 0..6);
    }

    #[test]
    fn test_locate_reports_forced_boundaries_it_crosses() {
        let text = b"abcdefgh\nx\n";
        let located = locate(text, 3, 4, 4);
        assert_eq!(located.span, 8..11);
        assert_eq!(
            located.diagnostics,
            vec![
                Diagnostic::LineTooLong { line: 1, limit: 4 },
                Diagnostic::LineTooLong { line: 2, limit: 4 },
            ]
        );
    }
}
