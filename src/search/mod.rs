//! Literal substring search over buffer lines.
//!
//! No regular expressions and no case folding: a line matches when its
//! bytes (without the newline) contain the needle. The empty needle matches
//! every line.

use std::io::{self, Write};

use crate::editor::{Diagnostic, TextBuffer, write_line};

/// Outcome of a search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchReport {
    /// Numbers of the matching lines, in order.
    pub matches: Vec<usize>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Whether `haystack` contains `needle` as a contiguous byte run.
pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|w| w == needle)
}

/// Print every line of `buffer` containing `needle`, numbered like a listing.
///
/// # Errors
///
/// Returns any error from `out`.
pub fn search<W: Write + ?Sized>(
    buffer: &TextBuffer,
    needle: &[u8],
    out: &mut W,
) -> io::Result<SearchReport> {
    let bytes = buffer.as_bytes();
    let mut report = SearchReport::default();
    for line in buffer.lines() {
        if let Some(diag) = line.diagnostic(buffer.line_size()) {
            report.diagnostics.push(diag);
        }
        if contains(line.content(bytes), needle) {
            write_line(out, bytes, &line)?;
            report.matches.push(line.number);
        }
    }
    Ok(report)
}
