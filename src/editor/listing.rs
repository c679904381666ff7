//! Numbered line output.

use std::io::{self, Write};

use super::buffer::TextBuffer;
use super::diagnostic::Diagnostic;
use super::lines::Line;

/// Write one line as `NNN] content`, always newline-terminated.
///
/// # Errors
///
/// Returns any error from `out`.
pub fn write_numbered<W: Write + ?Sized>(out: &mut W, number: usize, content: &[u8]) -> io::Result<()> {
    write!(out, "{number:03}] ")?;
    out.write_all(content)?;
    out.write_all(b"\n")
}

/// Write a scanned line with its number.
///
/// # Errors
///
/// Returns any error from `out`.
pub fn write_line<W: Write + ?Sized>(out: &mut W, bytes: &[u8], line: &Line) -> io::Result<()> {
    write_numbered(out, line.number, line.content(bytes))
}

impl TextBuffer {
    /// Print lines `first..=last` with their numbers.
    ///
    /// `last < first` prints only `first`. A range past the end prints
    /// nothing. Returns the warnings raised while scanning.
    ///
    /// # Errors
    ///
    /// Returns any error from `out`.
    pub fn print<W: Write + ?Sized>(
        &self,
        first: usize,
        last: usize,
        out: &mut W,
    ) -> io::Result<Vec<Diagnostic>> {
        let first = first.max(1);
        let last = last.max(first);
        let bytes = self.as_bytes();
        let mut diagnostics = Vec::new();
        for line in self.lines() {
            if line.number > last {
                break;
            }
            if let Some(diag) = line.diagnostic(self.line_size()) {
                diagnostics.push(diag);
            }
            if line.number >= first {
                write_line(out, bytes, &line)?;
            }
        }
        Ok(diagnostics)
    }

    /// Print the whole document with line numbers.
    ///
    /// # Errors
    ///
    /// Returns any error from `out`.
    pub fn print_all<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<Vec<Diagnostic>> {
        self.print(1, usize::MAX, out)
    }
}
