//! Range deletion and interactive insertion.

use std::collections::VecDeque;
use std::io;

use super::buffer::TextBuffer;
use super::diagnostic::Diagnostic;
use super::error::EditorError;

/// Supplies lines typed by the user during an insert.
///
/// `Ok(None)` means the input is exhausted, which ends the insert the same
/// way the stop line does.
pub trait LineSource {
    /// Read the next line, including its trailing newline if one was typed.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the underlying reader.
    fn next_line(&mut self) -> io::Result<Option<Vec<u8>>>;
}

impl LineSource for VecDeque<Vec<u8>> {
    fn next_line(&mut self) -> io::Result<Option<Vec<u8>>> {
        Ok(self.pop_front())
    }
}

/// A line whose only content is `.` ends an insert.
pub fn is_stop_line(line: &[u8]) -> bool {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    line == b"."
}

/// What an insert or append did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsertReport {
    /// Lines written into the buffer.
    pub lines: usize,
    /// Bytes written into the buffer.
    pub bytes: usize,
    /// Entered lines longer than the configured line size.
    pub diagnostics: Vec<Diagnostic>,
}

/// What a delete did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteReport {
    /// Bytes removed; zero when the range started past the last line.
    pub bytes: usize,
    pub diagnostics: Vec<Diagnostic>,
}

enum InsertState {
    Prompting,
    Inserting(Vec<u8>),
    Done,
}

impl TextBuffer {
    /// Delete lines `first..=last`.
    ///
    /// A range past the end of the document removes nothing.
    pub fn delete(&mut self, first: usize, last: usize) -> DeleteReport {
        let located = self.locate(first, last);
        let span = located.span;
        self.remove_span(span.start, span.end);
        tracing::trace!(first, last, removed = span.len(), "lines deleted");
        DeleteReport {
            bytes: span.len(),
            diagnostics: located.diagnostics,
        }
    }

    /// Insert lines from `source` before line `first`, in entry order, until
    /// the stop line or the end of input.
    ///
    /// `last` is accepted for symmetry with the other range operations; only
    /// `first` picks the insertion point. Past the last line, lines are
    /// appended.
    ///
    /// # Errors
    ///
    /// Returns a fatal error if the buffer cannot grow, or an input error if
    /// reading from `source` fails. Lines inserted before the error stay.
    pub fn insert<S: LineSource + ?Sized>(
        &mut self,
        first: usize,
        last: usize,
        source: &mut S,
    ) -> Result<InsertReport, EditorError> {
        tracing::trace!(first, last, "insert started");
        let located = self.locate(first, first);
        let mut report = self.insert_from(located.span.start, source)?;
        let mut diagnostics = located.diagnostics;
        diagnostics.append(&mut report.diagnostics);
        report.diagnostics = diagnostics;
        Ok(report)
    }

    /// Append lines from `source` at the end of the document.
    ///
    /// # Errors
    ///
    /// Same as [`Self::insert`].
    pub fn append<S: LineSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<InsertReport, EditorError> {
        self.insert_from(self.len(), source)
    }

    fn insert_from<S: LineSource + ?Sized>(
        &mut self,
        mut at: usize,
        source: &mut S,
    ) -> Result<InsertReport, EditorError> {
        let limit = self.line_size();
        let mut report = InsertReport::default();
        let mut state = InsertState::Prompting;
        loop {
            state = match state {
                InsertState::Prompting => match source.next_line()? {
                    Some(line) if !is_stop_line(&line) => InsertState::Inserting(line),
                    _ => InsertState::Done,
                },
                InsertState::Inserting(mut line) => {
                    if line.last() != Some(&b'\n') {
                        line.push(b'\n');
                    }
                    if line.len() > limit {
                        report.diagnostics.push(Diagnostic::LineTooLong {
                            line: self.line_number_at(at),
                            limit,
                        });
                    }
                    self.insert_at(at, &line)?;
                    at += line.len();
                    report.lines += 1;
                    report.bytes += line.len();
                    InsertState::Prompting
                }
                InsertState::Done => break,
            };
        }
        tracing::trace!(lines = report.lines, bytes = report.bytes, "lines inserted");
        Ok(report)
    }

    /// 1-based number of the line starting at byte `offset`.
    fn line_number_at(&self, offset: usize) -> usize {
        self.lines()
            .take_while(|line| line.span.start < offset)
            .count()
            + 1
    }
}
