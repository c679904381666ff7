use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::app::App;
use crate::app::event_loop::Io;
use crate::command::{Command, RangeOp};
use crate::editor::{Diagnostic, EditorError, InsertReport};

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Write each warning to the error stream.
pub(super) fn report_diagnostics<E: Write>(errors: &mut E, diagnostics: &[Diagnostic]) -> io::Result<()> {
    for diagnostic in diagnostics {
        tracing::debug!(line = diagnostic.line(), "line length warning");
        writeln!(errors, "{diagnostic}")?;
    }
    Ok(())
}

impl App {
    /// Apply one command.
    pub(super) fn update<R: BufRead, W: Write, E: Write>(
        &mut self,
        command: Command,
        io: &mut Io<R, W, E>,
    ) -> Result<Flow> {
        match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::New => {
                self.buffer.clear();
                writeln!(io.output, "Buffer Cleared")?;
            }
            Command::Append => {
                self.show_insert_hint(&mut io.output)?;
                let result = self.buffer.append(&mut io.prompted());
                self.finish_insert(result, io)?;
            }
            Command::Write(path) => self.write_file(&path, io)?,
            Command::Load(path) => self.load_file(&path, io)?,
            Command::PrintAll => {
                let diagnostics = self.buffer.print_all(&mut io.output)?;
                report_diagnostics(&mut io.errors, &diagnostics)?;
            }
            Command::Search(needle) => {
                let report = crate::search::search(&self.buffer, &needle, &mut io.output)?;
                report_diagnostics(&mut io.errors, &report.diagnostics)?;
            }
            Command::Stats => super::help::write_stats(&mut io.output, &self.buffer)?,
            Command::Range(range, op) => match op {
                RangeOp::Print => {
                    let diagnostics =
                        self.buffer
                            .print(range.first(), range.last(), &mut io.output)?;
                    report_diagnostics(&mut io.errors, &diagnostics)?;
                }
                RangeOp::Delete => {
                    let report = self.buffer.delete(range.first(), range.last());
                    report_diagnostics(&mut io.errors, &report.diagnostics)?;
                }
                RangeOp::Insert => {
                    self.show_insert_hint(&mut io.output)?;
                    let result =
                        self.buffer
                            .insert(range.first(), range.last(), &mut io.prompted());
                    self.finish_insert(result, io)?;
                }
            },
            Command::Help => super::help::write_help(&mut io.output)?,
        }
        Ok(Flow::Continue)
    }

    fn show_insert_hint<W: Write>(&mut self, output: &mut W) -> io::Result<()> {
        if !self.quiet && !self.insert_hint_shown {
            writeln!(output, "Type . on an empty line to exit insert mode")?;
        }
        self.insert_hint_shown = true;
        Ok(())
    }

    fn finish_insert<R, W, E: Write>(
        &self,
        result: Result<InsertReport, EditorError>,
        io: &mut Io<R, W, E>,
    ) -> Result<()> {
        match result {
            Ok(report) => {
                report_diagnostics(&mut io.errors, &report.diagnostics)?;
                crate::perf::log_event(
                    "insert",
                    format!("{} lines, {} bytes, len {}", report.lines, report.bytes, self.buffer.len()),
                );
            }
            Err(err) if !err.is_fatal() => {
                writeln!(io.errors, "{err}")?;
            }
            Err(err) => return Err(err.into()),
        }
        Ok(())
    }
}
