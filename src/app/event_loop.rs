use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use crate::app::{App, Flow};
use crate::command;
use crate::editor::LineSource;

/// The three streams a session talks to.
pub(super) struct Io<R, W, E> {
    pub(super) input: R,
    pub(super) output: W,
    pub(super) errors: E,
}

impl<R: BufRead, W: Write, E: Write> Io<R, W, E> {
    pub(super) fn prompted(&mut self) -> PromptedLines<'_, R, W> {
        PromptedLines::new(&mut self.input, &mut self.output)
    }
}

/// Reads text lines for insert/append, showing `$ ` before each one.
pub struct PromptedLines<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> PromptedLines<'a, R, W> {
    pub const fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> LineSource for PromptedLines<'_, R, W> {
    fn next_line(&mut self) -> io::Result<Option<Vec<u8>>> {
        write!(self.output, "$ ")?;
        self.output.flush()?;
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line))
    }
}

impl App {
    /// Run the command loop until `q` or the end of `input`.
    ///
    /// Editor output goes to `output`; warnings and recoverable errors go
    /// to `errors`.
    ///
    /// # Errors
    ///
    /// Returns an error if a stream fails or the buffer cannot grow. The
    /// latter is fatal: the caller should exit with a non-zero status.
    pub fn run<R: BufRead, W: Write, E: Write>(
        &mut self,
        input: R,
        output: W,
        errors: E,
    ) -> Result<()> {
        let _run_scope = crate::perf::scope("app.run.total");
        let mut io = Io {
            input,
            output,
            errors,
        };

        if let Some(path) = self.startup_file.clone() {
            self.load_file(&path, &mut io)?;
        }
        if !self.quiet {
            writeln!(io.output, "Press ? at the # prompt for help")?;
        }

        let mut line = Vec::new();
        loop {
            write!(io.output, "# ")?;
            io.output.flush()?;
            line.clear();
            let read = io
                .input
                .read_until(b'\n', &mut line)
                .context("Failed to read command")?;
            if read == 0 {
                writeln!(io.output)?;
                break;
            }

            let command = match command::parse(&line) {
                Ok(command) => command,
                Err(err) => {
                    writeln!(io.output, "{err}")?;
                    continue;
                }
            };
            if crate::perf::is_session_log_enabled() {
                crate::perf::log_event("command", String::from_utf8_lossy(line.trim_ascii_end()));
            }
            tracing::trace!(command = command.name(), "dispatch");

            let _scope = crate::perf::scope(command.name());
            if self.update(command, &mut io)? == Flow::Quit {
                break;
            }
        }

        io.output.flush()?;
        Ok(())
    }
}
