use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Result;

use crate::app::App;
use crate::app::event_loop::Io;
use crate::app::update::report_diagnostics;

impl App {
    /// Append the contents of `path` to the buffer.
    ///
    /// A file that cannot be read is reported and leaves the buffer alone;
    /// only a failure to grow the buffer is returned as an error.
    pub(super) fn load_file<R, W: Write, E: Write>(
        &mut self,
        path: &Path,
        io: &mut Io<R, W, E>,
    ) -> Result<()> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                writeln!(io.errors, "Unable to open {}: {err}", path.display())?;
                crate::perf::log_event(
                    "load.error",
                    format!("path={} err={err}", path.display()),
                );
                return Ok(());
            }
        };

        let report = self.buffer.load_bytes(&bytes)?;
        report_diagnostics(&mut io.errors, &report.diagnostics)?;
        writeln!(io.output, "Read in {} characters", self.buffer.len())?;
        tracing::debug!(path = %path.display(), bytes = report.bytes, "file loaded");
        crate::perf::log_event(
            "load",
            format!("path={} bytes={}", path.display(), report.bytes),
        );
        Ok(())
    }

    /// Write the buffer content verbatim to `path`, replacing it.
    pub(super) fn write_file<R, W: Write, E: Write>(
        &self,
        path: &Path,
        io: &mut Io<R, W, E>,
    ) -> Result<()> {
        if let Err(err) = fs::write(path, self.buffer.as_bytes()) {
            writeln!(io.errors, "Cannot open {}: {err}", path.display())?;
            crate::perf::log_event(
                "write.error",
                format!("path={} err={err}", path.display()),
            );
            return Ok(());
        }

        writeln!(io.output, "File {} saved", path.display())?;
        tracing::debug!(path = %path.display(), bytes = self.buffer.len(), "file written");
        crate::perf::log_event(
            "write",
            format!("path={} bytes={}", path.display(), self.buffer.len()),
        );
        Ok(())
    }
}
