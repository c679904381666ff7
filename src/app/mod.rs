//! The interactive command loop.
//!
//! - [`App::run`]: read a command line, parse it, dispatch it, repeat
//! - `update`: apply one parsed [`Command`](crate::command::Command) to the buffer
//! - `effects`: file load and save
//! - `help`: command summary and statistics text

mod effects;
mod event_loop;
mod help;
mod update;

pub use event_loop::PromptedLines;
pub use update::Flow;

use std::path::PathBuf;

use crate::editor::{BufferLimits, EditorError, TextBuffer};

/// Owns the document buffer and drives the prompt loop over it.
#[derive(Debug)]
pub struct App {
    buffer: TextBuffer,
    quiet: bool,
    insert_hint_shown: bool,
    startup_file: Option<PathBuf>,
}

impl App {
    /// Create an application with an empty buffer.
    ///
    /// # Errors
    ///
    /// Returns a fatal [`EditorError`] if the initial buffer cannot be
    /// allocated.
    pub fn new(limits: BufferLimits) -> Result<Self, EditorError> {
        Ok(Self {
            buffer: TextBuffer::new(limits)?,
            quiet: false,
            insert_hint_shown: false,
            startup_file: None,
        })
    }

    /// Suppress the first-run hints.
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Load `path` into the buffer before the first prompt.
    pub fn with_startup_file(mut self, path: Option<PathBuf>) -> Self {
        self.startup_file = path;
        self
    }

    /// The document buffer.
    pub const fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }
}

#[cfg(test)]
mod tests;
