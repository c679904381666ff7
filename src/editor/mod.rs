//! The document buffer and everything that addresses it by line number.
//!
//! Provides a single flat byte store with no line index: every
//! line-numbered operation re-scans from the start, then shifts bytes in
//! place to open or close a gap.

mod buffer;
mod diagnostic;
mod error;
mod lines;
mod listing;
mod mutate;

pub use buffer::{
    BufferLimits, DEFAULT_GROW_STEP, DEFAULT_INITIAL_CAPACITY, DEFAULT_LINE_SIZE, LoadReport,
    TextBuffer,
};
pub use diagnostic::Diagnostic;
pub use error::EditorError;
pub use lines::{Line, Lines, Located, locate};
pub use listing::{write_line, write_numbered};
pub use mutate::{DeleteReport, InsertReport, LineSource, is_stop_line};
