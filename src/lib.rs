// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. editor::EditorError)
    clippy::module_name_repetitions
)]

//! # Lined
//!
//! A minimal interactive line editor.
//!
//! The whole document lives in one flat, growable byte buffer. There is
//! no line index: printing, searching, inserting and deleting by line
//! number all re-scan for newlines and then shift bytes in place.
//!
//! ## Architecture
//!
//! - **Buffer**: owned byte storage that grows in fixed steps
//! - **Lines**: on-demand mapping from line numbers to byte spans
//! - **Mutators**: delete and insert by shifting bytes
//! - **Readers**: numbered printing and literal search
//! - **Commands**: the `mm-nn[pdi]` and single-letter grammar
//!
//! ## Modules
//!
//! - [`editor`]: Buffer store, line locator, mutators and printing
//! - [`search`]: Substring search
//! - [`command`]: Command-line grammar
//! - [`app`]: Prompt loop, dispatch and file I/O
//! - [`config`]: rc-file and flag handling
//! - [`perf`]: Command timing and session log

pub mod app;
pub mod command;
pub mod config;
pub mod editor;
pub mod perf;
pub mod search;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::App;
    pub use crate::command::{Command, LineRange, RangeOp};
    pub use crate::editor::{BufferLimits, Diagnostic, EditorError, TextBuffer};
}
