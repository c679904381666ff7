//! Errors raised by buffer operations, split into fatal and recoverable.

use std::collections::TryReserveError;
use std::io;

use thiserror::Error;

/// Errors raised by buffer operations.
#[derive(Debug, Error)]
pub enum EditorError {
    /// The requested capacity does not fit in `usize`.
    #[error("memory error: buffer capacity overflow (requested {requested} bytes)")]
    CapacityOverflow { requested: usize },

    /// The allocator refused to grow the buffer.
    #[error("memory error: unable to grow buffer to {requested} bytes")]
    Grow {
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    /// Reading an interactively entered line failed.
    #[error("failed to read input line")]
    Input(#[from] io::Error),
}

impl EditorError {
    /// Whether the document can no longer be retained safely.
    ///
    /// Growth failures are fatal: the process must release the buffer and
    /// exit. Input failures only end the current command.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::CapacityOverflow { .. } | Self::Grow { .. })
    }
}
