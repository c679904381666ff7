//! Structured warnings raised while scanning the buffer.

use std::fmt;

/// A non-fatal condition found while walking lines.
///
/// Every scanning site (locate, print, search, load, insert) reports the
/// same type, so the caller decides where and how to surface it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// A line reached `limit` bytes without a newline. The scanner forced a
    /// boundary there, so the bytes after it are read as a new line.
    LineTooLong { line: usize, limit: usize },
}

impl Diagnostic {
    /// 1-based line number the warning refers to.
    pub const fn line(&self) -> usize {
        match self {
            Self::LineTooLong { line, .. } => *line,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LineTooLong { line, limit } => write!(
                f,
                "WARNING - line length exceeds {limit} bytes, possible corruption at line {line}"
            ),
        }
    }
}
