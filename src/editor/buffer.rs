//! The flat, growable byte store behind every editor operation.

use super::diagnostic::Diagnostic;
use super::error::EditorError;

/// Longest line the scanner accepts before forcing a boundary.
pub const DEFAULT_LINE_SIZE: usize = 132;
/// Capacity allocated when a buffer is created.
pub const DEFAULT_INITIAL_CAPACITY: usize = 8192;
/// Bytes added to the capacity on each growth step.
pub const DEFAULT_GROW_STEP: usize = 2048;

/// Sizing parameters for a [`TextBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferLimits {
    /// Maximum line length in bytes; also the headroom kept above the
    /// logical end of the document.
    pub line_size: usize,
    /// Capacity allocated up front.
    pub initial_capacity: usize,
    /// Fixed growth increment.
    pub grow_step: usize,
}

impl Default for BufferLimits {
    fn default() -> Self {
        Self {
            line_size: DEFAULT_LINE_SIZE,
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            grow_step: DEFAULT_GROW_STEP,
        }
    }
}

/// Result of loading raw bytes into the buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of bytes appended.
    pub bytes: usize,
    /// Over-long lines seen in the loaded content.
    pub diagnostics: Vec<Diagnostic>,
}

/// A single flat, growable byte store holding the whole document.
///
/// `storage.len()` is the allocated capacity; only `[0, len)` is content.
/// Bytes in `[len, capacity)` are kept zeroed after every structural
/// mutation. Capacity grows in fixed steps and never shrinks.
pub struct TextBuffer {
    storage: Vec<u8>,
    len: usize,
    limits: BufferLimits,
}

impl TextBuffer {
    /// Create an empty buffer with the given limits.
    ///
    /// # Errors
    ///
    /// Returns a fatal [`EditorError::Grow`] if the initial capacity cannot
    /// be allocated.
    ///
    /// # Panics
    ///
    /// Panics if `line_size` or `grow_step` is zero.
    pub fn new(limits: BufferLimits) -> Result<Self, EditorError> {
        assert!(limits.line_size > 0, "line size must be non-zero");
        assert!(limits.grow_step > 0, "grow step must be non-zero");
        let mut storage = Vec::new();
        storage
            .try_reserve_exact(limits.initial_capacity)
            .map_err(|source| EditorError::Grow {
                requested: limits.initial_capacity,
                source,
            })?;
        storage.resize(limits.initial_capacity, 0);
        Ok(Self {
            storage,
            len: 0,
            limits,
        })
    }

    /// Create a buffer with the default limits.
    ///
    /// # Errors
    ///
    /// See [`Self::new`].
    pub fn with_defaults() -> Result<Self, EditorError> {
        Self::new(BufferLimits::default())
    }

    /// The sizing parameters this buffer was built with.
    pub const fn limits(&self) -> BufferLimits {
        self.limits
    }

    /// Configured maximum line length.
    pub const fn line_size(&self) -> usize {
        self.limits.line_size
    }

    /// Number of meaningful bytes (the logical end of the document).
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Currently allocated size.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// The document content, `[0, len)`.
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage[..self.len]
    }

    /// Unused storage above the logical end, `[len, capacity)`.
    pub fn spare(&self) -> &[u8] {
        &self.storage[self.len..]
    }

    /// Number of lines as the scanner sees them.
    pub fn line_count(&self) -> usize {
        self.lines().count()
    }

    /// Make sure at least `min_headroom` bytes are free above `len`.
    ///
    /// Grows by `grow_step` as many times as needed, preserving content and
    /// zero-filling the new space. Returns the number of growth steps taken.
    ///
    /// # Errors
    ///
    /// Returns a fatal [`EditorError`] if the new capacity overflows or the
    /// allocation fails. The buffer is left unchanged in that case.
    pub fn ensure_capacity(&mut self, min_headroom: usize) -> Result<usize, EditorError> {
        let required = self
            .len
            .checked_add(min_headroom)
            .ok_or(EditorError::CapacityOverflow {
                requested: usize::MAX,
            })?;
        let current = self.capacity();
        if required <= current {
            return Ok(0);
        }

        let steps = (required - current).div_ceil(self.limits.grow_step);
        let target = steps
            .checked_mul(self.limits.grow_step)
            .and_then(|growth| current.checked_add(growth))
            .ok_or(EditorError::CapacityOverflow { requested: required })?;

        self.storage
            .try_reserve_exact(target - current)
            .map_err(|source| EditorError::Grow {
                requested: target,
                source,
            })?;
        self.storage.resize(target, 0);

        tracing::debug!(from = current, to = target, steps, "buffer grown");
        crate::perf::log_event(
            "buffer.grow",
            format!("capacity {current} -> {target} ({steps} steps)"),
        );
        Ok(steps)
    }

    /// Write `bytes` at the logical end and advance it.
    ///
    /// One line's worth of headroom is kept above the new end.
    ///
    /// # Errors
    ///
    /// Propagates growth failures from [`Self::ensure_capacity`].
    pub fn append_bytes(&mut self, bytes: &[u8]) -> Result<(), EditorError> {
        self.ensure_capacity(bytes.len().saturating_add(self.limits.line_size))?;
        let end = self.len + bytes.len();
        self.storage[self.len..end].copy_from_slice(bytes);
        self.len = end;
        Ok(())
    }

    /// Append raw file content, flagging over-long lines on the way.
    ///
    /// Line length is tracked with a running counter that resets on every
    /// newline and after each warning, so a long run produces one warning
    /// per `line_size` bytes. Line numbers count from the start of `bytes`.
    ///
    /// # Errors
    ///
    /// Propagates growth failures from [`Self::append_bytes`].
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<LoadReport, EditorError> {
        let limit = self.limits.line_size;
        let mut diagnostics = Vec::new();
        let mut run = 0usize;
        let mut line = 1usize;
        for &byte in bytes {
            if byte == b'\n' {
                run = 0;
                line += 1;
                continue;
            }
            run += 1;
            if run > limit {
                diagnostics.push(Diagnostic::LineTooLong { line, limit });
                run = 0;
            }
        }

        self.append_bytes(bytes)?;
        tracing::debug!(bytes = bytes.len(), len = self.len, "content loaded");
        Ok(LoadReport {
            bytes: bytes.len(),
            diagnostics,
        })
    }

    /// Drop all content. Capacity is kept.
    pub fn clear(&mut self) {
        self.storage[..self.len].fill(0);
        self.len = 0;
    }

    /// Open a gap of `bytes.len()` at `at` and copy `bytes` into it.
    ///
    /// # Errors
    ///
    /// Propagates growth failures from [`Self::ensure_capacity`].
    pub(super) fn insert_at(&mut self, at: usize, bytes: &[u8]) -> Result<(), EditorError> {
        assert!(at <= self.len, "insert offset {at} past end {}", self.len);
        self.ensure_capacity(bytes.len().saturating_add(self.limits.line_size))?;
        let shift = bytes.len();
        self.storage.copy_within(at..self.len, at + shift);
        self.storage[at..at + shift].copy_from_slice(bytes);
        self.len += shift;
        Ok(())
    }

    /// Remove `[start, end)` by moving the tail down, then zero the vacated
    /// bytes. Never reallocates.
    pub(super) fn remove_span(&mut self, start: usize, end: usize) {
        assert!(
            start <= end && end <= self.len,
            "span {start}..{end} outside 0..{}",
            self.len
        );
        let removed = end - start;
        if removed == 0 {
            return;
        }
        let tail = self.len - end;
        self.storage.copy_within(end..self.len, start);
        self.storage[start + tail..self.len].fill(0);
        self.len -= removed;
    }
}

impl std::fmt::Debug for TextBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextBuffer")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("limits", &self.limits)
            .finish_non_exhaustive()
    }
}
