//! Per-command timing and an optional session event log.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

static TIMING: AtomicBool = AtomicBool::new(false);
static SESSION_LOG: LazyLock<Mutex<SessionLog>> = LazyLock::new(|| Mutex::new(SessionLog::new()));

/// Prints the elapsed time of a command when dropped, if timing is on.
#[derive(Debug)]
pub struct Scope {
    name: &'static str,
    start: Instant,
}

impl Drop for Scope {
    fn drop(&mut self) {
        if !is_enabled() {
            return;
        }
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        eprintln!("[perf] {}: {:.3} ms", self.name, elapsed_ms);
    }
}

#[derive(Debug)]
struct SessionLog {
    start: Instant,
    writer: Option<BufWriter<File>>,
}

impl SessionLog {
    fn new() -> Self {
        Self {
            start: Instant::now(),
            writer: None,
        }
    }
}

fn session_log() -> MutexGuard<'static, SessionLog> {
    SESSION_LOG.lock().unwrap_or_else(PoisonError::into_inner)
}

pub fn set_enabled(enabled: bool) {
    TIMING.store(enabled, Ordering::Relaxed);
}

pub fn is_enabled() -> bool {
    TIMING.load(Ordering::Relaxed)
}

pub fn scope(name: &'static str) -> Scope {
    Scope {
        name,
        start: Instant::now(),
    }
}

/// Start appending session events to `path`, or stop with `None`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or written.
pub fn set_session_log_path(path: Option<&Path>) -> std::io::Result<()> {
    let mut log = session_log();
    if let Some(path) = path {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "lined session start")?;
        writer.flush()?;
        log.start = Instant::now();
        log.writer = Some(writer);
    } else {
        log.writer = None;
    }
    Ok(())
}

pub fn is_session_log_enabled() -> bool {
    session_log().writer.is_some()
}

/// Record one event; a no-op unless a session log is open.
pub fn log_event(name: &str, detail: impl AsRef<str>) {
    let mut log = session_log();
    let elapsed_ms = log.start.elapsed().as_secs_f64() * 1000.0;
    if let Some(writer) = log.writer.as_mut() {
        let _ = writeln!(writer, "[{elapsed_ms:>10.3} ms] {name}: {}", detail.as_ref());
        let _ = writer.flush();
    }
}
