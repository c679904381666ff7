//! Command-line grammar.
//!
//! One input line is one command. The first non-blank character selects
//! it:
//!
//! | Input                     | Command                          |
//! |---------------------------|----------------------------------|
//! | `q`                       | quit, discarding changes         |
//! | `n`                       | clear the buffer                 |
//! | `a`                       | append lines at the end          |
//! | `w <path>`                | write the buffer to `path`       |
//! | `l <path>`                | load `path` at the end           |
//! | `p`                       | print everything                 |
//! | `s <text>`                | print lines containing `text`    |
//! | `v`                       | buffer statistics and version    |
//! | `mm[-nn]p` / `d` / `i`    | print, delete or insert by line  |
//! | anything else             | help                             |

use std::path::PathBuf;

use thiserror::Error;

/// Command parsing error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("bad format: use mm,nn or mm-nn or mm followed by p/d/i")]
    BadFormat,

    #[error("line numbers start at 1")]
    ZeroLine,

    #[error("missing file name: use {0} <filename>")]
    MissingPath(char),
}

/// Operation applied to a line range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeOp {
    Print,
    Delete,
    Insert,
}

impl RangeOp {
    const fn from_letter(letter: u8) -> Option<Self> {
        match letter {
            b'p' => Some(Self::Print),
            b'd' => Some(Self::Delete),
            b'i' => Some(Self::Insert),
            _ => None,
        }
    }
}

/// A 1-based inclusive line range.
///
/// `last` never precedes `first`: a reversed pair collapses to the single
/// line `first`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    first: usize,
    last: usize,
}

impl LineRange {
    pub const fn new(first: usize, last: usize) -> Self {
        let last = if first > last { first } else { last };
        Self { first, last }
    }

    pub const fn single(line: usize) -> Self {
        Self::new(line, line)
    }

    pub const fn first(&self) -> usize {
        self.first
    }

    pub const fn last(&self) -> usize {
        self.last
    }
}

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `q`
    Quit,
    /// `n`
    New,
    /// `a`
    Append,
    /// `w <path>`
    Write(PathBuf),
    /// `l <path>`
    Load(PathBuf),
    /// `p`
    PrintAll,
    /// `s <text>`; the needle may be empty or contain spaces. Kept as raw
    /// bytes so it compares exactly against buffer content.
    Search(Vec<u8>),
    /// `v`
    Stats,
    /// `mm[-nn]op`
    Range(LineRange, RangeOp),
    /// Anything unrecognised, including `?` and blank lines.
    Help,
}

impl Command {
    /// Short name used for timing and session logs.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Quit => "quit",
            Self::New => "new",
            Self::Append => "append",
            Self::Write(_) => "write",
            Self::Load(_) => "load",
            Self::PrintAll => "print-all",
            Self::Search(_) => "search",
            Self::Stats => "stats",
            Self::Range(_, RangeOp::Print) => "range-print",
            Self::Range(_, RangeOp::Delete) => "range-delete",
            Self::Range(_, RangeOp::Insert) => "range-insert",
            Self::Help => "help",
        }
    }
}

/// Parse one raw input line.
///
/// # Errors
///
/// Returns a [`CommandError`] for a malformed range command or a file
/// command without a path.
pub fn parse(input: &[u8]) -> Result<Command, CommandError> {
    let line = trim_line_end(input.trim_ascii_start());
    let Some(&head) = line.first() else {
        return Ok(Command::Help);
    };

    match head {
        b'q' => Ok(Command::Quit),
        b'n' => Ok(Command::New),
        b'a' => Ok(Command::Append),
        b'w' => path_argument(line, 'w').map(Command::Write),
        b'l' => path_argument(line, 'l').map(Command::Load),
        b'p' => Ok(Command::PrintAll),
        b's' => Ok(Command::Search(rest_after_word(line).to_vec())),
        b'v' => Ok(Command::Stats),
        b'0'..=b'9' => parse_range(line),
        _ => Ok(Command::Help),
    }
}

fn trim_line_end(mut line: &[u8]) -> &[u8] {
    while let [rest @ .., b'\n' | b'\r'] = line {
        line = rest;
    }
    line
}

/// Everything after the command word and the blanks that follow it.
fn rest_after_word(line: &[u8]) -> &[u8] {
    let Some(idx) = line.iter().position(u8::is_ascii_whitespace) else {
        return &[];
    };
    let rest = &line[idx..];
    let blanks = rest.iter().take_while(|&&b| b == b' ' || b == b'\t').count();
    &rest[blanks..]
}

fn path_argument(line: &[u8], letter: char) -> Result<PathBuf, CommandError> {
    line.split(u8::is_ascii_whitespace)
        .filter(|word| !word.is_empty())
        .nth(1)
        .map(path_from_bytes)
        .ok_or(CommandError::MissingPath(letter))
}

#[cfg(unix)]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    PathBuf::from(OsStr::from_bytes(bytes))
}

#[cfg(not(unix))]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(bytes).into_owned())
}

fn parse_range(line: &[u8]) -> Result<Command, CommandError> {
    let (first, mut idx) = parse_number(line, 0)?;
    let mut last = first;
    if matches!(line.get(idx), Some(b'-' | b',')) {
        let (second, next) = parse_number(line, idx + 1)?;
        last = second;
        idx = next;
    }
    if first == 0 {
        return Err(CommandError::ZeroLine);
    }

    while matches!(line.get(idx), Some(b' ' | b'\t')) {
        idx += 1;
    }
    let op = line
        .get(idx)
        .copied()
        .and_then(RangeOp::from_letter)
        .ok_or(CommandError::BadFormat)?;
    if !line[idx + 1..].trim_ascii().is_empty() {
        return Err(CommandError::BadFormat);
    }

    Ok(Command::Range(LineRange::new(first, last), op))
}

/// Parse the maximal digit run starting at `start`.
fn parse_number(bytes: &[u8], start: usize) -> Result<(usize, usize), CommandError> {
    let digits = bytes
        .get(start..)
        .unwrap_or_default()
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return Err(CommandError::BadFormat);
    }
    let end = start + digits;
    let text = std::str::from_utf8(&bytes[start..end]).map_err(|_| CommandError::BadFormat)?;
    let value = text.parse::<usize>().map_err(|_| CommandError::BadFormat)?;
    Ok((value, end))
}
