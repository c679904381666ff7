use std::io::Cursor;

use tempfile::tempdir;

use crate::editor::{BufferLimits, LineSource};

use super::{App, PromptedLines};

fn quiet_app() -> App {
    App::new(BufferLimits::default()).unwrap().with_quiet(true)
}

/// Run `script` through the app; returns (stdout, stderr).
fn run_script(app: &mut App, script: &str) -> (String, String) {
    let (out, err) = run_bytes(app, script.as_bytes());
    (String::from_utf8(out).unwrap(), err)
}

/// Like [`run_script`], for input that is not valid UTF-8.
fn run_bytes(app: &mut App, script: &[u8]) -> (Vec<u8>, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    app.run(Cursor::new(script), &mut out, &mut err).unwrap();
    (out, String::from_utf8(err).unwrap())
}

// --- Core scenario ---

#[test]
fn test_append_print_delete_scenario() {
    let mut app = quiet_app();
    let (out, err) = run_script(&mut app, "a\nalpha\nbeta\n.\n1,2p\n1d\n1p\nq\n");
    assert_eq!(out, "# $ $ $ # 001] alpha\n002] beta\n# # 001] beta\n# ");
    assert!(err.is_empty());
    assert_eq!(app.buffer().as_bytes(), b"beta\n");
}

#[test]
fn test_insert_before_line() {
    let mut app = quiet_app();
    run_script(&mut app, "a\none\nthree\n.\n2i\ntwo\n.\nq\n");
    assert_eq!(app.buffer().as_bytes(), b"one\ntwo\nthree\n");
}

#[test]
fn test_print_all_and_search() {
    let mut app = quiet_app();
    let (out, _) = run_script(&mut app, "a\nred apple\ngreen pear\nred cherry\n.\ns red\np\nq\n");
    assert!(out.contains("# 001] red apple\n003] red cherry\n# "));
    assert!(out.contains("001] red apple\n002] green pear\n003] red cherry\n"));
}

#[test]
fn test_reversed_range_prints_single_line() {
    let mut app = quiet_app();
    let (out, _) = run_script(&mut app, "a\n1\n2\n3\n4\n5\n.\n5-2p\nq\n");
    assert!(out.ends_with("# 005] 5\n# "));
}

#[test]
fn test_zero_last_line_prints_first_line_only() {
    let mut app = quiet_app();
    let (out, _) = run_script(&mut app, "a\n1\n2\n3\n.\n2-0p\nq\n");
    assert!(out.ends_with("# 002] 2\n# "));
}

// --- Letter commands ---

#[test]
fn test_new_clears_buffer() {
    let mut app = quiet_app();
    let (out, _) = run_script(&mut app, "a\nx\n.\nn\nq\n");
    assert!(out.contains("Buffer Cleared\n"));
    assert!(app.buffer().is_empty());
}

#[test]
fn test_stats_reports_length_and_version() {
    let mut app = quiet_app();
    let (out, _) = run_script(&mut app, "a\nhello\n.\nv\nq\n");
    assert!(out.contains("6 characters in buffer\n"));
    assert!(out.contains("1 lines, 8192 bytes allocated\n"));
    assert!(out.contains(&format!("version: {}\n", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn test_unknown_command_shows_help() {
    let mut app = quiet_app();
    let (out, _) = run_script(&mut app, "?\nq\n");
    assert!(out.contains("[mm-nn]d"));
    assert!(out.contains("use '.' on its own line to stop"));
}

#[test]
fn test_bad_range_format_reported_without_mutation() {
    let mut app = quiet_app();
    let (out, _) = run_script(&mut app, "a\nkeep\n.\n1x\nq\n");
    assert!(out.contains("bad format: use mm,nn or mm-nn or mm followed by p/d/i\n"));
    assert_eq!(app.buffer().as_bytes(), b"keep\n");
}

#[test]
fn test_quit_stops_reading() {
    let mut app = quiet_app();
    run_script(&mut app, "q\na\nnever\n.\n");
    assert!(app.buffer().is_empty());
}

#[test]
fn test_end_of_input_ends_session() {
    let mut app = quiet_app();
    let (out, _) = run_script(&mut app, "a\nlast line");
    assert!(out.ends_with("# \n"));
    assert_eq!(app.buffer().as_bytes(), b"last line\n");
}

#[test]
fn test_search_matches_non_utf8_bytes() {
    let mut app = quiet_app();
    let (out, _) = run_bytes(&mut app, b"a\ncaf\xe9 latin1\nother\n.\ns caf\xe9\nq\n");
    assert_eq!(out, b"# $ $ $ # 001] caf\xe9 latin1\n# ");
}

// --- Hints ---

#[test]
fn test_hints_shown_once_unless_quiet() {
    let mut app = App::new(BufferLimits::default()).unwrap();
    let (out, _) = run_script(&mut app, "a\n.\na\n.\nq\n");
    assert!(out.starts_with("Press ? at the # prompt for help\n"));
    assert_eq!(out.matches("Type . on an empty line").count(), 1);

    let mut quiet = quiet_app();
    let (out, _) = run_script(&mut quiet, "a\n.\nq\n");
    assert!(!out.contains("Press ?"));
    assert!(!out.contains("Type ."));
}

// --- Files ---

#[test]
fn test_write_then_load_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("doc.txt");
    let mut app = quiet_app();
    let script = format!(
        "a\nfirst\nsecond\n.\nw {0}\nn\nl {0}\nq\n",
        path.display()
    );
    let (out, err) = run_script(&mut app, &script);
    assert!(err.is_empty(), "unexpected errors: {err}");
    assert!(out.contains(&format!("File {} saved\n", path.display())));
    assert!(out.contains("Read in 13 characters\n"));
    assert_eq!(std::fs::read(&path).unwrap(), b"first\nsecond\n");
    assert_eq!(app.buffer().as_bytes(), b"first\nsecond\n");
}

#[test]
fn test_load_appends_to_existing_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("more.txt");
    std::fs::write(&path, "loaded\n").unwrap();
    let mut app = quiet_app();
    let (out, _) = run_script(&mut app, &format!("a\ntyped\n.\nl {}\nq\n", path.display()));
    assert_eq!(app.buffer().as_bytes(), b"typed\nloaded\n");
    assert!(out.contains("Read in 13 characters\n"));
}

#[test]
fn test_load_missing_file_reports_and_continues() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.txt");
    let mut app = quiet_app();
    let (out, err) = run_script(&mut app, &format!("l {}\nv\nq\n", path.display()));
    assert!(err.starts_with(&format!("Unable to open {}", path.display())));
    assert!(out.contains("0 characters in buffer"));
}

#[test]
fn test_write_to_unwritable_path_reports_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("out.txt");
    let mut app = quiet_app();
    let (_, err) = run_script(&mut app, &format!("a\nx\n.\nw {}\nq\n", path.display()));
    assert!(err.starts_with(&format!("Cannot open {}", path.display())));
    assert_eq!(app.buffer().as_bytes(), b"x\n");
}

#[test]
fn test_write_without_path_is_reported() {
    let mut app = quiet_app();
    let (out, _) = run_script(&mut app, "w\nq\n");
    assert!(out.contains("missing file name: use w <filename>\n"));
}

#[test]
fn test_startup_file_is_loaded_before_prompt() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("start.txt");
    std::fs::write(&path, "hello\n").unwrap();
    let mut app = quiet_app().with_startup_file(Some(path));
    let (out, _) = run_script(&mut app, "1p\nq\n");
    assert!(out.starts_with("Read in 6 characters\n# 001] hello\n"));
}

// --- Warnings ---

#[test]
fn test_long_line_warning_goes_to_error_stream() {
    let mut app = App::new(BufferLimits {
        line_size: 4,
        ..BufferLimits::default()
    })
    .unwrap()
    .with_quiet(true);
    let (out, err) = run_script(&mut app, "a\nabcdef\n.\np\nq\n");
    assert!(out.contains("001] abcd\n002] ef\n"));
    assert!(err.contains("possible corruption at line 1"));
}

// --- Growth ---

#[test]
fn test_appending_past_initial_capacity_grows_buffer() {
    let mut app = App::new(BufferLimits {
        line_size: 16,
        initial_capacity: 32,
        grow_step: 16,
    })
    .unwrap()
    .with_quiet(true);
    let lines: String = (1..=20).map(|i| format!("line {i:02}\n")).collect();
    run_script(&mut app, &format!("a\n{lines}.\nq\n"));
    assert_eq!(app.buffer().as_bytes(), lines.as_bytes());
    assert!(app.buffer().capacity() > 32);
}

#[test]
fn test_unaddressable_line_size_ends_session_with_error() {
    let mut app = App::new(BufferLimits {
        line_size: usize::MAX,
        ..BufferLimits::default()
    })
    .unwrap()
    .with_quiet(true);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let result = app.run(Cursor::new(b"a\nx\n.\np\nq\n".as_slice()), &mut out, &mut err);
    assert!(result.unwrap_err().to_string().starts_with("memory error"));
    assert!(app.buffer().is_empty());
}

#[test]
fn test_unallocatable_buffer_fails_to_start() {
    let err = App::new(BufferLimits {
        initial_capacity: usize::MAX,
        ..BufferLimits::default()
    })
    .unwrap_err();
    assert!(err.is_fatal());
}

// --- Prompted line source ---

#[test]
fn test_prompted_lines_prompt_before_each_read() {
    let mut input = Cursor::new(b"one\ntwo".to_vec());
    let mut output = Vec::new();
    let mut source = PromptedLines::new(&mut input, &mut output);
    assert_eq!(source.next_line().unwrap(), Some(b"one\n".to_vec()));
    assert_eq!(source.next_line().unwrap(), Some(b"two".to_vec()));
    assert_eq!(source.next_line().unwrap(), None);
    assert_eq!(output, b"$ $ $ \n");
}

