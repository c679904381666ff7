use std::io::{self, Write};

use crate::editor::TextBuffer;

const HELP: &str = "\
q               exit, discarding unsaved changes
w [filename]    save buffer to file
l [filename]    load a file at the end of the buffer
n               clear the buffer (new file)
p               print (list) the buffer
a               append lines at the end of the buffer
s [substring]   print lines containing substring
v               show buffer statistics
[mm-nn]d        delete lines mm-nn
mm i            insert new lines before line mm
[mm-nn]p        print (list) lines mm-nn
When appending/inserting, use '.' on its own line to stop
";

pub(super) fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(HELP.as_bytes())?;
    writeln!(out)
}

pub(super) fn write_stats<W: Write>(out: &mut W, buffer: &TextBuffer) -> io::Result<()> {
    writeln!(out, "{} characters in buffer", buffer.len())?;
    writeln!(
        out,
        "{} lines, {} bytes allocated",
        buffer.line_count(),
        buffer.capacity()
    )?;
    writeln!(out, "version: {}", env!("CARGO_PKG_VERSION"))
}
