//! The program's only output

use std::io::{self, Write};

/// Line written to stdout on every run (a newline follows it)
pub const GREETING: &str = "hello, world";

/// Write the greeting line and flush
pub fn write_greeting<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", GREETING)?;
    out.flush()
}
