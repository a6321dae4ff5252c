//! JSON output.

use super::Report;
use std::io::{self, Write};

/// Write a report as one JSON document followed by a newline.
pub fn write_json<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}
