//! Terminal output.
//!
//! One value per line so the output pipes cleanly into other tools.

use super::{Expansion, Report};
use colored::Colorize;
use std::io::{self, Write};

/// Write a report as plain lines.
pub fn write_terminal<W: Write>(out: &mut W, report: &Report, color: bool) -> io::Result<()> {
    match report {
        Report::Expand(expansion) => write_expansion(out, expansion, color),
        Report::Count { len, .. } => writeln!(out, "{len}"),
        Report::At { address, .. } => writeln!(out, "{address}"),
        Report::Contains { contained, .. } => {
            let text = contained.to_string();
            let text = match (color, *contained) {
                (false, _) => text,
                (true, true) => text.green().to_string(),
                (true, false) => text.red().to_string(),
            };
            writeln!(out, "{text}")
        }
        Report::IndexOf { index, probe, .. } => match index {
            Some(index) => writeln!(out, "{index}"),
            None => {
                let text = format!("{probe} not found");
                if color {
                    writeln!(out, "{}", text.yellow())
                } else {
                    writeln!(out, "{text}")
                }
            }
        },
    }
}

fn write_expansion<W: Write>(out: &mut W, expansion: &Expansion, color: bool) -> io::Result<()> {
    let mut shown: u64 = 0;
    for address in expansion.shown() {
        writeln!(out, "{address}")?;
        shown += 1;
    }
    if expansion.truncated() {
        let notice = format!(
            "# truncated: showing {shown} of {} addresses in {}",
            expansion.slice.len(),
            expansion.target
        );
        if color {
            writeln!(out, "{}", notice.yellow())?;
        } else {
            writeln!(out, "{notice}")?;
        }
    }
    Ok(())
}
