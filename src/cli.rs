//! Command line definition and command execution.

use crate::config::Config;
use crate::models::Family;
use crate::output::{Expansion, Report};
use crate::sequence::{AddressInput, AddressSequence};
use crate::target::Target;
use clap::{Parser, Subcommand};
use std::error::Error;

/// Expand IPv4/IPv6 CIDR blocks and dash ranges into their addresses.
#[derive(Parser, Debug)]
#[command(name = "netexpand", version, about)]
pub struct Cli {
    /// Address family (4 or 6); inferred from the target when omitted.
    #[arg(short, long, global = true, value_parser = parse_family)]
    pub family: Option<Family>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the addresses of a target, optionally sliced.
    Expand {
        /// CIDR block, dash range or single address.
        target: String,
        #[arg(long, allow_negative_numbers = true)]
        start: Option<i128>,
        #[arg(long, allow_negative_numbers = true)]
        stop: Option<i128>,
        #[arg(long, allow_negative_numbers = true)]
        step: Option<i128>,
    },
    /// Print how many addresses a target holds.
    Count { target: String },
    /// Print the address at an index; negative indices count from the end.
    At {
        target: String,
        #[arg(allow_negative_numbers = true)]
        index: i128,
    },
    /// Print whether a target holds an address (text or integer).
    Contains { target: String, probe: String },
    /// Print the ordinal offset of an address within a target.
    IndexOf { target: String, probe: String },
}

fn parse_family(s: &str) -> Result<Family, String> {
    let digits = s.trim_start_matches(|c: char| c.is_ascii_alphabetic());
    let version: u8 = digits
        .parse()
        .map_err(|_| format!("unknown address family {s:?}, expected 4 or 6"))?;
    Family::try_from(version).map_err(|e| e.to_string())
}

/// Digit-only probes are integers; everything else is address text.
fn probe_input(probe: &str) -> AddressInput<'_> {
    if !probe.is_empty() && probe.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(value) = probe.parse::<u128>() {
            return AddressInput::Integer(value);
        }
    }
    AddressInput::from(probe)
}

/// Run one command and collect its result.
pub fn execute(cli: &Cli, config: &Config) -> Result<Report, Box<dyn Error>> {
    let parse = |text: &str| -> Result<Target, Box<dyn Error>> {
        let target = Target::parse(text, cli.family)?;
        log::info!("target {target} holds {} addresses", target.len());
        Ok(target)
    };

    let report = match &cli.command {
        Command::Expand {
            target,
            start,
            stop,
            step,
        } => {
            let target = parse(target)?;
            let slice = target.slice(*start, *stop, *step)?;
            Report::Expand(Expansion {
                target,
                slice,
                limit: config.max_output,
            })
        }
        Command::Count { target } => {
            let target = parse(target)?;
            Report::Count {
                target,
                len: target.len(),
            }
        }
        Command::At { target, index } => {
            let target = parse(target)?;
            Report::At {
                target,
                index: *index,
                address: target.at(*index)?,
            }
        }
        Command::Contains { target, probe } => {
            let target = parse(target)?;
            Report::Contains {
                target,
                probe: probe.clone(),
                contained: target.contains(probe_input(probe)),
            }
        }
        Command::IndexOf { target, probe } => {
            let target = parse(target)?;
            Report::IndexOf {
                target,
                probe: probe.clone(),
                index: target.index_of(probe_input(probe)),
            }
        }
    };
    Ok(report)
}
