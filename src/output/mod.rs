//! Output formatting for command results.
//!
//! This module handles rendering a [`Report`]:
//! - [`terminal`] - plain lines, optionally colored
//! - [`json`] - a single JSON document

mod json;
mod terminal;

use crate::models::IpAddress;
use crate::processing::{AddressSlice, Cardinality};
use crate::target::Target;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

pub use json::write_json;
pub use terminal::write_terminal;

/// Result of one command, ready to be rendered.
#[derive(Debug, Serialize)]
#[serde(tag = "command", rename_all = "kebab-case")]
pub enum Report {
    Expand(Expansion),
    Count {
        target: Target,
        len: Cardinality,
    },
    At {
        target: Target,
        index: i128,
        address: IpAddress,
    },
    Contains {
        target: Target,
        probe: String,
        contained: bool,
    },
    IndexOf {
        target: Target,
        probe: String,
        index: Option<u128>,
    },
}

/// A (possibly sliced) target whose addresses are produced while rendering.
#[derive(Debug)]
pub struct Expansion {
    pub target: Target,
    pub slice: AddressSlice,
    /// Print at most this many addresses.
    pub limit: Option<u64>,
}

impl Expansion {
    /// The addresses that will actually be printed.
    pub fn shown(&self) -> impl Iterator<Item = IpAddress> + '_ {
        let limit = self
            .limit
            .map_or(usize::MAX, |l| usize::try_from(l).unwrap_or(usize::MAX));
        self.slice.iter().take(limit)
    }

    /// Whether the limit cuts the slice short.
    pub fn truncated(&self) -> bool {
        match (self.limit, self.slice.len().get()) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(limit), Some(len)) => len > u128::from(limit),
        }
    }
}

struct Addresses<'a>(&'a Expansion);

impl Serialize for Addresses<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.shown())
    }
}

impl Serialize for Expansion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Expansion", 5)?;
        state.serialize_field("target", &self.target)?;
        state.serialize_field("len", &self.slice.len())?;
        state.serialize_field("step", &self.slice.step())?;
        state.serialize_field("addresses", &Addresses(self))?;
        state.serialize_field("truncated", &self.truncated())?;
        state.end()
    }
}
