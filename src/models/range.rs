//! Arbitrary inclusive address ranges in dash notation.

use super::{Family, IpAddress, IpNetwork};
use crate::error::IpError;
use crate::processing::AddressIter;
use crate::sequence::{AddressInput, AddressSequence};
use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

lazy_static! {
    static ref DASH_RE: Regex =
        Regex::new(r"^\s*([^\s-]+)\s*-\s*([^\s-]+)\s*$").expect("Invalid Regex?");
}

/// An inclusive `start-stop` range, not necessarily CIDR aligned.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct IpRange {
    first: u128,
    last: u128,
    family: Family,
}

impl IpRange {
    /// Parse `start-stop` text, e.g. `10.0.0.1-10.0.0.50`.
    pub fn new(range: &str, family: Family) -> Result<IpRange, IpError> {
        let caps = DASH_RE.captures(range).ok_or_else(|| {
            if range.contains('-') {
                IpError::format(format!("invalid range {range:?}"))
            } else {
                IpError::format(format!("range {range:?} is missing '-'"))
            }
        })?;
        IpRange::from_bounds(&caps[1], &caps[2], family)
    }

    /// Build from two boundaries, each given as text, integer or address.
    ///
    /// Text boundaries may carry surrounding whitespace.
    ///
    /// # Examples
    /// ```
    /// use netexpand::{AddressSequence, Family, IpRange};
    /// let range = IpRange::from_bounds("10.0.0.1", 0x0A00000Au32, Family::V4).unwrap();
    /// assert_eq!(range.len(), 10);
    /// assert!(IpRange::from_bounds("10.0.0.5", "10.0.0.1", Family::V4).is_err());
    /// ```
    pub fn from_bounds<'a, 'b>(
        start: impl Into<AddressInput<'a>>,
        stop: impl Into<AddressInput<'b>>,
        family: Family,
    ) -> Result<IpRange, IpError> {
        let first = start.into().trimmed().resolve(family)?;
        let last = stop.into().trimmed().resolve(family)?;
        IpRange::from_addresses(first, last)
    }

    /// Build from two addresses of the same family.
    pub fn from_addresses(first: IpAddress, last: IpAddress) -> Result<IpRange, IpError> {
        if first.try_cmp(&last)?.is_gt() {
            return Err(IpError::RangeOrder { first, last });
        }
        log::debug!("IpRange {first}-{last}");
        Ok(IpRange {
            first: first.to_integer(),
            last: last.to_integer(),
            family: first.family(),
        })
    }

    /// Lower boundary.
    pub fn start(&self) -> IpAddress {
        self.first()
    }

    /// Upper boundary, inclusive.
    pub fn end(&self) -> IpAddress {
        self.last()
    }
}

impl AddressSequence for IpRange {
    fn family(&self) -> Family {
        self.family
    }

    fn first_value(&self) -> u128 {
        self.first
    }

    fn last_value(&self) -> u128 {
        self.last
    }
}

/// The range covering exactly the network's block.
impl From<&IpNetwork> for IpRange {
    fn from(net: &IpNetwork) -> Self {
        IpRange {
            first: net.first_value(),
            last: net.last_value(),
            family: net.family(),
        }
    }
}

impl IntoIterator for &IpRange {
    type Item = IpAddress;
    type IntoIter = AddressIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Parses with the family inferred from the text.
impl FromStr for IpRange {
    type Err = IpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IpRange::new(s, Family::detect(s))
    }
}

impl fmt::Display for IpRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.start(), self.end())
    }
}

impl Serialize for IpRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for IpRange {
    fn deserialize<D>(deserializer: D) -> Result<IpRange, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        IpRange::from_str(&s).map_err(|e| de::Error::custom(format!("invalid range {s}: {e}")))
    }
}
