//! CIDR blocks.
//!
//! Provides [`IpNetwork`], a power-of-two aligned block derived from a base
//! address and a prefix length, along with the mask helpers it is built on.

use super::{Family, IpAddress};
use crate::error::IpError;
use crate::sequence::{AddressInput, AddressSequence};
use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

lazy_static! {
    static ref CIDR_RE: Regex =
        Regex::new(r"^([^/\s]+)/([0-9]+)$").expect("Invalid Regex?");
}

/// Convert a prefix length to a network mask of the given family.
///
/// # Examples
/// ```
/// use netexpand::{models::cidr_mask, Family};
/// assert_eq!(cidr_mask(24, Family::V4).unwrap(), 0xFFFFFF00);
/// assert_eq!(cidr_mask(0, Family::V6).unwrap(), 0);
/// ```
pub fn cidr_mask(prefix: u8, family: Family) -> Result<u128, IpError> {
    Ok(family.max_value() & !host_mask(prefix, family)?)
}

/// Mask of the host bits: the `width - prefix` low bits set.
pub fn host_mask(prefix: u8, family: Family) -> Result<u128, IpError> {
    let width = family.width();
    if prefix > width {
        return Err(IpError::format(format!(
            "prefix length {prefix} too long for {family}, maximum is {width}"
        )));
    }
    let host_bits = u32::from(width - prefix);
    Ok(match host_bits {
        128 => u128::MAX,
        bits => (1u128 << bits) - 1,
    })
}

/// `(first, last)` of the block containing `value`: host bits cleared, then set.
pub fn cidr_bounds(value: u128, prefix: u8, family: Family) -> Result<(u128, u128), IpError> {
    let hosts = host_mask(prefix, family)?;
    let first = value & family.max_value() & !hosts;
    Ok((first, first | hosts))
}

/// A CIDR block such as `192.168.0.0/24`.
///
/// The literal base address is kept as given (host bits and all); the extent
/// of the block always comes from the masked `first`/`last`. Equality and
/// hashing ignore the base: `10.0.0.1/24` equals `10.0.0.0/24`.
#[derive(Debug, Copy, Clone)]
pub struct IpNetwork {
    base: IpAddress,
    prefix: u8,
    first: u128,
    last: u128,
}

impl IpNetwork {
    /// Parse `address/prefix` text of the given family.
    pub fn new(cidr: &str, family: Family) -> Result<IpNetwork, IpError> {
        let caps = CIDR_RE.captures(cidr).ok_or_else(|| {
            if cidr.contains('/') {
                IpError::format(format!("invalid network {cidr:?}"))
            } else {
                IpError::format(format!("network {cidr:?} is missing '/'"))
            }
        })?;
        let prefix: u8 = caps[2]
            .parse()
            .map_err(|_| IpError::format(format!("invalid prefix length {:?}", &caps[2])))?;
        let base = IpAddress::parse(&caps[1], family)?;
        IpNetwork::from_address(base, prefix)
    }

    /// Build from a base address (text, integer or address) and a prefix length.
    pub fn with_prefix<'a>(
        base: impl Into<AddressInput<'a>>,
        prefix: u8,
        family: Family,
    ) -> Result<IpNetwork, IpError> {
        let base = base.into().resolve(family)?;
        IpNetwork::from_address(base, prefix)
    }

    pub fn from_address(base: IpAddress, prefix: u8) -> Result<IpNetwork, IpError> {
        let (first, last) = cidr_bounds(base.to_integer(), prefix, base.family())?;
        log::debug!("IpNetwork {base}/{prefix} spans {first}..={last}");
        Ok(IpNetwork {
            base,
            prefix,
            first,
            last,
        })
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix
    }

    /// The address literally given at construction.
    pub fn base(&self) -> IpAddress {
        self.base
    }

    /// Lowest address of the block.
    pub fn network(&self) -> IpAddress {
        self.first()
    }

    /// Highest address of the block.
    pub fn broadcast(&self) -> IpAddress {
        self.last()
    }

    pub fn netmask(&self) -> IpAddress {
        let family = self.base.family();
        IpAddress::new_unchecked(family.max_value() & !(self.last - self.first), family)
    }

    pub fn hostmask(&self) -> IpAddress {
        IpAddress::new_unchecked(self.last - self.first, self.base.family())
    }
}

impl PartialEq for IpNetwork {
    fn eq(&self, other: &Self) -> bool {
        self.family() == other.family() && self.prefix == other.prefix && self.first == other.first
    }
}

impl Eq for IpNetwork {}

impl Hash for IpNetwork {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.family().hash(state);
        self.prefix.hash(state);
        self.first.hash(state);
    }
}

impl AddressSequence for IpNetwork {
    fn family(&self) -> Family {
        self.base.family()
    }

    fn first_value(&self) -> u128 {
        self.first
    }

    fn last_value(&self) -> u128 {
        self.last
    }
}

impl IntoIterator for &IpNetwork {
    type Item = IpAddress;
    type IntoIter = crate::processing::AddressIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Parses with the family inferred from the text.
impl FromStr for IpNetwork {
    type Err = IpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IpNetwork::new(s, Family::detect(s))
    }
}

impl fmt::Display for IpNetwork {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.prefix)
    }
}

impl Serialize for IpNetwork {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for IpNetwork {
    fn deserialize<D>(deserializer: D) -> Result<IpNetwork, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        IpNetwork::from_str(&s).map_err(|e| de::Error::custom(format!("invalid CIDR {s}: {e}")))
    }
}
