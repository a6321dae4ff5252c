//! A single IPv4 or IPv6 address.
//!
//! Provides [`IpAddress`], an immutable `(family, value)` pair with textual
//! and integer views.

use super::Family;
use crate::codec;
use crate::error::IpError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// One address of a fixed family.
///
/// Equality compares family and value. Ordering only exists within a family:
/// `partial_cmp` returns `None` across families and [`IpAddress::try_cmp`]
/// reports it as [`IpError::TypeMismatch`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct IpAddress {
    value: u128,
    family: Family,
}

impl IpAddress {
    /// Parse an address of the given family.
    pub fn parse(text: &str, family: Family) -> Result<IpAddress, IpError> {
        let value = codec::parse(text, family)?;
        Ok(IpAddress { value, family })
    }

    /// Build an address from its integer value, checking it fits the family.
    pub fn from_integer(value: u128, family: Family) -> Result<IpAddress, IpError> {
        if value > family.max_value() {
            return Err(IpError::format(format!(
                "illegal {family} integer {value}"
            )));
        }
        Ok(IpAddress { value, family })
    }

    /// Callers guarantee `value` fits the family.
    pub(crate) fn new_unchecked(value: u128, family: Family) -> IpAddress {
        debug_assert!(value <= family.max_value());
        IpAddress { value, family }
    }

    pub fn family(&self) -> Family {
        self.family
    }

    /// Canonical text (compressed lowercase form for IPv6).
    pub fn to_text(&self) -> String {
        codec::format(self.value, self.family)
    }

    pub fn to_integer(&self) -> u128 {
        self.value
    }

    pub fn to_std(&self) -> IpAddr {
        match self.family {
            Family::V4 => IpAddr::V4(Ipv4Addr::from(self.value as u32)),
            Family::V6 => IpAddr::V6(Ipv6Addr::from(self.value)),
        }
    }

    /// Compare two addresses of the same family.
    pub fn try_cmp(&self, other: &IpAddress) -> Result<Ordering, IpError> {
        if self.family != other.family {
            return Err(IpError::TypeMismatch {
                expected: self.family,
                found: other.family,
            });
        }
        Ok(self.value.cmp(&other.value))
    }
}

impl PartialOrd for IpAddress {
    fn partial_cmp(&self, other: &IpAddress) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl From<Ipv4Addr> for IpAddress {
    fn from(addr: Ipv4Addr) -> Self {
        IpAddress::new_unchecked(u128::from(u32::from(addr)), Family::V4)
    }
}

impl From<Ipv6Addr> for IpAddress {
    fn from(addr: Ipv6Addr) -> Self {
        IpAddress::new_unchecked(u128::from(addr), Family::V6)
    }
}

impl From<IpAddr> for IpAddress {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => v4.into(),
            IpAddr::V6(v6) => v6.into(),
        }
    }
}

/// Parses with the family inferred from the text.
impl FromStr for IpAddress {
    type Err = IpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IpAddress::parse(s, Family::detect(s))
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

impl Serialize for IpAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_text())
    }
}

impl<'de> Deserialize<'de> for IpAddress {
    fn deserialize<D>(deserializer: D) -> Result<IpAddress, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        IpAddress::from_str(&s)
            .map_err(|_| de::Error::custom(format!("invalid IP address: {s}")))
    }
}
