//! The indexable, sliceable, searchable surface shared by networks and ranges.

use crate::error::IpError;
use crate::models::{Family, IpAddress};
use crate::processing::{indexer, resolve_slice, AddressIter, AddressSlice, Cardinality};
use std::borrow::Cow;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Anything that can name an address: text, a bare integer, or an address.
///
/// Text and integers take the family of whatever they are resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressInput<'a> {
    Text(Cow<'a, str>),
    Integer(u128),
    Address(IpAddress),
}

impl AddressInput<'_> {
    /// Normalize to an address of `family`.
    pub fn resolve(&self, family: Family) -> Result<IpAddress, IpError> {
        match self {
            AddressInput::Text(text) => IpAddress::parse(text, family),
            AddressInput::Integer(value) => IpAddress::from_integer(*value, family),
            AddressInput::Address(ip) if ip.family() == family => Ok(*ip),
            AddressInput::Address(ip) => Err(IpError::TypeMismatch {
                expected: family,
                found: ip.family(),
            }),
        }
    }

    /// Drop surrounding whitespace from text input; other inputs pass through.
    pub(crate) fn trimmed(self) -> Self {
        match self {
            AddressInput::Text(Cow::Borrowed(text)) => {
                AddressInput::Text(Cow::Borrowed(text.trim()))
            }
            AddressInput::Text(Cow::Owned(text)) => {
                AddressInput::Text(Cow::Owned(text.trim().to_string()))
            }
            other => other,
        }
    }
}

impl<'a> From<&'a str> for AddressInput<'a> {
    fn from(text: &'a str) -> Self {
        AddressInput::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for AddressInput<'a> {
    fn from(text: &'a String) -> Self {
        AddressInput::Text(Cow::Borrowed(text.as_str()))
    }
}

impl From<String> for AddressInput<'_> {
    fn from(text: String) -> Self {
        AddressInput::Text(Cow::Owned(text))
    }
}

impl From<u32> for AddressInput<'_> {
    fn from(value: u32) -> Self {
        AddressInput::Integer(u128::from(value))
    }
}

impl From<u128> for AddressInput<'_> {
    fn from(value: u128) -> Self {
        AddressInput::Integer(value)
    }
}

impl From<IpAddress> for AddressInput<'_> {
    fn from(ip: IpAddress) -> Self {
        AddressInput::Address(ip)
    }
}

impl From<&IpAddress> for AddressInput<'_> {
    fn from(ip: &IpAddress) -> Self {
        AddressInput::Address(*ip)
    }
}

impl From<Ipv4Addr> for AddressInput<'_> {
    fn from(ip: Ipv4Addr) -> Self {
        AddressInput::Address(ip.into())
    }
}

impl From<Ipv6Addr> for AddressInput<'_> {
    fn from(ip: Ipv6Addr) -> Self {
        AddressInput::Address(ip.into())
    }
}

impl From<IpAddr> for AddressInput<'_> {
    fn from(ip: IpAddr) -> Self {
        AddressInput::Address(ip.into())
    }
}

/// An ordered, inclusive run of addresses addressed by ordinal position.
///
/// Implementors only say where the run starts and ends; everything else is
/// computed from `first_value() + n` without materializing the addresses.
pub trait AddressSequence {
    fn family(&self) -> Family;

    /// Integer value of the lowest address.
    fn first_value(&self) -> u128;

    /// Integer value of the highest address.
    fn last_value(&self) -> u128;

    /// Number of addresses. May be 2^128 for the whole IPv6 space.
    fn len(&self) -> Cardinality {
        indexer::cardinality(self.first_value(), self.last_value())
    }

    fn is_empty(&self) -> bool {
        self.len().is_empty()
    }

    fn first(&self) -> IpAddress {
        IpAddress::new_unchecked(self.first_value(), self.family())
    }

    fn last(&self) -> IpAddress {
        IpAddress::new_unchecked(self.last_value(), self.family())
    }

    /// Address at a non-negative ordinal, reaching every position even in
    /// the full IPv6 space.
    fn get(&self, ordinal: u128) -> Option<IpAddress> {
        indexer::value_at(self.first_value(), self.last_value(), ordinal)
            .map(|value| IpAddress::new_unchecked(value, self.family()))
    }

    /// Address at `index`; negative values count back from the end.
    ///
    /// # Examples
    /// ```
    /// use netexpand::{AddressSequence, Family, IpNetwork};
    /// let net = IpNetwork::new("192.168.0.0/24", Family::V4).unwrap();
    /// assert_eq!(net.at(0).unwrap().to_text(), "192.168.0.0");
    /// assert_eq!(net.at(-1).unwrap().to_text(), "192.168.0.255");
    /// assert!(net.at(256).is_err());
    /// ```
    fn at(&self, index: i128) -> Result<IpAddress, IpError> {
        indexer::value_at_index(self.first_value(), self.last_value(), index)
            .map(|value| IpAddress::new_unchecked(value, self.family()))
            .ok_or_else(|| IpError::Index {
                index,
                len: self.len(),
            })
    }

    /// Lazy `[start:stop:step]` with Python clamping rules.
    fn slice(
        &self,
        start: Option<i128>,
        stop: Option<i128>,
        step: Option<i128>,
    ) -> Result<AddressSlice, IpError> {
        let first = self.first_value();
        let (ordinal, len) = resolve_slice(self.last_value() - first, start, stop, step)?;
        Ok(AddressSlice::new(
            first + ordinal,
            step.unwrap_or(1),
            len,
            self.family(),
        ))
    }

    /// Whether the probe names an address inside the sequence.
    ///
    /// Never fails: unparseable text, out of range integers and addresses of
    /// the other family are simply not contained.
    fn contains<'a, P>(&self, probe: P) -> bool
    where
        P: Into<AddressInput<'a>>,
        Self: Sized,
    {
        self.index_of(probe).is_some()
    }

    /// Ordinal offset of the probe within the sequence.
    fn index_of<'a, P>(&self, probe: P) -> Option<u128>
    where
        P: Into<AddressInput<'a>>,
        Self: Sized,
    {
        let probe = probe.into();
        match probe.resolve(self.family()) {
            Ok(ip) => indexer::offset_of(self.first_value(), self.last_value(), ip.to_integer()),
            Err(e) => {
                log::trace!("probe {probe:?} not comparable: {e}");
                None
            }
        }
    }

    /// Every address from first to last, ascending, computed on demand.
    fn iter(&self) -> AddressIter {
        AddressIter::new(self.first_value(), self.last_value(), self.family())
    }
}
