//! Ordinal arithmetic over an inclusive `(first, last)` pair.
//!
//! The n-th address of a range is always `first + n`; nothing here iterates.

use serde::{Serialize, Serializer};
use std::fmt;

/// 2^128, the size of the whole IPv6 space, which does not fit a `u128`.
const FULL_V6_SPACE: &str = "340282366920938463463374607431768211456";

/// Number of addresses in a sequence, anywhere in `[0, 2^128]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cardinality(Option<u128>); // count - 1, None when empty

impl Cardinality {
    pub const fn empty() -> Self {
        Cardinality(None)
    }

    /// Count of an inclusive range whose bounds differ by `span`.
    pub const fn from_span(span: u128) -> Self {
        Cardinality(Some(span))
    }

    /// The count as a `u128`, or `None` for exactly 2^128.
    pub fn get(&self) -> Option<u128> {
        match self.0 {
            None => Some(0),
            Some(span) => span.checked_add(1),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Largest valid ordinal, `None` when empty.
    pub fn last_ordinal(&self) -> Option<u128> {
        self.0
    }
}

impl PartialEq<u128> for Cardinality {
    fn eq(&self, other: &u128) -> bool {
        self.get() == Some(*other)
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.get() {
            Some(count) => write!(f, "{count}"),
            None => write!(f, "{FULL_V6_SPACE}"),
        }
    }
}

impl Serialize for Cardinality {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub fn cardinality(first: u128, last: u128) -> Cardinality {
    Cardinality::from_span(last - first)
}

/// Value of the address at a non-negative ordinal.
pub fn value_at(first: u128, last: u128, ordinal: u128) -> Option<u128> {
    (ordinal <= last - first).then(|| first + ordinal)
}

/// Value at a Python-style index; negative indices count back from `last`.
pub fn value_at_index(first: u128, last: u128, index: i128) -> Option<u128> {
    if index >= 0 {
        value_at(first, last, index as u128)
    } else {
        // -1 is last, -len is first
        let back = index.unsigned_abs() - 1;
        (back <= last - first).then(|| last - back)
    }
}

/// Ordinal offset of `value`, if it lies in `[first, last]`.
pub fn offset_of(first: u128, last: u128, value: u128) -> Option<u128> {
    (first <= value && value <= last).then(|| value - first)
}
