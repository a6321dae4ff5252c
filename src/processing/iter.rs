//! Lazy enumeration of every address in an inclusive range.

use crate::models::{Family, IpAddress};
use std::iter::FusedIterator;

/// Ascending iterator over `[first, last]`.
///
/// Holds only two cursors, so ranges of any size can be walked. Every call to
/// `iter()` on a sequence starts a fresh one at ordinal 0.
#[derive(Debug, Clone)]
pub struct AddressIter {
    family: Family,
    front: u128,
    back: u128,
    exhausted: bool,
}

impl AddressIter {
    pub(crate) fn new(first: u128, last: u128, family: Family) -> Self {
        AddressIter {
            family,
            front: first,
            back: last,
            exhausted: first > last,
        }
    }

    /// Addresses still to be produced, `None` if that exceeds `u128`.
    fn remaining(&self) -> Option<u128> {
        if self.exhausted {
            Some(0)
        } else {
            (self.back - self.front).checked_add(1)
        }
    }
}

impl Iterator for AddressIter {
    type Item = IpAddress;

    fn next(&mut self) -> Option<IpAddress> {
        if self.exhausted {
            return None;
        }
        let value = self.front;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.front += 1;
        }
        Some(IpAddress::new_unchecked(value, self.family))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining().and_then(|n| usize::try_from(n).ok()) {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }

    /// Skips ahead arithmetically instead of stepping.
    fn nth(&mut self, n: usize) -> Option<IpAddress> {
        if self.exhausted {
            return None;
        }
        let n = n as u128;
        if n > self.back - self.front {
            self.exhausted = true;
            return None;
        }
        self.front += n;
        self.next()
    }
}

impl DoubleEndedIterator for AddressIter {
    fn next_back(&mut self) -> Option<IpAddress> {
        if self.exhausted {
            return None;
        }
        let value = self.back;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.back -= 1;
        }
        Some(IpAddress::new_unchecked(value, self.family))
    }
}

impl FusedIterator for AddressIter {}
