//! Python-style slicing over ordinal positions.
//!
//! Bounds are clamped the way `slice.indices(len)` clamps them, so a slice
//! never fails except for a zero step. The result is an [`AddressSlice`]: a
//! description of the selected ordinals whose length is known up front.

use super::indexer::Cardinality;
use crate::error::IpError;
use crate::models::{Family, IpAddress};
use std::iter::FusedIterator;

/// A clamped slice bound. `Before` is ordinal -1, `After` is ordinal `len`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Position {
    Before,
    At(u128),
    After,
}

fn clamp(index: i128, span: u128, descending: bool) -> Position {
    if index < 0 {
        let back = index.unsigned_abs() - 1;
        if back <= span {
            Position::At(span - back)
        } else if descending {
            Position::Before
        } else {
            Position::At(0)
        }
    } else {
        let index = index as u128;
        if index <= span {
            Position::At(index)
        } else if descending {
            Position::At(span)
        } else {
            Position::After
        }
    }
}

/// Resolve `start`, `stop` and `step` against a sequence whose last ordinal is
/// `span`. Returns the first selected ordinal and how many are selected.
pub fn resolve_slice(
    span: u128,
    start: Option<i128>,
    stop: Option<i128>,
    step: Option<i128>,
) -> Result<(u128, Cardinality), IpError> {
    let step = step.unwrap_or(1);
    if step == 0 {
        return Err(IpError::ZeroStep);
    }
    let descending = step < 0;

    let start = match start {
        Some(i) => clamp(i, span, descending),
        None if descending => Position::At(span),
        None => Position::At(0),
    };
    let stop = match stop {
        Some(i) => clamp(i, span, descending),
        None if descending => Position::Before,
        None => Position::After,
    };

    // distance between the first and the last selected ordinal, if any
    let gap = match (start, stop, descending) {
        (Position::At(a), Position::At(b), false) if b > a => Some(b - a - 1),
        (Position::At(a), Position::After, false) => Some(span - a),
        (Position::At(a), Position::At(b), true) if a > b => Some(a - b - 1),
        (Position::At(a), Position::Before, true) => Some(a),
        _ => None,
    };

    Ok(match (start, gap) {
        (Position::At(a), Some(gap)) => (a, Cardinality::from_span(gap / step.unsigned_abs())),
        _ => (0, Cardinality::empty()),
    })
}

/// Lazily evaluated slice of a sequence.
///
/// Stores only where the slice starts, its step and its length. Iterating it
/// computes each address on demand and can be repeated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressSlice {
    family: Family,
    origin: u128,
    step: i128,
    len: Cardinality,
}

impl AddressSlice {
    /// `first` is the value of the slice's first element.
    pub(crate) fn new(first: u128, step: i128, len: Cardinality, family: Family) -> Self {
        AddressSlice {
            family,
            origin: first,
            step,
            len,
        }
    }

    pub fn len(&self) -> Cardinality {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len.is_empty()
    }

    pub fn step(&self) -> i128 {
        self.step
    }

    pub fn family(&self) -> Family {
        self.family
    }

    /// The `n`-th address of the slice.
    pub fn get(&self, n: u128) -> Option<IpAddress> {
        let last = self.len.last_ordinal()?;
        if n > last {
            return None;
        }
        Some(IpAddress::new_unchecked(
            advance(self.origin, self.step, n),
            self.family,
        ))
    }

    pub fn iter(&self) -> SliceIter {
        SliceIter {
            family: self.family,
            next: self.origin,
            step: self.step,
            remaining: self.len,
        }
    }
}

/// `value` moved `n` steps. Only called for positions inside the slice.
fn advance(value: u128, step: i128, n: u128) -> u128 {
    let distance = n * step.unsigned_abs();
    if step > 0 {
        value + distance
    } else {
        value - distance
    }
}

impl IntoIterator for &AddressSlice {
    type Item = IpAddress;
    type IntoIter = SliceIter;

    fn into_iter(self) -> SliceIter {
        self.iter()
    }
}

impl IntoIterator for AddressSlice {
    type Item = IpAddress;
    type IntoIter = SliceIter;

    fn into_iter(self) -> SliceIter {
        self.iter()
    }
}

/// Iterator over an [`AddressSlice`].
#[derive(Debug, Clone)]
pub struct SliceIter {
    family: Family,
    next: u128,
    step: i128,
    remaining: Cardinality,
}

impl Iterator for SliceIter {
    type Item = IpAddress;

    fn next(&mut self) -> Option<IpAddress> {
        let left = self.remaining.last_ordinal()?;
        let value = self.next;
        if left == 0 {
            self.remaining = Cardinality::empty();
        } else {
            self.remaining = Cardinality::from_span(left - 1);
            self.next = advance(self.next, self.step, 1);
        }
        Some(IpAddress::new_unchecked(value, self.family))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining.get().and_then(|n| usize::try_from(n).ok()) {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }

    fn nth(&mut self, n: usize) -> Option<IpAddress> {
        let left = self.remaining.last_ordinal()?;
        let n = n as u128;
        if n > left {
            self.remaining = Cardinality::empty();
            return None;
        }
        self.next = advance(self.next, self.step, n);
        self.remaining = Cardinality::from_span(left - n);
        self.next()
    }
}

impl FusedIterator for SliceIter {}
