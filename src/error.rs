//! Error type shared by the whole crate.

use crate::models::{Family, IpAddress};
use crate::processing::Cardinality;
use thiserror::Error;

/// Everything that can go wrong while building or indexing addresses.
///
/// Containment checks never produce one of these; they answer `false`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IpError {
    /// Malformed address, CIDR or dash-range text, or an out of range value.
    #[error("format error: {0}")]
    Format(String),

    /// Ordinal index outside `[0, len)` after negative-index resolution.
    #[error("index {index} out of range for {len} addresses")]
    Index { index: i128, len: Cardinality },

    /// Range whose lower bound is greater than its upper bound.
    #[error("range order error: lower bound {first} greater than upper bound {last}")]
    RangeOrder { first: IpAddress, last: IpAddress },

    /// Operation mixing IPv4 and IPv6 values.
    #[error("type mismatch: expected {expected} but found {found}")]
    TypeMismatch { expected: Family, found: Family },

    /// Slice with a step of zero.
    #[error("slice step cannot be zero")]
    ZeroStep,
}

impl IpError {
    pub(crate) fn format(msg: impl Into<String>) -> Self {
        IpError::Format(msg.into())
    }
}
