//! Conversion between textual addresses and fixed-width integers.
//!
//! Both families share the `u128` representation; IPv4 values always fit the
//! low 32 bits.
//!
//! - [`v4`] - dotted-decimal
//! - [`v6`] - colon-hex with `::` compression

mod v4;
mod v6;

use crate::error::IpError;
use crate::models::Family;

pub use v6::format_v6;

/// Parse a textual address of the given family into its integer value.
///
/// # Examples
/// ```
/// use netexpand::{codec, Family};
/// assert_eq!(codec::parse("192.168.0.0", Family::V4).unwrap(), 3232235520);
/// assert_eq!(codec::parse("::1", Family::V6).unwrap(), 1);
/// ```
pub fn parse(text: &str, family: Family) -> Result<u128, IpError> {
    match family {
        Family::V4 => v4::parse_v4(text).map(u128::from),
        Family::V6 => v6::parse_v6(text),
    }
}

/// Format an integer as the canonical text of the given family.
///
/// IPv4 values are masked to 32 bits.
pub fn format(value: u128, family: Family) -> String {
    match family {
        Family::V4 => v4::format_v4((value & Family::V4.max_value()) as u32),
        Family::V6 => format_v6(value),
    }
}
