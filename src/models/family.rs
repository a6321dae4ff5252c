//! Address family (IPv4 or IPv6) and its fixed integer width.

use crate::error::IpError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Address family. Fixes the integer width and the textual grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Number of bits in an address of this family.
    pub const fn width(self) -> u8 {
        match self {
            Family::V4 => 32,
            Family::V6 => 128,
        }
    }

    /// Largest integer value an address of this family can hold.
    pub const fn max_value(self) -> u128 {
        match self {
            Family::V4 => u32::MAX as u128,
            Family::V6 => u128::MAX,
        }
    }

    /// Numeric version, 4 or 6.
    pub const fn version(self) -> u8 {
        match self {
            Family::V4 => 4,
            Family::V6 => 6,
        }
    }

    /// Guess the family from a textual address: anything with a colon is IPv6.
    ///
    /// Only text is ever inferred. Integers are ambiguous and always need an
    /// explicit family.
    pub fn detect(text: &str) -> Family {
        if text.contains(':') {
            Family::V6
        } else {
            Family::V4
        }
    }
}

impl TryFrom<u8> for Family {
    type Error = IpError;

    fn try_from(version: u8) -> Result<Self, Self::Error> {
        match version {
            4 => Ok(Family::V4),
            6 => Ok(Family::V6),
            v => Err(IpError::format(format!("unknown address family {v}"))),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Family::V4 => write!(f, "IPv4"),
            Family::V6 => write!(f, "IPv6"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_and_max() {
        assert_eq!(Family::V4.width(), 32);
        assert_eq!(Family::V6.width(), 128);
        assert_eq!(Family::V4.max_value(), 4294967295);
        assert_eq!(Family::V6.max_value(), u128::MAX);
    }

    #[test]
    fn test_try_from_version() {
        assert_eq!(Family::try_from(4).unwrap(), Family::V4);
        assert_eq!(Family::try_from(6).unwrap(), Family::V6);
        assert!(Family::try_from(5).is_err());
        assert_eq!(Family::V6.version(), 6);
    }

    #[test]
    fn test_detect() {
        assert_eq!(Family::detect("10.0.0.1"), Family::V4);
        assert_eq!(Family::detect("::1"), Family::V6);
        assert_eq!(Family::detect("2001:db8::/32"), Family::V6);
        assert_eq!(Family::detect("garbage"), Family::V4);
    }
}
