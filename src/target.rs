//! # Expansion Target
//!
//! Free-form input accepted by the command line. A target is one of:
//! * A CIDR block (e.g., `192.168.1.0/24`).
//! * A dash range (e.g., `10.0.0.1-10.0.0.50`).
//! * A single address, treated as a host route (`/32` or `/128`).

use crate::error::IpError;
use crate::models::{Family, IpAddress, IpNetwork, IpRange};
use crate::sequence::AddressSequence;
use serde::Serialize;
use std::fmt;

/// A parsed target. Both variants index identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Target {
    Network(IpNetwork),
    Range(IpRange),
}

impl Target {
    /// Parse `text`, inferring the family from it when `family` is `None`.
    pub fn parse(text: &str, family: Option<Family>) -> Result<Target, IpError> {
        let text = text.trim();
        let family = family.unwrap_or_else(|| Family::detect(text));

        if text.contains('/') {
            return IpNetwork::new(text, family).map(Target::Network);
        }
        if text.contains('-') {
            return IpRange::new(text, family).map(Target::Range);
        }
        let host = IpAddress::parse(text, family)?;
        IpNetwork::from_address(host, family.width()).map(Target::Network)
    }
}

impl AddressSequence for Target {
    fn family(&self) -> Family {
        match self {
            Target::Network(net) => net.family(),
            Target::Range(range) => range.family(),
        }
    }

    fn first_value(&self) -> u128 {
        match self {
            Target::Network(net) => net.first_value(),
            Target::Range(range) => range.first_value(),
        }
    }

    fn last_value(&self) -> u128 {
        match self {
            Target::Network(net) => net.last_value(),
            Target::Range(range) => range.last_value(),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Target::Network(net) => write!(f, "{net}"),
            Target::Range(range) => write!(f, "{range}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cidr() {
        let target = Target::parse("192.168.1.0/24", None).unwrap();
        assert!(matches!(target, Target::Network(_)));
        assert_eq!(target.len(), 256);
        assert_eq!(target.family(), Family::V4);
    }

    #[test]
    fn test_parse_range() {
        let target = Target::parse("10.0.0.1-10.0.0.50", None).unwrap();
        assert!(matches!(target, Target::Range(_)));
        assert_eq!(target.len(), 50);
        assert_eq!(target.at(-1).unwrap().to_text(), "10.0.0.50");
    }

    #[test]
    fn test_parse_host() {
        let target = Target::parse("fe80::1", None).unwrap();
        assert_eq!(target.len(), 1);
        assert_eq!(target.family(), Family::V6);
        assert_eq!(target.to_string(), "fe80::1/128");

        let target = Target::parse(" 10.0.0.7 ", Some(Family::V4)).unwrap();
        assert_eq!(target.to_string(), "10.0.0.7/32");
    }

    #[test]
    fn test_explicit_family_must_match() {
        assert!(Target::parse("::1", Some(Family::V4)).is_err());
        assert!(Target::parse("10.0.0.0/8", Some(Family::V6)).is_err());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Target::parse("lan", None).is_err());
        assert!(Target::parse("", None).is_err());
        assert!(Target::parse("10.0.0.9-10.0.0.1", None).is_err());
    }

    #[test]
    fn test_serialize() {
        let target = Target::parse("10.0.0.0/30", None).unwrap();
        assert_eq!(
            serde_json::to_string(&target).unwrap(),
            r#"{"kind":"network","value":"10.0.0.0/30"}"#
        );
    }
}
