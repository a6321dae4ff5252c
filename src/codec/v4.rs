//! Dotted-decimal IPv4 text.

use crate::error::IpError;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Four decimal octets (0-255), combined big-endian.
pub(super) fn parse_v4(text: &str) -> Result<u32, IpError> {
    let addr = Ipv4Addr::from_str(text)
        .map_err(|_| IpError::format(format!("illegal IPv4 address {text:?}")))?;
    Ok(u32::from(addr))
}

pub(super) fn format_v4(value: u32) -> String {
    Ipv4Addr::from(value).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_v4() {
        assert_eq!(parse_v4("192.168.0.0").unwrap(), 3232235520);
        assert_eq!(parse_v4("0.0.0.0").unwrap(), 0);
        assert_eq!(parse_v4("255.255.255.255").unwrap(), u32::MAX);
        assert_eq!(parse_v4("10.0.0.1").unwrap(), 0x0A000001);
    }

    #[test]
    fn test_parse_v4_rejects() {
        for bad in [
            "",
            "1.2.3",
            "1.2.3.4.5",
            "256.0.0.1",
            "1.2.3.-4",
            "1.2.3.4 ",
            " 1.2.3.4",
            "1.2.3.4/24",
            "a.b.c.d",
            "1..2.3",
            "::1",
        ] {
            assert!(parse_v4(bad).is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_format_v4() {
        assert_eq!(format_v4(3232235520), "192.168.0.0");
        assert_eq!(format_v4(0), "0.0.0.0");
        assert_eq!(format_v4(u32::MAX), "255.255.255.255");
    }
}
