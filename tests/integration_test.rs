//! Integration tests for netexpand
//!
//! These tests exercise the public API the way a caller would: build networks
//! and ranges from text, then index, slice, search and iterate them.

use netexpand::{AddressSequence, Cardinality, Family, IpAddress, IpError, IpNetwork, IpRange};
use std::net::Ipv4Addr;

fn v4(cidr: &str) -> IpNetwork {
    IpNetwork::new(cidr, Family::V4).expect("valid IPv4 network")
}

fn v6(cidr: &str) -> IpNetwork {
    IpNetwork::new(cidr, Family::V6).expect("valid IPv6 network")
}

fn texts(iter: impl IntoIterator<Item = IpAddress>) -> Vec<String> {
    iter.into_iter().map(|ip| ip.to_text()).collect()
}

#[test]
fn test_scenario_network_basics() {
    let net = v4("192.168.0.0/24");
    assert_eq!(net.len(), 256);
    assert_eq!(net.at(0).unwrap().to_text(), "192.168.0.0");
    assert_eq!(net.at(0).unwrap().to_integer(), 3232235520);
}

#[test]
fn test_scenario_range_matches_network() {
    let net = v4("192.168.0.0/24");
    let range = IpRange::new("192.168.0.0-192.168.0.255", Family::V4).unwrap();
    assert_eq!(range.len(), 256);
    for i in -256..256 {
        assert_eq!(net.at(i).unwrap(), range.at(i).unwrap(), "index {i}");
    }
    assert_eq!(texts(&net), texts(&range));
}

#[test]
fn test_scenario_v6_network() {
    let net = v6("2001:0db8:0000:0042:0000:8a2e:0370:7334/126");
    assert_eq!(net.len(), 4);
    assert_eq!(net.at(0).unwrap().to_text(), "2001:db8:0:42:0:8a2e:370:7334");
}

#[test]
fn test_scenario_membership() {
    let net = v4("192.168.0.0/24");
    assert!(net.contains("192.168.0.10"));
    assert!(!net.contains("10.0.0.1"));
}

#[test]
fn test_scenario_slice() {
    let net = v4("192.168.0.0/24");
    let slice = net.slice(Some(0), Some(5), None).unwrap();
    assert_eq!(slice.len(), 5);
    assert_eq!(
        texts(&slice),
        vec!["192.168.0.0", "192.168.0.1", "192.168.0.2", "192.168.0.3", "192.168.0.4"]
    );
}

#[test]
fn test_scenario_range_order_error() {
    let result = IpRange::from_bounds("10.0.0.5", "10.0.0.1", Family::V4);
    assert!(matches!(result, Err(IpError::RangeOrder { .. })));
}

#[test]
fn test_length_is_power_of_two() {
    for prefix in 0..=32u8 {
        let net = IpNetwork::with_prefix("172.16.5.77", prefix, Family::V4).unwrap();
        assert_eq!(net.len(), 1u128 << (32 - prefix), "/{prefix}");
        assert_eq!(net.at(0).unwrap().to_integer(), net.first_value());
        assert_eq!(net.at(-1).unwrap().to_integer(), net.last_value());
    }
    for prefix in 1..=128u8 {
        let net = IpNetwork::with_prefix("2001:db8:1234::5678", prefix, Family::V6).unwrap();
        assert_eq!(net.len(), 1u128 << (128 - prefix), "/{prefix}");
        assert_eq!(net.first().to_integer(), net.first_value());
        assert_eq!(net.last().to_integer(), net.last_value());
    }
    let all = v6("2001:db8::/0");
    assert_eq!(all.len().get(), None);
    assert_eq!(all.len().to_string(), "340282366920938463463374607431768211456");
}

#[test]
fn test_every_member_is_contained_in_every_form() {
    for net in [v4("10.1.2.3/28"), v6("fe80::/124")] {
        for i in 0..net.len().get().unwrap() as i128 {
            let ip = net.at(i).unwrap();
            assert!(net.contains(ip));
            assert!(net.contains(&ip));
            assert!(net.contains(ip.to_integer()));
            assert!(net.contains(ip.to_text()));
            assert_eq!(net.index_of(ip), Some(i as u128));
        }
    }
}

#[test]
fn test_contains_never_fails() {
    let net = v4("192.168.0.0/24");
    assert!(!net.contains("192.167.255.255"));
    assert!(!net.contains("192.168.1.0"));
    assert!(!net.contains(0u32));
    assert!(!net.contains(u128::MAX));
    assert!(!net.contains("::ffff:c0a8:0001"));
    assert!(!net.contains("192.168.0"));
    assert!(!net.contains(""));
    assert!(!net.contains(IpAddress::from_integer(3232235521, Family::V6).unwrap()));
    assert!(net.contains(Ipv4Addr::new(192, 168, 0, 1)));

    let net6 = v6("::/96");
    assert!(net6.contains(1u32));
    assert!(!net6.contains("0.0.0.1"));
    assert!(!net6.contains(Ipv4Addr::new(0, 0, 0, 1)));
}

#[test]
fn test_negative_indexing() {
    for net in [v4("10.0.0.0/29"), v6("::/120")] {
        let len = net.len().get().unwrap() as i128;
        assert_eq!(net.at(-1).unwrap(), net.at(len - 1).unwrap());
        assert_eq!(net.at(-len).unwrap(), net.at(0).unwrap());
        assert!(matches!(net.at(-len - 1), Err(IpError::Index { .. })));
        assert!(matches!(net.at(len), Err(IpError::Index { .. })));
    }
}

#[test]
fn test_index_error_reports_length() {
    let net = v4("10.0.0.0/30");
    assert_eq!(
        net.at(4).unwrap_err(),
        IpError::Index {
            index: 4,
            len: net.len()
        }
    );
    assert_eq!(net.at(4).unwrap_err().to_string(), "index 4 out of range for 4 addresses");
}

#[test]
fn test_range_network_equivalence() {
    let cases = [
        ("10.0.0.0/30", "10.0.0.0-10.0.0.3", Family::V4),
        ("0.0.0.0/0", "0.0.0.0-255.255.255.255", Family::V4),
        ("172.16.0.9/32", "172.16.0.9-172.16.0.9", Family::V4),
        ("2001:db8::/125", "2001:db8::-2001:db8::7", Family::V6),
        ("::/0", "::-ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff", Family::V6),
    ];
    for (cidr, dash, family) in cases {
        let net = IpNetwork::new(cidr, family).unwrap();
        let range = IpRange::new(dash, family).unwrap();
        assert_eq!(net.len(), range.len(), "{cidr}");
        for i in [0, 1, 2, -1, -2, 3, -4, i128::MAX, i128::MIN] {
            assert_eq!(net.at(i).ok(), range.at(i).ok(), "{cidr} at {i}");
        }
        for (start, stop, step) in [
            (None, None, None),
            (Some(1), Some(-1), Some(2)),
            (None, None, Some(-3)),
            (Some(-5), None, None),
        ] {
            let a = net.slice(start, stop, step).unwrap();
            let b = range.slice(start, stop, step).unwrap();
            assert_eq!(a.len(), b.len());
            assert_eq!(texts(a.iter().take(16)), texts(b.iter().take(16)));
        }
        let probes = ["10.0.0.2", "172.16.0.9", "2001:db8::7", "2001:db8::8", "nope"];
        for probe in probes {
            assert_eq!(net.contains(probe), range.contains(probe), "{cidr} {probe}");
        }
        assert_eq!(IpRange::from(&net), range);
    }
}

#[test]
fn test_huge_ranges_stay_lazy() {
    let net = v6("::/0");
    assert_eq!(net.at(i128::MAX).unwrap().to_integer(), i128::MAX as u128);
    assert_eq!(net.get(u128::MAX).unwrap().to_text(), "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff");

    let tail: Vec<String> = net.iter().rev().take(2).map(|ip| ip.to_text()).collect();
    assert_eq!(
        tail,
        vec![
            "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff",
            "ffff:ffff:ffff:ffff:ffff:ffff:ffff:fffe"
        ]
    );

    let evens = net.slice(None, None, Some(2)).unwrap();
    assert_eq!(evens.len(), 1u128 << 127);
    assert_eq!(texts(evens.iter().take(3)), vec!["::", "::2", "::4"]);
    assert_eq!(evens.get((1u128 << 127) - 1).unwrap().to_text(), "ffff:ffff:ffff:ffff:ffff:ffff:ffff:fffe");
}

#[test]
fn test_iteration_restarts() {
    let range = IpRange::new("10.0.0.254-10.0.1.1", Family::V4).unwrap();
    let first: Vec<String> = texts(&range);
    let second: Vec<String> = texts(range.iter());
    assert_eq!(first, vec!["10.0.0.254", "10.0.0.255", "10.0.1.0", "10.0.1.1"]);
    assert_eq!(first, second);
}

#[test]
fn test_canonical_round_trip() {
    let samples = [
        "2001:0db8:0000:0000:0000:ff00:0042:8329",
        "2001:db8:0:0:1:0:0:1",
        "0000:0000:0000:0000:0000:0000:0000:0001",
        "FE80::0202:B3FF:FE1E:8329",
        "1:0:0:1:0:0:0:1",
    ];
    for text in samples {
        let ip = IpAddress::parse(text, Family::V6).unwrap();
        let canonical = ip.to_text();
        let again = IpAddress::parse(&canonical, Family::V6).unwrap();
        assert_eq!(again, ip);
        assert_eq!(again.to_text(), canonical);
    }
}

#[test]
fn test_family_mismatch_is_format_error() {
    assert!(matches!(
        IpNetwork::new("2001:db8::/32", Family::V4),
        Err(IpError::Format(_))
    ));
    assert!(matches!(
        IpRange::new("10.0.0.1-10.0.0.2", Family::V6),
        Err(IpError::Format(_))
    ));
}

#[test]
fn test_empty_cardinality_compares() {
    let net = v4("10.0.0.0/30");
    let empty = net.slice(Some(3), Some(1), None).unwrap();
    assert_eq!(empty.len(), Cardinality::empty());
    assert!(empty.iter().next().is_none());
}
