//! Colon-hex IPv6 text.

use crate::error::IpError;
use itertools::Itertools;

const GROUPS: usize = 8;

/// Eight 16-bit hex groups, at most one `::` standing for one or more zero
/// groups.
pub(super) fn parse_v6(text: &str) -> Result<u128, IpError> {
    let illegal = || IpError::format(format!("illegal IPv6 address {text:?}"));

    if text.is_empty() || !text.chars().all(|c| c.is_ascii_hexdigit() || c == ':') {
        return Err(illegal());
    }
    if text.matches("::").count() > 1 || text.contains(":::") {
        return Err(illegal());
    }

    let groups: Vec<u16> = match text.split_once("::") {
        Some((head, tail)) => {
            let head = parse_groups(head).ok_or_else(illegal)?;
            let tail = parse_groups(tail).ok_or_else(illegal)?;
            // "::" must replace at least one group
            if head.len() + tail.len() > GROUPS - 1 {
                return Err(illegal());
            }
            let zeros = GROUPS - head.len() - tail.len();
            head.into_iter()
                .chain(std::iter::repeat(0).take(zeros))
                .chain(tail)
                .collect()
        }
        None => parse_groups(text).ok_or_else(illegal)?,
    };

    if groups.len() != GROUPS {
        return Err(illegal());
    }
    Ok(groups
        .iter()
        .fold(0u128, |acc, group| (acc << 16) | u128::from(*group)))
}

fn parse_groups(text: &str) -> Option<Vec<u16>> {
    if text.is_empty() {
        return Some(Vec::new());
    }
    text.split(':')
        .map(|group| {
            if group.is_empty() || group.len() > 4 {
                None
            } else {
                u16::from_str_radix(group, 16).ok()
            }
        })
        .collect()
}

/// Canonical IPv6 text.
///
/// Lowercase hex without leading zeros; the longest run of two or more zero
/// groups becomes `::`, the leftmost run winning a tie.
///
/// # Examples
/// ```
/// use netexpand::codec::format_v6;
/// assert_eq!(format_v6(0x2001_0db8_0000_0000_0000_0000_0000_0001), "2001:db8::1");
/// assert_eq!(format_v6(0), "::");
/// ```
pub fn format_v6(value: u128) -> String {
    let groups: Vec<u16> = (0..GROUPS)
        .map(|i| (value >> (16 * (GROUPS - 1 - i))) as u16)
        .collect();

    let hex = |part: &[u16]| part.iter().map(|g| format!("{g:x}")).join(":");

    match longest_zero_run(&groups) {
        Some((start, len)) => {
            format!("{}::{}", hex(&groups[..start]), hex(&groups[start + len..]))
        }
        None => hex(&groups),
    }
}

/// `(start, len)` of the leftmost longest run of zero groups, if at least two long.
fn longest_zero_run(groups: &[u16]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    let mut i = 0;
    while i < groups.len() {
        if groups[i] != 0 {
            i += 1;
            continue;
        }
        let start = i;
        while i < groups.len() && groups[i] == 0 {
            i += 1;
        }
        let len = i - start;
        if len >= 2 && best.map_or(true, |(_, best_len)| len > best_len) {
            best = Some((start, len));
        }
    }
    best
}
