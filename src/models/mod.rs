//! Domain models for address expansion.
//!
//! This module contains the core data structures:
//! - [`Family`] - IPv4 or IPv6
//! - [`IpAddress`] - a single address
//! - [`IpNetwork`] - CIDR block
//! - [`IpRange`] - dash-notation range

mod address;
mod family;
mod network;
mod range;

// Re-export public types
pub use address::IpAddress;
pub use family::Family;
pub use network::{cidr_bounds, cidr_mask, host_mask, IpNetwork};
pub use range::IpRange;
