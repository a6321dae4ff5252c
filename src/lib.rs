//! Lazy, indexable expansion of IPv4/IPv6 CIDR blocks and dash ranges.
//!
//! A network or range is never materialized: length, indexing, slicing and
//! membership are all computed from its first and last integer value.
//!
//! ```
//! use netexpand::{AddressSequence, Family, IpNetwork, IpRange};
//!
//! let net = IpNetwork::new("192.168.0.0/24", Family::V4).unwrap();
//! let range = IpRange::new("192.168.0.0-192.168.0.255", Family::V4).unwrap();
//! assert_eq!(net.len(), 256);
//! assert_eq!(net.at(10).unwrap(), range.at(10).unwrap());
//! assert!(net.contains("192.168.0.10"));
//! assert!(!net.contains("10.0.0.1"));
//! ```

pub mod cli;
pub mod codec;
pub mod config;
mod error;
pub mod models;
pub mod output;
pub mod processing;
mod sequence;
pub mod target;

pub use error::IpError;
pub use models::{Family, IpAddress, IpNetwork, IpRange};
pub use processing::{AddressIter, AddressSlice, Cardinality, SliceIter};
pub use sequence::{AddressInput, AddressSequence};
pub use target::Target;
