//! Index arithmetic shared by networks and ranges.
//!
//! - [`indexer`] - cardinality, ordinal lookup and reverse lookup
//! - [`slice`] - slice resolution and the lazy [`AddressSlice`]
//! - [`iter`] - lazy full enumeration

pub(crate) mod indexer;
mod iter;
mod slice;

// Re-export public types
pub use indexer::Cardinality;
pub use iter::AddressIter;
pub use slice::{AddressSlice, SliceIter};

pub(crate) use slice::resolve_slice;
