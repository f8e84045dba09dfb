//! Offset-based JSON scanning and path queries over an immutable byte
//! buffer.
//!
//! No parse tree is built. Every operation reports a [`ValueSpan`], a pair
//! of byte offsets plus a [`ValueKind`], into the caller's buffer, so
//! pulling a handful of fields out of a large document costs one linear scan
//! and zero allocations. The only allocating component is [`materialize`],
//! which flattens a single object or array level into an owned
//! [`PairList`].
//!
//! Composite values are located by *shallow* bracket matching: the extent of
//! an object or array is found by depth-counting its own bracket pair
//! without validating the interior. A bracket character quoted inside a
//! string member therefore corrupts the extent; this is a documented
//! limitation of the scanning model, and navigation re-validates whatever it
//! actually descends into.

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod kind;
mod span;
mod util;

pub mod materialize;
pub mod navigate;
pub mod path;
pub mod scan;
pub mod text;

#[cfg(test)]
mod tests;

pub use error::ScanError;
pub use kind::{ValueKind, kind_label};
pub use materialize::{PairList, PairNode};
pub use span::ValueSpan;
