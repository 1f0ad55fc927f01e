//! Lazy generators for classic combinatorial families.
//!
//! Each generator starts positioned at the first element of its family and is
//! stepped in place with [`Generator::advance`], so enumerating a family never
//! allocates more than one element's worth of state:
//!
//! - [`BitTupleGen`]: `width`-bit tuples in binary counting order.
//! - [`ChooseGen`]: `k`-subsets of `{0, ..., n-1}` in lexicographic order.
//! - [`GrayGen`]: `width`-bit values in binary reflected Gray code order.
//! - [`RadixGen`]: mixed-radix digit vectors in odometer order.
//! - [`PermGen`]: permutations of `{0, ..., n-1}` in lexicographic order.
//!
//! ```
//! use combgen::{ChooseGen, Generator, LendingIterator};
//!
//! let mut pairs = ChooseGen::<u8>::new(4, 2)?.lending();
//! while let Some(pair) = pairs.next() {
//!     assert!(pair[0] < pair[1]);
//! }
//! # Ok::<(), combgen::InvalidParameter>(())
//! ```

pub mod combinatorics;
mod error;

pub use combinatorics::{
    BitTupleGen, ChooseGen, Generator, GrayGen, Lending, LendingIterator, PermGen, RadixGen,
};
pub use error::InvalidParameter;
