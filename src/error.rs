use thiserror::Error;

/// Rejected construction parameters. Generators validate everything up front,
/// so a successfully built generator never fails mid-sequence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidParameter {
    /// A bit width larger than the backing integer type can hold. Counting
    /// generators exclude the sign bit; Gray codes may use it.
    #[error("width {width} exceeds the {capacity} usable bits of the backing type")]
    WidthTooLarge { width: u32, capacity: u32 },
    /// A combination size outside `1 <= k < n`.
    #[error("subset size {k} must satisfy 1 <= k < {n}")]
    SubsetSize { n: usize, k: usize },
    /// An element value the backing type cannot hold.
    #[error("value {value} is not representable by the backing type")]
    Unrepresentable { value: usize },
    /// A mixed-radix generator with no positions.
    #[error("radix vector is empty")]
    EmptyRadix,
    /// A radix below zero.
    #[error("radix at position {position} is negative")]
    NegativeRadix { position: usize },
}
