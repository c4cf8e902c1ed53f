use std::error;
use std::fmt;

use thiserror::Error;

/// Error returned when an index is outside the valid range for a strand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfBounds {
    /// The index that was requested
    pub index: usize,

    /// The current length of the strand (upper bound)
    pub len: usize,
}

impl fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds (len = {})", self.index, self.len)
    }
}

impl error::Error for OutOfBounds {}

/// Error returned when a strand-kind selector does not name a known
/// representation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown strand kind: {0}. Available: flat, buffered, chain")]
pub struct UnknownStrandKind(pub String);
