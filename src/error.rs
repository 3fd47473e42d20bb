//! Error types reported by the deque and its configuration.

use core::fmt;

/// A position fell outside the live range of a deque.
///
/// Carries the offending `index` and the `len` the deque had at the time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    /// Position that was requested.
    pub index: usize,
    /// Number of live elements when the request was made.
    pub len: usize,
}

impl OutOfRange {
    #[inline]
    pub(crate) const fn new(index: usize, len: usize) -> Self {
        Self { index, len }
    }
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "position {} out of range for deque of length {}", self.index, self.len)
    }
}

impl std::error::Error for OutOfRange {}

/// Rejected [`ShrinkPolicy`](crate::ShrinkPolicy) values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PolicyError {
    /// `directory_slack` is not finite or is below 2.0.
    DirectorySlack(f64),
    /// `pool_trigger` is not finite or is not positive.
    PoolTrigger(f64),
    /// `pool_retain_divisor` is zero.
    PoolRetainDivisor,
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DirectorySlack(v) => {
                write!(f, "directory_slack must be a finite value >= 2.0, got {v}")
            }
            Self::PoolTrigger(v) => write!(f, "pool_trigger must be a finite value > 0, got {v}"),
            Self::PoolRetainDivisor => f.write_str("pool_retain_divisor must be non-zero"),
        }
    }
}

impl std::error::Error for PolicyError {}
