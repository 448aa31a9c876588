//! Error kinds reported by the neighbor searches and the semiprime locator

/// No prime exists at or above `start` within the `u64` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no primes >= {start} in u64 range")]
pub struct RangeExhausted {
    pub start: u64,
}

/// No prime exists at or below `start`, i.e. the search would go below 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no primes < 2 at or below {start}")]
pub struct RangeUnderflow {
    pub start: u64,
}

/// Either failure, for callers that mix upward and downward queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    RangeExhausted(#[from] RangeExhausted),

    #[error(transparent)]
    RangeUnderflow(#[from] RangeUnderflow),
}

pub type Result<T> = std::result::Result<T, Error>;
