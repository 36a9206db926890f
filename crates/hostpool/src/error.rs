//! Pool-specific error types.

use thiserror::Error;

/// Errors that can occur during pool operations.
///
/// Every variant except [`PoolError::Exhausted`] is a recoverable rejection:
/// the pool is left exactly as it was before the call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PoolError {
    /// The identifier lies outside the managed range `[1, upper_bound]`.
    #[error("identifier {num} is outside the managed range [1, {upper_bound}]")]
    OutOfRange {
        /// The offending identifier.
        num: u32,
        /// The pool's upper bound at the time of the call.
        upper_bound: u32,
    },
    /// Attempted to allocate an identifier that is not currently free.
    #[error("identifier {num} is not free")]
    NotFree {
        /// The identifier that was already allocated.
        num: u32,
    },
    /// Attempted to release an identifier that is already free.
    #[error("identifier {num} is already free")]
    AlreadyFree {
        /// The identifier that was released twice.
        num: u32,
    },
    /// The new upper bound would fall below the trailing free interval.
    #[error("cannot move upper bound to {border}: trailing free interval starts at {tail_start}")]
    ResizeRejected {
        /// The requested upper bound.
        border: u32,
        /// Start of the last free interval.
        tail_start: u32,
    },
    /// The pool holds no free intervals, so there is no trailing interval
    /// to anchor a release or a resize against.
    #[error("pool has no free intervals")]
    Exhausted,
}

/// Errors raised while validating a [`PoolConfig`](crate::PoolConfig).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The managed range `[1, 0]` is empty.
    #[error("upper bound must be at least 1")]
    ZeroUpperBound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_identifier() {
        let err = PoolError::OutOfRange {
            num: 300,
            upper_bound: 254,
        };
        assert_eq!(
            err.to_string(),
            "identifier 300 is outside the managed range [1, 254]"
        );
        assert_eq!(
            PoolError::AlreadyFree { num: 7 }.to_string(),
            "identifier 7 is already free"
        );
    }

    #[test]
    fn resize_rejection_reports_tail_start() {
        let err = PoolError::ResizeRejected {
            border: 230,
            tail_start: 231,
        };
        assert!(err.to_string().contains("starts at 231"));
    }
}
