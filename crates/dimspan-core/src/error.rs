//! Error Types - Dimspan Core Error Handling
//!
//! Provides the error taxonomy shared by every dimspan container: bounds
//! violations on direct index access, length violations on size-checked
//! spans, and rank violations on dynamic allocation.
//!
//! # Key Features
//! - Unified error type for all container operations
//! - Detailed context (offending index, dimension extent, expected length)
//! - Integration with `std::error::Error` via `thiserror`
//!
//! @version 0.1.0

use thiserror::Error;

// =============================================================================
// Error Types
// =============================================================================

/// The main error type for dimspan operations.
///
/// All runtime failures propagate immediately to the caller of the offending
/// operation; there is no retry or internal suppression anywhere in the
/// library. Shape violations that can be expressed in the type system
/// (mismatched nested literals, static spans outside a fixed extent) are
/// rejected during compilation instead and never reach this enum.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Index at or beyond a dimension's current extent.
    #[error("index out of bounds: index {index} for dimension of extent {size}")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The extent of the dimension that was accessed.
        size: usize,
    },

    /// A size-checked span whose runtime bounds do not match its static length.
    #[error("span [{from}, {to}] does not cover exactly {expected} element(s)")]
    SpanLengthMismatch {
        /// First index of the span (inclusive).
        from: usize,
        /// Last index of the span (inclusive).
        to: usize,
        /// The statically declared span length.
        expected: usize,
    },

    /// An allocation shape with the wrong number of extents for the rank.
    #[error("rank mismatch: expected {expected} extent(s), got {actual}")]
    RankMismatch {
        /// The container's statically known rank.
        expected: usize,
        /// The number of extents supplied.
        actual: usize,
    },

    /// Internal invariant violation (should not happen).
    #[error("internal error: {message}")]
    Internal {
        /// Description of the violated invariant.
        message: String,
    },
}

// =============================================================================
// Result Type
// =============================================================================

/// A specialized Result type for dimspan operations.
pub type Result<T> = core::result::Result<T, Error>;

// =============================================================================
// Helper Constructors
// =============================================================================

impl Error {
    /// Creates a new out-of-bounds error.
    #[must_use]
    pub fn out_of_bounds(index: usize, size: usize) -> Self {
        Self::IndexOutOfBounds { index, size }
    }

    /// Creates a new span length mismatch error.
    #[must_use]
    pub fn span_length(from: usize, to: usize, expected: usize) -> Self {
        Self::SpanLengthMismatch { from, to, expected }
    }

    /// Creates a new rank mismatch error.
    #[must_use]
    pub fn rank_mismatch(expected: usize, actual: usize) -> Self {
        Self::RankMismatch { expected, actual }
    }

    /// Creates a new internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_out_of_bounds() {
        let err = Error::out_of_bounds(4, 3);
        assert_eq!(
            err.to_string(),
            "index out of bounds: index 4 for dimension of extent 3"
        );
    }

    #[test]
    fn test_display_span_length() {
        let err = Error::span_length(2, 5, 3);
        assert_eq!(
            err.to_string(),
            "span [2, 5] does not cover exactly 3 element(s)"
        );
    }

    #[test]
    fn test_display_rank_mismatch() {
        let err = Error::rank_mismatch(3, 2);
        assert_eq!(err.to_string(), "rank mismatch: expected 3 extent(s), got 2");
    }

    #[test]
    fn test_errors_compare() {
        assert_eq!(Error::out_of_bounds(1, 2), Error::out_of_bounds(1, 2));
        assert_ne!(Error::out_of_bounds(1, 2), Error::out_of_bounds(2, 2));
    }
}
