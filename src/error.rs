//! Error types for the fallible entry points.
//!
//! The core algorithms (table construction, backtracking, flattening) are
//! total and never fail. Errors only arise from optional configuration,
//! the alignment cap, and the exponential brute-force oracle.

use thiserror::Error;

/// Errors reported by [`LcsEngine`](crate::engine::LcsEngine), its builder,
/// and the [`oracle`](crate::oracle).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LcsError {
    /// The alignment tree holds more root-to-leaf paths than the configured cap.
    #[error("alignment cap exceeded: {found} alignments, limit is {limit}")]
    TooManyAlignments {
        /// Configured maximum number of alignments.
        limit: usize,
        /// Number of alignments in the tree (saturating).
        found: usize,
    },

    /// The engine was configured with values it cannot honour.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The brute-force oracle refuses inputs whose subset count is impractical.
    #[error("oracle input too long: shorter sequence has {len} tokens, maximum is {max}")]
    OracleInputTooLong {
        /// Length of the shorter input.
        len: usize,
        /// Largest accepted length.
        max: usize,
    },
}

/// Result alias for fallible LCS operations.
pub type LcsResult<T> = Result<T, LcsError>;

impl LcsError {
    /// Create a configuration error with a message.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let err = LcsError::TooManyAlignments {
            limit: 4,
            found: 10,
        };
        assert_eq!(
            err.to_string(),
            "alignment cap exceeded: 10 alignments, limit is 4"
        );

        let err = LcsError::invalid_config("max_alignments must be positive");
        assert_eq!(
            err.to_string(),
            "invalid configuration: max_alignments must be positive"
        );

        let err = LcsError::OracleInputTooLong { len: 30, max: 24 };
        assert!(err.to_string().contains("30 tokens"));
    }
}
