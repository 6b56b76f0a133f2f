//! Engine error types

use thiserror::Error;

/// Errors surfaced at the engine's public seams.
///
/// Time-budget exhaustion is deliberately absent: the search recovers from
/// it internally by falling back to the deepest completed pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Board snapshot with malformed dimensions
    #[error("invalid board snapshot: expected {expected}x{expected}, got {rows} rows with up to {cols} columns")]
    InvalidBoard {
        expected: usize,
        rows: usize,
        cols: usize,
    },

    /// Caller precondition violation: no empty cell to move to
    #[error("no legal moves available")]
    NoLegalMoves,

    /// Difficulty name that does not resolve to a configured tier
    #[error("unknown difficulty profile: {0:?}")]
    UnknownProfile(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::InvalidBoard {
            expected: 15,
            rows: 14,
            cols: 15,
        };
        assert!(err.to_string().contains("15x15"));
        assert!(err.to_string().contains("14 rows"));

        assert_eq!(
            EngineError::NoLegalMoves.to_string(),
            "no legal moves available"
        );

        let err = EngineError::UnknownProfile("nightmare".into());
        assert!(err.to_string().contains("nightmare"));
    }
}
