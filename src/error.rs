//! Error types for the engine.
//!
//! Move errors are contract violations: callers validate cells before applying
//! a move, so seeing one means a bug upstream. Coordinate errors come from
//! human input and are recoverable by asking again.

/// A move that the board refused to apply. The board is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cell ({row}, {col}) is outside a {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },

    #[error("the game is already over")]
    GameOver,
}

/// Failure to decode a cell identifier such as `"B3"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoordError {
    #[error("empty cell identifier")]
    Empty,

    #[error("cell identifier {0:?} has no column letters")]
    MissingColumn(String),

    #[error("cell identifier {0:?} has no row number")]
    MissingRow(String),

    #[error("cell identifier {0:?} has an invalid row number")]
    InvalidRow(String),

    #[error("cell {id:?} is outside a {size}x{size} board")]
    OutOfRange { id: String, size: usize },
}

/// Errors surfaced by players, the evaluator and the turn loop.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("illegal move: {0}")]
    Move(#[from] MoveError),

    #[error("no empty cells left to evaluate")]
    NoCandidates,

    #[error("move input closed before a move was entered")]
    InputClosed,

    #[error("playouts per candidate must be at least 1")]
    NoPlayouts,

    #[error("failed to build search thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::Occupied { row: 2, col: 3 };
        assert_eq!(err.to_string(), "cell (2, 3) is already occupied");

        let err = MoveError::OutOfBounds { row: 7, col: 0, size: 7 };
        assert_eq!(err.to_string(), "cell (7, 0) is outside a 7x7 board");
    }

    #[test]
    fn test_engine_error_from_move_error() {
        let err: EngineError = MoveError::GameOver.into();
        assert_eq!(err.to_string(), "illegal move: the game is already over");
    }

    #[test]
    fn test_coord_error_display() {
        let err = CoordError::OutOfRange {
            id: "H1".to_string(),
            size: 7,
        };
        assert_eq!(err.to_string(), "cell \"H1\" is outside a 7x7 board");
    }
}
