//! Error types for loading persisted board state.

/// Errors from decoding the persisted 64-cell board layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A cell holds a code whose magnitude is not a piece-kind ordinal.
    #[error("invalid piece code {code} at square index {index}")]
    InvalidPieceCode {
        /// Row-major index of the offending cell.
        index: usize,
        /// The code found there.
        code: i32,
    },
    /// More cells were supplied than the board has squares.
    #[error("expected at most 64 squares, found {len}")]
    TooManySquares {
        /// Number of cells supplied.
        len: usize,
    },
}
