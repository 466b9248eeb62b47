//! Persisted game state.

use rookery_core::{Board, BoardError, Position, Side};

/// Everything needed to resume a game.
///
/// `pieces` holds signed piece codes in row-major order (`x + 8 * y`):
/// 0 for an empty square, the kind ordinal for a piece, negated for Black.
/// `castling` is `[white_can_castle, black_can_castle]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedGame {
    /// Side to move.
    pub current_side: Side,
    /// Board layout.
    pub pieces: [i32; Position::COUNT],
    /// Castling rights.
    pub castling: [bool; 2],
}

impl SavedGame {
    /// Capture `board` with `current_side` to move.
    pub fn capture(board: &Board, current_side: Side) -> SavedGame {
        SavedGame {
            current_side,
            pieces: board.pieces_data(),
            castling: board.castling_flags(),
        }
    }

    /// Rebuild the board.
    pub fn to_board(&self) -> Result<Board, BoardError> {
        let mut board = Board::from_pieces_data(&self.pieces)?;
        board.set_castling_flags(self.castling);
        Ok(board)
    }
}
