//! Move representation.

use std::fmt;

use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// A piece travelling from its current position to a target position.
///
/// Castling is encoded as the king "capturing" its own rook: the target is
/// the rook's square. Promotion is implied by a pawn reaching the far rank.
/// Neither is stored; both are derived by [`Move::is_castling`] and
/// [`Move::is_promotion`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    piece: Piece,
    current: Position,
    target: Position,
}

impl Move {
    /// "No move available".
    pub const NULL: Move = Move {
        piece: Piece::NULL,
        current: Position::NULL,
        target: Position::NULL,
    };

    /// Create a move of `piece` from `current` to `target`.
    #[inline]
    pub const fn new(piece: Piece, current: Position, target: Position) -> Move {
        Move {
            piece,
            current,
            target,
        }
    }

    /// The moving piece as it stands before the move.
    #[inline]
    pub const fn piece(self) -> Piece {
        self.piece
    }

    /// Where the piece starts.
    #[inline]
    pub const fn current(self) -> Position {
        self.current
    }

    /// Where the piece goes (the rook square for castling).
    #[inline]
    pub const fn target(self) -> Position {
        self.target
    }

    /// Return `true` for [`Move::NULL`].
    #[inline]
    pub const fn is_null(self) -> bool {
        self.piece.is_null()
    }

    /// Return `true` if this is a castling move, given the piece standing on the target square.
    #[inline]
    pub fn is_castling(self, occupant: Piece) -> bool {
        self.piece.kind() == PieceKind::King
            && occupant.kind() == PieceKind::Rook
            && occupant.side() == self.piece.side()
    }

    /// Return `true` if this is a pawn move onto the far rank.
    #[inline]
    pub fn is_promotion(self) -> bool {
        self.piece.kind() == PieceKind::Pawn
            && self.target.y() == self.piece.side().promotion_rank()
    }
}

impl Default for Move {
    fn default() -> Self {
        Move::NULL
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "0000");
        }
        write!(f, "{}{}", self.current, self.target)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({:?} {})", self.piece, self)
    }
}
