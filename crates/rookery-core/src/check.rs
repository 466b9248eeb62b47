//! Check, checkmate and stalemate detection.

use std::ops::ControlFlow;

use crate::board::Board;
use crate::chess_move::Move;
use crate::side::Side;

impl Board {
    /// Return `true` if any pseudo-legal move of the opponent targets `side`'s king.
    ///
    /// A board without `side`'s king counts as check.
    pub fn detect_check(&self, side: Side) -> bool {
        let Some(king) = self.king_position(side) else {
            return true;
        };
        self.visit_moves(!side, |mv| {
            if mv.target() == king {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .is_break()
    }

    /// Return `true` if `side` would be in check after playing `mv`.
    ///
    /// The move is made and reversed in place; the board is unchanged on return.
    pub fn detect_check_after(&mut self, side: Side, mv: Move) -> bool {
        let undo = self.make_move(mv);
        let check = self.detect_check(side);
        self.reverse_move(mv, undo);
        check
    }

    /// Return `true` if `side` has a pseudo-legal move that does not leave it in check.
    pub fn has_escape(&mut self, side: Side) -> bool {
        let moves = self.generate_moves(side);
        moves.into_iter().any(|mv| !self.detect_check_after(side, mv))
    }

    /// Return `true` if `side` is in check and no move gets it out.
    pub fn detect_checkmate(&mut self, side: Side) -> bool {
        self.detect_check(side) && !self.has_escape(side)
    }

    /// Return `true` if `side` is not in check but every move would put it there.
    pub fn detect_stalemate(&mut self, side: Side) -> bool {
        !self.detect_check(side) && !self.has_escape(side)
    }
}
