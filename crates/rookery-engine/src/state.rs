//! Coarse game state handed to the search.

use std::fmt;

use rookery_core::{Board, Side};

/// What the caller knows about the position before asking for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChessState {
    /// First move pair of a fresh game; searches play the scripted king-pawn push.
    Opening,
    /// Nothing special.
    #[default]
    Default,
    /// White is in check.
    WhiteCheck,
    /// Black is in check.
    BlackCheck,
}

impl ChessState {
    /// The check state for `side`.
    #[inline]
    pub const fn check_for(side: Side) -> ChessState {
        match side {
            Side::White => ChessState::WhiteCheck,
            Side::Black => ChessState::BlackCheck,
        }
    }

    /// Return `true` if this state says `side` is in check.
    #[inline]
    pub const fn is_check_for(self, side: Side) -> bool {
        matches!(
            (self, side),
            (ChessState::WhiteCheck, Side::White) | (ChessState::BlackCheck, Side::Black)
        )
    }

    /// Derive the state for `side` about to move on `board`.
    ///
    /// `opening` selects [`ChessState::Opening`] when the side is not in check.
    pub fn detect(board: &Board, side: Side, opening: bool) -> ChessState {
        if board.detect_check(side) {
            ChessState::check_for(side)
        } else if opening {
            ChessState::Opening
        } else {
            ChessState::Default
        }
    }
}

impl fmt::Display for ChessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChessState::Opening => "opening",
            ChessState::Default => "default",
            ChessState::WhiteCheck => "white-check",
            ChessState::BlackCheck => "black-check",
        };
        f.write_str(name)
    }
}
