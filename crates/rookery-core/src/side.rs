//! The two sides of a game.

use std::fmt;
use std::ops::Not;

/// A side: White or Black.
///
/// White starts on the bottom of the board (y = 6 and 7) and moves toward
/// y = 0; Black starts on top (y = 0 and 1) and moves toward y = 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Side {
    White = 0,
    Black = 1,
}

impl Side {
    /// Total number of sides.
    pub const COUNT: usize = 2;

    /// All sides in index order.
    pub const ALL: [Side; 2] = [Side::White, Side::Black];

    /// Return the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposite side.
    #[inline]
    pub const fn flip(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Return +1 for White and -1 for Black.
    ///
    /// Direction tables are authored from White's perspective and multiplied
    /// by this sign for the side actually moving.
    #[inline]
    pub const fn sign(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    /// The rank holding this side's king and rooks at the start of a game.
    #[inline]
    pub const fn home_rank(self) -> i8 {
        match self {
            Side::White => 7,
            Side::Black => 0,
        }
    }

    /// The rank holding this side's pawns at the start of a game.
    #[inline]
    pub const fn pawn_rank(self) -> i8 {
        match self {
            Side::White => 6,
            Side::Black => 1,
        }
    }

    /// The rank on which this side's pawns promote.
    #[inline]
    pub const fn promotion_rank(self) -> i8 {
        self.flip().home_rank()
    }
}

impl Not for Side {
    type Output = Side;

    #[inline]
    fn not(self) -> Side {
        self.flip()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "white"),
            Side::Black => write!(f, "black"),
        }
    }
}
