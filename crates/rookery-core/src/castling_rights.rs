//! Per-side castling rights stored as a 2-bit field within a `u8`.

use std::fmt;

use crate::side::Side;

/// Castling rights: bit 0 = White may castle, bit 1 = Black may castle.
///
/// Rights are tracked per side rather than per wing. Whether a particular
/// wing is available is decided at generation time by looking for the rook
/// on its home corner.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// Neither side may castle.
    pub const NONE: CastlingRights = CastlingRights(0);
    /// Both sides may castle.
    pub const ALL: CastlingRights = CastlingRights(0b11);
    /// Only White may castle.
    pub const WHITE: CastlingRights = CastlingRights(0b01);
    /// Only Black may castle.
    pub const BLACK: CastlingRights = CastlingRights(0b10);

    /// Build rights from the persisted `[white, black]` flag pair.
    #[inline]
    pub const fn from_flags(flags: [bool; 2]) -> CastlingRights {
        CastlingRights(flags[0] as u8 | (flags[1] as u8) << 1)
    }

    /// Return the persisted `[white, black]` flag pair.
    #[inline]
    pub const fn flags(self) -> [bool; 2] {
        [self.has(Side::White), self.has(Side::Black)]
    }

    /// Return `true` if `side` may still castle.
    #[inline]
    pub const fn has(self, side: Side) -> bool {
        self.0 & Self::bit(side) != 0
    }

    /// Return new rights with `side`'s flag set to `value`.
    #[inline]
    pub const fn with(self, side: Side, value: bool) -> CastlingRights {
        if value {
            CastlingRights(self.0 | Self::bit(side))
        } else {
            CastlingRights(self.0 & !Self::bit(side))
        }
    }

    /// Return the raw bits.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    const fn bit(side: Side) -> u8 {
        1 << side.index()
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        CastlingRights::ALL
    }
}

impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return write!(f, "-");
        }
        if self.has(Side::White) {
            write!(f, "W")?;
        }
        if self.has(Side::Black) {
            write!(f, "B")?;
        }
        Ok(())
    }
}

impl fmt::Debug for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastlingRights({self})")
    }
}
