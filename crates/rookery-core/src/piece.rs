//! Sided chess piece, packed into a single signed byte.

use std::fmt;

use crate::piece_kind::PieceKind;
use crate::side::Side;

/// A piece with its side, or the null piece marking an empty square.
///
/// Stored as a signed byte: the magnitude is the [`PieceKind`] ordinal and
/// the sign is the side (positive = White). Zero is the null piece. The
/// encoding is the one used by the persisted board layout; everything else
/// goes through [`Piece::new`], [`Piece::kind`] and [`Piece::side`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Piece(i8);

impl Piece {
    /// The empty square.
    pub const NULL: Piece = Piece(0);

    pub const WHITE_PAWN: Piece = Piece::new(PieceKind::Pawn, Side::White);
    pub const WHITE_KNIGHT: Piece = Piece::new(PieceKind::Knight, Side::White);
    pub const WHITE_BISHOP: Piece = Piece::new(PieceKind::Bishop, Side::White);
    pub const WHITE_ROOK: Piece = Piece::new(PieceKind::Rook, Side::White);
    pub const WHITE_QUEEN: Piece = Piece::new(PieceKind::Queen, Side::White);
    pub const WHITE_KING: Piece = Piece::new(PieceKind::King, Side::White);

    pub const BLACK_PAWN: Piece = Piece::new(PieceKind::Pawn, Side::Black);
    pub const BLACK_KNIGHT: Piece = Piece::new(PieceKind::Knight, Side::Black);
    pub const BLACK_BISHOP: Piece = Piece::new(PieceKind::Bishop, Side::Black);
    pub const BLACK_ROOK: Piece = Piece::new(PieceKind::Rook, Side::Black);
    pub const BLACK_QUEEN: Piece = Piece::new(PieceKind::Queen, Side::Black);
    pub const BLACK_KING: Piece = Piece::new(PieceKind::King, Side::Black);

    /// Create a piece from a kind and a side. `PieceKind::Null` yields [`Piece::NULL`].
    #[inline]
    pub const fn new(kind: PieceKind, side: Side) -> Piece {
        Piece(kind.ordinal() as i8 * side.sign())
    }

    /// Decode a persisted piece code, returning `None` if the magnitude is not a kind ordinal.
    #[inline]
    pub const fn from_code(code: i32) -> Option<Piece> {
        if code < -6 || code > 6 {
            return None;
        }
        Some(Piece(code as i8))
    }

    /// The persisted piece code (0 = empty, ±1..=6, positive = White).
    #[inline]
    pub const fn code(self) -> i8 {
        self.0
    }

    /// Return the kind of this piece.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        match PieceKind::from_ordinal(self.0.unsigned_abs()) {
            Some(kind) => kind,
            None => PieceKind::Null,
        }
    }

    /// Return the side of this piece. The null piece reports White.
    #[inline]
    pub const fn side(self) -> Side {
        if self.0 < 0 { Side::Black } else { Side::White }
    }

    /// Return `true` for the empty-square marker.
    #[inline]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Return `true` if this is a real piece belonging to `side`.
    #[inline]
    pub const fn is_side(self, side: Side) -> bool {
        !self.is_null() && self.side() as u8 == side as u8
    }

    /// Material value of this piece.
    #[inline]
    pub const fn score(self) -> i32 {
        self.kind().score()
    }

    /// Letter for this piece: uppercase for White, lowercase for Black, `.` for null.
    pub fn letter(self) -> char {
        let c = self.kind().letter();
        match self.side() {
            Side::White => c.to_ascii_uppercase(),
            Side::Black => c,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "--");
        }
        let prefix = match self.side() {
            Side::White => 'W',
            Side::Black => 'B',
        };
        write!(f, "{}{}", prefix, self.kind().letter().to_ascii_uppercase())
    }
}
