//! Piece kinds and their static movement and material tables.

use std::fmt;

use crate::position::Position;

/// The kind of a piece, without side information.
///
/// `Null` marks an empty square. The discriminants are the ordinals used in
/// the persisted board layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Null = 0,
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

// Direction tables are written from White's perspective: "forward" is -y.

const ORTHOGONAL: [Position; 4] = [
    Position::new(0, -1),
    Position::new(0, 1),
    Position::new(-1, 0),
    Position::new(1, 0),
];

const DIAGONAL: [Position; 4] = [
    Position::new(-1, -1),
    Position::new(1, 1),
    Position::new(1, -1),
    Position::new(-1, 1),
];

const OMNIDIRECTIONAL: [Position; 8] = [
    ORTHOGONAL[0],
    ORTHOGONAL[1],
    ORTHOGONAL[2],
    ORTHOGONAL[3],
    DIAGONAL[0],
    DIAGONAL[1],
    DIAGONAL[2],
    DIAGONAL[3],
];

const KNIGHT: [Position; 8] = [
    Position::new(1, -2),
    Position::new(-1, -2),
    Position::new(-2, 1),
    Position::new(-2, -1),
    Position::new(1, 2),
    Position::new(-1, 2),
    Position::new(2, 1),
    Position::new(2, -1),
];

/// Push first, then the two capture diagonals.
const PAWN: [Position; 3] = [
    Position::new(0, -1),
    Position::new(-1, -1),
    Position::new(1, -1),
];

impl PieceKind {
    /// Number of real piece kinds (excluding `Null`).
    pub const COUNT: usize = 6;

    /// All real piece kinds in ordinal order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Return the ordinal (0 for `Null`, 1..=6 for real pieces).
    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Convert an ordinal back into a kind.
    #[inline]
    pub const fn from_ordinal(ordinal: u8) -> Option<PieceKind> {
        match ordinal {
            0 => Some(PieceKind::Null),
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Knight),
            3 => Some(PieceKind::Bishop),
            4 => Some(PieceKind::Rook),
            5 => Some(PieceKind::Queen),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Movement directions from White's perspective.
    #[inline]
    pub const fn directions(self) -> &'static [Position] {
        match self {
            PieceKind::Null => &[],
            PieceKind::Pawn => &PAWN,
            PieceKind::Knight => &KNIGHT,
            PieceKind::Bishop => &DIAGONAL,
            PieceKind::Rook => &ORTHOGONAL,
            PieceKind::Queen | PieceKind::King => &OMNIDIRECTIONAL,
        }
    }

    /// Return `true` for pieces that take at most one step per direction.
    #[inline]
    pub const fn is_range_limited(self) -> bool {
        matches!(self, PieceKind::Pawn | PieceKind::Knight | PieceKind::King)
    }

    /// Material value.
    #[inline]
    pub const fn score(self) -> i32 {
        match self {
            PieceKind::Null => 0,
            PieceKind::Pawn => 1,
            PieceKind::Knight | PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 1000,
        }
    }

    /// Return `true` for the two kinds whose movement affects castling rights.
    #[inline]
    pub const fn can_castle(self) -> bool {
        matches!(self, PieceKind::Rook | PieceKind::King)
    }

    /// Lowercase letter for this kind (`.` for `Null`).
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Null => '.',
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
