//! Board coordinates and direction vectors.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Width and height of the board.
pub const BOARD_SIZE: i8 = 8;

/// A coordinate on the board, or a direction vector between two coordinates.
///
/// `x` is the file (0 = a, 7 = h) and `y` is the row counted from the top of
/// the board: y = 0 is Black's back rank (rank 8), y = 7 is White's back rank
/// (rank 1). The same type doubles as a step vector for move generation,
/// which is why the components are signed.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: i8,
    y: i8,
}

impl Position {
    /// Number of squares on the board.
    pub const COUNT: usize = 64;

    /// Sentinel for "no position".
    pub const NULL: Position = Position { x: -1, y: -1 };

    /// Create a position (or vector) from its components.
    #[inline]
    pub const fn new(x: i8, y: i8) -> Position {
        Position { x, y }
    }

    /// Create a position from a row-major square index (`x + 8 * y`).
    #[inline]
    pub const fn from_index(index: usize) -> Option<Position> {
        if index < Self::COUNT {
            Some(Position {
                x: (index % 8) as i8,
                y: (index / 8) as i8,
            })
        } else {
            None
        }
    }

    /// Parse algebraic notation (e.g. `"e2"`) into a position.
    pub fn from_algebraic(s: &str) -> Option<Position> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let (file, rank) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }

        Some(Position::new((file - b'a') as i8, BOARD_SIZE - (rank - b'0') as i8))
    }

    /// The file component.
    #[inline]
    pub const fn x(self) -> i8 {
        self.x
    }

    /// The row component (0 = top, Black's back rank).
    #[inline]
    pub const fn y(self) -> i8 {
        self.y
    }

    /// Return `true` for the null sentinel.
    #[inline]
    pub const fn is_null(self) -> bool {
        self.x == -1 && self.y == -1
    }

    /// Return `true` if both components lie in `[0, 8)`.
    #[inline]
    pub const fn in_bounds(self) -> bool {
        self.x >= 0 && self.x < BOARD_SIZE && self.y >= 0 && self.y < BOARD_SIZE
    }

    /// Return `true` if this vector has Manhattan length 1.
    ///
    /// Pawn pushes are orthogonal steps, pawn captures are not.
    #[inline]
    pub const fn is_orthogonal(self) -> bool {
        self.x.abs() + self.y.abs() == 1
    }

    /// Row-major square index (`x + 8 * y`).
    ///
    /// # Panics
    ///
    /// Debug-asserts that the position is on the board.
    #[inline]
    pub const fn index(self) -> usize {
        debug_assert!(self.in_bounds());
        self.x as usize + self.y as usize * BOARD_SIZE as usize
    }

    /// Iterate over all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..Self::COUNT).filter_map(Position::from_index)
    }
}

impl Add for Position {
    type Output = Position;

    #[inline]
    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position {
    type Output = Position;

    #[inline]
    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i8> for Position {
    type Output = Position;

    #[inline]
    fn mul(self, rhs: i8) -> Position {
        Position::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Position {
    type Output = Position;

    #[inline]
    fn neg(self) -> Position {
        Position::new(-self.x, -self.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.in_bounds() {
            return write!(f, "-");
        }
        let file = (b'a' + self.x as u8) as char;
        write!(f, "{}{}", file, BOARD_SIZE - self.y)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.in_bounds() {
            write!(f, "Position({self})")
        } else {
            write!(f, "Position({}, {})", self.x, self.y)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Position;

    #[test]
    fn index_roundtrip() {
        for pos in Position::all() {
            assert_eq!(Position::from_index(pos.index()), Some(pos));
        }
        assert_eq!(Position::all().count(), 64);
        assert!(Position::from_index(64).is_none());
    }

    #[test]
    fn row_major_layout() {
        assert_eq!(Position::new(0, 0).index(), 0);
        assert_eq!(Position::new(7, 0).index(), 7);
        assert_eq!(Position::new(0, 1).index(), 8);
        assert_eq!(Position::new(4, 7).index(), 60);
    }

    #[test]
    fn algebraic_notation() {
        assert_eq!(Position::from_algebraic("e2"), Some(Position::new(4, 6)));
        assert_eq!(Position::from_algebraic("a8"), Some(Position::new(0, 0)));
        assert_eq!(Position::from_algebraic("h1"), Some(Position::new(7, 7)));
        assert_eq!(format!("{}", Position::new(4, 4)), "e4");
        assert!(Position::from_algebraic("i1").is_none());
        assert!(Position::from_algebraic("a9").is_none());
        assert!(Position::from_algebraic("e").is_none());
    }

    #[test]
    fn null_sentinel() {
        assert!(Position::NULL.is_null());
        assert!(!Position::NULL.in_bounds());
        assert!(!Position::new(0, 0).is_null());
        assert_eq!(format!("{}", Position::NULL), "-");
        assert_eq!(format!("{:?}", Position::NULL), "Position(-1, -1)");
    }

    #[test]
    fn arithmetic() {
        let a = Position::new(2, 3);
        let b = Position::new(1, -1);
        assert_eq!(a + b, Position::new(3, 2));
        assert_eq!(a - b, Position::new(1, 4));
        assert_eq!(b * 3, Position::new(3, -3));
        assert_eq!(-b, Position::new(-1, 1));
    }

    #[test]
    fn orthogonal_predicate() {
        assert!(Position::new(0, 1).is_orthogonal());
        assert!(Position::new(-1, 0).is_orthogonal());
        assert!(!Position::new(1, 1).is_orthogonal());
        assert!(!Position::new(0, 2).is_orthogonal());
        assert!(!Position::new(0, 0).is_orthogonal());
    }

    #[test]
    fn bounds() {
        assert!(Position::new(0, 7).in_bounds());
        assert!(!Position::new(8, 0).in_bounds());
        assert!(!Position::new(0, -1).in_bounds());
    }
}
