//! Board squares addressed by row and column.

use std::fmt;

/// A square on the board, stored as `row * 8 + col`.
///
/// Row 0 is Black's home rank and row 7 is White's, independent of how a
/// front end chooses to orient the board. Column 0 is the a-file.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a row and column, returning `None` if out of range.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square(row * 8 + col))
        } else {
            None
        }
    }

    /// Create a square without bounds checking.
    ///
    /// # Panics
    ///
    /// Debug-asserts that both coordinates are below 8.
    #[inline]
    pub const fn at(row: u8, col: u8) -> Square {
        debug_assert!(row < 8 && col < 8);
        Square(row * 8 + col)
    }

    /// Parse algebraic notation (e.g. "e2" is row 6, column 4).
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let file_byte = bytes[0].to_ascii_lowercase();
        let rank_byte = bytes[1];

        if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return None;
        }

        Square::new(b'8' - rank_byte, file_byte - b'a')
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// Step by a row/column delta, returning `None` when the result leaves the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row() as i8 + d_row;
        let col = self.col() as i8 + d_col;
        if row < 0 || row > 7 || col < 0 || col > 7 {
            return None;
        }
        Some(Square(row as u8 * 8 + col as u8))
    }

    /// Iterate over all 64 squares, row 0 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col()) as char;
        let rank = (b'8' - self.row()) as char;
        write!(f, "{file}{rank}")
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {} = {})", self.row(), self.col(), self)
    }
}
