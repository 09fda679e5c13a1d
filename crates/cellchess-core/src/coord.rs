//! Board coordinates as validated (row, column) pairs.

use std::fmt;

use crate::bounds::Bounds;
use crate::error::BoardError;

/// A cell coordinate. Row 0 is rank 1, column 0 is the a-file.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    row: i8,
    col: i8,
}

impl Coord {
    /// Create a coordinate on the standard board.
    pub fn new(row: i8, col: i8) -> Result<Coord, BoardError> {
        Bounds::STANDARD.coord(row, col)
    }

    /// Create a coordinate without bounds checking.
    #[inline]
    pub(crate) const fn new_unchecked(row: i8, col: i8) -> Coord {
        debug_assert!(row >= 0 && row < 8 && col >= 0 && col < 8);
        Coord { row, col }
    }

    /// Parse an algebraic notation string (e.g. "e4") into a coordinate.
    pub fn from_algebraic(s: &str) -> Option<Coord> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let file_byte = bytes[0];
        let rank_byte = bytes[1];

        if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return None;
        }

        Some(Coord::new_unchecked(
            (rank_byte - b'1') as i8,
            (file_byte - b'a') as i8,
        ))
    }

    #[inline]
    pub const fn row(self) -> i8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> i8 {
        self.col
    }

    /// Step by `(row_step, col_step)`, returning `None` if the result leaves `bounds`.
    #[inline]
    pub fn offset(self, row_step: i8, col_step: i8, bounds: Bounds) -> Option<Coord> {
        let row = self.row.checked_add(row_step)?;
        let col = self.col.checked_add(col_step)?;
        bounds.coord(row, col).ok()
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col as u8) as char;
        write!(f, "{}{}", file, self.row + 1)
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({})", self)
    }
}
