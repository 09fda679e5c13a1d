//! Board dimensions as an immutable row/column range.

use crate::color::Color;
use crate::coord::Coord;
use crate::error::BoardError;

/// Closed row and column ranges covered by a board.
///
/// Rows grow from White's side (row 0 is rank 1) and columns from the
/// a-file. Every range lies within `0..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    row_min: i8,
    row_max: i8,
    col_min: i8,
    col_max: i8,
}

impl Bounds {
    /// The standard 8x8 board.
    pub const STANDARD: Bounds = Bounds {
        row_min: 0,
        row_max: 7,
        col_min: 0,
        col_max: 7,
    };

    /// Create a bounds value, rejecting empty ranges and ranges past the 8x8 grid.
    pub fn new(row_min: i8, row_max: i8, col_min: i8, col_max: i8) -> Result<Bounds, BoardError> {
        let valid = |lo: i8, hi: i8| 0 <= lo && lo <= hi && hi <= 7;
        if !valid(row_min, row_max) || !valid(col_min, col_max) {
            return Err(BoardError::InvalidBounds {
                row_min,
                row_max,
                col_min,
                col_max,
            });
        }
        Ok(Bounds {
            row_min,
            row_max,
            col_min,
            col_max,
        })
    }

    /// Lowest row, inclusive.
    #[inline]
    pub const fn row_min(self) -> i8 {
        self.row_min
    }

    /// Highest row, inclusive.
    #[inline]
    pub const fn row_max(self) -> i8 {
        self.row_max
    }

    /// Lowest column, inclusive.
    #[inline]
    pub const fn col_min(self) -> i8 {
        self.col_min
    }

    /// Highest column, inclusive.
    #[inline]
    pub const fn col_max(self) -> i8 {
        self.col_max
    }

    /// Number of rows.
    #[inline]
    pub const fn rows(self) -> usize {
        (self.row_max - self.row_min + 1) as usize
    }

    /// Number of columns.
    #[inline]
    pub const fn cols(self) -> usize {
        (self.col_max - self.col_min + 1) as usize
    }

    /// Total number of cells.
    #[inline]
    pub const fn len(self) -> usize {
        self.rows() * self.cols()
    }

    /// Return `true` if `(row, col)` lies inside both ranges.
    #[inline]
    pub const fn contains(self, row: i8, col: i8) -> bool {
        row >= self.row_min && row <= self.row_max && col >= self.col_min && col <= self.col_max
    }

    /// Validate `(row, col)` against these bounds.
    pub fn coord(self, row: i8, col: i8) -> Result<Coord, BoardError> {
        if self.contains(row, col) {
            Ok(Coord::new_unchecked(row, col))
        } else {
            Err(BoardError::OutOfBounds { row, col })
        }
    }

    /// Row-major slot of `coord`, or `None` if it lies outside.
    #[inline]
    pub fn index(self, coord: Coord) -> Option<usize> {
        if !self.contains(coord.row(), coord.col()) {
            return None;
        }
        let row = (coord.row() - self.row_min) as usize;
        let col = (coord.col() - self.col_min) as usize;
        Some(row * self.cols() + col)
    }

    /// Every coordinate in row-major order starting at `(row_min, col_min)`.
    pub fn coords(self) -> impl Iterator<Item = Coord> {
        (self.row_min..=self.row_max).flat_map(move |row| {
            (self.col_min..=self.col_max).map(move |col| Coord::new_unchecked(row, col))
        })
    }

    /// Row holding the major pieces of `color` at the start of a game.
    #[inline]
    pub const fn back_row(self, color: Color) -> i8 {
        match color {
            Color::White => self.row_min,
            Color::Black => self.row_max,
        }
    }

    /// Row the pawns of `color` start on.
    #[inline]
    pub const fn pawn_row(self, color: Color) -> i8 {
        self.back_row(color) + color.forward()
    }

    /// Row on which a pawn of `color` promotes.
    #[inline]
    pub const fn promotion_row(self, color: Color) -> i8 {
        self.back_row(color.flip())
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::STANDARD
    }
}
