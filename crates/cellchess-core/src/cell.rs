//! A single board slot.

use std::fmt;

use crate::bounds::Bounds;
use crate::color::Color;
use crate::coord::Coord;
use crate::error::BoardError;
use crate::piece::PieceId;

/// One cell of the board: a fixed coordinate, at most one occupant, and a
/// selection flag used for highlighting.
///
/// Occupants are handles into the owning [`Board`](crate::Board)'s piece
/// arena. Equality compares coordinates only.
#[derive(Debug, Clone)]
pub struct Cell {
    coord: Coord,
    occupant: Option<PieceId>,
    active: bool,
}

impl Cell {
    /// Create an empty cell, failing if `(row, col)` lies outside `bounds`.
    pub fn new(row: i8, col: i8, bounds: Bounds) -> Result<Cell, BoardError> {
        bounds.coord(row, col).map(Cell::at)
    }

    #[inline]
    pub(crate) fn at(coord: Coord) -> Cell {
        Cell {
            coord,
            occupant: None,
            active: false,
        }
    }

    #[inline]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    #[inline]
    pub fn row(&self) -> i8 {
        self.coord.row()
    }

    #[inline]
    pub fn col(&self) -> i8 {
        self.coord.col()
    }

    /// Return the current occupant, if any.
    #[inline]
    pub fn piece(&self) -> Option<PieceId> {
        self.occupant
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    /// Return the selection flag.
    #[inline]
    pub fn state(&self) -> bool {
        self.active
    }

    /// Replace the occupant.
    ///
    /// Vacating, filling an empty cell, re-setting the current occupant and
    /// capturing an opposite-colored occupant all succeed. Overwriting a
    /// distinct piece of the same color is rejected and leaves the cell
    /// untouched. `colour_of` resolves a handle to its piece's color.
    pub fn set_piece(
        &mut self,
        new: Option<PieceId>,
        colour_of: impl Fn(PieceId) -> Option<Color>,
    ) -> bool {
        if let (Some(current), Some(incoming)) = (self.occupant, new) {
            let current_colour = colour_of(current);
            if current != incoming && current_colour.is_some() && current_colour == colour_of(incoming) {
                return false;
            }
        }
        self.occupant = new;
        true
    }

    /// Set the selection flag if the occupant has `colour`.
    pub(crate) fn set_state(&mut self, occupant_colour: Option<Color>, colour: Color, flag: bool) -> bool {
        if occupant_colour != Some(colour) {
            return false;
        }
        self.active = flag;
        true
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for Cell {}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.coord)
    }
}
