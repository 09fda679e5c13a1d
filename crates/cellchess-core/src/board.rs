//! The board: a fixed grid of cells plus the arena of pieces occupying them.

use std::fmt;

use tracing::{debug, trace, warn};

use crate::bounds::Bounds;
use crate::cell::Cell;
use crate::color::Color;
use crate::coord::Coord;
use crate::error::BoardError;
use crate::movegen;
use crate::piece::{Piece, PieceId};
use crate::piece_kind::PieceKind;

/// Back-row layout from the a-file to the h-file.
const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// A chess board.
///
/// Cells are allocated once, row-major from `(row_min, col_min)`, and never
/// resized. Each cell stores a [`PieceId`] into `pieces`; each live piece
/// stores the coordinate of the cell holding it. A captured piece's slot is
/// cleared and its id never reused.
#[derive(Clone)]
pub struct Board {
    bounds: Bounds,
    cells: Vec<Cell>,
    pieces: Vec<Option<Piece>>,
}

impl Board {
    /// Return an empty standard board.
    pub fn empty() -> Board {
        Board::with_bounds(Bounds::STANDARD)
    }

    /// Return an empty board covering `bounds`.
    pub fn with_bounds(bounds: Bounds) -> Board {
        Board {
            bounds,
            cells: bounds.coords().map(Cell::at).collect(),
            pieces: Vec::new(),
        }
    }

    /// Return a standard board in the starting position.
    ///
    /// The layout is statically valid; a failed placement is logged and
    /// skipped rather than aborting the build.
    pub fn filled() -> Board {
        let mut board = Board::empty();
        let bounds = board.bounds;

        for colour in Color::ALL {
            let back = bounds.back_row(colour);
            for (offset, &kind) in BACK_ROW.iter().enumerate() {
                board.setup(kind, colour, back, bounds.col_min() + offset as i8);
            }
            let pawns = bounds.pawn_row(colour);
            for col in bounds.col_min()..=bounds.col_max() {
                board.setup(PieceKind::Pawn, colour, pawns, col);
            }
        }

        board
    }

    fn setup(&mut self, kind: PieceKind, colour: Color, row: i8, col: i8) {
        let placed = self
            .bounds
            .coord(row, col)
            .and_then(|coord| self.place(kind, colour, coord));
        if let Err(err) = placed {
            warn!(%err, ?kind, ?colour, "skipping piece during setup");
        }
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    fn slot(&self, coord: Coord) -> Option<usize> {
        self.bounds.index(coord)
    }

    /// Return the cell at `(row, col)`, or `None` off the board.
    pub fn cell_at(&self, row: i8, col: i8) -> Option<&Cell> {
        let coord = self.bounds.coord(row, col).ok()?;
        self.cell(coord)
    }

    /// Return the cell at `coord`, or `None` if this board does not cover it.
    #[inline]
    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.slot(coord).map(|i| &self.cells[i])
    }

    /// Iterate over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Return the id of the piece on `coord`, if any.
    #[inline]
    pub fn piece_at(&self, coord: Coord) -> Option<PieceId> {
        self.cell(coord)?.piece()
    }

    /// Return the live piece behind `id`. Captured pieces return `None`.
    #[inline]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())?.as_ref()
    }

    #[inline]
    fn piece_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.get_mut(id.index())?.as_mut()
    }

    /// Iterate over every live piece.
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|piece| (PieceId::new(i), piece)))
    }

    /// Return the color of the piece at `(row, col)`, or `None` if the cell
    /// is empty or off the board.
    pub fn colour_at(&self, row: i8, col: i8) -> Option<Color> {
        let id = self.cell_at(row, col)?.piece()?;
        self.piece(id).map(Piece::colour)
    }

    /// Return the color of the piece on `coord`, if any.
    pub fn colour_at_coord(&self, coord: Coord) -> Option<Color> {
        self.colour_at(coord.row(), coord.col())
    }

    /// Create a piece bound to the cell at `coord`.
    ///
    /// An opposite-colored occupant is captured. Fails without touching the
    /// board if the cell lies outside or holds a piece of the same color.
    pub fn place(&mut self, kind: PieceKind, colour: Color, coord: Coord) -> Result<PieceId, BoardError> {
        let slot = self.slot(coord).ok_or(BoardError::OutOfBounds {
            row: coord.row(),
            col: coord.col(),
        })?;
        if self.colour_at_coord(coord) == Some(colour) {
            return Err(BoardError::IllegalPlacement { coord });
        }

        let id = PieceId::new(self.pieces.len());
        self.pieces.push(Some(Piece::new(kind, colour, coord)));
        if !self.occupy(slot, Some(id)) {
            self.pieces.pop();
            return Err(BoardError::IllegalPlacement { coord });
        }
        Ok(id)
    }

    /// Replace the occupant of the cell at `coord`.
    ///
    /// Follows [`Cell::set_piece`]: returns `false` and changes nothing when
    /// `new` would overwrite a distinct friendly piece. A displaced occupant
    /// is removed from the board; a piece set here from another cell leaves
    /// that cell empty.
    pub fn set_piece(&mut self, coord: Coord, new: Option<PieceId>) -> bool {
        let Some(slot) = self.slot(coord) else {
            return false;
        };
        if new.is_some_and(|id| self.piece(id).is_none()) {
            return false;
        }

        let previous = new.and_then(|id| self.piece(id)).map(Piece::coord);
        if !self.occupy(slot, new) {
            return false;
        }

        if let (Some(id), Some(from)) = (new, previous) {
            if from != coord {
                if let Some(old) = self.slot(from) {
                    self.cells[old].set_piece(None, |_| None);
                }
                if let Some(piece) = self.piece_mut(id) {
                    piece.reposition(coord);
                }
            }
        }
        true
    }

    /// Apply the cell replacement rule, removing whatever piece gets displaced.
    fn occupy(&mut self, slot: usize, new: Option<PieceId>) -> bool {
        let displaced = self.cells[slot].piece().filter(|&old| Some(old) != new);
        let pieces = &self.pieces;
        let colour_of = |id: PieceId| pieces.get(id.index())?.as_ref().map(Piece::colour);
        if !self.cells[slot].set_piece(new, colour_of) {
            return false;
        }
        if let Some(old) = displaced {
            if let Some(captured) = self.pieces[old.index()].take() {
                debug!(piece = %captured, at = %captured.coord(), "piece removed");
            }
        }
        true
    }

    /// Return `true` if every cell strictly between `a` and `b` on one row is empty.
    fn path_clear(&self, a: Coord, b: Coord) -> bool {
        let (lo, hi) = (a.col().min(b.col()), a.col().max(b.col()));
        (lo + 1..hi).all(|col| self.colour_at(a.row(), col).is_none())
    }

    /// Set the selection flag of the cell at `coord`, if it holds a piece of `colour`.
    pub fn set_state(&mut self, coord: Coord, colour: Color, flag: bool) -> bool {
        let occupant = self.colour_at_coord(coord);
        match self.slot(coord) {
            Some(slot) => self.cells[slot].set_state(occupant, colour, flag),
            None => false,
        }
    }

    /// Compute every destination of piece `id` and store it as the cache.
    ///
    /// Always recomputes. Returns an empty list for captured pieces.
    pub fn all_moves(&mut self, id: PieceId) -> Vec<Coord> {
        let moves = match self.piece(id) {
            Some(piece) => movegen::generate(self, id, piece),
            None => return Vec::new(),
        };
        if let Some(piece) = self.piece_mut(id) {
            debug!(piece = %piece, from = %piece.coord(), count = moves.len(), "move cache filled");
            piece.set_moves(moves.clone());
        }
        moves
    }

    /// Return `true` if piece `id` may move to `dest`.
    ///
    /// Fills the cache on first use and otherwise trusts it as-is, even if
    /// the board changed since; only a successful [`move_to`](Self::move_to)
    /// of this piece invalidates it.
    pub fn can_move_to(&mut self, id: PieceId, dest: Coord) -> bool {
        let Some(piece) = self.piece(id) else {
            return false;
        };
        if piece.coord() == dest {
            return false;
        }
        if piece.moves().is_none() {
            self.all_moves(id);
        }
        self.piece(id)
            .and_then(Piece::moves)
            .is_some_and(|moves| moves.contains(&dest))
    }

    /// Move piece `id` to `dest` if [`can_move_to`](Self::can_move_to) allows it.
    ///
    /// On success the source is vacated, an enemy on `dest` is captured, the
    /// piece's history grows by one and its cache is cleared. Castling also
    /// moves the rook; a pawn reaching the far row becomes a queen. On
    /// failure nothing changes.
    pub fn move_to(&mut self, id: PieceId, dest: Coord) -> bool {
        if !self.can_move_to(id, dest) {
            return false;
        }
        let Some(piece) = self.piece(id) else {
            return false;
        };
        let (from, kind, colour) = (piece.coord(), piece.kind(), piece.colour());
        let (Some(src), Some(dst)) = (self.slot(from), self.slot(dest)) else {
            return false;
        };

        let castle = match kind {
            PieceKind::King if (dest.col() - from.col()).abs() == 2 => {
                // The cache may predate the current position.
                let Some((rook, rook_from, rook_to)) = movegen::castling_rook(self, from, dest) else {
                    return false;
                };
                if !self.path_clear(from, rook_from) {
                    return false;
                }
                Some((rook, rook_from, rook_to))
            }
            _ => None,
        };

        if !self.occupy(dst, Some(id)) {
            return false;
        }
        self.cells[src].set_piece(None, |_| None);
        if let Some(piece) = self.piece_mut(id) {
            piece.relocate(dest);
        }

        if let Some((rook, rook_from, rook_to)) = castle {
            if let (Some(a), Some(b)) = (self.slot(rook_from), self.slot(rook_to)) {
                self.cells[a].set_piece(None, |_| None);
                self.occupy(b, Some(rook));
                if let Some(piece) = self.piece_mut(rook) {
                    piece.relocate(rook_to);
                }
                debug!(from = %rook_from, to = %rook_to, "castling rook moved");
            }
        }

        if kind == PieceKind::Pawn && dest.row() == self.bounds.promotion_row(colour) {
            if let Some(piece) = self.piece_mut(id) {
                piece.promote(PieceKind::Queen);
            }
            debug!(at = %dest, "pawn promoted");
        }

        debug!(%from, to = %dest, ?kind, ?colour, "move executed");
        true
    }

    /// Return `true` if any piece other than `exclude`, standing anywhere but
    /// on `coord`, can move to `coord`. Friend or foe alike.
    ///
    /// Each call generates fresh move lists; piece caches are neither read
    /// nor written. King safety does not go through this query: kings filter
    /// their steps with the colour-aware [`is_attacked_by`](Self::is_attacked_by).
    pub fn is_under_attack(&self, coord: Coord, exclude: Option<PieceId>) -> bool {
        for (id, piece) in self.pieces() {
            if Some(id) == exclude || piece.coord() == coord {
                continue;
            }
            if movegen::generate(self, id, piece).contains(&coord) {
                trace!(cell = %coord, by = %piece, from = %piece.coord(), "cell under attack");
                return true;
            }
        }
        false
    }

    /// Return `true` if a piece of color `by`, other than `exclude`, attacks `coord`.
    ///
    /// Attacks cover defended friendly pieces, pawn diagonals whether or not
    /// anything stands there, and king steps without the safety filter.
    /// Rays pass through the cell of `exclude`.
    pub fn is_attacked_by(&self, coord: Coord, by: Color, exclude: Option<PieceId>) -> bool {
        let transparent = exclude.and_then(|id| self.piece(id)).map(Piece::coord);
        self.pieces()
            .filter(|&(id, piece)| piece.colour() == by && Some(id) != exclude && piece.coord() != coord)
            .any(|(_, piece)| movegen::threats(self, piece, transparent).contains(&coord))
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self.placement())
    }
}

/// Wrapper for printing a board as a grid of two-character piece codes,
/// top row first. A debugging aid with no stable format.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        let bounds = board.bounds;
        for row in (bounds.row_min()..=bounds.row_max()).rev() {
            write!(f, "{}  ", row + 1)?;
            for col in bounds.col_min()..=bounds.col_max() {
                let code = board
                    .cell_at(row, col)
                    .and_then(Cell::piece)
                    .and_then(|id| board.piece(id))
                    .map_or_else(|| "--".to_string(), ToString::to_string);
                if col < bounds.col_max() {
                    write!(f, "{code} ")?;
                } else {
                    write!(f, "{code}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for col in bounds.col_min()..=bounds.col_max() {
            write!(f, " {} ", (b'a' + col as u8) as char)?;
        }
        Ok(())
    }
}
