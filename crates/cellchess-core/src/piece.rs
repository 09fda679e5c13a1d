//! Pieces stored in a board's piece arena.

use std::fmt;

use crate::color::Color;
use crate::coord::Coord;
use crate::piece_kind::PieceKind;

/// Handle to a slot in a [`Board`](crate::Board)'s piece arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(usize);

impl PieceId {
    #[inline]
    pub(crate) const fn new(index: usize) -> PieceId {
        PieceId(index)
    }

    /// Return the arena slot index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A piece on the board.
///
/// `coord` always names the cell whose occupant is this piece. `moves` is
/// filled lazily by the board and cleared only when the piece moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    colour: Color,
    coord: Coord,
    moves: Option<Vec<Coord>>,
    history: Vec<Coord>,
}

impl Piece {
    pub(crate) fn new(kind: PieceKind, colour: Color, coord: Coord) -> Piece {
        Piece {
            kind,
            colour,
            coord,
            moves: None,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// The piece's color, fixed at construction.
    #[inline]
    pub fn colour(&self) -> Color {
        self.colour
    }

    /// The cell this piece currently occupies.
    #[inline]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// The cached destination list, or `None` if it has not been computed
    /// since construction or the last move.
    #[inline]
    pub fn moves(&self) -> Option<&[Coord]> {
        self.moves.as_deref()
    }

    /// Destinations of every move this piece has made, oldest first.
    #[inline]
    pub fn history(&self) -> &[Coord] {
        &self.history
    }

    #[inline]
    pub fn has_moved(&self) -> bool {
        !self.history.is_empty()
    }

    pub(crate) fn set_moves(&mut self, moves: Vec<Coord>) {
        self.moves = Some(moves);
    }

    /// Rebind to `dest` after a move and drop the cached destinations.
    pub(crate) fn relocate(&mut self, dest: Coord) {
        self.coord = dest;
        self.history.push(dest);
        self.moves = None;
    }

    /// Rebind without recording a move, as when the board repositions a piece directly.
    pub(crate) fn reposition(&mut self, dest: Coord) {
        self.coord = dest;
        self.moves = None;
    }

    pub(crate) fn promote(&mut self, kind: PieceKind) {
        self.kind = kind;
        self.moves = None;
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.colour, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::Piece;
    use crate::color::Color;
    use crate::coord::Coord;
    use crate::piece_kind::PieceKind;

    fn sq(s: &str) -> Coord {
        Coord::from_algebraic(s).unwrap()
    }

    #[test]
    fn new_piece_has_no_cache() {
        let piece = Piece::new(PieceKind::Rook, Color::Black, sq("a1"));
        assert_eq!(piece.moves(), None);
        assert!(piece.history().is_empty());
        assert!(!piece.has_moved());
    }

    #[test]
    fn relocate_records_history_and_clears_cache() {
        let mut piece = Piece::new(PieceKind::Rook, Color::White, sq("a1"));
        piece.set_moves(vec![sq("a2"), sq("a3")]);
        piece.relocate(sq("a3"));
        assert_eq!(piece.coord(), sq("a3"));
        assert_eq!(piece.history(), &[sq("a3")]);
        assert_eq!(piece.moves(), None);
    }

    #[test]
    fn reposition_keeps_history() {
        let mut piece = Piece::new(PieceKind::Knight, Color::White, sq("b1"));
        piece.reposition(sq("c3"));
        assert_eq!(piece.coord(), sq("c3"));
        assert!(!piece.has_moved());
    }

    #[test]
    fn display_two_char_code() {
        assert_eq!(
            format!("{}", Piece::new(PieceKind::Pawn, Color::White, sq("e2"))),
            "wP"
        );
        assert_eq!(
            format!("{}", Piece::new(PieceKind::King, Color::Black, sq("e8"))),
            "bK"
        );
    }
}
