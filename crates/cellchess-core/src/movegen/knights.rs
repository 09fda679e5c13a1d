//! Knight move generation.

use crate::board::Board;
use crate::coord::Coord;
use crate::piece::{Piece, PieceId};

use super::{Movement, leap_threats, leaps};

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];

pub(super) struct Knight;

impl Movement for Knight {
    fn moves(board: &Board, _id: PieceId, piece: &Piece) -> Vec<Coord> {
        leaps(board, piece.coord(), piece.colour(), &KNIGHT_DELTAS)
    }

    fn threats(board: &Board, piece: &Piece, _transparent: Option<Coord>) -> Vec<Coord> {
        leap_threats(board, piece.coord(), &KNIGHT_DELTAS)
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::color::Color;
    use crate::coord::Coord;
    use crate::piece_kind::PieceKind;

    fn sq(s: &str) -> Coord {
        Coord::from_algebraic(s).unwrap()
    }

    #[test]
    fn corner_knight_has_two_moves() {
        let mut board = Board::empty();
        let knight = board.place(PieceKind::Knight, Color::White, sq("a1")).unwrap();
        let mut moves = board.all_moves(knight);
        moves.sort_by_key(|c| (c.row(), c.col()));
        assert_eq!(moves, vec![sq("c2"), sq("b3")]);
    }

    #[test]
    fn centre_knight_has_eight_moves() {
        let mut board = Board::empty();
        let knight = board.place(PieceKind::Knight, Color::Black, sq("d4")).unwrap();
        assert_eq!(board.all_moves(knight).len(), 8);
    }

    #[test]
    fn knight_skips_friendly_and_captures_enemy() {
        let mut board = Board::filled();
        let knight = board.piece_at(sq("b1")).unwrap();
        let moves = board.all_moves(knight);
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&sq("a3")));
        assert!(moves.contains(&sq("c3")));
        assert!(!moves.contains(&sq("d2")));

        let mut board = Board::empty();
        let knight = board.place(PieceKind::Knight, Color::White, sq("d4")).unwrap();
        board.place(PieceKind::Pawn, Color::White, sq("e6")).unwrap();
        board.place(PieceKind::Pawn, Color::Black, sq("c6")).unwrap();
        let moves = board.all_moves(knight);
        assert_eq!(moves.len(), 7);
        assert!(moves.contains(&sq("c6")));
        assert!(!moves.contains(&sq("e6")));
    }
}
