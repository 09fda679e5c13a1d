//! King move and castling generation.

use crate::board::Board;
use crate::coord::Coord;
use crate::piece::{Piece, PieceId};
use crate::piece_kind::PieceKind;

use super::{Movement, leap_threats, leaps};

const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

pub(super) struct King;

impl Movement for King {
    fn moves(board: &Board, id: PieceId, piece: &Piece) -> Vec<Coord> {
        let enemy = !piece.colour();

        // The king is transparent to enemy rays so it cannot retreat along a
        // checking line.
        let mut moves: Vec<Coord> = leaps(board, piece.coord(), piece.colour(), &KING_DELTAS)
            .into_iter()
            .filter(|&dest| !board.is_attacked_by(dest, enemy, Some(id)))
            .collect();

        if !piece.has_moved() && !board.is_attacked_by(piece.coord(), enemy, None) {
            for side in [-1, 1] {
                if let Some(dest) = castle_dest(board, id, piece, side) {
                    moves.push(dest);
                }
            }
        }

        moves
    }

    fn threats(board: &Board, piece: &Piece, _transparent: Option<Coord>) -> Vec<Coord> {
        leap_threats(board, piece.coord(), &KING_DELTAS)
    }
}

/// Destination of the king when castling toward `side` (-1 or 1), if the
/// rook is in place, the path is clear and no crossed cell is attacked.
fn castle_dest(board: &Board, id: PieceId, king: &Piece, side: i8) -> Option<Coord> {
    let bounds = board.bounds();
    let from = king.coord();
    let dest = from.offset(0, 2 * side, bounds)?;
    let (_, rook_from, rook_to) = castling_rook(board, from, dest)?;

    let mut col = from.col() + side;
    while col != rook_from.col() {
        if board.colour_at(from.row(), col).is_some() {
            return None;
        }
        col += side;
    }

    let enemy = !king.colour();
    if board.is_attacked_by(rook_to, enemy, Some(id)) || board.is_attacked_by(dest, enemy, Some(id)) {
        return None;
    }
    Some(dest)
}

/// The rook that accompanies a king moving from `king_from` to `king_to`
/// when castling: its id, the corner it stands on, and the cell it lands on.
///
/// Returns `None` unless the king steps exactly two columns along its back
/// row and an unmoved friendly rook sits in that side's corner.
pub(crate) fn castling_rook(board: &Board, king_from: Coord, king_to: Coord) -> Option<(PieceId, Coord, Coord)> {
    let bounds = board.bounds();
    let delta = king_to.col() - king_from.col();
    if king_to.row() != king_from.row() || delta.abs() != 2 {
        return None;
    }
    let side = delta.signum();

    let king = board.piece(board.piece_at(king_from)?)?;
    if king_from.row() != bounds.back_row(king.colour()) {
        return None;
    }
    let corner_col = if side < 0 { bounds.col_min() } else { bounds.col_max() };
    let corner = bounds.coord(king_from.row(), corner_col).ok()?;
    if (corner_col - king_from.col()).abs() < 3 {
        return None;
    }

    let rook_id = board.piece_at(corner)?;
    let rook = board.piece(rook_id)?;
    if rook.kind() != PieceKind::Rook || rook.colour() != king.colour() || rook.has_moved() {
        return None;
    }

    let rook_to = king_from.offset(0, side, bounds)?;
    Some((rook_id, corner, rook_to))
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

    fn sorted(mut cells: Vec<Coord>) -> Vec<Coord> {
        cells.sort_by_key(|c| (c.row(), c.col()));
        cells
    }

    #[test]
    fn lone_king_steps_everywhere() {
        let mut board = Board::empty();
        let king = board.place(PieceKind::King, Color::White, sq("d4")).unwrap();
        assert_eq!(board.all_moves(king).len(), 8);
    }

    #[test]
    fn king_avoids_attacked_cells() {
        let mut board = Board::empty();
        let king = board.place(PieceKind::King, Color::White, sq("e1")).unwrap();
        board.place(PieceKind::Rook, Color::Black, sq("d8")).unwrap();
        assert_eq!(
            sorted(board.all_moves(king)),
            vec![sq("f1"), sq("e2"), sq("f2")]
        );
    }

    #[test]
    fn king_cannot_retreat_along_check_line() {
        let mut board = Board::empty();
        let king = board.place(PieceKind::King, Color::White, sq("e4")).unwrap();
        board.place(PieceKind::Rook, Color::Black, sq("e8")).unwrap();
        let moves = board.all_moves(king);
        assert_eq!(moves.len(), 6);
        assert!(!moves.contains(&sq("e3")));
        assert!(!moves.contains(&sq("e5")));
    }

    #[test]
    fn king_cannot_capture_defended_piece() {
        let mut board = Board::empty();
        let king = board.place(PieceKind::King, Color::White, sq("e1")).unwrap();
        board.place(PieceKind::Queen, Color::Black, sq("e2")).unwrap();
        board.place(PieceKind::Rook, Color::Black, sq("e8")).unwrap();
        assert!(board.all_moves(king).is_empty());
    }

    #[test]
    fn king_captures_undefended_piece() {
        let mut board = Board::empty();
        let king = board.place(PieceKind::King, Color::White, sq("e1")).unwrap();
        board.place(PieceKind::Knight, Color::Black, sq("e2")).unwrap();
        assert!(board.all_moves(king).contains(&sq("e2")));
    }

    #[test]
    fn kings_keep_apart() {
        let mut board = Board::empty();
        let white = board.place(PieceKind::King, Color::White, sq("e4")).unwrap();
        board.place(PieceKind::King, Color::Black, sq("e6")).unwrap();
        let moves = board.all_moves(white);
        assert_eq!(moves.len(), 5);
        for name in ["d5", "e5", "f5"] {
            assert!(!moves.contains(&sq(name)), "{name} touches the other king");
        }
    }

    #[test]
    fn castling_both_sides() {
        let mut board = Board::empty();
        let king = board.place(PieceKind::King, Color::White, sq("e1")).unwrap();
        board.place(PieceKind::Rook, Color::White, sq("a1")).unwrap();
        board.place(PieceKind::Rook, Color::White, sq("h1")).unwrap();
        let moves = board.all_moves(king);
        assert_eq!(moves.len(), 7);
        assert!(moves.contains(&sq("c1")));
        assert!(moves.contains(&sq("g1")));
    }

    #[test]
    fn castling_blocked_by_attack_on_crossed_cell() {
        let mut board = Board::empty();
        let king = board.place(PieceKind::King, Color::White, sq("e1")).unwrap();
        board.place(PieceKind::Rook, Color::White, sq("a1")).unwrap();
        board.place(PieceKind::Rook, Color::White, sq("h1")).unwrap();
        board.place(PieceKind::Rook, Color::Black, sq("f8")).unwrap();
        let moves = board.all_moves(king);
        assert!(!moves.contains(&sq("g1")));
        assert!(moves.contains(&sq("c1")));
    }

    #[test]
    fn castling_blocked_by_piece_between() {
        let mut board = Board::empty();
        let king = board.place(PieceKind::King, Color::Black, sq("e8")).unwrap();
        board.place(PieceKind::Rook, Color::Black, sq("a8")).unwrap();
        board.place(PieceKind::Knight, Color::Black, sq("b8")).unwrap();
        assert!(!board.all_moves(king).contains(&sq("c8")));
    }

    #[test]
    fn no_castling_out_of_check() {
        let mut board = Board::empty();
        let king = board.place(PieceKind::King, Color::White, sq("e1")).unwrap();
        board.place(PieceKind::Rook, Color::White, sq("h1")).unwrap();
        board.place(PieceKind::Rook, Color::Black, sq("e8")).unwrap();
        assert!(!board.all_moves(king).contains(&sq("g1")));
    }

    #[test]
    fn no_castling_after_rook_moved() {
        let mut board = Board::empty();
        let king = board.place(PieceKind::King, Color::White, sq("e1")).unwrap();
        let rook = board.place(PieceKind::Rook, Color::White, sq("h1")).unwrap();
        assert!(board.move_to(rook, sq("h2")));
        assert!(board.move_to(rook, sq("h1")));
        assert!(!board.all_moves(king).contains(&sq("g1")));
    }

    #[test]
    fn no_castling_off_back_row() {
        let mut board = Board::empty();
        let king = board.place(PieceKind::King, Color::White, sq("e4")).unwrap();
        board.place(PieceKind::Rook, Color::White, sq("h4")).unwrap();
        board.place(PieceKind::Rook, Color::White, sq("a4")).unwrap();
        let moves = board.all_moves(king);
        assert!(!moves.contains(&sq("g4")));
        assert!(!moves.contains(&sq("c4")));
        assert!(!board.move_to(king, sq("g4")));
    }

    #[test]
    fn no_castling_at_start() {
        let mut board = Board::filled();
        let king = board.piece_at(sq("e1")).unwrap();
        assert!(board.all_moves(king).is_empty());
    }
}
