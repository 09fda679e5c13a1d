//! Per-piece move generation.
//!
//! Every kind implements [`Movement`]; [`generate`] and [`threats`]
//! dispatch on [`PieceKind`]. Sliders are built from [`moves_in_dir`], the
//! other kinds from fixed offset tables.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::color::Color;
use crate::coord::Coord;
use crate::piece::{Piece, PieceId};
use crate::piece_kind::PieceKind;

use self::king::King;
use self::knights::Knight;
use self::pawns::Pawn;
use self::sliders::{Bishop, Queen, Rook};

pub(crate) use self::king::castling_rook;

/// Movement rules for one piece kind.
pub(crate) trait Movement {
    /// Every cell the piece `id` may move to. Never includes its own cell or
    /// a cell held by a friendly piece.
    fn moves(board: &Board, id: PieceId, piece: &Piece) -> Vec<Coord>;

    /// Every cell the piece attacks, friendly-occupied or not. Rays pass
    /// through `transparent` as if it were empty.
    fn threats(board: &Board, piece: &Piece, transparent: Option<Coord>) -> Vec<Coord>;
}

/// Generate the destinations of piece `id`.
pub(crate) fn generate(board: &Board, id: PieceId, piece: &Piece) -> Vec<Coord> {
    match piece.kind() {
        PieceKind::Pawn => Pawn::moves(board, id, piece),
        PieceKind::Knight => Knight::moves(board, id, piece),
        PieceKind::Bishop => Bishop::moves(board, id, piece),
        PieceKind::Rook => Rook::moves(board, id, piece),
        PieceKind::Queen => Queen::moves(board, id, piece),
        PieceKind::King => King::moves(board, id, piece),
    }
}

/// Generate the cells `piece` attacks.
pub(crate) fn threats(board: &Board, piece: &Piece, transparent: Option<Coord>) -> Vec<Coord> {
    match piece.kind() {
        PieceKind::Pawn => Pawn::threats(board, piece, transparent),
        PieceKind::Knight => Knight::threats(board, piece, transparent),
        PieceKind::Bishop => Bishop::threats(board, piece, transparent),
        PieceKind::Rook => Rook::threats(board, piece, transparent),
        PieceKind::Queen => Queen::threats(board, piece, transparent),
        PieceKind::King => King::threats(board, piece, transparent),
    }
}

/// Walk one ray from `from`, stepping by `(row_step, col_step)`.
///
/// Empty cells are collected and the walk continues. A cell held by the
/// opposite color is collected and ends the walk; a friendly one ends it
/// without being collected. The result is ordered outward and is empty if
/// the first step leaves the board or the step is zero.
pub fn moves_in_dir(board: &Board, from: Coord, colour: Color, row_step: i8, col_step: i8) -> Vec<Coord> {
    let mut cells = Vec::new();
    if row_step == 0 && col_step == 0 {
        return cells;
    }

    let mut current = from;
    while let Some(next) = current.offset(row_step, col_step, board.bounds()) {
        match board.colour_at_coord(next) {
            None => cells.push(next),
            Some(other) if other != colour => {
                cells.push(next);
                break;
            }
            Some(_) => break,
        }
        current = next;
    }
    cells
}

/// Walk one ray collecting attacked cells; the first occupied cell of either
/// color is included and stops the walk, unless it is `transparent`.
fn threat_ray(
    board: &Board,
    from: Coord,
    (row_step, col_step): (i8, i8),
    transparent: Option<Coord>,
) -> Vec<Coord> {
    let mut cells = Vec::new();
    let mut current = from;
    while let Some(next) = current.offset(row_step, col_step, board.bounds()) {
        cells.push(next);
        if Some(next) != transparent && board.colour_at_coord(next).is_some() {
            break;
        }
        current = next;
    }
    cells
}

/// In-bounds offset targets not held by a piece of `colour`.
fn leaps(board: &Board, from: Coord, colour: Color, deltas: &[(i8, i8)]) -> Vec<Coord> {
    leap_threats(board, from, deltas)
        .into_iter()
        .filter(|&dest| board.colour_at_coord(dest) != Some(colour))
        .collect()
}

/// In-bounds offset targets regardless of occupancy.
fn leap_threats(board: &Board, from: Coord, deltas: &[(i8, i8)]) -> Vec<Coord> {
    deltas
        .iter()
        .filter_map(|&(dr, dc)| from.offset(dr, dc, board.bounds()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{moves_in_dir, threat_ray};
    use crate::board::Board;
    use crate::color::Color;
    use crate::coord::Coord;
    use crate::piece_kind::PieceKind;

    fn sq(s: &str) -> Coord {
        Coord::from_algebraic(s).unwrap()
    }

    #[test]
    fn rook_rays_from_corner() {
        let mut board = Board::empty();
        board.place(PieceKind::Rook, Color::Black, sq("a1")).unwrap();

        let up = moves_in_dir(&board, sq("a1"), Color::Black, 1, 0);
        assert_eq!(up.len(), 7);
        assert!(up.iter().all(|c| c.col() == 0));
        assert!(!up.contains(&sq("a1")));

        let right = moves_in_dir(&board, sq("a1"), Color::Black, 0, 1);
        assert_eq!(right.len(), 7);
        assert!(right.iter().all(|c| c.row() == 0));

        assert!(moves_in_dir(&board, sq("a1"), Color::Black, -1, 0).is_empty());
        assert!(moves_in_dir(&board, sq("a1"), Color::Black, 0, -1).is_empty());
    }

    #[test]
    fn ray_is_ordered_outward() {
        let board = Board::empty();
        let ray = moves_in_dir(&board, sq("d4"), Color::White, 1, 1);
        assert_eq!(ray, vec![sq("e5"), sq("f6"), sq("g7"), sq("h8")]);
    }

    #[test]
    fn zero_step_yields_nothing() {
        let board = Board::empty();
        assert!(moves_in_dir(&board, sq("d4"), Color::White, 0, 0).is_empty());
    }

    #[test]
    fn ray_stops_at_blockers() {
        let mut board = Board::empty();
        board.place(PieceKind::Pawn, Color::White, sq("d6")).unwrap();
        board.place(PieceKind::Pawn, Color::Black, sq("g4")).unwrap();

        let up = moves_in_dir(&board, sq("d4"), Color::White, 1, 0);
        assert_eq!(up, vec![sq("d5")]);

        let right = moves_in_dir(&board, sq("d4"), Color::White, 0, 1);
        assert_eq!(right, vec![sq("e4"), sq("f4"), sq("g4")]);
    }

    #[test]
    fn threat_ray_includes_friendly_blocker() {
        let mut board = Board::empty();
        board.place(PieceKind::Pawn, Color::White, sq("d6")).unwrap();
        let ray = threat_ray(&board, sq("d4"), (1, 0), None);
        assert_eq!(ray, vec![sq("d5"), sq("d6")]);
    }

    #[test]
    fn threat_ray_passes_transparent_cell() {
        let mut board = Board::empty();
        board.place(PieceKind::King, Color::White, sq("d6")).unwrap();
        let ray = threat_ray(&board, sq("d4"), (1, 0), Some(sq("d6")));
        assert_eq!(ray, vec![sq("d5"), sq("d6"), sq("d7"), sq("d8")]);
    }
}
