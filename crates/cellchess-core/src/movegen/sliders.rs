//! Sliding piece (bishop, rook, queen) move generation.

use crate::board::Board;
use crate::coord::Coord;
use crate::piece::{Piece, PieceId};

use super::{Movement, moves_in_dir, threat_ray};

const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(super) struct Bishop;
pub(super) struct Rook;
pub(super) struct Queen;

fn slide(board: &Board, piece: &Piece, dirs: &[(i8, i8)]) -> Vec<Coord> {
    dirs.iter()
        .flat_map(|&(dr, dc)| moves_in_dir(board, piece.coord(), piece.colour(), dr, dc))
        .collect()
}

fn slide_threats(board: &Board, piece: &Piece, dirs: &[(i8, i8)], transparent: Option<Coord>) -> Vec<Coord> {
    dirs.iter()
        .flat_map(|&dir| threat_ray(board, piece.coord(), dir, transparent))
        .collect()
}

impl Movement for Bishop {
    fn moves(board: &Board, _id: PieceId, piece: &Piece) -> Vec<Coord> {
        slide(board, piece, &DIAGONAL)
    }

    fn threats(board: &Board, piece: &Piece, transparent: Option<Coord>) -> Vec<Coord> {
        slide_threats(board, piece, &DIAGONAL, transparent)
    }
}

impl Movement for Rook {
    fn moves(board: &Board, _id: PieceId, piece: &Piece) -> Vec<Coord> {
        slide(board, piece, &ORTHOGONAL)
    }

    fn threats(board: &Board, piece: &Piece, transparent: Option<Coord>) -> Vec<Coord> {
        slide_threats(board, piece, &ORTHOGONAL, transparent)
    }
}

impl Movement for Queen {
    fn moves(board: &Board, _id: PieceId, piece: &Piece) -> Vec<Coord> {
        let mut moves = slide(board, piece, &ORTHOGONAL);
        moves.extend(slide(board, piece, &DIAGONAL));
        moves
    }

    fn threats(board: &Board, piece: &Piece, transparent: Option<Coord>) -> Vec<Coord> {
        let mut cells = slide_threats(board, piece, &ORTHOGONAL, transparent);
        cells.extend(slide_threats(board, piece, &DIAGONAL, transparent));
        cells
    }
}
