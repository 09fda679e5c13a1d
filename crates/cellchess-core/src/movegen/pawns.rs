//! Pawn move generation.

use crate::board::Board;
use crate::coord::Coord;
use crate::piece::{Piece, PieceId};

use super::Movement;

pub(super) struct Pawn;

impl Movement for Pawn {
    fn moves(board: &Board, _id: PieceId, piece: &Piece) -> Vec<Coord> {
        let bounds = board.bounds();
        let from = piece.coord();
        let colour = piece.colour();
        let forward = colour.forward();
        let mut moves = Vec::new();

        // Pushes only onto empty cells; the double step needs both cells empty.
        if let Some(one) = from.offset(forward, 0, bounds) {
            if board.colour_at_coord(one).is_none() {
                moves.push(one);
                if from.row() == bounds.pawn_row(colour) {
                    if let Some(two) = one.offset(forward, 0, bounds) {
                        if board.colour_at_coord(two).is_none() {
                            moves.push(two);
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            if let Some(diag) = from.offset(forward, dc, bounds) {
                if board.colour_at_coord(diag) == Some(!colour) {
                    moves.push(diag);
                }
            }
        }

        moves
    }

    fn threats(board: &Board, piece: &Piece, _transparent: Option<Coord>) -> Vec<Coord> {
        let forward = piece.colour().forward();
        [-1, 1]
            .into_iter()
            .filter_map(|dc| piece.coord().offset(forward, dc, board.bounds()))
            .collect()
    }
}
