//! Piece-placement parsing and serialization for [`Board`].
//!
//! Only the first field of a FEN string is read; side to move, castling
//! rights and counters are ignored since the board does not track them.

use std::str::FromStr;

use crate::board::Board;
use crate::bounds::Bounds;
use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

/// Piece placement of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl FromStr for Board {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Board, FenError> {
        let placement = fen.split_whitespace().next().ok_or(FenError::Empty)?;
        let bounds = Bounds::STANDARD;

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != bounds.rows() {
            return Err(FenError::WrongRankCount {
                expected: bounds.rows(),
                found: ranks.len(),
            });
        }

        let mut board = Board::with_bounds(bounds);
        for (rank_index, rank_str) in ranks.iter().enumerate() {
            // Ranks are listed from the top row down.
            let row = bounds.row_max() - rank_index as i8;
            let mut length = 0usize;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(FenError::InvalidPieceChar { character: c });
                    }
                    length += digit as usize;
                    continue;
                }

                let kind = PieceKind::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
                let colour = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if length >= bounds.cols() {
                    return Err(FenError::BadRankLength {
                        rank_index,
                        length: length + 1,
                        expected: bounds.cols(),
                    });
                }
                let coord = bounds.coord(row, bounds.col_min() + length as i8)?;
                board.place(kind, colour, coord)?;
                length += 1;
            }

            if length != bounds.cols() {
                return Err(FenError::BadRankLength {
                    rank_index,
                    length,
                    expected: bounds.cols(),
                });
            }
        }

        Ok(board)
    }
}

impl Board {
    /// Serialize the occupancy as a FEN piece-placement field.
    pub fn placement(&self) -> String {
        let bounds = self.bounds();
        let mut out = String::new();

        for row in (bounds.row_min()..=bounds.row_max()).rev() {
            let mut empty = 0;
            for col in bounds.col_min()..=bounds.col_max() {
                let piece = self
                    .cell_at(row, col)
                    .and_then(|cell| cell.piece())
                    .and_then(|id| self.piece(id));
                match piece {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(fen_char(piece));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if row > bounds.row_min() {
                out.push('/');
            }
        }

        out
    }
}

fn fen_char(piece: &Piece) -> char {
    let c = piece.kind().fen_char();
    match piece.colour() {
        Color::White => c.to_ascii_uppercase(),
        Color::Black => c,
    }
}
