//! Cell-based chess board: occupancy, per-piece move generation with a lazy
//! move cache, and attack queries for king safety.

mod board;
mod bounds;
mod cell;
mod color;
mod coord;
mod error;
mod fen;
pub mod movegen;
mod piece;
mod piece_kind;

pub use board::{Board, PrettyBoard};
pub use bounds::Bounds;
pub use cell::Cell;
pub use color::Color;
pub use coord::Coord;
pub use error::{BoardError, FenError};
pub use fen::STARTING_PLACEMENT;
pub use movegen::moves_in_dir;
pub use piece::{Piece, PieceId};
pub use piece_kind::PieceKind;
