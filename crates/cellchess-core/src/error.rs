//! Error types for board construction, piece placement and placement parsing.

use crate::coord::Coord;

/// Errors from coordinate validation and piece placement.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A row or column falls outside the board.
    #[error("cell ({row}, {col}) is outside the board")]
    OutOfBounds {
        /// Requested row.
        row: i8,
        /// Requested column.
        col: i8,
    },
    /// The target cell already holds a different piece of the same color.
    #[error("cannot place a piece on {coord}: occupied by a friendly piece")]
    IllegalPlacement {
        /// The rejected cell.
        coord: Coord,
    },
    /// A bounds value that is empty or reaches past the 8x8 grid.
    #[error("invalid bounds: rows {row_min}..={row_max}, cols {col_min}..={col_max}")]
    InvalidBounds {
        /// Requested lowest row.
        row_min: i8,
        /// Requested highest row.
        row_max: i8,
        /// Requested lowest column.
        col_min: i8,
        /// Requested highest column.
        col_max: i8,
    },
}

/// Errors that occur when parsing a piece-placement string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The input has no placement field at all.
    #[error("empty placement string")]
    Empty,
    /// The placement does not describe one rank per board row.
    #[error("expected {expected} ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of rows on the board.
        expected: usize,
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer squares than the board has columns.
    #[error("rank {rank_index} describes {length} squares, expected {expected}")]
    BadRankLength {
        /// Zero-based rank index, counted from the top of the board.
        rank_index: usize,
        /// Number of squares described.
        length: usize,
        /// Number of columns on the board.
        expected: usize,
    },
    /// An unrecognized character appeared in the placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// A piece could not be placed on the parsed board.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying placement error.
        #[from]
        source: BoardError,
    },
}
