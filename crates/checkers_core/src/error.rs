//! Error types for the rules engine.
//!
//! The engine core (move generation, application, evaluation) is infallible.
//! Errors only arise at the edges: parsing boards and rule files, and the
//! checked move entry point that rejects out-of-contract submissions.

use std::path::PathBuf;
use thiserror::Error;

use crate::types::{Side, Square};

/// Errors from parsing a board diagram or a grid of integer cell codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBoardError {
    #[error("expected 8 rows, found {0}")]
    RowCount(usize),

    #[error("row {row} has {len} squares, expected 8")]
    RowLength { row: usize, len: usize },

    #[error("unknown symbol '{symbol}' at row {row}, column {col}")]
    UnknownSymbol { row: usize, col: usize, symbol: char },

    #[error("unknown cell code {code} at row {row}, column {col}")]
    UnknownCode { row: usize, col: usize, code: i8 },
}

/// Errors from loading or writing a rule configuration.
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("failed to read rules file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid rules: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize rules: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Reasons a submitted move is rejected. A rejected move never changes state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("game is over, {winner} won")]
    GameOver { winner: Side },

    #[error("{side} cannot move, it is {turn}'s turn")]
    NotYourTurn { side: Side, turn: Side },

    #[error("square {0} is off the board")]
    OutOfBounds(Square),

    #[error("no piece on {0}")]
    EmptySource(Square),

    #[error("piece on {0} belongs to the opponent")]
    NotYourPiece(Square),

    #[error("destination {0} is occupied")]
    DestinationOccupied(Square),

    #[error("{from} to {to} is not a legal move")]
    IllegalMove { from: Square, to: Square },
}
