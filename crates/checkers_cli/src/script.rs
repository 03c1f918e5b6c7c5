//! Scripted games for the `replay` command
//!
//! A script is a TOML file:
//!
//! ```toml
//! turn = "white"
//!
//! [rules]
//! mustCapture = true
//!
//! [[moves]]
//! side = "white"
//! from = { r = 5, c = 0 }
//! to = { r = 4, c = 1 }
//! ```
//!
//! Every key is optional. `start` takes a board diagram in the same format
//! as [`Board::from_diagram`]; without it the game begins from the standard
//! position.

use checkers_core::{Board, GameState, Move, ParseBoardError, RuleConfig, Side, Square};
use checkers_table::{Seat, Table, TableError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read script {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid script: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid start position: {0}")]
    Board(#[from] ParseBoardError),

    #[error("move {number} ({side} {mv}) was rejected")]
    Rejected {
        /// 1-based position in the `moves` list
        number: usize,
        side: Side,
        mv: Move,
        #[source]
        source: TableError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptMove {
    pub side: Side,
    pub from: Square,
    pub to: Square,
}

impl ScriptMove {
    pub fn as_move(self) -> Move {
        Move::new(self.from, self.to)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ReplayScript {
    #[serde(default)]
    pub rules: RuleConfig,
    /// Board diagram; the standard position when absent
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default = "white")]
    pub turn: Side,
    #[serde(default)]
    pub moves: Vec<ScriptMove>,
}

fn white() -> Side {
    Side::White
}

impl ReplayScript {
    pub fn from_toml_str(text: &str) -> Result<Self, ScriptError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn initial_state(&self) -> Result<GameState, ScriptError> {
        let board = match &self.start {
            Some(diagram) => Board::from_diagram(diagram)?,
            None => Board::initial(),
        };
        Ok(GameState::with_board(board, self.turn, self.rules))
    }

    /// Play every move through a fresh table, stopping at the first
    /// rejection. The table is returned so the caller can inspect or
    /// serialize the final snapshot.
    pub fn replay(&self) -> Result<Table, ScriptError> {
        let table = Table::with_state(Seat::Player(Side::White), self.initial_state()?);

        for (i, step) in self.moves.iter().enumerate() {
            let mv = step.as_move();
            debug!(number = i + 1, side = %step.side, %mv, "replaying");
            table
                .submit_move(Seat::Player(step.side), mv)
                .map_err(|source| ScriptError::Rejected {
                    number: i + 1,
                    side: step.side,
                    mv,
                    source,
                })?;
        }
        Ok(table)
    }
}

#[cfg(test)]
#[path = "script_tests.rs"]
mod script_tests;
