//! Game state transitions.
//!
//! A `GameState` is an immutable snapshot. Every accepted move produces a
//! new snapshot; rejected submissions leave the old one untouched. The
//! engine never trusts a caller's claim that a move is legal or that it is a
//! capture: both are re-derived from the board.

use serde::{Deserialize, Serialize};

use crate::{
    board::Board,
    error::MoveError,
    movegen::{any_capture_available, has_any_move, legal_captures, legal_targets},
    rules::RuleConfig,
    types::*,
};

/// Audit record of what an accepted move actually did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveResult {
    pub from: Square,
    pub to: Square,
    /// Square of the enemy piece removed by this move, if it was a capture.
    pub captured_square: Option<Square>,
    /// The moved piece was forfeited for skipping a mandatory capture.
    pub penalty_removed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub board: Board,
    pub turn: Side,
    pub winner: Option<Side>,
    pub last_move: Option<MoveResult>,
    pub rules: RuleConfig,
}

impl GameState {
    /// Fresh game: standard setup, White to move.
    pub fn new(rules: RuleConfig) -> Self {
        Self::with_board(Board::initial(), Side::White, rules)
    }

    /// Game starting from an arbitrary position. The winner is not evaluated.
    pub fn with_board(board: Board, turn: Side, rules: RuleConfig) -> Self {
        Self {
            board,
            turn,
            winner: None,
            last_move: None,
            rules,
        }
    }

    /// Same game under a replacement rule set.
    ///
    /// A live game is re-evaluated, since the side to move may have no
    /// legal move under the new rules. A decided game stays decided.
    pub fn with_rules(&self, rules: RuleConfig) -> Self {
        let mut next = Self {
            rules,
            ..self.clone()
        };
        if next.winner.is_none() {
            next.winner = evaluate_winner(&next);
        }
        next
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Destinations for the piece on `from` under the current rules.
    pub fn legal_targets(&self, from: Square) -> Vec<Square> {
        legal_targets(&self.board, from, &self.rules)
    }

    /// Check a submission from `side` and apply it.
    ///
    /// Performs every precondition of [`GameState::apply_move`] and returns
    /// the first violation as an error; `self` is never modified.
    pub fn try_apply(&self, side: Side, mv: Move) -> Result<GameState, MoveError> {
        if let Some(winner) = self.winner {
            return Err(MoveError::GameOver { winner });
        }
        if side != self.turn {
            return Err(MoveError::NotYourTurn {
                side,
                turn: self.turn,
            });
        }
        for sq in [mv.from, mv.to] {
            if !sq.in_bounds() {
                return Err(MoveError::OutOfBounds(sq));
            }
        }
        let piece = self
            .board
            .get(mv.from)
            .ok_or(MoveError::EmptySource(mv.from))?;
        if piece.side != side {
            return Err(MoveError::NotYourPiece(mv.from));
        }
        if !self.board.is_empty(mv.to) {
            return Err(MoveError::DestinationOccupied(mv.to));
        }
        if !self.legal_targets(mv.from).contains(&mv.to) {
            return Err(MoveError::IllegalMove {
                from: mv.from,
                to: mv.to,
            });
        }
        Ok(self.apply_move(mv))
    }

    /// Apply a move whose destination is among the legal targets of its
    /// source square, and evaluate the winner of the resulting position.
    ///
    /// A move on a decided game or from an empty square returns an
    /// unchanged copy. Use [`GameState::try_apply`] for unvalidated input.
    pub fn apply_move(&self, mv: Move) -> GameState {
        if self.is_over() {
            return self.clone();
        }
        let Some(piece) = self.board.get(mv.from) else {
            return self.clone();
        };

        let mut board = self.board;
        board.clear(mv.from);

        let capture = legal_captures(&self.board, mv.from, &self.rules)
            .into_iter()
            .find(|c| c.to == mv.to);
        if let Some(c) = capture {
            board.clear(c.over);
        }

        let placed = if piece.rank == Rank::Man && mv.to.row == piece.side.promotion_row() {
            Piece::king(piece.side)
        } else {
            piece
        };
        board.set(mv.to, Some(placed));

        // Availability is judged on the position before the move.
        let penalty_removed = self.rules.capture_penalty_active()
            && capture.is_none()
            && any_capture_available(&self.board, piece.side, &self.rules);
        if penalty_removed {
            board.clear(mv.to);
        }

        let mut next = GameState {
            board,
            turn: self.turn.other(),
            winner: None,
            last_move: Some(MoveResult {
                from: mv.from,
                to: mv.to,
                captured_square: capture.map(|c| c.over),
                penalty_removed,
            }),
            rules: self.rules,
        };
        next.winner = evaluate_winner(&next);
        next
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(RuleConfig::default())
    }
}

/// Winner of the position, if the game is decided.
///
/// A side without pieces loses; so does the side to move when none of its
/// pieces has a capture or a simple move. There are no draws.
pub fn evaluate_winner(state: &GameState) -> Option<Side> {
    if state.board.piece_count(Side::Black) == 0 {
        return Some(Side::White);
    }
    if state.board.piece_count(Side::White) == 0 {
        return Some(Side::Black);
    }
    if !has_any_move(&state.board, state.turn, &state.rules) {
        return Some(state.turn.other());
    }
    None
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
