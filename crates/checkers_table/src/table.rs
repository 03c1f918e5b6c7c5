//! The authoritative owner of one game instance.
//!
//! All mutations (moves, rule changes, resets) go through one mutex, so they
//! are applied one at a time against the latest snapshot. Readers get an
//! `Arc<GameState>` they can keep using without holding any lock; a later
//! mutation installs a new snapshot instead of touching theirs.

use checkers_core::{GameState, Move, MoveError, RuleConfig, Square};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::{Seat, TableConfig};

#[derive(Debug, Error)]
pub enum TableError {
    #[error("observers cannot move pieces")]
    Spectator,

    #[error("{seat} may not change the rules")]
    NotRulesOwner { seat: Seat },

    #[error(transparent)]
    Move(#[from] MoveError),

    #[error("failed to read table config {}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid table config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

#[derive(Debug)]
pub struct Table {
    rules_owner: Seat,
    state: Mutex<Arc<GameState>>,
}

impl Table {
    pub fn new(config: TableConfig) -> Self {
        Self::with_state(config.rules_owner, GameState::new(config.rules))
    }

    /// Table resuming from an existing snapshot.
    pub fn with_state(rules_owner: Seat, state: GameState) -> Self {
        Self {
            rules_owner,
            state: Mutex::new(Arc::new(state)),
        }
    }

    pub fn rules_owner(&self) -> Seat {
        self.rules_owner
    }

    /// Current state. The returned snapshot never changes.
    pub fn snapshot(&self) -> Arc<GameState> {
        Arc::clone(&self.lock())
    }

    /// Current state as camelCase JSON.
    pub fn snapshot_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&*self.snapshot())
    }

    /// Squares the piece on `from` may move to, for highlighting.
    pub fn legal_targets(&self, from: Square) -> Vec<Square> {
        self.snapshot().legal_targets(from)
    }

    /// Validate and apply a move on behalf of `seat`, returning the new
    /// snapshot. Its `last_move` describes what the move did.
    pub fn submit_move(&self, seat: Seat, mv: Move) -> Result<Arc<GameState>, TableError> {
        let Seat::Player(side) = seat else {
            debug!(%mv, "move from observer rejected");
            return Err(TableError::Spectator);
        };

        let mut guard = self.lock();
        let next = guard.try_apply(side, mv).map_err(|e| {
            debug!(%side, %mv, error = %e, "move rejected");
            e
        })?;

        if let Some(result) = next.last_move {
            info!(
                %side,
                %mv,
                captured = ?result.captured_square,
                penalty = result.penalty_removed,
                "move accepted"
            );
        }
        if let Some(winner) = next.winner {
            info!(%winner, "game over");
        }

        let next = Arc::new(next);
        *guard = Arc::clone(&next);
        Ok(next)
    }

    /// Replace the whole rule set. Only the rules owner may do this.
    pub fn update_rules(&self, seat: Seat, rules: RuleConfig) -> Result<(), TableError> {
        if seat != self.rules_owner {
            debug!(%seat, "rule change rejected");
            return Err(TableError::NotRulesOwner { seat });
        }
        let mut guard = self.lock();
        let next = guard.with_rules(rules);
        info!(?rules, "rules updated");
        if !guard.is_over()
            && let Some(winner) = next.winner
        {
            info!(%winner, "game over");
        }
        *guard = Arc::new(next);
        Ok(())
    }

    /// Start a fresh game under the current rules.
    pub fn reset(&self) -> Arc<GameState> {
        let mut guard = self.lock();
        let fresh = Arc::new(GameState::new(guard.rules));
        *guard = Arc::clone(&fresh);
        info!("table reset");
        fresh
    }

    // Snapshots are swapped whole, so a panic elsewhere cannot leave a
    // half-written state behind the lock.
    fn lock(&self) -> MutexGuard<'_, Arc<GameState>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new(TableConfig::default())
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod table_tests;
