//! Checkers rules engine.
//!
//! Everything here is pure and deterministic: boards, rule sets and game
//! states are plain values, and every operation takes a snapshot and returns
//! a new one. Serializing mutations against a live game is the caller's job.

pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod rules;
pub mod types;

pub use board::*;
pub use error::*;
pub use game::*;
pub use movegen::*;
pub use perft::{perft, perft_divide};
pub use rules::*;
pub use types::*;
