//! Game table for checkers
//!
//! A `Table` owns one game and is the single place where it changes:
//! - checks who may move and who may change the rules
//! - applies accepted moves one at a time
//! - hands out immutable snapshots for rendering and resync
//!
//! Transport, rooms and seat assignment live outside this crate.

mod config;
mod table;

pub use config::*;
pub use table::*;
