//! Support code for the `checkers` command-line tool.

mod script;

pub use script::*;
