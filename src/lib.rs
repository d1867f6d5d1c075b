//! Detective Quest
//!
//! A text adventure where you explore a mansion shaped like a binary tree,
//! collect clues in the rooms you visit, and close the case by naming the
//! most cited suspect.
//!
//! # Game Mechanics
//!
//! - **Exploration**: walk left or right through the mansion; the walk ends
//!   when you step off the map or choose to leave
//! - **Clues**: some rooms hold a clue tied to a suspect; entering the room
//!   collects it
//! - **The Case**: collected clues are reported alphabetically, every
//!   clue→suspect relation is listed, and the suspect cited by the most
//!   clues is called out
//!
//! # Architecture
//!
//! - `data` - The mansion map, the sorted clue index, the suspect ledger
//! - `game` - The investigation orchestrator and case report
//! - `console` - Line-oriented console front end

pub mod console;
pub mod data;
pub mod game;

pub use data::*;
pub use game::Investigation;

/// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the game
pub type Result<T> = anyhow::Result<T>;

/// Custom error types
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("label exceeds {limit} characters: {label:?}")]
    LabelTooLong { label: String, limit: usize },

    #[error("unknown room id: {0}")]
    UnknownRoomId(usize),
}
