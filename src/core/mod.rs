//! Core domain types for the puzzle
//!
//! Words, letter tiles and slot names. Everything here is plain data with
//! validation; the game rules live in [`crate::game`].

mod letter;
mod word;

pub use letter::{Letter, Slot, TileId};
pub use word::{Word, WordError};
