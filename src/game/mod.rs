//! Game-state engine
//!
//! Scrambling, the tile stack, placement slots with undo history, validation,
//! and the [`GameSession`] that ties them together.

mod error;
pub mod placement;
pub mod scrambler;
mod session;
pub mod tile_stack;
pub mod validator;

pub use error::GameError;
pub use placement::{Move, Origin, PlacementSlot, PlacementState};
pub use scrambler::{Round, Scrambler, interleave};
pub use session::{GameSession, Outcome, Phase, Puzzle};
pub use tile_stack::TileStack;
pub use validator::WinRule;
