//! Errors reported by the game engine

use crate::core::Slot;
use thiserror::Error;

/// Reasons a game action was rejected
///
/// Every rejected action leaves the session exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("dictionary has no words of the required length")]
    EmptyDictionary,
    #[error("{0} is already full")]
    SlotFull(Slot),
    #[error("nothing to move")]
    EmptySource,
    #[error("a tile cannot be moved onto its own slot")]
    SameSlot,
    #[error("no round in progress")]
    NoActiveRound,
}

impl GameError {
    /// True for rejections the UI should treat as a quiet no-op
    #[must_use]
    pub const fn is_benign(self) -> bool {
        matches!(self, Self::EmptySource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_empty_source_is_benign() {
        assert!(GameError::EmptySource.is_benign());
        assert!(!GameError::SlotFull(Slot::First).is_benign());
        assert!(!GameError::EmptyDictionary.is_benign());
        assert!(!GameError::NoActiveRound.is_benign());
    }

    #[test]
    fn slot_full_names_the_slot() {
        assert_eq!(
            GameError::SlotFull(Slot::Second).to_string(),
            "word 2 is already full"
        );
    }
}
