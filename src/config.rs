//! Game configuration
//!
//! Collected from command-line flags by the binary; the library only sees the
//! finished struct.

use crate::game::WinRule;

/// Default number of letters per word
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Settings that shape every round of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Letters per word; dictionary entries of other lengths are ignored
    pub word_length: usize,
    pub win_rule: WinRule,
    /// Fixed seed for reproducible rounds; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            win_rule: WinRule::AnyDecomposition,
            seed: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub const fn with_win_rule(mut self, win_rule: WinRule) -> Self {
        self.win_rule = win_rule;
        self
    }

    #[must_use]
    pub const fn with_word_length(mut self, word_length: usize) -> Self {
        self.word_length = word_length;
        self
    }
}
