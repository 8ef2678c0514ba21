//! One-off scramble command
//!
//! Draws a round and reports the scrambled letters, the hidden words and how
//! many decompositions the letters admit.

use crate::config::GameConfig;
use crate::dictionary::Dictionary;
use crate::game::{GameError, GameSession};
use crate::solver::decompositions;

/// Result of scrambling one round
pub struct ScrambleResult {
    pub scrambled: String,
    pub word1: String,
    pub word2: String,
    /// Distinct word pairs the scramble can be split into
    pub solutions: usize,
}

/// Draw and scramble one round
///
/// # Errors
///
/// Returns `GameError::EmptyDictionary` if no words can be drawn.
pub fn scramble_round(
    dictionary: &Dictionary,
    config: &GameConfig,
) -> Result<ScrambleResult, GameError> {
    let mut session = GameSession::from_config(dictionary.clone(), config);
    let puzzle = session.start()?;

    Ok(ScrambleResult {
        scrambled: puzzle.scrambled.clone(),
        word1: puzzle.word1.text().to_string(),
        word2: puzzle.word2.text().to_string(),
        solutions: decompositions(puzzle.scrambled.as_bytes(), dictionary).len(),
    })
}
