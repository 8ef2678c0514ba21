//! Validate a pair of words against the dictionary

use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::game::validator;

/// Verdict for a pair of guesses
pub struct CheckResult {
    pub guess1: String,
    pub guess2: String,
    pub valid1: bool,
    pub valid2: bool,
    pub won: bool,
}

/// Check two guesses the same way a completed round is judged
///
/// # Errors
///
/// Returns an error if either guess is not a word of the dictionary's length.
pub fn check_words(
    guess1: &str,
    guess2: &str,
    dictionary: &Dictionary,
) -> Result<CheckResult, String> {
    let length = dictionary.word_length();
    let first = Word::with_length(guess1, length).map_err(|e| format!("Invalid word 1: {e}"))?;
    let second = Word::with_length(guess2, length).map_err(|e| format!("Invalid word 2: {e}"))?;

    Ok(CheckResult {
        valid1: dictionary.contains(first.text()),
        valid2: dictionary.contains(second.text()),
        won: validator::check(first.text(), second.text(), dictionary),
        guess1: first.text().to_string(),
        guess2: second.text().to_string(),
    })
}
