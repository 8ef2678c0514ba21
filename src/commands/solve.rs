//! Solve command
//!
//! Lists every pair of dictionary words a scrambled sequence splits into.

use crate::dictionary::Dictionary;
use crate::solver::{Decomposition, decompositions};

/// Result of solving a scrambled sequence
pub struct SolveResult {
    pub letters: String,
    pub solutions: Vec<Decomposition>,
}

/// Find all decompositions of `letters`
///
/// # Errors
///
/// Returns an error if `letters` is not twice the dictionary's word length or
/// contains anything other than ASCII letters.
pub fn solve_letters(letters: &str, dictionary: &Dictionary) -> Result<SolveResult, String> {
    let letters = letters.trim().to_lowercase();
    let expected = 2 * dictionary.word_length();

    if !letters.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err("Scrambled letters must be ASCII letters only".to_string());
    }
    if letters.len() != expected {
        return Err(format!(
            "Expected {expected} scrambled letters, got {}",
            letters.len()
        ));
    }

    let solutions = decompositions(letters.as_bytes(), dictionary);
    Ok(SolveResult { letters, solutions })
}
