//! Fixed-length word dictionary
//!
//! Immutable after construction. Supports membership tests, prefix tests for
//! the decomposition search, and uniform random choice for new rounds.

use crate::core::Word;
use crate::game::GameError;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// A set of words that all share one length
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    lookup: FxHashSet<String>,
    prefixes: FxHashSet<String>,
    word_length: usize,
}

impl Dictionary {
    /// Build a dictionary from candidate words, keeping those of `word_length`
    ///
    /// Duplicates are dropped; the first occurrence fixes the word's position.
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyDictionary` if no candidate has the required length.
    pub fn new<I>(words: I, word_length: usize) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = Word>,
    {
        let mut lookup = FxHashSet::default();
        let mut prefixes = FxHashSet::default();
        let mut kept = Vec::new();

        for word in words {
            if word.len() != word_length || !lookup.insert(word.text().to_string()) {
                continue;
            }
            for end in 0..word_length {
                prefixes.insert(word.text()[..end].to_string());
            }
            kept.push(word);
        }

        if kept.is_empty() {
            return Err(GameError::EmptyDictionary);
        }

        tracing::debug!(words = kept.len(), word_length, "dictionary built");

        Ok(Self {
            words: kept,
            lookup,
            prefixes,
            word_length,
        })
    }

    /// Convenience constructor from string slices; invalid entries are skipped
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyDictionary` if nothing valid remains.
    pub fn from_strs(words: &[&str], word_length: usize) -> Result<Self, GameError> {
        Self::new(
            crate::wordlists::loader::words_from_slice(words, word_length),
            word_length,
        )
    }

    /// Exact membership test
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }

    /// True if some word starts with `prefix` (including the whole word)
    #[inline]
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.prefixes.contains(prefix) || self.lookup.contains(prefix)
    }

    /// Pick one word uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
