//! Word selection and interleaving
//!
//! A round draws two words (with replacement) and zips them together with a
//! fair coin per step. Letters keep their order within each source word; once
//! one word runs out the rest of the other is appended unchanged.

use super::GameError;
use crate::core::{Letter, Slot, TileId, Word};
use crate::dictionary::Dictionary;
use rand::Rng;

/// The two hidden words and their scrambled tile sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub word1: Word,
    pub word2: Word,
    /// Tiles in the order they are handed to the player
    pub sequence: Vec<Letter>,
}

impl Round {
    /// The scrambled letters as a string
    #[must_use]
    pub fn scrambled(&self) -> String {
        self.sequence.iter().map(Letter::as_char).collect()
    }
}

/// Produces rounds from a dictionary using an injected random source
pub struct Scrambler<R: Rng> {
    rng: R,
}

impl<R: Rng> Scrambler<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw two words and scramble them
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyDictionary` if the dictionary has no words.
    pub fn new_round(&mut self, dictionary: &Dictionary) -> Result<Round, GameError> {
        let word1 = dictionary
            .choose(&mut self.rng)
            .ok_or(GameError::EmptyDictionary)?
            .clone();
        let word2 = dictionary
            .choose(&mut self.rng)
            .ok_or(GameError::EmptyDictionary)?
            .clone();

        Ok(self.round_from(word1, word2))
    }

    /// Scramble two given words
    pub fn round_from(&mut self, word1: Word, word2: Word) -> Round {
        let sequence = interleave(word1.as_bytes(), word2.as_bytes(), &mut self.rng);
        Round {
            word1,
            word2,
            sequence,
        }
    }
}

/// Interleave two letter sequences with one coin flip per step
///
/// `true` from the coin takes the next letter of `first`. Tile ids are the
/// positions in the returned sequence.
pub fn interleave<R: Rng + ?Sized>(first: &[u8], second: &[u8], rng: &mut R) -> Vec<Letter> {
    let mut sequence = Vec::with_capacity(first.len() + second.len());
    let (mut i, mut j) = (0, 0);

    let push = |sequence: &mut Vec<Letter>, ch: u8, source: Slot| {
        let id = TileId::new(sequence.len() as u32);
        sequence.push(Letter::new(id, ch, source));
    };

    while i < first.len() && j < second.len() {
        if rng.random_bool(0.5) {
            push(&mut sequence, first[i], Slot::First);
            i += 1;
        } else {
            push(&mut sequence, second[j], Slot::Second);
            j += 1;
        }
    }

    for &ch in &first[i..] {
        push(&mut sequence, ch, Slot::First);
    }
    for &ch in &second[j..] {
        push(&mut sequence, ch, Slot::Second);
    }

    sequence
}
