//! Game session orchestration
//!
//! `GameSession` owns one round at a time: the scrambler, the tile stack, the
//! two slots and the move history. It is the only type a front end needs.
//!
//! Every action either completes fully or leaves the session untouched.

use super::placement::{Move, Origin, PlacementSlot, PlacementState};
use super::scrambler::{Round, Scrambler};
use super::tile_stack::TileStack;
use super::validator::WinRule;
use super::GameError;
use crate::config::GameConfig;
use crate::core::{Letter, Slot, Word};
use crate::dictionary::Dictionary;
use crate::solver;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    Completed,
}

/// The hidden words and their scramble, kept for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub word1: Word,
    pub word2: Word,
    pub scrambled: String,
}

/// Result of a completed round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub won: bool,
    pub word1: String,
    pub word2: String,
    /// What the player spelled in each slot
    pub guess1: String,
    pub guess2: String,
}

impl Outcome {
    /// The message shown when the round ends
    #[must_use]
    pub fn message(&self) -> String {
        if self.won {
            format!(
                "You found a valid solution! The words were: {} {}",
                self.word1, self.word2
            )
        } else {
            format!("Sorry, the words were: {} {}", self.word1, self.word2)
        }
    }
}

/// One game of two-word unscramble
pub struct GameSession<R: Rng = StdRng> {
    dictionary: Dictionary,
    scrambler: Scrambler<R>,
    win_rule: WinRule,
    phase: Phase,
    puzzle: Option<Puzzle>,
    tile_count: usize,
    stack: TileStack,
    placement: PlacementState,
    outcome: Option<Outcome>,
}

impl GameSession<StdRng> {
    /// Build a session from configuration, seeding from `config.seed` if set
    #[must_use]
    pub fn from_config(dictionary: Dictionary, config: &GameConfig) -> Self {
        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self::new(dictionary, rng, config.win_rule)
    }
}

impl<R: Rng> GameSession<R> {
    #[must_use]
    pub fn new(dictionary: Dictionary, rng: R, win_rule: WinRule) -> Self {
        let length = dictionary.word_length();
        Self {
            dictionary,
            scrambler: Scrambler::new(rng),
            win_rule,
            phase: Phase::NotStarted,
            puzzle: None,
            tile_count: 0,
            stack: TileStack::new(),
            placement: PlacementState::new(length, length),
            outcome: None,
        }
    }

    /// Start a new round with two random dictionary words
    ///
    /// Any round in progress is abandoned.
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyDictionary` without touching the session if
    /// no words can be drawn.
    pub fn start(&mut self) -> Result<&Puzzle, GameError> {
        let round = self.scrambler.new_round(&self.dictionary)?;
        Ok(self.begin(round))
    }

    /// Start a new round with the given words, still scrambled at random
    pub fn start_with(&mut self, word1: Word, word2: Word) -> &Puzzle {
        let round = self.scrambler.round_from(word1, word2);
        self.begin(round)
    }

    fn begin(&mut self, round: Round) -> &Puzzle {
        if self.phase == Phase::InProgress {
            tracing::debug!("abandoning round in progress");
        }

        let scrambled = round.scrambled();
        let Round {
            word1,
            word2,
            sequence,
        } = round;

        tracing::info!(%scrambled, "round started");

        self.tile_count = sequence.len();
        self.placement = PlacementState::new(word1.len(), word2.len());
        self.stack.load(sequence);
        self.outcome = None;
        self.phase = Phase::InProgress;
        self.puzzle.insert(Puzzle {
            word1,
            word2,
            scrambled,
        })
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.phase == Phase::InProgress {
            Ok(())
        } else {
            Err(GameError::NoActiveRound)
        }
    }

    /// Move the top tile of the stack onto `slot`
    ///
    /// Completes the round when this empties the stack.
    ///
    /// # Errors
    ///
    /// - `GameError::NoActiveRound` outside a round
    /// - `GameError::SlotFull` if `slot` has no room (the tile stays on the stack)
    /// - `GameError::EmptySource` if the stack is empty
    pub fn place_from_stack(&mut self, slot: Slot) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        if self.placement.slot(slot).is_full() {
            tracing::debug!(%slot, "placement rejected: slot full");
            return Err(GameError::SlotFull(slot));
        }

        let letter = self.stack.pop()?;
        let ch = letter.as_char();
        if let Err(letter) = self.placement.place(slot, letter, Origin::Stack) {
            self.stack.push(letter);
            return Err(GameError::SlotFull(slot));
        }
        tracing::debug!(%ch, %slot, remaining = self.stack.len(), "tile placed");

        if self.stack.is_empty() {
            self.complete();
        }
        Ok(())
    }

    /// Move the last tile of `from` onto the end of `to`
    ///
    /// # Errors
    ///
    /// - `GameError::NoActiveRound` outside a round
    /// - `GameError::SameSlot` if `from == to`
    /// - `GameError::SlotFull` if `to` has no room (both slots unchanged)
    /// - `GameError::EmptySource` if `from` is empty
    pub fn move_between_slots(&mut self, from: Slot, to: Slot) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        if from == to {
            return Err(GameError::SameSlot);
        }
        if self.placement.slot(to).is_full() {
            tracing::debug!(%from, %to, "move rejected: destination full");
            return Err(GameError::SlotFull(to));
        }

        let letter = self.placement.take_last(from)?;
        let ch = letter.as_char();
        if let Err(letter) = self.placement.place(to, letter, Origin::Slot(from)) {
            let _ = self.placement.restore(from, letter);
            return Err(GameError::SlotFull(to));
        }
        tracing::debug!(%ch, %from, %to, "tile moved");
        Ok(())
    }

    /// Reverse the most recent placement
    ///
    /// # Errors
    ///
    /// - `GameError::NoActiveRound` outside a round
    /// - `GameError::EmptySource` if nothing has been placed
    pub fn undo(&mut self) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        if let Some(letter) = self.placement.undo()? {
            self.stack.push(letter);
        }
        tracing::debug!(history = self.placement.history().len(), "move undone");
        Ok(())
    }

    /// Which slot the top tile should go to so the round can still be won
    ///
    /// `None` outside a round or when no winning continuation exists.
    #[must_use]
    pub fn hint(&self) -> Option<Slot> {
        if self.phase != Phase::InProgress {
            return None;
        }
        let puzzle = self.puzzle.as_ref()?;
        let remaining: Vec<u8> = self.stack.iter_top_first().map(Letter::byte).collect();
        let first = self.placement.slot(Slot::First);
        let second = self.placement.slot(Slot::Second);

        let found = solver::completions(
            &first.contents_as_word(),
            &second.contents_as_word(),
            &remaining,
            [first.capacity(), second.capacity()],
            &self.dictionary,
            |a, b| {
                self.win_rule
                    .evaluate(a, b, (&puzzle.word1, &puzzle.word2), &self.dictionary)
            },
        );
        found.first().and_then(|d| d.routing.first().copied())
    }

    fn complete(&mut self) {
        let guess1 = self.placement.slot(Slot::First).contents_as_word();
        let guess2 = self.placement.slot(Slot::Second).contents_as_word();
        let Some(puzzle) = self.puzzle.as_ref() else {
            return;
        };

        let won = self.win_rule.evaluate(
            &guess1,
            &guess2,
            (&puzzle.word1, &puzzle.word2),
            &self.dictionary,
        );
        tracing::info!(won, %guess1, %guess2, "round completed");

        self.outcome = Some(Outcome {
            won,
            word1: puzzle.word1.text().to_string(),
            word2: puzzle.word2.text().to_string(),
            guess1,
            guess2,
        });
        self.phase = Phase::Completed;
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    #[must_use]
    pub const fn puzzle(&self) -> Option<&Puzzle> {
        self.puzzle.as_ref()
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Unplaced tiles, top of the stack first
    pub fn remaining(&self) -> impl Iterator<Item = &Letter> {
        self.stack.iter_top_first()
    }

    #[inline]
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.stack.len()
    }

    #[inline]
    #[must_use]
    pub const fn slot(&self, slot: Slot) -> &PlacementSlot {
        self.placement.slot(slot)
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Move] {
        self.placement.history()
    }

    /// Tiles in this round's scrambled sequence
    #[inline]
    #[must_use]
    pub const fn tile_count(&self) -> usize {
        self.tile_count
    }

    #[inline]
    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[inline]
    #[must_use]
    pub const fn win_rule(&self) -> WinRule {
        self.win_rule
    }
}
