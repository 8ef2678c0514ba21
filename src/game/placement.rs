//! Target slots and the move history used for undo

use super::GameError;
use crate::core::{Letter, Slot, TileId};

/// Where a placed tile came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Stack,
    Slot(Slot),
}

/// One recorded placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub tile: TileId,
    pub origin: Origin,
    pub destination: Slot,
}

/// A left-to-right word under construction, with append / remove-last access
#[derive(Debug, Clone)]
pub struct PlacementSlot {
    letters: Vec<Letter>,
    capacity: usize,
}

impl PlacementSlot {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            letters: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a tile
    ///
    /// # Errors
    ///
    /// When the slot is full the tile is handed back untouched.
    pub fn place(&mut self, letter: Letter) -> Result<(), Letter> {
        if self.is_full() {
            return Err(letter);
        }
        self.letters.push(letter);
        Ok(())
    }

    /// Remove the most recently appended tile
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptySource` if the slot is empty.
    pub fn remove_last(&mut self) -> Result<Letter, GameError> {
        self.letters.pop().ok_or(GameError::EmptySource)
    }

    /// Concatenated letters in slot order
    #[must_use]
    pub fn contents_as_word(&self) -> String {
        self.letters.iter().map(Letter::as_char).collect()
    }

    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.letters.len() >= self.capacity
    }

    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&Letter> {
        self.letters.last()
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }
}

/// Both slots plus the history of every placement into them
#[derive(Debug, Clone)]
pub struct PlacementState {
    slots: [PlacementSlot; 2],
    history: Vec<Move>,
}

impl PlacementState {
    #[must_use]
    pub fn new(first_capacity: usize, second_capacity: usize) -> Self {
        Self {
            slots: [
                PlacementSlot::new(first_capacity),
                PlacementSlot::new(second_capacity),
            ],
            history: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn slot(&self, slot: Slot) -> &PlacementSlot {
        &self.slots[slot.index()]
    }

    /// Place a tile and record where it came from
    ///
    /// # Errors
    ///
    /// When the destination is full the tile is handed back and nothing is recorded.
    pub fn place(
        &mut self,
        destination: Slot,
        letter: Letter,
        origin: Origin,
    ) -> Result<(), Letter> {
        let tile = letter.id();
        self.slots[destination.index()].place(letter)?;
        self.history.push(Move {
            tile,
            origin,
            destination,
        });
        Ok(())
    }

    /// Take the last tile off a slot without touching the history
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptySource` if the slot is empty.
    pub fn take_last(&mut self, slot: Slot) -> Result<Letter, GameError> {
        self.slots[slot.index()].remove_last()
    }

    /// Put a tile back on a slot it was just taken from, without recording it
    pub(crate) fn restore(&mut self, slot: Slot, letter: Letter) -> Result<(), Letter> {
        self.slots[slot.index()].place(letter)
    }

    /// Reverse the most recent placement
    ///
    /// A tile that came from another slot goes straight back onto it and
    /// `Ok(None)` is returned. A tile that came from the stack is returned
    /// for the caller to push.
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptySource` if there is nothing to undo.
    pub fn undo(&mut self) -> Result<Option<Letter>, GameError> {
        let last = *self.history.last().ok_or(GameError::EmptySource)?;
        let letter = self.take_last(last.destination)?;
        debug_assert_eq!(letter.id(), last.tile, "undo must target the latest placement");

        match last.origin {
            Origin::Stack => {
                self.history.pop();
                Ok(Some(letter))
            }
            Origin::Slot(origin) => match self.restore(origin, letter) {
                Ok(()) => {
                    self.history.pop();
                    Ok(None)
                }
                Err(letter) => {
                    // Origin filled up in the meantime; leave everything as it was
                    let _ = self.restore(last.destination, letter);
                    Err(GameError::SlotFull(origin))
                }
            },
        }
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    /// Total tiles across both slots
    #[must_use]
    pub fn placed(&self) -> usize {
        self.slots.iter().map(PlacementSlot::count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(id: u32, ch: u8) -> Letter {
        Letter::new(TileId::new(id), ch, Slot::First)
    }

    #[test]
    fn slot_rejects_past_capacity_and_hands_tile_back() {
        let mut slot = PlacementSlot::new(2);
        slot.place(letter(0, b'a')).unwrap();
        slot.place(letter(1, b'b')).unwrap();

        let rejected = slot.place(letter(2, b'c')).unwrap_err();
        assert_eq!(rejected.id(), TileId::new(2));
        assert_eq!(slot.contents_as_word(), "ab");
        assert!(slot.is_full());
    }

    #[test]
    fn slot_remove_last_is_lifo() {
        let mut slot = PlacementSlot::new(3);
        slot.place(letter(0, b'a')).unwrap();
        slot.place(letter(1, b'b')).unwrap();

        assert_eq!(slot.remove_last().unwrap().as_char(), 'b');
        assert_eq!(slot.remove_last().unwrap().as_char(), 'a');
        assert_eq!(slot.remove_last(), Err(GameError::EmptySource));
        assert_eq!(slot.count(), 0);
    }

    #[test]
    fn place_records_history() {
        let mut state = PlacementState::new(5, 5);
        state.place(Slot::First, letter(4, b'x'), Origin::Stack).unwrap();

        assert_eq!(
            state.last_move(),
            Some(&Move {
                tile: TileId::new(4),
                origin: Origin::Stack,
                destination: Slot::First,
            })
        );
        assert_eq!(state.placed(), 1);
    }

    #[test]
    fn failed_place_records_nothing() {
        let mut state = PlacementState::new(1, 1);
        state.place(Slot::First, letter(0, b'a'), Origin::Stack).unwrap();
        assert!(
            state
                .place(Slot::First, letter(1, b'b'), Origin::Stack)
                .is_err()
        );
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn undo_from_stack_returns_tile() {
        let mut state = PlacementState::new(5, 5);
        state.place(Slot::Second, letter(0, b'q'), Origin::Stack).unwrap();

        let back = state.undo().unwrap().unwrap();
        assert_eq!(back.id(), TileId::new(0));
        assert_eq!(state.slot(Slot::Second).count(), 0);
        assert!(state.history().is_empty());
    }

    #[test]
    fn undo_slot_move_routes_back_to_origin() {
        let mut state = PlacementState::new(5, 5);
        state.place(Slot::First, letter(0, b'a'), Origin::Stack).unwrap();

        let moved = state.take_last(Slot::First).unwrap();
        state
            .place(Slot::Second, moved, Origin::Slot(Slot::First))
            .unwrap();
        assert_eq!(state.slot(Slot::Second).contents_as_word(), "a");

        assert_eq!(state.undo().unwrap(), None);
        assert_eq!(state.slot(Slot::First).contents_as_word(), "a");
        assert_eq!(state.slot(Slot::Second).count(), 0);
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn undo_with_empty_history() {
        let mut state = PlacementState::new(5, 5);
        assert_eq!(state.undo(), Err(GameError::EmptySource));
    }
}
