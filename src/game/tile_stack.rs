//! Pool of tiles not yet placed

use super::GameError;
use crate::core::Letter;

/// Last-in-first-out supply of tiles
///
/// The top of the stack is the end of the backing vector.
#[derive(Debug, Default, Clone)]
pub struct TileStack {
    tiles: Vec<Letter>,
}

impl TileStack {
    #[must_use]
    pub const fn new() -> Self {
        Self { tiles: Vec::new() }
    }

    /// Replace the contents so the first tile of `sequence` ends up on top
    pub fn load(&mut self, sequence: Vec<Letter>) {
        self.tiles = sequence;
        self.tiles.reverse();
    }

    /// Remove and return the top tile
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptySource` if the stack is empty.
    pub fn pop(&mut self) -> Result<Letter, GameError> {
        self.tiles.pop().ok_or(GameError::EmptySource)
    }

    /// Put a tile back on top
    pub fn push(&mut self, letter: Letter) {
        self.tiles.push(letter);
    }

    /// Look at the top tile without removing it
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptySource` if the stack is empty.
    pub fn peek(&self) -> Result<&Letter, GameError> {
        self.tiles.last().ok_or(GameError::EmptySource)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Tiles from the top down, i.e. in the order the player receives them
    pub fn iter_top_first(&self) -> impl DoubleEndedIterator<Item = &Letter> {
        self.tiles.iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Slot, TileId};

    fn tiles(text: &str) -> Vec<Letter> {
        text.bytes()
            .enumerate()
            .map(|(i, ch)| Letter::new(TileId::new(i as u32), ch, Slot::First))
            .collect()
    }

    fn top_first(stack: &TileStack) -> String {
        stack.iter_top_first().map(Letter::as_char).collect()
    }

    #[test]
    fn load_puts_first_letter_on_top() {
        let mut stack = TileStack::new();
        stack.load(tiles("abeach"));

        assert_eq!(stack.peek().unwrap().as_char(), 'a');
        assert_eq!(stack.len(), 6);
        assert_eq!(top_first(&stack), "abeach");
    }

    #[test]
    fn pop_follows_sequence_order() {
        let mut stack = TileStack::new();
        stack.load(tiles("xyz"));

        assert_eq!(stack.pop().unwrap().as_char(), 'x');
        assert_eq!(stack.pop().unwrap().as_char(), 'y');
        assert_eq!(stack.pop().unwrap().as_char(), 'z');
        assert_eq!(stack.pop(), Err(GameError::EmptySource));
        assert!(stack.is_empty());
    }

    #[test]
    fn push_returns_tile_to_top() {
        let mut stack = TileStack::new();
        stack.load(tiles("ab"));

        let a = stack.pop().unwrap();
        let id = a.id();
        stack.push(a);

        assert_eq!(stack.peek().unwrap().id(), id);
        assert_eq!(top_first(&stack), "ab");
    }

    #[test]
    fn load_discards_previous_contents() {
        let mut stack = TileStack::new();
        stack.load(tiles("old"));
        stack.load(tiles("new"));
        assert_eq!(top_first(&stack), "new");
    }

    #[test]
    fn peek_on_empty_is_empty_source() {
        let stack = TileStack::new();
        assert_eq!(stack.peek().unwrap_err(), GameError::EmptySource);
    }
}
