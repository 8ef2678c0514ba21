//! Letter tiles and slot names

use std::fmt;

/// Opaque identity of a tile within one round
///
/// Two tiles showing the same character are still different tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(u32);

impl TileId {
    #[inline]
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// One of the two target slots, also used to name the source word of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    First,
    Second,
}

impl Slot {
    /// Both slots in display order
    pub const ALL: [Self; 2] = [Self::First, Self::Second];

    /// The other slot
    #[inline]
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    /// Zero-based index (0 for the first slot)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "word 1"),
            Self::Second => write!(f, "word 2"),
        }
    }
}

/// A single lettered tile
///
/// Tiles are not `Copy`: each one lives in exactly one container (the stack
/// or a slot) and moves between them by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Letter {
    id: TileId,
    ch: u8,
    source: Slot,
}

impl Letter {
    /// Create a tile showing `ch`, drawn from the word assigned to `source`
    #[must_use]
    pub const fn new(id: TileId, ch: u8, source: Slot) -> Self {
        Self { id, ch, source }
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// The letter as an ASCII byte
    #[inline]
    #[must_use]
    pub const fn byte(&self) -> u8 {
        self.ch
    }

    #[inline]
    #[must_use]
    pub const fn as_char(&self) -> char {
        self.ch as char
    }

    /// Which of the two scrambled words this tile came from
    #[inline]
    #[must_use]
    pub const fn source(&self) -> Slot {
        self.source
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_other_flips() {
        assert_eq!(Slot::First.other(), Slot::Second);
        assert_eq!(Slot::Second.other(), Slot::First);
        assert_eq!(Slot::First.other().other(), Slot::First);
    }

    #[test]
    fn slot_index_matches_all_order() {
        for (i, slot) in Slot::ALL.iter().enumerate() {
            assert_eq!(slot.index(), i);
        }
    }

    #[test]
    fn same_character_tiles_are_distinct() {
        let a = Letter::new(TileId::new(1), b'p', Slot::First);
        let b = Letter::new(TileId::new(2), b'p', Slot::First);
        assert_eq!(a.as_char(), b.as_char());
        assert_ne!(a, b);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn letter_display() {
        let letter = Letter::new(TileId::new(0), b'q', Slot::Second);
        assert_eq!(letter.to_string(), "q");
        assert_eq!(letter.source(), Slot::Second);
    }
}
