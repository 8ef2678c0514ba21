//! Final-arrangement checks

use crate::core::Word;
use crate::dictionary::Dictionary;

/// How a completed arrangement is judged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WinRule {
    /// Both slots must spell dictionary words, whichever words they are
    #[default]
    AnyDecomposition,
    /// Each slot must spell the word originally assigned to it
    Assigned,
}

impl WinRule {
    /// Judge two guesses under this rule
    #[must_use]
    pub fn evaluate(
        self,
        guess1: &str,
        guess2: &str,
        assigned: (&Word, &Word),
        dictionary: &Dictionary,
    ) -> bool {
        match self {
            Self::AnyDecomposition => check(guess1, guess2, dictionary),
            Self::Assigned => guess1 == assigned.0.text() && guess2 == assigned.1.text(),
        }
    }
}

/// True iff both guesses are dictionary words
///
/// # Examples
/// ```
/// use wordstack::dictionary::Dictionary;
/// use wordstack::game::validator::check;
///
/// let dict = Dictionary::from_strs(&["apple", "beach"], 5).unwrap();
/// assert!(check("beach", "apple", &dict));
/// assert!(!check("ppale", "beach", &dict));
/// ```
#[must_use]
pub fn check(guess1: &str, guess2: &str, dictionary: &Dictionary) -> bool {
    dictionary.contains(guess1) && dictionary.contains(guess2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict() -> Dictionary {
        Dictionary::from_strs(&["apple", "beach", "cheap", "leaps"], 5).unwrap()
    }

    #[test]
    fn both_members_win() {
        assert!(check("apple", "beach", &dict()));
        assert!(check("beach", "apple", &dict()));
    }

    #[test]
    fn one_invalid_slot_loses() {
        assert!(!check("ppale", "beach", &dict()));
        assert!(!check("apple", "bhcea", &dict()));
    }

    #[test]
    fn second_slot_is_checked_on_its_own() {
        // The first slot being valid must not carry the second
        assert!(!check("apple", "zzzzz", &dict()));
    }

    #[test]
    fn any_decomposition_accepts_other_words() {
        let apple = Word::new("apple").unwrap();
        let beach = Word::new("beach").unwrap();
        assert!(WinRule::AnyDecomposition.evaluate(
            "cheap",
            "leaps",
            (&apple, &beach),
            &dict()
        ));
    }

    #[test]
    fn assigned_requires_original_order() {
        let apple = Word::new("apple").unwrap();
        let beach = Word::new("beach").unwrap();
        let d = dict();

        assert!(WinRule::Assigned.evaluate("apple", "beach", (&apple, &beach), &d));
        assert!(!WinRule::Assigned.evaluate("beach", "apple", (&apple, &beach), &d));
    }
}
