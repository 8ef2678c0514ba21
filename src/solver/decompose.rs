//! Decomposition search
//!
//! Routes each remaining tile, in stack order, onto one of the two slots and
//! keeps every routing whose final slot contents are accepted. Partial slot
//! contents that are not a dictionary prefix are pruned immediately.

use crate::core::Slot;
use crate::dictionary::Dictionary;
use crate::game::validator;
use rustc_hash::FxHashSet;

/// A pair of words the tiles can be split into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition {
    pub first: String,
    pub second: String,
    /// Slot for each routed tile, in the order the tiles were consumed
    pub routing: Vec<Slot>,
}

struct Search<'a, F> {
    remaining: &'a [u8],
    capacities: [usize; 2],
    dictionary: &'a Dictionary,
    accept: F,
    buffers: [String; 2],
    routing: Vec<Slot>,
    seen: FxHashSet<(String, String)>,
    found: Vec<Decomposition>,
}

impl<F: Fn(&str, &str) -> bool> Search<'_, F> {
    fn run(&mut self, index: usize) {
        if index == self.remaining.len() {
            self.finish();
            return;
        }

        let ch = self.remaining[index] as char;
        for slot in Slot::ALL {
            let i = slot.index();
            if self.buffers[i].len() >= self.capacities[i] {
                continue;
            }

            self.buffers[i].push(ch);
            if self.dictionary.has_prefix(&self.buffers[i]) {
                self.routing.push(slot);
                self.run(index + 1);
                self.routing.pop();
            }
            self.buffers[i].pop();
        }
    }

    fn finish(&mut self) {
        let [first, second] = &self.buffers;
        if first.len() != self.capacities[0] || second.len() != self.capacities[1] {
            return;
        }
        if !(self.accept)(first, second) {
            return;
        }
        if self.seen.insert((first.clone(), second.clone())) {
            self.found.push(Decomposition {
                first: first.clone(),
                second: second.clone(),
                routing: self.routing.clone(),
            });
        }
    }
}

/// Every distinct way to finish the two slots from their current contents
///
/// `remaining` lists the unplaced tiles top first. A result is kept when
/// both slots reach their capacity and `accept` approves the pair.
pub fn completions<F>(
    first: &str,
    second: &str,
    remaining: &[u8],
    capacities: [usize; 2],
    dictionary: &Dictionary,
    accept: F,
) -> Vec<Decomposition>
where
    F: Fn(&str, &str) -> bool,
{
    if !dictionary.has_prefix(first) || !dictionary.has_prefix(second) {
        return Vec::new();
    }

    let mut search = Search {
        remaining,
        capacities,
        dictionary,
        accept,
        buffers: [first.to_string(), second.to_string()],
        routing: Vec::with_capacity(remaining.len()),
        seen: FxHashSet::default(),
        found: Vec::new(),
    };
    search.run(0);
    search.found
}

/// Every pair of dictionary words a fresh scrambled sequence can be split into
///
/// # Examples
/// ```
/// use wordstack::dictionary::Dictionary;
/// use wordstack::solver::decompositions;
///
/// let dict = Dictionary::from_strs(&["apple", "beach"], 5).unwrap();
/// let found = decompositions(b"abpeapclhe", &dict);
/// assert!(found.iter().any(|d| d.first == "apple" && d.second == "beach"));
/// assert!(found.iter().any(|d| d.first == "beach" && d.second == "apple"));
/// ```
#[must_use]
pub fn decompositions(sequence: &[u8], dictionary: &Dictionary) -> Vec<Decomposition> {
    let length = dictionary.word_length();
    if sequence.len() != 2 * length {
        return Vec::new();
    }
    completions(
        "",
        "",
        sequence,
        [length, length],
        dictionary,
        |a, b| validator::check(a, b, dictionary),
    )
}
