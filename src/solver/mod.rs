//! Decomposition search and hints
//!
//! Finds the pairs of dictionary words a scrambled sequence can be split into
//! by routing tiles, in order, onto the two slots.

mod decompose;

pub use decompose::{Decomposition, completions, decompositions};
