//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.
//! Entries of the wrong length or with non-letter characters are skipped.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words of exactly `length` letters from a file, one word per line
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordstack::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content, length))
}

/// Parse newline-separated text into words of exactly `length` letters
#[must_use]
pub fn words_from_lines(content: &str, length: usize) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::with_length(trimmed, length).ok()
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordstack::wordlists::loader::words_from_slice;
/// use wordstack::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS, 5);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], length: usize) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| Word::with_length(s, length).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["apple", "beach", "crane"];
        let words = words_from_slice(input, 5);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "apple");
        assert_eq!(words[2].text(), "crane");
    }

    #[test]
    fn words_from_slice_filters_by_length() {
        let input = &["apple", "toolong", "abc", "beach"];
        assert_eq!(words_from_slice(input, 5).len(), 2);

        let short = words_from_slice(input, 3);
        assert_eq!(short.len(), 1);
        assert_eq!(short[0].text(), "abc");
    }

    #[test]
    fn words_from_lines_trims_and_skips_blanks() {
        let content = "  apple \n\n beach\r\nsh0rt\nplum\n";
        let words = words_from_lines(content, 5);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "apple");
        assert_eq!(words[1].text(), "beach");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input, 5).is_empty());
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS, 5);
        assert_eq!(words.len(), WORDS.len());
    }
}
