//! Character classification and word splitting.
//!
//! Every converter in this crate works on the same word model:
//!
//! - A **word character** is an ASCII letter or ASCII digit. Anything else
//!   (spaces, punctuation, non-ASCII text) separates words.
//! - A **hump** is a lowercase letter or digit immediately followed by an
//!   uppercase letter, as in `some|Camel|Case`.
//!
//! [`Words`] walks a string and yields the words as borrowed slices, either
//! breaking only on separators or on separators and humps (see [`Split`]).
//!
//! ## Examples
//!
//! ```rust
//! use case_style::words::{Split, Words};
//!
//! let words: Vec<&str> = Words::new("__someCamel-case__", Split::SeparatorsAndHumps).collect();
//! assert_eq!(words, vec!["some", "Camel", "case"]);
//!
//! let words: Vec<&str> = Words::new("__someCamel-case__", Split::Separators).collect();
//! assert_eq!(words, vec!["someCamel", "case"]);
//! ```

use std::iter::FusedIterator;

/// Returns `true` if `c` is an ASCII letter or digit.
#[inline]
#[must_use]
pub const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Returns `true` if `c` is an ASCII uppercase letter.
#[inline]
#[must_use]
pub const fn is_upper(c: char) -> bool {
    c.is_ascii_uppercase()
}

/// Returns `true` if `c` is an ASCII lowercase letter or digit.
#[inline]
#[must_use]
pub const fn is_lower_or_digit(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

/// Returns `true` if a word boundary sits between `prev` and `next`.
///
/// # Examples
///
/// ```rust
/// use case_style::words::is_hump;
///
/// assert!(is_hump('e', 'C'));
/// assert!(is_hump('2', 'D'));
/// assert!(!is_hump('A', 'B'));
/// assert!(!is_hump('_', 'B'));
/// ```
#[inline]
#[must_use]
pub const fn is_hump(prev: char, next: char) -> bool {
    is_lower_or_digit(prev) && is_upper(next)
}

/// Where [`Words`] places word boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Split {
    /// Only runs of non-word characters separate words.
    #[default]
    Separators,
    /// Runs of non-word characters and humps separate words.
    SeparatorsAndHumps,
}

/// Iterator over the words of a string.
///
/// Yields non-empty slices of the input. Leading and trailing separators
/// produce nothing.
#[derive(Clone, Debug)]
pub struct Words<'a> {
    rest: &'a str,
    split: Split,
}

impl<'a> Words<'a> {
    /// Creates an iterator over the words of `text`.
    #[must_use]
    pub fn new(text: &'a str, split: Split) -> Self {
        Words { rest: text, split }
    }

    fn breaks_at(&self, prev: Option<char>, next: char) -> bool {
        match (self.split, prev) {
            (Split::SeparatorsAndHumps, Some(prev)) => is_hump(prev, next),
            _ => false,
        }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let Some(start) = self.rest.find(is_word_char) else {
            self.rest = "";
            return None;
        };
        let tail = &self.rest[start..];

        let mut end = tail.len();
        let mut prev = None;
        for (i, c) in tail.char_indices() {
            if !is_word_char(c) || self.breaks_at(prev, c) {
                end = i;
                break;
            }
            prev = Some(c);
        }

        let (word, rest) = tail.split_at(end);
        self.rest = rest;
        Some(word)
    }
}

impl FusedIterator for Words<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str, split: Split) -> Vec<&str> {
        Words::new(text, split).collect()
    }

    #[test]
    fn test_predicates() {
        assert!(is_word_char('a'));
        assert!(is_word_char('Z'));
        assert!(is_word_char('7'));
        assert!(!is_word_char('_'));
        assert!(!is_word_char('é'));

        assert!(is_upper('Q'));
        assert!(!is_upper('q'));
        assert!(!is_upper('Ä'));

        assert!(is_lower_or_digit('q'));
        assert!(is_lower_or_digit('0'));
        assert!(!is_lower_or_digit('Q'));
    }

    #[test]
    fn test_separators_only() {
        assert_eq!(split("first name", Split::Separators), vec!["first", "name"]);
        assert_eq!(split("--a__b  c--", Split::Separators), vec!["a", "b", "c"]);
        assert_eq!(split("someCamelCase", Split::Separators), vec!["someCamelCase"]);
    }

    #[test]
    fn test_humps() {
        assert_eq!(
            split("someCamelCase", Split::SeparatorsAndHumps),
            vec!["some", "Camel", "Case"]
        );
        assert_eq!(
            split("version2Beta", Split::SeparatorsAndHumps),
            vec!["version2", "Beta"]
        );
        // Consecutive capitals are not humps.
        assert_eq!(split("HTTPServer", Split::SeparatorsAndHumps), vec!["HTTPServer"]);
        assert_eq!(split("SCREEN_NAME", Split::SeparatorsAndHumps), vec!["SCREEN", "NAME"]);
    }

    #[test]
    fn test_hump_needs_adjacent_chars() {
        assert_eq!(split("a B", Split::SeparatorsAndHumps), vec!["a", "B"]);
        assert_eq!(split("a_Bc", Split::SeparatorsAndHumps), vec!["a", "Bc"]);
    }

    #[test]
    fn test_no_words() {
        assert!(split("", Split::Separators).is_empty());
        assert!(split("  _-. ", Split::SeparatorsAndHumps).is_empty());
        assert!(split("日本語", Split::Separators).is_empty());
    }

    #[test]
    fn test_non_ascii_separates() {
        assert_eq!(split("caféBar", Split::Separators), vec!["caf", "Bar"]);
    }

    #[test]
    fn test_fused() {
        let mut words = Words::new("one", Split::Separators);
        assert_eq!(words.next(), Some("one"));
        assert_eq!(words.next(), None);
        assert_eq!(words.next(), None);
    }
}
