//! Caret utilities for single-line text editing.
//!
//! The caret tracks an insertion point as a grapheme index into the edited
//! string. Movement and deletion operate on grapheme clusters, never on raw
//! bytes or chars.

use unicode_segmentation::UnicodeSegmentation;

/// Returns the number of grapheme clusters in `text`.
#[inline]
pub fn grapheme_count(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Converts a grapheme index to the corresponding byte offset in `text`.
///
/// An index at or past the end maps to `text.len()`.
pub fn grapheme_to_byte_offset(text: &str, grapheme_idx: usize) -> usize {
    text.grapheme_indices(true)
        .nth(grapheme_idx)
        .map_or(text.len(), |(offset, _)| offset)
}

/// A caret movement operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaretMove {
    /// One grapheme left.
    Left,
    /// One grapheme right.
    Right,
    /// Start of the line.
    Home,
    /// End of the line.
    End,
    /// Start of the previous word.
    WordLeft,
    /// Start of the next word.
    WordRight,
}

/// An insertion point within a single line of text, as a grapheme index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Caret {
    col: usize,
}

impl Caret {
    /// Creates a caret at the start of the line.
    #[inline]
    pub const fn new() -> Self {
        Self { col: 0 }
    }

    /// Creates a caret at the end of `text`.
    #[inline]
    pub fn at_end(text: &str) -> Self {
        Self {
            col: grapheme_count(text),
        }
    }

    /// Returns the caret column (grapheme index).
    #[inline]
    pub const fn col(&self) -> usize {
        self.col
    }

    /// Sets the caret column, clamped to the length of `text`.
    #[inline]
    pub fn set(&mut self, col: usize, text: &str) {
        self.col = col.min(grapheme_count(text));
    }

    /// Re-clamps the caret after `text` changed underneath it.
    #[inline]
    pub fn clamp_to(&mut self, text: &str) {
        self.col = self.col.min(grapheme_count(text));
    }

    /// Applies a movement operation relative to `text`.
    pub fn apply(&mut self, text: &str, movement: CaretMove) {
        let len = grapheme_count(text);
        self.col = match movement {
            CaretMove::Left => self.col.saturating_sub(1),
            CaretMove::Right => (self.col + 1).min(len),
            CaretMove::Home => 0,
            CaretMove::End => len,
            CaretMove::WordLeft => word_left(text, self.col),
            CaretMove::WordRight => word_right(text, self.col),
        };
    }
}

/// Finds the grapheme index of the start of the word before `col`.
fn word_left(text: &str, col: usize) -> usize {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    let mut pos = col.min(graphemes.len());

    // Skip whitespace behind the caret, then the word itself.
    while pos > 0 && is_blank(graphemes[pos - 1]) {
        pos -= 1;
    }
    while pos > 0 && !is_blank(graphemes[pos - 1]) {
        pos -= 1;
    }
    pos
}

/// Finds the grapheme index just past the end of the word after `col`.
fn word_right(text: &str, col: usize) -> usize {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    let mut pos = col.min(graphemes.len());

    while pos < graphemes.len() && is_blank(graphemes[pos]) {
        pos += 1;
    }
    while pos < graphemes.len() && !is_blank(graphemes[pos]) {
        pos += 1;
    }
    pos
}

#[inline]
fn is_blank(grapheme: &str) -> bool {
    grapheme.chars().all(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grapheme_count() {
        assert_eq!(grapheme_count(""), 0);
        assert_eq!(grapheme_count("hello"), 5);
        assert_eq!(grapheme_count("héllo 🌍"), 7);
    }

    #[test]
    fn test_grapheme_to_byte_offset() {
        let text = "héllo";
        assert_eq!(grapheme_to_byte_offset(text, 0), 0);
        assert_eq!(grapheme_to_byte_offset(text, 2), 3); // é is two bytes
        assert_eq!(grapheme_to_byte_offset(text, 99), text.len());
    }

    #[test]
    fn test_caret_moves() {
        let text = "hello world";
        let mut caret = Caret::at_end(text);
        assert_eq!(caret.col(), 11);

        caret.apply(text, CaretMove::Left);
        assert_eq!(caret.col(), 10);

        caret.apply(text, CaretMove::Home);
        assert_eq!(caret.col(), 0);

        caret.apply(text, CaretMove::Left);
        assert_eq!(caret.col(), 0);

        caret.apply(text, CaretMove::End);
        assert_eq!(caret.col(), 11);

        caret.apply(text, CaretMove::Right);
        assert_eq!(caret.col(), 11);
    }

    #[test]
    fn test_word_moves() {
        let text = "hello world test";
        let mut caret = Caret::new();
        caret.set(11, text); // end of "world"

        caret.apply(text, CaretMove::WordLeft);
        assert_eq!(caret.col(), 6); // start of "world"

        caret.apply(text, CaretMove::WordRight);
        assert_eq!(caret.col(), 11); // end of "world"

        caret.apply(text, CaretMove::WordRight);
        assert_eq!(caret.col(), 16);
    }

    #[test]
    fn test_clamp_after_edit() {
        let mut caret = Caret::at_end("hello");
        caret.clamp_to("he");
        assert_eq!(caret.col(), 2);
    }
}
