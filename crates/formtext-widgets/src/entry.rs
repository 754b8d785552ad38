//! Single-line text-entry primitive.
//!
//! [`LineEdit`] is the host editing primitive the composite form field embeds:
//! it owns the text value and caret, applies the entry policy (the native
//! keyboard/validation mode), masks display output when configured, and keeps
//! a horizontal scroll window so long values stay editable at a fixed width.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::caret::{grapheme_count, grapheme_to_byte_offset, Caret, CaretMove};
use crate::event::{ChangeEvent, ChangeListener, Key, Modifiers, SubmitListener};

/// Default visual width of a line edit, in terminal columns.
pub const DEFAULT_ENTRY_WIDTH: u16 = 24;

/// Character-class admission policy for text entry.
///
/// This is the primitive's native validation mode; input-type shortcuts on
/// the composite field map onto it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntryPolicy {
    /// Any character is accepted.
    #[default]
    Unrestricted,
    /// ASCII digits only.
    Digits,
    /// ASCII digits plus a single decimal point.
    Decimal,
    /// Characters that occur in phone numbers.
    Phone,
}

impl EntryPolicy {
    /// Returns whether `c` may be inserted into `current` under this policy.
    pub fn accepts(&self, c: char, current: &str) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::Digits => c.is_ascii_digit(),
            Self::Decimal => c.is_ascii_digit() || (c == '.' && !current.contains('.')),
            Self::Phone => c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | '#' | '*' | ' '),
        }
    }
}

/// The visible portion of the value, for rendering at a fixed width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleWindow {
    /// The visible (possibly masked) text.
    pub text: String,
    /// Caret offset within the window, in display columns.
    pub caret_cols: usize,
}

/// A single-line text-entry primitive.
///
/// # Example
///
/// ```
/// use formtext_widgets::{Key, LineEdit, Modifiers};
///
/// let mut edit = LineEdit::builder().placeholder("Enter your name").build();
/// edit.handle_key(Key::Char('h'), Modifiers::NONE);
/// edit.handle_key(Key::Char('i'), Modifiers::NONE);
/// assert_eq!(edit.value(), "hi");
/// ```
pub struct LineEdit {
    value: String,
    placeholder: String,
    mask: Option<char>,
    policy: EntryPolicy,
    caret: Caret,
    /// Horizontal scroll offset (grapheme index of the first visible cell).
    scroll: usize,
    /// Maximum length in graphemes, 0 for unlimited.
    max_graphemes: usize,
    width: u16,
    focused: bool,
    focusable: bool,
    read_only: bool,
    on_change: Option<ChangeListener>,
    on_submit: Option<SubmitListener>,
}

impl std::fmt::Debug for LineEdit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineEdit")
            .field("value", &self.value)
            .field("placeholder", &self.placeholder)
            .field("mask", &self.mask)
            .field("policy", &self.policy)
            .field("caret", &self.caret)
            .field("scroll", &self.scroll)
            .field("max_graphemes", &self.max_graphemes)
            .field("width", &self.width)
            .field("focused", &self.focused)
            .field("focusable", &self.focusable)
            .field("read_only", &self.read_only)
            .field("on_change", &self.on_change.as_ref().map(|_| "<callback>"))
            .field("on_submit", &self.on_submit.as_ref().map(|_| "<callback>"))
            .finish()
    }
}

impl Default for LineEdit {
    fn default() -> Self {
        Self::new()
    }
}

impl LineEdit {
    /// Creates a new empty line edit.
    pub fn new() -> Self {
        Self {
            value: String::new(),
            placeholder: String::new(),
            mask: None,
            policy: EntryPolicy::Unrestricted,
            caret: Caret::new(),
            scroll: 0,
            max_graphemes: 0,
            width: DEFAULT_ENTRY_WIDTH,
            focused: false,
            focusable: true,
            read_only: false,
            on_change: None,
            on_submit: None,
        }
    }

    /// Creates a builder for constructing a line edit.
    pub fn builder() -> LineEditBuilder {
        LineEditBuilder::default()
    }

    /// Returns the current text value.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Sets the text value, moving the caret to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.caret = Caret::at_end(&self.value);
        self.ensure_caret_visible();
    }

    /// Clears the text value.
    pub fn clear(&mut self) {
        self.value.clear();
        self.caret = Caret::new();
        self.scroll = 0;
    }

    /// Returns the placeholder text.
    #[inline]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Sets the placeholder text shown while the value is empty.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    /// Returns the mask character, if display masking is active.
    #[inline]
    pub fn mask(&self) -> Option<char> {
        self.mask
    }

    /// Sets or clears the display mask character.
    pub fn set_mask(&mut self, mask: Option<char>) {
        self.mask = mask;
    }

    /// Returns the entry policy.
    #[inline]
    pub fn policy(&self) -> EntryPolicy {
        self.policy
    }

    /// Sets the entry policy. Existing text is not re-validated.
    pub fn set_policy(&mut self, policy: EntryPolicy) {
        self.policy = policy;
    }

    /// Returns the caret column (grapheme index).
    #[inline]
    pub fn caret_col(&self) -> usize {
        self.caret.col()
    }

    /// Moves the caret to the given grapheme index.
    pub fn set_caret_col(&mut self, col: usize) {
        self.caret.set(col, &self.value);
        self.ensure_caret_visible();
    }

    /// Returns the maximum length in graphemes (0 = unlimited).
    #[inline]
    pub fn max_graphemes(&self) -> usize {
        self.max_graphemes
    }

    /// Sets the maximum length in graphemes (0 = unlimited).
    pub fn set_max_graphemes(&mut self, max: usize) {
        self.max_graphemes = max;
    }

    /// Returns the visual width in terminal columns.
    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Sets the visual width in terminal columns (minimum 1).
    pub fn set_width(&mut self, width: u16) {
        self.width = width.max(1);
        self.ensure_caret_visible();
    }

    /// Returns true if the edit has input focus.
    #[inline]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Sets the focused state. Focus is refused while unfocusable.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused && self.focusable;
        if self.focused {
            self.ensure_caret_visible();
        }
    }

    /// Returns true if the edit can receive focus.
    #[inline]
    pub fn is_focusable(&self) -> bool {
        self.focusable
    }

    /// Sets whether the edit can receive focus; revoking drops current focus.
    pub fn set_focusable(&mut self, focusable: bool) {
        self.focusable = focusable;
        if !focusable {
            self.focused = false;
        }
    }

    /// Returns true if the edit rejects text mutations.
    #[inline]
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Sets the read-only state.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Sets the change callback.
    pub fn set_on_change(&mut self, callback: ChangeListener) {
        self.on_change = Some(callback);
    }

    /// Sets the submit callback (triggered on Enter).
    pub fn set_on_submit(&mut self, callback: SubmitListener) {
        self.on_submit = Some(callback);
    }

    /// Returns the text to display: the value, masked if a mask is set.
    pub fn display_text(&self) -> String {
        match self.mask {
            Some(mask) if !self.value.is_empty() => {
                mask.to_string().repeat(grapheme_count(&self.value))
            }
            _ => self.value.clone(),
        }
    }

    /// Returns the visible portion of the display text for the current width.
    pub fn visible_window(&self) -> VisibleWindow {
        let display = self.display_text();
        let graphemes: Vec<&str> = display.graphemes(true).collect();

        let start = self.scroll.min(graphemes.len());
        let max_cols = self.width as usize;

        let mut cols = 0;
        let mut end = start;
        for (i, g) in graphemes[start..].iter().enumerate() {
            let w = g.width();
            if cols + w > max_cols {
                break;
            }
            cols += w;
            end = start + i + 1;
        }

        let caret = self.caret.col().clamp(start, end);
        let caret_cols = graphemes[start..caret].iter().map(|g| g.width()).sum();

        VisibleWindow {
            text: graphemes[start..end].concat(),
            caret_cols,
        }
    }

    /// Handles a key event. Returns true if the event was consumed.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> bool {
        if !self.focusable {
            return false;
        }

        match key {
            Key::Char(c) if !modifiers.ctrl => {
                if !self.read_only {
                    self.insert_char(c);
                    return true;
                }
                false
            }
            Key::Backspace => {
                if !self.read_only {
                    if modifiers.ctrl_only() {
                        self.delete_word_backward();
                    } else {
                        self.delete_backward();
                    }
                    return true;
                }
                false
            }
            Key::Delete => {
                if !self.read_only {
                    if modifiers.ctrl_only() {
                        self.delete_word_forward();
                    } else {
                        self.delete_forward();
                    }
                    return true;
                }
                false
            }
            Key::Left => {
                let movement = if modifiers.ctrl_only() {
                    CaretMove::WordLeft
                } else {
                    CaretMove::Left
                };
                self.move_caret(movement);
                true
            }
            Key::Right => {
                let movement = if modifiers.ctrl_only() {
                    CaretMove::WordRight
                } else {
                    CaretMove::Right
                };
                self.move_caret(movement);
                true
            }
            Key::Home => {
                self.move_caret(CaretMove::Home);
                true
            }
            Key::End => {
                self.move_caret(CaretMove::End);
                true
            }
            Key::Enter => {
                if let Some(ref callback) = self.on_submit {
                    callback(&self.value);
                }
                true
            }
            // Focus traversal and dismissal belong to the parent.
            Key::Esc | Key::Tab | Key::BackTab | Key::Char(_) => false,
        }
    }

    /// Inserts a single character at the caret position.
    ///
    /// Characters rejected by the entry policy or exceeding the maximum
    /// length are dropped silently.
    pub fn insert_char(&mut self, c: char) {
        if self.read_only || c == '\n' || c == '\r' {
            return;
        }
        if !self.policy.accepts(c, &self.value) {
            return;
        }
        if self.max_graphemes > 0 && grapheme_count(&self.value) >= self.max_graphemes {
            return;
        }

        let offset = grapheme_to_byte_offset(&self.value, self.caret.col());
        self.value.insert(offset, c);
        let col = self.caret.col() + 1;
        self.caret.set(col, &self.value);
        self.ensure_caret_visible();
        self.emit_change();
    }

    /// Inserts text at the caret position (for paste-like operations).
    ///
    /// Only the first line is used; the entry policy and maximum length are
    /// applied per character.
    pub fn insert_str(&mut self, text: &str) {
        if self.read_only || text.is_empty() {
            return;
        }

        let line = text.lines().next().unwrap_or("");
        let mut inserted = 0;
        for c in line.chars() {
            if !self.policy.accepts(c, &self.value) {
                continue;
            }
            if self.max_graphemes > 0 && grapheme_count(&self.value) >= self.max_graphemes {
                break;
            }
            let offset = grapheme_to_byte_offset(&self.value, self.caret.col() + inserted);
            self.value.insert(offset, c);
            inserted += 1;
        }

        if inserted > 0 {
            let col = self.caret.col() + inserted;
            self.caret.set(col, &self.value);
            self.ensure_caret_visible();
            self.emit_change();
        }
    }

    /// Deletes the grapheme before the caret.
    pub fn delete_backward(&mut self) {
        if self.read_only || self.caret.col() == 0 {
            return;
        }
        let col = self.caret.col() - 1;
        self.remove_range(col, self.caret.col());
        self.caret.set(col, &self.value);
        self.ensure_caret_visible();
        self.emit_change();
    }

    /// Deletes the grapheme after the caret.
    pub fn delete_forward(&mut self) {
        if self.read_only || self.caret.col() >= grapheme_count(&self.value) {
            return;
        }
        self.remove_range(self.caret.col(), self.caret.col() + 1);
        self.ensure_caret_visible();
        self.emit_change();
    }

    /// Deletes from the start of the previous word to the caret.
    pub fn delete_word_backward(&mut self) {
        if self.read_only || self.caret.col() == 0 {
            return;
        }
        let end = self.caret.col();
        let mut probe = self.caret;
        probe.apply(&self.value, CaretMove::WordLeft);
        let start = probe.col();

        self.remove_range(start, end);
        self.caret.set(start, &self.value);
        self.ensure_caret_visible();
        self.emit_change();
    }

    /// Deletes from the caret to the end of the next word.
    pub fn delete_word_forward(&mut self) {
        if self.read_only || self.caret.col() >= grapheme_count(&self.value) {
            return;
        }
        let start = self.caret.col();
        let mut probe = self.caret;
        probe.apply(&self.value, CaretMove::WordRight);
        let end = probe.col();

        self.remove_range(start, end);
        self.ensure_caret_visible();
        self.emit_change();
    }

    /// Moves the caret.
    pub fn move_caret(&mut self, movement: CaretMove) {
        self.caret.apply(&self.value, movement);
        self.ensure_caret_visible();
    }

    fn remove_range(&mut self, start: usize, end: usize) {
        let start_byte = grapheme_to_byte_offset(&self.value, start);
        let end_byte = grapheme_to_byte_offset(&self.value, end);
        self.value.replace_range(start_byte..end_byte, "");
    }

    /// Adjusts the scroll offset so the caret stays inside the window.
    fn ensure_caret_visible(&mut self) {
        let caret = self.caret.col();
        if caret < self.scroll {
            self.scroll = caret;
            return;
        }

        let display = self.display_text();
        let widths: Vec<usize> = display.graphemes(true).map(|g| g.width()).collect();
        let max_cols = self.width as usize;

        // Leave one column for the caret cell itself.
        while self.scroll < caret {
            let used: usize = widths[self.scroll..caret].iter().sum();
            if used < max_cols {
                break;
            }
            self.scroll += 1;
        }
    }

    fn emit_change(&self) {
        if let Some(ref callback) = self.on_change {
            callback(&ChangeEvent {
                value: self.value.clone(),
                caret: self.caret.col(),
            });
        }
    }
}

/// Builder for [`LineEdit`].
#[derive(Default)]
pub struct LineEditBuilder {
    value: String,
    placeholder: String,
    mask: Option<char>,
    policy: EntryPolicy,
    max_graphemes: usize,
    width: Option<u16>,
    read_only: bool,
    on_change: Option<ChangeListener>,
    on_submit: Option<SubmitListener>,
}

impl LineEditBuilder {
    /// Sets the initial value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Sets the placeholder text.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the display mask character.
    pub fn mask(mut self, mask: char) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Sets the entry policy.
    pub fn policy(mut self, policy: EntryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the maximum length in graphemes.
    pub fn max_graphemes(mut self, max: usize) -> Self {
        self.max_graphemes = max;
        self
    }

    /// Sets the visual width in terminal columns.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width.max(1));
        self
    }

    /// Sets the read-only state.
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Sets the change callback.
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&ChangeEvent) + Send + Sync + 'static,
    {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Sets the submit callback (triggered on Enter).
    pub fn on_submit<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_submit = Some(Box::new(callback));
        self
    }

    /// Builds the line edit, with the caret at the end of the initial value.
    pub fn build(self) -> LineEdit {
        let mut edit = LineEdit {
            value: self.value,
            placeholder: self.placeholder,
            mask: self.mask,
            policy: self.policy,
            caret: Caret::new(),
            scroll: 0,
            max_graphemes: self.max_graphemes,
            width: self.width.unwrap_or(DEFAULT_ENTRY_WIDTH),
            focused: false,
            focusable: true,
            read_only: self.read_only,
            on_change: self.on_change,
            on_submit: self.on_submit,
        };
        edit.caret = Caret::at_end(&edit.value);
        edit.ensure_caret_visible();
        edit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_insert_and_delete() {
        let mut edit = LineEdit::new();
        for c in "hello".chars() {
            edit.insert_char(c);
        }
        assert_eq!(edit.value(), "hello");
        assert_eq!(edit.caret_col(), 5);

        edit.delete_backward();
        assert_eq!(edit.value(), "hell");

        edit.set_caret_col(2);
        edit.delete_forward();
        assert_eq!(edit.value(), "hel");
        assert_eq!(edit.caret_col(), 2);
    }

    #[test]
    fn test_insert_str_filters_newlines() {
        let mut edit = LineEdit::new();
        edit.insert_str("first\nsecond");
        assert_eq!(edit.value(), "first");
    }

    #[test]
    fn test_max_graphemes() {
        let mut edit = LineEdit::builder().max_graphemes(5).build();
        edit.insert_str("hello world");
        assert_eq!(edit.value(), "hello");
    }

    #[test]
    fn test_policy_digits() {
        let mut edit = LineEdit::builder().policy(EntryPolicy::Digits).build();
        edit.insert_str("a1b2c3");
        assert_eq!(edit.value(), "123");
    }

    #[test]
    fn test_policy_decimal_single_dot() {
        let mut edit = LineEdit::builder().policy(EntryPolicy::Decimal).build();
        edit.insert_str("3.14.15");
        assert_eq!(edit.value(), "3.1415");
    }

    #[test]
    fn test_policy_phone() {
        let mut edit = LineEdit::builder().policy(EntryPolicy::Phone).build();
        edit.insert_str("+1 (555) 123-4567x");
        assert_eq!(edit.value(), "+1 (555) 123-4567");
    }

    #[test]
    fn test_mask_display() {
        let mut edit = LineEdit::builder().mask('•').build();
        edit.insert_str("secret");
        assert_eq!(edit.display_text(), "••••••");
        assert_eq!(edit.value(), "secret");
    }

    #[test]
    fn test_read_only_rejects_edits() {
        let mut edit = LineEdit::builder().value("fixed").read_only(true).build();
        assert!(!edit.handle_key(Key::Char('x'), Modifiers::NONE));
        assert!(!edit.handle_key(Key::Backspace, Modifiers::NONE));
        assert_eq!(edit.value(), "fixed");

        // Caret movement is still allowed.
        assert!(edit.handle_key(Key::Home, Modifiers::NONE));
        assert_eq!(edit.caret_col(), 0);
    }

    #[test]
    fn test_unfocusable_ignores_keys() {
        let mut edit = LineEdit::new();
        edit.set_focusable(false);
        assert!(!edit.handle_key(Key::Char('x'), Modifiers::NONE));
        assert_eq!(edit.value(), "");

        edit.set_focused(true);
        assert!(!edit.is_focused());
    }

    #[test]
    fn test_word_editing() {
        let mut edit = LineEdit::builder().value("hello brave world").build();
        edit.handle_key(Key::Backspace, Modifiers::CTRL);
        assert_eq!(edit.value(), "hello brave ");

        edit.set_caret_col(0);
        edit.handle_key(Key::Delete, Modifiers::CTRL);
        assert_eq!(edit.value(), " brave ");
    }

    #[test]
    fn test_change_callback() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        let mut edit = LineEdit::builder()
            .on_change(move |event| {
                assert_eq!(event.caret, event.value.chars().count());
                seen.fetch_add(1, Ordering::SeqCst);
            })
            .build();

        edit.insert_char('a');
        edit.insert_char('b');
        edit.delete_backward();
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_submit_callback() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        let mut edit = LineEdit::builder()
            .value("done")
            .on_submit(move |value| {
                assert_eq!(value, "done");
                seen.fetch_add(1, Ordering::SeqCst);
            })
            .build();

        edit.handle_key(Key::Enter, Modifiers::NONE);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_visible_window_scrolls() {
        let mut edit = LineEdit::builder().width(5).build();
        edit.insert_str("abcdefghij");

        let window = edit.visible_window();
        assert!(window.text.len() <= 5);
        assert!(window.text.ends_with('j'));

        edit.move_caret(CaretMove::Home);
        let window = edit.visible_window();
        assert!(window.text.starts_with('a'));
        assert_eq!(window.caret_cols, 0);
    }

    #[test]
    fn test_unicode_editing() {
        let mut edit = LineEdit::new();
        edit.insert_str("héllo 🌍");
        assert_eq!(edit.value(), "héllo 🌍");
        assert_eq!(edit.caret_col(), 7);

        edit.delete_backward();
        assert_eq!(edit.value(), "héllo ");
    }
}
