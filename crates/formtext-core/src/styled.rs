//! Styled text spans for rich single-line output.
//!
//! A [`Span`] is a run of text with one [`Style`]; a [`StyledText`] is a
//! sequence of spans forming one logical line. Widgets produce `StyledText`
//! rows and leave the terminal encoding to the caller.

use crate::style::Style;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;
use unicode_width::UnicodeWidthStr;

/// A span of text with associated styling.
#[derive(Debug, Clone, PartialEq)]
pub struct Span<'a> {
    /// The text content.
    pub text: Cow<'a, str>,
    /// The style applied to this span.
    pub style: Style,
}

impl<'a> Span<'a> {
    /// Creates a new unstyled span.
    #[inline]
    pub fn new(text: impl Into<Cow<'a, str>>) -> Self {
        Self {
            text: text.into(),
            style: Style::new(),
        }
    }

    /// Creates a span with the given style.
    #[inline]
    pub fn styled(text: impl Into<Cow<'a, str>>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Returns the display width of this span in terminal columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.text.width()
    }

    /// Returns `true` if the span has no text.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Converts to an owned span (static lifetime).
    pub fn into_owned(self) -> Span<'static> {
        Span {
            text: Cow::Owned(self.text.into_owned()),
            style: self.style,
        }
    }
}

impl fmt::Display for Span<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl<'a> From<&'a str> for Span<'a> {
    fn from(s: &'a str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Span<'static> {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// A sequence of styled text spans forming one logical line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyledText<'a> {
    spans: SmallVec<[Span<'a>; 4]>,
}

impl<'a> StyledText<'a> {
    /// Creates empty styled text.
    #[inline]
    pub fn new() -> Self {
        Self {
            spans: SmallVec::new(),
        }
    }

    /// Creates styled text from a single span.
    #[inline]
    pub fn from_span(span: Span<'a>) -> Self {
        let mut st = Self::new();
        st.push(span);
        st
    }

    /// Creates unstyled text.
    #[inline]
    pub fn plain(text: impl Into<Cow<'a, str>>) -> Self {
        Self::from_span(Span::new(text))
    }

    /// Pushes a span to the end. Empty spans are dropped.
    #[inline]
    pub fn push(&mut self, span: Span<'a>) {
        if !span.is_empty() {
            self.spans.push(span);
        }
    }

    /// Pushes raw (unstyled) text.
    #[inline]
    pub fn push_str(&mut self, text: impl Into<Cow<'a, str>>) {
        self.push(Span::new(text));
    }

    /// Returns all spans.
    #[inline]
    pub fn spans(&self) -> &[Span<'a>] {
        &self.spans
    }

    /// Iterates over spans.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Span<'a>> {
        self.spans.iter()
    }

    /// Returns `true` if there are no spans.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Returns the number of spans.
    #[inline]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Returns the plain text content (all spans concatenated).
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_ref()).collect()
    }

    /// Returns the total display width in terminal columns.
    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    /// Extends with spans from another `StyledText`.
    #[inline]
    pub fn extend(&mut self, other: StyledText<'a>) {
        self.spans.extend(other.spans);
    }

    /// Encodes the line as an ANSI escape string, resetting styling at the end.
    pub fn to_ansi_string(&self) -> String {
        let mut out = String::new();
        for span in &self.spans {
            if span.style.is_empty() {
                out.push_str(&span.text);
            } else {
                out.push_str(&span.style.to_ansi());
                out.push_str(&span.text);
                out.push_str(Style::RESET);
            }
        }
        out
    }

    /// Converts to owned spans (static lifetime).
    pub fn into_owned(self) -> StyledText<'static> {
        StyledText {
            spans: self.spans.into_iter().map(Span::into_owned).collect(),
        }
    }
}

impl fmt::Display for StyledText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for span in &self.spans {
            write!(f, "{}", span.text)?;
        }
        Ok(())
    }
}

impl<'a, S: Into<Span<'a>>> FromIterator<S> for StyledText<'a> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut st = StyledText::new();
        for item in iter {
            st.push(item.into());
        }
        st
    }
}
