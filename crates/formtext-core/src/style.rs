//! Text styling for terminal rendering.
//!
//! The main types are:
//!
//! - [`TextAttributes`]: bitflags for text decorations (bold, italic, ...)
//! - [`Style`]: complete styling information including colors and attributes
//!
//! # Examples
//!
//! ```
//! use formtext_core::style::{Style, TextAttributes};
//! use formtext_core::color::Color;
//!
//! let error_style = Style::new().fg(Color::RED).bold();
//!
//! let base = Style::new().fg(Color::WHITE);
//! let highlight = Style::new().bg(Color::YELLOW).bold();
//! let combined = base.merge(&highlight);
//! assert_eq!(combined.fg, Some(Color::WHITE));
//! assert!(combined.is_bold());
//! ```

use crate::color::Color;
use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Text decoration attributes as a compact bitfield.
    ///
    /// Terminal text has no font families or point sizes; these attribute
    /// flags are the full set of typographic variation available.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TextAttributes: u8 {
        /// Bold/bright text.
        const BOLD          = 0b0000_0001;
        /// Dim/faint text.
        const DIM           = 0b0000_0010;
        /// Italic text.
        const ITALIC        = 0b0000_0100;
        /// Underlined text.
        const UNDERLINE     = 0b0000_1000;
        /// Reverse/inverse video (swap fg and bg colors).
        const REVERSE       = 0b0001_0000;
        /// Hidden/invisible text.
        const HIDDEN        = 0b0010_0000;
        /// Strikethrough text.
        const STRIKETHROUGH = 0b0100_0000;
    }
}

impl TextAttributes {
    /// No attributes set (alias for `empty()`).
    pub const NONE: Self = Self::empty();

    /// Returns the ANSI SGR codes for these attributes.
    pub fn to_ansi_codes(&self) -> smallvec::SmallVec<[u8; 8]> {
        let mut codes = smallvec::SmallVec::new();

        if self.contains(Self::BOLD) {
            codes.push(1);
        }
        if self.contains(Self::DIM) {
            codes.push(2);
        }
        if self.contains(Self::ITALIC) {
            codes.push(3);
        }
        if self.contains(Self::UNDERLINE) {
            codes.push(4);
        }
        if self.contains(Self::REVERSE) {
            codes.push(7);
        }
        if self.contains(Self::HIDDEN) {
            codes.push(8);
        }
        if self.contains(Self::STRIKETHROUGH) {
            codes.push(9);
        }

        codes
    }

    /// Generates the ANSI escape sequences for these attributes.
    pub fn to_ansi_string(&self) -> String {
        self.to_ansi_codes()
            .iter()
            .map(|code| format!("\x1b[{}m", code))
            .collect()
    }
}

impl fmt::Display for TextAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.contains(Self::BOLD) {
            parts.push("bold");
        }
        if self.contains(Self::DIM) {
            parts.push("dim");
        }
        if self.contains(Self::ITALIC) {
            parts.push("italic");
        }
        if self.contains(Self::UNDERLINE) {
            parts.push("underline");
        }
        if self.contains(Self::REVERSE) {
            parts.push("reverse");
        }
        if self.contains(Self::HIDDEN) {
            parts.push("hidden");
        }
        if self.contains(Self::STRIKETHROUGH) {
            parts.push("strikethrough");
        }

        if parts.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", parts.join(", "))
        }
    }
}

/// Complete style information for terminal text.
///
/// A `Style` combines an optional foreground color, an optional background
/// color, and text attributes. `None` colors mean the terminal default.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Style {
    /// Foreground (text) color. `None` means use the terminal's default.
    pub fg: Option<Color>,
    /// Background color. `None` means use the terminal's default.
    pub bg: Option<Color>,
    /// Text decoration attributes.
    pub attributes: TextAttributes,
}

impl Style {
    /// The ANSI reset sequence that clears all formatting.
    pub const RESET: &'static str = "\x1b[0m";

    /// Creates a new empty style with no colors and no attributes.
    #[inline]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attributes: TextAttributes::empty(),
        }
    }

    /// Creates a style with the given foreground color only.
    #[inline]
    pub const fn with_fg(fg: Color) -> Self {
        Self {
            fg: Some(fg),
            bg: None,
            attributes: TextAttributes::empty(),
        }
    }

    /// Creates a style with the given attributes only.
    #[inline]
    pub const fn with_attributes(attributes: TextAttributes) -> Self {
        Self {
            fg: None,
            bg: None,
            attributes,
        }
    }

    /// Returns `true` if this style has no colors and no attributes set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attributes.is_empty()
    }

    /// Sets the foreground color.
    #[inline]
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Sets the background color.
    #[inline]
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Adds the specified attributes to the style.
    #[inline]
    pub const fn add_attributes(mut self, attrs: TextAttributes) -> Self {
        self.attributes = self.attributes.union(attrs);
        self
    }

    /// Adds the bold attribute.
    #[inline]
    pub const fn bold(self) -> Self {
        self.add_attributes(TextAttributes::BOLD)
    }

    /// Adds the dim attribute.
    #[inline]
    pub const fn dim(self) -> Self {
        self.add_attributes(TextAttributes::DIM)
    }

    /// Adds the italic attribute.
    #[inline]
    pub const fn italic(self) -> Self {
        self.add_attributes(TextAttributes::ITALIC)
    }

    /// Adds the underline attribute.
    #[inline]
    pub const fn underline(self) -> Self {
        self.add_attributes(TextAttributes::UNDERLINE)
    }

    /// Adds the reverse/inverse attribute.
    #[inline]
    pub const fn reverse(self) -> Self {
        self.add_attributes(TextAttributes::REVERSE)
    }

    /// Returns `true` if the bold attribute is set.
    #[inline]
    pub const fn is_bold(&self) -> bool {
        self.attributes.contains(TextAttributes::BOLD)
    }

    /// Returns `true` if the italic attribute is set.
    #[inline]
    pub const fn is_italic(&self) -> bool {
        self.attributes.contains(TextAttributes::ITALIC)
    }

    /// Returns `true` if the underline attribute is set.
    #[inline]
    pub const fn is_underline(&self) -> bool {
        self.attributes.contains(TextAttributes::UNDERLINE)
    }

    /// Merges another style into this one.
    ///
    /// Colors from `other` take precedence when set; attributes are unioned.
    #[inline]
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attributes: self.attributes | other.attributes,
        }
    }

    /// Generates the complete ANSI escape sequence for this style.
    pub fn to_ansi(&self) -> String {
        let mut result = String::new();

        if let Some(fg) = self.fg {
            result.push_str(&fg.to_ansi_fg());
        }
        if let Some(bg) = self.bg {
            result.push_str(&bg.to_ansi_bg());
        }
        result.push_str(&self.attributes.to_ansi_string());

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_combine() {
        let attrs = TextAttributes::BOLD | TextAttributes::ITALIC;
        assert!(attrs.contains(TextAttributes::BOLD));
        assert!(attrs.contains(TextAttributes::ITALIC));
        assert!(!attrs.contains(TextAttributes::DIM));
    }

    #[test]
    fn test_attributes_ansi_codes() {
        let attrs = TextAttributes::BOLD | TextAttributes::UNDERLINE;
        let codes = attrs.to_ansi_codes();
        assert!(codes.contains(&1));
        assert!(codes.contains(&4));
        assert_eq!(codes.len(), 2);
    }

    #[test]
    fn test_attributes_display() {
        let attrs = TextAttributes::BOLD | TextAttributes::ITALIC;
        let display = attrs.to_string();
        assert!(display.contains("bold"));
        assert!(display.contains("italic"));
        assert_eq!(TextAttributes::empty().to_string(), "none");
    }

    #[test]
    fn test_style_builder() {
        let style = Style::new().fg(Color::RED).bg(Color::BLACK).bold();
        assert_eq!(style.fg, Some(Color::RED));
        assert_eq!(style.bg, Some(Color::BLACK));
        assert!(style.is_bold());
        assert!(!style.is_italic());
    }

    #[test]
    fn test_style_merge() {
        let base = Style::new().fg(Color::WHITE).bg(Color::BLACK);
        let patch = Style::new().fg(Color::RED).bold();

        let merged = base.merge(&patch);

        assert_eq!(merged.fg, Some(Color::RED));
        assert_eq!(merged.bg, Some(Color::BLACK));
        assert!(merged.is_bold());
    }

    #[test]
    fn test_style_to_ansi() {
        let style = Style::new().fg(Color::from_rgb_u8(255, 0, 0)).bold();
        let ansi = style.to_ansi();
        assert!(ansi.contains("38;2;255;0;0"));
        assert!(ansi.contains("\x1b[1m"));
    }

    #[test]
    fn test_style_is_empty() {
        assert!(Style::new().is_empty());
        assert!(!Style::new().fg(Color::RED).is_empty());
        assert!(!Style::new().bold().is_empty());
    }
}
