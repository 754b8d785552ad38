//! Border glyphs for the boxed field outline.
//!
//! The field's stroke width and corner radius reconcile into one of the
//! box-drawing glyph sets here. Heavy box-drawing has no rounded corner
//! glyphs, so a positive radius is honored only at light stroke weight.

/// Border glyph set variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    /// No border.
    None,
    /// Light single-line border.
    /// ```text
    /// ┌───┐
    /// │   │
    /// └───┘
    /// ```
    #[default]
    Light,
    /// Light border with rounded corners.
    /// ```text
    /// ╭───╮
    /// │   │
    /// ╰───╯
    /// ```
    Rounded,
    /// Heavy border.
    /// ```text
    /// ┏━━━┓
    /// ┃   ┃
    /// ┗━━━┛
    /// ```
    Heavy,
}

impl BorderStyle {
    /// Resolves the effective border style for a stroke width and corner
    /// radius.
    ///
    /// Stroke 0 disables the border, stroke ≥ 2 selects the heavy glyphs
    /// (always square-cornered), and stroke 1 picks rounded or square
    /// corners from the radius.
    pub fn resolve(stroke_width: u16, corner_radius: f32) -> Self {
        match stroke_width {
            0 => Self::None,
            1 => {
                if corner_radius > 0.0 {
                    Self::Rounded
                } else {
                    Self::Light
                }
            }
            _ => Self::Heavy,
        }
    }

    /// Returns the border characters for this style.
    pub fn chars(&self) -> BorderChars {
        match self {
            Self::None => BorderChars::EMPTY,
            Self::Light => BorderChars::LIGHT,
            Self::Rounded => BorderChars::ROUNDED,
            Self::Heavy => BorderChars::HEAVY,
        }
    }

    /// Returns true if this style has no border.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Characters used to draw a border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderChars {
    /// Top-left corner character.
    pub top_left: char,
    /// Top-right corner character.
    pub top_right: char,
    /// Bottom-left corner character.
    pub bottom_left: char,
    /// Bottom-right corner character.
    pub bottom_right: char,
    /// Horizontal edge character.
    pub horizontal: char,
    /// Vertical edge character.
    pub vertical: char,
}

impl BorderChars {
    /// Empty (space) border characters.
    pub const EMPTY: Self = Self {
        top_left: ' ',
        top_right: ' ',
        bottom_left: ' ',
        bottom_right: ' ',
        horizontal: ' ',
        vertical: ' ',
    };

    /// Light single-line box-drawing characters.
    pub const LIGHT: Self = Self {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
    };

    /// Rounded box-drawing characters.
    pub const ROUNDED: Self = Self {
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        horizontal: '─',
        vertical: '│',
    };

    /// Heavy box-drawing characters.
    pub const HEAVY: Self = Self {
        top_left: '┏',
        top_right: '┓',
        bottom_left: '┗',
        bottom_right: '┛',
        horizontal: '━',
        vertical: '┃',
    };
}

impl Default for BorderChars {
    fn default() -> Self {
        Self::LIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_stroke_zero() {
        assert_eq!(BorderStyle::resolve(0, 10.0), BorderStyle::None);
        assert!(BorderStyle::resolve(0, 0.0).is_none());
    }

    #[test]
    fn test_resolve_light_radius() {
        assert_eq!(BorderStyle::resolve(1, 10.0), BorderStyle::Rounded);
        assert_eq!(BorderStyle::resolve(1, 0.0), BorderStyle::Light);
    }

    #[test]
    fn test_resolve_heavy_ignores_radius() {
        assert_eq!(BorderStyle::resolve(2, 10.0), BorderStyle::Heavy);
        assert_eq!(BorderStyle::resolve(3, 0.0), BorderStyle::Heavy);
    }

    #[test]
    fn test_chars() {
        assert_eq!(BorderStyle::Rounded.chars().top_left, '╭');
        assert_eq!(BorderStyle::Heavy.chars().horizontal, '━');
        assert_eq!(BorderStyle::None.chars().vertical, ' ');
    }
}
