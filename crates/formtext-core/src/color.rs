//! RGBA color representation and manipulation.
//!
//! Colors are represented with normalized f32 components in the range 0.0 to
//! 1.0. Supported input formats:
//!
//! - Hex strings: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` (leading `#`
//!   optional)
//! - RGB u8 values: `(0-255, 0-255, 0-255)`
//! - A small set of named colors
//!
//! # Examples
//!
//! ```
//! use formtext_core::color::Color;
//!
//! let red = Color::from_hex("#FF0000").unwrap();
//! assert_eq!(red, Color::RED);
//!
//! let stroke = Color::from_rgb_u8(31, 117, 254);
//! assert_eq!(stroke.to_hex(), "#1F75FE");
//! ```

use crate::error::ColorParseError;
use std::fmt;

/// An RGBA color with normalized f32 components in the range 0.0 to 1.0.
#[derive(Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component (0.0 - 1.0).
    pub r: f32,
    /// Green component (0.0 - 1.0).
    pub g: f32,
    /// Blue component (0.0 - 1.0).
    pub b: f32,
    /// Alpha component (0.0 = transparent, 1.0 = opaque).
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 1.0 {
            write!(f, "Color::rgb({:.3}, {:.3}, {:.3})", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "Color::rgba({:.3}, {:.3}, {:.3}, {:.3})",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Color {
    /// Fully transparent color (alpha = 0).
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    /// Opaque black (#000000).
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Opaque white (#FFFFFF).
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    /// Opaque red (#FF0000).
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);

    /// Opaque green (#00FF00).
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);

    /// Opaque blue (#0000FF).
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);

    /// Opaque yellow (#FFFF00).
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);

    /// Opaque cyan (#00FFFF).
    pub const CYAN: Self = Self::rgb(0.0, 1.0, 1.0);

    /// Opaque magenta (#FF00FF).
    pub const MAGENTA: Self = Self::rgb(1.0, 0.0, 1.0);

    /// Opaque gray (#808080).
    pub const GRAY: Self = Self::rgb(0.5, 0.5, 0.5);

    /// Dark gray (#404040).
    pub const DARK_GRAY: Self = Self::rgb(0.25, 0.25, 0.25);

    /// Light gray (#C0C0C0).
    pub const LIGHT_GRAY: Self = Self::rgb(0.75, 0.75, 0.75);
}

// ============================================================================
// Constructors
// ============================================================================

impl Color {
    /// Creates a new color from normalized RGBA components.
    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new opaque color from normalized RGB components.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a new color from u8 RGBA components (0-255).
    #[inline]
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        const INV_255: f32 = 1.0 / 255.0;
        Self {
            r: r as f32 * INV_255,
            g: g as f32 * INV_255,
            b: b as f32 * INV_255,
            a: a as f32 * INV_255,
        }
    }

    /// Creates a new opaque color from u8 RGB components (0-255).
    #[inline]
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }
}

// ============================================================================
// Hex and named parsing
// ============================================================================

impl Color {
    /// Parses a color from a hex string.
    ///
    /// Supports `#RGB`, `#RGBA`, `#RRGGBB` and `#RRGGBBAA`; the `#` prefix is
    /// optional.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.is_empty() {
            return Err(ColorParseError::EmptyInput);
        }

        // Expand shorthand notation
        let expanded: String = match hex.len() {
            3 | 4 => hex
                .chars()
                .flat_map(|c| std::iter::repeat(c).take(2))
                .collect(),
            6 | 8 => hex.to_string(),
            len => return Err(ColorParseError::InvalidLength(len)),
        };

        if !expanded.is_ascii() {
            return Err(ColorParseError::InvalidHexChar);
        }

        let parse_component = |s: &str| -> Result<u8, ColorParseError> {
            u8::from_str_radix(s, 16).map_err(|_| ColorParseError::InvalidHexChar)
        };

        let r = parse_component(&expanded[0..2])?;
        let g = parse_component(&expanded[2..4])?;
        let b = parse_component(&expanded[4..6])?;
        let a = if expanded.len() == 8 {
            parse_component(&expanded[6..8])?
        } else {
            255
        };

        Ok(Self::from_rgba_u8(r, g, b, a))
    }

    /// Parses a color from a named color string or hex value.
    ///
    /// # Examples
    ///
    /// ```
    /// use formtext_core::color::Color;
    ///
    /// assert_eq!(Color::parse("red").unwrap(), Color::RED);
    /// assert_eq!(Color::parse("#0000FF").unwrap(), Color::BLUE);
    /// assert!(Color::parse("not-a-color").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        if input.is_empty() {
            return Err(ColorParseError::EmptyInput);
        }

        if let Some(color) = Self::from_name(input) {
            return Ok(color);
        }

        if input.starts_with('#') || input.chars().all(|c| c.is_ascii_hexdigit()) {
            return Self::from_hex(input);
        }

        Err(ColorParseError::UnknownColor(input.to_string()))
    }

    /// Returns a color for the given color name, or `None` if not found.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "transparent" => Some(Self::TRANSPARENT),
            "black" => Some(Self::BLACK),
            "white" => Some(Self::WHITE),
            "red" => Some(Self::RED),
            "green" | "lime" => Some(Self::GREEN),
            "blue" => Some(Self::BLUE),
            "yellow" => Some(Self::YELLOW),
            "cyan" | "aqua" => Some(Self::CYAN),
            "magenta" | "fuchsia" => Some(Self::MAGENTA),
            "gray" | "grey" => Some(Self::GRAY),
            "darkgray" | "darkgrey" => Some(Self::DARK_GRAY),
            "lightgray" | "lightgrey" | "silver" => Some(Self::LIGHT_GRAY),
            _ => None,
        }
    }

    /// Converts the color to a hex string.
    ///
    /// Returns `#RRGGBB` for opaque colors or `#RRGGBBAA` otherwise.
    pub fn to_hex(&self) -> String {
        let (r, g, b, a) = self.to_rgba_u8();
        if a == 255 {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }
}

// ============================================================================
// ANSI escape sequence generation
// ============================================================================

impl Color {
    /// Generates the ANSI escape sequence for setting this color as foreground.
    ///
    /// Uses 24-bit true color format: `\x1b[38;2;R;G;Bm`
    pub fn to_ansi_fg(&self) -> String {
        let (r, g, b, _) = self.to_rgba_u8();
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }

    /// Generates the ANSI escape sequence for setting this color as background.
    ///
    /// For transparent colors, returns the default background escape sequence.
    pub fn to_ansi_bg(&self) -> String {
        if self.is_transparent() {
            return "\x1b[49m".to_string();
        }
        let (r, g, b, _) = self.to_rgba_u8();
        format!("\x1b[48;2;{};{};{}m", r, g, b)
    }
}

// ============================================================================
// Component access and manipulation
// ============================================================================

impl Color {
    /// Returns the color components as u8 values (0-255).
    #[inline]
    pub fn to_rgba_u8(&self) -> (u8, u8, u8, u8) {
        (
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.a.clamp(0.0, 1.0) * 255.0).round() as u8,
        )
    }

    /// Returns the RGB components as u8 values (0-255).
    #[inline]
    pub fn to_rgb_u8(&self) -> (u8, u8, u8) {
        let (r, g, b, _) = self.to_rgba_u8();
        (r, g, b)
    }

    /// Returns whether the color is fully transparent (alpha ≈ 0).
    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.a < 0.001
    }

    /// Returns a new color with the specified alpha value.
    #[inline]
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a: alpha,
        }
    }

    /// Returns a lighter version of the color.
    ///
    /// `amount` is in the range 0.0 to 1.0, where 1.0 produces white.
    #[inline]
    pub fn lighten(self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        Self {
            r: self.r + (1.0 - self.r) * amount,
            g: self.g + (1.0 - self.g) * amount,
            b: self.b + (1.0 - self.b) * amount,
            a: self.a,
        }
    }

    /// Returns a darker version of the color.
    ///
    /// `amount` is in the range 0.0 to 1.0, where 1.0 produces black.
    #[inline]
    pub fn darken(self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        Self {
            r: self.r * (1.0 - amount),
            g: self.g * (1.0 - amount),
            b: self.b * (1.0 - amount),
            a: self.a,
        }
    }

    /// Returns true if this color is approximately equal to another.
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::from_rgb_u8(r, g, b)
    }
}
