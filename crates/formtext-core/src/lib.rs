//! Core types for `formtext`.
//!
//! This crate provides the presentation building blocks the widget crate is
//! built from:
//!
//! - [`color`]: RGBA color representation with hex/named parsing and ANSI
//!   escape generation
//! - [`style`]: text styling with colors and attributes (bold, italic, etc.)
//! - [`styled`]: styled text spans for rich single-line output
//! - [`error`]: error types for the core library
//!
//! # Examples
//!
//! ```
//! use formtext_core::{Color, Span, Style, StyledText};
//!
//! let label_style = Style::new().fg(Color::GRAY).italic();
//! let marker_style = Style::new().fg(Color::RED);
//!
//! let mut hint = StyledText::new();
//! hint.push(Span::styled("Name", label_style));
//! hint.push(Span::styled(" *", marker_style));
//!
//! assert_eq!(hint.plain_text(), "Name *");
//! assert_eq!(hint.width(), 6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::float_cmp)]

pub mod color;
pub mod error;
pub mod style;
pub mod styled;

pub use color::Color;
pub use error::ColorParseError;
pub use style::{Style, TextAttributes};
pub use styled::{Span, StyledText};
