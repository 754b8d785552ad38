//! Formtext: form text-field widgets for terminal UIs.
//!
//! This crate is a facade over the workspace members:
//!
//! - [`core`]: colors, styles, and styled text spans
//! - [`widgets`]: the [`LineEdit`](widgets::LineEdit) text-entry primitive and
//!   the composite [`TextField`](widgets::TextField) form widget
//!
//! # Example
//!
//! ```
//! use formtext::prelude::*;
//!
//! let attrs = FieldAttributes {
//!     hint: "Name".into(),
//!     required: true,
//!     ..FieldAttributes::default()
//! };
//! let mut field = TextField::from_attributes(attrs);
//!
//! assert_eq!(field.hint(), "Name *");
//! field.set_required(false);
//! assert_eq!(field.hint(), "Name");
//! ```

pub use formtext_core as core;
pub use formtext_widgets as widgets;

pub mod prelude {
    //! Commonly used types, re-exported in one place.

    pub use formtext_core::{Color, ColorParseError, Span, Style, StyledText, TextAttributes};
    pub use formtext_widgets::{
        ChangeEvent, EntryPolicy, FieldAttributes, FieldPalette, InputTypeKind, Key, LineEdit,
        Modifiers, TextField,
    };
}
