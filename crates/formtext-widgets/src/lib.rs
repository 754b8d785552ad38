//! Formtext widgets library.
//!
//! This crate provides the form-input widgets for terminal UIs:
//!
//! - [`LineEdit`]: the single-line text-entry primitive (value editing,
//!   caret movement, placeholder, masking, entry policies, callbacks)
//! - [`TextField`]: the composite form field built around a `LineEdit` —
//!   a bordered box with required-field marking, read-only presentation,
//!   input-type shortcuts, floating-label control, and an error indicator
//!
//! Configuration flows one way: a declarative [`FieldAttributes`] bundle is
//! reconciled by `TextField` into the embedded primitive's properties;
//! imperative setters adjust the same presentation state afterwards.
//!
//! # Example
//!
//! ```
//! use formtext_widgets::{FieldAttributes, TextField};
//!
//! let mut field = TextField::from_attributes(FieldAttributes {
//!     hint: "Email".into(),
//!     required: true,
//!     ..FieldAttributes::default()
//! });
//!
//! assert_eq!(field.hint(), "Email *");
//! field.set_text("user@example.com");
//! assert_eq!(field.text(), "user@example.com");
//! ```

pub mod attrs;
pub mod border;
pub mod caret;
pub mod entry;
pub mod event;
pub mod field;
pub mod input_type;

pub use attrs::{
    FieldAttributes, DEFAULT_BOX_STROKE_WIDTH, DEFAULT_CORNER_RADIUS, DEFAULT_MAX_LINES,
};
pub use border::{BorderChars, BorderStyle};
pub use caret::{Caret, CaretMove};
pub use entry::{EntryPolicy, LineEdit, LineEditBuilder};
pub use event::{ChangeEvent, ChangeListener, Key, Modifiers, SubmitListener};
pub use field::{FieldPalette, TextField, REQUIRED_MARKER};
pub use input_type::{InputTypeKind, DEFAULT_INPUT_TYPE_ORDINAL};
