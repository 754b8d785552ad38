//! Input-type shortcuts for the form field.
//!
//! An [`InputTypeKind`] is a declarative shortcut that maps onto the entry
//! primitive's native policy and masking flags. The ordinal encoding matches
//! the declarative attribute surface; unrecognized ordinals decode to `None`
//! and leave the primitive's defaults untouched.

use crate::entry::EntryPolicy;

/// Ordinal used when the declarative bundle does not name an input type.
pub const DEFAULT_INPUT_TYPE_ORDINAL: i64 = 2;

/// Mask character used for password entry.
pub const PASSWORD_MASK_CHAR: char = '•';

/// Input-type shortcuts selectable on a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputTypeKind {
    /// Whole-number entry: digits only.
    Digit,
    /// Generic free text (the default).
    Text,
    /// Person-name text.
    Name,
    /// Postal-address text.
    Address,
    /// Email-address text.
    Email,
    /// Phone-number entry.
    Phone,
    /// Masked text entry.
    Password,
    /// Decimal-number entry: digits plus one decimal point.
    DecimalDigit,
}

impl Default for InputTypeKind {
    fn default() -> Self {
        Self::Text
    }
}

impl InputTypeKind {
    /// Decodes an attribute ordinal. Unrecognized ordinals yield `None`,
    /// meaning no input-type mapping is applied.
    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        match ordinal {
            1 => Some(Self::Digit),
            2 => Some(Self::Text),
            3 => Some(Self::Name),
            4 => Some(Self::Address),
            5 => Some(Self::Email),
            6 => Some(Self::Phone),
            7 => Some(Self::Password),
            8 => Some(Self::DecimalDigit),
            _ => None,
        }
    }

    /// Returns the attribute ordinal for this kind.
    pub const fn ordinal(self) -> i64 {
        match self {
            Self::Digit => 1,
            Self::Text => 2,
            Self::Name => 3,
            Self::Address => 4,
            Self::Email => 5,
            Self::Phone => 6,
            Self::Password => 7,
            Self::DecimalDigit => 8,
        }
    }

    /// Returns the entry policy this kind maps to.
    ///
    /// Name, address, and email entry have no character class to enforce at
    /// a terminal; they fall through to unrestricted entry.
    pub const fn entry_policy(self) -> EntryPolicy {
        match self {
            Self::Digit => EntryPolicy::Digits,
            Self::DecimalDigit => EntryPolicy::Decimal,
            Self::Phone => EntryPolicy::Phone,
            Self::Text | Self::Name | Self::Address | Self::Email | Self::Password => {
                EntryPolicy::Unrestricted
            }
        }
    }

    /// Returns true if this kind masks the displayed value.
    pub const fn masks_input(self) -> bool {
        matches!(self, Self::Password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_roundtrip() {
        for kind in [
            InputTypeKind::Digit,
            InputTypeKind::Text,
            InputTypeKind::Name,
            InputTypeKind::Address,
            InputTypeKind::Email,
            InputTypeKind::Phone,
            InputTypeKind::Password,
            InputTypeKind::DecimalDigit,
        ] {
            assert_eq!(InputTypeKind::from_ordinal(kind.ordinal()), Some(kind));
        }
    }

    #[test]
    fn test_unrecognized_ordinal() {
        assert_eq!(InputTypeKind::from_ordinal(0), None);
        assert_eq!(InputTypeKind::from_ordinal(99), None);
        assert_eq!(InputTypeKind::from_ordinal(-1), None);
    }

    #[test]
    fn test_default_ordinal_is_text() {
        assert_eq!(
            InputTypeKind::from_ordinal(DEFAULT_INPUT_TYPE_ORDINAL),
            Some(InputTypeKind::Text)
        );
    }

    #[test]
    fn test_policies() {
        assert_eq!(InputTypeKind::Digit.entry_policy(), EntryPolicy::Digits);
        assert_eq!(
            InputTypeKind::DecimalDigit.entry_policy(),
            EntryPolicy::Decimal
        );
        assert_eq!(InputTypeKind::Phone.entry_policy(), EntryPolicy::Phone);
        assert_eq!(InputTypeKind::Email.entry_policy(), EntryPolicy::Unrestricted);
        assert!(InputTypeKind::Password.masks_input());
        assert!(!InputTypeKind::Text.masks_input());
    }
}
