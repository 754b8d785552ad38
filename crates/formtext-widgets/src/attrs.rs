//! Declarative attribute bundle for field construction.
//!
//! [`FieldAttributes`] is the typed configuration a field is constructed
//! from. Every attribute has a documented default, so a bundle can be as
//! sparse as the caller likes. Dynamic bundles (a TOML table, e.g. one entry
//! of a form definition file) are read fail-soft: a malformed value is
//! logged and replaced by that attribute's default, and reading continues
//! with the remaining attributes. Construction never fails.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::input_type::DEFAULT_INPUT_TYPE_ORDINAL;

/// Default corner radius applied when the bundle does not set one.
pub const DEFAULT_CORNER_RADIUS: f32 = 10.0;

/// Default box stroke width, in stroke units (0 = no border, ≥ 2 = heavy).
pub const DEFAULT_BOX_STROKE_WIDTH: u16 = 1;

/// Default line limit: a single fixed-height line.
pub const DEFAULT_MAX_LINES: i32 = -1;

/// Declarative attribute surface consumed at field construction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldAttributes {
    /// Base hint text, without the required marker.
    pub hint: String,
    /// Enables the required-marker decoration.
    pub required: bool,
    /// Disables interaction and applies the disabled palette.
    pub read_only: bool,
    /// Corner rounding; values > 0 select rounded corners.
    pub radius: f32,
    /// Input-type ordinal (see [`crate::input_type::InputTypeKind`]).
    pub input_type: i64,
    /// Line-count behavior: ≤ 1 fixed single line, > 1 growable multi-line.
    pub max_lines: i32,
    /// Hint-as-floating-label (true) vs hint-as-placeholder-only (false).
    pub hint_floats: bool,
    /// Column-width override, applied only if > 0.
    pub field_width: u16,
    /// Box stroke width.
    pub stroke: u16,
}

impl Default for FieldAttributes {
    fn default() -> Self {
        Self {
            hint: String::new(),
            required: false,
            read_only: false,
            radius: DEFAULT_CORNER_RADIUS,
            input_type: DEFAULT_INPUT_TYPE_ORDINAL,
            max_lines: DEFAULT_MAX_LINES,
            hint_floats: true,
            field_width: 0,
            stroke: DEFAULT_BOX_STROKE_WIDTH,
        }
    }
}

impl FieldAttributes {
    /// Reads attributes from a dynamic TOML value, fail-soft.
    ///
    /// A value that is not a table yields the full defaults. Within a table,
    /// each malformed attribute is logged and individually replaced by its
    /// default; well-formed attributes are unaffected.
    pub fn from_value(value: &toml::Value) -> Self {
        let mut attrs = Self::default();

        let Some(table) = value.as_table() else {
            warn!("attribute bundle is not a table; using defaults");
            return attrs;
        };

        for (key, entry) in table {
            match key.as_str() {
                "hint" => {
                    if let Some(text) = entry.as_str() {
                        attrs.hint = text.to_string();
                    } else {
                        warn_malformed(key, entry);
                    }
                }
                "required" => read_bool(key, entry, &mut attrs.required),
                "read_only" => read_bool(key, entry, &mut attrs.read_only),
                "radius" => {
                    if let Some(radius) = as_f32(entry) {
                        attrs.radius = radius;
                    } else {
                        warn_malformed(key, entry);
                    }
                }
                "input_type" => {
                    if let Some(ordinal) = entry.as_integer() {
                        attrs.input_type = ordinal;
                    } else {
                        warn_malformed(key, entry);
                    }
                }
                "max_lines" => {
                    match entry.as_integer().map(i32::try_from) {
                        Some(Ok(lines)) => attrs.max_lines = lines,
                        _ => warn_malformed(key, entry),
                    }
                }
                "hint_floats" => read_bool(key, entry, &mut attrs.hint_floats),
                "field_width" => read_u16(key, entry, &mut attrs.field_width),
                "stroke" => read_u16(key, entry, &mut attrs.stroke),
                _ => debug!(attribute = %key, "ignoring unknown attribute"),
            }
        }

        attrs.validated()
    }

    /// Reads attributes from a TOML document string, fail-soft.
    pub fn from_toml_str(input: &str) -> Self {
        match input.parse::<toml::Value>() {
            Ok(value) => Self::from_value(&value),
            Err(error) => {
                warn!(%error, "unparseable attribute bundle; using defaults");
                Self::default()
            }
        }
    }

    /// Applies the value constraints, replacing out-of-range attributes by
    /// their defaults.
    pub fn validated(mut self) -> Self {
        if !(self.radius >= 0.0) {
            warn!(radius = f64::from(self.radius), "corner radius must be >= 0; using default");
            self.radius = DEFAULT_CORNER_RADIUS;
        }
        self
    }
}

fn read_bool(key: &str, entry: &toml::Value, target: &mut bool) {
    if let Some(flag) = entry.as_bool() {
        *target = flag;
    } else {
        warn_malformed(key, entry);
    }
}

fn read_u16(key: &str, entry: &toml::Value, target: &mut u16) {
    match entry.as_integer().map(u16::try_from) {
        Some(Ok(value)) => *target = value,
        _ => warn_malformed(key, entry),
    }
}

fn as_f32(entry: &toml::Value) -> Option<f32> {
    entry
        .as_float()
        .or_else(|| entry.as_integer().map(|i| i as f64))
        .map(|f| f as f32)
}

fn warn_malformed(key: &str, entry: &toml::Value) {
    warn!(
        attribute = %key,
        value = %entry,
        "malformed attribute; using default"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let attrs = FieldAttributes::default();
        assert_eq!(attrs.hint, "");
        assert!(!attrs.required);
        assert!(!attrs.read_only);
        assert_eq!(attrs.radius, DEFAULT_CORNER_RADIUS);
        assert_eq!(attrs.input_type, DEFAULT_INPUT_TYPE_ORDINAL);
        assert_eq!(attrs.max_lines, DEFAULT_MAX_LINES);
        assert!(attrs.hint_floats);
        assert_eq!(attrs.field_width, 0);
        assert_eq!(attrs.stroke, DEFAULT_BOX_STROKE_WIDTH);
    }

    #[test]
    fn test_from_toml_str() {
        let attrs = FieldAttributes::from_toml_str(
            r#"
            hint = "Name"
            required = true
            radius = 0.0
            input_type = 6
            "#,
        );
        assert_eq!(attrs.hint, "Name");
        assert!(attrs.required);
        assert_eq!(attrs.radius, 0.0);
        assert_eq!(attrs.input_type, 6);
        // Unset attributes keep their defaults.
        assert_eq!(attrs.max_lines, DEFAULT_MAX_LINES);
    }

    #[test]
    fn test_integer_radius_coerced() {
        let attrs = FieldAttributes::from_toml_str("radius = 4");
        assert_eq!(attrs.radius, 4.0);
    }

    #[test]
    fn test_malformed_field_falls_back() {
        let attrs = FieldAttributes::from_toml_str(
            r#"
            hint = "Name"
            required = "yes"
            radius = "round"
            "#,
        );
        // Malformed attributes take defaults, the rest is intact.
        assert_eq!(attrs.hint, "Name");
        assert!(!attrs.required);
        assert_eq!(attrs.radius, DEFAULT_CORNER_RADIUS);
    }

    #[test]
    fn test_negative_radius_rejected() {
        let attrs = FieldAttributes::from_toml_str("radius = -3.5");
        assert_eq!(attrs.radius, DEFAULT_CORNER_RADIUS);
    }

    #[test]
    fn test_unknown_attributes_ignored() {
        let attrs = FieldAttributes::from_toml_str(
            r#"
            hint = "Name"
            shimmer = true
            "#,
        );
        assert_eq!(attrs.hint, "Name");
    }

    #[test]
    fn test_unparseable_bundle_is_all_defaults() {
        let attrs = FieldAttributes::from_toml_str("hint = = broken");
        assert_eq!(attrs, FieldAttributes::default());
    }

    #[test]
    fn test_non_table_value() {
        let value = toml::Value::Integer(7);
        assert_eq!(FieldAttributes::from_value(&value), FieldAttributes::default());
    }

    #[test]
    fn test_serde_typed_path() {
        let attrs: FieldAttributes = toml::from_str(
            r#"
            hint = "Amount"
            input_type = 8
            stroke = 2
            "#,
        )
        .unwrap();
        assert_eq!(attrs.hint, "Amount");
        assert_eq!(attrs.input_type, 8);
        assert_eq!(attrs.stroke, 2);
        assert!(attrs.hint_floats);
    }
}
