//! The composite form text-field widget.
//!
//! [`TextField`] wraps a [`LineEdit`] in a bordered box and layers form
//! semantics on top: a hint with an optional required marker, read-only
//! presentation, input-type shortcuts, floating-label control, and an error
//! indicator. It owns its primitive for its whole lifetime; configuration
//! flows one way, from the declarative bundle and the setters into the
//! primitive's properties.

use std::fmt;

use formtext_core::{Color, ColorParseError, Span, Style, StyledText, TextAttributes};
use tracing::{debug, warn};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::attrs::{FieldAttributes, DEFAULT_BOX_STROKE_WIDTH, DEFAULT_CORNER_RADIUS, DEFAULT_MAX_LINES};
use crate::border::BorderStyle;
use crate::entry::LineEdit;
use crate::event::{ChangeEvent, ChangeListener, Key, Modifiers};
use crate::input_type::{InputTypeKind, PASSWORD_MASK_CHAR};

/// The literal two-character suffix appended to a required field's hint.
pub const REQUIRED_MARKER: &str = " *";

/// Color roles used by the field's box presentation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldPalette {
    /// Stroke color of the resting box.
    pub stroke: Color,
    /// Stroke color while the field has focus.
    pub stroke_focused: Color,
    /// Hint/label text color.
    pub hint: Color,
    /// Required-marker color.
    pub marker: Color,
    /// Error indicator color (also repaints the stroke while active).
    pub error: Color,
    /// Fixed color applied to stroke and text in read-only presentation.
    pub disabled: Color,
}

impl Default for FieldPalette {
    fn default() -> Self {
        let stroke = Color::from_rgb_u8(31, 117, 254);
        Self {
            stroke,
            stroke_focused: stroke.lighten(0.25),
            hint: Color::GRAY,
            marker: Color::RED,
            error: Color::RED,
            disabled: Color::LIGHT_GRAY,
        }
    }
}

/// The hint and its marker state, rendered to styled output at display time.
///
/// Keeping the base text and the flag separate makes marker toggling
/// idempotent: the marker exists in the output, never in the stored text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct HintDecoration {
    base: String,
    required: bool,
}

impl HintDecoration {
    /// The displayed hint text: base plus the marker when required.
    fn display(&self) -> String {
        if self.required {
            format!("{}{}", self.base, REQUIRED_MARKER)
        } else {
            self.base.clone()
        }
    }

    /// Renders the displayed hint, marker styled separately.
    fn styled(&self, base_style: Style, marker_style: Style) -> StyledText<'static> {
        let mut text = StyledText::new();
        text.push(Span::styled(self.base.clone(), base_style));
        if self.required {
            text.push(Span::styled(REQUIRED_MARKER, marker_style));
        }
        text
    }
}

/// A bordered single-line form text field.
///
/// # Example
///
/// ```
/// use formtext_widgets::{FieldAttributes, TextField};
///
/// let mut field = TextField::from_attributes(FieldAttributes {
///     hint: "Name".into(),
///     required: true,
///     ..FieldAttributes::default()
/// });
/// assert_eq!(field.hint(), "Name *");
///
/// field.set_required(false);
/// assert_eq!(field.hint(), "Name");
/// ```
pub struct TextField {
    hint: HintDecoration,
    read_only: bool,
    corner_radius: f32,
    box_stroke_width: u16,
    max_lines: i32,
    input_type: InputTypeKind,
    hint_floats: bool,
    palette: FieldPalette,
    text_color: Option<Color>,
    text_style: TextAttributes,
    hint_style: TextAttributes,
    error: Option<String>,
    listeners: Vec<ChangeListener>,
    edit: LineEdit,
}

impl fmt::Debug for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextField")
            .field("hint", &self.hint)
            .field("read_only", &self.read_only)
            .field("corner_radius", &self.corner_radius)
            .field("box_stroke_width", &self.box_stroke_width)
            .field("max_lines", &self.max_lines)
            .field("input_type", &self.input_type)
            .field("hint_floats", &self.hint_floats)
            .field("text_color", &self.text_color)
            .field("text_style", &self.text_style)
            .field("hint_style", &self.hint_style)
            .field("error", &self.error)
            .field("listeners", &self.listeners.len())
            .field("edit", &self.edit)
            .finish()
    }
}

impl Default for TextField {
    fn default() -> Self {
        Self::new()
    }
}

impl TextField {
    /// Creates a field with all attributes at their documented defaults.
    pub fn new() -> Self {
        Self {
            hint: HintDecoration::default(),
            read_only: false,
            corner_radius: DEFAULT_CORNER_RADIUS,
            box_stroke_width: DEFAULT_BOX_STROKE_WIDTH,
            max_lines: DEFAULT_MAX_LINES,
            input_type: InputTypeKind::default(),
            hint_floats: true,
            palette: FieldPalette::default(),
            text_color: None,
            text_style: TextAttributes::NONE,
            hint_style: TextAttributes::NONE,
            error: None,
            listeners: Vec::new(),
            edit: LineEdit::new(),
        }
    }

    /// Constructs a field from a declarative attribute bundle.
    ///
    /// The bundle has already been validated fail-soft; nothing here can
    /// fail. An unrecognized input-type ordinal applies no mapping and the
    /// primitive keeps its default entry mode.
    pub fn from_attributes(attrs: FieldAttributes) -> Self {
        let attrs = attrs.validated();
        let mut field = Self::new();

        field.set_hint(attrs.hint);
        field.set_required(attrs.required);
        field.set_corner_radius(attrs.radius);
        field.set_box_stroke_width(attrs.stroke);
        field.set_max_lines(attrs.max_lines);
        field.set_hint_floats(attrs.hint_floats);
        if attrs.field_width > 0 {
            field.edit.set_width(attrs.field_width);
        }
        match InputTypeKind::from_ordinal(attrs.input_type) {
            Some(kind) => field.set_input_type(kind),
            None => debug!(
                ordinal = attrs.input_type,
                "unrecognized input type ordinal; keeping default entry mode"
            ),
        }
        field.set_read_only(attrs.read_only);

        field
    }

    // ========================================================================
    // Hint and required marker
    // ========================================================================

    /// Sets the base hint text; the marker decoration is re-derived from the
    /// current required state.
    pub fn set_hint(&mut self, hint: impl Into<String>) {
        self.hint.base = hint.into();
        self.sync_placeholder();
    }

    /// Returns the displayed hint: the base text, plus the marker suffix
    /// when the field is required.
    pub fn hint(&self) -> String {
        self.hint.display()
    }

    /// Returns the base hint text without decoration.
    pub fn hint_base(&self) -> &str {
        &self.hint.base
    }

    /// Toggles the required-marker decoration. Idempotent: repeated calls
    /// with the same value leave exactly one marker (or none).
    pub fn set_required(&mut self, required: bool) {
        self.hint.required = required;
        self.sync_placeholder();
    }

    /// Returns true if the field is marked required.
    pub fn is_required(&self) -> bool {
        self.hint.required
    }

    fn sync_placeholder(&mut self) {
        self.edit.set_placeholder(self.hint.display());
    }

    // ========================================================================
    // Read-only presentation
    // ========================================================================

    /// Switches the field into read-only presentation: interaction is
    /// disabled and stroke/text repaint to the disabled palette color.
    ///
    /// The transition is one-way; `set_read_only(false)` on a read-only
    /// field is an unsupported no-op and logs a warning.
    pub fn set_read_only(&mut self, read_only: bool) {
        if read_only {
            self.read_only = true;
            self.edit.set_read_only(true);
            self.edit.set_focusable(false);
        } else if self.read_only {
            warn!("read-only presentation cannot be reverted; ignoring");
        }
    }

    /// Returns true if the field is in read-only presentation.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    // ========================================================================
    // Input type, lines, sizing
    // ========================================================================

    /// Applies an input-type shortcut: the corresponding entry policy and
    /// mask flag are forwarded into the primitive.
    pub fn set_input_type(&mut self, kind: InputTypeKind) {
        self.input_type = kind;
        self.edit.set_policy(kind.entry_policy());
        self.edit.set_mask(kind.masks_input().then_some(PASSWORD_MASK_CHAR));
    }

    /// Returns the current input-type shortcut.
    pub fn input_type(&self) -> InputTypeKind {
        self.input_type
    }

    /// Sets the line-count behavior: `n ≤ 1` is a single fixed-height line,
    /// `n > 1` grows with content up to `n` rows of wrapped text.
    pub fn set_max_lines(&mut self, max_lines: i32) {
        self.max_lines = max_lines;
    }

    /// Returns the configured line limit.
    pub fn max_lines(&self) -> i32 {
        self.max_lines
    }

    fn line_capacity(&self) -> usize {
        if self.max_lines <= 1 {
            1
        } else {
            self.max_lines as usize
        }
    }

    /// Sets the maximum value length in graphemes (0 = unlimited).
    pub fn set_max_length(&mut self, max: usize) {
        self.edit.set_max_graphemes(max);
    }

    // ========================================================================
    // Text value
    // ========================================================================

    /// Sets the text value.
    ///
    /// Empty input is a no-op and the existing text is preserved; use
    /// [`clear_text`](Self::clear_text) to erase explicitly.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        self.edit.set_value(text);
        self.notify_change();
    }

    /// Returns the current text value.
    pub fn text(&self) -> &str {
        self.edit.value()
    }

    /// Erases the text value.
    pub fn clear_text(&mut self) {
        if self.edit.value().is_empty() {
            return;
        }
        self.edit.clear();
        self.notify_change();
    }

    // ========================================================================
    // Colors, fonts, box
    // ========================================================================

    /// Sets the value text color from a hex or named color string.
    ///
    /// A malformed color string is a programming mistake and is surfaced as
    /// an error rather than swallowed.
    pub fn set_text_color(&mut self, color: &str) -> Result<(), ColorParseError> {
        self.text_color = Some(Color::parse(color)?);
        Ok(())
    }

    /// Returns the value text color override, if set.
    pub fn text_color(&self) -> Option<Color> {
        self.text_color
    }

    /// Sets the text attribute set applied to the value text.
    pub fn set_font_style(&mut self, style: TextAttributes) {
        self.text_style = style;
    }

    /// Returns the value text attribute set.
    pub fn font_style(&self) -> TextAttributes {
        self.text_style
    }

    /// Sets the text attribute set applied to the hint/label.
    pub fn set_hint_font_style(&mut self, style: TextAttributes) {
        self.hint_style = style;
    }

    /// Returns the hint/label attribute set.
    pub fn hint_font_style(&self) -> TextAttributes {
        self.hint_style
    }

    /// Sets the box stroke width: 0 removes the border, 1 draws a light
    /// stroke, 2 or more draws a heavy stroke. Heavy box-drawing has no
    /// rounded corner glyphs, so the corner radius applies at width 1 only.
    pub fn set_box_stroke_width(&mut self, width: u16) {
        self.box_stroke_width = width;
    }

    /// Returns the box stroke width.
    pub fn box_stroke_width(&self) -> u16 {
        self.box_stroke_width
    }

    /// Sets the corner radius; values above zero select rounded corners.
    /// Negative input clamps to zero.
    pub fn set_corner_radius(&mut self, radius: f32) {
        if radius >= 0.0 {
            self.corner_radius = radius;
        } else {
            warn!(radius = f64::from(radius), "corner radius must be >= 0; clamping to 0");
            self.corner_radius = 0.0;
        }
    }

    /// Returns the corner radius.
    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    /// Sets whether the hint floats into the top border once the field is
    /// focused or filled, or stays a placeholder only.
    pub fn set_hint_floats(&mut self, floats: bool) {
        self.hint_floats = floats;
    }

    /// Returns true if the hint floats into the top border.
    pub fn hint_floats(&self) -> bool {
        self.hint_floats
    }

    /// Replaces the color palette.
    pub fn set_palette(&mut self, palette: FieldPalette) {
        self.palette = palette;
    }

    /// Returns the color palette.
    pub fn palette(&self) -> &FieldPalette {
        &self.palette
    }

    // ========================================================================
    // Error indicator
    // ========================================================================

    /// Shows a validation-failure indicator under the field. It is cleared
    /// automatically by the next text mutation.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Returns the active error indicator, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    // ========================================================================
    // Focus and events
    // ========================================================================

    /// Requests input focus. Refused in read-only presentation.
    pub fn focus(&mut self) {
        self.edit.set_focused(true);
    }

    /// Releases input focus.
    pub fn blur(&mut self) {
        self.edit.set_focused(false);
    }

    /// Returns true if the field has input focus.
    pub fn is_focused(&self) -> bool {
        self.edit.is_focused()
    }

    /// Returns true if the field can take focus.
    pub fn is_focusable(&self) -> bool {
        self.edit.is_focusable()
    }

    /// Registers a listener invoked on every text mutation.
    pub fn add_change_listener<F>(&mut self, listener: F)
    where
        F: Fn(&ChangeEvent) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Handles a key event. Returns true if the event was consumed.
    ///
    /// Read-only fields consume nothing. Any text mutation clears the error
    /// indicator and notifies the change listeners.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> bool {
        if self.read_only {
            return false;
        }

        let before = self.edit.value().to_owned();
        let handled = self.edit.handle_key(key, modifiers);
        if handled && self.edit.value() != before {
            self.notify_change();
        }
        handled
    }

    /// Returns the embedded text-entry primitive.
    pub fn line_edit(&self) -> &LineEdit {
        &self.edit
    }

    /// Returns the embedded text-entry primitive mutably.
    ///
    /// Mutations made directly on the primitive bypass the field's change
    /// notification.
    pub fn line_edit_mut(&mut self) -> &mut LineEdit {
        &mut self.edit
    }

    fn notify_change(&mut self) {
        if self.error.take().is_some() {
            debug!("error indicator cleared by text change");
        }
        let event = ChangeEvent {
            value: self.edit.value().to_owned(),
            caret: self.edit.caret_col(),
        };
        for listener in &self.listeners {
            listener(&event);
        }
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Renders the field to styled rows: border, content, and error line.
    ///
    /// The output is a pure function of the presentation state; the caller
    /// encodes the rows for its terminal.
    pub fn render(&self) -> Vec<StyledText<'static>> {
        let border = BorderStyle::resolve(self.box_stroke_width, self.corner_radius);
        let chars = border.chars();
        let inner_width = self.edit.width() as usize + 2;
        let stroke_style = Style::with_fg(self.stroke_color());

        let mut rows = Vec::new();

        if !border.is_none() {
            rows.push(self.top_border_row(&chars, inner_width, stroke_style));
        }

        for content in self.content_rows() {
            rows.push(self.boxed_row(content, border, &chars, stroke_style));
        }

        if !border.is_none() {
            let mut bottom = StyledText::new();
            bottom.push(Span::styled(
                format!(
                    "{}{}{}",
                    chars.bottom_left,
                    chars.horizontal.to_string().repeat(inner_width),
                    chars.bottom_right
                ),
                stroke_style,
            ));
            rows.push(bottom);
        }

        if let Some(message) = &self.error {
            let mut row = StyledText::new();
            row.push(Span::styled(
                format!("  {}", message),
                Style::with_fg(self.palette.error),
            ));
            rows.push(row);
        }

        rows
    }

    /// Returns the rendered height in rows.
    pub fn height(&self) -> usize {
        self.render().len()
    }

    fn stroke_color(&self) -> Color {
        if self.read_only {
            self.palette.disabled
        } else if self.error.is_some() {
            self.palette.error
        } else if self.is_focused() {
            self.palette.stroke_focused
        } else {
            self.palette.stroke
        }
    }

    fn label_lifted(&self) -> bool {
        self.hint_floats
            && !self.hint.display().is_empty()
            && (self.is_focused() || !self.edit.value().is_empty())
    }

    fn hint_base_style(&self) -> Style {
        let color = if self.read_only {
            self.palette.disabled
        } else {
            self.palette.hint
        };
        Style {
            fg: Some(color),
            bg: None,
            attributes: self.hint_style,
        }
    }

    fn hint_marker_style(&self) -> Style {
        let color = if self.read_only {
            self.palette.disabled
        } else {
            self.palette.marker
        };
        Style {
            fg: Some(color),
            bg: None,
            attributes: self.hint_style,
        }
    }

    fn value_style(&self) -> Style {
        let color = if self.read_only {
            Some(self.palette.disabled)
        } else {
            self.text_color
        };
        Style {
            fg: color,
            bg: None,
            attributes: self.text_style,
        }
    }

    fn top_border_row(
        &self,
        chars: &crate::border::BorderChars,
        inner_width: usize,
        stroke_style: Style,
    ) -> StyledText<'static> {
        let mut row = StyledText::new();

        if !self.label_lifted() {
            row.push(Span::styled(
                format!(
                    "{}{}{}",
                    chars.top_left,
                    chars.horizontal.to_string().repeat(inner_width),
                    chars.top_right
                ),
                stroke_style,
            ));
            return row;
        }

        // The label sits inside the top border: ╭─ Name * ────╮
        let label_max = inner_width.saturating_sub(3);
        let decoration = self.truncated_hint(label_max);
        let label = decoration.styled(self.hint_base_style(), self.hint_marker_style());
        let label_width = label.width();

        row.push(Span::styled(
            format!("{}{} ", chars.top_left, chars.horizontal),
            stroke_style,
        ));
        row.extend(label);
        let fill = inner_width.saturating_sub(label_width + 3);
        row.push(Span::styled(
            format!(" {}{}", chars.horizontal.to_string().repeat(fill), chars.top_right),
            stroke_style,
        ));
        row
    }

    /// Truncates the hint base so the full decoration fits in `max` columns.
    fn truncated_hint(&self, max: usize) -> HintDecoration {
        let decoration = &self.hint;
        if decoration.display().width() <= max {
            return decoration.clone();
        }

        let marker_width = if decoration.required {
            REQUIRED_MARKER.width()
        } else {
            0
        };
        let base = truncate_to_width(&decoration.base, max.saturating_sub(marker_width));
        HintDecoration {
            base,
            required: decoration.required,
        }
    }

    fn placeholder_visible(&self) -> bool {
        self.edit.value().is_empty() && !(self.hint_floats && self.is_focused())
    }

    fn content_rows(&self) -> Vec<StyledText<'static>> {
        let width = self.edit.width() as usize;

        if self.placeholder_visible() {
            let decoration = self.truncated_hint(width);
            let mut style = self.hint_base_style();
            style.attributes |= TextAttributes::DIM;
            let mut marker_style = self.hint_marker_style();
            marker_style.attributes |= TextAttributes::DIM;
            return vec![decoration.styled(style, marker_style)];
        }

        if self.line_capacity() > 1 {
            let lines = wrap_to_width(&self.edit.display_text(), width);
            return lines
                .into_iter()
                .take(self.line_capacity())
                .map(|line| StyledText::from_span(Span::styled(line, self.value_style())))
                .collect();
        }

        vec![self.single_line_row()]
    }

    fn single_line_row(&self) -> StyledText<'static> {
        let window = self.edit.visible_window();
        let style = self.value_style();

        if !self.is_focused() || self.read_only {
            return StyledText::from_span(Span::styled(window.text, style));
        }

        // Show the caret by reversing the cell at the insertion point.
        let (before, at, after) = split_at_column(&window.text, window.caret_cols);
        let caret_style = style.add_attributes(TextAttributes::REVERSE);

        let mut row = StyledText::new();
        row.push(Span::styled(before, style));
        if at.is_empty() {
            row.push(Span::styled(" ", caret_style));
        } else {
            row.push(Span::styled(at, caret_style));
        }
        row.push(Span::styled(after, style));
        row
    }

    fn boxed_row(
        &self,
        content: StyledText<'static>,
        border: BorderStyle,
        chars: &crate::border::BorderChars,
        stroke_style: Style,
    ) -> StyledText<'static> {
        let width = self.edit.width() as usize;
        let content_width = content.width();

        let mut row = StyledText::new();
        if !border.is_none() {
            row.push(Span::styled(chars.vertical.to_string(), stroke_style));
        }
        row.push_str(" ");
        row.extend(content);
        row.push_str(" ".repeat(width.saturating_sub(content_width) + 1));
        if !border.is_none() {
            row.push(Span::styled(chars.vertical.to_string(), stroke_style));
        }
        row
    }
}

/// Truncates `text` to at most `max` display columns, on grapheme bounds.
fn truncate_to_width(text: &str, max: usize) -> String {
    let mut out = String::new();
    let mut cols = 0;
    for g in text.graphemes(true) {
        let w = g.width();
        if cols + w > max {
            break;
        }
        out.push_str(g);
        cols += w;
    }
    out
}

/// Splits `text` at a display-column offset into (before, cell, after).
fn split_at_column(text: &str, column: usize) -> (String, String, String) {
    let mut before = String::new();
    let mut at = String::new();
    let mut after = String::new();
    let mut cols = 0;

    for g in text.graphemes(true) {
        if cols < column {
            before.push_str(g);
        } else if at.is_empty() {
            at.push_str(g);
        } else {
            after.push_str(g);
        }
        cols += g.width();
    }
    (before, at, after)
}

/// Hard-wraps `text` into rows of at most `width` display columns.
fn wrap_to_width(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut cols = 0;

    for g in text.graphemes(true) {
        let w = g.width();
        if cols + w > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            cols = 0;
        }
        current.push_str(g);
        cols += w;
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn required_name_field() -> TextField {
        TextField::from_attributes(FieldAttributes {
            hint: "Name".into(),
            required: true,
            ..FieldAttributes::default()
        })
    }

    #[test]
    fn test_hint_required_round_trip() {
        let mut field = TextField::new();
        field.set_hint("Address");
        field.set_required(true);
        field.set_required(false);
        assert_eq!(field.hint(), "Address");
    }

    #[test]
    fn test_required_marker_idempotent() {
        let mut field = TextField::new();
        field.set_hint("Name");
        field.set_required(true);
        field.set_required(true);
        assert_eq!(field.hint(), "Name *");
        assert_eq!(field.hint().matches('*').count(), 1);
    }

    #[test]
    fn test_configure_required_hint() {
        let field = required_name_field();
        assert_eq!(field.hint(), "Name *");

        // The placeholder row carries the decoration: the final two
        // characters form their own span in the marker color.
        let rows = field.render();
        let content = &rows[1];
        assert!(content.plain_text().contains("Name *"));
        let marker = content
            .spans()
            .iter()
            .find(|span| span.text == REQUIRED_MARKER)
            .expect("marker span present");
        assert_eq!(marker.style.fg, Some(field.palette().marker));
    }

    #[test]
    fn test_set_hint_rederives_marker() {
        let mut field = required_name_field();
        field.set_hint("Full name");
        assert_eq!(field.hint(), "Full name *");
        assert_eq!(field.hint_base(), "Full name");
    }

    #[test]
    fn test_max_lines_round_trip_restores_height() {
        let mut field = TextField::new();
        field.set_text("a long value that wraps across several rows of the box");

        let single = field.height();
        field.set_max_lines(5);
        assert!(field.height() > single);
        field.set_max_lines(1);
        assert_eq!(field.height(), single);
    }

    #[test]
    fn test_multi_line_growth_capped() {
        let mut field = TextField::new();
        field.set_max_lines(2);
        field.set_text("x".repeat(200));
        // top border + 2 content rows + bottom border
        assert_eq!(field.height(), 4);
    }

    #[test]
    fn test_read_only_disables_interaction() {
        let mut field = TextField::new();
        field.set_text("fixed");
        field.set_read_only(true);

        field.focus();
        assert!(!field.is_focused());
        assert!(!field.handle_key(Key::Char('x'), Modifiers::NONE));
        assert_eq!(field.text(), "fixed");

        // The reversal path is unsupported: still read-only afterwards.
        field.set_read_only(false);
        assert!(field.is_read_only());
        field.focus();
        assert!(!field.is_focused());
    }

    #[test]
    fn test_read_only_palette() {
        let mut field = required_name_field();
        field.set_read_only(true);

        let rows = field.render();
        let stroke = rows[0].spans().first().expect("border span");
        assert_eq!(stroke.style.fg, Some(field.palette().disabled));
        let marker = rows[1]
            .spans()
            .iter()
            .find(|span| span.text == REQUIRED_MARKER)
            .expect("marker span present");
        assert_eq!(marker.style.fg, Some(field.palette().disabled));
    }

    #[test]
    fn test_set_text_empty_is_noop() {
        let mut field = TextField::new();
        field.set_text("kept");
        field.set_text("");
        assert_eq!(field.text(), "kept");

        field.clear_text();
        assert_eq!(field.text(), "");
    }

    #[test]
    fn test_text_color_parsing() {
        let mut field = TextField::new();
        assert!(field.set_text_color("not-a-color").is_err());
        assert!(field.set_text_color("#FF0000").is_ok());

        field.set_text("abc");
        let rows = field.render();
        let value_span = rows[1]
            .spans()
            .iter()
            .find(|span| span.text.contains("abc"))
            .expect("value span present");
        assert_eq!(value_span.style.fg, Some(Color::RED));
    }

    #[test]
    fn test_typing_clears_error() {
        let mut field = TextField::new();
        field.set_error("Cannot be empty");
        assert_eq!(field.error(), Some("Cannot be empty"));

        field.focus();
        assert!(field.handle_key(Key::Char('a'), Modifiers::NONE));
        assert_eq!(field.error(), None);
    }

    #[test]
    fn test_caret_movement_keeps_error() {
        let mut field = TextField::new();
        field.set_text("abc");
        field.set_error("bad");
        field.focus();
        field.handle_key(Key::Left, Modifiers::NONE);
        assert_eq!(field.error(), Some("bad"));
    }

    #[test]
    fn test_error_row_rendered() {
        let mut field = TextField::new();
        field.set_error("Cannot be empty");

        let rows = field.render();
        let last = rows.last().expect("rows");
        assert!(last.plain_text().contains("Cannot be empty"));
        assert_eq!(
            last.spans().first().expect("error span").style.fg,
            Some(field.palette().error)
        );
        // The stroke repaints in the error color while the indicator shows.
        assert_eq!(
            rows[0].spans().first().expect("border").style.fg,
            Some(field.palette().error)
        );
    }

    #[test]
    fn test_change_listeners() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);

        let mut field = TextField::new();
        field.add_change_listener(move |event| {
            assert_eq!(event.value.len(), event.caret);
            seen.fetch_add(1, Ordering::SeqCst);
        });

        field.focus();
        field.handle_key(Key::Char('h'), Modifiers::NONE);
        field.handle_key(Key::Char('i'), Modifiers::NONE);
        field.set_text("hi there");
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_floating_label_lifts_into_border() {
        let mut field = required_name_field();

        // Resting: label is the placeholder, top border is plain.
        let resting = field.render();
        assert!(!resting[0].plain_text().contains("Name"));
        assert!(resting[1].plain_text().contains("Name *"));

        // Focused: label floats into the top border.
        field.focus();
        let focused = field.render();
        assert!(focused[0].plain_text().contains("Name *"));
        assert!(!focused[1].plain_text().contains("Name"));
    }

    #[test]
    fn test_non_floating_hint_stays_placeholder() {
        let mut field = required_name_field();
        field.set_hint_floats(false);
        field.focus();

        let rows = field.render();
        assert!(!rows[0].plain_text().contains("Name"));
        assert!(rows[1].plain_text().contains("Name *"));
    }

    #[test]
    fn test_password_input_masks_render() {
        let mut field = TextField::new();
        field.set_input_type(InputTypeKind::Password);
        field.set_text("secret");

        let rows = field.render();
        assert!(!rows[1].plain_text().contains("secret"));
        assert!(rows[1].plain_text().contains("••••••"));
        assert_eq!(field.text(), "secret");
    }

    #[test]
    fn test_digit_input_rejects_letters() {
        let mut field = TextField::new();
        field.set_input_type(InputTypeKind::Digit);
        field.focus();
        for c in "a1b2".chars() {
            field.handle_key(Key::Char(c), Modifiers::NONE);
        }
        assert_eq!(field.text(), "12");
    }

    #[test]
    fn test_unknown_ordinal_keeps_entry_mode() {
        let field = TextField::from_attributes(FieldAttributes {
            input_type: 42,
            ..FieldAttributes::default()
        });
        assert_eq!(field.input_type(), InputTypeKind::Text);
        assert!(field.line_edit().mask().is_none());
    }

    #[test]
    fn test_stroke_and_radius_resolution() {
        let mut field = TextField::new();
        assert_eq!(field.corner_radius(), DEFAULT_CORNER_RADIUS);

        // Default: light stroke, positive radius: rounded corners.
        assert!(field.render()[0].plain_text().starts_with('╭'));

        field.set_corner_radius(0.0);
        assert!(field.render()[0].plain_text().starts_with('┌'));

        field.set_box_stroke_width(3);
        assert!(field.render()[0].plain_text().starts_with('┏'));

        field.set_box_stroke_width(0);
        // No border rows at stroke 0: a single content row remains.
        assert_eq!(field.render().len(), 1);
    }

    #[test]
    fn test_negative_radius_clamps() {
        let mut field = TextField::new();
        field.set_corner_radius(-4.0);
        assert_eq!(field.corner_radius(), 0.0);
    }

    #[test]
    fn test_field_width_override_applies_only_if_positive() {
        let default_width = TextField::new().line_edit().width();

        let unchanged = TextField::from_attributes(FieldAttributes {
            field_width: 0,
            ..FieldAttributes::default()
        });
        assert_eq!(unchanged.line_edit().width(), default_width);

        let widened = TextField::from_attributes(FieldAttributes {
            field_width: 40,
            ..FieldAttributes::default()
        });
        assert_eq!(widened.line_edit().width(), 40);
    }

    #[test]
    fn test_row_widths_are_uniform() {
        let mut field = required_name_field();
        field.set_text("hello");
        field.focus();

        let rows = field.render();
        let expected = field.line_edit().width() as usize + 4;
        for row in &rows {
            assert_eq!(row.width(), expected, "row: {:?}", row.plain_text());
        }
    }

    #[test]
    fn test_caret_rendered_when_focused() {
        let mut field = TextField::new();
        field.set_text("ab");
        field.focus();

        let rows = field.render();
        let caret_span = rows[1]
            .spans()
            .iter()
            .find(|span| span.style.attributes.contains(TextAttributes::REVERSE))
            .expect("caret span present");
        assert_eq!(caret_span.text, " ");
    }

    #[test]
    fn test_long_label_truncated() {
        let mut field = TextField::from_attributes(FieldAttributes {
            hint: "An exceedingly long label that cannot fit".into(),
            required: true,
            field_width: 10,
            ..FieldAttributes::default()
        });
        field.focus();

        let rows = field.render();
        let expected = field.line_edit().width() as usize + 4;
        assert_eq!(rows[0].width(), expected);
        // The marker survives truncation.
        assert!(rows[0].plain_text().contains(REQUIRED_MARKER));
    }
}
