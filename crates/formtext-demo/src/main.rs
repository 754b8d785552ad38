//! Interactive demo form.
//!
//! Renders a small form of text fields and drives them from key events:
//! Tab/Shift-Tab moves focus, Enter validates required fields, Esc quits.
//! Run with `RUST_LOG=formtext_widgets=debug` to see the fail-soft
//! configuration log on stderr.

use std::io::{self, Write};

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{cursor, event, execute, queue, terminal};
use formtext::prelude::*;
use tracing_subscriber::EnvFilter;

/// Declarative form definition, one table per field.
const FORM: &str = r#"
[[field]]
hint = "Name"
required = true

[[field]]
hint = "Email"
required = true
input_type = 5

[[field]]
hint = "Phone"
input_type = 6
radius = 0.0

[[field]]
hint = "Password"
required = true
input_type = 7

[[field]]
hint = "Notes"
max_lines = 3
stroke = 2
hint_floats = false
field_width = 36

[[field]]
hint = "Member ID"
read_only = true
"#;

fn build_form() -> Vec<TextField> {
    let document: toml::Value = FORM.parse().expect("demo form definition is valid TOML");
    let mut fields: Vec<TextField> = document
        .get("field")
        .and_then(toml::Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .map(|entry| TextField::from_attributes(FieldAttributes::from_value(entry)))
                .collect()
        })
        .unwrap_or_default();

    // Imperative touch-up, the part a screen would do in code.
    if let Some(name) = fields.first_mut() {
        name.set_max_length(24);
        name.set_text_color("#FF0000")
            .expect("literal color is well-formed");
        name.set_hint_font_style(TextAttributes::ITALIC);
    }
    if let Some(member) = fields.last_mut() {
        member.line_edit_mut().set_value("MB-10452");
    }

    fields
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut fields = build_form();
    let mut focused = first_focusable(&fields);
    if let Some(index) = focused {
        fields[index].focus();
    }

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = run(&mut stdout, &mut fields, &mut focused);

    execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(
    stdout: &mut io::Stdout,
    fields: &mut [TextField],
    focused: &mut Option<usize>,
) -> io::Result<()> {
    loop {
        draw(stdout, fields)?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }

        match key.code {
            KeyCode::Esc => return Ok(()),
            KeyCode::Tab => move_focus(fields, focused, 1),
            KeyCode::BackTab => move_focus(fields, focused, -1),
            KeyCode::Enter => validate(fields),
            _ => {
                if let (Some(index), Some(mapped)) = (*focused, map_key(key.code)) {
                    fields[index].handle_key(mapped, map_modifiers(key.modifiers));
                }
            }
        }
    }
}

fn draw(stdout: &mut io::Stdout, fields: &[TextField]) -> io::Result<()> {
    queue!(
        stdout,
        cursor::MoveTo(0, 0),
        terminal::Clear(terminal::ClearType::All)
    )?;

    write!(stdout, "formtext demo\r\n\r\n")?;
    for field in fields {
        for row in field.render() {
            write!(stdout, "{}\r\n", row.to_ansi_string())?;
        }
        write!(stdout, "\r\n")?;
    }
    write!(stdout, "Tab: next field · Enter: validate · Esc: quit\r\n")?;
    stdout.flush()
}

fn validate(fields: &mut [TextField]) {
    for field in fields.iter_mut() {
        if field.is_required() && field.text().is_empty() {
            field.set_error("Cannot be empty");
        }
    }
}

fn first_focusable(fields: &[TextField]) -> Option<usize> {
    fields.iter().position(TextField::is_focusable)
}

fn move_focus(fields: &mut [TextField], focused: &mut Option<usize>, step: isize) {
    if fields.is_empty() {
        return;
    }
    let current = focused.unwrap_or(0);
    let len = fields.len() as isize;

    let mut candidate = current as isize;
    for _ in 0..fields.len() {
        candidate = (candidate + step).rem_euclid(len);
        if fields[candidate as usize].is_focusable() {
            if let Some(old) = *focused {
                fields[old].blur();
            }
            fields[candidate as usize].focus();
            *focused = Some(candidate as usize);
            return;
        }
    }
}

fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Delete => Some(Key::Delete),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Home => Some(Key::Home),
        KeyCode::End => Some(Key::End),
        _ => None,
    }
}

fn map_modifiers(modifiers: KeyModifiers) -> Modifiers {
    Modifiers::new(
        modifiers.contains(KeyModifiers::SHIFT),
        modifiers.contains(KeyModifiers::CONTROL),
        modifiers.contains(KeyModifiers::ALT),
    )
}
