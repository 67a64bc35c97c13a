//! Color chooser modal: a swatch grid plus a `#rrggbb` input.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use termpad_theme::{parse_hex, to_hex, DialogStyle, GHOST_WHITE, SEPARATOR_LIGHT};

use crate::base::{render_input_field, render_modal_frame};
use crate::{centered_rect_with_size, Modal, ModalResult, TextInput};

const COLUMNS: usize = 8;
const SWATCH_WIDTH: u16 = 4;

/// Predefined swatches, row by row.
pub const SWATCHES: [(&str, Color); 16] = [
    ("Black", Color::Rgb(0, 0, 0)),
    ("Dim gray", Color::Rgb(105, 105, 105)),
    ("Gray", Color::Rgb(128, 128, 128)),
    ("Silver", Color::Rgb(192, 192, 192)),
    ("Light separator", SEPARATOR_LIGHT),
    ("Ghost white", GHOST_WHITE),
    ("White", Color::Rgb(255, 255, 255)),
    ("Lavender", Color::Rgb(230, 230, 250)),
    ("Red", Color::Rgb(255, 0, 0)),
    ("Orange", Color::Rgb(255, 165, 0)),
    ("Yellow", Color::Rgb(255, 255, 0)),
    ("Green", Color::Rgb(0, 128, 0)),
    ("Teal", Color::Rgb(0, 128, 128)),
    ("Blue", Color::Rgb(0, 0, 255)),
    ("Navy", Color::Rgb(0, 0, 128)),
    ("Purple", Color::Rgb(128, 0, 128)),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Swatches,
    Hex,
}

/// Black or white, whichever reads better on `color`.
fn contrast(color: Color) -> Color {
    match color {
        Color::Rgb(r, g, b) if (r as u32 * 299 + g as u32 * 587 + b as u32 * 114) / 1000 < 128 => {
            Color::White
        }
        _ => Color::Black,
    }
}

/// Color chooser seeded with a default color
#[derive(Debug)]
pub struct ColorPickerModal {
    title: String,
    cursor: usize,
    hex: TextInput,
    focus: Focus,
    error: Option<String>,
}

impl ColorPickerModal {
    pub fn new(title: impl Into<String>, default: Color) -> Self {
        let cursor = SWATCHES
            .iter()
            .position(|(_, c)| *c == default)
            .unwrap_or(0);
        Self {
            title: title.into(),
            cursor,
            hex: TextInput::with_text(to_hex(default).unwrap_or_default()),
            focus: Focus::Swatches,
            error: None,
        }
    }

    /// Color currently described by the hex input.
    pub fn current(&self) -> Option<Color> {
        parse_hex(self.hex.text())
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn move_cursor(&mut self, delta: isize) {
        let last = SWATCHES.len() as isize - 1;
        self.cursor = (self.cursor as isize + delta).clamp(0, last) as usize;
        let (_, color) = SWATCHES[self.cursor];
        self.hex.set_text(to_hex(color).unwrap_or_default());
        self.error = None;
    }

    fn render_grid(&self, area: Rect, buf: &mut Buffer) {
        for (idx, (_, color)) in SWATCHES.iter().enumerate() {
            let row = (idx / COLUMNS) as u16;
            let col = (idx % COLUMNS) as u16;
            let x = area.x + col * (SWATCH_WIDTH + 1);
            let y = area.y + row;
            if x + SWATCH_WIDTH > area.right() || y >= area.bottom() {
                continue;
            }
            let selected = idx == self.cursor && self.focus == Focus::Swatches;
            let label = if selected { "[  ]" } else { "    " };
            let style = Style::default()
                .bg(*color)
                .fg(contrast(*color))
                .add_modifier(Modifier::BOLD);
            buf.set_string(x, y, label, style);
        }
    }
}

impl Modal for ColorPickerModal {
    type Result = Color;

    fn render(&mut self, area: Rect, buf: &mut Buffer, style: &DialogStyle) {
        let grid_width = COLUMNS as u16 * (SWATCH_WIDTH + 1);
        let rows = SWATCHES.len().div_ceil(COLUMNS) as u16;
        let width = (grid_width + 4).max(self.title.len() as u16 + 4);
        // Borders, grid, name, blank, hex, error, hint
        let height = 2 + rows + 5;
        let modal_area = centered_rect_with_size(width.min(area.width), height, area);
        let inner = render_modal_frame(modal_area, buf, style, &self.title);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(rows),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        self.render_grid(chunks[0], buf);

        let text_style = Style::default().fg(style.foreground).bg(style.background);
        let (name, _) = SWATCHES[self.cursor];
        Paragraph::new(name)
            .style(text_style)
            .render(chunks[1], buf);

        let label = "Hex: ";
        buf.set_string(chunks[3].x, chunks[3].y, label, text_style);
        let preview_x = chunks[3].right().saturating_sub(SWATCH_WIDTH);
        let input_area = Rect {
            x: chunks[3].x + label.len() as u16,
            width: preview_x.saturating_sub(chunks[3].x + label.len() as u16 + 1),
            ..chunks[3]
        };
        render_input_field(buf, input_area, &self.hex, self.focus == Focus::Hex, style);
        if let Some(color) = self.current() {
            buf.set_string(preview_x, chunks[3].y, "    ", Style::default().bg(color));
        }

        if let Some(error) = &self.error {
            Paragraph::new(Line::from(Span::styled(
                error.as_str(),
                text_style.fg(style.error),
            )))
            .render(chunks[4], buf);
        }

        Paragraph::new("Tab: switch  Enter: apply  Esc: cancel")
            .style(text_style.add_modifier(Modifier::DIM))
            .render(chunks[5], buf);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<Option<ModalResult<Self::Result>>> {
        match key.code {
            KeyCode::Esc => return Ok(Some(ModalResult::Cancelled)),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Swatches => Focus::Hex,
                    Focus::Hex => Focus::Swatches,
                };
                return Ok(None);
            }
            KeyCode::Enter => {
                return match self.current() {
                    Some(color) => Ok(Some(ModalResult::Confirmed(color))),
                    None => {
                        self.error = Some("Invalid color, expected #rrggbb".to_string());
                        Ok(None)
                    }
                };
            }
            _ => {}
        }

        match self.focus {
            Focus::Swatches => match key.code {
                KeyCode::Left => self.move_cursor(-1),
                KeyCode::Right => self.move_cursor(1),
                KeyCode::Up => self.move_cursor(-(COLUMNS as isize)),
                KeyCode::Down => self.move_cursor(COLUMNS as isize),
                _ => {}
            },
            Focus::Hex if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.hex.handle_edit_key(key.code) {
                    self.error = None;
                }
            }
            Focus::Hex => {}
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_seeded_with_default() {
        let picker = ColorPickerModal::new("Foreground", GHOST_WHITE);
        assert_eq!(picker.current(), Some(GHOST_WHITE));
        assert_eq!(SWATCHES[picker.cursor].1, GHOST_WHITE);
    }

    #[test]
    fn test_enter_returns_seed_unchanged() {
        let mut picker = ColorPickerModal::new("Menu bar color", SEPARATOR_LIGHT);
        assert_eq!(
            picker.handle_key(key(KeyCode::Enter)).unwrap(),
            Some(ModalResult::Confirmed(SEPARATOR_LIGHT))
        );
    }

    #[test]
    fn test_grid_navigation_updates_hex() {
        let mut picker = ColorPickerModal::new("Foreground", Color::Rgb(0, 0, 0));
        picker.handle_key(key(KeyCode::Down)).unwrap();
        assert_eq!(picker.current(), Some(Color::Rgb(255, 0, 0)));

        picker.handle_key(key(KeyCode::Left)).unwrap();
        assert_eq!(picker.current(), Some(Color::Rgb(230, 230, 250)));
    }

    #[test]
    fn test_typed_hex_and_invalid_input() {
        let mut picker = ColorPickerModal::new("Foreground", Color::Rgb(0, 0, 0));
        picker.handle_key(key(KeyCode::Tab)).unwrap();
        for _ in 0..7 {
            picker.handle_key(key(KeyCode::Backspace)).unwrap();
        }
        for c in "#12ab".chars() {
            picker.handle_key(key(KeyCode::Char(c))).unwrap();
        }
        assert_eq!(picker.handle_key(key(KeyCode::Enter)).unwrap(), None);
        assert!(picker.error().is_some());

        for c in "ef".chars() {
            picker.handle_key(key(KeyCode::Char(c))).unwrap();
        }
        assert!(picker.error().is_none());
        assert_eq!(
            picker.handle_key(key(KeyCode::Enter)).unwrap(),
            Some(ModalResult::Confirmed(Color::Rgb(0x12, 0xab, 0xef)))
        );
    }

    #[test]
    fn test_escape_cancels() {
        let mut picker = ColorPickerModal::new("Foreground", Color::Rgb(0, 0, 0));
        assert_eq!(
            picker.handle_key(key(KeyCode::Esc)).unwrap(),
            Some(ModalResult::Cancelled)
        );
    }
}
