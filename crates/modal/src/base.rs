//! Common modal rendering utilities.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Widget},
};
use termpad_theme::DialogStyle;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::TextInput;

/// Modal size limits.
pub mod modal_constants {
    /// Minimum modal width (default).
    pub const MIN_WIDTH_DEFAULT: u16 = 30;
    /// Minimum modal width (wide).
    pub const MIN_WIDTH_WIDE: u16 = 50;
    /// Maximum width as percentage of screen (default: 75%).
    pub const MAX_WIDTH_PERCENTAGE_DEFAULT: f32 = 0.75;
    /// Maximum width as percentage of screen (wide: 90%).
    pub const MAX_WIDTH_PERCENTAGE_WIDE: f32 = 0.90;
    /// Padding with single border.
    pub const PADDING_WITH_BORDER: u16 = 6;
}

/// Configuration for modal width calculation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModalWidthConfig {
    /// Use wide modal constraints (90% max vs 75% default).
    pub wide: bool,
}

impl ModalWidthConfig {
    pub fn wide() -> Self {
        Self { wide: true }
    }
}

/// Calculate modal width from the widest content line, clamped to the
/// screen.
pub fn calculate_modal_width(
    content_widths: impl Iterator<Item = u16>,
    screen_width: u16,
    config: ModalWidthConfig,
) -> u16 {
    let content_width = content_widths.max().unwrap_or(0);
    let total_width = content_width.saturating_add(modal_constants::PADDING_WITH_BORDER);

    let (max_percentage, min_width) = if config.wide {
        (
            modal_constants::MAX_WIDTH_PERCENTAGE_WIDE,
            modal_constants::MIN_WIDTH_WIDE,
        )
    } else {
        (
            modal_constants::MAX_WIDTH_PERCENTAGE_DEFAULT,
            modal_constants::MIN_WIDTH_DEFAULT,
        )
    };

    let max_width = (screen_width as f32 * max_percentage) as u16;

    total_width.max(min_width).min(max_width).min(screen_width)
}

/// Calculate maximum line width from multiline text.
pub fn max_line_width(text: &str) -> u16 {
    text.lines().map(|line| line.width()).max().unwrap_or(0) as u16
}

/// Calculate maximum item width from a list of strings with optional prefix.
pub fn max_item_width(items: &[String], prefix_len: usize) -> u16 {
    items
        .iter()
        .map(|item| prefix_len + item.width())
        .max()
        .unwrap_or(0) as u16
}

/// Create a centered rectangle with specified width and height within a container
pub fn centered_rect_with_size(width: u16, height: u16, r: Rect) -> Rect {
    let horizontal_margin = r.width.saturating_sub(width) / 2;
    let vertical_margin = r.height.saturating_sub(height) / 2;

    let vertical_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(vertical_margin),
            Constraint::Length(height),
            Constraint::Length(vertical_margin),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(horizontal_margin),
            Constraint::Length(width),
            Constraint::Length(horizontal_margin),
        ])
        .split(vertical_layout[1])[1]
}

/// Clear `area` and draw the dialog frame. Returns the inner area.
pub fn render_modal_frame(area: Rect, buf: &mut Buffer, style: &DialogStyle, title: &str) -> Rect {
    Clear.render(area, buf);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(style.foreground)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(style.foreground))
        .style(Style::default().bg(style.background).fg(style.foreground));

    let inner = block.inner(area);
    block.render(area, buf);
    inner
}

/// Style of a button or list row.
pub fn choice_style(style: &DialogStyle, selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(style.accent_foreground)
            .bg(style.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(style.foreground).bg(style.background)
    }
}

/// Render a text input field with cursor.
pub fn render_input_field(
    buf: &mut Buffer,
    area: Rect,
    input: &TextInput,
    is_focused: bool,
    style: &DialogStyle,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let field_style = Style::default()
        .fg(style.foreground)
        .bg(style.background)
        .add_modifier(Modifier::UNDERLINED);
    let width = area.width as usize;

    // Keep the cursor in view
    let before = input.text_before_cursor();
    let before_width = before.width();
    let skip = before_width.saturating_sub(width.saturating_sub(1));
    let mut skipped = 0;
    let visible: String = input
        .text()
        .chars()
        .skip_while(|c| {
            if skipped >= skip {
                return false;
            }
            skipped += c.width().unwrap_or(0);
            true
        })
        .collect();

    buf.set_stringn(area.x, area.y, " ".repeat(width), width, field_style);
    buf.set_stringn(area.x, area.y, &visible, width, field_style);

    if is_focused {
        let offset = before_width
            .saturating_sub(skipped)
            .min(width.saturating_sub(1));
        let cursor_x = area.x + offset as u16;
        buf[(cursor_x, area.y)].set_style(field_style.add_modifier(Modifier::REVERSED));
    }
}
