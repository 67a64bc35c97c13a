use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Widget},
};

use termpad_core::TextArea;
use termpad_theme::BorderStyle;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// The part of `line` starting at display column `left`. A wide grapheme cut
/// by the left edge is replaced by spaces.
fn visible_part(line: &str, left: usize) -> String {
    let mut column = 0;
    let mut visible = String::new();
    for grapheme in line.graphemes(true) {
        let width = grapheme.width();
        if column >= left {
            visible.push_str(grapheme);
        } else if column + width > left {
            visible.push_str(&" ".repeat(column + width - left));
        }
        column += width;
    }
    visible
}

/// Draw the text area and return the terminal cursor position, if the
/// cursor is on screen.
///
/// Call `TextArea::ensure_cursor_visible` with the inner size first so the
/// cursor is within the scrolled window.
pub fn render_text_area(
    buf: &mut Buffer,
    area: Rect,
    text_area: &TextArea,
) -> Option<(u16, u16)> {
    if area.width == 0 || area.height == 0 {
        return None;
    }

    let style = Style::default()
        .bg(text_area.style.background)
        .fg(text_area.style.foreground);
    let text_style = style.add_modifier(text_area.style.font.modifier());

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            buf[(x, y)].set_symbol(" ").set_style(style);
        }
    }

    let inner = match text_area.style.border {
        BorderStyle::FixedSingle => {
            let block = Block::default().borders(Borders::ALL).style(style);
            let inner = block.inner(area);
            block.render(area, buf);
            inner
        }
        BorderStyle::None => area,
    };

    let buffer = text_area.buffer();
    let scroll = text_area.scroll();
    let left = text_area.left_column();
    for row in 0..inner.height {
        let Some(line) = buffer.line(scroll + row as usize) else {
            break;
        };
        buf.set_stringn(
            inner.x,
            inner.y + row,
            visible_part(&line, left),
            inner.width as usize,
            text_style,
        );
    }

    let cursor = text_area.cursor();
    let row = cursor.line.checked_sub(scroll)?;
    let column = buffer
        .display_column(cursor.line, cursor.column)
        .checked_sub(left)?;
    if row >= inner.height as usize || column >= inner.width as usize {
        return None;
    }
    Some((inner.x + column as u16, inner.y + row as u16))
}
