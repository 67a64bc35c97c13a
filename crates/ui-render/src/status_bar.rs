use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use termpad_core::MenuBar;
use termpad_theme::DialogStyle;

/// Status bar rendering parameters (extracted from AppState to avoid cyclic deps)
pub struct StatusBarParams<'a> {
    /// File name shown on the left, `None` for an unsaved document
    pub file_name: Option<&'a str>,
    /// Zero-based cursor position
    pub cursor: (usize, usize),
    /// Status message (message, is_error)
    pub status_message: Option<&'a (String, bool)>,
}

/// Status bar at the bottom of screen
pub struct StatusBar;

impl StatusBar {
    /// Render status bar with the menu bar's colors
    pub fn render(buf: &mut Buffer, area: Rect, bar: &MenuBar, params: &StatusBarParams<'_>) {
        if area.height == 0 {
            return;
        }

        let base_style = Style::default().fg(bar.foreground).bg(bar.background);
        for x in area.left()..area.right() {
            buf[(x, area.top())].set_char(' ').set_style(base_style);
        }

        let left = Self::left_spans(params, base_style);
        let right = format!(
            " Ln {}, Col {} ",
            params.cursor.0 + 1,
            params.cursor.1 + 1
        );

        let left_width: usize = left.iter().map(|s| s.content.width()).sum();
        let right_width = right.width();
        let line = Line::from(left);
        buf.set_line(area.x, area.y, &line, area.width);

        // Position goes on the right only when it fits beside the message
        if left_width + right_width <= area.width as usize {
            let x = area.right() - right_width as u16;
            buf.set_string(x, area.y, right, base_style);
        }
    }

    fn left_spans<'a>(params: &StatusBarParams<'a>, base_style: Style) -> Vec<Span<'a>> {
        if let Some((message, is_error)) = params.status_message {
            let style = if *is_error {
                base_style
                    .fg(DialogStyle::default().error)
                    .add_modifier(Modifier::BOLD)
            } else {
                base_style
            };
            return vec![Span::styled(format!(" {} ", message), style)];
        }

        vec![
            Span::styled(" ", base_style),
            Span::styled(
                params.file_name.unwrap_or("Untitled"),
                base_style.add_modifier(Modifier::BOLD),
            ),
        ]
    }
}
