//! Confirmation modal (Yes/No dialog).

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use termpad_config::constants::MODAL_BUTTON_SPACING;
use termpad_theme::DialogStyle;

use crate::base::{choice_style, render_modal_frame};
use crate::{
    calculate_modal_width, centered_rect_with_size, max_line_width, Modal, ModalResult,
    ModalWidthConfig,
};

const YES: &str = "[ Yes ]";
const NO: &str = "[ No ]";

/// Confirmation modal window (Yes/No)
#[derive(Debug)]
pub struct ConfirmModal {
    title: String,
    message: String,
    selected: bool, // true = Yes, false = No
}

impl ConfirmModal {
    /// Create a new confirmation modal window, Yes preselected
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            selected: true,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn calculate_modal_width(&self, screen_width: u16) -> u16 {
        let title_width = self.title.len() as u16 + 2;
        let message_width = max_line_width(&self.message);
        let buttons_width = (YES.len() + NO.len()) as u16 + MODAL_BUTTON_SPACING;

        calculate_modal_width(
            [title_width, message_width, buttons_width].into_iter(),
            screen_width,
            ModalWidthConfig::default(),
        )
    }
}

impl Modal for ConfirmModal {
    type Result = bool;

    fn render(&mut self, area: Rect, buf: &mut Buffer, style: &DialogStyle) {
        // Borders + message + blank + buttons
        let message_lines = self.message.lines().count().max(1);
        let modal_height = (message_lines + 4) as u16;
        let modal_width = self.calculate_modal_width(area.width);
        let modal_area = centered_rect_with_size(modal_width, modal_height, area);

        let inner = render_modal_frame(modal_area, buf, style, &self.title);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(message_lines as u16),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        Paragraph::new(self.message.clone())
            .alignment(Alignment::Center)
            .style(Style::default().fg(style.foreground).bg(style.background))
            .render(chunks[0], buf);

        let buttons = Line::from(vec![
            Span::styled(YES, choice_style(style, self.selected)),
            Span::raw(" ".repeat(MODAL_BUTTON_SPACING as usize)),
            Span::styled(NO, choice_style(style, !self.selected)),
        ]);
        Paragraph::new(buttons)
            .alignment(Alignment::Center)
            .render(chunks[2], buf);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<Option<ModalResult<Self::Result>>> {
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                self.selected = !self.selected;
                Ok(None)
            }
            KeyCode::Enter => Ok(Some(ModalResult::Confirmed(self.selected))),
            KeyCode::Esc => Ok(Some(ModalResult::Cancelled)),
            KeyCode::Char('y') | KeyCode::Char('Y') => Ok(Some(ModalResult::Confirmed(true))),
            KeyCode::Char('n') | KeyCode::Char('N') => Ok(Some(ModalResult::Confirmed(false))),
            _ => Ok(None),
        }
    }
}
