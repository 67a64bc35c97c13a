//! Notification modal.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Paragraph, Widget, Wrap},
};

use termpad_theme::DialogStyle;

use crate::base::{choice_style, render_modal_frame};
use crate::{
    calculate_modal_width, centered_rect_with_size, max_line_width, Modal, ModalResult,
    ModalWidthConfig,
};

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoKind {
    Info,
    Warning,
    Error,
}

impl InfoKind {
    pub fn title(self) -> &'static str {
        match self {
            InfoKind::Info => "Information",
            InfoKind::Warning => "Warning",
            InfoKind::Error => "Error",
        }
    }
}

/// Message with a single OK button.
#[derive(Debug)]
pub struct InfoModal {
    kind: InfoKind,
    message: String,
}

impl InfoModal {
    pub fn new(kind: InfoKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> InfoKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Modal for InfoModal {
    type Result = ();

    fn render(&mut self, area: Rect, buf: &mut Buffer, style: &DialogStyle) {
        let width = calculate_modal_width(
            [max_line_width(&self.message), self.kind.title().len() as u16 + 2].into_iter(),
            area.width,
            ModalWidthConfig::default(),
        );
        let message_lines = self.message.lines().count().max(1) as u16;
        let modal_area = centered_rect_with_size(width, message_lines + 4, area);
        let inner = render_modal_frame(modal_area, buf, style, self.kind.title());

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(message_lines),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        let mut text_style = Style::default().fg(style.foreground).bg(style.background);
        if self.kind == InfoKind::Error {
            text_style = text_style.fg(style.error).add_modifier(Modifier::BOLD);
        }

        Paragraph::new(self.message.clone())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(text_style)
            .render(chunks[0], buf);

        Paragraph::new("[ OK ]")
            .alignment(Alignment::Center)
            .style(choice_style(style, true))
            .render(chunks[2], buf);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<Option<ModalResult<Self::Result>>> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Ok(Some(ModalResult::Confirmed(()))),
            KeyCode::Esc => Ok(Some(ModalResult::Cancelled)),
            _ => Ok(None),
        }
    }
}
