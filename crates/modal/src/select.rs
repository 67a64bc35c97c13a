//! Selection modal dialog (single selection).

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Widget},
};

use termpad_theme::DialogStyle;

use crate::base::{choice_style, render_modal_frame};
use crate::{
    calculate_modal_width, centered_rect_with_size, max_item_width, max_line_width, Modal,
    ModalResult, ModalWidthConfig,
};

/// Selection modal window
#[derive(Debug)]
pub struct SelectModal {
    title: String,
    prompt: String,
    items: Vec<String>,
    cursor: usize,
}

impl SelectModal {
    pub fn new(title: impl Into<String>, prompt: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            title: title.into(),
            prompt: prompt.into(),
            items,
            cursor: 0,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn calculate_modal_width(&self, screen_width: u16) -> u16 {
        let title_width = self.title.len() as u16 + 2;
        let prompt_width = max_line_width(&self.prompt);
        let items_width = max_item_width(&self.items, 2); // "▶ " prefix

        calculate_modal_width(
            [title_width, prompt_width, items_width].into_iter(),
            screen_width,
            ModalWidthConfig::default(),
        )
    }
}

impl Modal for SelectModal {
    /// Index of the chosen item
    type Result = usize;

    fn render(&mut self, area: Rect, buf: &mut Buffer, style: &DialogStyle) {
        let modal_width = self.calculate_modal_width(area.width);
        let prompt_lines = self.prompt.lines().count().max(1) as u16;
        let list_height = self.items.len().min(10) as u16;
        let modal_height = 1 + prompt_lines + list_height + 1;

        let modal_area = centered_rect_with_size(modal_width, modal_height, area);
        let inner = render_modal_frame(modal_area, buf, style, &self.title);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(prompt_lines),
                Constraint::Length(list_height),
            ])
            .split(inner);

        Paragraph::new(self.prompt.clone())
            .alignment(Alignment::Left)
            .style(Style::default().fg(style.foreground).bg(style.background))
            .render(chunks[0], buf);

        // Scroll the window of ten rows with the cursor
        let first = self.cursor.saturating_sub(list_height.saturating_sub(1) as usize);
        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .skip(first)
            .map(|(idx, label)| {
                let selected = idx == self.cursor;
                let prefix = if selected { "▶ " } else { "  " };
                let row_style = choice_style(style, selected);
                ListItem::new(Line::from(vec![
                    Span::styled(prefix, row_style),
                    Span::styled(label.as_str(), row_style),
                ]))
            })
            .collect();

        List::new(items)
            .style(Style::default().bg(style.background))
            .render(chunks[1], buf);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<Option<ModalResult<Self::Result>>> {
        match key.code {
            KeyCode::Esc => Ok(Some(ModalResult::Cancelled)),
            KeyCode::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                Ok(None)
            }
            KeyCode::Down => {
                if self.cursor < self.items.len().saturating_sub(1) {
                    self.cursor += 1;
                }
                Ok(None)
            }
            KeyCode::Home => {
                self.cursor = 0;
                Ok(None)
            }
            KeyCode::End => {
                self.cursor = self.items.len().saturating_sub(1);
                Ok(None)
            }
            KeyCode::Enter if !self.items.is_empty() => {
                Ok(Some(ModalResult::Confirmed(self.cursor)))
            }
            _ => Ok(None),
        }
    }
}
