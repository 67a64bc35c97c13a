//! Open/save file dialog.
//!
//! A path input over a listing of the current directory. The listing only
//! shows files matching the active filter; Tab cycles the filter.

use std::path::{Path, PathBuf};

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Widget},
};

use termpad_config::constants::{FileFilter, DEFAULT_EXTENSION, FILE_FILTERS};
use termpad_theme::DialogStyle;

use crate::base::{choice_style, render_input_field, render_modal_frame};
use crate::{
    calculate_modal_width, centered_rect_with_size, Modal, ModalResult, ModalWidthConfig,
    TextInput,
};

const LIST_HEIGHT: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileDialogMode {
    Open,
    Save,
}

impl FileDialogMode {
    fn title(self) -> &'static str {
        match self {
            FileDialogMode::Open => "Open",
            FileDialogMode::Save => "Save",
        }
    }
}

/// Resolve the typed path against `dir`.
///
/// A name without extension gets the active filter's extension, or the
/// default one when the filter matches every file. In open mode a name that
/// already exists as typed is kept as is. Blank input resolves to nothing.
pub fn resolve_path(
    mode: FileDialogMode,
    dir: &Path,
    input: &str,
    filter: &FileFilter,
) -> Option<PathBuf> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let mut path = Path::new(input).to_path_buf();
    if path.is_relative() {
        path = dir.join(path);
    }
    if mode == FileDialogMode::Open && path.is_file() {
        return Some(path);
    }
    if path.extension().is_none() {
        path.set_extension(filter.extension.unwrap_or(DEFAULT_EXTENSION));
    }
    Some(path)
}

fn matches_filter(path: &Path, filter: &FileFilter) -> bool {
    match filter.extension {
        None => true,
        Some(ext) => path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(ext)),
    }
}

/// File chooser modal
#[derive(Debug)]
pub struct FileDialogModal {
    mode: FileDialogMode,
    directory: PathBuf,
    input: TextInput,
    filter_index: usize,
    /// File names in `directory` matching the active filter
    entries: Vec<String>,
    selected: Option<usize>,
}

impl FileDialogModal {
    pub fn new(mode: FileDialogMode, directory: PathBuf) -> Self {
        let mut dialog = Self {
            mode,
            directory,
            input: TextInput::new(),
            filter_index: 0,
            entries: Vec::new(),
            selected: None,
        };
        dialog.refresh_entries();
        dialog
    }

    pub fn mode(&self) -> FileDialogMode {
        self.mode
    }

    pub fn active_filter(&self) -> &'static FileFilter {
        &FILE_FILTERS[self.filter_index % FILE_FILTERS.len()]
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn input(&self) -> &str {
        self.input.text()
    }

    /// Move to the next filter and reload the listing.
    pub fn cycle_filter(&mut self) {
        self.filter_index = (self.filter_index + 1) % FILE_FILTERS.len();
        self.refresh_entries();
    }

    fn refresh_entries(&mut self) {
        let filter = self.active_filter();
        // Unreadable directories just show an empty listing
        let mut entries: Vec<String> = std::fs::read_dir(&self.directory)
            .map(|dir| {
                dir.filter_map(|entry| entry.ok())
                    .map(|entry| entry.path())
                    .filter(|path| path.is_file() && matches_filter(path, filter))
                    .filter_map(|path| path.file_name()?.to_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();
        entries.sort_by_key(|name| name.to_lowercase());
        self.entries = entries;
        self.selected = None;
    }

    fn select(&mut self, index: usize) {
        if let Some(name) = self.entries.get(index) {
            self.input.set_text(name.clone());
            self.selected = Some(index);
        }
    }

    fn select_next(&mut self) {
        let next = match self.selected {
            Some(i) if i + 1 < self.entries.len() => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.select(next);
    }

    fn select_prev(&mut self) {
        if let Some(i) = self.selected {
            self.select(i.saturating_sub(1));
        }
    }

    fn render_entries(&self, area: Rect, buf: &mut Buffer, style: &DialogStyle) {
        let first = self
            .selected
            .map(|i| i.saturating_sub(LIST_HEIGHT - 1))
            .unwrap_or(0);
        let items: Vec<ListItem> = self
            .entries
            .iter()
            .enumerate()
            .skip(first)
            .take(LIST_HEIGHT)
            .map(|(idx, name)| {
                ListItem::new(Span::styled(
                    format!("  {}", name),
                    choice_style(style, self.selected == Some(idx)),
                ))
            })
            .collect();

        List::new(items)
            .style(Style::default().bg(style.background))
            .render(area, buf);
    }
}

impl Modal for FileDialogModal {
    type Result = PathBuf;

    fn render(&mut self, area: Rect, buf: &mut Buffer, style: &DialogStyle) {
        let dir_label = self.directory.display().to_string();
        let width = calculate_modal_width(
            [dir_label.len() as u16 + 2, 40].into_iter(),
            area.width,
            ModalWidthConfig::wide(),
        );
        // Borders, directory, list, input, filter, hint
        let height = 2 + 1 + LIST_HEIGHT as u16 + 1 + 1 + 1;
        let modal_area = centered_rect_with_size(width, height, area);
        let inner = render_modal_frame(modal_area, buf, style, self.mode.title());

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(LIST_HEIGHT as u16),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        let text_style = Style::default().fg(style.foreground).bg(style.background);

        Paragraph::new(dir_label)
            .style(text_style.add_modifier(Modifier::BOLD))
            .render(chunks[0], buf);

        self.render_entries(chunks[1], buf, style);

        let label = "File name: ";
        buf.set_string(chunks[2].x, chunks[2].y, label, text_style);
        let input_area = Rect {
            x: chunks[2].x + label.len() as u16,
            width: chunks[2].width.saturating_sub(label.len() as u16),
            ..chunks[2]
        };
        render_input_field(buf, input_area, &self.input, true, style);

        let filter = self.active_filter();
        Paragraph::new(Line::from(vec![
            Span::styled("Type: ", text_style),
            Span::styled(
                format!("{} ({})", filter.label, filter.pattern),
                text_style.add_modifier(Modifier::BOLD),
            ),
        ]))
        .render(chunks[3], buf);

        Paragraph::new("Tab: file type  Enter: confirm  Esc: cancel")
            .style(text_style.add_modifier(Modifier::DIM))
            .render(chunks[4], buf);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<Option<ModalResult<Self::Result>>> {
        match key.code {
            KeyCode::Esc => Ok(Some(ModalResult::Cancelled)),
            KeyCode::Tab => {
                self.cycle_filter();
                Ok(None)
            }
            KeyCode::Down => {
                self.select_next();
                Ok(None)
            }
            KeyCode::Up => {
                self.select_prev();
                Ok(None)
            }
            KeyCode::Enter => {
                let resolved = resolve_path(
                    self.mode,
                    &self.directory,
                    self.input.text(),
                    self.active_filter(),
                );
                match resolved {
                    Some(path) => Ok(Some(ModalResult::Confirmed(path))),
                    // Confirming a blank name means no file was chosen
                    None => Ok(Some(ModalResult::Cancelled)),
                }
            }
            code if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.input.handle_edit_key(code) {
                    self.selected = None;
                }
                Ok(None)
            }
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(dialog: &mut FileDialogModal, text: &str) {
        for c in text.chars() {
            dialog.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    #[test]
    fn test_resolve_appends_filter_extension() {
        let dir = Path::new("/tmp/docs");
        assert_eq!(
            resolve_path(FileDialogMode::Save, dir, "notes", &FILE_FILTERS[0]),
            Some(PathBuf::from("/tmp/docs/notes.txt"))
        );
        assert_eq!(
            resolve_path(FileDialogMode::Open, dir, "main", &FILE_FILTERS[6]),
            Some(PathBuf::from("/tmp/docs/main.py"))
        );
        assert_eq!(
            resolve_path(FileDialogMode::Save, dir, "/abs/readme.md", &FILE_FILTERS[1]),
            Some(PathBuf::from("/abs/readme.md"))
        );
        assert_eq!(
            resolve_path(FileDialogMode::Save, dir, "   ", &FILE_FILTERS[0]),
            None
        );
    }

    #[test]
    fn test_tab_cycles_filters_and_listing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), "a").unwrap();
        std::fs::write(dir.path().join("b.py"), "b").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();

        let mut dialog = FileDialogModal::new(FileDialogMode::Open, dir.path().to_path_buf());
        assert_eq!(dialog.entries(), &["a.txt".to_string(), "b.py".to_string()]);

        dialog.handle_key(key(KeyCode::Tab)).unwrap();
        assert_eq!(dialog.active_filter().pattern, "*.txt");
        assert_eq!(dialog.entries(), &["a.txt".to_string()]);

        for _ in 1..FILE_FILTERS.len() {
            dialog.cycle_filter();
        }
        assert_eq!(dialog.active_filter().pattern, "*.*");
    }

    #[test]
    fn test_selecting_entry_fills_input() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("story.txt"), "once").unwrap();

        let mut dialog = FileDialogModal::new(FileDialogMode::Open, dir.path().to_path_buf());
        dialog.handle_key(key(KeyCode::Down)).unwrap();
        assert_eq!(dialog.input(), "story.txt");

        assert_eq!(
            dialog.handle_key(key(KeyCode::Enter)).unwrap(),
            Some(ModalResult::Confirmed(dir.path().join("story.txt")))
        );
    }

    #[test]
    fn test_typed_name_and_blank_confirm() {
        let dir = tempfile::tempdir().unwrap();
        let mut dialog = FileDialogModal::new(FileDialogMode::Save, dir.path().to_path_buf());

        assert_eq!(
            dialog.handle_key(key(KeyCode::Enter)).unwrap(),
            Some(ModalResult::Cancelled)
        );

        type_text(&mut dialog, "draft");
        assert_eq!(
            dialog.handle_key(key(KeyCode::Enter)).unwrap(),
            Some(ModalResult::Confirmed(dir.path().join("draft.txt")))
        );
    }

    #[test]
    fn test_open_keeps_existing_name_without_extension() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Makefile"), "all:").unwrap();

        let mut dialog = FileDialogModal::new(FileDialogMode::Open, dir.path().to_path_buf());
        assert_eq!(dialog.entries(), &["Makefile".to_string()]);

        dialog.handle_key(key(KeyCode::Down)).unwrap();
        assert_eq!(
            dialog.handle_key(key(KeyCode::Enter)).unwrap(),
            Some(ModalResult::Confirmed(dir.path().join("Makefile")))
        );
    }

    #[test]
    fn test_save_appends_extension_even_when_name_exists() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes"), "old").unwrap();

        assert_eq!(
            resolve_path(FileDialogMode::Save, dir.path(), "notes", &FILE_FILTERS[0]),
            Some(dir.path().join("notes.txt"))
        );
        assert_eq!(
            resolve_path(FileDialogMode::Open, dir.path(), "notes", &FILE_FILTERS[0]),
            Some(dir.path().join("notes"))
        );
    }
}
