//! The editable text area.

use std::str::FromStr;

use anyhow::Result;
use ratatui::style::{Color, Modifier};
use termpad_buffer::{Cursor, TextBuffer};
use termpad_theme::{BorderStyle, TextAreaHandle, UiHandle, BLACK, GHOST_WHITE};

/// Font style of the text area.
///
/// Family and size belong to the terminal; only the style maps to cell
/// modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    #[default]
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    pub const ALL: [FontStyle; 4] = [
        FontStyle::Regular,
        FontStyle::Bold,
        FontStyle::Italic,
        FontStyle::BoldItalic,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FontStyle::Regular => "Regular",
            FontStyle::Bold => "Bold",
            FontStyle::Italic => "Italic",
            FontStyle::BoldItalic => "Bold - Italic",
        }
    }

    pub fn modifier(self) -> Modifier {
        match self {
            FontStyle::Regular => Modifier::empty(),
            FontStyle::Bold => Modifier::BOLD,
            FontStyle::Italic => Modifier::ITALIC,
            FontStyle::BoldItalic => Modifier::BOLD | Modifier::ITALIC,
        }
    }
}

impl FromStr for FontStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "regular" => Ok(FontStyle::Regular),
            "bold" => Ok(FontStyle::Bold),
            "italic" => Ok(FontStyle::Italic),
            "bold-italic" | "bold - italic" | "bolditalic" => Ok(FontStyle::BoldItalic),
            _ => Err(format!("Unknown font style: {}", s)),
        }
    }
}

/// Visual attributes of the text area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub background: Color,
    pub foreground: Color,
    pub border: BorderStyle,
    pub font: FontStyle,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            background: GHOST_WHITE,
            foreground: BLACK,
            border: BorderStyle::None,
            font: FontStyle::Regular,
        }
    }
}

/// Text area: the document, its cursor and its style.
#[derive(Debug, Clone, Default)]
pub struct TextArea {
    buffer: TextBuffer,
    cursor: Cursor,
    /// First visible line
    scroll: usize,
    /// First visible display column
    left_column: usize,
    pub style: TextStyle,
}

impl TextArea {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn left_column(&self) -> usize {
        self.left_column
    }

    pub fn text(&self) -> String {
        self.buffer.text()
    }

    /// `true` when the text area holds no characters.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Replace the whole text and move the cursor to the start.
    pub fn set_text(&mut self, text: &str) {
        self.buffer.set_text(text);
        self.cursor = Cursor::new();
        self.scroll = 0;
        self.left_column = 0;
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = Cursor::new();
        self.scroll = 0;
        self.left_column = 0;
    }

    pub fn set_font(&mut self, font: FontStyle) {
        self.style.font = font;
    }

    pub fn insert_char(&mut self, c: char) -> Result<()> {
        let mut tmp = [0u8; 4];
        self.insert_str(c.encode_utf8(&mut tmp))
    }

    pub fn insert_str(&mut self, text: &str) -> Result<()> {
        self.cursor = self.buffer.insert(&self.cursor, text)?;
        Ok(())
    }

    pub fn newline(&mut self) -> Result<()> {
        self.insert_str("\n")
    }

    /// Insert `width` spaces.
    pub fn insert_tab(&mut self, width: usize) -> Result<()> {
        self.insert_str(&" ".repeat(width.max(1)))
    }

    pub fn backspace(&mut self) -> Result<()> {
        if let Some(cursor) = self.buffer.backspace(&self.cursor)? {
            self.cursor = cursor;
        }
        Ok(())
    }

    pub fn delete(&mut self) -> Result<()> {
        self.buffer.delete_char(&self.cursor)?;
        Ok(())
    }

    pub fn move_left(&mut self) {
        if self.cursor.column > 0 {
            self.cursor.column -= 1;
        } else if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.column = self.buffer.line_len_graphemes(self.cursor.line);
        }
    }

    pub fn move_right(&mut self) {
        let line_len = self.buffer.line_len_graphemes(self.cursor.line);
        if self.cursor.column < line_len {
            self.cursor.column += 1;
        } else if self.cursor.line + 1 < self.buffer.line_count() {
            self.cursor = Cursor::at(self.cursor.line + 1, 0);
        }
    }

    pub fn move_up(&mut self, lines: usize) {
        self.cursor.move_up(lines);
        self.clamp_cursor();
    }

    pub fn move_down(&mut self, lines: usize) {
        let max_line = self.buffer.line_count().saturating_sub(1);
        self.cursor.move_down(lines, max_line);
        self.clamp_cursor();
    }

    pub fn home(&mut self) {
        self.cursor.column = 0;
    }

    pub fn end(&mut self) {
        self.cursor.column = self.buffer.line_len_graphemes(self.cursor.line);
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.buffer.clamp(self.cursor);
    }

    /// Scroll so the cursor lies within `height` visible lines and `width`
    /// visible columns.
    pub fn ensure_cursor_visible(&mut self, height: usize, width: usize) {
        if height > 0 {
            if self.cursor.line < self.scroll {
                self.scroll = self.cursor.line;
            } else if self.cursor.line >= self.scroll + height {
                self.scroll = self.cursor.line + 1 - height;
            }
        }

        if width > 0 {
            let column = self
                .buffer
                .display_column(self.cursor.line, self.cursor.column);
            if column < self.left_column {
                self.left_column = column;
            } else if column >= self.left_column + width {
                self.left_column = column + 1 - width;
            }
        }
    }
}

impl UiHandle for TextArea {}

impl TextAreaHandle for TextArea {
    fn background(&self) -> Color {
        self.style.background
    }

    fn foreground(&self) -> Color {
        self.style.foreground
    }

    fn border(&self) -> BorderStyle {
        self.style.border
    }

    fn set_background(&mut self, color: Color) {
        self.style.background = color;
    }

    fn set_foreground(&mut self, color: Color) {
        self.style.foreground = color;
    }

    fn set_border(&mut self, border: BorderStyle) {
        self.style.border = border;
    }
}
