use anyhow::Result;
use ropey::Rope;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::{Cursor, LineEnding};

/// Text buffer based on Rope
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    rope: Rope,
    /// Line ending used when the contents are written out
    line_ending: LineEnding,
}

impl TextBuffer {
    /// Create a new empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer holding `text`.
    ///
    /// CRLF input is normalized to `\n` and remembered for [`Self::contents`].
    pub fn from_text(text: &str) -> Self {
        let mut buffer = Self::new();
        buffer.set_text(text);
        buffer
    }

    /// Replace the whole content.
    pub fn set_text(&mut self, text: &str) {
        if text.contains("\r\n") {
            self.line_ending = LineEnding::CRLF;
            self.rope = Rope::from_str(&text.replace("\r\n", "\n"));
        } else {
            self.line_ending = LineEnding::LF;
            self.rope = Rope::from_str(text);
        }
    }

    /// Drop all content.
    pub fn clear(&mut self) {
        self.rope = Rope::new();
        self.line_ending = LineEnding::LF;
    }

    /// Get all text with `\n` line endings
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Text as it should be written to disk, with the original line endings
    pub fn contents(&self) -> String {
        let text = self.rope.to_string();
        match self.line_ending {
            LineEnding::LF => text,
            LineEnding::CRLF => text.replace('\n', "\r\n"),
        }
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// `true` when the buffer holds no characters at all.
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Get line count. An empty buffer has one line.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Line by index, without its trailing newline
    pub fn line(&self, index: usize) -> Option<String> {
        if index < self.line_count() {
            let line = self.rope.line(index).to_string();
            Some(line.trim_end_matches('\n').to_string())
        } else {
            None
        }
    }

    /// Get line length in graphemes
    pub fn line_len_graphemes(&self, line_idx: usize) -> usize {
        self.line(line_idx)
            .map(|line| line.graphemes(true).count())
            .unwrap_or(0)
    }

    /// Screen width of the first `column` graphemes of a line.
    pub fn display_column(&self, line_idx: usize, column: usize) -> usize {
        let Some(line) = self.line(line_idx) else {
            return 0;
        };
        line.graphemes(true).take(column).map(|g| g.width()).sum()
    }

    /// Bring a cursor back inside the document.
    pub fn clamp(&self, cursor: Cursor) -> Cursor {
        let line = cursor.line.min(self.line_count().saturating_sub(1));
        Cursor::at(line, cursor.column.min(self.line_len_graphemes(line)))
    }

    /// Insert text at cursor position, returning the cursor after it
    pub fn insert(&mut self, cursor: &Cursor, text: &str) -> Result<Cursor> {
        let char_idx = self.cursor_to_char_idx(cursor)?;
        let text = text.replace("\r\n", "\n");
        self.rope.insert(char_idx, &text);
        Ok(advance_cursor(cursor, &text))
    }

    /// Delete character at cursor position (delete)
    pub fn delete_char(&mut self, cursor: &Cursor) -> Result<bool> {
        let char_idx = self.cursor_to_char_idx(cursor)?;
        let end_idx = self.next_grapheme_boundary(cursor)?;

        if char_idx >= end_idx {
            return Ok(false);
        }

        self.rope.remove(char_idx..end_idx);
        Ok(true)
    }

    /// Delete character before cursor (backspace)
    pub fn backspace(&mut self, cursor: &Cursor) -> Result<Option<Cursor>> {
        if cursor.line == 0 && cursor.column == 0 {
            return Ok(None);
        }

        let new_cursor = if cursor.column > 0 {
            Cursor::at(cursor.line, cursor.column - 1)
        } else {
            // Join with the previous line
            Cursor::at(cursor.line - 1, self.line_len_graphemes(cursor.line - 1))
        };

        let start = self.cursor_to_char_idx(&new_cursor)?;
        let end = self.cursor_to_char_idx(cursor)?;
        if start < end {
            self.rope.remove(start..end);
        }

        Ok(Some(new_cursor))
    }

    /// Convert cursor position to character index in Rope
    fn cursor_to_char_idx(&self, cursor: &Cursor) -> Result<usize> {
        if cursor.line >= self.line_count() {
            anyhow::bail!("Line {} out of range", cursor.line);
        }

        let line_start = self.rope.line_to_char(cursor.line);
        let line_str = self.rope.line(cursor.line).to_string();
        let content = line_str.trim_end_matches('\n');

        let char_offset: usize = content
            .graphemes(true)
            .take(cursor.column)
            .map(|g| g.chars().count())
            .sum();
        Ok(line_start + char_offset)
    }

    /// Character index just past the grapheme under the cursor; a line end
    /// covers the newline.
    fn next_grapheme_boundary(&self, cursor: &Cursor) -> Result<usize> {
        let start = self.cursor_to_char_idx(cursor)?;
        let line = self.line(cursor.line).unwrap_or_default();
        match line.graphemes(true).nth(cursor.column) {
            Some(grapheme) => Ok(start + grapheme.chars().count()),
            None => Ok((start + 1).min(self.rope.len_chars())),
        }
    }
}

/// Cursor position after inserting `text` at `cursor`
fn advance_cursor(cursor: &Cursor, text: &str) -> Cursor {
    let newlines = text.matches('\n').count();
    let tail = text.rsplit('\n').next().unwrap_or("");
    let tail_len = tail.graphemes(true).count();

    if newlines == 0 {
        Cursor::at(cursor.line, cursor.column + tail_len)
    } else {
        Cursor::at(cursor.line + newlines, tail_len)
    }
}
