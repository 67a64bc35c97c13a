//! Text buffer with rope data structure for termpad.
//!
//! A single document held in a rope, plus the grapheme-based cursor that
//! edits it. There is no edit history.

mod buffer;
mod cursor;

pub use buffer::TextBuffer;
pub use cursor::Cursor;

/// Line ending type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    LF, // Unix \n
    CRLF, // Windows \r\n
}
