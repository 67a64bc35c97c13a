//! Modal dialog system for termpad.
//!
//! Dialogs are drawn with a fixed [`DialogStyle`]; they do not follow the
//! active theme.

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{buffer::Buffer, layout::Rect};

use termpad_theme::DialogStyle;

pub mod base;
pub mod color_picker;
pub mod confirm;
pub mod file_dialog;
pub mod info;
pub mod select;
mod text_input;

pub use base::{
    calculate_modal_width, centered_rect_with_size, max_item_width, max_line_width,
    ModalWidthConfig,
};
pub use color_picker::ColorPickerModal;
pub use confirm::ConfirmModal;
pub use file_dialog::{resolve_path, FileDialogMode, FileDialogModal};
pub use info::{InfoKind, InfoModal};
pub use select::SelectModal;
pub use text_input::TextInput;

/// Modal window result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalResult<T> {
    /// User confirmed the action with a result.
    Confirmed(T),
    /// User cancelled the action.
    Cancelled,
}

/// Active modal window.
#[derive(Debug)]
pub enum ActiveModal {
    /// Yes/No question
    Confirm(Box<ConfirmModal>),
    /// Notification
    Info(Box<InfoModal>),
    /// Single selection
    Select(Box<SelectModal>),
    /// Open/save path chooser
    FileDialog(Box<FileDialogModal>),
    /// Color chooser
    ColorPicker(Box<ColorPickerModal>),
}

impl ActiveModal {
    /// Render whichever modal is active.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer, style: &DialogStyle) {
        match self {
            ActiveModal::Confirm(m) => m.render(area, buf, style),
            ActiveModal::Info(m) => m.render(area, buf, style),
            ActiveModal::Select(m) => m.render(area, buf, style),
            ActiveModal::FileDialog(m) => m.render(area, buf, style),
            ActiveModal::ColorPicker(m) => m.render(area, buf, style),
        }
    }
}

/// Trait for all modal windows.
pub trait Modal {
    /// Modal window result type.
    type Result;

    /// Render the modal window.
    fn render(&mut self, area: Rect, buf: &mut Buffer, style: &DialogStyle);

    /// Handle keyboard event.
    /// Returns Some(result) if the modal window should close.
    fn handle_key(&mut self, key: KeyEvent) -> Result<Option<ModalResult<Self::Result>>>;
}
