//! Menu commands and the guarded actions behind them.

use std::path::PathBuf;

use anyhow::Result;

use termpad_config::constants::{
    FACEBOOK_URL, GITHUB_URL, LAUNCH_FAILED, NOTHING_TO_SAVE, UNSAVED_DATA_WARNING,
};
use termpad_core::{ContactLink, FontStyle, MenuCommand};
use termpad_logger as logger;
use termpad_modal::{
    ColorPickerModal, ConfirmModal, FileDialogMode, FileDialogModal, InfoKind, InfoModal,
    SelectModal,
};
use termpad_theme::{ManualAttribute, ThemeKind};

use super::App;
use crate::error::EditorError;
use crate::state::{ActiveModal, ExitAction, GuardedAction, PendingAction};

/// Entry of the Font and color list that leads to the color picker.
pub(super) const FONT_COLOR_ENTRY: &str = "Color...";

impl App {
    /// Run the command behind a menu item or shortcut
    pub fn execute_command(&mut self, command: MenuCommand) -> Result<()> {
        logger::debug(format!("Menu command: {:?}", command));
        self.state.menu_state.close();

        match command {
            MenuCommand::NewFile => self.with_confirmation_if_dirty(GuardedAction::NewFile),
            MenuCommand::NewWindow => self.with_confirmation_if_dirty(GuardedAction::NewWindow),
            MenuCommand::Open => self.with_confirmation_if_dirty(GuardedAction::Open),
            MenuCommand::Restart => self.with_confirmation_if_dirty(GuardedAction::Restart),
            MenuCommand::Exit => self.with_confirmation_if_dirty(GuardedAction::Exit),
            MenuCommand::Save => {
                self.handle_save();
                Ok(())
            }
            MenuCommand::FontAndColor => {
                self.open_font_select();
                Ok(())
            }
            MenuCommand::ApplyTheme(kind) => self.handle_apply_theme(kind),
            MenuCommand::ManualConfiguration => {
                self.open_manual_select();
                Ok(())
            }
            MenuCommand::Contact(link) => {
                self.handle_contact(link);
                Ok(())
            }
        }
    }

    /// Run `action` right away when the text area is empty, otherwise ask
    /// first and run it once confirmed
    pub fn with_confirmation_if_dirty(&mut self, action: GuardedAction) -> Result<()> {
        if self.state.text_area.is_empty() {
            return self.run_guarded(action);
        }

        let modal = ConfirmModal::new("Warning", UNSAVED_DATA_WARNING);
        self.state.open_modal(
            ActiveModal::Confirm(Box::new(modal)),
            Some(PendingAction::Guarded(action)),
        );
        Ok(())
    }

    pub(super) fn run_guarded(&mut self, action: GuardedAction) -> Result<()> {
        logger::debug(format!("Running {}", action.label()));
        match action {
            GuardedAction::NewFile => {
                self.state.text_area.clear();
                self.state.file_path = None;
            }
            GuardedAction::NewWindow => {
                self.state.reset()?;
                logger::info("Window reset to startup state");
            }
            GuardedAction::Open => self.open_file_dialog(FileDialogMode::Open),
            GuardedAction::Restart => self.state.quit(ExitAction::Restart),
            GuardedAction::Exit => self.state.quit(ExitAction::Quit),
        }
        Ok(())
    }

    fn handle_apply_theme(&mut self, kind: ThemeKind) -> Result<()> {
        self.state.apply_theme(kind)?;
        Ok(())
    }

    fn handle_save(&mut self) {
        if self.state.text_area.is_empty() {
            self.notify(InfoKind::Warning, NOTHING_TO_SAVE);
            return;
        }
        self.open_file_dialog(FileDialogMode::Save);
    }

    fn open_file_dialog(&mut self, mode: FileDialogMode) {
        let modal = FileDialogModal::new(mode, self.dialog_directory());
        let pending = match mode {
            FileDialogMode::Open => PendingAction::OpenFile,
            FileDialogMode::Save => PendingAction::SaveFile,
        };
        self.state
            .open_modal(ActiveModal::FileDialog(Box::new(modal)), Some(pending));
    }

    /// Directory of the current file, else the working directory
    fn dialog_directory(&self) -> PathBuf {
        self.state
            .file_path
            .as_deref()
            .and_then(|path| path.parent())
            .map(|dir| dir.to_path_buf())
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    fn open_font_select(&mut self) {
        let mut items: Vec<String> = FontStyle::ALL
            .iter()
            .map(|font| font.label().to_string())
            .collect();
        items.push(FONT_COLOR_ENTRY.to_string());

        let modal = SelectModal::new("Font and color", "Choose a font style or a color", items);
        self.state.open_modal(
            ActiveModal::Select(Box::new(modal)),
            Some(PendingAction::FontSelect),
        );
    }

    fn open_manual_select(&mut self) {
        let items = ManualAttribute::ALL
            .iter()
            .map(|attr| attr.label().to_string())
            .collect();
        let modal = SelectModal::new("Manual Configuration", "Choose what to recolor", items);
        self.state.open_modal(
            ActiveModal::Select(Box::new(modal)),
            Some(PendingAction::ManualAttributeSelect),
        );
    }

    pub(super) fn open_color_picker(&mut self, attribute: ManualAttribute) {
        let modal = ColorPickerModal::new(attribute.label(), attribute.default_color());
        self.state.open_modal(
            ActiveModal::ColorPicker(Box::new(modal)),
            Some(PendingAction::ManualColor(attribute)),
        );
    }

    fn handle_contact(&mut self, link: ContactLink) {
        let url = match link {
            ContactLink::Facebook => FACEBOOK_URL,
            ContactLink::GitHub => GITHUB_URL,
        };
        match self.launcher.open_external(url) {
            Ok(()) => logger::info(format!("Opened {}", url)),
            Err(e) => self.report(e),
        }
    }

    /// Show a notification
    pub(super) fn notify(&mut self, kind: InfoKind, message: impl Into<String>) {
        let modal = InfoModal::new(kind, message);
        self.state
            .open_modal(ActiveModal::Info(Box::new(modal)), None);
    }

    /// Log a failed action and tell the user
    pub(super) fn report(&mut self, error: EditorError) {
        match &error {
            EditorError::Cancelled => return,
            EditorError::IoFailure { .. } => {
                logger::warn(error.to_string());
                self.notify(InfoKind::Error, error.to_string());
            }
            EditorError::ExternalLaunchFailure { .. } => {
                logger::error(error.to_string());
                self.notify(InfoKind::Error, LAUNCH_FAILED);
            }
        }
        self.state.set_error(error.to_string());
    }
}
