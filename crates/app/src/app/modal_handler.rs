//! Modal window handling for the application.

use std::any::Any;
use std::path::PathBuf;

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::style::Color;

use termpad_config::constants::NO_FILE_SPECIFIED;
use termpad_core::FontStyle;
use termpad_logger as logger;
use termpad_modal::{InfoKind, Modal, ModalResult};
use termpad_theme::{commit_override, ManualAttribute, ManualOutcome};

use super::App;
use crate::state::{ActiveModal, PendingAction};

/// Helper to convert typed ModalResult to Box<dyn Any>
fn box_modal_result<T: 'static>(result: ModalResult<T>) -> ModalResult<Box<dyn Any>> {
    match result {
        ModalResult::Confirmed(value) => ModalResult::Confirmed(Box::new(value) as Box<dyn Any>),
        ModalResult::Cancelled => ModalResult::Cancelled,
    }
}

impl App {
    /// Handle keyboard event in modal window
    pub(super) fn handle_modal_key(&mut self, key: KeyEvent) -> Result<()> {
        let Some(modal) = self.state.active_modal.as_mut() else {
            return Ok(());
        };

        let modal_result = match modal {
            ActiveModal::Confirm(m) => m.handle_key(key)?.map(box_modal_result),
            ActiveModal::Info(m) => m.handle_key(key)?.map(box_modal_result),
            ActiveModal::Select(m) => m.handle_key(key)?.map(box_modal_result),
            ActiveModal::FileDialog(m) => m.handle_key(key)?.map(box_modal_result),
            ActiveModal::ColorPicker(m) => m.handle_key(key)?.map(box_modal_result),
        };

        if let Some(result) = modal_result {
            self.state.close_modal();
            let pending = self.state.take_pending_action();
            match result {
                ModalResult::Confirmed(value) => self.handle_modal_result(pending, value)?,
                ModalResult::Cancelled => self.handle_modal_cancel(pending),
            }
        }
        Ok(())
    }

    /// Route a confirmed modal value to the action that opened the modal
    fn handle_modal_result(
        &mut self,
        pending: Option<PendingAction>,
        value: Box<dyn Any>,
    ) -> Result<()> {
        let Some(action) = pending else {
            return Ok(());
        };

        match action {
            PendingAction::Guarded(guarded) => {
                if value.downcast_ref::<bool>() == Some(&true) {
                    self.run_guarded(guarded)?;
                } else {
                    logger::debug(format!("{} declined", guarded.label()));
                }
            }
            PendingAction::FontSelect => {
                if let Some(&index) = value.downcast_ref::<usize>() {
                    match FontStyle::ALL.get(index) {
                        Some(&font) => {
                            self.state.text_area.set_font(font);
                            logger::info(format!("Font style set to {}", font.label()));
                        }
                        None => self.open_color_picker(ManualAttribute::Foreground),
                    }
                }
            }
            PendingAction::ManualAttributeSelect => {
                if let Some(&attribute) = value
                    .downcast_ref::<usize>()
                    .and_then(|&index| ManualAttribute::ALL.get(index))
                {
                    self.open_color_picker(attribute);
                }
            }
            PendingAction::ManualColor(attribute) => {
                let color = value.downcast_ref::<Color>().copied();
                self.commit_manual(attribute, color);
            }
            PendingAction::OpenFile => {
                if let Some(path) = value.downcast_ref::<PathBuf>() {
                    self.open_path(path.clone());
                }
            }
            PendingAction::SaveFile => {
                if let Some(path) = value.downcast_ref::<PathBuf>() {
                    self.save_to(path.clone());
                }
            }
        }
        Ok(())
    }

    /// A dismissed modal; most actions just stop
    fn handle_modal_cancel(&mut self, pending: Option<PendingAction>) {
        match pending {
            Some(PendingAction::ManualColor(attribute)) => self.commit_manual(attribute, None),
            Some(PendingAction::SaveFile) => {
                self.notify(InfoKind::Warning, NO_FILE_SPECIFIED);
            }
            Some(action) => logger::debug(format!("{:?} cancelled", action)),
            None => {}
        }
    }

    fn commit_manual(&mut self, attribute: ManualAttribute, color: Option<Color>) {
        let outcome = commit_override(attribute, color, &mut self.state.manual_target());
        if outcome == ManualOutcome::Changed {
            self.state
                .set_info(format!("{} changed", attribute.label()));
        }
    }

    fn open_path(&mut self, path: PathBuf) {
        match self.files.read_file(&path) {
            Ok(text) => {
                self.state.text_area.set_text(&text);
                logger::info(format!("Opened {}", path.display()));
                self.state.set_info(format!("Opened {}", path.display()));
                self.state.file_path = Some(path);
            }
            Err(e) => self.report(e),
        }
    }

    fn save_to(&mut self, path: PathBuf) {
        let contents = self.state.text_area.buffer().contents();
        match self.files.write_file(&path, &contents) {
            Ok(()) => {
                logger::info(format!("Saved {}", path.display()));
                self.state.set_info(format!("Saved {}", path.display()));
                self.state.file_path = Some(path);
            }
            Err(e) => self.report(e),
        }
    }
}
