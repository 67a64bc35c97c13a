//! Main keyboard event handling for the application.
//!
//! Dispatches key events to modals, the menu, global shortcuts, or the text
//! area.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use termpad_core::MenuCommand;
use termpad_logger as logger;

use super::App;

impl App {
    /// Handle keyboard event
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        logger::debug(format!(
            "Key event: code={:?}, modifiers={:?}",
            key.code, key.modifiers
        ));

        // Clear status message on any key press
        if self.state.status_message.is_some() {
            self.state.clear_status();
        }

        // If modal window is open, handle it
        if self.state.has_modal() {
            return self.handle_modal_key(key);
        }

        if key.code == KeyCode::F(10) {
            self.state.menu_state.toggle(&self.state.menus);
            return Ok(());
        }

        if self.state.menu_state.is_open() {
            return self.handle_menu_key(key);
        }

        if let Some(command) = Self::shortcut_command(&key) {
            return self.execute_command(command);
        }

        if key.modifiers.contains(KeyModifiers::ALT) {
            if let KeyCode::Char(c) = key.code {
                self.open_menu_by_mnemonic(c);
            }
            return Ok(());
        }

        self.handle_editor_key(key)
    }

    /// Ctrl shortcuts shown in the File menu
    fn shortcut_command(key: &KeyEvent) -> Option<MenuCommand> {
        if !key.modifiers.contains(KeyModifiers::CONTROL) {
            return None;
        }
        match key.code {
            KeyCode::Char('n') => Some(MenuCommand::NewFile),
            KeyCode::Char('o') => Some(MenuCommand::Open),
            KeyCode::Char('s') => Some(MenuCommand::Save),
            KeyCode::Char('q') => Some(MenuCommand::Exit),
            _ => None,
        }
    }

    /// Alt+first letter opens the matching top-level menu
    fn open_menu_by_mnemonic(&mut self, c: char) {
        let index = self.state.menus.menus().iter().position(|menu| {
            menu.label
                .chars()
                .next()
                .is_some_and(|first| first.eq_ignore_ascii_case(&c))
        });
        if let Some(index) = index {
            self.state.menu_state.open(&self.state.menus, index);
        }
    }

    /// Handle keyboard event in menu
    fn handle_menu_key(&mut self, key: KeyEvent) -> Result<()> {
        let menus = &self.state.menus;
        let menu_state = &mut self.state.menu_state;
        match key.code {
            KeyCode::Esc => menu_state.back(),
            KeyCode::Left => menu_state.collapse(menus),
            KeyCode::Right => menu_state.expand(menus),
            KeyCode::Up => menu_state.move_up(menus),
            KeyCode::Down => menu_state.move_down(menus),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(command) = menu_state.activate(menus) {
                    return self.execute_command(command);
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Editing and cursor movement in the text area
    fn handle_editor_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(());
        }

        let page = self.state.text_height().max(1);
        let tab_size = self.state.config.editor.tab_size;
        let text = &mut self.state.text_area;
        match key.code {
            KeyCode::Char(c) => text.insert_char(c)?,
            KeyCode::Enter => text.newline()?,
            KeyCode::Tab => text.insert_tab(tab_size)?,
            KeyCode::Backspace => text.backspace()?,
            KeyCode::Delete => text.delete()?,
            KeyCode::Left => text.move_left(),
            KeyCode::Right => text.move_right(),
            KeyCode::Up => text.move_up(1),
            KeyCode::Down => text.move_down(1),
            KeyCode::Home => text.home(),
            KeyCode::End => text.end(),
            KeyCode::PageUp => text.move_up(page),
            KeyCode::PageDown => text.move_down(page),
            _ => {}
        }
        Ok(())
    }
}
