//! Main application module.
//!
//! Contains the App struct and all event handlers.

use std::time::Duration;

use anyhow::Result;
use ratatui::{backend::Backend, Terminal};

use termpad_config::Config;
use termpad_core::{Event, EventHandler};
use termpad_logger as logger;

use crate::collaborators::{FileStore, Launcher, LocalFileStore, SystemLauncher};
use crate::state::{AppState, ExitAction};

mod key_handler;
mod menu_actions;
mod modal_handler;

/// Main application
pub struct App {
    state: AppState,
    event_handler: EventHandler,
    files: Box<dyn FileStore>,
    launcher: Box<dyn Launcher>,
}

impl App {
    /// Create a new application backed by the local file system and the
    /// platform URL opener
    pub fn new(config: Config) -> Result<Self> {
        Self::with_collaborators(config, Box::new(LocalFileStore), Box::new(SystemLauncher))
    }

    /// Create a new application with the given collaborators
    pub fn with_collaborators(
        config: Config,
        files: Box<dyn FileStore>,
        launcher: Box<dyn Launcher>,
    ) -> Result<Self> {
        let state = AppState::new(config)?;
        logger::info("Application started");

        Ok(Self {
            state,
            event_handler: EventHandler::new(Duration::from_millis(
                termpad_config::constants::EVENT_HANDLER_INTERVAL_MS,
            )),
            files,
            launcher,
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Run the main application loop until Exit or Restart
    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        render_fn: impl Fn(&mut ratatui::Frame<'_>, &mut AppState),
    ) -> Result<ExitAction> {
        let size = terminal.size()?;
        self.state.update_terminal_size(size.width, size.height);

        loop {
            if self.state.needs_redraw {
                terminal.draw(|frame| render_fn(frame, &mut self.state))?;
                self.state.needs_redraw = false;
            }

            if let Some(action) = self.state.exit_action {
                return Ok(action);
            }

            match self.event_handler.next()? {
                Event::Key(key) => {
                    self.handle_key_event(key)?;
                    self.state.needs_redraw = true;
                }
                Event::Resize(width, height) => {
                    self.state.update_terminal_size(width, height);
                    self.state.needs_redraw = true;
                }
                Event::Tick => {
                    // Keeps the menu bar clock current
                    self.state.needs_redraw = true;
                }
            }
        }
    }
}
