//! Application state and types.

use std::path::PathBuf;

use termpad_config::Config;
use termpad_core::{FontStyle, MenuBar, MenuState, MenuTree, TextArea, Window};
use termpad_logger as logger;
use termpad_theme::{
    apply_theme, ManualAttribute, ManualTarget, MenuItemHandle, ThemeError, ThemeKind,
    ThemeTarget,
};

pub use termpad_modal::ActiveModal;

/// Actions that discard the current text and therefore ask first when
/// there is any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardedAction {
    NewFile,
    NewWindow,
    Open,
    Restart,
    Exit,
}

impl GuardedAction {
    pub fn label(self) -> &'static str {
        match self {
            GuardedAction::NewFile => "new file",
            GuardedAction::NewWindow => "new window",
            GuardedAction::Open => "open",
            GuardedAction::Restart => "restart",
            GuardedAction::Exit => "exit",
        }
    }
}

/// What to do with the result of the open modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    /// Confirmation of a guarded action
    Guarded(GuardedAction),
    /// Font and color list
    FontSelect,
    /// Manual configuration attribute list
    ManualAttributeSelect,
    /// Color picker for one manual override
    ManualColor(ManualAttribute),
    /// File dialog in open mode
    OpenFile,
    /// File dialog in save mode
    SaveFile,
}

/// How the main loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitAction {
    Quit,
    /// Start a fresh process with the same arguments
    Restart,
}

/// Global application state
#[derive(Debug)]
pub struct AppState {
    /// Screen surface behind everything else
    pub window: Window,
    pub menu_bar: MenuBar,
    pub menus: MenuTree,
    pub menu_state: MenuState,
    pub text_area: TextArea,
    /// Active modal window
    pub active_modal: Option<ActiveModal>,
    /// Action pending modal result
    pub pending_action: Option<PendingAction>,
    /// Status message (message, is_error)
    pub status_message: Option<(String, bool)>,
    /// Application configuration
    pub config: Config,
    /// File the text was last opened from or saved to
    pub file_path: Option<PathBuf>,
    /// Set once the main loop should stop
    pub exit_action: Option<ExitAction>,
    /// Terminal dimensions
    pub terminal_size: (u16, u16),
    /// Flag indicating UI needs to be redrawn
    pub needs_redraw: bool,
}

impl AppState {
    /// Startup state: empty text, classic theme, configured font style.
    pub fn new(config: Config) -> Result<Self, ThemeError> {
        let mut state = Self {
            window: Window::default(),
            menu_bar: MenuBar::default(),
            menus: MenuTree::standard(),
            menu_state: MenuState::default(),
            text_area: TextArea::new(),
            active_modal: None,
            pending_action: None,
            status_message: None,
            config,
            file_path: None,
            exit_action: None,
            terminal_size: (0, 0),
            needs_redraw: true,
        };
        state.reset()?;
        Ok(state)
    }

    /// Return every element to its startup state.
    pub fn reset(&mut self) -> Result<(), ThemeError> {
        self.text_area.clear();
        self.text_area.set_font(self.configured_font());
        self.file_path = None;
        self.menu_state.close();
        self.active_modal = None;
        self.pending_action = None;
        self.status_message = None;
        self.apply_theme(ThemeKind::Light)
    }

    fn configured_font(&self) -> FontStyle {
        match self.config.editor.font_style.parse() {
            Ok(font) => font,
            Err(e) => {
                logger::warn(format!("{}, using regular", e));
                FontStyle::Regular
            }
        }
    }

    /// Every live element a theme writes to, menu items from a full walk of
    /// the menu tree.
    pub fn theme_target(&mut self) -> ThemeTarget<'_> {
        let menu_items = self
            .menus
            .styles_mut()
            .into_iter()
            .map(|style| style as &mut dyn MenuItemHandle)
            .collect();
        ThemeTarget {
            window: &mut self.window,
            menu_bar: &mut self.menu_bar,
            text_area: &mut self.text_area,
            menu_items,
        }
    }

    /// Elements manual configuration may write to.
    pub fn manual_target(&mut self) -> ManualTarget<'_> {
        ManualTarget {
            window: &mut self.window,
            menu_bar: &mut self.menu_bar,
            text_area: &mut self.text_area,
        }
    }

    pub fn apply_theme(&mut self, kind: ThemeKind) -> Result<(), ThemeError> {
        let mut target = self.theme_target();
        apply_theme(kind, &mut target)
    }

    pub fn has_modal(&self) -> bool {
        self.active_modal.is_some()
    }

    /// Open a modal whose result goes to `pending`.
    pub fn open_modal(&mut self, modal: ActiveModal, pending: Option<PendingAction>) {
        self.menu_state.close();
        self.active_modal = Some(modal);
        self.pending_action = pending;
    }

    pub fn close_modal(&mut self) {
        self.active_modal = None;
    }

    pub fn take_pending_action(&mut self) -> Option<PendingAction> {
        self.pending_action.take()
    }

    pub fn set_info(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), false));
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), true));
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn update_terminal_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    /// Rows of text visible between the menu bar and the status bar.
    pub fn text_height(&self) -> usize {
        let border = match self.text_area.style.border {
            termpad_theme::BorderStyle::FixedSingle => 2,
            termpad_theme::BorderStyle::None => 0,
        };
        (self.terminal_size.1 as usize).saturating_sub(2 + border)
    }

    /// File name for the status bar.
    pub fn file_name(&self) -> Option<&str> {
        self.file_path
            .as_deref()
            .and_then(|path| path.file_name())
            .and_then(|name| name.to_str())
    }

    pub fn quit(&mut self, action: ExitAction) {
        logger::info(format!("Exit requested: {:?}", action));
        self.exit_action = Some(action);
    }
}
