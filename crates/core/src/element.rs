//! Window and menu bar elements.

use ratatui::style::Color;
use termpad_theme::{MenuBarHandle, Renderer, UiHandle, WindowHandle};

/// The terminal screen acting as the application window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub background: Color,
}

impl Default for Window {
    fn default() -> Self {
        Self {
            background: Color::Reset,
        }
    }
}

impl UiHandle for Window {}

impl WindowHandle for Window {
    fn background(&self) -> Color {
        self.background
    }

    fn set_background(&mut self, color: Color) {
        self.background = color;
    }
}

/// The menu bar strip on the first screen row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuBar {
    pub background: Color,
    pub foreground: Color,
    /// Custom renderer; `None` paints with terminal defaults
    pub renderer: Option<Renderer>,
}

impl Default for MenuBar {
    fn default() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::Reset,
            renderer: None,
        }
    }
}

impl UiHandle for MenuBar {}

impl MenuBarHandle for MenuBar {
    fn background(&self) -> Color {
        self.background
    }

    fn foreground(&self) -> Color {
        self.foreground
    }

    fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    fn set_foreground(&mut self, color: Color) {
        self.foreground = color;
    }

    fn renderer(&self) -> Option<&Renderer> {
        self.renderer.as_ref()
    }

    fn set_renderer(&mut self, renderer: Option<Renderer>) {
        self.renderer = renderer;
    }
}
