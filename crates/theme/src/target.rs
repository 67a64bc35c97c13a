//! Handles to the live UI elements a theme writes to.
//!
//! The theme subsystem never owns or retains these; a [`ThemeTarget`] lives
//! for the duration of a single call.

use ratatui::style::Color;

use crate::{BorderStyle, Renderer};

/// Common behaviour of every themeable handle.
pub trait UiHandle {
    /// `false` once the element behind the handle is gone.
    fn is_attached(&self) -> bool {
        true
    }
}

/// The top-level window surface.
pub trait WindowHandle: UiHandle {
    fn background(&self) -> Color;
    fn set_background(&mut self, color: Color);
}

/// The menu bar strip and its installed renderer.
pub trait MenuBarHandle: UiHandle {
    fn background(&self) -> Color;
    fn foreground(&self) -> Color;
    fn set_background(&mut self, color: Color);
    fn set_foreground(&mut self, color: Color);
    fn renderer(&self) -> Option<&Renderer>;
    /// `None` clears the renderer and restores host-default painting.
    fn set_renderer(&mut self, renderer: Option<Renderer>);
}

/// One menu item: a top-level menu or any nested submenu entry.
pub trait MenuItemHandle: UiHandle {
    fn background(&self) -> Color;
    fn foreground(&self) -> Color;
    fn set_background(&mut self, color: Color);
    fn set_foreground(&mut self, color: Color);
}

/// The editable text area.
pub trait TextAreaHandle: UiHandle {
    fn background(&self) -> Color;
    fn foreground(&self) -> Color;
    fn border(&self) -> BorderStyle;
    fn set_background(&mut self, color: Color);
    fn set_foreground(&mut self, color: Color);
    fn set_border(&mut self, border: BorderStyle);
}

/// Every live handle one theme application touches.
pub struct ThemeTarget<'a> {
    pub window: &'a mut dyn WindowHandle,
    pub menu_bar: &'a mut dyn MenuBarHandle,
    pub text_area: &'a mut dyn TextAreaHandle,
    /// Flat, ordered list of all menu items, nested ones included.
    pub menu_items: Vec<&'a mut dyn MenuItemHandle>,
}

impl ThemeTarget<'_> {
    /// Name of the first detached handle, if any.
    pub(crate) fn first_detached(&self) -> Option<&'static str> {
        if !self.window.is_attached() {
            return Some("window");
        }
        if !self.menu_bar.is_attached() {
            return Some("menu bar");
        }
        if !self.text_area.is_attached() {
            return Some("text area");
        }
        if self.menu_items.iter().any(|item| !item.is_attached()) {
            return Some("menu item");
        }
        None
    }
}
