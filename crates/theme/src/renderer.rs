//! Menu painting strategies.
//!
//! The menu bar paints itself through a [`MenuPaint`]. Without an installed
//! [`Renderer`] it falls back to [`NativePaint`], which keeps the terminal's
//! own styling. The light theme relies on that fallback, so switching to it
//! clears the renderer instead of installing a light one.

use ratatui::style::{Modifier, Style};

use crate::ColorTable;

/// Visual state of a menu-bar title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleState {
    Idle,
    /// Highlighted while the menu is being navigated
    Hovered,
    /// Its dropdown is open
    Pressed,
}

/// Drawing strategy used by the menu bar and its dropdowns.
///
/// Every method receives the element's own style (its background and
/// foreground) and returns the style to paint with.
pub trait MenuPaint {
    /// Leading and trailing halves of a menu-bar title.
    fn title_styles(&self, base: Style, state: TitleState) -> (Style, Style);

    /// Fill of the dropdown list.
    fn dropdown_fill(&self, base: Style) -> Style;

    /// Outline of the dropdown.
    fn border(&self, base: Style) -> Style;

    /// The three icon-gutter columns, left to right.
    fn gutter(&self, base: Style) -> [Style; 3];

    /// Hovered dropdown item.
    fn selected_item(&self, base: Style) -> Style;

    /// Markers drawn at both ends of the hovered item.
    fn item_marker(&self, base: Style) -> Style;
}

/// Host-default painting: the terminal's own reverse video for highlights.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativePaint;

impl MenuPaint for NativePaint {
    fn title_styles(&self, base: Style, state: TitleState) -> (Style, Style) {
        let style = match state {
            TitleState::Idle => base,
            TitleState::Hovered | TitleState::Pressed => base.add_modifier(Modifier::REVERSED),
        };
        (style, style)
    }

    fn dropdown_fill(&self, base: Style) -> Style {
        base
    }

    fn border(&self, base: Style) -> Style {
        base
    }

    fn gutter(&self, base: Style) -> [Style; 3] {
        [base; 3]
    }

    fn selected_item(&self, base: Style) -> Style {
        base.add_modifier(Modifier::REVERSED)
    }

    fn item_marker(&self, base: Style) -> Style {
        base.add_modifier(Modifier::REVERSED | Modifier::BOLD)
    }
}

/// Custom menu renderer bound to exactly one [`ColorTable`].
///
/// Carries no state besides the table. A fresh renderer is created every
/// time a theme is activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    table: ColorTable,
}

impl Renderer {
    /// Bind a renderer to `table`.
    pub fn new(table: ColorTable) -> Self {
        Self { table }
    }

    /// The table this renderer paints with.
    pub fn table(&self) -> &ColorTable {
        &self.table
    }

    /// Name of the bound table.
    pub fn name(&self) -> &'static str {
        self.table.name
    }
}

impl MenuPaint for Renderer {
    fn title_styles(&self, base: Style, state: TitleState) -> (Style, Style) {
        let t = &self.table;
        match state {
            TitleState::Idle => (base, base),
            TitleState::Hovered => (
                base.bg(t.selected_gradient_begin),
                base.bg(t.selected_gradient_end),
            ),
            TitleState::Pressed => (
                base.bg(t.pressed_gradient_begin),
                base.bg(t.pressed_gradient_end),
            ),
        }
    }

    fn dropdown_fill(&self, base: Style) -> Style {
        base.bg(self.table.dropdown_background)
    }

    fn border(&self, base: Style) -> Style {
        base.fg(self.table.menu_border)
            .bg(self.table.dropdown_background)
    }

    fn gutter(&self, base: Style) -> [Style; 3] {
        self.table.margin_gradient().map(|stop| base.bg(stop))
    }

    fn selected_item(&self, base: Style) -> Style {
        base.bg(self.table.selected_item_background)
    }

    fn item_marker(&self, base: Style) -> Style {
        base.fg(self.table.item_border)
            .bg(self.table.selected_item_background)
            .add_modifier(Modifier::BOLD)
    }
}

/// Pick the painter for an optionally installed renderer.
pub fn painter(renderer: Option<&Renderer>) -> &dyn MenuPaint {
    match renderer {
        Some(renderer) => renderer,
        None => &NativePaint,
    }
}
