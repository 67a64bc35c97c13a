//! Theme system for termpad.
//!
//! Two built-in themes (light and dark) are switched atomically across the
//! window, menu bar, every menu item and the text area. Menu chrome comes
//! from a [`ColorTable`] painted through a [`Renderer`]; window and editor
//! surfaces come from a separate [`SurfacePalette`]. Manual configuration
//! overrides single attributes on top of whatever was applied last.

mod applier;
mod colors;
mod error;
mod loader;
mod manual;
mod renderer;
mod target;

pub use applier::{apply_theme, ThemeBundle};
pub use colors::{
    parse_hex, to_hex, BorderStyle, ColorTable, DialogStyle, SurfacePalette, BLACK,
    DARK_SURFACE, GHOST_WHITE, LIGHT_SURFACE, SEPARATOR_LIGHT, WHITE,
};
pub use error::ThemeError;
pub use loader::load_table_from_str;
pub use manual::{
    change_app_background, change_editor_background, change_foreground, change_menu_bar_color,
    commit_override, ColorPrompt, ManualAttribute, ManualOutcome, ManualTarget,
};
pub use renderer::{painter, MenuPaint, NativePaint, Renderer, TitleState};
pub use target::{
    MenuBarHandle, MenuItemHandle, TextAreaHandle, ThemeTarget, UiHandle, WindowHandle,
};

use ratatui::style::Color;
use std::str::FromStr;
use std::sync::OnceLock;

// Embed color tables at compile time
const TABLE_LIGHT_TOML: &str = include_str!("../themes/light.toml");
const TABLE_DARK_TOML: &str = include_str!("../themes/dark.toml");

// Parsed once, shared read-only for the process lifetime
static TABLE_LIGHT: OnceLock<ColorTable> = OnceLock::new();
static TABLE_DARK: OnceLock<ColorTable> = OnceLock::new();

/// Built-in themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeKind {
    /// The classic light theme (startup default)
    #[default]
    Light,
    Dark,
}

impl ThemeKind {
    pub const ALL: [ThemeKind; 2] = [ThemeKind::Light, ThemeKind::Dark];

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            ThemeKind::Light => "classic",
            ThemeKind::Dark => "dark",
        }
    }

    /// Window and editor surfaces.
    pub fn surface(self) -> &'static SurfacePalette {
        match self {
            ThemeKind::Light => &LIGHT_SURFACE,
            ThemeKind::Dark => &DARK_SURFACE,
        }
    }

    /// Renderer to install on the menu bar.
    ///
    /// The light theme follows host styling and installs none.
    pub fn menu_renderer(self) -> Option<Renderer> {
        match self {
            ThemeKind::Light => None,
            ThemeKind::Dark => Some(Renderer::new(*color_table(self))),
        }
    }
}

impl FromStr for ThemeKind {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "classic" | "light" => Ok(ThemeKind::Light),
            "dark" => Ok(ThemeKind::Dark),
            _ => Err(ThemeError::UnknownTheme(s.to_string())),
        }
    }
}

/// Hardcoded fallback table in case an embedded table fails to parse.
fn fallback_table(name: &'static str) -> ColorTable {
    let (bg, fg) = match name {
        "dark" => (Color::Rgb(40, 40, 40), Color::Rgb(80, 80, 80)),
        _ => (Color::Rgb(252, 252, 252), Color::Rgb(160, 160, 160)),
    };
    ColorTable {
        name,
        selected_item_background: fg,
        selected_gradient_begin: fg,
        selected_gradient_end: fg,
        item_border: fg,
        dropdown_background: bg,
        margin_gradient_begin: bg,
        margin_gradient_middle: bg,
        margin_gradient_end: bg,
        menu_border: fg,
        pressed_gradient_begin: fg,
        pressed_gradient_end: fg,
    }
}

fn load_embedded(content: &str, name: &'static str) -> ColorTable {
    match load_table_from_str(content, name) {
        Ok(table) => table,
        Err(e) => {
            termpad_logger::error(format!(
                "Failed to parse built-in color table '{}': {}. Using fallback table.",
                name, e
            ));
            fallback_table(name)
        }
    }
}

/// Color table of a built-in theme.
pub fn color_table(kind: ThemeKind) -> &'static ColorTable {
    match kind {
        ThemeKind::Light => TABLE_LIGHT.get_or_init(|| load_embedded(TABLE_LIGHT_TOML, "light")),
        ThemeKind::Dark => TABLE_DARK.get_or_init(|| load_embedded(TABLE_DARK_TOML, "dark")),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_parse() {
        let light = color_table(ThemeKind::Light);
        let dark = color_table(ThemeKind::Dark);
        assert_eq!(light.name, "light");
        assert_eq!(dark.name, "dark");
        assert_eq!(dark.selected_item_background, Color::Rgb(36, 36, 36));
        assert_eq!(dark.pressed_gradient_begin, Color::Rgb(70, 70, 70));
    }

    #[test]
    fn test_tables_keep_highlights_distinguishable() {
        for kind in ThemeKind::ALL {
            let t = color_table(kind);
            assert_ne!(t.selected_item_background, t.dropdown_background);
            assert_ne!(t.pressed_gradient_begin, t.dropdown_background);
            assert_ne!(t.menu_border, t.dropdown_background);
            assert_ne!(t.menu_border, kind.surface().menu_item_background);
        }
    }

    #[test]
    fn test_theme_kind_from_menu_label() {
        assert_eq!("classic".parse::<ThemeKind>(), Ok(ThemeKind::Light));
        assert_eq!("Dark".parse::<ThemeKind>(), Ok(ThemeKind::Dark));
        assert_eq!(
            "solarized".parse::<ThemeKind>(),
            Err(ThemeError::UnknownTheme("solarized".to_string()))
        );
    }

    #[test]
    fn test_only_dark_installs_a_renderer() {
        assert!(ThemeKind::Light.menu_renderer().is_none());
        let dark = ThemeKind::Dark.menu_renderer().unwrap();
        assert_eq!(dark.table(), color_table(ThemeKind::Dark));
    }

    #[test]
    fn test_fallback_table_is_complete() {
        let table = fallback_table("dark");
        assert_eq!(table.name, "dark");
        assert_ne!(table.selected_item_background, table.dropdown_background);
    }
}
