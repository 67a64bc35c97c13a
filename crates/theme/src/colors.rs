//! Color definitions: menu chrome tables and theme surface palettes.

use ratatui::style::Color;

/// `Color.GhostWhite`, used by the light editor surface and every dialog.
pub const GHOST_WHITE: Color = Color::Rgb(248, 248, 255);
/// Light separator tone used as the light window surface.
pub const SEPARATOR_LIGHT: Color = Color::Rgb(245, 246, 247);
/// Pure black, the light foreground.
pub const BLACK: Color = Color::Rgb(0, 0, 0);
/// Pure white, the light menu item background.
pub const WHITE: Color = Color::Rgb(255, 255, 255);

/// Colors used to paint menu chrome, keyed by semantic role.
///
/// A table is always complete: there is no partially filled table and no
/// table is built ad hoc. The built-in instances are obtained through
/// [`crate::color_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTable {
    /// Table name for display and logging
    pub name: &'static str,

    // === Item selection ===
    /// Background of the hovered dropdown item
    pub selected_item_background: Color,
    /// Hovered menu-bar title, leading edge
    pub selected_gradient_begin: Color,
    /// Hovered menu-bar title, trailing edge
    pub selected_gradient_end: Color,
    /// Marker drawn around the hovered item
    pub item_border: Color,

    // === Dropdown ===
    /// Fill of the dropdown list
    pub dropdown_background: Color,
    /// Icon gutter, first column
    pub margin_gradient_begin: Color,
    /// Icon gutter, middle column
    pub margin_gradient_middle: Color,
    /// Icon gutter, last column
    pub margin_gradient_end: Color,
    /// Outline of the dropdown
    pub menu_border: Color,

    // === Pressed ===
    /// Open menu-bar title, leading edge
    pub pressed_gradient_begin: Color,
    /// Open menu-bar title, trailing edge
    pub pressed_gradient_end: Color,
}

impl ColorTable {
    /// The three gutter stops, left to right.
    pub fn margin_gradient(&self) -> [Color; 3] {
        [
            self.margin_gradient_begin,
            self.margin_gradient_middle,
            self.margin_gradient_end,
        ]
    }
}

/// Border drawn around the text area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    /// No border at all
    #[default]
    None,
    /// Single fixed-width line
    FixedSingle,
}

/// Window and editor surfaces for one built-in theme.
///
/// These are theme-level constants, deliberately kept out of [`ColorTable`]
/// so menu chrome and surfaces can vary independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfacePalette {
    pub window_background: Color,
    pub menu_bar_background: Color,
    pub menu_bar_foreground: Color,
    pub menu_item_background: Color,
    pub menu_item_foreground: Color,
    pub text_background: Color,
    pub text_foreground: Color,
    pub text_border: BorderStyle,
}

/// Surfaces of the classic light theme.
pub const LIGHT_SURFACE: SurfacePalette = SurfacePalette {
    window_background: SEPARATOR_LIGHT,
    menu_bar_background: Color::Rgb(250, 230, 250),
    menu_bar_foreground: BLACK,
    menu_item_background: WHITE,
    menu_item_foreground: BLACK,
    text_background: GHOST_WHITE,
    text_foreground: BLACK,
    text_border: BorderStyle::None,
};

/// Surfaces of the dark theme.
pub const DARK_SURFACE: SurfacePalette = SurfacePalette {
    window_background: Color::Rgb(28, 28, 28),
    menu_bar_background: Color::Rgb(23, 23, 23),
    menu_bar_foreground: GHOST_WHITE,
    menu_item_background: Color::Rgb(27, 27, 27),
    menu_item_foreground: GHOST_WHITE,
    text_background: Color::Rgb(28, 28, 28),
    text_foreground: GHOST_WHITE,
    text_border: BorderStyle::FixedSingle,
};

/// Colors for modal dialogs. Dialogs are not themed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogStyle {
    pub background: Color,
    pub foreground: Color,
    /// Focused button / selected row
    pub accent: Color,
    /// Text on top of `accent`
    pub accent_foreground: Color,
    pub error: Color,
}

impl Default for DialogStyle {
    fn default() -> Self {
        Self {
            background: GHOST_WHITE,
            foreground: BLACK,
            accent: Color::Rgb(0, 120, 215),
            accent_foreground: WHITE,
            error: Color::Rgb(196, 43, 28),
        }
    }
}

/// Parse `#rrggbb` (leading `#` optional) into an RGB color.
pub fn parse_hex(input: &str) -> Option<Color> {
    let hex = input.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// Format an RGB color as `#rrggbb`. Indexed and named colors have no
/// hex form.
pub fn to_hex(color: Color) -> Option<String> {
    match color {
        Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_accepts_with_and_without_hash() {
        assert_eq!(parse_hex("#1c1c1c"), Some(Color::Rgb(28, 28, 28)));
        assert_eq!(parse_hex("F8F8FF"), Some(GHOST_WHITE));
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        assert_eq!(parse_hex("#12345"), None);
        assert_eq!(parse_hex("zzzzzz"), None);
        assert_eq!(parse_hex(""), None);
    }

    #[test]
    fn test_to_hex_only_for_rgb() {
        assert_eq!(to_hex(Color::Rgb(23, 23, 23)).as_deref(), Some("#171717"));
        assert_eq!(to_hex(Color::Red), None);
    }

    #[test]
    fn test_surfaces_differ_between_themes() {
        assert_ne!(LIGHT_SURFACE.window_background, DARK_SURFACE.window_background);
        assert_eq!(LIGHT_SURFACE.text_border, BorderStyle::None);
        assert_eq!(DARK_SURFACE.text_border, BorderStyle::FixedSingle);
    }
}
