//! Color table loading from TOML.

use anyhow::{anyhow, Result};
use ratatui::style::Color;
use serde::Deserialize;

use crate::colors::parse_hex;
use crate::ColorTable;

/// Color representation in TOML.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TomlColor {
    /// `"Black"` or `"#1c1c1c"`
    Named(String),
    Rgb { rgb: [u8; 3] },
}

impl TomlColor {
    fn to_color(&self) -> Result<Color> {
        match self {
            TomlColor::Named(name) if name.starts_with('#') => {
                parse_hex(name).ok_or_else(|| anyhow!("invalid hex color '{}'", name))
            }
            TomlColor::Named(name) => match name.as_str() {
                "Black" => Ok(Color::Black),
                "White" => Ok(Color::White),
                "Gray" => Ok(Color::Gray),
                "DarkGray" => Ok(Color::DarkGray),
                "Blue" => Ok(Color::Blue),
                "LightBlue" => Ok(Color::LightBlue),
                _ => Err(anyhow!("unknown color name '{}'", name)),
            },
            TomlColor::Rgb { rgb } => Ok(Color::Rgb(rgb[0], rgb[1], rgb[2])),
        }
    }
}

/// TOML color table roles. Every role is required.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlColors {
    selected_item_background: TomlColor,
    selected_gradient_begin: TomlColor,
    selected_gradient_end: TomlColor,
    item_border: TomlColor,
    dropdown_background: TomlColor,
    margin_gradient_begin: TomlColor,
    margin_gradient_middle: TomlColor,
    margin_gradient_end: TomlColor,
    menu_border: TomlColor,
    pressed_gradient_begin: TomlColor,
    pressed_gradient_end: TomlColor,
}

/// TOML color table document.
#[derive(Debug, Clone, Deserialize)]
struct TomlTable {
    #[allow(dead_code)]
    name: String,
    colors: TomlColors,
}

/// Load a color table from TOML source with a static name.
pub fn load_table_from_str(content: &str, name: &'static str) -> Result<ColorTable> {
    let table: TomlTable = toml::from_str(content)?;
    let c = table.colors;

    Ok(ColorTable {
        name,
        selected_item_background: c.selected_item_background.to_color()?,
        selected_gradient_begin: c.selected_gradient_begin.to_color()?,
        selected_gradient_end: c.selected_gradient_end.to_color()?,
        item_border: c.item_border.to_color()?,
        dropdown_background: c.dropdown_background.to_color()?,
        margin_gradient_begin: c.margin_gradient_begin.to_color()?,
        margin_gradient_middle: c.margin_gradient_middle.to_color()?,
        margin_gradient_end: c.margin_gradient_end.to_color()?,
        menu_border: c.menu_border.to_color()?,
        pressed_gradient_begin: c.pressed_gradient_begin.to_color()?,
        pressed_gradient_end: c.pressed_gradient_end.to_color()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r##"
name = "sample"

[colors]
selected_item_background = "#242424"
selected_gradient_begin = { rgb = [60, 60, 60] }
selected_gradient_end = { rgb = [60, 60, 60] }
item_border = "Gray"
dropdown_background = "#282828"
margin_gradient_begin = "#282828"
margin_gradient_middle = "#282828"
margin_gradient_end = "#282828"
menu_border = "#505050"
pressed_gradient_begin = "#464646"
pressed_gradient_end = "#464646"
"##;

    #[test]
    fn test_load_full_table() {
        let table = load_table_from_str(FULL, "sample").unwrap();
        assert_eq!(table.name, "sample");
        assert_eq!(table.selected_item_background, Color::Rgb(36, 36, 36));
        assert_eq!(table.selected_gradient_begin, Color::Rgb(60, 60, 60));
        assert_eq!(table.item_border, Color::Gray);
    }

    #[test]
    fn test_partial_table_is_rejected() {
        let partial = r##"
name = "partial"

[colors]
selected_item_background = "#242424"
"##;
        assert!(load_table_from_str(partial, "partial").is_err());
    }

    #[test]
    fn test_bad_hex_is_rejected() {
        let bad = FULL.replace("\"#505050\"", "\"#50505\"");
        assert!(load_table_from_str(&bad, "bad").is_err());
    }
}
