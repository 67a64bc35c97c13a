//! UI rendering components for termpad.
//!
//! Everything here draws into a ratatui [`Buffer`](ratatui::buffer::Buffer);
//! the menu chrome goes through the bar's [`MenuPaint`](termpad_theme::MenuPaint).

pub mod dropdown;
pub mod menu;
pub mod status_bar;
pub mod text_area;

pub use dropdown::{render_open_dropdowns, Dropdown};
pub use menu::{render_menu_bar, title_spans, MENU_HINT};
pub use status_bar::{StatusBar, StatusBarParams};
pub use text_area::render_text_area;
