//! Live UI elements of termpad.
//!
//! The window surface, the menu bar with its menu tree and the text area.
//! Each element implements the matching theme handle trait so the theme
//! subsystem can write to it without knowing the concrete types.

pub mod element;
pub mod event;
pub mod menu;
pub mod text_area;

pub use element::{MenuBar, Window};
pub use event::{Event, EventHandler};
pub use menu::{ContactLink, ItemStyle, MenuCommand, MenuItem, MenuState, MenuTree};
pub use text_area::{FontStyle, TextArea, TextStyle};
