//! Atomic switching between the built-in themes.

use termpad_logger as logger;

use crate::{Renderer, SurfacePalette, ThemeError, ThemeKind, ThemeTarget};

/// Every value a built-in theme assigns, staged before anything is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeBundle {
    pub kind: ThemeKind,
    pub surface: SurfacePalette,
    /// `None` for themes painted by the host.
    pub renderer: Option<Renderer>,
}

impl ThemeBundle {
    /// Stage the bundle for `kind`. Derived only from constants, never from
    /// the previously applied theme.
    pub fn for_kind(kind: ThemeKind) -> Self {
        Self {
            kind,
            surface: *kind.surface(),
            renderer: kind.menu_renderer(),
        }
    }

    /// Write the whole bundle in one pass.
    fn commit(&self, target: &mut ThemeTarget<'_>) {
        let s = &self.surface;

        target.window.set_background(s.window_background);

        target.menu_bar.set_background(s.menu_bar_background);
        target.menu_bar.set_foreground(s.menu_bar_foreground);
        target.menu_bar.set_renderer(self.renderer);

        for item in target.menu_items.iter_mut() {
            item.set_background(s.menu_item_background);
            item.set_foreground(s.menu_item_foreground);
        }

        target.text_area.set_background(s.text_background);
        target.text_area.set_foreground(s.text_foreground);
        target.text_area.set_border(s.text_border);
    }
}

/// Apply a built-in theme to every element of `target`.
///
/// All handles are checked before the first write: on
/// [`ThemeError::InvalidTarget`] nothing has been changed. Applying the same
/// kind twice leaves the same visible state.
pub fn apply_theme(kind: ThemeKind, target: &mut ThemeTarget<'_>) -> Result<(), ThemeError> {
    if let Some(handle) = target.first_detached() {
        logger::error(format!(
            "Refusing to apply {} theme: {} is detached",
            kind.label(),
            handle
        ));
        return Err(ThemeError::InvalidTarget { handle });
    }

    ThemeBundle::for_kind(kind).commit(target);

    logger::info(format!(
        "Applied {} theme ({} menu items)",
        kind.label(),
        target.menu_items.len()
    ));
    Ok(())
}
