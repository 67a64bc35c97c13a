//! Manual configuration: single-attribute color overrides.
//!
//! Each override writes exactly one attribute of one element and only when
//! the chosen color differs from the current one. Menu items, the color
//! tables and the installed renderer are never touched, so a manually
//! recolored menu bar does not drag its items along.
//!
//! Two entry points share the same write path: the `change_*` functions
//! drive a blocking [`ColorPrompt`], while [`commit_override`] takes a color
//! already picked in a dialog. The application uses the latter, since its
//! color picker is a modal that answers on a later key event.

use ratatui::style::Color;
use termpad_logger as logger;

use crate::colors::{BLACK, GHOST_WHITE, SEPARATOR_LIGHT};
use crate::{MenuBarHandle, TextAreaHandle, WindowHandle};

/// Attributes the user can override one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManualAttribute {
    /// Text area foreground
    Foreground,
    /// Text area background
    EditorBackground,
    /// Window background
    AppBackground,
    /// Menu bar background
    MenuBarBackground,
}

impl ManualAttribute {
    pub const ALL: [ManualAttribute; 4] = [
        ManualAttribute::Foreground,
        ManualAttribute::EditorBackground,
        ManualAttribute::AppBackground,
        ManualAttribute::MenuBarBackground,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ManualAttribute::Foreground => "Foreground",
            ManualAttribute::EditorBackground => "Editor background",
            ManualAttribute::AppBackground => "Application background",
            ManualAttribute::MenuBarBackground => "Menu bar color",
        }
    }

    /// Color the prompt is seeded with.
    pub fn default_color(self) -> Color {
        match self {
            ManualAttribute::Foreground => BLACK,
            ManualAttribute::EditorBackground | ManualAttribute::AppBackground => GHOST_WHITE,
            ManualAttribute::MenuBarBackground => SEPARATOR_LIGHT,
        }
    }
}

/// Result of one override attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManualOutcome {
    /// The attribute now holds the chosen color
    Changed,
    /// The chosen color equals the current one; nothing was written
    Unchanged,
    /// The prompt was dismissed
    Cancelled,
}

/// A color-selection prompt seeded with a default color.
pub trait ColorPrompt {
    /// `None` when the user dismisses the prompt.
    fn prompt_color(&mut self, default: Color) -> Option<Color>;
}

/// Elements manual configuration may write to.
pub struct ManualTarget<'a> {
    pub window: &'a mut dyn WindowHandle,
    pub menu_bar: &'a mut dyn MenuBarHandle,
    pub text_area: &'a mut dyn TextAreaHandle,
}

fn write_if_changed(
    attribute: ManualAttribute,
    current: Color,
    chosen: Option<Color>,
    write: impl FnOnce(Color),
) -> ManualOutcome {
    match chosen {
        None => ManualOutcome::Cancelled,
        Some(color) if color == current => {
            logger::debug(format!("{} already {:?}, skipped", attribute.label(), color));
            ManualOutcome::Unchanged
        }
        Some(color) => {
            write(color);
            logger::info(format!("{} set to {:?}", attribute.label(), color));
            ManualOutcome::Changed
        }
    }
}

fn commit_foreground(text_area: &mut dyn TextAreaHandle, chosen: Option<Color>) -> ManualOutcome {
    write_if_changed(ManualAttribute::Foreground, text_area.foreground(), chosen, |c| {
        text_area.set_foreground(c)
    })
}

fn commit_editor_background(
    text_area: &mut dyn TextAreaHandle,
    chosen: Option<Color>,
) -> ManualOutcome {
    write_if_changed(ManualAttribute::EditorBackground, text_area.background(), chosen, |c| {
        text_area.set_background(c)
    })
}

fn commit_app_background(window: &mut dyn WindowHandle, chosen: Option<Color>) -> ManualOutcome {
    write_if_changed(ManualAttribute::AppBackground, window.background(), chosen, |c| {
        window.set_background(c)
    })
}

fn commit_menu_bar_color(
    menu_bar: &mut dyn MenuBarHandle,
    chosen: Option<Color>,
) -> ManualOutcome {
    write_if_changed(ManualAttribute::MenuBarBackground, menu_bar.background(), chosen, |c| {
        menu_bar.set_background(c)
    })
}

/// Override the text area foreground.
pub fn change_foreground(
    prompt: &mut dyn ColorPrompt,
    text_area: &mut dyn TextAreaHandle,
) -> ManualOutcome {
    let chosen = prompt.prompt_color(ManualAttribute::Foreground.default_color());
    commit_foreground(text_area, chosen)
}

/// Override the text area background.
pub fn change_editor_background(
    prompt: &mut dyn ColorPrompt,
    text_area: &mut dyn TextAreaHandle,
) -> ManualOutcome {
    let chosen = prompt.prompt_color(ManualAttribute::EditorBackground.default_color());
    commit_editor_background(text_area, chosen)
}

/// Override the window background.
pub fn change_app_background(
    prompt: &mut dyn ColorPrompt,
    window: &mut dyn WindowHandle,
) -> ManualOutcome {
    let chosen = prompt.prompt_color(ManualAttribute::AppBackground.default_color());
    commit_app_background(window, chosen)
}

/// Override the menu bar background.
pub fn change_menu_bar_color(
    prompt: &mut dyn ColorPrompt,
    menu_bar: &mut dyn MenuBarHandle,
) -> ManualOutcome {
    let chosen = prompt.prompt_color(ManualAttribute::MenuBarBackground.default_color());
    commit_menu_bar_color(menu_bar, chosen)
}

/// Commit a color already chosen through an asynchronous prompt.
///
/// Same semantics as the `change_*` functions: `None` means the prompt was
/// dismissed.
pub fn commit_override(
    attribute: ManualAttribute,
    chosen: Option<Color>,
    target: &mut ManualTarget<'_>,
) -> ManualOutcome {
    match attribute {
        ManualAttribute::Foreground => commit_foreground(&mut *target.text_area, chosen),
        ManualAttribute::EditorBackground => {
            commit_editor_background(&mut *target.text_area, chosen)
        }
        ManualAttribute::AppBackground => commit_app_background(&mut *target.window, chosen),
        ManualAttribute::MenuBarBackground => {
            commit_menu_bar_color(&mut *target.menu_bar, chosen)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeBar, FakeTextArea, FakeWindow};
    use crate::BorderStyle;

    struct Answer(Option<Color>);

    impl ColorPrompt for Answer {
        fn prompt_color(&mut self, _default: Color) -> Option<Color> {
            self.0
        }
    }

    /// Records the seed it was shown.
    struct Seeded(Option<Color>);

    impl ColorPrompt for Seeded {
        fn prompt_color(&mut self, default: Color) -> Option<Color> {
            self.0 = Some(default);
            None
        }
    }

    #[test]
    fn test_foreground_change_writes_only_foreground() {
        let mut text = FakeTextArea::default();
        let before = text.clone();
        let red = Color::Rgb(200, 0, 0);

        let outcome = change_foreground(&mut Answer(Some(red)), &mut text);

        assert_eq!(outcome, ManualOutcome::Changed);
        assert_eq!(text.foreground, red);
        assert_eq!(text.background, before.background);
        assert_eq!(text.border, before.border);
        assert_eq!(text.writes, 1);
    }

    #[test]
    fn test_same_color_is_not_written() {
        let mut text = FakeTextArea::default();
        let current = text.foreground;

        let outcome = change_foreground(&mut Answer(Some(current)), &mut text);

        assert_eq!(outcome, ManualOutcome::Unchanged);
        assert_eq!(text.writes, 0);
    }

    #[test]
    fn test_cancel_is_not_written() {
        let mut window = FakeWindow::default();
        let outcome = change_app_background(&mut Answer(None), &mut window);
        assert_eq!(outcome, ManualOutcome::Cancelled);
        assert_eq!(window.writes, 0);
    }

    #[test]
    fn test_prompt_seeded_with_attribute_default() {
        let mut prompt = Seeded(None);
        let mut bar = FakeBar::default();
        change_menu_bar_color(&mut prompt, &mut bar);
        assert_eq!(prompt.0, Some(SEPARATOR_LIGHT));

        let mut prompt = Seeded(None);
        let mut text = FakeTextArea::default();
        change_editor_background(&mut prompt, &mut text);
        assert_eq!(prompt.0, Some(GHOST_WHITE));
    }

    #[test]
    fn test_menu_bar_override_leaves_renderer_alone() {
        let mut bar = FakeBar::default();
        let green = Color::Rgb(0, 128, 0);

        change_menu_bar_color(&mut Answer(Some(green)), &mut bar);

        assert_eq!(bar.background, green);
        assert!(bar.renderer.is_none());
        assert_eq!(bar.writes, 1);
    }

    #[test]
    fn test_commit_override_targets_one_element() {
        let mut window = FakeWindow::default();
        let mut bar = FakeBar::default();
        let mut text = FakeTextArea::default();
        let blue = Color::Rgb(0, 0, 200);

        let outcome = {
            let mut target = ManualTarget {
                window: &mut window,
                menu_bar: &mut bar,
                text_area: &mut text,
            };
            commit_override(ManualAttribute::EditorBackground, Some(blue), &mut target)
        };

        assert_eq!(outcome, ManualOutcome::Changed);
        assert_eq!(text.background, blue);
        assert_eq!(text.border, BorderStyle::None);
        assert_eq!(window.writes + bar.writes, 0);
    }

    #[test]
    fn test_prompt_and_commit_forms_agree() {
        let violet = Color::Rgb(120, 0, 160);

        for attribute in ManualAttribute::ALL {
            let mut prompted = (
                FakeWindow::default(),
                FakeBar::default(),
                FakeTextArea::default(),
            );
            let mut answer = Answer(Some(violet));
            let prompted_outcome = match attribute {
                ManualAttribute::Foreground => change_foreground(&mut answer, &mut prompted.2),
                ManualAttribute::EditorBackground => {
                    change_editor_background(&mut answer, &mut prompted.2)
                }
                ManualAttribute::AppBackground => {
                    change_app_background(&mut answer, &mut prompted.0)
                }
                ManualAttribute::MenuBarBackground => {
                    change_menu_bar_color(&mut answer, &mut prompted.1)
                }
            };

            let mut committed = (
                FakeWindow::default(),
                FakeBar::default(),
                FakeTextArea::default(),
            );
            let committed_outcome = {
                let mut target = ManualTarget {
                    window: &mut committed.0,
                    menu_bar: &mut committed.1,
                    text_area: &mut committed.2,
                };
                commit_override(attribute, Some(violet), &mut target)
            };

            assert_eq!(prompted_outcome, ManualOutcome::Changed, "{:?}", attribute);
            assert_eq!(prompted_outcome, committed_outcome, "{:?}", attribute);
            assert_eq!(prompted, committed, "{:?}", attribute);
        }
    }
}
