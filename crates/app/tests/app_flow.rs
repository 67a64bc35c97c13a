//! Drives `App` through key events and checks the resulting state.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

use termpad_app::{
    ActiveModal, App, EditorError, ExitAction, FileStore, Launcher, PendingAction,
};
use termpad_config::constants::{LAUNCH_FAILED, NOTHING_TO_SAVE, NO_FILE_SPECIFIED};
use termpad_config::Config;
use termpad_core::FontStyle;
use termpad_modal::InfoKind;
use termpad_theme::{BorderStyle, ManualAttribute, DARK_SURFACE, LIGHT_SURFACE};

#[derive(Clone, Default)]
struct FakeFiles {
    files: Rc<RefCell<HashMap<PathBuf, String>>>,
    fail_writes: bool,
}

impl FileStore for FakeFiles {
    fn read_file(&self, path: &Path) -> Result<String, EditorError> {
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| EditorError::IoFailure {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "not found"),
            })
    }

    fn write_file(&self, path: &Path, text: &str) -> Result<(), EditorError> {
        if self.fail_writes {
            return Err(EditorError::IoFailure {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), text.to_string());
        Ok(())
    }
}

#[derive(Clone, Default)]
struct FakeLauncher {
    opened: Rc<RefCell<Vec<String>>>,
    fail: bool,
}

impl Launcher for FakeLauncher {
    fn open_external(&self, url: &str) -> Result<(), EditorError> {
        if self.fail {
            return Err(EditorError::ExternalLaunchFailure {
                url: url.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "no opener"),
            });
        }
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}

fn app_with(files: FakeFiles, launcher: FakeLauncher) -> App {
    let mut app =
        App::with_collaborators(Config::default(), Box::new(files), Box::new(launcher)).unwrap();
    app.state_mut().update_terminal_size(80, 24);
    app
}

fn app() -> App {
    app_with(FakeFiles::default(), FakeLauncher::default())
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
        .unwrap();
}

fn ctrl(app: &mut App, c: char) {
    app.handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
        .unwrap();
}

fn alt(app: &mut App, c: char) {
    app.handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT))
        .unwrap();
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// F10, then across to Options → Appearance → Theme and down `index`
/// entries.
fn choose_theme(app: &mut App, index: usize) {
    press(app, KeyCode::F(10));
    press(app, KeyCode::Right); // Options
    press(app, KeyCode::Down); // Appearance
    press(app, KeyCode::Right); // Theme
    press(app, KeyCode::Right); // classic
    for _ in 0..index {
        press(app, KeyCode::Down);
    }
    press(app, KeyCode::Enter);
}

fn info_kind(app: &App) -> Option<(InfoKind, String)> {
    match &app.state().active_modal {
        Some(ActiveModal::Info(modal)) => Some((modal.kind(), modal.message().to_string())),
        _ => None,
    }
}

#[test]
fn test_typing_goes_to_text_area() {
    let mut app = app();
    type_text(&mut app, "hi");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.state().text_area.text(), "hi\n    ");
}

#[test]
fn test_dark_then_classic_round_trip() {
    let mut app = app();
    let startup_window = app.state().window.clone();
    let startup_bar = app.state().menu_bar.clone();
    let startup_menus = app.state().menus.clone();

    choose_theme(&mut app, 1);
    let state = app.state();
    assert!(!state.menu_state.is_open());
    assert_eq!(state.window.background, DARK_SURFACE.window_background);
    assert!(state.menu_bar.renderer.is_some());
    assert_eq!(state.text_area.style.border, BorderStyle::FixedSingle);
    assert!(state
        .menus
        .items()
        .iter()
        .all(|item| item.style.background == DARK_SURFACE.menu_item_background));

    choose_theme(&mut app, 0);
    let state = app.state();
    assert_eq!(state.window, startup_window);
    assert_eq!(state.menu_bar, startup_bar);
    assert_eq!(state.menus, startup_menus);
    assert_eq!(state.text_area.style.border, BorderStyle::None);
    assert_eq!(state.window.background, LIGHT_SURFACE.window_background);
}

#[test]
fn test_new_file_on_empty_text_needs_no_confirmation() {
    let mut app = app();
    ctrl(&mut app, 'n');
    assert!(app.state().active_modal.is_none());
}

#[test]
fn test_guarded_new_file_asks_first() {
    let mut app = app();
    type_text(&mut app, "draft");

    ctrl(&mut app, 'n');
    assert!(matches!(
        app.state().active_modal,
        Some(ActiveModal::Confirm(_))
    ));

    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.state().text_area.text(), "draft");

    ctrl(&mut app, 'n');
    press(&mut app, KeyCode::Enter);
    assert!(app.state().text_area.is_empty());
}

#[test]
fn test_exit_on_empty_text_quits() {
    let mut app = app();
    ctrl(&mut app, 'q');
    assert_eq!(app.state().exit_action, Some(ExitAction::Quit));
}

#[test]
fn test_restart_waits_for_confirmation() {
    let mut app = app();
    type_text(&mut app, "x");
    press(&mut app, KeyCode::F(10));
    for _ in 0..4 {
        press(&mut app, KeyCode::Down);
    }
    press(&mut app, KeyCode::Enter); // Restart
    assert_eq!(app.state().exit_action, None);
    press(&mut app, KeyCode::Char('y'));
    assert_eq!(app.state().exit_action, Some(ExitAction::Restart));
}

#[test]
fn test_new_window_resets_everything() {
    let mut app = app();
    choose_theme(&mut app, 1);
    type_text(&mut app, "text");
    app.state_mut().text_area.set_font(FontStyle::Bold);

    press(&mut app, KeyCode::F(10));
    press(&mut app, KeyCode::Down); // New Window
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter); // confirm

    let state = app.state();
    assert!(state.text_area.is_empty());
    assert_eq!(state.text_area.style.font, FontStyle::Regular);
    assert!(state.menu_bar.renderer.is_none());
}

#[test]
fn test_save_empty_text_warns() {
    let mut app = app();
    ctrl(&mut app, 's');
    assert_eq!(
        info_kind(&app),
        Some((InfoKind::Warning, NOTHING_TO_SAVE.to_string()))
    );
}

#[test]
fn test_save_and_open_through_file_dialog() {
    let dir = tempfile::tempdir().unwrap();
    let files = FakeFiles::default();
    let mut app = app_with(files.clone(), FakeLauncher::default());
    app.state_mut().file_path = Some(dir.path().join("old.txt"));

    type_text(&mut app, "hello");
    ctrl(&mut app, 's');
    assert_eq!(app.state().pending_action, Some(PendingAction::SaveFile));
    type_text(&mut app, "greeting");
    press(&mut app, KeyCode::Enter);

    let saved = dir.path().join("greeting.txt");
    assert_eq!(files.files.borrow().get(&saved).cloned(), Some("hello".to_string()));
    assert_eq!(app.state().file_path.as_deref(), Some(saved.as_path()));
    assert_eq!(app.state().file_name(), Some("greeting.txt"));

    files
        .files
        .borrow_mut()
        .insert(dir.path().join("other.txt"), "other text".to_string());
    ctrl(&mut app, 'o');
    press(&mut app, KeyCode::Enter); // confirm discarding
    type_text(&mut app, "other");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.state().text_area.text(), "other text");
}

#[test]
fn test_save_cancel_notifies() {
    let mut app = app();
    type_text(&mut app, "keep");
    ctrl(&mut app, 's');
    press(&mut app, KeyCode::Esc);
    assert_eq!(
        info_kind(&app),
        Some((InfoKind::Warning, NO_FILE_SPECIFIED.to_string()))
    );
    press(&mut app, KeyCode::Enter);
    assert!(app.state().active_modal.is_none());
    assert_eq!(app.state().text_area.text(), "keep");
}

#[test]
fn test_open_missing_file_keeps_text() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app();
    app.state_mut().file_path = Some(dir.path().join("current.txt"));
    type_text(&mut app, "existing");

    ctrl(&mut app, 'o');
    press(&mut app, KeyCode::Char('y'));
    type_text(&mut app, "missing");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.state().text_area.text(), "existing");
    assert!(matches!(info_kind(&app), Some((InfoKind::Error, _))));
}

#[test]
fn test_failed_write_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let files = FakeFiles {
        fail_writes: true,
        ..FakeFiles::default()
    };
    let mut app = app_with(files, FakeLauncher::default());
    app.state_mut().file_path = Some(dir.path().join("a.txt"));
    type_text(&mut app, "text");

    ctrl(&mut app, 's');
    type_text(&mut app, "locked");
    press(&mut app, KeyCode::Enter);

    assert!(matches!(info_kind(&app), Some((InfoKind::Error, _))));
    assert_eq!(app.state().file_path, Some(dir.path().join("a.txt")));
}

#[test]
fn test_font_select_applies_style() {
    let mut app = app();
    press(&mut app, KeyCode::F(10));
    press(&mut app, KeyCode::Right); // Options
    press(&mut app, KeyCode::Enter); // Font and color
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter); // Italic

    assert_eq!(app.state().text_area.style.font, FontStyle::Italic);
    assert!(app.state().active_modal.is_none());
}

#[test]
fn test_font_color_entry_changes_foreground_only() {
    let mut app = app();
    let window = app.state().window.clone();
    let bar = app.state().menu_bar.clone();

    press(&mut app, KeyCode::F(10));
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter); // Font and color
    press(&mut app, KeyCode::End);
    press(&mut app, KeyCode::Enter); // Color...
    assert_eq!(
        app.state().pending_action,
        Some(PendingAction::ManualColor(ManualAttribute::Foreground))
    );

    press(&mut app, KeyCode::Down); // Red, one row below black
    press(&mut app, KeyCode::Enter);

    let state = app.state();
    assert_eq!(state.text_area.style.foreground, Color::Rgb(255, 0, 0));
    assert_eq!(state.window, window);
    assert_eq!(state.menu_bar, bar);
}

/// F10 → Options → Appearance → Manual Configuration, then the attribute
/// at `index`.
fn choose_manual_attribute(app: &mut App, index: usize) {
    press(app, KeyCode::F(10));
    press(app, KeyCode::Right); // Options
    press(app, KeyCode::Down); // Appearance
    press(app, KeyCode::Right); // Theme
    press(app, KeyCode::Down); // Manual Configuration
    press(app, KeyCode::Enter);
    for _ in 0..index {
        press(app, KeyCode::Down);
    }
    press(app, KeyCode::Enter);
}

#[test]
fn test_manual_override_with_current_color_is_noop() {
    let mut app = app();
    let before = app.state().text_area.style;

    // Foreground picker is seeded with black, already the foreground
    choose_manual_attribute(&mut app, 0);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.state().text_area.style, before);
    assert!(app.state().status_message.is_none());
    assert!(app.state().active_modal.is_none());
}

#[test]
fn test_manual_menu_bar_override_then_cancel() {
    let mut app = app();
    let before_bar = app.state().menu_bar.clone();
    let before_window = app.state().window.clone();

    choose_manual_attribute(&mut app, 3);
    assert!(matches!(
        app.state().active_modal,
        Some(ActiveModal::ColorPicker(_))
    ));

    // Seeded with the light separator tone; the startup bar is lavender
    press(&mut app, KeyCode::Enter);
    let changed = app.state().menu_bar.background;
    assert_ne!(changed, before_bar.background);
    assert_eq!(app.state().menu_bar.foreground, before_bar.foreground);
    assert_eq!(app.state().window, before_window);

    // Cancelling a second attempt leaves the override in place
    choose_manual_attribute(&mut app, 3);
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.state().menu_bar.background, changed);
    assert!(app.state().active_modal.is_none());
}

#[test]
fn test_contact_links_use_launcher() {
    let launcher = FakeLauncher::default();
    let mut app = app_with(FakeFiles::default(), launcher.clone());

    press(&mut app, KeyCode::F(10));
    press(&mut app, KeyCode::Left); // About
    press(&mut app, KeyCode::Right); // Contact me..
    press(&mut app, KeyCode::Down); // GitHub
    press(&mut app, KeyCode::Enter);

    assert_eq!(launcher.opened.borrow().len(), 1);
    assert!(launcher.opened.borrow()[0].contains("github.com"));
}

#[test]
fn test_contact_launch_failure_notifies() {
    let launcher = FakeLauncher {
        fail: true,
        ..FakeLauncher::default()
    };
    let mut app = app_with(FakeFiles::default(), launcher);

    alt(&mut app, 'a');
    press(&mut app, KeyCode::Enter); // Contact me..
    press(&mut app, KeyCode::Enter); // Facebook

    assert_eq!(
        info_kind(&app),
        Some((InfoKind::Error, LAUNCH_FAILED.to_string()))
    );
}
