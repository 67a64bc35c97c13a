use ratatui::{
    layout::{Constraint, Direction, Layout, Margin},
    style::Style,
    widgets::Block,
    Frame,
};

use termpad_app::AppState;
use termpad_theme::{BorderStyle, DialogStyle};
use termpad_ui_render::{
    render_menu_bar, render_open_dropdowns, render_text_area, StatusBar, StatusBarParams,
};

/// Render the whole screen: window surface, menu bar, text area, status bar,
/// then open dropdowns and the active modal on top
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let size = frame.area();

    // Window surface shows around the text area
    let background = Block::default().style(Style::default().bg(state.window.background));
    frame.render_widget(background, size);

    // Split screen into menu (1 line), main area, and status bar (1 line)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Menu
            Constraint::Min(0),    // Text area
            Constraint::Length(1), // Status bar
        ])
        .split(size);

    render_menu_bar(
        frame.buffer_mut(),
        chunks[0],
        &state.menus,
        &state.menu_bar,
        &state.menu_state,
    );

    let text_area = chunks[1].inner(Margin {
        horizontal: 1,
        vertical: 0,
    });
    let (inner_width, inner_height) = match state.text_area.style.border {
        BorderStyle::FixedSingle => (
            text_area.width.saturating_sub(2),
            text_area.height.saturating_sub(2),
        ),
        BorderStyle::None => (text_area.width, text_area.height),
    };
    state
        .text_area
        .ensure_cursor_visible(inner_height as usize, inner_width as usize);
    let cursor = render_text_area(frame.buffer_mut(), text_area, &state.text_area);

    let status_params = StatusBarParams {
        file_name: state.file_name(),
        cursor: (
            state.text_area.cursor().line,
            state.text_area.cursor().column,
        ),
        status_message: state.status_message.as_ref(),
    };
    StatusBar::render(frame.buffer_mut(), chunks[2], &state.menu_bar, &status_params);

    if state.menu_state.is_open() {
        render_open_dropdowns(
            frame.buffer_mut(),
            size,
            &state.menus,
            &state.menu_bar,
            &state.menu_state,
        );
    }

    if let Some(modal) = state.active_modal.as_mut() {
        modal.render(size, frame.buffer_mut(), &DialogStyle::default());
    } else if !state.menu_state.is_open() {
        if let Some((x, y)) = cursor {
            frame.set_cursor_position((x, y));
        }
    }
}
