//! Menu bar rendering.

use chrono::Local;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

use termpad_core::{MenuBar, MenuState, MenuTree};
use termpad_theme::{painter, TitleState};

/// Hint shown at the right end of the bar.
pub const MENU_HINT: &str = "F10: menu";

/// Column and width of every top-level title.
pub fn title_spans(tree: &MenuTree) -> Vec<(u16, u16)> {
    let mut x = 1u16;
    tree.menus()
        .iter()
        .map(|menu| {
            let width = menu.label.width() as u16 + 2;
            let span = (x, width);
            x += width;
            span
        })
        .collect()
}

fn title_state(state: &MenuState, index: usize) -> TitleState {
    match state.path() {
        [top] if *top == index => TitleState::Hovered,
        [top, _, ..] if *top == index => TitleState::Pressed,
        _ => TitleState::Idle,
    }
}

/// Render the menu bar strip with its top-level titles.
pub fn render_menu_bar(
    buf: &mut Buffer,
    area: Rect,
    tree: &MenuTree,
    bar: &MenuBar,
    state: &MenuState,
) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let bar_style = Style::default().bg(bar.background).fg(bar.foreground);
    let paint = painter(bar.renderer.as_ref());
    let y = area.y;

    buf.set_stringn(area.x, y, " ".repeat(area.width as usize), area.width as usize, bar_style);

    for (index, (menu, (x, width))) in tree.menus().iter().zip(title_spans(tree)).enumerate() {
        let x = area.x + x;
        if x + width > area.right() {
            break;
        }

        let base = Style::default()
            .bg(menu.style.background)
            .fg(menu.style.foreground);
        let (lead, trail) = paint.title_styles(base, title_state(state, index));

        // Each half of the title carries one end of the gradient
        let text: Vec<char> = format!(" {} ", menu.label).chars().collect();
        let split = text.len().div_ceil(2);
        let lead_text: String = text[..split].iter().collect();
        let trail_text: String = text[split..].iter().collect();

        let (after_lead, _) = buf.set_stringn(x, y, &lead_text, usize::MAX, lead);
        buf.set_string(after_lead, y, &trail_text, trail);
    }

    // Hint and clock on the right
    let clock = Local::now().format("%H:%M").to_string();
    let right = format!("{}  {} ", MENU_HINT, clock);
    let used = title_spans(tree)
        .last()
        .map(|(x, width)| x + width)
        .unwrap_or(0);
    let right_width = right.width() as u16;
    if used + right_width < area.width {
        buf.set_string(
            area.right() - right_width,
            y,
            &right,
            bar_style.add_modifier(Modifier::DIM),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;
    use termpad_theme::{color_table, ThemeKind};

    fn scene() -> (MenuTree, MenuBar, MenuState) {
        (MenuTree::standard(), MenuBar::default(), MenuState::default())
    }

    #[test]
    fn test_title_spans_are_contiguous() {
        let tree = MenuTree::standard();
        let spans = title_spans(&tree);
        assert_eq!(spans[0], (1, 6)); // " File "
        assert_eq!(spans[1].0, spans[0].0 + spans[0].1);
    }

    #[test]
    fn test_closed_bar_uses_item_colors() {
        let (mut tree, mut bar, state) = scene();
        bar.background = Color::Rgb(250, 230, 250);
        for style in tree.styles_mut() {
            style.background = Color::White;
        }

        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        render_menu_bar(&mut buf, area, &tree, &bar, &state);

        assert_eq!(buf[(0, 0)].bg, Color::Rgb(250, 230, 250));
        assert_eq!(buf[(2, 0)].symbol(), "F");
        assert_eq!(buf[(2, 0)].bg, Color::White);
    }

    #[test]
    fn test_native_paint_reverses_open_title() {
        let (tree, bar, mut state) = scene();
        state.open(&tree, 0);

        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        render_menu_bar(&mut buf, area, &tree, &bar, &state);

        assert!(buf[(2, 0)].modifier.contains(Modifier::REVERSED));
        assert!(!buf[(8, 0)].modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_renderer_paints_pressed_gradient() {
        let (tree, mut bar, mut state) = scene();
        bar.renderer = ThemeKind::Dark.menu_renderer();
        state.open(&tree, 1);

        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        render_menu_bar(&mut buf, area, &tree, &bar, &state);

        let table = color_table(ThemeKind::Dark);
        let (x, width) = title_spans(&tree)[1];
        assert_eq!(buf[(x, 0)].bg, table.pressed_gradient_begin);
        assert_eq!(buf[(x + width - 1, 0)].bg, table.pressed_gradient_end);
    }

    #[test]
    fn test_title_halves_join_without_gap() {
        let (tree, bar, state) = scene();
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        render_menu_bar(&mut buf, area, &tree, &bar, &state);

        for (menu, (x, width)) in tree.menus().iter().zip(title_spans(&tree)) {
            let drawn: String = (x..x + width).map(|col| buf[(col, 0)].symbol()).collect();
            assert_eq!(drawn, format!(" {} ", menu.label));
        }
    }
}
