//! Dropdown lists of the menu bar, nested submenus included.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

use termpad_core::{MenuBar, MenuItem, MenuState, MenuTree};
use termpad_theme::{painter, MenuPaint};

use crate::menu::title_spans;

/// Icon gutter columns on the left of every row.
const GUTTER: u16 = 3;
const SUBMENU_ARROW: &str = "▶";

/// One dropdown list
pub struct Dropdown<'a> {
    items: &'a [MenuItem],
    selected: Option<usize>,
    x: u16,
    y: u16,
    paint: &'a dyn MenuPaint,
}

impl<'a> Dropdown<'a> {
    pub fn new(
        items: &'a [MenuItem],
        selected: Option<usize>,
        x: u16,
        y: u16,
        paint: &'a dyn MenuPaint,
    ) -> Self {
        Self {
            items,
            selected,
            x,
            y,
            paint,
        }
    }

    fn right_column(item: &MenuItem) -> &str {
        if item.has_children() {
            SUBMENU_ARROW
        } else {
            item.shortcut.unwrap_or("")
        }
    }

    /// Screen area, shifted to stay inside `screen`.
    pub fn area(&self, screen: Rect) -> Rect {
        let label_width = self
            .items
            .iter()
            .map(|item| item.label.width())
            .max()
            .unwrap_or(0) as u16;
        let right_width = self
            .items
            .iter()
            .map(|item| Self::right_column(item).width())
            .max()
            .unwrap_or(0) as u16;

        // Borders, gutter, spaces around label and right column
        let width = (2 + GUTTER + 1 + label_width + 2 + right_width + 1).min(screen.width);
        let height = (self.items.len() as u16 + 2).min(screen.height);

        let x = self.x.min(screen.right().saturating_sub(width));
        let y = self.y.min(screen.bottom().saturating_sub(height));
        Rect::new(x, y, width, height)
    }

    /// Draw the list and return its area.
    pub fn render(&self, buf: &mut Buffer, screen: Rect) -> Rect {
        let area = self.area(screen);
        if self.items.is_empty() || area.width < 2 + GUTTER || area.height < 3 {
            return area;
        }

        Clear.render(area, buf);

        let list_style = item_style(&self.items[0]);
        self.render_border(buf, area, self.paint.border(list_style));

        let inner_width = area.width - 2;
        for (row, item) in self.items.iter().enumerate() {
            let y = area.y + 1 + row as u16;
            if y >= area.bottom() - 1 {
                break;
            }
            let selected = self.selected == Some(row);
            self.render_row(buf, area.x + 1, y, inner_width, item, selected);
        }

        area
    }

    fn render_border(&self, buf: &mut Buffer, area: Rect, style: Style) {
        let right = area.right() - 1;
        let bottom = area.bottom() - 1;
        for x in area.x + 1..right {
            buf[(x, area.y)].set_symbol("─").set_style(style);
            buf[(x, bottom)].set_symbol("─").set_style(style);
        }
        for y in area.y + 1..bottom {
            buf[(area.x, y)].set_symbol("│").set_style(style);
            buf[(right, y)].set_symbol("│").set_style(style);
        }
        buf[(area.x, area.y)].set_symbol("┌").set_style(style);
        buf[(right, area.y)].set_symbol("┐").set_style(style);
        buf[(area.x, bottom)].set_symbol("└").set_style(style);
        buf[(right, bottom)].set_symbol("┘").set_style(style);
    }

    fn render_row(
        &self,
        buf: &mut Buffer,
        x: u16,
        y: u16,
        width: u16,
        item: &MenuItem,
        selected: bool,
    ) {
        let base = item_style(item);
        let fill = self.paint.dropdown_fill(base);

        for (offset, style) in self.paint.gutter(base).into_iter().enumerate() {
            buf[(x + offset as u16, y)].set_symbol(" ").set_style(style);
        }

        let text_x = x + GUTTER;
        let text_width = width.saturating_sub(GUTTER);
        let row_style = if selected {
            self.paint.selected_item(fill)
        } else {
            fill
        };

        let right = Self::right_column(item);
        let label_room = (text_width as usize).saturating_sub(right.width() + 2);
        let mut line = format!(" {:<room$}", item.label, room = label_room);
        line.push_str(right);
        line.push(' ');
        let room = text_width as usize;
        buf.set_stringn(text_x, y, " ".repeat(room), room, row_style);
        buf.set_stringn(text_x, y, &line, room, row_style);

        if selected && text_width >= 2 {
            let marker = self.paint.item_marker(fill);
            buf[(text_x, y)].set_symbol("▏").set_style(marker);
            buf[(text_x + text_width - 1, y)].set_symbol("▕").set_style(marker);
        }
    }
}

fn item_style(item: &MenuItem) -> Style {
    Style::default()
        .bg(item.style.background)
        .fg(item.style.foreground)
}

/// Draw every dropdown level opened by `state`, each nested list to the
/// right of its parent row.
pub fn render_open_dropdowns(
    buf: &mut Buffer,
    screen: Rect,
    tree: &MenuTree,
    bar: &MenuBar,
    state: &MenuState,
) {
    let path = state.path();
    let Some(&top) = path.first() else {
        return;
    };
    let Some(&(title_x, _)) = title_spans(tree).get(top) else {
        return;
    };

    let paint = painter(bar.renderer.as_ref());
    let mut x = screen.x + title_x;
    let mut y = screen.y + 1;

    for depth in 1..path.len() {
        let Some(parent) = tree.node(&path[..depth]) else {
            return;
        };
        let selected = path[depth];
        let area =
            Dropdown::new(&parent.children, Some(selected), x, y, paint).render(buf, screen);

        // Next level opens beside the highlighted row
        x = area.right();
        y = area.y + selected as u16;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Color, Modifier};
    use termpad_theme::{color_table, ThemeKind};

    fn screen() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_file_dropdown_lists_items_with_shortcuts() {
        let tree = MenuTree::standard();
        let bar = MenuBar::default();
        let mut state = MenuState::default();
        state.open(&tree, 0);

        let mut buf = Buffer::empty(screen());
        render_open_dropdowns(&mut buf, screen(), &tree, &bar, &state);

        assert!(row_text(&buf, 2).contains("New File"));
        assert!(row_text(&buf, 2).contains("Ctrl+N"));
        assert!(row_text(&buf, 7).contains("Exit"));
    }

    #[test]
    fn test_nested_levels_open_to_the_right() {
        let tree = MenuTree::standard();
        let bar = MenuBar::default();
        let mut state = MenuState::default();
        state.open(&tree, 1);
        state.move_down(&tree);
        state.expand(&tree); // Appearance
        state.expand(&tree); // Theme

        let mut buf = Buffer::empty(screen());
        render_open_dropdowns(&mut buf, screen(), &tree, &bar, &state);

        let row = row_text(&buf, 3);
        let appearance = row.find("Appearance").unwrap();
        let theme = row.find("Theme").unwrap();
        let classic = row.find("classic").unwrap();
        assert!(appearance < theme && theme < classic);
        assert!(row_text(&buf, 4).contains("dark"));
    }

    #[test]
    fn test_renderer_colors_gutter_and_selection() {
        let tree = MenuTree::standard();
        let bar = MenuBar {
            renderer: ThemeKind::Dark.menu_renderer(),
            ..MenuBar::default()
        };
        let mut state = MenuState::default();
        state.open(&tree, 0);

        let mut buf = Buffer::empty(screen());
        render_open_dropdowns(&mut buf, screen(), &tree, &bar, &state);

        let table = color_table(ThemeKind::Dark);
        let x = title_spans(&tree)[0].0;
        assert_eq!(buf[(x, 1)].fg, table.menu_border);
        assert_eq!(buf[(x + 1, 2)].bg, table.margin_gradient_begin);
        assert_eq!(buf[(x + 3, 2)].bg, table.margin_gradient_end);
        assert_eq!(buf[(x + 4, 2)].fg, table.item_border);
        assert_eq!(buf[(x + 5, 2)].bg, table.selected_item_background);
        assert_eq!(buf[(x + 5, 3)].bg, table.dropdown_background);
    }

    #[test]
    fn test_native_selection_is_reversed() {
        let tree = MenuTree::standard();
        let bar = MenuBar::default();
        let mut state = MenuState::default();
        state.open(&tree, 0);

        let mut buf = Buffer::empty(screen());
        render_open_dropdowns(&mut buf, screen(), &tree, &bar, &state);

        let x = title_spans(&tree)[0].0;
        assert!(buf[(x + 5, 2)].modifier.contains(Modifier::REVERSED));
        assert_eq!(buf[(x + 5, 3)].bg, Color::Reset);
    }

    #[test]
    fn test_dropdown_is_kept_on_screen() {
        let items = MenuTree::standard().menus()[0].children.clone();
        let paint = painter(None);
        let area = Dropdown::new(&items, None, 78, 20, paint).area(screen());
        assert!(area.right() <= 80);
        assert!(area.bottom() <= 24);
    }
}
