//! Menu tree and keyboard navigation state.

use ratatui::style::Color;
use termpad_theme::{MenuItemHandle, ThemeKind, UiHandle};

/// External profile links under About → Contact me..
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactLink {
    Facebook,
    GitHub,
}

/// Action behind a leaf menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    NewFile,
    NewWindow,
    Open,
    Save,
    Restart,
    Exit,
    FontAndColor,
    ApplyTheme(ThemeKind),
    ManualConfiguration,
    Contact(ContactLink),
}

/// Colors of a single menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemStyle {
    pub background: Color,
    pub foreground: Color,
}

impl Default for ItemStyle {
    fn default() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::Reset,
        }
    }
}

impl UiHandle for ItemStyle {}

impl MenuItemHandle for ItemStyle {
    fn background(&self) -> Color {
        self.background
    }

    fn foreground(&self) -> Color {
        self.foreground
    }

    fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    fn set_foreground(&mut self, color: Color) {
        self.foreground = color;
    }
}

/// A top-level menu or a dropdown entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub id: &'static str,
    pub label: &'static str,
    /// Keyboard shortcut shown next to the label
    pub shortcut: Option<&'static str>,
    /// `None` for items that only open a submenu
    pub command: Option<MenuCommand>,
    pub style: ItemStyle,
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    fn leaf(id: &'static str, label: &'static str, command: MenuCommand) -> Self {
        Self {
            id,
            label,
            shortcut: None,
            command: Some(command),
            style: ItemStyle::default(),
            children: Vec::new(),
        }
    }

    fn submenu(id: &'static str, label: &'static str, children: Vec<MenuItem>) -> Self {
        Self {
            id,
            label,
            shortcut: None,
            command: None,
            style: ItemStyle::default(),
            children,
        }
    }

    fn with_shortcut(mut self, shortcut: &'static str) -> Self {
        self.shortcut = Some(shortcut);
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// The whole menu structure, top-level menus first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTree {
    menus: Vec<MenuItem>,
}

impl MenuTree {
    pub fn new(menus: Vec<MenuItem>) -> Self {
        Self { menus }
    }

    /// File, Options and About menus.
    pub fn standard() -> Self {
        use MenuCommand::*;

        let file = MenuItem::submenu(
            "file",
            "File",
            vec![
                MenuItem::leaf("file.new", "New File", NewFile).with_shortcut("Ctrl+N"),
                MenuItem::leaf("file.new_window", "New Window", NewWindow),
                MenuItem::leaf("file.open", "Open", Open).with_shortcut("Ctrl+O"),
                MenuItem::leaf("file.save", "Save", Save).with_shortcut("Ctrl+S"),
                MenuItem::leaf("file.restart", "Restart", Restart),
                MenuItem::leaf("file.exit", "Exit", Exit).with_shortcut("Ctrl+Q"),
            ],
        );

        let theme = MenuItem::submenu(
            "options.appearance.theme",
            "Theme",
            ThemeKind::ALL
                .iter()
                .map(|&kind| {
                    let id = match kind {
                        ThemeKind::Light => "options.appearance.theme.classic",
                        ThemeKind::Dark => "options.appearance.theme.dark",
                    };
                    MenuItem::leaf(id, kind.label(), ApplyTheme(kind))
                })
                .collect(),
        );

        let options = MenuItem::submenu(
            "options",
            "Options",
            vec![
                MenuItem::leaf("options.font", "Font and color", FontAndColor),
                MenuItem::submenu(
                    "options.appearance",
                    "Appearance",
                    vec![
                        theme,
                        MenuItem::leaf(
                            "options.appearance.manual",
                            "Manual Configuration",
                            ManualConfiguration,
                        ),
                    ],
                ),
            ],
        );

        let about = MenuItem::submenu(
            "about",
            "About",
            vec![MenuItem::submenu(
                "about.contact",
                "Contact me..",
                vec![
                    MenuItem::leaf(
                        "about.contact.facebook",
                        "Facebook",
                        Contact(ContactLink::Facebook),
                    ),
                    MenuItem::leaf(
                        "about.contact.github",
                        "GitHub",
                        Contact(ContactLink::GitHub),
                    ),
                ],
            )],
        );

        Self::new(vec![file, options, about])
    }

    /// Top-level menus.
    pub fn menus(&self) -> &[MenuItem] {
        &self.menus
    }

    /// Every item, depth-first, top-level menus included.
    pub fn items(&self) -> Vec<&MenuItem> {
        fn walk<'a>(items: &'a [MenuItem], out: &mut Vec<&'a MenuItem>) {
            for item in items {
                out.push(item);
                walk(&item.children, out);
            }
        }

        let mut out = Vec::new();
        walk(&self.menus, &mut out);
        out
    }

    /// Styles of every item in the same order as [`Self::items`].
    pub fn styles_mut(&mut self) -> Vec<&mut ItemStyle> {
        fn walk<'a>(items: &'a mut [MenuItem], out: &mut Vec<&'a mut ItemStyle>) {
            for item in items {
                let MenuItem {
                    style, children, ..
                } = item;
                out.push(style);
                walk(children, out);
            }
        }

        let mut out = Vec::new();
        walk(&mut self.menus, &mut out);
        out
    }

    /// Item at `path`: the first index picks a top-level menu, each further
    /// index a child.
    pub fn node(&self, path: &[usize]) -> Option<&MenuItem> {
        let (first, rest) = path.split_first()?;
        let mut item = self.menus.get(*first)?;
        for &index in rest {
            item = item.children.get(index)?;
        }
        Some(item)
    }

    pub fn find(&self, id: &str) -> Option<&MenuItem> {
        self.items().into_iter().find(|item| item.id == id)
    }
}

/// Keyboard navigation through the menu tree.
///
/// While open, `path[0]` is the highlighted top-level menu and each further
/// element the highlighted entry of one open dropdown level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuState {
    path: Vec<usize>,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        !self.path.is_empty()
    }

    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Open the dropdown of top-level menu `index`.
    pub fn open(&mut self, tree: &MenuTree, index: usize) {
        self.path.clear();
        if let Some(menu) = tree.menus().get(index) {
            self.path.push(index);
            if menu.has_children() {
                self.path.push(0);
            }
        }
    }

    pub fn close(&mut self) {
        self.path.clear();
    }

    pub fn toggle(&mut self, tree: &MenuTree) {
        if self.is_open() {
            self.close();
        } else {
            self.open(tree, 0);
        }
    }

    /// Highlighted entry of the deepest open dropdown.
    pub fn selected<'a>(&self, tree: &'a MenuTree) -> Option<&'a MenuItem> {
        if self.path.len() < 2 {
            return None;
        }
        tree.node(&self.path)
    }

    fn sibling_count(&self, tree: &MenuTree) -> usize {
        match self.path.len() {
            0 => 0,
            1 => tree.menus().len(),
            n => tree
                .node(&self.path[..n - 1])
                .map(|parent| parent.children.len())
                .unwrap_or(0),
        }
    }

    pub fn move_down(&mut self, tree: &MenuTree) {
        let count = self.sibling_count(tree);
        if let Some(last) = self.path.last_mut() {
            if count > 0 {
                *last = (*last + 1) % count;
            }
        }
    }

    pub fn move_up(&mut self, tree: &MenuTree) {
        let count = self.sibling_count(tree);
        if let Some(last) = self.path.last_mut() {
            if count > 0 {
                *last = (*last + count - 1) % count;
            }
        }
    }

    /// Next top-level menu, wrapping.
    pub fn next_menu(&mut self, tree: &MenuTree) {
        let count = tree.menus().len();
        if let Some(&top) = self.path.first() {
            if count > 0 {
                self.open(tree, (top + 1) % count);
            }
        }
    }

    /// Previous top-level menu, wrapping.
    pub fn prev_menu(&mut self, tree: &MenuTree) {
        let count = tree.menus().len();
        if let Some(&top) = self.path.first() {
            if count > 0 {
                self.open(tree, (top + count - 1) % count);
            }
        }
    }

    /// Enter the highlighted entry.
    ///
    /// Opens its submenu, or closes the menu and returns its command.
    pub fn activate(&mut self, tree: &MenuTree) -> Option<MenuCommand> {
        let item = self.selected(tree)?;
        if item.has_children() {
            self.path.push(0);
            None
        } else {
            let command = item.command;
            self.close();
            command
        }
    }

    /// Right arrow: open a submenu, else move to the next top-level menu.
    pub fn expand(&mut self, tree: &MenuTree) {
        match self.selected(tree) {
            Some(item) if item.has_children() => self.path.push(0),
            _ => self.next_menu(tree),
        }
    }

    /// Left arrow: close one submenu level, else move to the previous
    /// top-level menu.
    pub fn collapse(&mut self, tree: &MenuTree) {
        if self.path.len() > 2 {
            self.path.pop();
        } else {
            self.prev_menu(tree);
        }
    }

    /// Esc: close one submenu level, or the whole menu from the first level.
    pub fn back(&mut self) {
        if self.path.len() > 2 {
            self.path.pop();
        } else {
            self.close();
        }
    }
}
