//! Proxy Tree Rendering
//!
//! Dumps a mirrored menu as indented text, one node per line, with
//! check state markers and right-aligned shortcuts.

use unicode_width::UnicodeWidthStr;

use crate::domain::entities::{ProxyAction, ProxyMenu, ProxyNode};

use super::Icons;

const INDENT: &str = "  ";
const SEPARATOR_WIDTH: usize = 8;

struct Row {
    text: String,
    shortcut: Option<String>,
}

/// Text renderer for proxy menus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeRenderer {
    /// Whether to use unicode
    pub unicode: bool,
}

impl Default for TreeRenderer {
    fn default() -> Self {
        Self { unicode: true }
    }
}

impl TreeRenderer {
    pub fn new(unicode: bool) -> Self {
        Self { unicode }
    }

    pub fn render(&self, menu: &ProxyMenu) -> String {
        let icons = Icons::select(self.unicode);
        let mut rows = vec![Row {
            text: format!("{}{}", menu.title(), flags(menu.is_enabled(), menu.is_visible())),
            shortcut: None,
        }];
        collect(menu, 1, &icons, &mut rows);

        let column = rows
            .iter()
            .filter(|row| row.shortcut.is_some())
            .map(|row| row.text.width())
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        for row in rows {
            out.push_str(&row.text);
            if let Some(shortcut) = row.shortcut {
                let pad = column - row.text.width() + 2;
                out.push_str(&" ".repeat(pad));
                out.push_str(&shortcut);
            }
            out.push('\n');
        }
        out
    }
}

fn collect(menu: &ProxyMenu, depth: usize, icons: &Icons, rows: &mut Vec<Row>) {
    let indent = INDENT.repeat(depth);
    for node in menu.items() {
        match node {
            ProxyNode::Action(action) => rows.push(Row {
                text: format!("{}{}", indent, action_text(&action, icons)),
                shortcut: action.shortcut(),
            }),
            ProxyNode::Menu(submenu) => {
                rows.push(Row {
                    text: format!(
                        "{}{} {}{}",
                        indent,
                        icons.expand,
                        submenu.title(),
                        flags(submenu.is_enabled(), submenu.is_visible())
                    ),
                    shortcut: None,
                });
                collect(&submenu, depth + 1, icons, rows);
            }
            ProxyNode::Separator => rows.push(Row {
                text: format!("{}{}", indent, icons.separator.repeat(SEPARATOR_WIDTH)),
                shortcut: None,
            }),
        }
    }
}

fn action_text(action: &ProxyAction, icons: &Icons) -> String {
    let marker = if !action.is_checkable() {
        None
    } else if action.exclusive_group().is_some() {
        Some(if action.is_checked() {
            icons.radio_on
        } else {
            icons.radio_off
        })
    } else {
        Some(if action.is_checked() {
            icons.checked
        } else {
            icons.unchecked
        })
    };

    let flags = flags(action.is_enabled(), action.is_visible());
    match marker {
        Some(marker) => format!("{} {}{}", marker, action.label(), flags),
        None => format!("{}{}", action.label(), flags),
    }
}

fn flags(enabled: bool, visible: bool) -> String {
    let mut out = String::new();
    if !enabled {
        out.push_str(" (disabled)");
    }
    if !visible {
        out.push_str(" (hidden)");
    }
    out
}
