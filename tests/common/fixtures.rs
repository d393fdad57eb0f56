//! Test fixtures - reusable menus for tests.

use std::rc::Rc;

use menu_mirror::{ActionItem, GroupRegistry, SourceNode, SubMenu};

/// File menu with an action, a separator and a nested submenu
pub const FILE_MENU_TOML: &str = r#"
title = "File"

[[items]]
kind = "action"
label = "Open"
shortcut = "Ctrl+O"

[[items]]
kind = "separator"

[[items]]
kind = "menu"
title = "Recent"

[[items.items]]
kind = "action"
label = "a.txt"

[[items.items]]
kind = "action"
label = "b.txt"
enabled = false
"#;

/// View menu whose radio group spans two nesting levels
pub const VIEW_MENU_JSON: &str = r#"{
  "title": "View",
  "items": [
    { "kind": "action", "label": "Small", "group": "size", "checked": true },
    { "kind": "action", "label": "Wrap", "checkable": true },
    { "kind": "widget" },
    { "kind": "menu", "title": "More", "items": [
      { "kind": "action", "label": "Large", "group": "size", "shortcut": "Ctrl+L" }
    ] }
  ]
}"#;

/// JSON document with a chain of `depth` nested submenus
pub fn nested_menu_json(depth: usize) -> String {
    let mut inner = String::from(r#"{ "kind": "action", "label": "leaf" }"#);
    for level in (1..=depth).rev() {
        inner = format!(r#"{{ "kind": "menu", "title": "d{level}", "items": [ {inner} ] }}"#);
    }
    format!(r#"{{ "title": "root", "items": [ {inner} ] }}"#)
}

/// In-memory equivalent of `FILE_MENU_TOML`
pub fn file_menu() -> SubMenu {
    let root = SubMenu::new("File");
    root.add_action(ActionItem::new("Open").with_shortcut("Ctrl+O"));
    root.add_separator();
    let recent = root.add_menu(SubMenu::new("Recent"));
    recent.add_action(ActionItem::new("a.txt"));
    recent.add_action(ActionItem::new("b.txt").with_enabled(false));
    root
}

/// Root holding two group-`G1` items at different depths and one `G2` item
pub struct GroupedMenu {
    pub root: SubMenu,
    pub small: Rc<ActionItem>,
    pub large: Rc<ActionItem>,
    pub other: Rc<ActionItem>,
}

pub fn grouped_menu() -> GroupedMenu {
    let groups = GroupRegistry::new();
    let root = SubMenu::new("View");
    let small = root.add_action(ActionItem::new("Small").in_group(&groups.group("G1")));
    let more = root.add_menu(SubMenu::new("More"));
    let large = more.add_action(ActionItem::new("Large").in_group(&groups.group("G1")));
    let other = root.add_action(ActionItem::new("Other").in_group(&groups.group("G2")));
    root.push(SourceNode::unsupported("widget"));
    GroupedMenu {
        root,
        small,
        large,
        other,
    }
}
