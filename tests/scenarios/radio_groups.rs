//! Radio groups rebuilt on the proxy side.

use std::rc::Rc;

use menu_mirror::{clone_menu, ActionItem, GroupRegistry, ProxyMenu, SubMenu};

use crate::common::grouped_menu;

#[test]
fn shared_key_across_levels_yields_one_group() {
    let menu = grouped_menu();
    let target = ProxyMenu::new("mirror");

    let summary = clone_menu(&menu.root, &target).unwrap();

    let small = target.find_action("Small").unwrap();
    let large = target.find_action("Large").unwrap();
    let other = target.find_action("Other").unwrap();
    let g1 = small.exclusive_group().unwrap();

    assert!(Rc::ptr_eq(&g1, &large.exclusive_group().unwrap()));
    assert!(!Rc::ptr_eq(&g1, &other.exclusive_group().unwrap()));
    assert_eq!(g1.len(), 2);
    assert_eq!(summary.groups, 2);
    assert_eq!(summary.skipped, 1);
    assert_eq!(target.groups().len(), 2);
}

#[test]
fn checking_another_source_member_moves_the_proxy_selection() {
    let menu = grouped_menu();
    let target = ProxyMenu::new("mirror");
    clone_menu(&menu.root, &target).unwrap();

    menu.small.set_checked(true);
    menu.large.set_checked(true);

    let g1 = target.find_action("Small").unwrap().exclusive_group().unwrap();
    assert_eq!(g1.checked_member().unwrap().label(), "Large");
    assert!(!target.find_action("Small").unwrap().is_checked());
}

#[test]
fn groups_are_independent() {
    let menu = grouped_menu();
    let target = ProxyMenu::new("mirror");
    clone_menu(&menu.root, &target).unwrap();

    menu.small.set_checked(true);
    menu.other.set_checked(true);

    assert!(target.find_action("Small").unwrap().is_checked());
    assert!(target.find_action("Other").unwrap().is_checked());
}

#[test]
fn activating_a_proxy_member_selects_it() {
    let menu = grouped_menu();
    let target = ProxyMenu::new("mirror");
    clone_menu(&menu.root, &target).unwrap();
    menu.small.set_checked(true);

    target.find_action("Large").unwrap().activate();

    assert!(menu.large.is_checked());
    assert!(target.find_action("Large").unwrap().is_checked());
    assert!(!target.find_action("Small").unwrap().is_checked());
}

#[test]
fn clicking_back_to_an_earlier_choice_reselects_it() {
    let groups = GroupRegistry::new();
    let root = SubMenu::new("View");
    let a = root.add_action(
        ActionItem::new("a")
            .in_group(&groups.group("G"))
            .with_checked(true),
    );
    let b = root.add_action(ActionItem::new("b").in_group(&groups.group("G")));
    let target = ProxyMenu::new("mirror");
    clone_menu(&root, &target).unwrap();
    let proxy_a = target.find_action("a").unwrap();
    let proxy_b = target.find_action("b").unwrap();

    proxy_b.activate();
    assert!(!a.is_checked());
    assert!(b.is_checked());
    assert!(!proxy_a.is_checked());
    assert!(proxy_b.is_checked());

    proxy_a.activate();
    assert!(a.is_checked());
    assert!(!b.is_checked());
    assert!(proxy_a.is_checked());
    assert!(!proxy_b.is_checked());
}

#[test]
fn later_checked_source_member_holds_the_selection_after_clone() {
    let groups = GroupRegistry::new();
    let root = SubMenu::new("View");
    root.add_action(
        ActionItem::new("a")
            .in_group(&groups.group("G"))
            .with_checked(true),
    );
    root.add_action(
        ActionItem::new("b")
            .in_group(&groups.group("G"))
            .with_checked(true),
    );
    let target = ProxyMenu::new("mirror");

    clone_menu(&root, &target).unwrap();

    let group = target.find_action("a").unwrap().exclusive_group().unwrap();
    assert_eq!(group.checked_member().unwrap().label(), "b");
    assert!(!target.find_action("a").unwrap().is_checked());
}

#[test]
fn groups_belong_to_the_target_root() {
    let menu = grouped_menu();
    let target = ProxyMenu::new("mirror");
    clone_menu(&menu.root, &target).unwrap();

    let more = target.find_menu("More").unwrap();
    assert!(more.groups().is_empty());

    let keys: Vec<_> = target
        .groups()
        .iter()
        .map(|g| g.key().as_str().to_string())
        .collect();
    assert_eq!(keys, vec!["G1", "G2"]);
}
