//! A File menu with a nested Recent submenu.

use std::cell::Cell;
use std::rc::Rc;

use menu_mirror::{clone_menu, IconRef, NodeKind, ProxyMenu, ProxyNode, SourceNode};

use crate::common::file_menu;

#[test]
fn mirror_matches_kinds_and_labels() {
    let source = file_menu();
    let target = ProxyMenu::new("mirror");

    clone_menu(&source, &target).unwrap();

    let kinds: Vec<_> = target.items().iter().map(ProxyNode::kind).collect();
    assert_eq!(kinds, vec![NodeKind::Action, NodeKind::Separator, NodeKind::Menu]);

    let recent = target.find_menu("Recent").unwrap();
    let labels: Vec<_> = recent.items().iter().filter_map(ProxyNode::label).collect();
    assert_eq!(labels, vec!["a.txt", "b.txt"]);
    assert!(!recent.find_action("b.txt").unwrap().is_enabled());
    assert_eq!(
        target.find_action("Open").unwrap().shortcut().as_deref(),
        Some("Ctrl+O")
    );
}

#[test]
fn every_bound_attribute_follows_the_source() {
    let source = file_menu();
    let target = ProxyMenu::new("mirror");
    clone_menu(&source, &target).unwrap();

    let SourceNode::Action(open) = &source.children()[0] else {
        panic!("first child should be an action");
    };
    let proxy = target.find_action("Open").unwrap();

    open.set_label("Open…");
    open.set_shortcut(Some("Ctrl+Shift+O".into()));
    open.set_icon(Some(IconRef::new("document-open")));
    open.set_checkable(true);
    open.set_checked(true);
    open.set_visible(false);

    assert_eq!(proxy.label(), "Open…");
    assert_eq!(proxy.shortcut().as_deref(), Some("Ctrl+Shift+O"));
    assert_eq!(proxy.icon(), Some(IconRef::new("document-open")));
    assert!(proxy.is_checkable());
    assert!(proxy.is_checked());
    assert!(!proxy.is_visible());
}

#[test]
fn proxy_changes_never_reach_the_source() {
    let source = file_menu();
    let target = ProxyMenu::new("mirror");
    clone_menu(&source, &target).unwrap();

    let SourceNode::Action(open) = &source.children()[0] else {
        panic!("first child should be an action");
    };
    let proxy = target.find_action("Open").unwrap();

    proxy.set_label("Changed");
    proxy.set_enabled(false);

    assert_eq!(open.label(), "Open");
    assert!(open.is_enabled());

    // The binding stays live after a local proxy write
    open.set_label("Open again");
    assert_eq!(proxy.label(), "Open again");
}

#[test]
fn activating_nested_proxy_triggers_source_once() {
    let source = file_menu();
    let SourceNode::Menu(recent) = &source.children()[2] else {
        panic!("third child should be a submenu");
    };
    let SourceNode::Action(a_txt) = &recent.children()[0] else {
        panic!("first recent entry should be an action");
    };
    let hits = Rc::new(Cell::new(0));
    let _sub = {
        let hits = Rc::clone(&hits);
        a_txt.on_triggered(move || hits.set(hits.get() + 1))
    };
    let target = ProxyMenu::new("mirror");
    clone_menu(&source, &target).unwrap();

    target.find_action("a.txt").unwrap().activate();

    assert_eq!(hits.get(), 1);
}

#[test]
fn disabled_source_ignores_forwarded_activation() {
    let source = file_menu();
    let SourceNode::Menu(recent) = &source.children()[2] else {
        panic!("third child should be a submenu");
    };
    let SourceNode::Action(b_txt) = &recent.children()[1] else {
        panic!("second recent entry should be an action");
    };
    let hits = Rc::new(Cell::new(0));
    let _sub = {
        let hits = Rc::clone(&hits);
        b_txt.on_triggered(move || hits.set(hits.get() + 1))
    };
    let target = ProxyMenu::new("mirror");
    clone_menu(&source, &target).unwrap();

    target.find_action("b.txt").unwrap().activate();

    assert_eq!(hits.get(), 0);
}

#[test]
fn dropping_the_source_detaches_the_proxy() {
    let target = ProxyMenu::new("mirror");
    {
        let source = file_menu();
        clone_menu(&source, &target).unwrap();
    }

    let proxy = target.find_action("Open").unwrap();
    assert!(proxy.source().is_none());

    // Activation with a dead source is a no-op
    proxy.activate();
    assert_eq!(proxy.label(), "Open");
}
