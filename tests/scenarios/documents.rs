//! Menus loaded from description files.

use std::fs;
use std::rc::Rc;

use menu_mirror::{
    MenuCloner, MenuDocument, MirrorError, NodeKind, ProxyMenu, RecordingEventSink,
    StructuralError,
};
use tempfile::tempdir;

use crate::common::{nested_menu_json, FILE_MENU_TOML, VIEW_MENU_JSON};

#[test]
fn toml_document_mirrors_like_the_builder_tree() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("file.toml");
    fs::write(&path, FILE_MENU_TOML).unwrap();

    let (document, warnings) = MenuDocument::load(&path).unwrap();
    let source = document.build();
    let target = ProxyMenu::new("mirror");
    MenuCloner::new().clone_menu(&source, &target).unwrap();

    assert!(warnings.is_empty());
    assert_eq!(target.shape(), crate::common::file_menu().shape());
}

#[test]
fn json_document_reports_the_unsupported_widget() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("view.json");
    fs::write(&path, VIEW_MENU_JSON).unwrap();

    let (document, _) = MenuDocument::load(&path).unwrap();
    let source = document.build();
    let events = Rc::new(RecordingEventSink::new());
    let target = ProxyMenu::new("mirror");

    let summary = MenuCloner::new()
        .with_event_sink(events.clone())
        .clone_menu(&source, &target)
        .unwrap();

    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.groups, 1);
    assert_eq!(events.skipped_kinds(), vec!["widget"]);
    assert!(target
        .items()
        .iter()
        .all(|item| item.kind() != NodeKind::Unsupported));
    assert!(target.find_action("Small").unwrap().is_checked());
}

#[test]
fn deep_document_hits_the_depth_limit() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("deep.json");
    fs::write(&path, nested_menu_json(5)).unwrap();

    let (document, _) = MenuDocument::load(&path).unwrap();
    let target = ProxyMenu::new("mirror");

    let err = MenuCloner::new()
        .with_max_depth(4)
        .clone_menu(&document.build(), &target)
        .unwrap_err();

    assert!(matches!(
        err,
        MirrorError::Structural(StructuralError::DepthExceeded { depth: 5, limit: 4, .. })
    ));
    assert_eq!(target.item_count(), 0);
}
