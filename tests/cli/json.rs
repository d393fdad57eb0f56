//! `--json` NDJSON output

use crate::common::{nested_menu_json, TestEnv, FILE_MENU_TOML, VIEW_MENU_JSON};

#[test]
fn check_json_brackets_events() {
    let env = TestEnv::new();
    env.write("view.json", VIEW_MENU_JSON);

    let result = env.run(&["check", "view.json", "--json"]);

    assert!(result.success, "{}", result.combined_output());
    let events = result.json_events();
    assert_eq!(events.first().unwrap()["event"], "start");
    assert_eq!(events.first().unwrap()["menu"], "View");
    assert!(events
        .iter()
        .any(|e| e["event"] == "node_skipped" && e["kind"] == "widget"));
    assert!(events
        .iter()
        .any(|e| e["event"] == "group_rebuilt" && e["key"] == "size" && e["members"] == 2));

    let last = events.last().unwrap();
    assert_eq!(last["event"], "complete");
    assert_eq!(last["status"], "success");
    assert_eq!(last["summary"]["skipped"], 1);
}

#[test]
fn show_json_emits_the_tree_shape() {
    let env = TestEnv::new();
    env.write("file.toml", FILE_MENU_TOML);

    let result = env.run(&["show", "file.toml", "--json"]);

    assert!(result.success, "{}", result.combined_output());
    let events = result.json_events();
    let tree = events.iter().find(|e| e["event"] == "tree").unwrap();
    assert_eq!(tree["items"][0]["label"], "Open");
    assert_eq!(tree["items"][1]["kind"], "separator");
    assert_eq!(tree["items"][2]["children"][1]["label"], "b.txt");
}

#[test]
fn check_json_reports_structural_errors() {
    let env = TestEnv::new();
    env.write("deep.json", &nested_menu_json(4));

    let result = env.run(&["check", "deep.json", "--json", "--max-depth", "1"]);

    assert_eq!(result.exit_code, 1);
    let events = result.json_events();
    let last = events.last().unwrap();
    assert_eq!(last["status"], "error");
    assert!(last["error"]
        .as_str()
        .unwrap()
        .contains("exceeds limit 1"));
}
