//! `menu-mirror check`

use crate::common::{nested_menu_json, TestEnv, FILE_MENU_TOML, VIEW_MENU_JSON};

#[test]
fn check_summarises_a_clean_menu() {
    let env = TestEnv::new();
    env.write("file.toml", FILE_MENU_TOML);

    let result = env.run(&["check", "file.toml"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(
        result.stdout,
        "✓ Mirrored 'File': 3 actions, 1 submenu, 1 separator, 0 groups\n"
    );
}

#[test]
fn check_mentions_skipped_nodes() {
    let env = TestEnv::new();
    env.write("view.json", VIEW_MENU_JSON);

    let result = env.run(&["check", "view.json", "--ascii"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("[OK] Mirrored 'View': 3 actions, 1 submenu, 0 separators, 1 group"));
    assert!(result.stdout.contains("[WARN] Skipped 1 unsupported node"));
}

#[test]
fn check_fails_on_excessive_depth() {
    let env = TestEnv::new();
    env.write("deep.json", &nested_menu_json(3));

    let result = env.run(&["check", "deep.json", "--max-depth", "2"]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("menu nesting depth 3 exceeds limit 2"),
        "stderr: {}",
        result.stderr
    );
}

#[test]
fn check_accepts_depth_at_the_limit() {
    let env = TestEnv::new();
    env.write("deep.json", &nested_menu_json(3));

    let result = env.run(&["check", "deep.json", "--max-depth", "3"]);

    assert!(result.success, "{}", result.combined_output());
}
