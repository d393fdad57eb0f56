//! Configuration layering as seen from the CLI

use crate::common::{nested_menu_json, TestEnv};

#[test]
fn project_config_sets_depth_limit() {
    let env = TestEnv::new();
    env.write("menu-mirror.toml", "[clone]\nmax_depth = 1\n");
    env.write("deep.json", &nested_menu_json(2));

    let result = env.run(&["check", "deep.json"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("exceeds limit 1"));
}

#[test]
fn cli_flag_beats_project_config() {
    let env = TestEnv::new();
    env.write("menu-mirror.toml", "[clone]\nmax_depth = 1\n");
    env.write("deep.json", &nested_menu_json(2));

    let result = env.run(&["check", "deep.json", "--max-depth", "5"]);

    assert!(result.success, "{}", result.combined_output());
}

#[test]
fn environment_beats_project_config() {
    let env = TestEnv::new();
    env.write("menu-mirror.toml", "[output]\nascii = false\n");
    env.write("deep.json", &nested_menu_json(1));

    let result = env.run_with_env(&["check", "deep.json"], &[("MENU_MIRROR_ASCII", "1")]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.starts_with("[OK]"));
}

#[test]
fn unknown_config_keys_are_reported() {
    let env = TestEnv::new();
    env.write("menu-mirror.toml", "[clone]\nmax_dept = 3\n");
    env.write("deep.json", &nested_menu_json(1));

    let result = env.run(&["check", "deep.json"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stderr.contains("unknown config key 'max_dept'"));
    assert!(result.stderr.contains("did you mean 'max_depth'?"));
}
