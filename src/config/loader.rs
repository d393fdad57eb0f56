//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{MirrorError, MirrorResult};

use super::types::MirrorConfig;

/// Project-level config file name, looked up in the project root
pub const PROJECT_CONFIG_FILE: &str = "menu-mirror.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> MirrorResult<(MirrorConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: MirrorConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| MirrorError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> (MirrorConfig, Vec<ConfigWarning>) {
    let project_config = project_root.map(|root| root.join(PROJECT_CONFIG_FILE));
    let user_config = dirs::config_dir().map(|dir| dir.join("menu-mirror/config.toml"));

    for candidate in project_config.into_iter().chain(user_config) {
        if !candidate.exists() {
            continue;
        }
        match load_with_warnings(&candidate) {
            Ok((config, warnings)) => {
                debug!(path = %candidate.display(), "loaded config");
                return (config.with_env_overrides(), warnings);
            }
            Err(e) => {
                warn!(path = %candidate.display(), error = %e, "ignoring unreadable config");
            }
        }
    }

    (MirrorConfig::default().with_env_overrides(), Vec::new())
}

/// Apply MENU_MIRROR_* overrides, reading variables through `lookup`
pub fn apply_env_overrides<F>(mut config: MirrorConfig, lookup: F) -> MirrorConfig
where
    F: Fn(&str) -> Option<String>,
{
    // MENU_MIRROR_MAX_DEPTH
    if let Some(depth) = lookup("MENU_MIRROR_MAX_DEPTH") {
        match depth.trim().parse::<usize>() {
            Ok(depth) => config.clone.max_depth = depth,
            Err(_) => warn!(value = %depth, "MENU_MIRROR_MAX_DEPTH is not a number, ignored"),
        }
    }

    // MENU_MIRROR_REPORT_UNSUPPORTED
    if let Some(val) = lookup("MENU_MIRROR_REPORT_UNSUPPORTED") {
        config.clone.report_unsupported = parse_flag(&val);
    }

    // MENU_MIRROR_ASCII
    if let Some(val) = lookup("MENU_MIRROR_ASCII") {
        config.output.ascii = parse_flag(&val);
    }

    config
}

fn parse_flag(val: &str) -> bool {
    val.to_lowercase() != "false" && val != "0"
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["clone", "max_depth", "report_unsupported", "output", "ascii"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
