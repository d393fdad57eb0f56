//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::services::{MenuCloner, DEFAULT_MAX_DEPTH};
use crate::error::MirrorResult;

use super::loader::{self, ConfigWarning};

/// Clone behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloneConfig {
    /// Deepest allowed submenu nesting below the root
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Log and report source nodes of unsupported kinds
    #[serde(default = "default_true")]
    pub report_unsupported: bool,
}

impl Default for CloneConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            report_unsupported: true,
        }
    }
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_true() -> bool {
    true
}

/// Text output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Use ASCII markers instead of Unicode glyphs
    #[serde(default)]
    pub ascii: bool,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorConfig {
    #[serde(default)]
    pub clone: CloneConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl MirrorConfig {
    /// Load configuration from TOML file
    pub fn load(path: &Path) -> MirrorResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> MirrorResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults, then apply
    /// environment overrides
    pub fn load_or_default(project_root: Option<&Path>) -> (Self, Vec<ConfigWarning>) {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (MENU_MIRROR_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::apply_env_overrides(self, |key| std::env::var(key).ok())
    }

    /// A cloner configured from the `[clone]` section
    pub fn cloner(&self) -> MenuCloner {
        MenuCloner::new()
            .with_max_depth(self.clone.max_depth)
            .with_report_unsupported(self.clone.report_unsupported)
    }
}
