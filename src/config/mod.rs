//! Configuration module for menu-mirror
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (MENU_MIRROR_*)
//! 3. Project config (./menu-mirror.toml)
//! 4. User config (~/.config/menu-mirror/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{apply_env_overrides, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{CloneConfig, MirrorConfig, OutputConfig};
