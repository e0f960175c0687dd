//! Default values for git-mirrors configuration.
//!
//! This module provides centralized default values used by the CLI and the
//! configuration loader, ensuring consistency and avoiding duplication.

use std::path::PathBuf;

/// Name of the INI section that holds the mirror settings.
pub const CONFIG_SECTION: &str = "git_mirrors";

/// File name of the configuration file inside the home directory.
pub const CONFIG_FILE_NAME: &str = "git_mirrors.ini";

/// Default synchronization period: once per day.
pub const DEFAULT_PERIOD_MINUTES: u64 = 24 * 60;

/// Returns the default configuration file path.
///
/// Resolves to `~/git_mirrors.ini`. Falls back to `git_mirrors.ini` in the
/// current directory if the home directory cannot be determined.
///
/// This can be overridden by the `--config` CLI flag or the
/// `GIT_MIRRORS_CONFIG` environment variable.
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(CONFIG_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}
